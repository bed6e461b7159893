//! In-memory session store

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::store::SessionStore;
use crate::types::{Role, SessionToken};

/// In-memory backend, used in tests and native (non-browser) contexts.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    tokens: RwLock<HashMap<Role, SessionToken>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, role: Role) -> CoreResult<Option<SessionToken>> {
        let tokens = self
            .tokens
            .read()
            .map_err(|_| CoreError::storage("session store lock poisoned"))?;
        Ok(tokens.get(&role).cloned())
    }

    fn set(&self, role: Role, token: SessionToken) -> CoreResult<()> {
        let mut tokens = self
            .tokens
            .write()
            .map_err(|_| CoreError::storage("session store lock poisoned"))?;
        tokens.insert(role, token);
        Ok(())
    }

    fn clear(&self, role: Role) -> CoreResult<()> {
        let mut tokens = self
            .tokens
            .write()
            .map_err(|_| CoreError::storage("session store lock poisoned"))?;
        tokens.remove(&role);
        Ok(())
    }
}
