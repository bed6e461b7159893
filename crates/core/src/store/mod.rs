//! Session repository abstraction
//!
//! Three independent token namespaces with uniform get/set/clear. Backends
//! are synchronous; browser storage and the in-memory fake both complete
//! without suspending.

mod memory;

pub use memory::MemorySessionStore;

use crate::error::CoreResult;
use crate::types::{Role, SessionToken};

/// Uniform persistence operations over the three token namespaces.
pub trait SessionStore: Send + Sync {
    /// Read the live token for a role, if any. No side effects.
    fn get(&self, role: Role) -> CoreResult<Option<SessionToken>>;

    /// Replace the token for a role. Last write wins; no merge.
    fn set(&self, role: Role, token: SessionToken) -> CoreResult<()>;

    /// Remove all sub-keys for a role. Idempotent.
    fn clear(&self, role: Role) -> CoreResult<()>;
}
