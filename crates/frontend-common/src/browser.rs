//! Browser-backed session store and navigator (wasm32 only)
//!
//! Tokens live in local storage under the role's key names.  The Owner token
//! is additionally mirrored into a `token` cookie, which is the only signal
//! the edge route guard can read.

use legado_core::{CoreError, CoreResult, Navigator, Role, SessionStore, SessionToken};
use url::Url;
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, Storage};

/// Name of the cookie mirroring the Owner token
const SESSION_COOKIE: &str = "token";

fn local_storage() -> CoreResult<Storage> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or_else(|| CoreError::storage("local storage unavailable"))
}

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

/// Session store over browser local storage with the Owner cookie mirror.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageSessionStore;

impl LocalStorageSessionStore {
    pub fn new() -> Self {
        Self
    }

    fn mirror_owner_cookie(token: Option<&str>) {
        let Some(document) = html_document() else {
            return;
        };
        let cookie = match token {
            Some(value) => format!("{SESSION_COOKIE}={value}; path=/"),
            None => format!("{SESSION_COOKIE}=; path=/; max-age=0"),
        };
        let _ = document.set_cookie(&cookie);
    }
}

impl SessionStore for LocalStorageSessionStore {
    fn get(&self, role: Role) -> CoreResult<Option<SessionToken>> {
        let storage = local_storage()?;
        let keys = role.storage_keys();

        let Ok(Some(value)) = storage.get_item(keys.token) else {
            return Ok(None);
        };

        let payload = storage
            .get_item(keys.payload)
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or(serde_json::Value::Null);

        let expires_at = keys
            .expires_at
            .and_then(|key| storage.get_item(key).ok().flatten())
            .and_then(|raw| raw.parse::<i64>().ok());

        Ok(Some(SessionToken {
            value,
            payload,
            expires_at,
        }))
    }

    fn set(&self, role: Role, token: SessionToken) -> CoreResult<()> {
        let storage = local_storage()?;
        let keys = role.storage_keys();

        storage
            .set_item(keys.token, &token.value)
            .map_err(|_| CoreError::storage("failed to write token"))?;
        storage
            .set_item(keys.payload, &token.payload.to_string())
            .map_err(|_| CoreError::storage("failed to write payload"))?;
        if let (Some(key), Some(expires_at)) = (keys.expires_at, token.expires_at) {
            storage
                .set_item(key, &expires_at.to_string())
                .map_err(|_| CoreError::storage("failed to write expiry"))?;
        }

        if role == Role::Owner {
            Self::mirror_owner_cookie(Some(&token.value));
        }
        Ok(())
    }

    fn clear(&self, role: Role) -> CoreResult<()> {
        let storage = local_storage()?;
        let keys = role.storage_keys();

        let _ = storage.remove_item(keys.token);
        let _ = storage.remove_item(keys.payload);
        if let Some(key) = keys.expires_at {
            let _ = storage.remove_item(key);
        }

        if role == Role::Owner {
            Self::mirror_owner_cookie(None);
        }
        Ok(())
    }
}

/// Navigator over `window.location`; `assign` is a full-page navigation.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

impl BrowserNavigator {
    pub fn new() -> Self {
        Self
    }
}

impl Navigator for BrowserNavigator {
    fn assign(&self, location: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().assign(location);
        }
    }

    fn current_url(&self) -> Option<Url> {
        let href = web_sys::window()?.location().href().ok()?;
        Url::parse(&href).ok()
    }
}
