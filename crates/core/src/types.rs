//! Session roles and tokens

use serde::{Deserialize, Serialize};

/// The three independent session namespaces.
///
/// Each role holds at most one live token at a time; writing a new token for
/// a role fully replaces the old one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The authenticated user who creates and manages vaults
    Owner,
    /// A person accessing a specific vault via its shared password
    Recipient,
    /// Elevated-privilege session with its own token namespace
    Admin,
}

/// Browser storage key names for one role.
///
/// `expires_at` is `None` for roles whose sessions carry no client-side
/// expiry (Owner).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageKeys {
    pub token: &'static str,
    pub payload: &'static str,
    pub expires_at: Option<&'static str>,
}

impl Role {
    /// Local-storage key names for this role's sub-keys.
    pub const fn storage_keys(self) -> StorageKeys {
        match self {
            Role::Owner => StorageKeys {
                token: "token",
                payload: "user",
                expires_at: None,
            },
            Role::Recipient => StorageKeys {
                token: "vault_token",
                payload: "vault_data",
                expires_at: Some("vault_expires_at"),
            },
            Role::Admin => StorageKeys {
                token: "admin_token",
                payload: "admin_data",
                expires_at: Some("admin_expires_at"),
            },
        }
    }

    /// Stable lowercase name, used in logs
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Recipient => "recipient",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An opaque bearer credential plus its denormalized metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionToken {
    /// Opaque bearer string presented on each API call
    pub value: String,
    /// Role-dependent denormalized payload (user profile, vault info, ...)
    pub payload: serde_json::Value,
    /// Unix timestamp; informational only, enforcement is server-side
    pub expires_at: Option<i64>,
}

impl SessionToken {
    /// Create a token without an expiry
    pub fn new(value: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            value: value.into(),
            payload,
            expires_at: None,
        }
    }

    /// Create a token with a Unix-timestamp expiry
    pub fn with_expiry(
        value: impl Into<String>,
        payload: serde_json::Value,
        expires_at: i64,
    ) -> Self {
        Self {
            value: value.into(),
            payload,
            expires_at: Some(expires_at),
        }
    }

    /// Whether the token's client-side expiry has passed.
    ///
    /// Tokens without an expiry never report expired.
    pub fn is_expired(&self, now: chrono::DateTime<chrono::Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => now.timestamp() >= expires_at,
            None => false,
        }
    }
}
