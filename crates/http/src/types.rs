//! API request and response types

use serde::{Deserialize, Serialize};

/// Owner login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Owner login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

/// Owner registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Password recovery request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoverPasswordRequest {
    pub email: String,
}

/// Generic acknowledgement body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Owner profile, denormalized into the Owner session payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// One vault as listed on the Owner dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultSummary {
    pub id: String,
    pub name: String,
    pub recipient_name: String,
    pub recipient_email: String,
    pub created_at: String,
}

/// Vault creation request: recipient, shared password, hint, delivery message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVaultRequest {
    pub name: String,
    pub recipient_name: String,
    pub recipient_email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_message: Option<String>,
}

/// Partial vault update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateVaultRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_message: Option<String>,
}

/// Recipient vault-unlock request (shared password only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultUnlockRequest {
    pub password: String,
}

/// Vault basic info, denormalized into the Recipient session payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultInfo {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_message: Option<String>,
}

/// Recipient session issued on a successful unlock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultUnlockResponse {
    pub token: String,
    pub vault: VaultInfo,
    pub expires_at: i64,
}

/// Kind of content attached to a vault
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Message,
    Photo,
    Video,
}

/// One content item inside a vault
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultContent {
    pub id: String,
    pub kind: ContentKind,
    pub title: String,
    /// Download URL served by the backend's blob storage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub created_at: String,
}

/// Admin login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    pub email: String,
    pub password: String,
}

/// Admin profile, denormalized into the Admin session payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminProfile {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Admin session issued on a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginResponse {
    pub token: String,
    pub admin: AdminProfile,
    pub expires_at: i64,
}
