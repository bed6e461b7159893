//! Authentication API client methods

use super::{LegadoClient, error::ClientError};
use crate::types::{
    AdminLoginRequest, AdminLoginResponse, LoginRequest, LoginResponse, MessageResponse,
    RecoverPasswordRequest, RegisterRequest, UserProfile, VaultUnlockRequest, VaultUnlockResponse,
};

impl LegadoClient {
    /// Authenticate an Owner
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ClientError> {
        self.post("/auth/login", &request).await
    }

    /// Register a new Owner account
    pub async fn register(&self, request: RegisterRequest) -> Result<LoginResponse, ClientError> {
        self.post("/auth/register", &request).await
    }

    /// Request a password-recovery email
    pub async fn recover_password(
        &self,
        request: RecoverPasswordRequest,
    ) -> Result<MessageResponse, ClientError> {
        self.post("/auth/recover-password", &request).await
    }

    /// Fetch the authenticated Owner's profile
    pub async fn profile(&self) -> Result<UserProfile, ClientError> {
        self.get("/users/me").await
    }

    /// Authenticate a Recipient into a vault with its shared password
    pub async fn unlock_vault(
        &self,
        vault_id: &str,
        request: VaultUnlockRequest,
    ) -> Result<VaultUnlockResponse, ClientError> {
        self.post(&format!("/vaults/{vault_id}/unlock"), &request)
            .await
    }

    /// Authenticate an Admin
    pub async fn admin_login(
        &self,
        request: AdminLoginRequest,
    ) -> Result<AdminLoginResponse, ClientError> {
        self.post("/admin/login", &request).await
    }
}
