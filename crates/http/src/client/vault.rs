//! Vault management client methods

use super::{LegadoClient, error::ClientError};
use crate::types::{
    CreateVaultRequest, UpdateVaultRequest, UserProfile, VaultContent, VaultSummary,
};

impl LegadoClient {
    /// List the Owner's vaults
    pub async fn list_vaults(&self) -> Result<Vec<VaultSummary>, ClientError> {
        self.get("/vaults").await
    }

    /// Fetch one vault
    pub async fn get_vault(&self, vault_id: &str) -> Result<VaultSummary, ClientError> {
        self.get(&format!("/vaults/{vault_id}")).await
    }

    /// Create a vault
    pub async fn create_vault(
        &self,
        request: CreateVaultRequest,
    ) -> Result<VaultSummary, ClientError> {
        self.post("/vaults", &request).await
    }

    /// Update a vault's configuration
    pub async fn update_vault(
        &self,
        vault_id: &str,
        request: UpdateVaultRequest,
    ) -> Result<VaultSummary, ClientError> {
        self.put(&format!("/vaults/{vault_id}"), &request).await
    }

    /// Delete a vault
    pub async fn delete_vault(&self, vault_id: &str) -> Result<(), ClientError> {
        self.delete(&format!("/vaults/{vault_id}")).await
    }

    /// List the contents of the unlocked vault (Recipient session)
    pub async fn vault_contents(&self, vault_id: &str) -> Result<Vec<VaultContent>, ClientError> {
        self.get(&format!("/vaults/{vault_id}/contents")).await
    }

    /// List registered users (Admin session)
    pub async fn list_users(&self) -> Result<Vec<UserProfile>, ClientError> {
        self.get("/admin/users").await
    }
}
