//! Session service
//!
//! One client per role against the shared backend origin, plus the
//! login/logout flows that keep the session store in sync with successful
//! authentication responses.

use std::sync::Arc;

use chrono::Utc;
use legado_core::{CoreResult, Navigator, Role, SessionStore, SessionToken};
use legado_http::client::{LegadoClient, RoleConfig, error::ClientError};
use legado_http::types::{
    AdminLoginRequest, AdminProfile, LoginRequest, RecoverPasswordRequest, RegisterRequest,
    UserProfile, VaultInfo, VaultUnlockRequest,
};

/// Facade over the three role clients and the session store.
#[derive(Clone)]
pub struct SessionService {
    store: Arc<dyn SessionStore>,
    owner: LegadoClient,
    recipient: LegadoClient,
    admin: LegadoClient,
}

impl SessionService {
    /// Build against the configured backend origin (`LEGADOBOX_API_URL` or
    /// the production default).
    pub fn new(
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ClientError> {
        Self::with_base_url(legado_http::client::config::base_url_from_env(), store, navigator)
    }

    /// Build against an explicit backend origin.
    pub fn with_base_url(
        base_url: impl Into<String>,
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into();
        let build = |config: RoleConfig| {
            LegadoClient::builder()
                .base_url(base_url.clone())
                .role(config)
                .store(store.clone())
                .navigator(navigator.clone())
                .build()
        };

        Ok(Self {
            store: store.clone(),
            owner: build(RoleConfig::owner())?,
            recipient: build(RoleConfig::recipient())?,
            admin: build(RoleConfig::admin())?,
        })
    }

    /// Owner client (vault management, profile)
    pub fn owner(&self) -> &LegadoClient {
        &self.owner
    }

    /// Recipient client (vault contents)
    pub fn recipient(&self) -> &LegadoClient {
        &self.recipient
    }

    /// Admin client
    pub fn admin(&self) -> &LegadoClient {
        &self.admin
    }

    /// Authenticate an Owner and persist the session.
    pub async fn login(&self, email: String, password: String) -> Result<UserProfile, ClientError> {
        let response = self.owner.login(LoginRequest { email, password }).await?;
        self.store.set(
            Role::Owner,
            SessionToken::new(response.token, serde_json::to_value(&response.user)?),
        )?;
        Ok(response.user)
    }

    /// Register a new Owner account and persist the session.
    pub async fn register(&self, request: RegisterRequest) -> Result<UserProfile, ClientError> {
        let response = self.owner.register(request).await?;
        self.store.set(
            Role::Owner,
            SessionToken::new(response.token, serde_json::to_value(&response.user)?),
        )?;
        Ok(response.user)
    }

    /// Request a password-recovery email; no session change.
    pub async fn recover_password(&self, email: String) -> Result<(), ClientError> {
        self.owner
            .recover_password(RecoverPasswordRequest { email })
            .await?;
        Ok(())
    }

    /// Unlock a vault as a Recipient and persist the expiring session.
    pub async fn unlock_vault(
        &self,
        vault_id: &str,
        password: String,
    ) -> Result<VaultInfo, ClientError> {
        let response = self
            .recipient
            .unlock_vault(vault_id, VaultUnlockRequest { password })
            .await?;
        self.store.set(
            Role::Recipient,
            SessionToken::with_expiry(
                response.token,
                serde_json::to_value(&response.vault)?,
                response.expires_at,
            ),
        )?;
        Ok(response.vault)
    }

    /// Authenticate an Admin and persist the expiring session.
    pub async fn admin_login(
        &self,
        email: String,
        password: String,
    ) -> Result<AdminProfile, ClientError> {
        let response = self
            .admin
            .admin_login(AdminLoginRequest { email, password })
            .await?;
        self.store.set(
            Role::Admin,
            SessionToken::with_expiry(
                response.token,
                serde_json::to_value(&response.admin)?,
                response.expires_at,
            ),
        )?;
        Ok(response.admin)
    }

    /// Drop one role's session.
    pub fn logout(&self, role: Role) -> CoreResult<()> {
        tracing::debug!(%role, "logout");
        self.store.clear(role)
    }

    /// Read a persisted session, dropping it when the client-side expiry has
    /// passed.
    pub fn restore(&self, role: Role) -> CoreResult<Option<SessionToken>> {
        match self.store.get(role)? {
            Some(token) if token.is_expired(Utc::now()) => {
                tracing::debug!(%role, "stored session expired");
                self.store.clear(role)?;
                Ok(None)
            }
            other => Ok(other),
        }
    }
}
