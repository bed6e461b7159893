//! LegadoBox API client
//!
//! One parameterized factory produces the Owner, Recipient and Admin
//! clients.  Each client attaches that role's bearer token from the session
//! store on every request and applies the session-expiry policy from its
//! [`RoleConfig`] on every failed response.

pub mod auth;
pub mod config;
pub mod error;
pub mod vault;

pub use config::RoleConfig;
use config::base_url_from_env;
use error::ClientError;

use legado_core::{Navigator, SessionStore};
use reqwest::{Client, ClientBuilder, header};
use std::sync::Arc;
use std::time::Duration;

/// LegadoBox API client for one role
#[derive(Clone)]
pub struct LegadoClient {
    client: Client,
    base_url: String,
    config: RoleConfig,
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl LegadoClient {
    /// Create a client for `config`'s role against the configured origin
    pub fn new(
        config: RoleConfig,
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ClientError> {
        Self::builder()
            .role(config)
            .store(store)
            .navigator(navigator)
            .build()
    }

    /// Create a new client builder
    pub fn builder() -> LegadoClientBuilder {
        LegadoClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Role configuration this client was built with
    pub fn config(&self) -> &RoleConfig {
        &self.config
    }

    /// Create a request builder, attaching the role's bearer token when the
    /// store holds one.  Without a token the request goes out bare and the
    /// backend rejects it.
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);

        if let Ok(Some(token)) = self.store.get(self.config.role) {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token.value));
        }

        request
    }

    /// Execute a request, apply the session-expiry policy, and deserialize
    /// the response body.
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(self.handle_error_status(status, message))
        }
    }

    /// Execute a request, discarding any response body.
    pub async fn execute_empty(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<(), ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(self.handle_error_status(status, message))
        }
    }

    /// Send a GET request
    pub async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.execute(self.request(reqwest::Method::GET, path)).await
    }

    /// Send a POST request with a JSON body
    pub async fn post<T: serde::de::DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.execute(self.request(reqwest::Method::POST, path).json(body))
            .await
    }

    /// Send a PUT request with a JSON body
    pub async fn put<T: serde::de::DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.execute(self.request(reqwest::Method::PUT, path).json(body))
            .await
    }

    /// Send a DELETE request
    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        self.execute_empty(self.request(reqwest::Method::DELETE, path))
            .await
    }

    /// Session-expiry interceptor.
    ///
    /// Runs exactly once per failed response and never retries the original
    /// request.  On the role's trigger status the session is purged and the
    /// browser is hard-navigated to the re-authentication entry point; every
    /// other status maps through unchanged for the caller to handle.
    fn handle_error_status(&self, status: http::StatusCode, message: String) -> ClientError {
        let role = self.config.role;

        if self.config.trigger_status == Some(status) {
            if let Err(err) = self.store.clear(role) {
                tracing::warn!(%role, %err, "failed to purge session storage");
            }

            let target = self.config.redirect_target(self.navigator.current_url().as_ref());
            tracing::debug!(%role, status = status.as_u16(), %target, "session expired");
            self.navigator.assign(&target);

            return ClientError::SessionExpired { role };
        }

        ClientError::from_status(status, message)
    }
}

/// Builder for LegadoClient
#[derive(Default)]
pub struct LegadoClientBuilder {
    base_url: Option<String>,
    config: Option<RoleConfig>,
    store: Option<Arc<dyn SessionStore>>,
    navigator: Option<Arc<dyn Navigator>>,
    timeout: Option<Duration>,
}

impl LegadoClientBuilder {
    /// Set the base URL, overriding the environment/default origin
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the role configuration
    pub fn role(mut self, config: RoleConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the session store the client reads tokens from
    pub fn store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the navigator used for session-expiry redirects
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Override the role's default request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<LegadoClient, ClientError> {
        let config = self
            .config
            .ok_or_else(|| ClientError::Configuration("role config is required".into()))?;
        let store = self
            .store
            .ok_or_else(|| ClientError::Configuration("session store is required".into()))?;
        let navigator = self
            .navigator
            .ok_or_else(|| ClientError::Configuration("navigator is required".into()))?;

        let base_url = self
            .base_url
            .unwrap_or_else(base_url_from_env)
            .trim_end_matches('/')
            .to_string();

        #[cfg(not(target_arch = "wasm32"))]
        let client = ClientBuilder::new()
            .user_agent("legado-client/0.1.0")
            .timeout(self.timeout.unwrap_or(config.timeout))
            .build()?;

        #[cfg(target_arch = "wasm32")]
        let client = {
            let _ = self.timeout; // Timeouts not supported on WASM
            ClientBuilder::new()
                .user_agent("legado-client/0.1.0")
                .build()?
        };

        Ok(LegadoClient {
            client,
            base_url,
            config,
            store,
            navigator,
        })
    }
}
