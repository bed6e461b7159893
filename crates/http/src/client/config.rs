//! Per-role client configuration
//!
//! The three role clients differ only in timeout, which status code means
//! "session invalid", and where to send the user to re-authenticate. Those
//! differences live here as data; the client logic is shared.

use http::StatusCode;
use legado_core::Role;
use std::time::Duration;
use url::Url;

/// Environment variable overriding the backend origin
pub const BASE_URL_ENV: &str = "LEGADOBOX_API_URL";

/// Production origin used by all roles when the override is unset
pub const DEFAULT_BASE_URL: &str = "https://api.legadobox.com.br";

/// Same-origin base path for deployments that proxy the backend under the
/// web origin; pass to the builder in place of an absolute origin (browser
/// clients only)
pub const SAME_ORIGIN_BASE: &str = "/api";

/// Query parameter carried into the recipient re-login redirect
const VAULT_ID_PARAM: &str = "vaultId";

/// Backend base URL shared by all role clients.
pub fn base_url_from_env() -> String {
    std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

/// Behavioral configuration for one role's client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleConfig {
    /// Which session namespace this client reads and purges
    pub role: Role,
    /// Request timeout enforced by the HTTP client
    pub timeout: Duration,
    /// Status code that invalidates the session; `None` disables the
    /// session-expiry interceptor for this role
    pub trigger_status: Option<StatusCode>,
    /// Re-authentication entry point navigated to on session expiry
    pub login_path: &'static str,
    /// Carry the current URL's vault identifier into the redirect target
    pub preserve_vault_query: bool,
}

impl RoleConfig {
    /// Owner client: 10s timeout, expiry handling disabled.
    ///
    /// Owner sessions are gated only by the edge route guard's cookie check;
    /// a 401 on an Owner request is surfaced to the caller untouched.
    pub const fn owner() -> Self {
        Self {
            role: Role::Owner,
            timeout: Duration::from_secs(10),
            trigger_status: None,
            login_path: "/login",
            preserve_vault_query: false,
        }
    }

    /// Recipient client: 30s timeout (vault content payloads), 401 purges
    /// the session and returns to the vault's own login screen.
    pub const fn recipient() -> Self {
        Self {
            role: Role::Recipient,
            timeout: Duration::from_secs(30),
            trigger_status: Some(StatusCode::UNAUTHORIZED),
            login_path: "/login-destinatario",
            preserve_vault_query: true,
        }
    }

    /// Admin client: 30s timeout, 403 purges the session.
    pub const fn admin() -> Self {
        Self {
            role: Role::Admin,
            timeout: Duration::from_secs(30),
            trigger_status: Some(StatusCode::FORBIDDEN),
            login_path: "/login",
            preserve_vault_query: false,
        }
    }

    /// Destination of the session-expiry redirect.
    ///
    /// For the recipient role the vault identifier is read from the current
    /// URL's query string so the user lands back on the correct vault's
    /// login screen rather than a generic one.
    pub fn redirect_target(&self, current_url: Option<&Url>) -> String {
        if self.preserve_vault_query
            && let Some(url) = current_url
            && let Some((_, vault_id)) = url.query_pairs().find(|(k, _)| k == VAULT_ID_PARAM)
        {
            return format!("{}?{}={}", self.login_path, VAULT_ID_PARAM, vault_id);
        }
        self.login_path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_configs_match_contract() {
        let owner = RoleConfig::owner();
        assert_eq!(owner.timeout, Duration::from_secs(10));
        assert_eq!(owner.trigger_status, None);

        let recipient = RoleConfig::recipient();
        assert_eq!(recipient.timeout, Duration::from_secs(30));
        assert_eq!(recipient.trigger_status, Some(StatusCode::UNAUTHORIZED));
        assert_eq!(recipient.login_path, "/login-destinatario");

        let admin = RoleConfig::admin();
        assert_eq!(admin.trigger_status, Some(StatusCode::FORBIDDEN));
        assert_eq!(admin.login_path, "/login");
    }

    #[test]
    fn recipient_redirect_preserves_vault_id() {
        let current = Url::parse("https://legadobox.com.br/cofre?vaultId=LB-2024-001").unwrap();
        let target = RoleConfig::recipient().redirect_target(Some(&current));
        assert_eq!(target, "/login-destinatario?vaultId=LB-2024-001");
    }

    #[test]
    fn recipient_redirect_without_vault_id_is_bare() {
        let current = Url::parse("https://legadobox.com.br/cofre").unwrap();
        assert_eq!(
            RoleConfig::recipient().redirect_target(Some(&current)),
            "/login-destinatario"
        );
        assert_eq!(
            RoleConfig::recipient().redirect_target(None),
            "/login-destinatario"
        );
    }

    #[test]
    fn non_recipient_redirects_ignore_the_query() {
        let current = Url::parse("https://legadobox.com.br/cofre?vaultId=LB-2024-001").unwrap();
        assert_eq!(RoleConfig::admin().redirect_target(Some(&current)), "/login");
    }
}
