//! Integration tests for the LegadoBox HTTP client

use std::sync::Arc;
use std::time::Duration;

use legado_core::{MemorySessionStore, RecordingNavigator, Role, SessionStore, SessionToken};
use legado_http::client::{LegadoClient, RoleConfig, error::ClientError};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn build_client(
    config: RoleConfig,
    base_url: &str,
    navigator: Arc<RecordingNavigator>,
) -> (LegadoClient, Arc<MemorySessionStore>) {
    let store = Arc::new(MemorySessionStore::new());
    let client = LegadoClient::builder()
        .base_url(base_url)
        .role(config)
        .store(store.clone())
        .navigator(navigator)
        .build()
        .unwrap();
    (client, store)
}

#[tokio::test]
async fn builder_requires_role_store_and_navigator() {
    let result = LegadoClient::builder().base_url("http://localhost").build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn builder_trims_trailing_slash() {
    let (client, _) = build_client(
        RoleConfig::owner(),
        "http://localhost:8080/",
        Arc::new(RecordingNavigator::new()),
    );
    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[tokio::test]
async fn bearer_token_is_attached_when_present() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vaults"))
        .and(header("authorization", "Bearer owner-token-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let (client, store) = build_client(
        RoleConfig::owner(),
        &mock_server.uri(),
        Arc::new(RecordingNavigator::new()),
    );
    store
        .set(
            Role::Owner,
            SessionToken::new("owner-token-123", json!({"name": "Ana"})),
        )
        .unwrap();

    let vaults = client.list_vaults().await.unwrap();
    assert!(vaults.is_empty());
}

#[tokio::test]
async fn request_without_token_carries_no_authorization_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vaults"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let (client, _) = build_client(
        RoleConfig::owner(),
        &mock_server.uri(),
        Arc::new(RecordingNavigator::new()),
    );

    let _: Vec<serde_json::Value> = client.get("/vaults").await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn recipient_401_purges_session_and_redirects_with_vault_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let navigator = Arc::new(RecordingNavigator::at(
        "https://legadobox.com.br/cofre?vaultId=LB-2024-001",
    ));
    let (client, store) = build_client(
        RoleConfig::recipient(),
        &mock_server.uri(),
        navigator.clone(),
    );
    store
        .set(
            Role::Recipient,
            SessionToken::with_expiry("vault-token", json!({"id": "LB-2024-001"}), 1_900_000_000),
        )
        .unwrap();

    let result = client.vault_contents("LB-2024-001").await;

    assert!(matches!(
        result,
        Err(ClientError::SessionExpired {
            role: Role::Recipient
        })
    ));
    assert_eq!(store.get(Role::Recipient).unwrap(), None);
    assert_eq!(
        navigator.last_assigned().as_deref(),
        Some("/login-destinatario?vaultId=LB-2024-001")
    );
}

#[tokio::test]
async fn recipient_401_without_vault_id_redirects_to_bare_login() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let navigator = Arc::new(RecordingNavigator::at("https://legadobox.com.br/cofre"));
    let (client, _) = build_client(
        RoleConfig::recipient(),
        &mock_server.uri(),
        navigator.clone(),
    );

    let result: Result<Vec<serde_json::Value>, _> = client.get("/vaults/x/contents").await;

    assert!(result.is_err());
    assert_eq!(navigator.last_assigned().as_deref(), Some("/login-destinatario"));
}

#[tokio::test]
async fn admin_403_purges_session_and_redirects_to_login() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let navigator = Arc::new(RecordingNavigator::at("https://legadobox.com.br/administracao"));
    let (client, store) = build_client(RoleConfig::admin(), &mock_server.uri(), navigator.clone());
    store
        .set(
            Role::Admin,
            SessionToken::with_expiry("admin-token", json!({"name": "root"}), 1_900_000_000),
        )
        .unwrap();

    let result = client.list_users().await;

    assert!(matches!(
        result,
        Err(ClientError::SessionExpired { role: Role::Admin })
    ));
    assert_eq!(store.get(Role::Admin).unwrap(), None);
    assert_eq!(navigator.last_assigned().as_deref(), Some("/login"));
}

#[tokio::test]
async fn admin_401_is_not_a_trigger() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad token"))
        .mount(&mock_server)
        .await;

    let navigator = Arc::new(RecordingNavigator::new());
    let (client, store) = build_client(RoleConfig::admin(), &mock_server.uri(), navigator.clone());
    store
        .set(Role::Admin, SessionToken::new("admin-token", json!({})))
        .unwrap();

    let result = client.list_users().await;

    // Non-trigger statuses pass through untouched for the caller to handle
    assert!(matches!(result, Err(ClientError::AuthenticationFailed(_))));
    assert!(store.get(Role::Admin).unwrap().is_some());
    assert_eq!(navigator.last_assigned(), None);
}

// Pins the present behavior: the Owner client's expiry interceptor is
// disabled, so a 401 leaves storage and navigation untouched.
#[tokio::test]
async fn owner_401_leaves_session_untouched() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let navigator = Arc::new(RecordingNavigator::at("https://legadobox.com.br/cofres"));
    let (client, store) = build_client(RoleConfig::owner(), &mock_server.uri(), navigator.clone());
    let token = SessionToken::new("owner-token", json!({"name": "Ana"}));
    store.set(Role::Owner, token.clone()).unwrap();

    let result = client.list_vaults().await;

    assert!(matches!(result, Err(ClientError::AuthenticationFailed(_))));
    assert_eq!(store.get(Role::Owner).unwrap(), Some(token));
    assert_eq!(navigator.last_assigned(), None);
}

#[tokio::test]
async fn timeout_is_a_connectivity_error_with_no_side_effects() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let navigator = Arc::new(RecordingNavigator::new());
    let store = Arc::new(MemorySessionStore::new());
    store
        .set(Role::Recipient, SessionToken::new("vault-token", json!({})))
        .unwrap();
    let client = LegadoClient::builder()
        .base_url(mock_server.uri())
        .role(RoleConfig::recipient())
        .store(store.clone())
        .navigator(navigator.clone())
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let result: Result<Vec<serde_json::Value>, _> = client.get("/vaults/x/contents").await;

    let err = result.unwrap_err();
    assert!(err.is_connectivity(), "{err}");
    // Offline is not unauthenticated: no purge, no navigation
    assert!(store.get(Role::Recipient).unwrap().is_some());
    assert_eq!(navigator.last_assigned(), None);
}

#[tokio::test]
async fn server_errors_pass_through_with_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let (client, _) = build_client(
        RoleConfig::owner(),
        &mock_server.uri(),
        Arc::new(RecordingNavigator::new()),
    );

    let result = client
        .login(legado_http::types::LoginRequest {
            email: "ana@example.com".into(),
            password: "segredo".into(),
        })
        .await;

    match result {
        Err(ClientError::ServerError { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn login_response_deserializes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "owner-token-123",
            "user": {"id": "u1", "name": "Ana", "email": "ana@example.com"}
        })))
        .mount(&mock_server)
        .await;

    let (client, _) = build_client(
        RoleConfig::owner(),
        &mock_server.uri(),
        Arc::new(RecordingNavigator::new()),
    );

    let response = client
        .login(legado_http::types::LoginRequest {
            email: "ana@example.com".into(),
            password: "segredo".into(),
        })
        .await
        .unwrap();

    assert_eq!(response.token, "owner-token-123");
    assert_eq!(response.user.name, "Ana");
}
