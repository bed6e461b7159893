//! Edge route guard
//!
//! Stateless gate evaluated before any page logic runs.  Classifies the
//! requested path and redirects on the presence of the Owner session cookie
//! alone; the cookie value is never parsed or validated.  Recipient and
//! Admin sessions are not gated here.

use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

/// Owner session presence signal (opaque value, not parsed)
pub const SESSION_COOKIE: &str = "token";

/// Path prefixes that require an Owner session
const PROTECTED_PREFIXES: [&str; 8] = [
    "/administracao",
    "/destinatarios",
    "/cofres",
    "/cofre",
    "/criar-cofre",
    "/criar-cofre-conteudo",
    "/criar-cofre-finalizar",
    "/perfil",
];

/// Exact paths that redirect away when a session already exists
const AUTH_ONLY_PATHS: [&str; 3] = ["/login", "/cadastro", "/recuperar-senha"];

/// Never intercepted, regardless of classification
const EXCLUDED_PREFIXES: [&str; 3] = ["/api", "/_next/static", "/_next/image"];
const EXCLUDED_PATHS: [&str; 1] = ["/favicon.ico"];

/// Classification of one request path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Requires a session presence signal
    Protected,
    /// Login/register/password-reset; redirects away when already signed in
    AuthOnly,
    /// Passes through unchanged
    Public,
}

/// Classify a request path, or `None` for paths the guard never evaluates
/// (API and static-asset prefixes).
pub fn classify(path: &str) -> Option<RouteClass> {
    if EXCLUDED_PATHS.contains(&path) || EXCLUDED_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return None;
    }
    if AUTH_ONLY_PATHS.contains(&path) {
        return Some(RouteClass::AuthOnly);
    }
    if PROTECTED_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return Some(RouteClass::Protected);
    }
    Some(RouteClass::Public)
}

/// Whether the Owner session cookie is present.  Presence only; the value is
/// opaque to this layer.
fn has_session_cookie(headers: &HeaderMap) -> bool {
    headers
        .get_all(http::header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .any(|pair| {
            pair.trim()
                .split_once('=')
                .is_some_and(|(name, _)| name.trim() == SESSION_COOKIE)
        })
}

/// Middleware applying the guard's decision table.
pub async fn route_guard_middleware(request: Request, next: Next) -> Response {
    let path = request.uri().path();

    let Some(class) = classify(path) else {
        return next.run(request).await;
    };

    let authenticated = has_session_cookie(request.headers());

    match (class, authenticated) {
        (RouteClass::Protected, false) => {
            tracing::debug!(%path, "unauthenticated access to protected route");
            Redirect::to("/login").into_response()
        }
        (RouteClass::AuthOnly, true) => {
            tracing::debug!(%path, "authenticated access to auth-only route");
            Redirect::to("/").into_response()
        }
        _ => next.run(request).await,
    }
}
