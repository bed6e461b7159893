//! Middleware components for HTTP request processing

pub mod route_guard;

pub use route_guard::{RouteClass, SESSION_COOKIE, classify, route_guard_middleware};
