//! LegadoBox HTTP layer
//!
//! Role-parameterized API clients with session-expiry handling, and the
//! edge route guard that gates page navigation on the Owner session cookie.

pub mod client;
#[cfg(not(target_arch = "wasm32"))]
pub mod middleware;
pub mod types;

pub use client::{LegadoClient, LegadoClientBuilder, RoleConfig, error::ClientError};
