//! Shared frontend glue for LegadoBox user interfaces
//!
//! Wires the session store, the navigation side effect and the three role
//! clients into one service application code talks to.  Browser-backed
//! store/navigator implementations are available on wasm32 only; native
//! callers (and tests) inject the in-memory backends from `legado-core`.

#[cfg(target_arch = "wasm32")]
pub mod browser;
pub mod session;

#[cfg(target_arch = "wasm32")]
pub use browser::{BrowserNavigator, LocalStorageSessionStore};
pub use session::SessionService;
