//! LegadoBox core session types and storage abstractions

pub mod error;
pub mod navigation;
pub mod store;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use navigation::{Navigator, RecordingNavigator};
pub use store::{MemorySessionStore, SessionStore};
pub use types::{Role, SessionToken, StorageKeys};
