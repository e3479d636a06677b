//! Authentication module

pub mod context;
pub mod session;
pub mod storage;

// Re-export commonly used items
pub use context::{AuthAction, AuthProvider, use_auth};
pub use storage::{BrowserStorage, ContextAuth};
