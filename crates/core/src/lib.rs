//! Quizy navigation core: route table, token decoding and the auth guard

pub mod config;
pub mod error;
pub mod guard;
pub mod route;
pub mod router;
pub mod table;
pub mod token;

#[cfg(any(test, feature = "tests"))]
pub mod testing;

pub use self::config::NavigationConfig;
pub use error::{NavigationError, Result, TokenError};
pub use guard::{AuthModule, GuardContext, NavigationDecision, NavigationGuard, TokenStorage};
pub use route::{RouteRecord, View};
pub use router::{Navigation, Router};
pub use table::{Location, RouteTable};
pub use token::Claims;
