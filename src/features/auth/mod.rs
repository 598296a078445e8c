//! Fake authentication gate.
//!
//! One hardcoded account, no backend. Only route access depends on it.

pub mod guards;
pub mod model;
pub mod service;

pub use guards::{guard_route, RequireAuth, RouteDecision};
pub use model::{AuthAction, AuthState, User};
pub use service::AuthService;
