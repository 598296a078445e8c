//! Route guard for the protected part of the application.
//!
//! Everything under `/app` requires a logged-in user; anyone else is sent
//! back to the home page.

use crate::core::error::{AppError, Result};
use crate::features::auth::model::User;
use crate::features::auth::service::AuthService;
use crate::features::navigation::AppRoute;

pub const UNAUTHENTICATED_REDIRECT: &str = "/";

/// Proof that a user is logged in.
///
/// # Example
/// ```ignore
/// let RequireAuth(user) = RequireAuth::from_auth(&auth)?;
/// ```
pub struct RequireAuth(pub User);

impl RequireAuth {
    pub fn from_auth(auth: &AuthService) -> Result<Self> {
        auth.current_user()
            .filter(|_| auth.is_authenticated())
            .map(RequireAuth)
            .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RouteDecision {
    Render(AppRoute),
    Redirect(&'static str),
}

/// Decide whether a route may be shown to the current session
pub fn guard_route(auth: &AuthService, route: AppRoute) -> RouteDecision {
    if !route.is_protected() {
        return RouteDecision::Render(route);
    }

    match RequireAuth::from_auth(auth) {
        Ok(_) => RouteDecision::Render(route),
        Err(_) => {
            tracing::debug!("Redirecting unauthenticated visit to {}", route.path());
            RouteDecision::Redirect(UNAUTHENTICATED_REDIRECT)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_routes_render_without_login() {
        let auth = AuthService::new();

        assert_eq!(
            guard_route(&auth, AppRoute::Pricing),
            RouteDecision::Render(AppRoute::Pricing)
        );
        assert_eq!(
            guard_route(&auth, AppRoute::Login),
            RouteDecision::Render(AppRoute::Login)
        );
    }

    #[test]
    fn test_protected_routes_redirect_until_login() {
        let auth = AuthService::new();

        assert_eq!(
            guard_route(&auth, AppRoute::Countries),
            RouteDecision::Redirect("/")
        );

        auth.login("jack@example.com", "qwerty").unwrap();
        assert_eq!(
            guard_route(&auth, AppRoute::Countries),
            RouteDecision::Render(AppRoute::Countries)
        );

        auth.logout();
        assert_eq!(
            guard_route(&auth, AppRoute::Cities),
            RouteDecision::Redirect("/")
        );
    }

    #[test]
    fn test_require_auth_yields_user() {
        let auth = AuthService::new();
        assert!(RequireAuth::from_auth(&auth).is_err());

        auth.login("jack@example.com", "qwerty").unwrap();
        let RequireAuth(user) = RequireAuth::from_auth(&auth).unwrap();
        assert_eq!(user.email, "jack@example.com");
    }
}
