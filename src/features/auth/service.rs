use tokio::sync::watch;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::{AuthAction, AuthState, User};
use crate::shared::constants::{FAKE_USER_EMAIL, FAKE_USER_PASSWORD};

/// Stub authentication gate holding one hardcoded credential pair
pub struct AuthService {
    state: watch::Sender<AuthState>,
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthService {
    pub fn new() -> Self {
        let (state, _) = watch::channel(AuthState::default());
        Self { state }
    }

    /// Log in when both email and password match exactly
    ///
    /// On mismatch the state is left untouched.
    pub fn login(&self, email: &str, password: &str) -> Result<User> {
        if email != FAKE_USER_EMAIL || password != FAKE_USER_PASSWORD {
            tracing::warn!("Rejected login attempt for {}", email);
            return Err(AppError::Unauthorized(
                "Invalid email or password".to_string(),
            ));
        }

        let user = User::fake();
        self.dispatch(AuthAction::Login(user.clone()));
        tracing::info!("User logged in: {}", user.email);

        Ok(user)
    }

    pub fn logout(&self) {
        self.dispatch(AuthAction::Logout);
        tracing::info!("User logged out");
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    fn dispatch(&self, action: AuthAction) {
        self.state
            .send_modify(|state| *state = std::mem::take(state).reduce(action));
    }
}
