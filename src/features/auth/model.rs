use serde::{Deserialize, Serialize};

use crate::shared::constants::{FAKE_USER_AVATAR, FAKE_USER_EMAIL, FAKE_USER_NAME};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub avatar: String,
}

impl User {
    /// The single account the fake gate knows about
    pub fn fake() -> Self {
        Self {
            name: FAKE_USER_NAME.to_string(),
            email: FAKE_USER_EMAIL.to_string(),
            avatar: FAKE_USER_AVATAR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    Login(User),
    Logout,
}

impl AuthState {
    pub fn reduce(self, action: AuthAction) -> Self {
        match action {
            AuthAction::Login(user) => Self {
                user: Some(user),
                is_authenticated: true,
            },
            AuthAction::Logout => Self {
                user: None,
                is_authenticated: false,
            },
        }
    }
}
