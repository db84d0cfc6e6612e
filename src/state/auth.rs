#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::AdminUser;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<AdminUser>,
    pub loading: bool,
}
