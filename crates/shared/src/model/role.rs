use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Account role carried in JWT claims and checked by the admin guard.
///
/// Accounts that do not ask for a role on signup get `Admin`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Role {
    User,
    #[default]
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "User"),
            Role::Admin => write!(f, "Admin"),
        }
    }
}
