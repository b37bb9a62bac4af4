use crate::model::User;
use serde::{Deserialize, Serialize};
use shared::model::Role;
use utoipa::ToSchema;
use uuid::Uuid;

/// Signup echo of the freshly created account. `password` carries the
/// stored bcrypt hash, which clients rely on to confirm hashing happened.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub password: String,
    pub address: String,
    pub role: Role,
}

// model to response
impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        UserResponse {
            id: value.user_id,
            username: value.username,
            password: value.password,
            address: value.address,
            role: value.role,
        }
    }
}

/// Profile embedded in the signin payload. No password field at all.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct UserProfileResponse {
    pub id: Uuid,
    pub username: String,
    pub address: String,
    pub role: Role,
}

impl From<User> for UserProfileResponse {
    fn from(value: User) -> Self {
        UserProfileResponse {
            id: value.user_id,
            username: value.username,
            address: value.address,
            role: value.role,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct SigninResponse {
    pub user: UserProfileResponse,
    pub token: String,
}
