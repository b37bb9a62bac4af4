use serde::{Deserialize, Serialize};
use shared::model::Role;

/// Service-to-repository payload. `password` is already hashed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub address: String,
    pub role: Role,
}
