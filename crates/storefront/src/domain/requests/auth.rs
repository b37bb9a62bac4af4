use serde::{Deserialize, Serialize};
use shared::model::Role;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "testuser")]
    pub username: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[schema(example = "password123")]
    pub password: String,

    #[validate(length(min = 1, message = "Address is required"))]
    #[schema(example = "123 Test St")]
    pub address: String,

    /// Accounts default to `Admin` when no role is sent.
    #[serde(default)]
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SigninRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "testuser")]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "password123")]
    pub password: String,
}
