use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::model::Role;
use uuid::Uuid;

/// Stored account. `password` holds the bcrypt hash, never the plaintext.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: Uuid,
    pub username: String,
    pub password: String,
    pub address: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}
