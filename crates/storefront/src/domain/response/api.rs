use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope used by the list, update and delete endpoints:
/// `{"message": ..., "data": ...}`.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: T,
}
