use serde::Serialize;
use utoipa::ToSchema;

/// Error body used by auth, catalog and order endpoints: `{"detail": "..."}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Error body used by the admin guard: `{"error": "..."}`.
///
/// Admin rejections deliberately use a different key than every other
/// failure, and clients match on it.
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthErrorResponse {
    pub error: String,
}
