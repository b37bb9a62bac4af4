use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::ServiceError;

pub type DynHashing = Arc<dyn HashingTrait + Send + Sync>;

/// Password hashing seam. Implementations own the cost parameters;
/// callers only see opaque hashes.
#[async_trait]
pub trait HashingTrait {
    /// Hashes a plaintext password for storage.
    async fn hash_password(&self, password: &str) -> Result<String, ServiceError>;

    /// Checks a plaintext candidate against a stored hash. A mismatch is
    /// reported as [`ServiceError::IncorrectPassword`], not as `Ok(false)`.
    async fn compare_password(&self, hashed_password: &str, password: &str)
    -> Result<(), ServiceError>;
}
