use crate::{abstract_trait::HashingTrait, errors::ServiceError};
use async_trait::async_trait;
use bcrypt::{hash, verify};

// Cost 4 keeps signup/signin latency tolerable; raise it before exposing
// this to real traffic.
const BCRYPT_COST: u32 = 4;

#[derive(Clone)]
pub struct Hashing;

impl Hashing {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Hashing {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HashingTrait for Hashing {
    async fn hash_password(&self, password: &str) -> Result<String, ServiceError> {
        let hashed = hash(password, BCRYPT_COST).map_err(ServiceError::Bcrypt)?;
        Ok(hashed)
    }

    async fn compare_password(
        &self,
        hashed_password: &str,
        password: &str,
    ) -> Result<(), ServiceError> {
        let is_valid = verify(password, hashed_password).map_err(ServiceError::Bcrypt)?;

        if is_valid {
            Ok(())
        } else {
            Err(ServiceError::IncorrectPassword)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_is_not_the_plaintext() {
        let hashing = Hashing::new();

        let hashed = hashing.hash_password("password123").await.unwrap();

        assert_ne!(hashed, "password123");
        assert!(hashed.starts_with("$2"));
    }

    #[tokio::test]
    async fn compare_accepts_the_original_password() {
        let hashing = Hashing::new();

        let hashed = hashing.hash_password("password123").await.unwrap();

        assert!(hashing.compare_password(&hashed, "password123").await.is_ok());
    }

    #[tokio::test]
    async fn compare_rejects_a_wrong_password() {
        let hashing = Hashing::new();

        let hashed = hashing.hash_password("password123").await.unwrap();
        let err = hashing
            .compare_password(&hashed, "wrongpassword")
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::IncorrectPassword));
    }
}
