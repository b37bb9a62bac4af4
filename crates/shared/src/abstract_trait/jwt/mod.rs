use crate::{config::TokenClaims, errors::ServiceError, model::Role};
use std::sync::Arc;
use uuid::Uuid;

pub type DynJwtService = Arc<dyn JwtServiceTrait + Send + Sync>;

pub trait JwtServiceTrait: Send + Sync + std::fmt::Debug {
    fn generate_token(&self, user_id: Uuid, role: Role) -> Result<String, ServiceError>;
    fn verify_token(&self, token: &str) -> Result<TokenClaims, ServiceError>;
}
