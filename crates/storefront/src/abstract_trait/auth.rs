use crate::domain::{
    requests::{SigninRequest, SignupRequest},
    response::{SigninResponse, UserResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait AuthServiceTrait {
    async fn signup(&self, req: &SignupRequest) -> Result<UserResponse, ServiceError>;
    async fn signin(&self, req: &SigninRequest) -> Result<SigninResponse, ServiceError>;
}
