use crate::{
    abstract_trait::{AuthServiceTrait, DynUserCommandRepository, DynUserQueryRepository},
    domain::{
        requests::{CreateUserRequest, SigninRequest, SignupRequest},
        response::{SigninResponse, UserProfileResponse, UserResponse},
    },
};
use async_trait::async_trait;
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    errors::{RepositoryError, ServiceError},
};
use tracing::{error, info};

pub struct AuthService {
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
    hashing: DynHashing,
    jwt: DynJwtService,
}

pub struct AuthServiceDeps {
    pub query: DynUserQueryRepository,
    pub command: DynUserCommandRepository,
    pub hashing: DynHashing,
    pub jwt: DynJwtService,
}

impl AuthService {
    pub fn new(deps: AuthServiceDeps) -> Self {
        let AuthServiceDeps {
            query,
            command,
            hashing,
            jwt,
        } = deps;

        Self {
            query,
            command,
            hashing,
            jwt,
        }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn signup(&self, req: &SignupRequest) -> Result<UserResponse, ServiceError> {
        info!("📝 Signing up user '{}'", req.username);

        if self.query.find_by_username(&req.username).await?.is_some() {
            error!("❌ Username already taken: {}", req.username);
            return Err(ServiceError::UsernameTaken);
        }

        let hashed_password = self.hashing.hash_password(&req.password).await?;

        let create_req = CreateUserRequest {
            username: req.username.clone(),
            password: hashed_password,
            address: req.address.clone(),
            role: req.role,
        };

        let user = self.command.create_user(&create_req).await.map_err(|err| {
            // Lost the race against a concurrent signup with the same name.
            match err {
                RepositoryError::AlreadyExists(_) => ServiceError::UsernameTaken,
                other => ServiceError::Repo(other),
            }
        })?;

        info!(
            "✅ User '{}' registered with role {}",
            user.username, user.role
        );

        Ok(UserResponse::from(user))
    }

    async fn signin(&self, req: &SigninRequest) -> Result<SigninResponse, ServiceError> {
        info!("🔐 Signin attempt for '{}'", req.username);

        let user = match self.query.find_by_username(&req.username).await? {
            Some(user) => user,
            None => {
                error!("❌ Signin for unknown username '{}'", req.username);
                // Unknown usernames get the same answer as a wrong password.
                return Err(ServiceError::IncorrectPassword);
            }
        };

        self.hashing
            .compare_password(&user.password, &req.password)
            .await?;

        let token = self.jwt.generate_token(user.user_id, user.role)?;

        info!("✅ Signin successful for '{}'", user.username);

        Ok(SigninResponse {
            user: UserProfileResponse::from(user),
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MemoryStore, UserRepository};
    use shared::{
        config::{Hashing, JwtConfig},
        model::Role,
    };
    use std::sync::Arc;

    fn service() -> AuthService {
        let repository = UserRepository::new(Arc::new(MemoryStore::new()));

        AuthService::new(AuthServiceDeps {
            query: repository.query,
            command: repository.command,
            hashing: Arc::new(Hashing::new()),
            jwt: Arc::new(JwtConfig::new("unit-test-secret")),
        })
    }

    fn signup_request(username: &str, role: Role) -> SignupRequest {
        SignupRequest {
            username: username.to_string(),
            password: "password123".to_string(),
            address: "123 Test St".to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn signup_stores_a_hash_not_the_password() {
        let service = service();

        let user = service
            .signup(&signup_request("testuser", Role::Admin))
            .await
            .unwrap();

        assert_ne!(user.password, "password123");
        assert!(user.password.starts_with("$2"));
        assert_eq!(user.role, Role::Admin);
    }

    #[tokio::test]
    async fn second_signup_with_same_username_is_rejected() {
        let service = service();

        service
            .signup(&signup_request("testuser", Role::Admin))
            .await
            .unwrap();
        let err = service
            .signup(&signup_request("testuser", Role::User))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::UsernameTaken));
    }

    #[tokio::test]
    async fn signin_returns_token_without_password() {
        let service = service();
        service
            .signup(&signup_request("testuser", Role::Admin))
            .await
            .unwrap();

        let response = service
            .signin(&SigninRequest {
                username: "testuser".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap();

        assert!(!response.token.is_empty());
        assert_eq!(response.user.username, "testuser");
    }

    #[tokio::test]
    async fn signin_with_wrong_password_fails() {
        let service = service();
        service
            .signup(&signup_request("testuser", Role::Admin))
            .await
            .unwrap();

        let err = service
            .signin(&SigninRequest {
                username: "testuser".to_string(),
                password: "wrongpassword".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::IncorrectPassword));
    }

    #[tokio::test]
    async fn signin_with_unknown_username_fails_the_same_way() {
        let service = service();

        let err = service
            .signin(&SigninRequest {
                username: "ghost".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::IncorrectPassword));
    }
}
