use crate::{
    abstract_trait::{
        DynUserCommandRepository, DynUserQueryRepository, UserCommandRepositoryTrait,
        UserQueryRepositoryTrait,
    },
    domain::requests::CreateUserRequest,
    model::User as UserModel,
    repository::store::Db,
};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use shared::errors::RepositoryError;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

pub struct UserQueryRepository {
    db: Db,
}

impl UserQueryRepository {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for UserQueryRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserModel>, RepositoryError> {
        Ok(self.db.users.get(&id).map(|user| user.clone()))
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserModel>, RepositoryError> {
        let Some(user_id) = self.db.usernames.get(username).map(|entry| *entry) else {
            return Ok(None);
        };

        Ok(self.db.users.get(&user_id).map(|user| user.clone()))
    }
}

pub struct UserCommandRepository {
    db: Db,
}

impl UserCommandRepository {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<UserModel, RepositoryError> {
        // Claiming the username index entry first makes concurrent signups
        // with the same name race on a single shard lock.
        match self.db.usernames.entry(req.username.clone()) {
            Entry::Occupied(_) => {
                error!("❌ Username already registered: {}", req.username);
                Err(RepositoryError::AlreadyExists(req.username.clone()))
            }
            Entry::Vacant(slot) => {
                let user = UserModel {
                    user_id: Uuid::new_v4(),
                    username: req.username.clone(),
                    password: req.password.clone(),
                    address: req.address.clone(),
                    role: req.role,
                    created_at: Utc::now(),
                };

                slot.insert(user.user_id);
                self.db.users.insert(user.user_id, user.clone());

                info!("✅ Created user '{}' with ID {}", user.username, user.user_id);
                Ok(user)
            }
        }
    }
}

#[derive(Clone)]
pub struct UserRepository {
    pub query: DynUserQueryRepository,
    pub command: DynUserCommandRepository,
}

impl UserRepository {
    pub fn new(db: Db) -> Self {
        let query = Arc::new(UserQueryRepository::new(db.clone())) as DynUserQueryRepository;
        let command = Arc::new(UserCommandRepository::new(db)) as DynUserCommandRepository;

        Self { query, command }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::store::MemoryStore;
    use shared::model::Role;

    fn repo() -> UserRepository {
        UserRepository::new(Arc::new(MemoryStore::new()))
    }

    fn signup_request(username: &str) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            password: "$2b$04$fakehash".to_string(),
            address: "123 Test St".to_string(),
            role: Role::Admin,
        }
    }

    #[tokio::test]
    async fn create_user_is_findable_by_username_and_id() {
        let repo = repo();

        let created = repo
            .command
            .create_user(&signup_request("testuser"))
            .await
            .unwrap();

        let by_name = repo
            .query
            .find_by_username("testuser")
            .await
            .unwrap()
            .unwrap();
        let by_id = repo.query.find_by_id(created.user_id).await.unwrap().unwrap();

        assert_eq!(by_name.user_id, created.user_id);
        assert_eq!(by_id.username, "testuser");
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let repo = repo();

        repo.command
            .create_user(&signup_request("testuser"))
            .await
            .unwrap();
        let err = repo
            .command
            .create_user(&signup_request("testuser"))
            .await
            .unwrap_err();

        assert_eq!(err, RepositoryError::AlreadyExists("testuser".to_string()));
    }

    #[tokio::test]
    async fn unknown_username_is_none() {
        let repo = repo();

        assert!(repo.query.find_by_username("ghost").await.unwrap().is_none());
    }
}
