use crate::{
    di::{DependenciesInject, DependenciesInjectDeps},
    repository::{Db, MemoryStore},
};
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    config::{Hashing, JwtConfig},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub jwt_config: DynJwtService,
    pub di_container: DependenciesInject,
}

impl AppState {
    pub fn new(jwt_secret: &str) -> Self {
        let jwt_config = Arc::new(JwtConfig::new(jwt_secret)) as DynJwtService;
        let hashing = Arc::new(Hashing::new()) as DynHashing;
        let db: Db = Arc::new(MemoryStore::new());

        let di_container = DependenciesInject::new(DependenciesInjectDeps {
            db,
            hashing,
            jwt_config: jwt_config.clone(),
        });

        Self {
            jwt_config,
            di_container,
        }
    }
}
