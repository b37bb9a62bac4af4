use crate::{
    abstract_trait::{
        DynAuthService, DynOrderCommandService, DynOrderQueryService, DynProductCommandService,
        DynProductQueryService,
    },
    repository::{Db, OrderRepository, ProductRepository, UserRepository},
    service::{
        AuthService, AuthServiceDeps, OrderCommandService, OrderCommandServiceDeps,
        OrderQueryService, ProductCommandService, ProductQueryService,
    },
};
use shared::abstract_trait::{DynHashing, DynJwtService};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
    pub order_query: DynOrderQueryService,
    pub order_command: DynOrderCommandService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"DynAuthService")
            .field("product_query", &"DynProductQueryService")
            .field("product_command", &"DynProductCommandService")
            .field("order_query", &"DynOrderQueryService")
            .field("order_command", &"DynOrderCommandService")
            .finish()
    }
}

pub struct DependenciesInjectDeps {
    pub db: Db,
    pub hashing: DynHashing,
    pub jwt_config: DynJwtService,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            db,
            hashing,
            jwt_config,
        } = deps;

        let user_repository = UserRepository::new(db.clone());
        let product_repository = ProductRepository::new(db.clone());
        let order_repository = OrderRepository::new(db);

        let auth_service = Arc::new(AuthService::new(AuthServiceDeps {
            query: user_repository.query.clone(),
            command: user_repository.command.clone(),
            hashing,
            jwt: jwt_config,
        })) as DynAuthService;

        let product_query =
            Arc::new(ProductQueryService::new(product_repository.query.clone()))
                as DynProductQueryService;

        let product_command =
            Arc::new(ProductCommandService::new(product_repository.command.clone()))
                as DynProductCommandService;

        let order_query =
            Arc::new(OrderQueryService::new(order_repository.query.clone()))
                as DynOrderQueryService;

        let order_command = Arc::new(OrderCommandService::new(OrderCommandServiceDeps {
            command: order_repository.command.clone(),
            product_command: product_repository.command.clone(),
            user_query: user_repository.query.clone(),
        })) as DynOrderCommandService;

        Self {
            auth_service,
            product_query,
            product_command,
            order_query,
            order_command,
        }
    }
}
