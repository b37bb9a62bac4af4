use crate::{
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        response::{ApiResponse, ProductResponse},
    },
    model::Product as ProductModel,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;
use uuid::Uuid;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProductModel>, RepositoryError>;
}

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError>;
    async fn update_product(
        &self,
        product_id: Uuid,
        req: &UpdateProductRequest,
    ) -> Result<ProductModel, RepositoryError>;
    async fn delete_product(&self, product_id: Uuid) -> Result<(), RepositoryError>;
    /// Atomically checks availability and takes `qty` out of stock,
    /// returning the product as it looks after the decrement.
    async fn decrement_stock(
        &self,
        product_id: Uuid,
        qty: i32,
    ) -> Result<ProductModel, RepositoryError>;
    /// Puts `qty` back on the shelf after an order fell through.
    async fn restore_stock(&self, product_id: Uuid, qty: i32) -> Result<(), RepositoryError>;
}

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn list_products(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError>;
}

pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError>;
    async fn update_product(
        &self,
        product_id: Uuid,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn delete_product(&self, product_id: Uuid)
    -> Result<ApiResponse<String>, ServiceError>;
}
