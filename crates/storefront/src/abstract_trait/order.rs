use crate::{
    domain::{
        requests::PlaceOrderRequest,
        response::{ApiResponse, OrderPlacedResponse, OrderResponse},
    },
    model::Order as OrderModel,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<OrderModel>, RepositoryError>;
}

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    async fn create_order(
        &self,
        req: &PlaceOrderRequest,
        amount: Decimal,
    ) -> Result<OrderModel, RepositoryError>;
}

pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn list_orders(&self) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
}

pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn place_order(&self, req: &PlaceOrderRequest)
    -> Result<OrderPlacedResponse, ServiceError>;
}
