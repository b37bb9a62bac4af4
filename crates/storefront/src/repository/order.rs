use crate::{
    abstract_trait::{
        DynOrderCommandRepository, DynOrderQueryRepository, OrderCommandRepositoryTrait,
        OrderQueryRepositoryTrait,
    },
    domain::requests::PlaceOrderRequest,
    model::Order as OrderModel,
    repository::store::Db,
};
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use shared::errors::RepositoryError;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub struct OrderQueryRepository {
    db: Db,
}

impl OrderQueryRepository {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(&self) -> Result<Vec<OrderModel>, RepositoryError> {
        let mut orders: Vec<OrderModel> = self
            .db
            .orders
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        orders.sort_by_key(|order| order.created_at);

        Ok(orders)
    }
}

pub struct OrderCommandRepository {
    db: Db,
}

impl OrderCommandRepository {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(
        &self,
        req: &PlaceOrderRequest,
        amount: Decimal,
    ) -> Result<OrderModel, RepositoryError> {
        let order = OrderModel {
            order_id: Uuid::new_v4(),
            user_id: req.user_id,
            product_id: req.product_id,
            quantity: req.quantity,
            amount,
            created_at: Utc::now(),
        };

        self.db.orders.insert(order.order_id, order.clone());

        info!(
            "✅ Created order {} for product {}",
            order.order_id, order.product_id
        );
        Ok(order)
    }
}

#[derive(Clone)]
pub struct OrderRepository {
    pub query: DynOrderQueryRepository,
    pub command: DynOrderCommandRepository,
}

impl OrderRepository {
    pub fn new(db: Db) -> Self {
        let query = Arc::new(OrderQueryRepository::new(db.clone())) as DynOrderQueryRepository;
        let command = Arc::new(OrderCommandRepository::new(db)) as DynOrderCommandRepository;

        Self { query, command }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::store::MemoryStore;

    #[tokio::test]
    async fn created_orders_come_back_in_insertion_order() {
        let repo = OrderRepository::new(Arc::new(MemoryStore::new()));

        let first = PlaceOrderRequest {
            user_id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            quantity: 1,
        };
        let second = PlaceOrderRequest {
            user_id: first.user_id,
            product_id: Uuid::new_v4(),
            quantity: 3,
        };

        let a = repo
            .command
            .create_order(&first, Decimal::new(9999, 2))
            .await
            .unwrap();
        let b = repo
            .command
            .create_order(&second, Decimal::new(29997, 2))
            .await
            .unwrap();

        let orders = repo.query.find_all().await.unwrap();

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].order_id, a.order_id);
        assert_eq!(orders[1].order_id, b.order_id);
        assert_eq!(orders[1].amount, Decimal::new(29997, 2));
    }
}
