use crate::{
    abstract_trait::{
        DynProductCommandRepository, DynProductQueryRepository, ProductCommandRepositoryTrait,
        ProductQueryRepositoryTrait,
    },
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    model::Product as ProductModel,
    repository::store::Db,
};
use async_trait::async_trait;
use chrono::Utc;
use shared::errors::RepositoryError;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

pub struct ProductQueryRepository {
    db: Db,
}

impl ProductQueryRepository {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError> {
        let mut products: Vec<ProductModel> = self
            .db
            .products
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        // Map iteration order is arbitrary; keep listings stable.
        products.sort_by_key(|product| product.created_at);

        Ok(products)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProductModel>, RepositoryError> {
        Ok(self.db.products.get(&id).map(|product| product.clone()))
    }
}

pub struct ProductCommandRepository {
    db: Db,
}

impl ProductCommandRepository {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let now = Utc::now();
        let product = ProductModel {
            product_id: Uuid::new_v4(),
            name: req.name.clone(),
            price: req.price,
            description: req.description.clone(),
            stock: req.default_quantity,
            created_at: now,
            updated_at: now,
        };

        self.db.products.insert(product.product_id, product.clone());

        info!(
            "✅ Created product '{}' with ID {}",
            product.name, product.product_id
        );
        Ok(product)
    }

    async fn update_product(
        &self,
        product_id: Uuid,
        req: &UpdateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut product = self
            .db
            .products
            .get_mut(&product_id)
            .ok_or(RepositoryError::NotFound)?;

        product.name = req.name.clone();
        product.price = req.price;
        product.description = req.description.clone();
        product.updated_at = Utc::now();

        info!("✅ Updated product {}", product_id);
        Ok(product.clone())
    }

    async fn delete_product(&self, product_id: Uuid) -> Result<(), RepositoryError> {
        match self.db.products.remove(&product_id) {
            Some((_, product)) => {
                info!("🗑️ Deleted product '{}' ({})", product.name, product_id);
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    async fn decrement_stock(
        &self,
        product_id: Uuid,
        qty: i32,
    ) -> Result<ProductModel, RepositoryError> {
        // get_mut holds the shard write lock for the whole check-and-write,
        // so two buyers cannot both pass the availability check.
        let mut product = self
            .db
            .products
            .get_mut(&product_id)
            .ok_or(RepositoryError::NotFound)?;

        if product.stock < qty {
            error!(
                "❌ Not enough stock for product {}: requested={}, available={}",
                product_id, qty, product.stock
            );
            return Err(RepositoryError::InsufficientStock {
                requested: qty,
                available: product.stock,
            });
        }

        product.stock -= qty;
        product.updated_at = Utc::now();

        Ok(product.clone())
    }

    async fn restore_stock(&self, product_id: Uuid, qty: i32) -> Result<(), RepositoryError> {
        let mut product = self
            .db
            .products
            .get_mut(&product_id)
            .ok_or(RepositoryError::NotFound)?;

        product.stock += qty;
        product.updated_at = Utc::now();

        info!("🔄 Restored {} units of product {}", qty, product_id);
        Ok(())
    }
}

#[derive(Clone)]
pub struct ProductRepository {
    pub query: DynProductQueryRepository,
    pub command: DynProductCommandRepository,
}

impl ProductRepository {
    pub fn new(db: Db) -> Self {
        let query = Arc::new(ProductQueryRepository::new(db.clone())) as DynProductQueryRepository;
        let command = Arc::new(ProductCommandRepository::new(db)) as DynProductCommandRepository;

        Self { query, command }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::store::MemoryStore;
    use rust_decimal::Decimal;

    fn repo() -> ProductRepository {
        ProductRepository::new(Arc::new(MemoryStore::new()))
    }

    fn create_request(stock: i32) -> CreateProductRequest {
        CreateProductRequest {
            name: "Test Product".to_string(),
            price: Decimal::new(9999, 2),
            description: "Test Description".to_string(),
            default_quantity: stock,
        }
    }

    #[tokio::test]
    async fn decrement_takes_stock_out() {
        let repo = repo();
        let product = repo.command.create_product(&create_request(10)).await.unwrap();

        let updated = repo
            .command
            .decrement_stock(product.product_id, 2)
            .await
            .unwrap();

        assert_eq!(updated.stock, 8);
    }

    #[tokio::test]
    async fn decrement_beyond_stock_fails_and_leaves_stock_alone() {
        let repo = repo();
        let product = repo.command.create_product(&create_request(10)).await.unwrap();

        let err = repo
            .command
            .decrement_stock(product.product_id, 100)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            RepositoryError::InsufficientStock {
                requested: 100,
                available: 10,
            }
        );

        let unchanged = repo
            .query
            .find_by_id(product.product_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(unchanged.stock, 10);
    }

    #[tokio::test]
    async fn restore_puts_decremented_stock_back() {
        let repo = repo();
        let product = repo.command.create_product(&create_request(10)).await.unwrap();

        repo.command
            .decrement_stock(product.product_id, 4)
            .await
            .unwrap();
        repo.command
            .restore_stock(product.product_id, 4)
            .await
            .unwrap();

        let restored = repo
            .query
            .find_by_id(product.product_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(restored.stock, 10);
    }

    #[tokio::test]
    async fn decrement_unknown_product_is_not_found() {
        let repo = repo();

        let err = repo
            .command
            .decrement_stock(Uuid::new_v4(), 1)
            .await
            .unwrap_err();

        assert_eq!(err, RepositoryError::NotFound);
    }

    #[tokio::test]
    async fn concurrent_decrements_never_oversell() {
        let repo = repo();
        let product = repo.command.create_product(&create_request(5)).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..8 {
            let command = repo.command.clone();
            let id = product.product_id;
            handles.push(tokio::spawn(
                async move { command.decrement_stock(id, 1).await },
            ));
        }

        let mut sold = 0;
        let mut rejected = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => sold += 1,
                Err(RepositoryError::InsufficientStock { .. }) => rejected += 1,
                Err(other) => panic!("unexpected error: {other:?}"),
            }
        }

        assert_eq!(sold, 5);
        assert_eq!(rejected, 3);

        let drained = repo
            .query
            .find_by_id(product.product_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(drained.stock, 0);
    }

    #[tokio::test]
    async fn delete_then_lookup_is_empty() {
        let repo = repo();
        let product = repo.command.create_product(&create_request(1)).await.unwrap();

        repo.command.delete_product(product.product_id).await.unwrap();

        assert!(repo
            .query
            .find_by_id(product.product_id)
            .await
            .unwrap()
            .is_none());
        assert!(repo.query.find_all().await.unwrap().is_empty());
    }
}
