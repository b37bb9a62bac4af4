use crate::{
    abstract_trait::{
        DynProductCommandRepository, DynProductQueryRepository, ProductCommandServiceTrait,
        ProductQueryServiceTrait,
    },
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        response::{ApiResponse, ProductResponse},
    },
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use tracing::{error, info};
use uuid::Uuid;

pub struct ProductQueryService {
    query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn list_products(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        info!("🔍 Listing products");

        let products = self.query.find_all().await?;

        // An empty catalog is an error on this endpoint, unlike /order/.
        if products.is_empty() {
            error!("❌ No products in the catalog");
            return Err(ServiceError::ProductsNotFound);
        }

        let data: Vec<ProductResponse> =
            products.into_iter().map(ProductResponse::from).collect();

        info!("✅ Found {} products", data.len());

        Ok(ApiResponse {
            message: "Products".to_string(),
            data,
        })
    }
}

pub struct ProductCommandService {
    command: DynProductCommandRepository,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        info!("📦 Creating product '{}'", req.name);

        let product = self.command.create_product(req).await?;

        Ok(ProductResponse::from(product))
    }

    async fn update_product(
        &self,
        product_id: Uuid,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🔄 Updating product {product_id}");

        let product = self
            .command
            .update_product(product_id, req)
            .await
            .map_err(|err| match err {
                RepositoryError::NotFound => {
                    error!("❌ Product not found: {product_id}");
                    ServiceError::ProductNotFound
                }
                other => ServiceError::Repo(other),
            })?;

        Ok(ApiResponse {
            message: "Product updated successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }

    async fn delete_product(
        &self,
        product_id: Uuid,
    ) -> Result<ApiResponse<String>, ServiceError> {
        info!("🗑️ Deleting product {product_id}");

        self.command
            .delete_product(product_id)
            .await
            .map_err(|err| match err {
                RepositoryError::NotFound => {
                    error!("❌ Product not found: {product_id}");
                    ServiceError::ProductNotFound
                }
                other => ServiceError::Repo(other),
            })?;

        Ok(ApiResponse {
            message: "Product deleted".to_string(),
            data: "Deleted".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MemoryStore, ProductRepository};
    use rust_decimal::Decimal;
    use std::sync::Arc;

    fn services() -> (ProductQueryService, ProductCommandService) {
        let repository = ProductRepository::new(Arc::new(MemoryStore::new()));

        (
            ProductQueryService::new(repository.query),
            ProductCommandService::new(repository.command),
        )
    }

    fn create_request() -> CreateProductRequest {
        CreateProductRequest {
            name: "Test Product".to_string(),
            price: Decimal::new(9999, 2),
            description: "Test Description".to_string(),
            default_quantity: 10,
        }
    }

    #[tokio::test]
    async fn empty_catalog_is_an_error() {
        let (query, _) = services();

        let err = query.list_products().await.unwrap_err();

        assert!(matches!(err, ServiceError::ProductsNotFound));
    }

    #[tokio::test]
    async fn listing_returns_created_products() {
        let (query, command) = services();
        command.create_product(&create_request()).await.unwrap();

        let response = query.list_products().await.unwrap();

        assert_eq!(response.message, "Products");
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].name, "Test Product");
        assert_eq!(response.data[0].default_quantity, 10);
    }

    #[tokio::test]
    async fn update_of_unknown_product_fails() {
        let (_, command) = services();

        let err = command
            .update_product(
                Uuid::new_v4(),
                &UpdateProductRequest {
                    name: "Updated Product".to_string(),
                    price: Decimal::new(14999, 2),
                    description: "Updated Description".to_string(),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::ProductNotFound));
    }

    #[tokio::test]
    async fn delete_empties_the_catalog() {
        let (query, command) = services();
        let product = command.create_product(&create_request()).await.unwrap();

        let response = command.delete_product(product.id).await.unwrap();

        assert_eq!(response.message, "Product deleted");
        assert_eq!(response.data, "Deleted");
        assert!(matches!(
            query.list_products().await.unwrap_err(),
            ServiceError::ProductsNotFound
        ));
    }
}
