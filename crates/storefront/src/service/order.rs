use crate::{
    abstract_trait::{
        DynOrderCommandRepository, DynOrderQueryRepository, DynProductCommandRepository,
        DynUserQueryRepository, OrderCommandServiceTrait, OrderQueryServiceTrait,
    },
    domain::{
        requests::PlaceOrderRequest,
        response::{ApiResponse, OrderPlacedResponse, OrderResponse},
    },
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::errors::{RepositoryError, ServiceError};
use tracing::{error, info};

pub struct OrderQueryService {
    query: DynOrderQueryRepository,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn list_orders(&self) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        info!("🔍 Listing orders");

        let orders = self.query.find_all().await?;

        // Empty history is fine here; the message switches instead of the
        // status, unlike the product listing.
        let message = if orders.is_empty() {
            "No orders found"
        } else {
            "Orders retrieved successfully"
        };

        let data: Vec<OrderResponse> = orders.into_iter().map(OrderResponse::from).collect();

        Ok(ApiResponse {
            message: message.to_string(),
            data,
        })
    }
}

pub struct OrderCommandService {
    command: DynOrderCommandRepository,
    product_command: DynProductCommandRepository,
    user_query: DynUserQueryRepository,
}

pub struct OrderCommandServiceDeps {
    pub command: DynOrderCommandRepository,
    pub product_command: DynProductCommandRepository,
    pub user_query: DynUserQueryRepository,
}

impl OrderCommandService {
    pub fn new(deps: OrderCommandServiceDeps) -> Self {
        let OrderCommandServiceDeps {
            command,
            product_command,
            user_query,
        } = deps;

        Self {
            command,
            product_command,
            user_query,
        }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn place_order(
        &self,
        req: &PlaceOrderRequest,
    ) -> Result<OrderPlacedResponse, ServiceError> {
        info!(
            "🛒 Placing order: user={} product={} quantity={}",
            req.user_id, req.product_id, req.quantity
        );

        if self.user_query.find_by_id(req.user_id).await?.is_none() {
            error!("❌ User not found: {}", req.user_id);
            return Err(ServiceError::UserNotFound);
        }

        let product = self
            .product_command
            .decrement_stock(req.product_id, req.quantity)
            .await
            .map_err(|err| match err {
                RepositoryError::NotFound => {
                    error!("❌ Product not found: {}", req.product_id);
                    ServiceError::ProductNotFound
                }
                RepositoryError::InsufficientStock { .. } => ServiceError::InsufficientStock,
                other => ServiceError::Repo(other),
            })?;

        // Snapshot the price at purchase time. Stock is already taken at
        // this point, so an unrepresentable amount must hand it back
        // before failing.
        let Some(amount) = product.price.checked_mul(Decimal::from(req.quantity)) else {
            error!(
                "❌ Amount overflow: product={} price={} quantity={}",
                req.product_id, product.price, req.quantity
            );
            if let Err(restore_err) = self
                .product_command
                .restore_stock(req.product_id, req.quantity)
                .await
            {
                error!(
                    "❌ Could not restore stock for product {}: {restore_err}",
                    req.product_id
                );
            }
            return Err(ServiceError::AmountTooLarge);
        };

        let order = self.command.create_order(req, amount).await?;

        info!(
            "✅ Order {} placed, {} left in stock",
            order.order_id, product.stock
        );

        Ok(OrderPlacedResponse {
            message: "Order placed successfully".to_string(),
            data: OrderResponse::from(order),
            remaining_stock: product.stock,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::requests::{CreateProductRequest, CreateUserRequest},
        repository::{MemoryStore, OrderRepository, ProductRepository, UserRepository},
    };
    use shared::model::Role;
    use std::sync::Arc;
    use uuid::Uuid;

    struct Fixture {
        orders: OrderCommandService,
        listing: OrderQueryService,
        products: ProductRepository,
        users: UserRepository,
    }

    fn fixture() -> Fixture {
        let db = Arc::new(MemoryStore::new());
        let users = UserRepository::new(db.clone());
        let products = ProductRepository::new(db.clone());
        let orders = OrderRepository::new(db);

        Fixture {
            orders: OrderCommandService::new(OrderCommandServiceDeps {
                command: orders.command.clone(),
                product_command: products.command.clone(),
                user_query: users.query.clone(),
            }),
            listing: OrderQueryService::new(orders.query),
            products,
            users,
        }
    }

    async fn seed_user(fixture: &Fixture) -> Uuid {
        fixture
            .users
            .command
            .create_user(&CreateUserRequest {
                username: "buyer".to_string(),
                password: "$2b$04$fakehash".to_string(),
                address: "123 Test St".to_string(),
                role: Role::Admin,
            })
            .await
            .unwrap()
            .user_id
    }

    async fn seed_product(fixture: &Fixture, stock: i32) -> Uuid {
        fixture
            .products
            .command
            .create_product(&CreateProductRequest {
                name: "Test Product".to_string(),
                price: Decimal::new(9999, 2),
                description: "Test Description".to_string(),
                default_quantity: stock,
            })
            .await
            .unwrap()
            .product_id
    }

    #[tokio::test]
    async fn placing_an_order_prices_it_and_reports_remaining_stock() {
        let fixture = fixture();
        let user_id = seed_user(&fixture).await;
        let product_id = seed_product(&fixture, 10).await;

        let response = fixture
            .orders
            .place_order(&PlaceOrderRequest {
                user_id,
                product_id,
                quantity: 2,
            })
            .await
            .unwrap();

        assert_eq!(response.message, "Order placed successfully");
        assert_eq!(response.remaining_stock, 8);
        assert_eq!(response.data.amount, Decimal::new(19998, 2));
        assert_eq!(response.data.quantity, 2);
    }

    #[tokio::test]
    async fn over_quantity_order_fails_without_touching_stock() {
        let fixture = fixture();
        let user_id = seed_user(&fixture).await;
        let product_id = seed_product(&fixture, 10).await;

        let err = fixture
            .orders
            .place_order(&PlaceOrderRequest {
                user_id,
                product_id,
                quantity: 100,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InsufficientStock));

        let product = fixture
            .products
            .query
            .find_by_id(product_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(product.stock, 10);

        let listing = fixture.listing.list_orders().await.unwrap();
        assert_eq!(listing.message, "No orders found");
        assert!(listing.data.is_empty());
    }

    #[tokio::test]
    async fn overflowing_amount_fails_cleanly_and_hands_stock_back() {
        let fixture = fixture();
        let user_id = seed_user(&fixture).await;
        // Straight into the repository, past request validation, with a
        // price no quantity can safely multiply.
        let product_id = fixture
            .products
            .command
            .create_product(&CreateProductRequest {
                name: "Test Product".to_string(),
                price: Decimal::MAX,
                description: "Test Description".to_string(),
                default_quantity: 5,
            })
            .await
            .unwrap()
            .product_id;

        let err = fixture
            .orders
            .place_order(&PlaceOrderRequest {
                user_id,
                product_id,
                quantity: 5,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::AmountTooLarge));

        let product = fixture
            .products
            .query
            .find_by_id(product_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(product.stock, 5);

        let listing = fixture.listing.list_orders().await.unwrap();
        assert!(listing.data.is_empty());
    }

    #[tokio::test]
    async fn unknown_user_cannot_order() {
        let fixture = fixture();
        let product_id = seed_product(&fixture, 10).await;

        let err = fixture
            .orders
            .place_order(&PlaceOrderRequest {
                user_id: Uuid::new_v4(),
                product_id,
                quantity: 1,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::UserNotFound));
    }

    #[tokio::test]
    async fn unknown_product_cannot_be_ordered() {
        let fixture = fixture();
        let user_id = seed_user(&fixture).await;

        let err = fixture
            .orders
            .place_order(&PlaceOrderRequest {
                user_id,
                product_id: Uuid::new_v4(),
                quantity: 1,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::ProductNotFound));
    }

    #[tokio::test]
    async fn listing_reports_placed_orders() {
        let fixture = fixture();
        let user_id = seed_user(&fixture).await;
        let product_id = seed_product(&fixture, 10).await;

        fixture
            .orders
            .place_order(&PlaceOrderRequest {
                user_id,
                product_id,
                quantity: 2,
            })
            .await
            .unwrap();

        let listing = fixture.listing.list_orders().await.unwrap();

        assert_eq!(listing.message, "Orders retrieved successfully");
        assert_eq!(listing.data.len(), 1);
        assert_eq!(listing.data[0].user_id, user_id);
    }
}
