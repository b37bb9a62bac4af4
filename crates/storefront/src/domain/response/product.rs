use crate::model::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Wire name for stock is `default_quantity`.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    #[schema(value_type = f64, example = 99.99)]
    pub price: Decimal,
    pub description: String,
    pub default_quantity: i32,
}

// model to response
impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        ProductResponse {
            id: value.product_id,
            name: value.name,
            price: value.price,
            description: value.description,
            default_quantity: value.stock,
        }
    }
}
