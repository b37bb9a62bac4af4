use crate::model::Order;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    #[schema(value_type = f64, example = 199.98)]
    pub amount: Decimal,
}

// model to response
impl From<Order> for OrderResponse {
    fn from(value: Order) -> Self {
        OrderResponse {
            id: value.order_id,
            user_id: value.user_id,
            product_id: value.product_id,
            quantity: value.quantity,
            amount: value.amount,
        }
    }
}

/// Body returned by a successful purchase, including the stock level left
/// after this order was taken out.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderPlacedResponse {
    pub message: String,
    pub data: OrderResponse,
    pub remaining_stock: i32,
}
