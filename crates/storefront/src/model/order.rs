use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `amount` is the unit price at purchase time multiplied by `quantity`;
/// later price changes do not touch existing orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: Uuid,
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}
