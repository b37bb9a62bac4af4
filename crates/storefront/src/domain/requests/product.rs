use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Upper bound for `price`. Keeps `price * quantity` representable as a
/// `Decimal` for any quantity an order can carry.
const PRICE_CAP: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price <= Decimal::ZERO || *price > PRICE_CAP {
        let mut error = ValidationError::new("range");
        error.message = Some("Price must be between 0 and 1000000000".into());
        return Err(error);
    }

    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Test Product")]
    pub name: String,

    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = f64, example = 99.99)]
    pub price: Decimal,

    #[validate(length(min = 1, message = "Description is required"))]
    #[schema(example = "Test Description")]
    pub description: String,

    /// Initial stock level.
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    #[schema(example = 10)]
    pub default_quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Updated Product")]
    pub name: String,

    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = f64, example = 149.99)]
    pub price: Decimal,

    #[validate(length(min = 1, message = "Description is required"))]
    #[schema(example = "Updated Description")]
    pub description: String,
}
