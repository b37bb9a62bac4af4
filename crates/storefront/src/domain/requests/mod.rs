mod auth;
mod order;
mod product;
mod user;

pub use self::auth::{SigninRequest, SignupRequest};
pub use self::order::PlaceOrderRequest;
pub use self::product::{CreateProductRequest, UpdateProductRequest};
pub use self::user::CreateUserRequest;
