mod api;
mod order;
mod product;
mod user;

pub use self::api::ApiResponse;
pub use self::order::{OrderPlacedResponse, OrderResponse};
pub use self::product::ProductResponse;
pub use self::user::{SigninResponse, UserProfileResponse, UserResponse};
