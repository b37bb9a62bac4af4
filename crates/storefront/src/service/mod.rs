mod auth;
mod order;
mod product;

pub use self::auth::{AuthService, AuthServiceDeps};
pub use self::order::{OrderCommandService, OrderCommandServiceDeps, OrderQueryService};
pub use self::product::{ProductCommandService, ProductQueryService};
