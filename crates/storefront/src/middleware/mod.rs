pub mod jwt;
pub mod validate;

pub use self::jwt::admin_middleware;
pub use self::validate::SimpleValidatedJson;
