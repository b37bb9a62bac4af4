mod hashing;
mod jwt;

pub use self::hashing::Hashing;
pub use self::jwt::{JwtConfig, TokenClaims};
