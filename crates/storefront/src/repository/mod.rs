mod order;
mod product;
mod store;
mod user;

pub use self::order::OrderRepository;
pub use self::product::ProductRepository;
pub use self::store::{Db, MemoryStore};
pub use self::user::UserRepository;
