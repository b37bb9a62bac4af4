use crate::model::{Order as OrderModel, Product as ProductModel, User as UserModel};
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

pub type Db = Arc<MemoryStore>;

/// Process-local storage shared by every repository.
///
/// Each map locks per shard, so single-key operations (`entry`, `get_mut`)
/// are atomic without a store-wide lock. `usernames` is a secondary index
/// enforcing username uniqueness.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub users: DashMap<Uuid, UserModel>,
    pub usernames: DashMap<String, Uuid>,
    pub products: DashMap<Uuid, ProductModel>,
    pub orders: DashMap<Uuid, OrderModel>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}
