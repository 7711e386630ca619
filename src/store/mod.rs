use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::StoreConfig;
use crate::types::item::Item;

pub mod database;
pub mod memory;

pub use database::DatabaseStore;
pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("item {0} not found")]
    NotFound(i32),
}

/// Owns item persistence and id assignment. Callers never supply ids;
/// `list` returns items in ascending id order on every backend.
#[async_trait]
pub trait ItemStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Item>, StoreError>;
    async fn insert(&self, name: String, price: f64) -> Result<Item, StoreError>;
    async fn update(&self, id: i32, name: String, price: f64) -> Result<Item, StoreError>;
    async fn delete(&self, id: i32) -> Result<bool, StoreError>;
}

pub fn from_config(config: &StoreConfig) -> Arc<dyn ItemStore> {
    match config {
        StoreConfig::Memory => Arc::new(MemoryStore::new()),
        StoreConfig::Database { url } => {
            if url.is_none() {
                log::warn!(
                    "STORE_BACKEND=database but DATABASE_URL is not set; item operations will fail until it is configured"
                );
            }
            Arc::new(DatabaseStore::new(url.clone()))
        }
    }
}
