use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::{ItemStore, StoreError};
use crate::types::item::Item;

/// Volatile store. Items and the id counter share one mutex so concurrent
/// inserts still hand out unique, increasing ids. Everything is lost on
/// restart and ids are never reused within a process lifetime.
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

struct Inner {
    items: Vec<Item>,
    next_id: i32,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            inner: Mutex::new(Inner {
                items: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn locked(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Unavailable("item store mutex poisoned".to_string()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        // ids are handed out monotonically, so insertion order is already
        // ascending id order
        Ok(self.locked()?.items.clone())
    }

    async fn insert(&self, name: String, price: f64) -> Result<Item, StoreError> {
        let mut inner = self.locked()?;

        let item = Item {
            id: inner.next_id,
            name,
            price,
            created_at: None,
            updated_at: None,
        };
        inner.next_id += 1;
        inner.items.push(item.clone());

        Ok(item)
    }

    async fn update(&self, id: i32, name: String, price: f64) -> Result<Item, StoreError> {
        let mut inner = self.locked()?;

        let item = inner
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))?;
        item.name = name;
        item.price = price;

        Ok(item.clone())
    }

    async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        let mut inner = self.locked()?;

        let before = inner.items.len();
        inner.items.retain(|item| item.id != id);

        Ok(inner.items.len() < before)
    }
}
