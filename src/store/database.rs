use async_trait::async_trait;
use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tokio::sync::OnceCell;

use entity::item::{ActiveModel, Column, Entity as Items};

use super::{ItemStore, StoreError};
use crate::types::item::Item;

/// Durable store over the `items` table. The connection is established on
/// first use and migrations run with it, so a missing or bad DATABASE_URL
/// degrades to per-request `Unavailable` errors instead of failing startup.
pub struct DatabaseStore {
    url: Option<String>,
    conn: OnceCell<DatabaseConnection>,
}

impl DatabaseStore {
    pub fn new(url: Option<String>) -> Self {
        DatabaseStore {
            url,
            conn: OnceCell::new(),
        }
    }

    /// Wraps an already-established connection. Migrations are assumed to
    /// have run; used by tests.
    pub fn with_connection(conn: DatabaseConnection) -> Self {
        DatabaseStore {
            url: None,
            conn: OnceCell::new_with(Some(conn)),
        }
    }

    async fn conn(&self) -> Result<&DatabaseConnection, StoreError> {
        // a failed connect is not cached, the next request tries again
        self.conn
            .get_or_try_init(|| async {
                let url = self
                    .url
                    .as_deref()
                    .ok_or_else(|| StoreError::Unavailable("DATABASE_URL is not set".to_string()))?;

                log::info!("Connecting to the item database...");
                let db = Database::connect(url)
                    .await
                    .map_err(|e| StoreError::Unavailable(e.to_string()))?;

                log::info!("Running migrations...");
                Migrator::up(&db, None)
                    .await
                    .map_err(|e| StoreError::Unavailable(e.to_string()))?;

                Ok(db)
            })
            .await
    }
}

#[async_trait]
impl ItemStore for DatabaseStore {
    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        let db = self.conn().await?;

        let rows = Items::find()
            .order_by_asc(Column::Id)
            .all(db)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(rows.into_iter().map(Item::from).collect())
    }

    async fn insert(&self, name: String, price: f64) -> Result<Item, StoreError> {
        let db = self.conn().await?;
        let now = Utc::now();

        let row = ActiveModel {
            name: Set(name),
            price: Set(price),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        }
        .insert(db)
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(row.into())
    }

    async fn update(&self, id: i32, name: String, price: f64) -> Result<Item, StoreError> {
        let db = self.conn().await?;

        // fetch the current row
        let current = Items::find_by_id(id)
            .one(db)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?
            .ok_or(StoreError::NotFound(id))?;

        let mut row: ActiveModel = current.into();
        row.name = Set(name);
        row.price = Set(price);
        row.updated_at = Set(Utc::now().into());

        let updated = row
            .update(db)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        let db = self.conn().await?;

        let res = Items::delete_by_id(id)
            .exec(db)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(res.rows_affected > 0)
    }
}
