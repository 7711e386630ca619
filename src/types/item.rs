use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::error::AppError;

/// An item as the API returns it. Timestamps are assigned by the durable
/// store only and are omitted from the JSON payload when absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<entity::item::Model> for Item {
    fn from(model: entity::item::Model) -> Self {
        Item {
            id: model.id,
            name: model.name,
            price: model.price,
            created_at: Some(model.created_at.with_timezone(&Utc)),
            updated_at: Some(model.updated_at.with_timezone(&Utc)),
        }
    }
}

/// Request body for create and update. Both fields are optional at the
/// serde level so validation can answer with the API's own error message
/// instead of a deserializer error.
#[derive(Debug, Deserialize)]
pub struct ItemInput {
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl ItemInput {
    /// Rejects a missing or empty name and a missing or null price. A price
    /// of zero is valid.
    pub fn validated(self) -> Result<(String, f64), AppError> {
        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(AppError::missing_fields()),
        };
        let price = self.price.ok_or_else(AppError::missing_fields)?;

        Ok((name, price))
    }
}
