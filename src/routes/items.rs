use std::sync::Arc;

use actix_web::{delete, get, post, put, web};

use crate::store::ItemStore;
use crate::types::error::AppError;
use crate::types::item::{Item, ItemInput};
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
async fn list(store: web::Data<Arc<dyn ItemStore>>) -> ApiResult<Vec<Item>> {
    let items = store
        .list()
        .await
        .map_err(|e| AppError::storage("Failed to fetch items", e))?;

    Ok(ApiResponse::Ok(items))
}

#[post("")]
async fn create(
    store: web::Data<Arc<dyn ItemStore>>,
    body: web::Json<ItemInput>,
) -> ApiResult<Item> {
    let (name, price) = body.into_inner().validated()?;

    let item = store
        .insert(name, price)
        .await
        .map_err(|e| AppError::storage("Failed to create item", e))?;

    Ok(ApiResponse::Ok(item))
}

#[put("/{id}")]
async fn update(
    store: web::Data<Arc<dyn ItemStore>>,
    path: web::Path<i32>,
    body: web::Json<ItemInput>,
) -> ApiResult<Item> {
    let (name, price) = body.into_inner().validated()?;

    let item = store
        .update(path.into_inner(), name, price)
        .await
        .map_err(|e| AppError::storage("Failed to update item", e))?;

    Ok(ApiResponse::Ok(item))
}

#[delete("/{id}")]
async fn delete(store: web::Data<Arc<dyn ItemStore>>, path: web::Path<i32>) -> ApiResult<()> {
    let removed = store
        .delete(path.into_inner())
        .await
        .map_err(|e| AppError::storage("Failed to delete item", e))?;

    if !removed {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::NoContent)
}
