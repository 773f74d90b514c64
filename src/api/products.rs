//! Product endpoints.
//!
//! Path parameters are checked before the store is consulted, so a
//! non-numeric id is always `400`, never `404`. The `categoriaId` query
//! filter is looser: a value that does not parse is ignored and the full
//! list comes back.

use std::str::FromStr;

use tracing::info;

use crate::model::{Product, ProductInput};
use crate::request::Request;
use crate::response::{Json, Response};
use crate::status::Status;

use super::{ApiError, AppState};

/// `GET /productos[?categoriaId=N]`
pub async fn list(store: AppState, req: Request) -> Json<Vec<Product>> {
    let filter = req.query("categoriaId").and_then(|v| v.parse().ok());
    match filter {
        Some(category_id) => Json(store.list_by_category(category_id).await),
        None => Json(store.list().await),
    }
}

/// `GET /productos/categoria/{categoriaId}`
pub async fn list_by_category(store: AppState, req: Request) -> Result<Json<Vec<Product>>, ApiError> {
    let category_id = path_param(&req, "categoriaId").ok_or(ApiError::InvalidCategoryId)?;
    Ok(Json(store.list_by_category(category_id).await))
}

/// `GET /productos/{id}`
pub async fn get(store: AppState, req: Request) -> Result<Json<Product>, ApiError> {
    let id = path_param(&req, "id").ok_or(ApiError::InvalidId)?;
    store.find_by_id(id).await.map(Json).ok_or(ApiError::ProductNotFound)
}

/// `POST /productos`
pub async fn create(store: AppState, req: Request) -> Result<Response, ApiError> {
    let input: ProductInput = req.json()?;
    let product = store.insert(input).await;
    info!(id = product.id, "product created");

    Ok(Response::builder()
        .status(Status::Created)
        .header("location", &format!("/productos/{}", product.id))
        .json(&product))
}

/// `PUT /productos/{id}`
///
/// Existence is checked before the body is decoded.
pub async fn update(store: AppState, req: Request) -> Result<Json<Product>, ApiError> {
    let id = path_param(&req, "id").ok_or(ApiError::InvalidId)?;
    if store.find_by_id(id).await.is_none() {
        return Err(ApiError::ProductNotFound);
    }

    let input: ProductInput = req.json()?;
    // A concurrent DELETE may land between the lookup and the write.
    let product = store.replace(id, input).await.ok_or(ApiError::ProductNotFound)?;
    info!(id, "product updated");
    Ok(Json(product))
}

/// `DELETE /productos/{id}`
pub async fn delete(store: AppState, req: Request) -> Result<Status, ApiError> {
    let id = path_param(&req, "id").ok_or(ApiError::InvalidId)?;
    if !store.remove_by_id(id).await {
        return Err(ApiError::ProductNotFound);
    }
    info!(id, "product deleted");
    Ok(Status::NoContent)
}

fn path_param<T: FromStr>(req: &Request, key: &str) -> Option<T> {
    req.param(key)?.parse().ok()
}
