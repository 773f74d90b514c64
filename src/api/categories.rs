//! Read-only category endpoint.

use crate::model::Category;
use crate::request::Request;
use crate::response::Json;

use super::AppState;

/// `GET /categorias`
pub async fn list(store: AppState, _req: Request) -> Json<Vec<Category>> {
    Json(store.categories().to_vec())
}
