//! Catalog HTTP surface.
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/` | [`health::root`] |
//! | GET | `/healthz`, `/readyz` | [`health::liveness`], [`health::readiness`] |
//! | GET | `/productos` | [`products::list`] |
//! | GET | `/productos/{id}` | [`products::get`] |
//! | GET | `/productos/categoria/{categoriaId}` | [`products::list_by_category`] |
//! | POST | `/productos` | [`products::create`] |
//! | PUT | `/productos/{id}` | [`products::update`] |
//! | DELETE | `/productos/{id}` | [`products::delete`] |
//! | GET | `/categorias` | [`categories::list`] |

use std::sync::Arc;

use crate::health;
use crate::method::Method;
use crate::router::Router;
use crate::store::Catalog;

pub mod categories;
pub mod products;

mod error;

pub use error::ApiError;

/// State every catalog handler receives.
pub type AppState = Arc<Catalog>;

/// Builds the full catalog router over `store`.
pub fn router(store: AppState) -> Router<AppState> {
    Router::with_state(store)
        .on(Method::Get,    "/",                                 health::root)
        .on(Method::Get,    "/healthz",                          health::liveness)
        .on(Method::Get,    "/readyz",                           health::readiness)
        .on(Method::Get,    "/productos",                        products::list)
        .on(Method::Post,   "/productos",                        products::create)
        .on(Method::Get,    "/productos/{id}",                   products::get)
        .on(Method::Put,    "/productos/{id}",                   products::update)
        .on(Method::Delete, "/productos/{id}",                   products::delete)
        .on(Method::Get,    "/productos/categoria/{categoriaId}", products::list_by_category)
        .on(Method::Get,    "/categorias",                       categories::list)
}
