//! Application-level failures and how they render.

use tracing::debug;

use crate::request::JsonRejection;
use crate::response::{IntoResponse, Response};
use crate::status::Status;

/// Everything a catalog handler can reject a request with.
///
/// The `Display` text is the plain-text response body; there is no error
/// code field.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("ID inválido")]
    InvalidId,

    #[error("ID de categoría inválido")]
    InvalidCategoryId,

    #[error("Producto no encontrado")]
    ProductNotFound,

    #[error("Cuerpo de la petición inválido")]
    InvalidBody(#[source] serde_json::Error),

    #[error("Se esperaba contenido application/json")]
    UnsupportedMediaType(Option<String>),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::UnsupportedMediaType(content_type) => Self::UnsupportedMediaType(content_type),
            JsonRejection::Syntax(e) => Self::InvalidBody(e),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            Self::InvalidId | Self::InvalidCategoryId | Self::InvalidBody(_) => Status::BadRequest,
            Self::ProductNotFound => Status::NotFound,
            Self::UnsupportedMediaType(_) => Status::UnsupportedMediaType,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::InvalidBody(e) => debug!("rejecting request body: {e}"),
            Self::UnsupportedMediaType(content_type) => {
                debug!(?content_type, "rejecting non-JSON request body");
            }
            _ => {}
        }
        Response::builder().status(self.status()).text(self.to_string())
    }
}
