//! # catalogo
//!
//! An in-memory product catalog served over a minimal HTTP framework.
//!
//! ## Layers
//!
//! - **Store**: [`Catalog`] holds the product sequence, the id allocator and
//!   the fixed category list behind one lock. Built once in `main`, shared as
//!   `Arc<Catalog>`; nothing is global.
//! - **Framework**: radix-tree routing via [`matchit`], hyper for the wire,
//!   graceful shutdown on SIGTERM / Ctrl-C, one tracing span per request.
//! - **API**: [`api::router`] maps `/productos` and `/categorias` onto the
//!   store.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use catalogo::{Catalog, Server, api};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), catalogo::Error> {
//!     let app = api::router(Arc::new(Catalog::seeded()));
//!     Server::bind("0.0.0.0:8080").await?.serve(app).await
//! }
//! ```
//!
//! Nothing survives a restart: state lives only in process memory.

mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod api;
pub mod config;
pub mod health;
pub mod middleware;
pub mod model;
pub mod store;

pub use error::Error;
pub use handler::Handler;
pub use method::{Method, UnknownMethod};
pub use model::{Category, Product, ProductInput};
pub use request::{JsonRejection, Request};
pub use response::{IntoResponse, Json, Response, ResponseBuilder};
pub use router::Router;
pub use server::{DEFAULT_BODY_LIMIT, Server};
pub use status::Status;
pub use store::Catalog;
