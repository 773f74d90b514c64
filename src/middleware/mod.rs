//! Middleware layer.
//!
//! Middleware wraps request dispatch and is the right place for
//! cross-cutting concerns. The router runs every request through
//! [`trace`], which opens a per-request span and logs method, path,
//! status and latency when the response is ready.

pub mod trace;
