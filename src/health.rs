//! Liveness handlers.
//!
//! | Path | Body | Question |
//! |---|---|---|
//! | `/` | `Servidor activo` | Is the server up? (human-facing) |
//! | `/healthz` | `ok` | Is the process alive? Failure → restart. |
//! | `/readyz` | `ready` | Can it serve traffic? Failure → pulled from load-balancer. |
//!
//! None of them touch the state, so they work on any router.

use crate::{Request, Response};

/// Plain-text banner served at `/`.
pub async fn root<S>(_state: S, _req: Request) -> Response {
    Response::text("Servidor activo")
}

/// Always `200 OK` with body `"ok"`. If the process can respond to HTTP at
/// all, it is alive.
pub async fn liveness<S>(_state: S, _req: Request) -> Response {
    Response::text("ok")
}

/// `200 OK` with body `"ready"`. The catalog is fully built before the
/// listener opens, so there is no warm-up to wait for.
pub async fn readiness<S>(_state: S, _req: Request) -> Response {
    Response::text("ready")
}
