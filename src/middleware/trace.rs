//! Per-request tracing span.

use std::future::Future;
use std::time::Instant;

use tracing::{Instrument, info, info_span};

use crate::response::Response;

/// Runs `fut` inside a `request` span and logs its outcome.
///
/// Handlers and the store emit their own events inside the span, so every
/// line a request produces carries its method and path.
pub async fn instrument<F>(method: &http::Method, path: &str, fut: F) -> Response
where
    F: Future<Output = Response>,
{
    let span = info_span!("request", method = %method, path = %path);
    let start = Instant::now();
    let res = fut.instrument(span.clone()).await;
    let status = res.status_code();

    span.in_scope(|| {
        info!(
            status = status.as_u16(),
            reason = status.reason(),
            latency_us = start.elapsed().as_micros() as u64,
            "request completed"
        );
    });
    res
}
