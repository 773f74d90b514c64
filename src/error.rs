//! Unified infrastructure error type.

use std::net::AddrParseError;

/// The error type returned by the server's fallible operations.
///
/// Application-level failures (400, 404) are expressed as HTTP
/// [`Response`](crate::Response) values via [`ApiError`](crate::api::ApiError),
/// not as `Error`s. This type surfaces infrastructure failures: parsing the
/// listen address, binding to a port, or accepting a connection.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid listen address `{addr}`: {source}")]
    Addr {
        addr: String,
        #[source]
        source: AddrParseError,
    },

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
