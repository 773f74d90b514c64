//! Incoming HTTP request type.

use std::collections::HashMap;

use bytes::Bytes;
use http::HeaderMap;
use serde::de::DeserializeOwned;

/// An incoming HTTP request with its body already collected.
pub struct Request {
    pub(crate) path: String,
    pub(crate) query: Option<String>,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Bytes,
    pub(crate) params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(
        parts: http::request::Parts,
        body: Bytes,
        params: HashMap<String, String>,
    ) -> Self {
        Self {
            path: parts.uri.path().to_owned(),
            query: parts.uri.query().map(str::to_owned),
            headers: parts.headers,
            body,
            params,
        }
    }

    pub fn path(&self) -> &str { &self.path }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Case-insensitive header lookup. Non-UTF-8 values read as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/productos/{id}`, `req.param("id")` on `/productos/42`
    /// returns `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Returns the first value of a query-string parameter, percent-decoded.
    ///
    /// `?categoriaId=2&categoriaId=3` yields `Some("2")`.
    pub fn query(&self, key: &str) -> Option<String> {
        let query = self.query.as_deref()?;
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    /// Decodes the body as JSON.
    ///
    /// The `content-type` must be `application/json` (parameters such as
    /// `charset` allowed) or a `+json` type. Unknown fields are ignored by
    /// serde's default derive; surrounding whitespace is accepted.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, JsonRejection> {
        let content_type = self.header("content-type");
        if !content_type.is_some_and(is_json) {
            return Err(JsonRejection::UnsupportedMediaType(content_type.map(str::to_owned)));
        }
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Why [`Request::json`] refused a body.
#[derive(Debug, thiserror::Error)]
pub enum JsonRejection {
    #[error("expected `application/json`, got {0:?}")]
    UnsupportedMediaType(Option<String>),

    #[error("invalid JSON body: {0}")]
    Syntax(#[from] serde_json::Error),
}

fn is_json(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    let essence = essence.to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}
