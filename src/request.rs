//! Incoming HTTP request type.

use std::collections::HashMap;

use bytes::Bytes;
use http::request::Parts;
use http::{Method, Uri};

/// An incoming HTTP request with its body fully read.
pub struct Request {
    parts: Parts,
    body: Bytes,
    params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(parts: Parts, body: Bytes, params: HashMap<String, String>) -> Self {
        Self { parts, body, params }
    }

    pub fn method(&self) -> &Method { &self.parts.method }
    pub fn uri(&self) -> &Uri { &self.parts.uri }
    pub fn path(&self) -> &str { self.parts.uri.path() }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Case-insensitive header lookup. Values that are not visible ASCII
    /// read as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.parts.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/cars/{id}`, `req.param("id")` on `/cars/42` returns `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}
