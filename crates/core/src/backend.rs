//! Wire-level shapes exchanged with the commerce backend.
//!
//! An [`OutboundRequest`] is built fresh for every action invocation and a
//! [`BackendResponse`] is decoded lazily, so a handler that only inspects the
//! status never pays for (or fails on) the body.

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::ActionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OutboundRequest {
    pub method: HttpMethod,
    /// Path segments below the backend base URL, unencoded.
    pub segments: Vec<String>,
    pub body: Option<Value>,
}

impl OutboundRequest {
    pub fn new(method: HttpMethod, path: &str) -> Self {
        let segments = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_owned)
            .collect();
        Self { method, segments, body: None }
    }

    pub fn get(path: &str) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: &str) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: &str) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn delete(path: &str) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Appends one templated segment; slashes inside it stay part of the segment.
    pub fn segment(mut self, value: impl Into<String>) -> Self {
        self.segments.push(value.into());
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Human readable path for logs, e.g. `/api/cart/42`.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

/// Status a handler treats as success.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpectedStatus {
    AnySuccess,
    Exactly(u16),
}

impl ExpectedStatus {
    pub fn accepts(self, status: u16) -> bool {
        match self {
            Self::AnySuccess => (200..300).contains(&status),
            Self::Exactly(expected) => status == expected,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendResponse {
    pub status: u16,
    pub body: String,
}

impl BackendResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn from_json(status: u16, body: &Value) -> Self {
        Self { status, body: body.to_string() }
    }

    pub fn empty(status: u16) -> Self {
        Self { status, body: String::new() }
    }

    pub fn expect_status(self, expected: ExpectedStatus) -> Result<Self, ActionError> {
        if expected.accepts(self.status) {
            Ok(self)
        } else {
            Err(ActionError::HttpStatus(self.status))
        }
    }

    pub fn decode<T>(&self) -> Result<T, ActionError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(&self.body).map_err(|error| ActionError::Decode(error.to_string()))
    }
}
