//! Outbound request model
//!
//! An [`OutboundRequest`] describes one logical API call. It is immutable and
//! rebuilt into a fresh `reqwest` request for every attempt, so a replay after
//! a credential refresh carries the same method, path and body.

use std::fmt;

use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use uuid::Uuid;

use crate::api::errors::ApiError;

/// One logical call against the task API
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    id: Uuid,
    method: Method,
    path: String,
    body: RequestBody,
}

impl OutboundRequest {
    /// Create a request for `path`, which is appended to the client's base
    /// URL and should start with `/`.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(), method, path: path.into(), body: RequestBody::Empty }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    /// Returns `ApiError::Serialization` if `body` cannot be encoded.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::Serialization(format!("Failed to serialize body: {}", e)))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    /// Attach a plain-text body.
    pub fn text(mut self, body: impl Into<String>) -> Self {
        self.body = RequestBody::Text(body.into());
        self
    }

    /// Attach a multipart form.
    pub fn multipart(mut self, parts: Vec<MultipartPart>) -> Self {
        self.body = RequestBody::Multipart(parts);
        self
    }

    /// Identifier sent as `X-Request-Id` on every attempt.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> &RequestBody {
        &self.body
    }
}

/// Request payload
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Text(String),
    Multipart(Vec<MultipartPart>),
}

impl RequestBody {
    /// Write this body onto a request builder.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        match self {
            Self::Empty => Ok(builder),
            Self::Json(value) => Ok(builder.json(value)),
            Self::Text(text) => Ok(builder
                .header(reqwest::header::CONTENT_TYPE, "text/plain; charset=utf-8")
                .body(text.clone())),
            Self::Multipart(parts) => {
                let mut form = Form::new();
                for part in parts {
                    form = form.part(part.name.clone(), part.to_reqwest()?);
                }
                Ok(builder.multipart(form))
            }
        }
    }
}

/// One field of a multipart body, held as bytes so it can be resent
#[derive(Clone, PartialEq, Eq)]
pub struct MultipartPart {
    pub name: String,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl MultipartPart {
    /// A file field, e.g. an uploaded image.
    pub fn file(
        name: impl Into<String>,
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            file_name: Some(file_name.into()),
            mime_type: Some(mime_type.into()),
            bytes,
        }
    }

    fn to_reqwest(&self) -> Result<Part, ApiError> {
        let mut part = Part::bytes(self.bytes.clone());
        if let Some(file_name) = &self.file_name {
            part = part.file_name(file_name.clone());
        }
        if let Some(mime) = &self.mime_type {
            part = part.mime_str(mime).map_err(|e| {
                ApiError::Serialization(format!("Invalid MIME type '{}': {}", mime, e))
            })?;
        }
        Ok(part)
    }
}

impl fmt::Debug for MultipartPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultipartPart")
            .field("name", &self.name)
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
