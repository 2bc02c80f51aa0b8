//! Outer JSON shapes exchanged with a paste service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{EncodingError, NetworkError};

/// Wire protocol version this client speaks.
pub const PROTOCOL_VERSION: u8 = 2;

/// Request body for submitting a new paste.
#[derive(Debug, Clone, Serialize)]
pub struct PutRequest {
    pub v: u8,
    pub adata: Value,
    pub meta: PutMeta,
    pub ct: String,
}

/// The `meta` sub-object of a [`PutRequest`].
#[derive(Debug, Clone, Serialize)]
pub struct PutMeta {
    pub expire: String,
}

impl PutRequest {
    /// Builds the request body for a sealed envelope with the given
    /// expiry token.
    pub fn new(adata: Value, ct: String, expire: impl Into<String>) -> Self {
        Self {
            v: PROTOCOL_VERSION,
            adata,
            meta: PutMeta { expire: expire.into() },
            ct,
        }
    }
}

/// Response body returned by both the submit and fetch endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerResponse {
    pub status: i64,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub adata: Option<Value>,
    #[serde(default)]
    pub ct: Option<String>,
}

impl ServerResponse {
    /// Parses a response body, rejecting anything reporting a non-zero
    /// `status`.
    pub fn parse(body: &str) -> Result<Self, crate::errors::PasteError> {
        let resp: ServerResponse = serde_json::from_str(body).map_err(EncodingError::Json)?;
        if resp.status != 0 {
            return Err(NetworkError::ServerStatus(resp.message.clone()).into());
        }
        Ok(resp)
    }

    /// Returns the envelope's `adata`/`ct` pair, failing if either is
    /// absent (as happens on a fetch of a nonexistent paste).
    pub fn envelope(&self) -> Result<(&Value, &str), crate::errors::PasteError> {
        let adata = self
            .adata
            .as_ref()
            .ok_or_else(|| EncodingError::MalformedEnvelope("response missing adata".into()))?;
        let ct = self
            .ct
            .as_deref()
            .ok_or_else(|| EncodingError::MalformedEnvelope("response missing ct".into()))?;
        Ok((adata, ct))
    }
}
