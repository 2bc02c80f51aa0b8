//! The authenticated associated-data block.
//!
//! `adata` is a 4-element JSON array that is serialized once and fed
//! verbatim to the AEAD as associated data, binding the encryption
//! parameters and the discussion/burn flags into the authentication tag.

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;
use serde_json::{json, Value};

use crate::errors::EncodingError;
use crate::kdf::KDF_ITERATIONS;

/// Display format advertised for every paste; this client never asks
/// for plain text formatting.
pub const DISPLAY_FORMAT: &str = "syntaxhighlighting";

/// AES key size in bits, as advertised in `adata`.
const AES_KEY_BITS: u32 = 256;
/// GCM tag size in bits, as advertised in `adata`.
const GCM_TAG_BITS: u32 = 128;

/// Builds the 4-element `adata` array for a paste with the given
/// nonce, salt, and flags.
pub fn build(nonce: &[u8], salt: &[u8], open_discussion: bool, burn_after_read: bool) -> Value {
    json!([
        [
            STANDARD_NO_PAD.encode(nonce),
            STANDARD_NO_PAD.encode(salt),
            KDF_ITERATIONS,
            AES_KEY_BITS,
            GCM_TAG_BITS,
            "aes",
            "gcm",
            "zlib",
        ],
        DISPLAY_FORMAT,
        open_discussion as u8,
        burn_after_read as u8,
    ])
}

/// Extracts the nonce and salt from a previously-built `adata` value.
pub fn extract_nonce_and_salt(adata: &Value) -> Result<(Vec<u8>, Vec<u8>), EncodingError> {
    let params = adata
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| EncodingError::MalformedEnvelope("adata[0] missing or not an array".into()))?;

    let nonce_b64 = params
        .first()
        .and_then(Value::as_str)
        .ok_or_else(|| EncodingError::MalformedEnvelope("adata[0][0] missing nonce".into()))?;
    let salt_b64 = params
        .get(1)
        .and_then(Value::as_str)
        .ok_or_else(|| EncodingError::MalformedEnvelope("adata[0][1] missing salt".into()))?;

    let nonce = STANDARD_NO_PAD.decode(nonce_b64)?;
    let salt = STANDARD_NO_PAD.decode(salt_b64)?;
    Ok((nonce, salt))
}
