//! Unified error types for the paste envelope and host selection engine.
//!
//! Each layer of the system (input validation, cryptography, wire
//! encoding, network transport) gets its own error enum; [`PasteError`]
//! aggregates them for callers that just want one type to match on.

use thiserror::Error;

/// Top-level error type encompassing all categories below.
#[derive(Error, Debug)]
pub enum PasteError {
    /// A problem with caller-supplied input (flags, options, URLs).
    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    /// A cryptographic operation failed.
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    /// Encoding or decoding the wire envelope failed.
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// Host selection or HTTP transport failed.
    #[error("network error: {0}")]
    Network(#[from] NetworkError),
}

/// Errors arising from caller-supplied input before any network traffic.
#[derive(Error, Debug)]
pub enum InputError {
    /// `burn_after_read` and `open_discussion` were both requested.
    #[error("burn-after-read and open-discussion are mutually exclusive")]
    ConflictingFlags,

    /// The requested expiry token is not one this system knows about.
    #[error("unknown expiry token: {0}")]
    UnknownExpiry(String),

    /// A paste URL did not have the expected `<host>?<id>#<secret>` shape.
    #[error("malformed paste URL: {0}")]
    MalformedUrl(String),

    /// Put mode was invoked with no URL argument and stdin is a terminal,
    /// not a pipe or redirect.
    #[error("put mode requires piped stdin (no paste URL was given, and stdin is a terminal)")]
    NoPipedInput,
}

/// Errors from random generation, key derivation, or AEAD sealing/opening.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// The system CSPRNG failed to produce random bytes.
    #[error("failed to obtain random bytes: {0}")]
    RandomSourceFailed(String),

    /// AEAD encryption failed (should not happen with valid inputs).
    #[error("encryption failed")]
    EncryptFailed,

    /// AEAD decryption failed: wrong key, wrong password, or tampering.
    #[error("decryption failed: wrong key, wrong password, or tampered envelope")]
    DecryptFailed,
}

/// Errors from (de)serializing the wire envelope or its inner framing.
#[derive(Error, Debug)]
pub enum EncodingError {
    /// Base64 decoding failed.
    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Base58 decoding failed.
    #[error("base58 decode error: {0}")]
    Base58(#[from] bs58::decode::Error),

    /// JSON (de)serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// DEFLATE compression or decompression failed.
    #[error("compression error: {0}")]
    Compression(#[from] std::io::Error),

    /// The envelope was missing a required field or had the wrong shape.
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),
}

/// Errors from host probing or the paste HTTP transport.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// No candidate host answered the TCP probe within the time budget.
    #[error("no live host found among {candidates} candidates")]
    NoLiveHost {
        /// Number of hosts that were probed.
        candidates: usize,
    },

    /// No host in the directory advertises the requested options.
    #[error("no host supports expiry={expiry:?} features={features:?}")]
    NoMatchingHost {
        /// The requested expiry token.
        expiry: String,
        /// The requested feature set.
        features: Vec<String>,
    },

    /// The HTTP request itself failed (DNS, TLS, connection reset, ...).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server responded with a non-zero `status` field.
    #[error("server reported failure: {0}")]
    ServerStatus(String),
}
