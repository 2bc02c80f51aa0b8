//! Sealing and opening of the paste envelope: inner JSON framing, raw
//! DEFLATE compression, and AES-256-GCM authenticated encryption.

use aes_gcm::aead::{Aead, Payload};
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use serde_json::{json, Value};
use std::io::{Read, Write};

use crate::envelope::adata;
use crate::errors::{CryptoError, EncodingError};
use crate::kdf::derive_key;

/// Maps arbitrary bytes to a `String` one byte per `char` (codepoints
/// `U+0000`..=`U+00FF`), so the inner `{"paste": ...}` JSON framing can
/// carry plaintext that is not valid UTF-8 without ever lossily
/// substituting it. [`bytes_from_latin1`] is the exact inverse.
fn bytes_to_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Inverse of [`bytes_to_latin1`]. Fails if any character is outside
/// `U+0000..=U+00FF`, which would mean the inner JSON was not produced
/// by this codec.
fn bytes_from_latin1(text: &str) -> Result<Vec<u8>, EncodingError> {
    text.chars()
        .map(|c| {
            u8::try_from(c as u32)
                .map_err(|_| EncodingError::MalformedEnvelope("inner paste text outside byte range".into()))
        })
        .collect()
}

/// A sealed envelope ready to be placed on the wire: the base64 text of
/// `ciphertext || tag`, plus the `adata` array that authenticated it.
pub struct Sealed {
    /// Base64 (unpadded standard) ciphertext-and-tag, as sent in `ct`.
    pub ct_b64: String,
    /// The associated-data array sent alongside `ct`.
    pub adata: Value,
}

/// Compresses and encrypts `plaintext` under the key derived from
/// `kdf_secret` (and optional `password`), with fresh `salt` and
/// `nonce` supplied by the caller.
pub fn seal(
    plaintext: &[u8],
    kdf_secret: &[u8],
    password: Option<&str>,
    salt: &[u8],
    nonce: &[u8],
    open_discussion: bool,
    burn_after_read: bool,
) -> Result<Sealed, crate::errors::PasteError> {
    let inner = json!({ "paste": bytes_to_latin1(plaintext) });
    let inner_bytes = serde_json::to_vec(&inner).map_err(EncodingError::Json)?;

    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(&inner_bytes).map_err(EncodingError::Compression)?;
    let compressed = encoder.finish().map_err(EncodingError::Compression)?;

    let adata = adata::build(nonce, salt, open_discussion, burn_after_read);
    let aad = serde_json::to_vec(&adata).map_err(EncodingError::Json)?;

    let key = derive_key(kdf_secret, password, salt);
    let cipher = Aes256Gcm::new_from_slice(&key).map_err(|_| CryptoError::EncryptFailed)?;
    let gcm_nonce = Nonce::from_slice(nonce);

    let ciphertext = cipher
        .encrypt(gcm_nonce, Payload { msg: &compressed, aad: &aad })
        .map_err(|_| CryptoError::EncryptFailed)?;

    Ok(Sealed {
        ct_b64: STANDARD_NO_PAD.encode(&ciphertext),
        adata,
    })
}

/// Decrypts and decompresses a sealed envelope, returning the original
/// plaintext bytes.
pub fn open(
    ct_b64: &str,
    adata: &Value,
    kdf_secret: &[u8],
    password: Option<&str>,
) -> Result<Vec<u8>, crate::errors::PasteError> {
    let (nonce, salt) = adata::extract_nonce_and_salt(adata)?;
    let ciphertext = STANDARD_NO_PAD
        .decode(ct_b64)
        .map_err(EncodingError::Base64)?;

    let aad = serde_json::to_vec(adata).map_err(EncodingError::Json)?;
    let key = derive_key(kdf_secret, password, &salt);
    let cipher = Aes256Gcm::new_from_slice(&key).map_err(|_| CryptoError::DecryptFailed)?;
    let gcm_nonce = Nonce::from_slice(&nonce);

    let compressed = cipher
        .decrypt(gcm_nonce, Payload { msg: &ciphertext, aad: &aad })
        .map_err(|_| CryptoError::DecryptFailed)?;

    let mut decoder = DeflateDecoder::new(&compressed[..]);
    let mut inner_bytes = Vec::new();
    decoder
        .read_to_end(&mut inner_bytes)
        .map_err(EncodingError::Compression)?;

    let inner: Value = serde_json::from_slice(&inner_bytes).map_err(EncodingError::Json)?;
    let paste = inner
        .get("paste")
        .and_then(Value::as_str)
        .ok_or_else(|| EncodingError::MalformedEnvelope("inner JSON missing paste field".into()))?;

    Ok(bytes_from_latin1(paste)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"01234567890123456789012345678901";
    const SALT: &[u8] = b"saltsalt";
    const NONCE: &[u8] = b"noncenonce12";

    #[test]
    fn round_trip_without_password() {
        let sealed = seal(b"hello", SECRET, None, SALT, NONCE, false, false).unwrap();
        let plaintext = open(&sealed.ct_b64, &sealed.adata, SECRET, None).unwrap();
        assert_eq!(plaintext, b"hello");
    }

    #[test]
    fn round_trip_with_password() {
        let sealed = seal(b"secret", SECRET, Some("s3same"), SALT, NONCE, false, true).unwrap();
        let plaintext = open(&sealed.ct_b64, &sealed.adata, SECRET, Some("s3same")).unwrap();
        assert_eq!(plaintext, b"secret");
    }

    #[test]
    fn wrong_password_fails() {
        let sealed = seal(b"secret", SECRET, Some("s3same"), SALT, NONCE, false, true).unwrap();
        let result = open(&sealed.ct_b64, &sealed.adata, SECRET, None);
        assert!(result.is_err());
    }

    #[test]
    fn empty_plaintext_round_trips() {
        let sealed = seal(b"", SECRET, None, SALT, NONCE, false, false).unwrap();
        let plaintext = open(&sealed.ct_b64, &sealed.adata, SECRET, None).unwrap();
        assert_eq!(plaintext, b"");
    }

    #[test]
    fn large_plaintext_round_trips() {
        let big = vec![b'x'; 1 << 20];
        let sealed = seal(&big, SECRET, None, SALT, NONCE, false, false).unwrap();
        let plaintext = open(&sealed.ct_b64, &sealed.adata, SECRET, None).unwrap();
        assert_eq!(plaintext, big);
    }

    #[test]
    fn tampering_with_ciphertext_breaks_decryption() {
        let sealed = seal(b"hello", SECRET, None, SALT, NONCE, false, false).unwrap();
        let mut ct = STANDARD_NO_PAD.decode(&sealed.ct_b64).unwrap();
        let last = ct.len() - 1;
        ct[last] ^= 0xff;
        let tampered = STANDARD_NO_PAD.encode(&ct);
        let result = open(&tampered, &sealed.adata, SECRET, None);
        assert!(result.is_err());
    }

    #[test]
    fn tampering_with_adata_breaks_decryption() {
        let sealed = seal(b"hello", SECRET, None, SALT, NONCE, false, false).unwrap();
        let mut adata = sealed.adata.clone();
        adata[2] = true;
        let result = open(&sealed.ct_b64, &adata, SECRET, None);
        assert!(result.is_err());
    }

    #[test]
    fn ciphertext_is_unpadded_base64() {
        let sealed = seal(b"hello", SECRET, None, SALT, NONCE, false, false).unwrap();
        assert!(!sealed.ct_b64.ends_with('='));
    }

    #[test]
    fn invalid_utf8_plaintext_round_trips_byte_for_byte() {
        let invalid = b"\xff\xfe\x80garbage\x00\xc0\xaf";
        let sealed = seal(invalid, SECRET, None, SALT, NONCE, false, false).unwrap();
        let plaintext = open(&sealed.ct_b64, &sealed.adata, SECRET, None).unwrap();
        assert_eq!(plaintext, invalid);
    }

    #[test]
    fn latin1_helpers_round_trip_every_byte_value() {
        let all_bytes: Vec<u8> = (0..=255).collect();
        let text = bytes_to_latin1(&all_bytes);
        let back = bytes_from_latin1(&text).unwrap();
        assert_eq!(back, all_bytes);
    }
}
