//! Password-based key derivation for the paste envelope.
//!
//! The wire protocol fixes PBKDF2-HMAC-SHA256 at [`KDF_ITERATIONS`]
//! rounds producing a [`KEY_LEN`]-byte AES key; these parameters are
//! part of the protocol and must not be changed independently of the
//! servers this client talks to.

use sha2::Sha256;
use zeroize::Zeroize;

/// PBKDF2 round count mandated by the wire protocol.
pub const KDF_ITERATIONS: u32 = 100_000;
/// Derived key length in bytes (AES-256).
pub const KEY_LEN: usize = 32;

/// Derives the AES-256 key from the paste's KDF secret (and optional
/// password) and its salt.
///
/// When `password` is `Some`, the KDF input is `secret || password_bytes`;
/// when `None`, it is `secret` alone.
pub fn derive_key(secret: &[u8], password: Option<&str>, salt: &[u8]) -> [u8; KEY_LEN] {
    let mut input = secret.to_vec();
    if let Some(password) = password {
        input.extend_from_slice(password.as_bytes());
    }

    let mut key = [0u8; KEY_LEN];
    pbkdf2::pbkdf2_hmac::<Sha256>(&input, salt, KDF_ITERATIONS, &mut key);
    input.zeroize();
    key
}
