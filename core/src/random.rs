//! CSPRNG access for fresh key material.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::errors::CryptoError;

/// Returns `n` cryptographically random bytes.
///
/// Failure of the system randomness source is unrecoverable: callers
/// must not proceed with weaker randomness as a fallback.
pub fn random_bytes(n: usize) -> Result<Vec<u8>, CryptoError> {
    let mut buf = vec![0u8; n];
    OsRng.try_fill_bytes(&mut buf)
        .map_err(|e| CryptoError::RandomSourceFailed(e.to_string()))?;
    Ok(buf)
}
