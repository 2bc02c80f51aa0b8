//! Stdin/stdout/file plumbing and the CLI's own base64 pre/post
//! encoding of user content (distinct from the envelope's internal
//! unpadded base64, see `pbin_core::envelope`).

use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Reads all of stdin to completion.
pub async fn read_stdin() -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    tokio::io::stdin().read_to_end(&mut buf).await?;
    Ok(buf)
}

/// Writes `bytes` to `path` if given, otherwise to stdout.
pub async fn write_output(bytes: &[u8], path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            tokio::fs::write(path, bytes).await?;
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(bytes).await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}

/// Encodes bytes with standard padded base64 (the CLI's own
/// `-base64` pre-encoding, applied before a paste is ever sealed).
pub fn encode_base64(bytes: &[u8]) -> String {
    BASE64_STANDARD.encode(bytes)
}

/// Decodes bytes previously produced by [`encode_base64`].
pub fn decode_base64(text: &[u8]) -> anyhow::Result<Vec<u8>> {
    let text = std::str::from_utf8(text)?;
    Ok(BASE64_STANDARD.decode(text.trim())?)
}
