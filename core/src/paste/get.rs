//! `Get`: fetch and decrypt a paste from its URL.

use crate::envelope::codec;
use crate::envelope::wire::ServerResponse;
use crate::errors::{InputError, NetworkError, PasteError};
use crate::paste::GetOptions;

/// Splits a paste URL of the form `<host-base>?<id>#<secret>` into its
/// three parts.
fn parse_paste_url(url: &str) -> Result<(&str, &str, &str), InputError> {
    let (before_fragment, fragment) = url
        .split_once('#')
        .ok_or_else(|| InputError::MalformedUrl(url.to_string()))?;
    let (host_base, id) = before_fragment
        .split_once('?')
        .ok_or_else(|| InputError::MalformedUrl(url.to_string()))?;

    if host_base.is_empty() || id.is_empty() || fragment.is_empty() {
        return Err(InputError::MalformedUrl(url.to_string()));
    }
    Ok((host_base, id, fragment))
}

/// Fetches the paste at `url`, decrypts it, and returns the plaintext
/// bytes.
pub async fn get(
    client: &reqwest::Client,
    url: &str,
    options: &GetOptions,
) -> Result<Vec<u8>, PasteError> {
    let (host_base, id, fragment) = parse_paste_url(url)?;
    let kdf_secret = bs58::decode(fragment)
        .into_vec()
        .map_err(crate::errors::EncodingError::Base58)?;

    let fetch_url = format!("{host_base}?pasteid={id}");
    tracing::debug!(host = %host_base, paste_id = %id, "fetching paste");
    let response = client
        .get(&fetch_url)
        .header("X-Requested-With", "JSONHttpRequest")
        .send()
        .await
        .map_err(NetworkError::Request)?;
    let body = response.text().await.map_err(NetworkError::Request)?;
    let parsed = ServerResponse::parse(&body)?;
    let (adata, ct) = parsed.envelope()?;

    let plaintext = codec::open(ct, adata, &kdf_secret, options.password.as_deref())?;
    tracing::info!(paste_id = %id, bytes = plaintext.len(), "paste decrypted");
    Ok(plaintext)
}
