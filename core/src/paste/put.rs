//! `Put`: encrypt a paste and submit it to the fastest live host that
//! supports the requested options.

use crate::envelope::codec;
use crate::envelope::wire::{PutRequest, ServerResponse};
use crate::errors::{InputError, NetworkError, PasteError};
use crate::hosts::{find_fastest, Feature, HostDirectory};
use crate::paste::PasteOptions;
use crate::random::random_bytes;

const SALT_LEN: usize = 8;
const NONCE_LEN: usize = 12;
const SECRET_LEN: usize = 32;

fn required_features(options: &PasteOptions) -> Vec<Feature> {
    let mut features = Vec::new();
    if options.burn_after_read {
        features.push(Feature::Burn);
    }
    if options.open_discussion {
        features.push(Feature::Discussion);
    }
    features
}

/// Encrypts `plaintext` under fresh random key material and submits it
/// to a host selected per `options`, returning the full paste URL
/// (host, server-assigned id, and base58 secret fragment).
pub async fn put(
    client: &reqwest::Client,
    plaintext: &[u8],
    options: &PasteOptions,
) -> Result<String, PasteError> {
    if options.burn_after_read && options.open_discussion {
        return Err(InputError::ConflictingFlags.into());
    }

    let features = required_features(options);
    let candidates = HostDirectory::compiled_in().filter(options.expiry, &features);
    if candidates.is_empty() {
        return Err(NetworkError::NoMatchingHost {
            expiry: options.expiry.as_wire_token().to_string(),
            features: features.iter().map(|f| format!("{f:?}")).collect(),
        }
        .into());
    }

    let host = find_fastest(&candidates).await?;

    let kdf_secret = random_bytes(SECRET_LEN)?;
    let salt = random_bytes(SALT_LEN)?;
    let nonce = random_bytes(NONCE_LEN)?;

    let sealed = codec::seal(
        plaintext,
        &kdf_secret,
        options.password.as_deref(),
        &salt,
        &nonce,
        options.open_discussion,
        options.burn_after_read,
    )?;

    let request = PutRequest::new(sealed.adata, sealed.ct_b64, options.expiry.as_wire_token());
    tracing::debug!(host = %host.base_url, expiry = options.expiry.as_wire_token(), "submitting sealed paste");

    let response = client
        .post(&host.base_url)
        .header("X-Requested-With", "JSONHttpRequest")
        .json(&request)
        .send()
        .await
        .map_err(NetworkError::Request)?;
    let body = response.text().await.map_err(NetworkError::Request)?;
    let parsed = ServerResponse::parse(&body)?;

    tracing::info!(paste_id = %parsed.id, "paste submitted");
    let fragment = bs58::encode(&kdf_secret).into_string();
    Ok(format!("{}?{}#{}", host.base_url, parsed.id, fragment))
}
