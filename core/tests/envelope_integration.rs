//! End-to-end envelope round trips across the `kdf`, `envelope`, and
//! `paste` module boundaries, simulating what actually crosses the wire
//! without requiring a live paste service.

use pbin_core::envelope::codec;
use pbin_core::envelope::wire::{PutRequest, ServerResponse};
use pbin_core::random::random_bytes;

fn fresh_material() -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    (
        random_bytes(32).unwrap(),
        random_bytes(8).unwrap(),
        random_bytes(12).unwrap(),
    )
}

#[test]
fn scenario_plain_hello_round_trips_through_the_wire_shapes() {
    let (secret, salt, nonce) = fresh_material();
    let sealed = codec::seal(b"hello", &secret, None, &salt, &nonce, false, false).unwrap();

    let request = PutRequest::new(sealed.adata.clone(), sealed.ct_b64.clone(), "1week");
    let request_json = serde_json::to_string(&request).unwrap();
    assert!(request_json.contains("\"v\":2"));

    // Simulate the server echoing the envelope back on a subsequent fetch.
    let response_json = format!(
        r#"{{"status":0,"id":"abc123","adata":{},"ct":"{}"}}"#,
        sealed.adata, sealed.ct_b64
    );
    let parsed = ServerResponse::parse(&response_json).unwrap();
    let (adata, ct) = parsed.envelope().unwrap();

    let plaintext = codec::open(ct, adata, &secret, None).unwrap();
    assert_eq!(plaintext, b"hello");
}

#[test]
fn scenario_password_protected_burn_paste_requires_password_to_open() {
    let (secret, salt, nonce) = fresh_material();
    let sealed = codec::seal(b"secret", &secret, Some("s3same"), &salt, &nonce, false, true).unwrap();

    let without_password = codec::open(&sealed.ct_b64, &sealed.adata, &secret, None);
    assert!(without_password.is_err());

    let with_password = codec::open(&sealed.ct_b64, &sealed.adata, &secret, Some("s3same")).unwrap();
    assert_eq!(with_password, b"secret");
}

#[test]
fn scenario_flipped_ct_byte_is_detected_as_tampering() {
    let (secret, salt, nonce) = fresh_material();
    let sealed = codec::seal(b"hello", &secret, None, &salt, &nonce, false, false).unwrap();

    use base64::engine::general_purpose::STANDARD_NO_PAD;
    use base64::Engine;
    let mut ct_bytes = STANDARD_NO_PAD.decode(&sealed.ct_b64).unwrap();
    let last = ct_bytes.len() - 1;
    ct_bytes[last] ^= 0x01;
    let tampered_ct = STANDARD_NO_PAD.encode(&ct_bytes);

    let result = codec::open(&tampered_ct, &sealed.adata, &secret, None);
    assert!(result.is_err());
}

#[test]
fn server_reported_failure_surfaces_message() {
    let body = r#"{"status":1,"message":"paste does not exist, has expired or has been deleted already."}"#;
    let err = ServerResponse::parse(body).unwrap_err();
    assert!(err
        .to_string()
        .contains("paste does not exist, has expired or has been deleted already."));
}

#[test]
fn scenario_invalid_utf8_plaintext_round_trips_exactly() {
    let (secret, salt, nonce) = fresh_material();
    let invalid = b"\xff\xfe\x80not-quite-text\xc0\xaf";
    let sealed = codec::seal(invalid, &secret, None, &salt, &nonce, false, false).unwrap();
    let plaintext = codec::open(&sealed.ct_b64, &sealed.adata, &secret, None).unwrap();
    assert_eq!(plaintext, invalid);
}

#[test]
fn fresh_material_never_collides_across_many_pastes() {
    use std::collections::HashSet;
    let mut secrets = HashSet::new();
    for _ in 0..50 {
        let (secret, _, _) = fresh_material();
        assert!(secrets.insert(secret), "kdf_secret collided across pastes");
    }
}
