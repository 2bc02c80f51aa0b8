//! Integration-level coverage of the argv scanner. `pbin-cli` is a
//! binary-only crate, so (as with the teacher's own binary-crate tests)
//! this test includes the module by path rather than linking a lib.

#[path = "../src/args.rs"]
mod args;

use args::{parse, Mode};
use pbin_core::hosts::Expiry;

#[test]
fn put_mode_is_the_default_with_no_arguments() {
    let cli = parse(&[]).unwrap();
    assert_eq!(cli.mode, Mode::Put);
    assert!(!cli.base64);
    assert!(!cli.burn_after_read);
}

#[test]
fn combining_flags_and_bare_expiry_token_works() {
    let argv: Vec<String> = vec!["-burn", "-month", "-base64"]
        .into_iter()
        .map(String::from)
        .collect();
    let cli = parse(&argv).unwrap();
    assert!(cli.burn_after_read);
    assert!(cli.base64);
    assert_eq!(cli.expiry, Expiry::OneMonth);
}

#[test]
fn get_mode_captures_the_full_url_including_fragment() {
    let argv: Vec<String> = vec!["-o", "out.bin", "https://bin.example/?id#fragment"]
        .into_iter()
        .map(String::from)
        .collect();
    let cli = parse(&argv).unwrap();
    match cli.mode {
        Mode::Get { url } => assert_eq!(url, "https://bin.example/?id#fragment"),
        _ => panic!("expected get mode"),
    }
}
