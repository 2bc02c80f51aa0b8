//! Envelope cryptosystem and host selection engine for the paste CLI.
//!
//! [`paste::put`] and [`paste::get`] are the entry points most callers
//! need; the `envelope`, `hosts`, `kdf`, and `random` modules are the
//! building blocks they compose.

pub mod envelope;
pub mod errors;
pub mod hosts;
pub mod kdf;
pub mod paste;
pub mod random;
