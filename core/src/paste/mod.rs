//! Configuration structs and the `Put`/`Get` operations that compose
//! the envelope codec, host directory, and host selector into a full
//! paste round trip.

pub mod get;
pub mod put;

use serde::{Deserialize, Serialize};

use crate::hosts::Expiry;

pub use get::get;
pub use put::put;

fn default_expiry() -> Expiry {
    Expiry::default()
}

/// Options controlling a `Put` operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasteOptions {
    #[serde(default = "default_expiry")]
    pub expiry: Expiry,
    #[serde(default)]
    pub burn_after_read: bool,
    #[serde(default)]
    pub open_discussion: bool,
    #[serde(default)]
    pub password: Option<String>,
}

impl Default for PasteOptions {
    fn default() -> Self {
        Self {
            expiry: default_expiry(),
            burn_after_read: false,
            open_discussion: false,
            password: None,
        }
    }
}

/// Options controlling a `Get` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOptions {
    #[serde(default)]
    pub password: Option<String>,
}
