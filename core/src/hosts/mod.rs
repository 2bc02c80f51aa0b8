//! The directory of known paste instances and the selector that races
//! candidates for liveness and latency.

pub mod directory;
pub mod selector;
pub mod table;

pub use directory::{Expiry, Feature, HostDescriptor, HostDirectory};
pub use selector::find_fastest;
