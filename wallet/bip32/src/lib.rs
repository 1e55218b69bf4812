//!
//! # BIP32 primitives
//!
//! Child numbers, derivation paths and key fingerprints used to
//! describe where a key sits in a hierarchical-deterministic tree.
//!

mod child_number;
mod derivation_path;
mod error;
mod fingerprint;
mod result;

pub use child_number::ChildNumber;
pub use derivation_path::DerivationPath;
pub use error::Error;
pub use fingerprint::{hash160, KeyFingerprint, FINGERPRINT_SIZE};
pub use result::Result;
