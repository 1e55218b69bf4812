//!
//! # Key origin
//!
//! [`KeyOriginInfo`] records which master key a key descends from (its
//! 4-byte fingerprint) and the derivation path that produced it. The same
//! value can be carried as a path string, a compact binary blob, a JSON
//! object or a descriptor `[fingerprint/path]` prefix, and all of these
//! forms convert into one another without loss.
//!

pub mod binary;
pub mod error;
pub mod json;
pub mod origin;
pub mod prelude;
pub mod result;
pub mod wallet_key;

pub use error::{DecodingError, Error, ValidationError};
pub use keyorigin_bip32::{ChildNumber, DerivationPath, KeyFingerprint};
pub use origin::{KeyOriginInfo, OriginState};
pub use result::Result;
pub use wallet_key::{WalletKey, WalletKeyInfo};
