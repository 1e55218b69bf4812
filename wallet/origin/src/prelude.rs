//!
//! Re-exports of the most commonly used types and traits in this crate.
//!

pub use crate::error::*;
pub use crate::origin::*;
pub use crate::wallet_key::*;
pub use keyorigin_bip32::{ChildNumber, DerivationPath, KeyFingerprint};
