//!
//! Error types emitted while building or reading key origins.
//!
//! Every failure is either a [`ValidationError`] (a value is out of range or
//! a field is malformed) or a [`DecodingError`] (a binary buffer has the
//! wrong shape). Callers importing untrusted data can tell the two apart
//! with [`Error::is_validation`] and [`Error::is_decoding`].
//!

use thiserror::Error;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum Error {
    #[error("Validation -> {0}")]
    Validation(#[from] ValidationError),

    #[error("Decoding -> {0}")]
    Decoding(#[from] DecodingError),
}

impl Error {
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    pub fn is_decoding(&self) -> bool {
        matches!(self, Error::Decoding(_))
    }
}

impl From<keyorigin_bip32::Error> for Error {
    fn from(err: keyorigin_bip32::Error) -> Self {
        Error::Validation(err.into())
    }
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ValidationError {
    #[error("fingerprint `{0}` is not an unsigned 32-bit integer")]
    Fingerprint(String),

    #[error("path[{index}] `{value}` is not an unsigned 32-bit integer")]
    PathElement { index: usize, value: String },

    #[error("a fingerprint is required for the binary encoding")]
    MissingFingerprint,

    #[error("`{field}` must be {expected}")]
    Field { field: &'static str, expected: &'static str },

    #[error("invalid key origin `{origin}`: {reason}")]
    Origin { origin: String, reason: &'static str },

    #[error(transparent)]
    Bip32(#[from] keyorigin_bip32::Error),
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum DecodingError {
    #[error("buffer of {0} bytes is too short to hold a fingerprint")]
    MissingFingerprint(usize),

    #[error("{0} trailing bytes do not form a complete path element")]
    TruncatedPathElement(usize),

    #[error("invalid hex string: {0}")]
    Hex(String),
}
