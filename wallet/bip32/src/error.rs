//! Error type.

use thiserror::Error;

/// [`Error`](enum@Error) variants emitted by the derivation primitives.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("child index {0} is out of range (must be below 2^31)")]
    ChildNumber(u32),

    #[error("invalid path segment `{0}`")]
    PathSegment(String),

    #[error("invalid derivation path `{path}`: {reason}")]
    Path { path: String, reason: &'static str },

    #[error("invalid fingerprint `{0}` (expected 8 hex characters)")]
    Fingerprint(String),
}
