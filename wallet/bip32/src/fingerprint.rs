//! Key fingerprints

use crate::{Error, Result};
use core::{
    fmt::{self, Display},
    str::FromStr,
};
use ripemd::Ripemd160;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Size of a key fingerprint in bytes.
pub const FINGERPRINT_SIZE: usize = 4;

/// `RIPEMD160(SHA256(data))`
pub fn hash160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(Sha256::digest(data)).into()
}

/// 4-byte key fingerprint: the leading bytes of the hash160 of a public key.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct KeyFingerprint([u8; FINGERPRINT_SIZE]);

impl KeyFingerprint {
    pub const fn new(bytes: [u8; FINGERPRINT_SIZE]) -> Self {
        KeyFingerprint(bytes)
    }

    /// Compute the fingerprint of a serialized public key.
    pub fn from_public_key(public_key: &[u8]) -> Self {
        let digest = hash160(public_key);
        let mut bytes = [0u8; FINGERPRINT_SIZE];
        bytes.copy_from_slice(&digest[..FINGERPRINT_SIZE]);
        KeyFingerprint(bytes)
    }

    pub const fn from_u32(value: u32) -> Self {
        KeyFingerprint(value.to_be_bytes())
    }

    pub const fn to_u32(&self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; FINGERPRINT_SIZE] {
        &self.0
    }
}

impl From<u32> for KeyFingerprint {
    fn from(value: u32) -> Self {
        KeyFingerprint::from_u32(value)
    }
}

impl From<KeyFingerprint> for u32 {
    fn from(fingerprint: KeyFingerprint) -> u32 {
        fingerprint.to_u32()
    }
}

impl From<[u8; FINGERPRINT_SIZE]> for KeyFingerprint {
    fn from(bytes: [u8; FINGERPRINT_SIZE]) -> Self {
        KeyFingerprint(bytes)
    }
}

impl AsRef<[u8]> for KeyFingerprint {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for KeyFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut hex = [0u8; FINGERPRINT_SIZE * 2];
        f.write_str(faster_hex::hex_encode(&self.0, &mut hex).map_err(|_| fmt::Error)?)
    }
}

impl FromStr for KeyFingerprint {
    type Err = Error;

    fn from_str(hex: &str) -> Result<Self> {
        if hex.len() != FINGERPRINT_SIZE * 2 {
            return Err(Error::Fingerprint(hex.to_string()));
        }
        let mut bytes = [0u8; FINGERPRINT_SIZE];
        faster_hex::hex_decode(hex.as_bytes(), &mut bytes).map_err(|_| Error::Fingerprint(hex.to_string()))?;
        Ok(KeyFingerprint(bytes))
    }
}
