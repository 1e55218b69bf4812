//!
//! Binary wire form of a [`KeyOriginInfo`].
//!
//! Layout: the 4-byte big-endian fingerprint followed by one 4-byte
//! big-endian group per path element (hardened bit included). There is no
//! length prefix; the decoder reads path elements until the buffer is
//! exhausted, so a buffer must hold exactly one encoded origin.
//!

use crate::error::{DecodingError, ValidationError};
use crate::origin::KeyOriginInfo;
use crate::result::Result;
use borsh::{io, BorshDeserialize, BorshSerialize};
use keyorigin_bip32::{ChildNumber, DerivationPath, KeyFingerprint, FINGERPRINT_SIZE};
use log::trace;

impl KeyOriginInfo {
    /// Size of the wire encoding in bytes.
    pub fn encoded_len(&self) -> usize {
        FINGERPRINT_SIZE + ChildNumber::BYTE_SIZE * self.path.len()
    }

    /// Append the wire encoding to `buffer`.
    ///
    /// Fails if no fingerprint is known, the wire form has no way to
    /// express that.
    pub fn encode_into(&self, buffer: &mut Vec<u8>) -> Result<()> {
        let fingerprint = self.fingerprint.ok_or(ValidationError::MissingFingerprint)?;
        buffer.reserve(self.encoded_len());
        buffer.extend_from_slice(fingerprint.as_bytes());
        for child_number in self.path.iter() {
            buffer.extend_from_slice(&child_number.to_bytes());
        }
        Ok(())
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::with_capacity(self.encoded_len());
        self.encode_into(&mut buffer)?;
        Ok(buffer)
    }

    /// Decode a buffer holding exactly one encoded origin.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let Some((fingerprint, path)) = bytes.split_first_chunk::<FINGERPRINT_SIZE>() else {
            trace!("rejecting key origin: {} bytes cannot hold a fingerprint", bytes.len());
            return Err(DecodingError::MissingFingerprint(bytes.len()).into());
        };

        let remainder = path.len() % ChildNumber::BYTE_SIZE;
        if remainder != 0 {
            trace!("rejecting key origin: {remainder} trailing bytes after {} path elements", path.len() / ChildNumber::BYTE_SIZE);
            return Err(DecodingError::TruncatedPathElement(remainder).into());
        }

        let path = path
            .chunks_exact(ChildNumber::BYTE_SIZE)
            .map(|chunk| {
                let mut group = [0u8; ChildNumber::BYTE_SIZE];
                group.copy_from_slice(chunk);
                ChildNumber::from_bytes(group)
            })
            .collect::<DerivationPath>();

        Ok(Self { fingerprint: Some(KeyFingerprint::new(*fingerprint)), path })
    }

    /// Hex string of the wire encoding.
    pub fn to_hex(&self) -> Result<String> {
        Ok(faster_hex::hex_string(&self.encode()?))
    }

    pub fn from_hex(hex: &str) -> Result<Self> {
        if hex.len() % 2 != 0 {
            return Err(DecodingError::Hex(format!("odd length {}", hex.len())).into());
        }
        let mut bytes = vec![0u8; hex.len() / 2];
        faster_hex::hex_decode(hex.as_bytes(), &mut bytes).map_err(|err| DecodingError::Hex(err.to_string()))?;
        Self::decode(&bytes)
    }
}

/// Borsh framing: a length-prefixed copy of the wire encoding, so an
/// origin can sit inside a larger borsh payload.
impl BorshSerialize for KeyOriginInfo {
    fn serialize<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        let bytes = self.encode().map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        BorshSerialize::serialize(&bytes, writer)
    }
}

impl BorshDeserialize for KeyOriginInfo {
    fn deserialize_reader<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        let bytes: Vec<u8> = BorshDeserialize::deserialize_reader(reader)?;
        Self::decode(&bytes).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }
}
