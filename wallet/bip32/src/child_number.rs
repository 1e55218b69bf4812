//! Child numbers

use crate::{Error, Result};
use core::{
    fmt::{self, Display},
    str::FromStr,
};
use serde::{Deserialize, Serialize};

/// Index of a particular child key for a given (extended) private key.
///
/// The low 31 bits carry the index, bit 31 marks the step as hardened.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChildNumber(pub u32);

impl ChildNumber {
    /// Size of a child number when serialized
    pub const BYTE_SIZE: usize = 4;

    /// Hardened child keys use indices 2^31 through 2^32-1.
    pub const HARDENED_FLAG: u32 = 1 << 31;

    /// Create new [`ChildNumber`] with the given index and hardened flag.
    ///
    /// Returns an error if the index is greater than or equal to
    /// [`ChildNumber::HARDENED_FLAG`].
    pub fn new(index: u32, hardened: bool) -> Result<Self> {
        if index & Self::HARDENED_FLAG == 0 {
            let mut child = index;
            if hardened {
                child |= Self::HARDENED_FLAG;
            }
            Ok(ChildNumber(child))
        } else {
            Err(Error::ChildNumber(index))
        }
    }

    /// Parse a child number from the 4-byte big-endian serialization.
    pub fn from_bytes(bytes: [u8; Self::BYTE_SIZE]) -> Self {
        u32::from_be_bytes(bytes).into()
    }

    /// Serialize this child number as bytes.
    pub fn to_bytes(&self) -> [u8; Self::BYTE_SIZE] {
        self.0.to_be_bytes()
    }

    /// Get the index number for this [`ChildNumber`], i.e. with
    /// [`ChildNumber::HARDENED_FLAG`] cleared.
    pub fn index(&self) -> u32 {
        self.0 & !Self::HARDENED_FLAG
    }

    /// Is this child number within the hardened range?
    pub fn is_hardened(&self) -> bool {
        self.0 & Self::HARDENED_FLAG != 0
    }
}

impl From<u32> for ChildNumber {
    fn from(n: u32) -> ChildNumber {
        ChildNumber(n)
    }
}

impl From<ChildNumber> for u32 {
    fn from(n: ChildNumber) -> u32 {
        n.0
    }
}

impl Display for ChildNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())?;

        if self.is_hardened() {
            f.write_str("'")?;
        }

        Ok(())
    }
}

impl FromStr for ChildNumber {
    type Err = Error;

    fn from_str(child: &str) -> Result<ChildNumber> {
        let (digits, hardened) = match child.strip_suffix(['\'', 'h']) {
            Some(digits) => (digits, true),
            None => (child, false),
        };

        // `u32::from_str` tolerates a leading `+`
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::PathSegment(child.to_string()));
        }

        let index = digits.parse::<u32>().map_err(|_| Error::PathSegment(child.to_string()))?;
        ChildNumber::new(index, hardened)
    }
}

#[cfg(test)]
mod tests {
    use super::ChildNumber;
    use crate::Error;

    #[test]
    fn hardened_bit() {
        let child = ChildNumber::new(44, true).unwrap();
        assert_eq!(child.0, 0x8000_002c);
        assert_eq!(child.index(), 44);
        assert!(child.is_hardened());
        assert_eq!(child.to_string(), "44'");

        let child = ChildNumber::new(5, false).unwrap();
        assert_eq!(child.0, 5);
        assert!(!child.is_hardened());
        assert_eq!(child.to_string(), "5");
    }

    #[test]
    fn index_out_of_range() {
        assert_eq!(ChildNumber::new(0x8000_0000, false), Err(Error::ChildNumber(0x8000_0000)));
        assert!(ChildNumber::new(0x7fff_ffff, true).is_ok());
    }

    #[test]
    fn parse() {
        assert_eq!("0".parse::<ChildNumber>().unwrap().0, 0);
        assert_eq!("0'".parse::<ChildNumber>().unwrap().0, 0x8000_0000);
        assert_eq!("0h".parse::<ChildNumber>().unwrap().0, 0x8000_0000);
        assert_eq!("2147483647'".parse::<ChildNumber>().unwrap().0, u32::MAX);

        for bad in ["", "'", "h", "2147483648", "4294967296", "+1", "-1", "1''", "1 ", "0x10", "1H"] {
            assert!(bad.parse::<ChildNumber>().is_err(), "`{bad}` should not parse");
        }
    }

    #[test]
    fn bytes() {
        let child = ChildNumber(0x8000_002c);
        assert_eq!(child.to_bytes(), [0x80, 0x00, 0x00, 0x2c]);
        assert_eq!(ChildNumber::from_bytes(child.to_bytes()), child);
    }
}
