//!
//! The [`KeyOriginInfo`] value object.
//!

use crate::error::ValidationError;
use crate::result::Result;
use core::{
    fmt::{self, Display},
    str::FromStr,
};
use keyorigin_bip32::{ChildNumber, DerivationPath, KeyFingerprint, FINGERPRINT_SIZE};

/// Signed storage value meaning "no fingerprint known".
pub const UNSET_FINGERPRINT: i64 = -1;

/// Whether a [`KeyOriginInfo`] carries any origin data.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OriginState {
    /// No fingerprint and an empty path.
    Unset,
    /// Built from a fingerprint, a path, or both.
    Bound,
}

/// Fingerprint of the master key a key descends from, plus the
/// derivation path (root-to-leaf) that produced the key.
///
/// A fingerprint of zero is a real fingerprint; the absence of one is
/// expressed with `None`.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct KeyOriginInfo {
    pub(crate) fingerprint: Option<KeyFingerprint>,
    pub(crate) path: DerivationPath,
}

impl KeyOriginInfo {
    pub fn new(fingerprint: Option<KeyFingerprint>, path: DerivationPath) -> Self {
        Self { fingerprint, path }
    }

    /// Build an origin without a fingerprint from a path string such as
    /// `m/44'/0'/5`.
    pub fn from_path_str(path: &str) -> Result<Self> {
        Ok(Self { fingerprint: None, path: path.parse()? })
    }

    /// Build an origin from signed storage values: `-1` for an unknown
    /// fingerprint and one integer per path element.
    pub fn from_signed_parts(fingerprint: i64, path: &[i64]) -> Result<Self> {
        let fingerprint = match fingerprint {
            UNSET_FINGERPRINT => None,
            value => {
                let value = u32::try_from(value).map_err(|_| ValidationError::Fingerprint(value.to_string()))?;
                Some(KeyFingerprint::from_u32(value))
            }
        };

        let path = path
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                u32::try_from(value)
                    .map(ChildNumber::from)
                    .map_err(|_| ValidationError::PathElement { index, value: value.to_string() })
            })
            .collect::<std::result::Result<DerivationPath, _>>()?;

        Ok(Self { fingerprint, path })
    }

    pub fn state(&self) -> OriginState {
        if self.fingerprint.is_none() && self.path.is_empty() {
            OriginState::Unset
        } else {
            OriginState::Bound
        }
    }

    pub fn is_unset(&self) -> bool {
        self.state() == OriginState::Unset
    }

    pub fn fingerprint(&self) -> Option<KeyFingerprint> {
        self.fingerprint
    }

    /// Fingerprint as a signed storage value, `-1` when unknown.
    pub fn fingerprint_signed(&self) -> i64 {
        self.fingerprint.map(|fingerprint| i64::from(fingerprint.to_u32())).unwrap_or(UNSET_FINGERPRINT)
    }

    pub fn path(&self) -> &DerivationPath {
        &self.path
    }

    /// Format the path as `m/44'/0'/5`.
    pub fn format_path(&self) -> String {
        self.path.to_string()
    }

    /// Reset to the unset state.
    pub fn clear(&mut self) {
        self.fingerprint = None;
        self.path = DerivationPath::default();
    }
}

/// Descriptor notation: `[deadbeef/44'/0'/5]`, or just the path string
/// (`m/44'/0'/5`) when no fingerprint is known.
impl Display for KeyOriginInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fingerprint {
            Some(fingerprint) => {
                write!(f, "[{fingerprint}")?;
                for child_number in self.path.iter() {
                    write!(f, "/{child_number}")?;
                }
                f.write_str("]")
            }
            None => write!(f, "{}", self.path),
        }
    }
}

impl FromStr for KeyOriginInfo {
    type Err = crate::error::Error;

    fn from_str(origin: &str) -> Result<Self> {
        let Some(inner) = origin.strip_prefix('[') else {
            return Self::from_path_str(origin);
        };

        let invalid = |reason| ValidationError::Origin { origin: origin.to_string(), reason };

        let inner = inner.strip_suffix(']').ok_or_else(|| invalid("missing closing `]`"))?;
        let (fingerprint, segments) = match inner.split_once('/') {
            Some((fingerprint, segments)) => (fingerprint, Some(segments)),
            None => (inner, None),
        };

        if fingerprint.len() != FINGERPRINT_SIZE * 2 {
            return Err(invalid("master fingerprint should be 8 hex characters").into());
        }
        let fingerprint = fingerprint.parse::<KeyFingerprint>()?;

        let path = match segments {
            Some(segments) => segments.split('/').map(str::parse::<ChildNumber>).collect::<keyorigin_bip32::Result<DerivationPath>>()?,
            None => DerivationPath::default(),
        };

        Ok(Self { fingerprint: Some(fingerprint), path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn origin(fingerprint: Option<u32>, path: &[u32]) -> KeyOriginInfo {
        KeyOriginInfo::new(fingerprint.map(KeyFingerprint::from_u32), DerivationPath::from(path))
    }

    #[test]
    fn equality_is_length_sensitive() {
        assert_ne!(origin(None, &[1]), origin(None, &[1, 2]));
        assert_ne!(origin(Some(7), &[1, 2]), origin(Some(7), &[1]));
        assert_ne!(origin(Some(7), &[]), origin(Some(7), &[0]));
        assert_eq!(origin(Some(7), &[1, 2]), origin(Some(7), &[1, 2]));
    }

    #[test]
    fn equality_checks_fingerprint_and_order() {
        assert_ne!(origin(Some(0), &[1]), origin(None, &[1]));
        assert_ne!(origin(Some(1), &[1]), origin(Some(2), &[1]));
        assert_ne!(origin(Some(1), &[1, 2]), origin(Some(1), &[2, 1]));
    }

    #[test]
    fn clone_is_independent() {
        let original = origin(Some(0xdeadbeef), &[0x8000_002c, 0x8000_0000, 5]);
        let mut copy = original.clone();
        copy.clear();
        assert!(copy.is_unset());
        assert_eq!(original.path().len(), 3);
        assert_eq!(original.fingerprint(), Some(KeyFingerprint::from_u32(0xdeadbeef)));

        let mut path = original.path().clone();
        path.push(ChildNumber(9));
        assert_eq!(original.path().len(), 3);
    }

    #[test]
    fn clear_resets_fully() {
        let mut info = origin(Some(0), &[1, 2, 3]);
        assert_eq!(info.state(), OriginState::Bound);
        info.clear();
        assert_eq!(info.state(), OriginState::Unset);
        assert_eq!(info.fingerprint(), None);
        assert_eq!(info.fingerprint_signed(), UNSET_FINGERPRINT);
        assert!(info.path().is_empty());
        assert_eq!(info, KeyOriginInfo::default());

        // clearing twice is harmless
        info.clear();
        assert!(info.is_unset());
    }

    #[test]
    fn path_only_origin_is_bound() {
        let info = KeyOriginInfo::from_path_str("m/1").unwrap();
        assert_eq!(info.state(), OriginState::Bound);
        assert_eq!(info.fingerprint(), None);
        assert_eq!(KeyOriginInfo::from_path_str("m").unwrap().state(), OriginState::Unset);
    }

    #[test]
    fn signed_parts() {
        let info = KeyOriginInfo::from_signed_parts(0xdeadbeef, &[0x8000_002c, 0, 5]).unwrap();
        assert_eq!(info, origin(Some(0xdeadbeef), &[0x8000_002c, 0, 5]));
        assert_eq!(info.fingerprint_signed(), 0xdeadbeef);

        let info = KeyOriginInfo::from_signed_parts(UNSET_FINGERPRINT, &[]).unwrap();
        assert!(info.is_unset());

        let info = KeyOriginInfo::from_signed_parts(0, &[]).unwrap();
        assert_eq!(info.fingerprint(), Some(KeyFingerprint::from_u32(0)));
        assert_eq!(info.fingerprint_signed(), 0);
    }

    #[test]
    fn signed_parts_name_the_failing_field() {
        assert_eq!(
            KeyOriginInfo::from_signed_parts(-2, &[]),
            Err(Error::Validation(ValidationError::Fingerprint("-2".to_string())))
        );
        assert_eq!(
            KeyOriginInfo::from_signed_parts(1 << 32, &[]),
            Err(Error::Validation(ValidationError::Fingerprint("4294967296".to_string())))
        );
        assert_eq!(
            KeyOriginInfo::from_signed_parts(1, &[0, 1, -1]),
            Err(Error::Validation(ValidationError::PathElement { index: 2, value: "-1".to_string() }))
        );
        assert_eq!(
            KeyOriginInfo::from_signed_parts(1, &[1 << 32]),
            Err(Error::Validation(ValidationError::PathElement { index: 0, value: "4294967296".to_string() }))
        );
    }

    #[test]
    fn format_path() {
        let info = origin(Some(0xdeadbeef), &[0x8000_002c, 0x8000_0000, 5]);
        assert_eq!(info.format_path(), "m/44'/0'/5");
        assert_eq!(KeyOriginInfo::default().format_path(), "m");
    }

    #[test]
    fn descriptor_notation() {
        let info = origin(Some(0xdeadbeef), &[0x8000_002c, 0x8000_0000, 5]);
        assert_eq!(info.to_string(), "[deadbeef/44'/0'/5]");
        assert_eq!("[deadbeef/44'/0'/5]".parse::<KeyOriginInfo>().unwrap(), info);
        assert_eq!("[DEADBEEF/44h/0h/5]".parse::<KeyOriginInfo>().unwrap(), info);

        let root = origin(Some(0), &[]);
        assert_eq!(root.to_string(), "[00000000]");
        assert_eq!("[00000000]".parse::<KeyOriginInfo>().unwrap(), root);

        let no_fingerprint = origin(None, &[1]);
        assert_eq!(no_fingerprint.to_string(), "m/1");
        assert_eq!("m/1".parse::<KeyOriginInfo>().unwrap(), no_fingerprint);
    }

    #[test]
    fn descriptor_notation_rejects_malformed() {
        for bad in ["[deadbeef/1", "[deadbee/1]", "[deadbeef0/1]", "[deadbeef/]", "[deadbeef//1]", "[xyzxyzxy/1]", "[deadbeef/1]x", "[]"] {
            let err = bad.parse::<KeyOriginInfo>().unwrap_err();
            assert!(err.is_validation(), "`{bad}` should fail validation");
        }
    }
}
