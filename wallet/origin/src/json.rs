//!
//! JSON interchange form of a [`KeyOriginInfo`]:
//! `{ "fingerprint": 3735928559, "path": [2147483692, 2147483648, 5] }`.
//!
//! `fingerprint` is left out when unknown. On import `path` may also be a
//! path string such as `"m/44'/0'/5"`.
//!

use crate::error::ValidationError;
use crate::origin::KeyOriginInfo;
use crate::result::Result;
use keyorigin_bip32::{ChildNumber, DerivationPath, KeyFingerprint};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

fn as_u32(value: &Value) -> Option<u32> {
    value.as_u64().and_then(|value| u32::try_from(value).ok())
}

impl KeyOriginInfo {
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        if let Some(fingerprint) = self.fingerprint {
            object.insert("fingerprint".to_string(), Value::from(fingerprint.to_u32()));
        }
        object.insert("path".to_string(), self.path.iter().map(|child| Value::from(child.0)).collect());
        Value::Object(object)
    }

    /// Read an origin from its JSON object.
    ///
    /// An absent or `null` fingerprint means "unknown"; `0` is a regular
    /// fingerprint. An absent, `null` or empty `path` is the empty path.
    pub fn from_json(json: &Value) -> Result<Self> {
        let object = json.as_object().ok_or(ValidationError::Field { field: "key origin", expected: "a JSON object" })?;

        let fingerprint = match object.get("fingerprint") {
            None | Some(Value::Null) => None,
            Some(value) => {
                let fingerprint = as_u32(value).ok_or_else(|| ValidationError::Fingerprint(value.to_string()))?;
                Some(KeyFingerprint::from_u32(fingerprint))
            }
        };

        let path = match object.get("path") {
            None | Some(Value::Null) => DerivationPath::default(),
            Some(Value::Array(elements)) => elements
                .iter()
                .enumerate()
                .map(|(index, value)| {
                    as_u32(value).map(ChildNumber::from).ok_or_else(|| ValidationError::PathElement { index, value: value.to_string() })
                })
                .collect::<std::result::Result<DerivationPath, _>>()?,
            Some(Value::String(path)) => path.parse::<DerivationPath>()?,
            Some(_) => {
                return Err(ValidationError::Field { field: "path", expected: "an array of unsigned 32-bit integers or a path string" }.into());
            }
        };

        Ok(Self { fingerprint, path })
    }
}

impl Serialize for KeyOriginInfo {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for KeyOriginInfo {
    fn deserialize<D>(deserializer: D) -> std::result::Result<KeyOriginInfo, D::Error>
    where
        D: Deserializer<'de>,
    {
        let json = Value::deserialize(deserializer)?;
        KeyOriginInfo::from_json(&json).map_err(|err| de::Error::custom(err.to_string()))
    }
}
