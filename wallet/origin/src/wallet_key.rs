//!
//! Origin derivation from wallet account keys.
//!

use crate::origin::KeyOriginInfo;
use keyorigin_bip32::{ChildNumber, DerivationPath, KeyFingerprint};
use log::debug;
use serde::{Deserialize, Serialize};

/// A key handed out by a wallet account: its serialized public key and
/// its position in the account tree.
pub trait WalletKey {
    fn public_key(&self) -> &[u8];
    fn account(&self) -> u32;
    fn branch(&self) -> u32;
    fn index(&self) -> u32;
}

/// Plain [`WalletKey`] as exchanged with the wallet RPC layer.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletKeyInfo {
    #[serde(with = "hex_bytes")]
    pub public_key: Vec<u8>,
    pub account: u32,
    pub branch: u32,
    pub index: u32,
}

impl WalletKeyInfo {
    pub fn new(public_key: Vec<u8>, account: u32, branch: u32, index: u32) -> Self {
        Self { public_key, account, branch, index }
    }
}

impl WalletKey for WalletKeyInfo {
    fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    fn account(&self) -> u32 {
        self.account
    }

    fn branch(&self) -> u32 {
        self.branch
    }

    fn index(&self) -> u32 {
        self.index
    }
}

impl KeyOriginInfo {
    /// Origin of a wallet key: the hash160 fingerprint of its public key
    /// and the path `account' / branch / index`.
    ///
    /// The account level is always hardened; branch and index are kept as
    /// given.
    pub fn from_wallet_key<K: WalletKey + ?Sized>(key: &K) -> Self {
        let fingerprint = KeyFingerprint::from_public_key(key.public_key());
        let path: DerivationPath = [
            ChildNumber(key.account() | ChildNumber::HARDENED_FLAG),
            ChildNumber(key.branch()),
            ChildNumber(key.index()),
        ]
        .into_iter()
        .collect();

        debug!("derived key origin [{fingerprint}] {path} for account {}", key.account());

        Self { fingerprint: Some(fingerprint), path }
    }
}

mod hex_bytes {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&faster_hex::hex_string(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex = String::deserialize(deserializer)?;
        if hex.len() % 2 != 0 {
            return Err(de::Error::custom("hex string has an odd length"));
        }
        let mut bytes = vec![0u8; hex.len() / 2];
        faster_hex::hex_decode(hex.as_bytes(), &mut bytes).map_err(|err| de::Error::custom(err.to_string()))?;
        Ok(bytes)
    }
}
