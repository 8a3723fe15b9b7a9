// spooltag/src/keys/mod.rs

pub mod derive;
pub mod sources;

pub use derive::derive_keys;
pub use sources::{keys_to_dictionary, load_keys_from_binary, load_keys_from_dictionary};

use log::{debug, warn};

use crate::constants::CLASSIC_1K_BYTES;
use crate::types::{MifareKey, Uid};
use crate::{Error, Result};

/// Explicit key material handed in by the caller, already read from disk.
#[derive(Debug, Clone, Copy)]
pub enum KeySource<'a> {
    /// Concatenated 6-byte keys with zero padding.
    Binary(&'a [u8]),
    /// `.dic` dictionary text, one 12-hex key per line.
    Dictionary(&'a str),
}

impl KeySource<'_> {
    fn load(&self) -> Vec<MifareKey> {
        match self {
            KeySource::Binary(bytes) => load_keys_from_binary(bytes),
            KeySource::Dictionary(text) => load_keys_from_dictionary(text),
        }
    }
}

/// Resolve keys for a dump, in precedence order: explicit source, companion
/// binary key file, companion dictionary, UID derivation. The first source
/// yielding at least one key wins.
///
/// File discovery and reading belong to the caller; this function only sees
/// the material that was found. Fails with `NoKeysAvailable` once every
/// source is exhausted.
pub fn resolve_keys(
    explicit: Option<KeySource<'_>>,
    companion_bin: Option<&[u8]>,
    companion_dic: Option<&str>,
    uid: &Uid,
) -> Result<Vec<MifareKey>> {
    if let Some(source) = explicit {
        let keys = source.load();
        if !keys.is_empty() {
            debug!("resolved {} keys from explicit source", keys.len());
            return Ok(keys);
        }
    }

    if let Some(bytes) = companion_bin {
        let keys = load_keys_from_binary(bytes);
        if !keys.is_empty() {
            debug!("resolved {} keys from companion key file", keys.len());
            return Ok(keys);
        }
    }

    if let Some(text) = companion_dic {
        let keys = load_keys_from_dictionary(text);
        if !keys.is_empty() {
            debug!("resolved {} keys from companion dictionary", keys.len());
            return Ok(keys);
        }
    }

    match derive::derive_keys(uid) {
        Ok(keys) if !keys.is_empty() => {
            debug!("derived {} keys from UID {}", keys.len(), uid.to_hex());
            Ok(keys)
        }
        Ok(_) => Err(Error::NoKeysAvailable),
        Err(Error::KeyDerivationUnavailable) => {
            warn!("UID key derivation unavailable and no other key source matched");
            Err(Error::NoKeysAvailable)
        }
        Err(err) => Err(err),
    }
}

/// Companion binary key file names probed next to a dump, in order.
/// `stem` is the dump file name without its `.bin` extension.
pub fn key_bin_candidates(stem: &str, uid: &Uid) -> [String; 3] {
    let uid_hex = uid.to_hex();
    [
        format!("{stem}-key.bin"),
        format!("{uid_hex}-key.bin"),
        format!("hf-mf-{uid_hex}-key.bin"),
    ]
}

/// Companion dictionary file names probed next to a dump, in order.
pub fn key_dic_candidates(stem: &str, uid: &Uid) -> [String; 3] {
    let uid_hex = uid.to_hex();
    [
        format!("{stem}.dic"),
        format!("{uid_hex}.dic"),
        format!("hf-mf-{uid_hex}-key.dic"),
    ]
}

/// Validating pass-through decrypt step.
///
/// These dumps are acquired plaintext; the Crypto1 stream cipher is out of
/// scope. This step still enforces that a key set was resolved so batch
/// accounting matches the real pipeline, and warns about undersized dumps.
pub fn decrypt_dump<'a>(dump: &'a [u8], keys: &[MifareKey]) -> Result<&'a [u8]> {
    if keys.is_empty() {
        return Err(Error::NoKeysAvailable);
    }
    if dump.len() < CLASSIC_1K_BYTES {
        warn!("dump is only {} bytes, smaller than a 1K card", dump.len());
    }
    Ok(dump)
}
