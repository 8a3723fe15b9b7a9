// spooltag/src/keys/sources.rs
//! Externally supplied key material.
//!
//! Two key-source formats exist in the wild: raw binary files of
//! concatenated 6-byte keys (Proxmark3 `hf mf` output) and `.dic`
//! dictionaries with one 12-hex-character key per line.

use log::debug;

use crate::constants::KEY_LENGTH;
use crate::types::MifareKey;

/// Load keys from a binary key buffer.
///
/// The buffer is partitioned into consecutive 6-byte chunks. All-zero chunks
/// are padding and are skipped; a short trailing remainder is dropped. Order
/// is preserved.
pub fn load_keys_from_binary(bytes: &[u8]) -> Vec<MifareKey> {
    bytes
        .chunks_exact(KEY_LENGTH)
        .filter_map(|chunk| {
            let mut arr = [0u8; KEY_LENGTH];
            arr.copy_from_slice(chunk);
            let key = MifareKey::from_bytes(arr);
            if key.is_zero() { None } else { Some(key) }
        })
        .collect()
}

/// Load keys from dictionary text, one key per non-blank line.
///
/// A line is accepted only if it is exactly 12 hex characters; malformed
/// lines are skipped, never fatal.
pub fn load_keys_from_dictionary(text: &str) -> Vec<MifareKey> {
    text.lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            match MifareKey::from_hex(line) {
                Ok(key) => Some(key),
                Err(_) => {
                    debug!("skipping malformed dictionary line {:?}", line);
                    None
                }
            }
        })
        .collect()
}

/// Render keys as dictionary text: one uppercase 12-hex-character key per
/// line, newline-terminated.
pub fn keys_to_dictionary(keys: &[MifareKey]) -> String {
    let mut out = String::with_capacity(keys.len() * (KEY_LENGTH * 2 + 1));
    for key in keys {
        out.push_str(&key.to_hex());
        out.push('\n');
    }
    out
}
