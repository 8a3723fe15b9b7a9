// spooltag/src/sector/trailer.rs

use log::debug;
use serde_json::{Map, Value};

use super::Sector;
use crate::constants::{ACCESS_BITS_LENGTH, BYTES_PER_BLOCK, KEY_LENGTH};
use crate::types::{AccessBits, BlockData, MifareKey};
use crate::{Error, Result};

/// Parsed sector trailer: KeyA (bytes 0-5), AccessBits (6-9), KeyB (10-15).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorTrailer {
    pub key_a: MifareKey,
    pub access_bits: AccessBits,
    pub key_b: MifareKey,
}

impl SectorTrailer {
    /// Split a full trailer block into its fixed-width fields.
    pub fn from_block(data: &BlockData) -> Self {
        let bytes = data.as_bytes();
        let mut key_a = [0u8; KEY_LENGTH];
        key_a.copy_from_slice(&bytes[..KEY_LENGTH]);
        let mut access = [0u8; ACCESS_BITS_LENGTH];
        access.copy_from_slice(&bytes[KEY_LENGTH..KEY_LENGTH + ACCESS_BITS_LENGTH]);
        let mut key_b = [0u8; KEY_LENGTH];
        key_b.copy_from_slice(&bytes[KEY_LENGTH + ACCESS_BITS_LENGTH..]);
        Self {
            key_a: MifareKey::from_bytes(key_a),
            access_bits: AccessBits::from_bytes(access),
            key_b: MifareKey::from_bytes(key_b),
        }
    }

    /// Parse a trailer from its 32-character interchange hex form.
    pub fn from_hex(hex: &str, sector: usize) -> Result<Self> {
        if hex.len() != BYTES_PER_BLOCK * 2 {
            return Err(Error::MalformedTrailer {
                sector,
                hex_len: hex.len(),
            });
        }
        let bytes = crate::utils::parse_hex(hex).map_err(|_| Error::MalformedTrailer {
            sector,
            hex_len: hex.len(),
        })?;
        let data = BlockData::try_from(bytes.as_slice())?;
        Ok(Self::from_block(&data))
    }
}

/// Look up a sector's trailer in an interchange blocks map (decimal block
/// index keys, 32-char hex values).
///
/// Returns `None` when the trailer block is absent or its hex form is not
/// exactly 32 characters; callers omit such sectors silently.
pub fn extract_trailer(blocks: &Map<String, Value>, sector: &Sector) -> Option<SectorTrailer> {
    let key = sector.trailer_block().to_string();
    let hex = blocks.get(&key)?.as_str()?;
    match SectorTrailer::from_hex(hex, sector.index()) {
        Ok(trailer) => Some(trailer),
        Err(err) => {
            debug!("skipping sector {}: {}", sector.index(), err);
            None
        }
    }
}
