// spooltag/src/interchange/mod.rs
//! Proxmark3-style interchange documents.
//!
//! The JSON schema is canonical and must stay byte-exact for existing
//! tooling that diffs it as text: field order follows the struct layouts
//! below and map entries keep insertion order (`serde_json` is built with
//! `preserve_order`). All hex is uppercase with no separators.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::dump::{CardLayout, to_blocks, uid_from_dump};
use crate::sector::{access_text, extract_trailer, sectors_for};
use crate::types::{Block, BlockData, Uid};
use crate::{Error, Result};

/// Card identity section: UID plus the ATQA/SAK pair for the capacity class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardIdent {
    #[serde(rename = "UID")]
    pub uid: String,
    #[serde(rename = "ATQA")]
    pub atqa: String,
    #[serde(rename = "SAK")]
    pub sak: String,
}

/// Per-sector key material. Field order (KeyA, KeyB, AccessConditions,
/// AccessConditionsText) is part of the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorKeyEntry {
    #[serde(rename = "KeyA")]
    pub key_a: String,
    #[serde(rename = "KeyB")]
    pub key_b: String,
    #[serde(rename = "AccessConditions")]
    pub access_conditions: String,
    #[serde(rename = "AccessConditionsText")]
    pub access_conditions_text: Map<String, Value>,
}

/// The canonical interchange document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterchangeDocument {
    #[serde(rename = "Created")]
    pub created: String,
    #[serde(rename = "FileType")]
    pub file_type: String,
    #[serde(rename = "Card")]
    pub card: CardIdent,
    /// Decimal block index -> 32-character uppercase hex.
    pub blocks: Map<String, Value>,
    /// Decimal sector index -> key entry. Sectors with absent or malformed
    /// trailers are omitted.
    #[serde(rename = "SectorKeys")]
    pub sector_keys: Map<String, Value>,
}

impl InterchangeDocument {
    /// Serialize with 2-space indentation, the format emitted by the
    /// reference tooling.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a document from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Recover typed blocks from the hex map, in map order.
    pub fn block_data(&self) -> Result<Vec<Block>> {
        let mut out = Vec::with_capacity(self.blocks.len());
        for (key, value) in &self.blocks {
            let index: usize = key.parse().map_err(|_| Error::InvalidBlockEntry {
                key: key.clone(),
                reason: "index is not decimal".to_string(),
            })?;
            let hex = value.as_str().ok_or_else(|| Error::InvalidBlockEntry {
                key: key.clone(),
                reason: "value is not a string".to_string(),
            })?;
            let bytes =
                crate::utils::parse_hex(hex).map_err(|reason| Error::InvalidBlockEntry {
                    key: key.clone(),
                    reason,
                })?;
            let data = BlockData::try_from(bytes.as_slice())?;
            out.push(Block::new(index, data));
        }
        Ok(out)
    }

    /// Layout implied by the number of block entries.
    pub fn layout(&self) -> Result<CardLayout> {
        CardLayout::classify(self.blocks.len() * crate::constants::BYTES_PER_BLOCK)
    }

    /// Typed UID from the card section.
    pub fn uid(&self) -> Result<Uid> {
        Uid::from_hex(&self.card.uid)
    }
}

/// Assemble an interchange document from parsed blocks. Pure, no I/O.
pub fn encode(blocks: &[Block], layout: CardLayout, uid: &Uid) -> InterchangeDocument {
    let mut block_map = Map::new();
    for block in blocks {
        block_map.insert(block.index.to_string(), Value::String(block.data.to_hex()));
    }

    let sector_keys = sector_keys_from_blocks(&block_map, layout);

    InterchangeDocument {
        created: crate::constants::CREATED_MARKER.to_string(),
        file_type: crate::constants::FILE_TYPE_TAG.to_string(),
        card: CardIdent {
            uid: uid.to_hex(),
            atqa: layout.atqa().to_string(),
            sak: layout.sak().to_string(),
        },
        blocks: block_map,
        sector_keys,
    }
}

/// Build the `SectorKeys` map from an interchange blocks map.
///
/// Sectors whose trailer block is missing from the map, or whose trailer is
/// not exactly 32 hex characters, are silently omitted.
pub fn sector_keys_from_blocks(blocks: &Map<String, Value>, layout: CardLayout) -> Map<String, Value> {
    let mut out = Map::new();
    for sector in sectors_for(layout) {
        let Some(trailer) = extract_trailer(blocks, &sector) else {
            continue;
        };
        let access_hex = trailer.access_bits.to_hex();
        let entry = SectorKeyEntry {
            key_a: trailer.key_a.to_hex(),
            key_b: trailer.key_b.to_hex(),
            access_conditions: access_hex.clone(),
            access_conditions_text: access_text(&access_hex, &sector),
        };
        // Struct serialization into a Value keeps field order
        if let Ok(value) = serde_json::to_value(&entry) {
            out.insert(sector.index().to_string(), value);
        }
    }
    out
}

/// Convert a raw dump buffer straight to an interchange document:
/// classify, extract the UID, split into blocks, encode.
pub fn from_dump(bytes: &[u8]) -> Result<InterchangeDocument> {
    let layout = CardLayout::classify(bytes.len())?;
    let uid = uid_from_dump(bytes)?;
    let blocks = to_blocks(bytes, layout);
    Ok(encode(&blocks, layout, &uid))
}
