// spooltag/src/sector/access.rs
//! Simplified access-condition text.
//!
//! Full MIFARE access decoding depends on all three access nibbles; these
//! tags use the common transport configuration, so only that case is
//! rendered. Non-trailer blocks read with either key, the trailer's access
//! bytes read with either key and write with KeyB.

use serde_json::{Map, Value};

use super::Sector;

/// Description applied to every non-trailer block.
pub const DATA_BLOCK_TEXT: &str = "read AB";

/// Description applied to the trailer block.
pub const TRAILER_BLOCK_TEXT: &str = "read ACCESS by AB; write ACCESS by B";

/// Build the `AccessConditionsText` map for a sector.
///
/// `access_hex` is the 8-character access-condition hex from the trailer.
/// `UserData` (the last access byte) is emitted first, then one `block<N>`
/// entry per member block in order; downstream diff tooling depends on that
/// exact order.
pub fn access_text(access_hex: &str, sector: &Sector) -> Map<String, Value> {
    let mut out = Map::new();

    let user_data = if access_hex.len() >= 2 {
        &access_hex[access_hex.len() - 2..]
    } else {
        access_hex
    };
    out.insert("UserData".to_string(), Value::String(user_data.to_string()));

    let trailer = sector.trailer_block();
    for block in sector.block_indices() {
        let text = if block == trailer {
            TRAILER_BLOCK_TEXT
        } else {
            DATA_BLOCK_TEXT
        };
        out.insert(format!("block{}", block), Value::String(text.to_string()));
    }

    out
}
