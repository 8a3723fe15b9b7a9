// spooltag/src/dump/codec.rs

use log::warn;

use super::layout::CardLayout;
use crate::constants::{BYTES_PER_BLOCK, UID_LENGTH};
use crate::types::{Block, BlockData, Uid};
use crate::{Error, Result};

/// Split a dump buffer into 16-byte blocks for the given layout.
///
/// A length mismatch against the layout's expected size is tolerated: the
/// codec logs a warning and emits as many complete blocks as the buffer
/// holds, capped at the layout's block count. A trailing partial block is
/// dropped.
pub fn to_blocks(bytes: &[u8], layout: CardLayout) -> Vec<Block> {
    if bytes.len() != layout.byte_len() {
        warn!(
            "dump is {} bytes, expected {} for {}",
            bytes.len(),
            layout.byte_len(),
            layout.name()
        );
    }

    bytes
        .chunks_exact(BYTES_PER_BLOCK)
        .take(layout.block_count())
        .enumerate()
        .map(|(index, chunk)| {
            let mut arr = [0u8; BYTES_PER_BLOCK];
            arr.copy_from_slice(chunk);
            Block::new(index, BlockData::from_bytes(arr))
        })
        .collect()
}

/// Extract the UID from the first 4 bytes of block 0.
///
/// Fails with `TruncatedDump` if the buffer holds less than one full block.
pub fn uid_from_dump(bytes: &[u8]) -> Result<Uid> {
    if bytes.len() < BYTES_PER_BLOCK {
        return Err(Error::TruncatedDump { len: bytes.len() });
    }
    Uid::try_from(&bytes[..UID_LENGTH])
}
