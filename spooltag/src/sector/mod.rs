// spooltag/src/sector/mod.rs

pub mod access;
pub mod trailer;

pub use access::access_text;
pub use trailer::{SectorTrailer, extract_trailer};

use crate::constants::{
    LARGE_SECTOR_BASE_BLOCK, LARGE_SECTOR_BLOCKS, LARGE_SECTOR_START, SMALL_SECTOR_BLOCKS,
};
use crate::dump::CardLayout;
use std::ops::Range;

/// A contiguous group of blocks sharing one key pair.
///
/// Geometry is a pure function of the sector index: sectors below index 32
/// hold 4 blocks, sectors at or above 32 (reachable only on the 4K layout)
/// hold 16 blocks. The trailer is always the last block of the sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sector {
    index: usize,
}

impl Sector {
    pub const fn new(index: usize) -> Self {
        Self { index }
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of member blocks.
    pub const fn block_count(&self) -> usize {
        if self.index < LARGE_SECTOR_START {
            SMALL_SECTOR_BLOCKS
        } else {
            LARGE_SECTOR_BLOCKS
        }
    }

    /// Index of the sector's first block.
    pub const fn first_block(&self) -> usize {
        if self.index < LARGE_SECTOR_START {
            self.index * SMALL_SECTOR_BLOCKS
        } else {
            LARGE_SECTOR_BASE_BLOCK + (self.index - LARGE_SECTOR_START) * LARGE_SECTOR_BLOCKS
        }
    }

    /// Index of the trailer block, the last block of the sector.
    pub const fn trailer_block(&self) -> usize {
        self.first_block() + self.block_count() - 1
    }

    /// Ordered member block indices.
    pub fn block_indices(&self) -> Range<usize> {
        self.first_block()..self.first_block() + self.block_count()
    }
}

/// Ordered sectors for a layout.
pub fn sectors_for(layout: CardLayout) -> Vec<Sector> {
    (0..layout.sector_count()).map(Sector::new).collect()
}
