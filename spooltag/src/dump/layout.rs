// spooltag/src/dump/layout.rs

use crate::constants::{
    ATQA_1K, ATQA_4K, BYTES_PER_BLOCK, CLASSIC_1K_BYTES, CLASSIC_1K_PLUS2_BYTES, CLASSIC_4K_BYTES,
    SAK_1K, SAK_4K,
};
use crate::{Error, Result};

/// Card layout variant, determined solely by total dump byte length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardLayout {
    /// 1024 bytes: 64 blocks, 16 four-block sectors
    Classic1K,
    /// 1152 bytes: 72 blocks, the 1K geometry plus two extra four-block
    /// sectors borrowed from the 4K map
    Classic1KPlus2,
    /// 4096 bytes: 256 blocks, 32 four-block sectors then 8 sixteen-block
    /// sectors
    Classic4K,
}

impl CardLayout {
    /// Classify a dump by its byte length.
    pub fn classify(len: usize) -> Result<Self> {
        match len {
            CLASSIC_1K_BYTES => Ok(Self::Classic1K),
            CLASSIC_1K_PLUS2_BYTES => Ok(Self::Classic1KPlus2),
            CLASSIC_4K_BYTES => Ok(Self::Classic4K),
            _ => Err(Error::UnsupportedDumpSize { len }),
        }
    }

    /// Expected dump length in bytes.
    pub const fn byte_len(&self) -> usize {
        match self {
            Self::Classic1K => CLASSIC_1K_BYTES,
            Self::Classic1KPlus2 => CLASSIC_1K_PLUS2_BYTES,
            Self::Classic4K => CLASSIC_4K_BYTES,
        }
    }

    /// Expected number of 16-byte blocks.
    pub const fn block_count(&self) -> usize {
        self.byte_len() / BYTES_PER_BLOCK
    }

    /// Number of sectors in the layout.
    pub const fn sector_count(&self) -> usize {
        match self {
            Self::Classic1K => 16,
            Self::Classic1KPlus2 => 18,
            Self::Classic4K => 40,
        }
    }

    /// ATQA identifier for the capacity class, as 4 hex characters.
    pub const fn atqa(&self) -> &'static str {
        match self {
            Self::Classic4K => ATQA_4K,
            _ => ATQA_1K,
        }
    }

    /// SAK identifier for the capacity class, as 2 hex characters.
    pub const fn sak(&self) -> &'static str {
        match self {
            Self::Classic4K => SAK_4K,
            _ => SAK_1K,
        }
    }

    /// Human-readable card type name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Classic1K => "MIFARE Classic 1K",
            Self::Classic1KPlus2 => "MIFARE Classic 1K+2sectors",
            Self::Classic4K => "MIFARE Classic 4K",
        }
    }
}
