// spooltag/src/constants.rs
//! Common layout and key-derivation constants used across the crate

/// Bytes per MIFARE Classic block
pub const BYTES_PER_BLOCK: usize = 16;

/// Bytes per MIFARE Classic sector key (KeyA or KeyB)
pub const KEY_LENGTH: usize = 6;

/// Bytes in a 4-byte NUID as found at the start of block 0
pub const UID_LENGTH: usize = 4;

/// Bytes of access-condition data in a sector trailer
pub const ACCESS_BITS_LENGTH: usize = 4;

/// Dump byte lengths recognized by the codec
pub const CLASSIC_1K_BYTES: usize = 1024;
pub const CLASSIC_1K_PLUS2_BYTES: usize = 1152;
pub const CLASSIC_4K_BYTES: usize = 4096;

/// First sector index with 16-block geometry (4K layout only)
pub const LARGE_SECTOR_START: usize = 32;
/// First block index of the large-sector region
pub const LARGE_SECTOR_BASE_BLOCK: usize = 128;
pub const SMALL_SECTOR_BLOCKS: usize = 4;
pub const LARGE_SECTOR_BLOCKS: usize = 16;

/// Fixed master secret fed to the UID key-derivation function as input
/// keying material.
pub const KDF_MASTER_SECRET: [u8; 16] = [
    0x9a, 0x75, 0x9c, 0xf2, 0xc4, 0xf7, 0xca, 0xff, 0x22, 0x2c, 0xb9, 0x76, 0x9b, 0x41, 0xbc, 0x96,
];

/// HKDF context label, NUL terminator included
pub const KDF_CONTEXT: &[u8] = b"RFID-A\0";

/// Number of 6-byte keys produced by UID derivation
pub const DERIVED_KEY_COUNT: usize = 6;

/// ATQA/SAK identifiers by capacity class
pub const ATQA_1K: &str = "0400";
pub const SAK_1K: &str = "08";
pub const ATQA_4K: &str = "0200";
pub const SAK_4K: &str = "18";

/// Interchange document markers
pub const CREATED_MARKER: &str = "proxmark3";
pub const FILE_TYPE_TAG: &str = "mfc v2";
