// spooltag/src/prelude.rs

pub use crate::dump::{CardLayout, to_blocks, uid_from_dump};
pub use crate::interchange::{InterchangeDocument, SectorKeyEntry, encode, from_dump};
pub use crate::keys::{
    KeySource, decrypt_dump, derive_keys, keys_to_dictionary, load_keys_from_binary,
    load_keys_from_dictionary, resolve_keys,
};
pub use crate::record::{DecodedRecord, DecoderOutput, from_decoder_output};
pub use crate::sector::{Sector, SectorTrailer, access_text, extract_trailer, sectors_for};
pub use crate::{AccessBits, Block, BlockData, Error, MifareKey, Result, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_upper, parse_hex};
