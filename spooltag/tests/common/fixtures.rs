// fixtures.rs — provides commonly used dumps, key material and report text
#![allow(dead_code)]

use spooltag::test_support;
use spooltag::types::{MifareKey, Uid};

pub fn sample_uid() -> Uid {
    Uid::from_bytes(test_support::sample_uid_bytes())
}

pub fn classic_1k_dump() -> Vec<u8> {
    test_support::classic_1k_dump()
}

pub fn classic_4k_dump() -> Vec<u8> {
    test_support::classic_4k_dump()
}

/// A 1152-byte dump: the 1K image plus two extra four-block sectors.
pub fn classic_1k_plus2_dump() -> Vec<u8> {
    let mut dump = classic_1k_dump();
    dump.resize(1152, 0);
    for trailer_block in [67usize, 71] {
        let start = trailer_block * 16;
        dump[start..start + 16].copy_from_slice(&test_support::sample_trailer_bytes());
    }
    dump
}

/// Binary key material: 16 distinct keys followed by two zero-padding
/// chunks, the shape of a Proxmark3 key file.
pub fn key_bin_with_padding() -> Vec<u8> {
    let mut bytes = Vec::new();
    for i in 0u8..16 {
        bytes.extend_from_slice(&[i + 1; 6]);
    }
    bytes.extend_from_slice(&[0u8; 12]);
    bytes
}

pub fn expected_keys_from_bin() -> Vec<MifareKey> {
    (0u8..16).map(|i| MifareKey::from_bytes([i + 1; 6])).collect()
}

pub fn sample_dic_text() -> &'static str {
    "AABBCCDDEEFF\n010203040506\n"
}

pub fn sample_decoder_report() -> &'static str {
    test_support::sample_decoder_report()
}
