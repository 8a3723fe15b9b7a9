#[path = "../common/mod.rs"]
mod common;

use spooltag::dump::{CardLayout, to_blocks, uid_from_dump};
use spooltag::Error;

#[test]
fn one_k_dump_splits_into_64_blocks() {
    let dump = common::fixtures::classic_1k_dump();
    let blocks = to_blocks(&dump, CardLayout::Classic1K);
    assert_eq!(blocks.len(), 64);
    for (i, block) in blocks.iter().enumerate() {
        assert_eq!(block.index, i);
    }
    // Data blocks carry their index as fill, trailers carry key material
    assert_eq!(blocks[1].data.as_bytes(), &[1; 16]);
    assert_eq!(&blocks[3].data.as_bytes()[..6], &[0xAA; 6]);
}

#[test]
fn uid_matches_block_zero_prefix() {
    let dump = common::fixtures::classic_1k_dump();
    let uid = uid_from_dump(&dump).unwrap();
    assert_eq!(uid, common::fixtures::sample_uid());
}

#[test]
fn truncated_dump_is_rejected_for_uid() {
    for len in 0..16 {
        let bytes = vec![0u8; len];
        match uid_from_dump(&bytes) {
            Err(Error::TruncatedDump { len: l }) => assert_eq!(l, len),
            other => panic!("expected TruncatedDump for {} bytes, got {:?}", len, other),
        }
    }
}

#[test]
fn exactly_one_block_is_enough_for_uid() {
    let mut bytes = vec![0u8; 16];
    bytes[..4].copy_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
    assert_eq!(uid_from_dump(&bytes).unwrap().to_hex(), "DEADBEEF");
}

#[test]
fn short_dump_still_yields_complete_blocks() {
    let dump = vec![0x42u8; 100];
    let blocks = to_blocks(&dump, CardLayout::Classic1K);
    assert_eq!(blocks.len(), 6);
}
