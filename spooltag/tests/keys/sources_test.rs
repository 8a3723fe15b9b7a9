#[path = "../common/mod.rs"]
mod common;

use spooltag::keys::{keys_to_dictionary, load_keys_from_binary, load_keys_from_dictionary};

#[test]
fn all_zero_buffer_is_pure_padding() {
    let bytes = vec![0u8; 96];
    assert!(load_keys_from_binary(&bytes).is_empty());
}

#[test]
fn sixteen_distinct_chunks_in_input_order() {
    let bytes: Vec<u8> = (0u8..16).flat_map(|i| [i + 1; 6]).collect();
    assert_eq!(bytes.len(), 96);
    let keys = load_keys_from_binary(&bytes);
    assert_eq!(keys, common::fixtures::expected_keys_from_bin());
}

#[test]
fn padding_chunks_are_dropped_wherever_they_sit() {
    let keys = load_keys_from_binary(&common::fixtures::key_bin_with_padding());
    assert_eq!(keys.len(), 16);
}

#[test]
fn eleven_char_line_skipped_twelve_char_accepted() {
    let keys = load_keys_from_dictionary("AABBCCDDEEF\nAABBCCDDEEFF\n");
    assert_eq!(keys.len(), 1);
    assert_eq!(keys[0].as_bytes(), &[0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
}

#[test]
fn dictionary_ignores_blank_lines_and_bad_hex() {
    let keys = load_keys_from_dictionary("\nGGGGGGGGGGGG\n  \nAABBCCDDEEFF");
    assert_eq!(keys.len(), 1);
}

#[test]
fn bin_to_dic_conversion_roundtrips() {
    let keys = load_keys_from_binary(&common::fixtures::key_bin_with_padding());
    let dic = keys_to_dictionary(&keys);
    assert!(dic.ends_with('\n'));
    assert_eq!(dic.lines().count(), 16);
    assert_eq!(load_keys_from_dictionary(&dic), keys);
}
