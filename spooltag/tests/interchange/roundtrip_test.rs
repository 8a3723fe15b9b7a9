#[path = "../common/mod.rs"]
mod common;

use spooltag::interchange::{InterchangeDocument, encode, from_dump};

// Round-trip law: serializing a document, parsing it back, recovering the
// typed blocks and re-encoding must reproduce the original blocks mapping
// exactly, hex case and key order included.
#[test]
fn encode_decode_encode_is_byte_identical_1k() {
    let doc = from_dump(&common::fixtures::classic_1k_dump()).unwrap();
    let json = doc.to_json().unwrap();

    let decoded = InterchangeDocument::from_json(&json).unwrap();
    let blocks = decoded.block_data().unwrap();
    let layout = decoded.layout().unwrap();
    let uid = decoded.uid().unwrap();

    let re_encoded = encode(&blocks, layout, &uid);
    assert_eq!(re_encoded, doc);
    assert_eq!(re_encoded.to_json().unwrap(), json);
}

#[test]
fn encode_decode_encode_is_byte_identical_4k() {
    let doc = from_dump(&common::fixtures::classic_4k_dump()).unwrap();
    let json = doc.to_json().unwrap();

    let decoded = InterchangeDocument::from_json(&json).unwrap();
    let re_encoded = encode(
        &decoded.block_data().unwrap(),
        decoded.layout().unwrap(),
        &decoded.uid().unwrap(),
    );
    assert_eq!(re_encoded.to_json().unwrap(), json);
}

#[test]
fn parsed_document_preserves_map_order() {
    let doc = from_dump(&common::fixtures::classic_1k_dump()).unwrap();
    let json = doc.to_json().unwrap();
    let decoded = InterchangeDocument::from_json(&json).unwrap();
    let original: Vec<&String> = doc.blocks.keys().collect();
    let parsed: Vec<&String> = decoded.blocks.keys().collect();
    assert_eq!(original, parsed);
}

#[test]
fn block_data_rejects_non_decimal_index() {
    let mut doc = from_dump(&common::fixtures::classic_1k_dump()).unwrap();
    doc.blocks
        .insert("trailer".to_string(), serde_json::json!("00".repeat(16)));
    assert!(doc.block_data().is_err());
}
