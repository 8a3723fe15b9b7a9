#[path = "../common/mod.rs"]
mod common;

use spooltag::record::{DecodedRecord, validate};
use spooltag::record::validate::summarize;

fn complete_record() -> DecodedRecord {
    DecodedRecord::parse(common::fixtures::sample_decoder_report())
        .with_filename("spool-red-dump.bin")
}

#[test]
fn complete_record_validates_cleanly() {
    let report = validate(&complete_record());
    assert!(report.is_valid());
    assert!(report.warnings.is_empty());
}

#[test]
fn record_without_filename_fails() {
    let record = DecodedRecord::parse(common::fixtures::sample_decoder_report());
    let report = validate(&record);
    assert!(!report.is_valid());
    assert!(report.errors[0].contains("filename"));
}

#[test]
fn batch_summary_isolates_failures() {
    let reports = vec![
        validate(&complete_record()),
        validate(&DecodedRecord::parse("")),
        validate(&complete_record()),
        validate(&complete_record()),
    ];
    let summary = summarize(&reports);
    assert_eq!(summary.total, 4);
    assert_eq!(summary.valid, 3);
    assert_eq!(summary.invalid, 1);
    assert_eq!(summary.success_rate(), 75.0);
}
