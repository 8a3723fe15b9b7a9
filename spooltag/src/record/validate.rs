// spooltag/src/record/validate.rs
//! Decoded-record validation.
//!
//! Checks the fields downstream consumers rely on. Failures are collected
//! per record, never raised: the batch layer counts partial success and
//! must not abort on a single bad record.

use serde_json::Value;

use super::DecodedRecord;

/// Fields every decoded record must carry.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "uid",
    "filament_type",
    "filament_color",
    "spool_weight",
    "filament_diameter",
    "filename",
];

/// Expected temperature sub-fields; absence is a warning, not an error.
pub const TEMPERATURE_FIELDS: [&str; 6] = [
    "min_hotend",
    "max_hotend",
    "bed_temp",
    "bed_temp_type",
    "drying_time",
    "drying_temp",
];

/// Outcome of validating one record.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate a single decoded record.
pub fn validate(record: &DecodedRecord) -> ValidationReport {
    let mut report = ValidationReport::default();

    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !record.fields.contains_key(*field))
        .collect();
    if !missing.is_empty() {
        report
            .errors
            .push(format!("missing required fields: {}", missing.join(", ")));
    }

    match record.fields.get("temperatures") {
        Some(Value::Object(temps)) => {
            let missing_temps: Vec<&str> = TEMPERATURE_FIELDS
                .iter()
                .copied()
                .filter(|field| !temps.contains_key(*field))
                .collect();
            if !missing_temps.is_empty() {
                report.warnings.push(format!(
                    "missing temperature fields: {}",
                    missing_temps.join(", ")
                ));
            }
        }
        Some(_) => {
            report
                .errors
                .push("temperature section should be a mapping".to_string());
        }
        None => {
            report
                .warnings
                .push("no temperature section found".to_string());
        }
    }

    if let Some(uid) = record.fields.get("uid") {
        match uid.as_str() {
            Some(s) if s.len() == 8 && s.bytes().all(|b| b.is_ascii_hexdigit()) => {}
            _ => report
                .errors
                .push(format!("uid should be an 8-character hex string, got: {}", uid)),
        }
    }

    report
}

/// Aggregate counts over a batch of reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub total_errors: usize,
    pub total_warnings: usize,
}

impl ValidationSummary {
    /// Valid fraction in percent; 100 for an empty batch.
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.valid as f64 / self.total as f64 * 100.0
        }
    }
}

/// Summarize a batch of per-record reports.
pub fn summarize<'a, I>(reports: I) -> ValidationSummary
where
    I: IntoIterator<Item = &'a ValidationReport>,
{
    let mut summary = ValidationSummary::default();
    for report in reports {
        summary.total += 1;
        if report.is_valid() {
            summary.valid += 1;
        } else {
            summary.invalid += 1;
        }
        summary.total_errors += report.errors.len();
        summary.total_warnings += report.warnings.len();
    }
    summary
}
