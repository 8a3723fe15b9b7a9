// spooltag/src/record/mod.rs

pub mod scanner;
pub mod validate;

pub use validate::{ValidationReport, ValidationSummary, validate};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result};

/// Human-oriented decoded record: an ordered flat map of scalars plus an
/// optional nested `temperatures` map.
///
/// `filename` is attached by the consumer via [`DecodedRecord::with_filename`],
/// never derived from the report text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecodedRecord {
    pub fields: Map<String, Value>,
}

impl DecodedRecord {
    /// Parse decoder report text. Never fails: unrecognized lines are
    /// skipped, so worst case is an empty record (the decoder-output gate
    /// in [`from_decoder_output`] rejects empty reports before this point).
    pub fn parse(text: &str) -> Self {
        Self {
            fields: scanner::scan(text),
        }
    }

    /// Attach the `filename` field. Caller-owned; typically the dump file
    /// the record was decoded from.
    pub fn with_filename(mut self, filename: &str) -> Self {
        self.fields
            .insert("filename".to_string(), Value::String(filename.to_string()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The nested temperature map, if the report carried one.
    pub fn temperatures(&self) -> Option<&Map<String, Value>> {
        self.fields.get("temperatures").and_then(Value::as_object)
    }

    /// Serialize with 2-space indentation, matching the reference tooling.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Raw result of running the external decoder process. The caller owns the
/// process invocation and any timeout; expiry should be mapped to a
/// non-zero `status` here.
#[derive(Debug, Clone)]
pub struct DecoderOutput {
    /// Process exit status; 0 means success.
    pub status: i32,
    /// Captured standard output.
    pub stdout: String,
}

/// Gate decoder output into a record.
///
/// A non-zero exit status or empty output fails with `DecodeUnavailable`;
/// empty input must never be treated as an empty valid record.
pub fn from_decoder_output(output: &DecoderOutput) -> Result<DecodedRecord> {
    if output.status != 0 {
        return Err(Error::DecodeUnavailable(format!(
            "decoder exited with status {}",
            output.status
        )));
    }
    let text = output.stdout.trim();
    if text.is_empty() {
        return Err(Error::DecodeUnavailable(
            "decoder produced no output".to_string(),
        ));
    }
    Ok(DecodedRecord::parse(text))
}
