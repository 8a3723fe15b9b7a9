// spooltag/src/record/scanner.rs
//! Two-state line scanner for decoder report text.
//!
//! The external decoder prints a semi-structured, line-oriented report. The
//! scanner recognizes exactly two shapes and nothing else:
//!
//! - `TopLevel`: a trimmed line `- <key>: <value>` or `- <key>:` (empty
//!   value) is a field assignment. Blank lines, `#` comments and lines of
//!   any other shape are skipped.
//! - `InTemperatureBlock`: entered when the `temperatures` key is assigned
//!   an empty value. Every immediately following raw line starting with
//!   `"  - "` is consumed as a `  - <key>: <value>` sub-field; the first
//!   line without that prefix returns the scanner to `TopLevel`.

use serde_json::{Map, Number, Value};

const TOP_PREFIX: &str = "- ";
const TEMP_PREFIX: &str = "  - ";
const TEMPERATURES_KEY: &str = "temperatures";
const BED_TEMP_TYPE_KEY: &str = "bed_temp_type";

/// Scan report text into an ordered field map.
pub fn scan(text: &str) -> Map<String, Value> {
    let lines: Vec<&str> = text.lines().collect();
    let mut fields = Map::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i].trim();
        if line.is_empty() || line.starts_with('#') {
            i += 1;
            continue;
        }

        if let Some(rest) = line.strip_prefix(TOP_PREFIX) {
            if let Some((key, value)) = split_assignment(rest) {
                if key == TEMPERATURES_KEY && value.is_empty() {
                    let mut temps = Map::new();
                    i += 1;
                    // Temperature rows are matched on the raw line, not the
                    // trimmed one: the prefix contract is two spaces + dash.
                    while i < lines.len() && lines[i].starts_with(TEMP_PREFIX) {
                        let row = &lines[i][TEMP_PREFIX.len()..];
                        if let Some((temp_key, temp_value)) = row.split_once(": ") {
                            temps.insert(
                                temp_key.trim().to_string(),
                                coerce_temperature(temp_key.trim(), temp_value.trim()),
                            );
                        }
                        i += 1;
                    }
                    fields.insert(TEMPERATURES_KEY.to_string(), Value::Object(temps));
                    continue;
                }
                fields.insert(key.to_string(), coerce_scalar(value));
            }
        }
        i += 1;
    }

    fields
}

/// Split `<key>: <value>` or `<key>:` (trailing colon, empty value).
/// Any other shape is not an assignment.
fn split_assignment(rest: &str) -> Option<(&str, &str)> {
    if let Some((key, value)) = rest.split_once(": ") {
        Some((key.trim(), value.trim()))
    } else {
        rest.strip_suffix(':').map(|key| (key.trim(), ""))
    }
}

/// Coerce a scalar: all-digit strings become integers, `true`/`false`
/// (case-insensitive) become booleans, everything else stays a string.
fn coerce_scalar(value: &str) -> Value {
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(n) = value.parse::<u64>() {
            return Value::Number(Number::from(n));
        }
    }
    if value.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if value.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    Value::String(value.to_string())
}

/// Temperature sub-fields follow the scalar policy; `bed_temp_type` is
/// additionally integer-coerced (it may carry a sign) when possible.
fn coerce_temperature(key: &str, value: &str) -> Value {
    if key == BED_TEMP_TYPE_KEY {
        if let Ok(n) = value.parse::<i64>() {
            return Value::Number(Number::from(n));
        }
    }
    coerce_scalar(value)
}
