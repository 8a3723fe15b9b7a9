//! Hexadecimal helpers for interchange emission and key parsing.
//!
//! Interchange documents and `.dic` files use uppercase compact hex with no
//! separators; the parser accepts either case and tolerates ASCII whitespace.

/// Convert a byte slice to an uppercase hex string without separators.
///
/// Example: `&[0x04, 0xa1]` -> `"04A1"`
pub fn bytes_to_hex_upper(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        use std::fmt::Write;
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Convert a byte slice to a lowercase hex string without separators.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        use std::fmt::Write;
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Parse a hex string into bytes.
///
/// Accepts strings with or without ASCII whitespace, either case. Returns an
/// error message string on parse failure.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let mut cleaned = String::with_capacity(s.len());
    for c in s.chars() {
        if !c.is_whitespace() {
            cleaned.push(c);
        }
    }

    if !cleaned.is_ascii() {
        return Err("hex string contains non-ascii characters".to_string());
    }
    if cleaned.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    let mut out = Vec::with_capacity(cleaned.len() / 2);
    let mut i = 0usize;
    while i < cleaned.len() {
        let pair = &cleaned[i..i + 2];
        let byte = u8::from_str_radix(pair, 16)
            .map_err(|e| format!("invalid hex pair '{}': {}", pair, e))?;
        out.push(byte);
        i += 2;
    }

    Ok(out)
}
