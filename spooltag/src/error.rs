// spooltag/src/error.rs

use thiserror::Error;

/// Common error type for dump, key and record processing.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unsupported dump size: {len} bytes")]
    UnsupportedDumpSize { len: usize },

    #[error("truncated dump: {len} bytes, need at least one 16-byte block")]
    TruncatedDump { len: usize },

    // Sectors with malformed trailers are normally skipped, not surfaced;
    // this variant exists for callers that extract a single trailer directly.
    #[error("malformed trailer for sector {sector}: {hex_len} hex chars, expected 32")]
    MalformedTrailer { sector: usize, hex_len: usize },

    #[error("key derivation unavailable: crate built without the `kdf` feature")]
    KeyDerivationUnavailable,

    #[error("no keys available from any source")]
    NoKeysAvailable,

    #[error("decoder output unavailable: {0}")]
    DecodeUnavailable(String),

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid block entry {key:?}: {reason}")]
    InvalidBlockEntry { key: String, reason: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
