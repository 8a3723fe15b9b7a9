// spooltag/src/lib.rs

//! spooltag
//!
//! MIFARE Classic dump modeling and Proxmark3 JSON interchange for
//! smart-spool filament tags. The crate converts between raw binary block
//! dumps, a structured sector/key model and the canonical interchange JSON,
//! and parses external decoder reports into strict records. All operations
//! are pure transformations over byte buffers or text; file and process
//! handling belong to the caller.

pub mod constants;
pub mod dump;
pub mod error;
pub mod interchange;
pub mod keys;
pub mod prelude;
pub mod record;
pub mod sector;
pub mod test_support;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
