// spooltag/src/dump/mod.rs

pub mod codec;
pub mod layout;

pub use codec::{to_blocks, uid_from_dump};
pub use layout::CardLayout;
