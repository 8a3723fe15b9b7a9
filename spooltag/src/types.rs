// spooltag/src/types.rs

use crate::Error;
use crate::constants::{ACCESS_BITS_LENGTH, BYTES_PER_BLOCK, KEY_LENGTH, UID_LENGTH};
use std::convert::TryFrom;

/// Card UID - Newtype Pattern (4 bytes, first bytes of block 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uid([u8; UID_LENGTH]);

impl Uid {
    pub fn from_bytes(bytes: [u8; UID_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; UID_LENGTH] {
        &self.0
    }

    /// Uppercase compact hex, the form used by interchange documents and
    /// companion key filenames.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_upper(self.as_bytes())
    }

    /// Parse from 8 hex characters.
    pub fn from_hex(s: &str) -> Result<Self, Error> {
        let bytes = crate::utils::parse_hex(s).map_err(|_| Error::InvalidLength {
            expected: UID_LENGTH * 2,
            actual: s.len(),
        })?;
        Self::try_from(bytes.as_slice())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != UID_LENGTH {
            return Err(Error::InvalidLength {
                expected: UID_LENGTH,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; UID_LENGTH];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// MIFARE Classic sector key - Newtype Pattern (6 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MifareKey([u8; KEY_LENGTH]);

impl MifareKey {
    pub fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_upper(self.as_bytes())
    }

    /// Parse from exactly 12 hex characters (the `.dic` line format).
    pub fn from_hex(s: &str) -> Result<Self, Error> {
        if s.len() != KEY_LENGTH * 2 {
            return Err(Error::InvalidLength {
                expected: KEY_LENGTH * 2,
                actual: s.len(),
            });
        }
        let bytes = crate::utils::parse_hex(s).map_err(|_| Error::InvalidLength {
            expected: KEY_LENGTH * 2,
            actual: s.len(),
        })?;
        Self::try_from(bytes.as_slice())
    }

    /// All-zero keys are padding in binary key files.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }
}

impl TryFrom<&[u8]> for MifareKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != KEY_LENGTH {
            return Err(Error::InvalidLength {
                expected: KEY_LENGTH,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; KEY_LENGTH];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Access-condition bytes from a sector trailer (4 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccessBits([u8; ACCESS_BITS_LENGTH]);

impl AccessBits {
    pub fn from_bytes(bytes: [u8; ACCESS_BITS_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ACCESS_BITS_LENGTH] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_upper(self.as_bytes())
    }

    /// Last access byte, reported as `UserData` in access-condition text.
    pub fn user_data(&self) -> u8 {
        self.0[ACCESS_BITS_LENGTH - 1]
    }
}

impl TryFrom<&[u8]> for AccessBits {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != ACCESS_BITS_LENGTH {
            return Err(Error::InvalidLength {
                expected: ACCESS_BITS_LENGTH,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; ACCESS_BITS_LENGTH];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// BlockData (16 bytes), immutable once read from a dump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockData([u8; BYTES_PER_BLOCK]);

impl BlockData {
    pub fn from_bytes(bytes: [u8; BYTES_PER_BLOCK]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; BYTES_PER_BLOCK] {
        &self.0
    }

    /// Uppercase compact hex (32 characters), the interchange block format.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_upper(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != BYTES_PER_BLOCK {
            return Err(Error::InvalidLength {
                expected: BYTES_PER_BLOCK,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; BYTES_PER_BLOCK];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// A block paired with its 0-based position in the dump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub index: usize,
    pub data: BlockData,
}

impl Block {
    pub fn new(index: usize, data: BlockData) -> Self {
        Self { index, data }
    }
}
