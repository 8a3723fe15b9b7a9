// spooltag/src/keys/derive.rs
//! UID-based key derivation.
//!
//! Smart-spool tags derive their six sector keys from the card UID with
//! HKDF-SHA256: the fixed master secret is the input keying material, the
//! UID is the salt and the context label is `"RFID-A"` plus a NUL byte. The
//! 36 bytes of output keying material split into six consecutive 6-byte
//! keys.

use crate::types::{MifareKey, Uid};
use crate::{Error, Result};

/// Derive the tag's key candidates from its UID, in derivation order.
///
/// Fails with `KeyDerivationUnavailable` when the crate is built without the
/// `kdf` feature; callers treat that as one exhausted key source, not a
/// fatal condition.
#[cfg(feature = "kdf")]
pub fn derive_keys(uid: &Uid) -> Result<Vec<MifareKey>> {
    use crate::constants::{DERIVED_KEY_COUNT, KDF_CONTEXT, KDF_MASTER_SECRET, KEY_LENGTH};
    use hkdf::Hkdf;
    use sha2::Sha256;

    let hk = Hkdf::<Sha256>::new(Some(uid.as_bytes()), &KDF_MASTER_SECRET);
    let mut okm = [0u8; DERIVED_KEY_COUNT * KEY_LENGTH];
    hk.expand(KDF_CONTEXT, &mut okm)
        .map_err(|_| Error::KeyDerivationUnavailable)?;

    okm.chunks_exact(KEY_LENGTH).map(MifareKey::try_from).collect()
}

/// Derive the tag's key candidates from its UID.
///
/// Always fails with `KeyDerivationUnavailable` in this build.
#[cfg(not(feature = "kdf"))]
pub fn derive_keys(_uid: &Uid) -> Result<Vec<MifareKey>> {
    Err(Error::KeyDerivationUnavailable)
}
