#![cfg(feature = "kdf")]

#[path = "../common/mod.rs"]
mod common;

use proptest::prelude::*;
use spooltag::keys::derive_keys;
use spooltag::types::Uid;

#[test]
fn six_keys_in_derivation_order() {
    let keys = derive_keys(&common::fixtures::sample_uid()).unwrap();
    assert_eq!(keys.len(), 6);
}

#[test]
fn derivation_is_stable_across_calls() {
    let uid = common::fixtures::sample_uid();
    let first = derive_keys(&uid).unwrap();
    let second = derive_keys(&uid).unwrap();
    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn distinct_uids_disagree(a in any::<[u8; 4]>(), b in any::<[u8; 4]>()) {
        prop_assume!(a != b);
        let ka = derive_keys(&Uid::from_bytes(a)).unwrap();
        let kb = derive_keys(&Uid::from_bytes(b)).unwrap();
        prop_assert_ne!(ka, kb);
    }

    #[test]
    fn derivation_never_panics(uid in any::<[u8; 4]>()) {
        let keys = derive_keys(&Uid::from_bytes(uid)).unwrap();
        prop_assert_eq!(keys.len(), 6);
    }
}
