use proptest::prelude::*;
use spooltag::dump::CardLayout;
use spooltag::sector::{Sector, sectors_for};

#[test]
fn every_supported_size_classifies() {
    assert_eq!(CardLayout::classify(1024).unwrap(), CardLayout::Classic1K);
    assert_eq!(
        CardLayout::classify(1152).unwrap(),
        CardLayout::Classic1KPlus2
    );
    assert_eq!(CardLayout::classify(4096).unwrap(), CardLayout::Classic4K);
}

#[test]
fn layout_geometry_is_consistent() {
    for layout in [
        CardLayout::Classic1K,
        CardLayout::Classic1KPlus2,
        CardLayout::Classic4K,
    ] {
        let sectors = sectors_for(layout);
        assert_eq!(sectors.len(), layout.sector_count());
        let block_total: usize = sectors.iter().map(Sector::block_count).sum();
        assert_eq!(block_total, layout.block_count());
        // Trailer of the last sector is the last block of the card
        assert_eq!(
            sectors.last().unwrap().trailer_block(),
            layout.block_count() - 1
        );
    }
}

proptest! {
    // Any length other than the three known sizes must be rejected, and
    // classification never panics.
    #[test]
    fn classify_rejects_unknown_lengths(len in 0usize..10_000) {
        match CardLayout::classify(len) {
            Ok(layout) => prop_assert_eq!(layout.byte_len(), len),
            Err(spooltag::Error::UnsupportedDumpSize { len: l }) => prop_assert_eq!(l, len),
            Err(other) => prop_assert!(false, "unexpected error: {:?}", other),
        }
    }

    #[test]
    fn trailer_rule_matches_closed_form(index in 0usize..40) {
        let sector = Sector::new(index);
        let expected = if index < 32 {
            4 * index + 3
        } else {
            128 + 16 * (index - 32) + 15
        };
        prop_assert_eq!(sector.trailer_block(), expected);
    }
}
