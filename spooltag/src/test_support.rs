//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize dump fixture construction so tests across the
//! crate and tests/ directory can reuse the same buffers.
#![allow(dead_code)]

use crate::constants::{BYTES_PER_BLOCK, CLASSIC_1K_BYTES, CLASSIC_4K_BYTES};
use crate::dump::CardLayout;
use crate::sector::sectors_for;

/// UID used by all sample dumps.
pub fn sample_uid_bytes() -> [u8; 4] {
    [0x04, 0xA1, 0xB2, 0xC3]
}

/// Trailer bytes used by all sample dumps: KeyA `AA..`, the common
/// transport access bytes `FF 07 80 69`, KeyB `BB..`.
pub fn sample_trailer_bytes() -> [u8; 16] {
    let mut trailer = [0u8; 16];
    trailer[..6].copy_from_slice(&[0xAA; 6]);
    trailer[6..10].copy_from_slice(&[0xFF, 0x07, 0x80, 0x69]);
    trailer[10..].copy_from_slice(&[0xBB; 6]);
    trailer
}

fn dump_for(layout: CardLayout, total: usize) -> Vec<u8> {
    let mut dump = vec![0u8; total];
    // Data blocks carry their block index so tests can spot misplacement
    for block in 0..total / BYTES_PER_BLOCK {
        let start = block * BYTES_PER_BLOCK;
        dump[start..start + BYTES_PER_BLOCK].fill(block as u8);
    }
    dump[..4].copy_from_slice(&sample_uid_bytes());
    for sector in sectors_for(layout) {
        let start = sector.trailer_block() * BYTES_PER_BLOCK;
        dump[start..start + BYTES_PER_BLOCK].copy_from_slice(&sample_trailer_bytes());
    }
    dump
}

/// A full 1024-byte Classic 1K dump with the sample UID and trailers.
pub fn classic_1k_dump() -> Vec<u8> {
    dump_for(CardLayout::Classic1K, CLASSIC_1K_BYTES)
}

/// A full 4096-byte Classic 4K dump with the sample UID and trailers.
pub fn classic_4k_dump() -> Vec<u8> {
    dump_for(CardLayout::Classic4K, CLASSIC_4K_BYTES)
}

/// A representative decoder report covering the temperature block.
pub fn sample_decoder_report() -> &'static str {
    "- uid: 04A1B2C3\n\
     - filament_type: PLA\n\
     - filament_color: Red\n\
     - spool_weight: 250\n\
     - filament_diameter: 1.75\n\
     - temperatures:\n\
     \x20 - min_hotend: 190\n\
     \x20 - max_hotend: 230\n\
     \x20 - bed_temp: 60\n\
     \x20 - bed_temp_type: 0\n\
     \x20 - drying_time: 8\n\
     \x20 - drying_temp: 55\n"
}
