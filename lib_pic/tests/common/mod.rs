#![allow(dead_code)]

use lib_pic::{Palette, PicHeader};

pub const CHECKER_WIDTH: u16 = 4;
pub const CHECKER_HEIGHT: u16 = 3;

/// Index `i` maps to `(i, 255 - i, i * 3)`.
pub fn ramp_palette() -> Palette {
    let mut palette = Palette::default();
    for i in 0..256usize {
        palette.colors[i] = [i as u8, 255 - i as u8, (i as u8).wrapping_mul(3)];
    }
    palette
}

pub fn checker_indices() -> Vec<u8> {
    (0..CHECKER_WIDTH as usize * CHECKER_HEIGHT as usize)
        .map(|i| if i % 2 == 0 { 0 } else { 255 })
        .collect()
}

/// A complete PIC file with the given header followed by `indices`.
pub fn pic_file(header: &PicHeader, indices: &[u8]) -> Vec<u8> {
    let mut data = header.to_bytes();
    data.extend_from_slice(indices);
    data
}
