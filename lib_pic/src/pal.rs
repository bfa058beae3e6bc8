//! Standalone palette files shipped next to texture sheets.
//!
//! Layout: a 4-byte file length, 4 unidentified bytes, then 256 RGB triples.

use std::io::{self, Read};

use byteorder::{ReadBytesExt, LE};
use log::{debug, error};
use thiserror::Error;

use crate::constants::PALETTE_LEN;
use crate::image::header::read_full;
use crate::palette::Palette;

pub const PAL_PREFIX_SIZE: usize = 8;
pub const PAL_SIZE: usize = PAL_PREFIX_SIZE + PALETTE_LEN;

#[derive(Error, Debug)]
pub enum PalError {
    #[error("Palette file truncated: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub fn read_pal<R: Read>(reader: &mut R) -> Result<Palette, PalError> {
    let mut raw = [0u8; PAL_SIZE];
    let actual = read_full(reader, &mut raw)?;
    if actual < PAL_SIZE {
        error!("Palette file truncated: got {} of {} bytes", actual, PAL_SIZE);
        return Err(PalError::Truncated {
            expected: PAL_SIZE,
            actual,
        });
    }

    let declared_len = (&raw[..4]).read_u32::<LE>()?;
    debug!("Palette file declares {} bytes", declared_len);

    let mut colors = [0u8; PALETTE_LEN];
    colors.copy_from_slice(&raw[PAL_PREFIX_SIZE..]);
    Ok(Palette::from_bytes(&colors))
}
