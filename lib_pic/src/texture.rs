//! Texture sheets: headerless runs of 256x256 palette-indexed tiles.

use std::io::{self, Read};

use log::{debug, error, info};
use thiserror::Error;

use crate::image::format::DecodedImage;
use crate::image::header::read_full;
use crate::palette::Palette;

pub const TILE_SIZE: u16 = 256;
pub const TILE_PIXELS: usize = TILE_SIZE as usize * TILE_SIZE as usize;
pub const TILES_PER_SHEET: usize = 16;

#[derive(Error, Debug)]
pub enum TextureError {
    #[error("Texture sheet truncated in tile #{tile}")]
    Truncated { tile: usize },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Reads the raw palette indices of every tile in a sheet.
pub fn read_tile_indices<R: Read>(reader: &mut R) -> Result<Vec<Vec<u8>>, TextureError> {
    let mut tiles = Vec::with_capacity(TILES_PER_SHEET);

    for tile in 0..TILES_PER_SHEET {
        let mut indices = vec![0u8; TILE_PIXELS];
        let actual = read_full(reader, &mut indices)?;
        if actual < TILE_PIXELS {
            error!(
                "Texture #{} truncated: got {} of {} bytes",
                tile, actual, TILE_PIXELS
            );
            return Err(TextureError::Truncated { tile });
        }
        debug!("Texture #{} read", tile);
        tiles.push(indices);
    }

    info!("Read {} textures", tiles.len());
    Ok(tiles)
}

/// Reads every tile of a sheet and expands it through `palette`.
pub fn read_textures<R: Read>(
    reader: &mut R,
    palette: &Palette,
) -> Result<Vec<DecodedImage>, TextureError> {
    let tiles = read_tile_indices(reader)?
        .iter()
        .map(|indices| DecodedImage::new(TILE_SIZE, TILE_SIZE, palette.expand(indices)))
        .collect();
    Ok(tiles)
}
