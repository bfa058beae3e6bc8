use log::{debug, error, info};
use thiserror::Error;

use super::format::PicHeader;
use crate::constants::HEADER_SIZE;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("Pixel count mismatch: header declares {expected} pixels, got {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },
}

/// Writes a PIC file: the header verbatim, then one palette index per pixel.
pub fn encode(header: &PicHeader, indices: &[u8]) -> Result<Vec<u8>, EncodeError> {
    info!("Starting encoding");

    let expected = header.pixel_count();
    if indices.len() != expected {
        error!(
            "Header declares {} pixels but {} indices were given",
            expected,
            indices.len()
        );
        return Err(EncodeError::PixelCountMismatch {
            expected,
            actual: indices.len(),
        });
    }

    let mut encoded_data = Vec::with_capacity(HEADER_SIZE + indices.len());
    encoded_data.extend_from_slice(&header.to_bytes());
    debug!(
        "Header written:\nMagic: {}\nWidth: {}\nHeight: {}",
        header.magic, header.width, header.height
    );

    encoded_data.extend_from_slice(indices);
    debug!("{} palette indices written", indices.len());

    info!("Encoding process completed successfully");
    Ok(encoded_data)
}
