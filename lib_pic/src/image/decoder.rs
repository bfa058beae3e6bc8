use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use log::{debug, error, info};
use thiserror::Error;

use super::format::{DecodedImage, PicHeader};

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("File too short for a PIC header: expected {expected} bytes, got {actual}")]
    TruncatedHeader { expected: usize, actual: usize },
    #[error("The specified file is not a valid PIC image (magic {0})")]
    InvalidMagic(u16),
    #[error("Pixel data truncated: expected {expected} bytes, got {actual}")]
    TruncatedPixelData { expected: usize, actual: usize },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Expands the pixel data following a validated header into RGB.
///
/// `reader` must be positioned at the first pixel byte. Exactly
/// `width * height` bytes are consumed; a shorter stream is an error and no
/// partial image is returned.
pub fn expand_pixels<R: Read>(
    header: &PicHeader,
    reader: &mut R,
) -> Result<DecodedImage, DecodeError> {
    let expected = header.pixel_count();
    let mut indices = Vec::new();
    let actual = reader.by_ref().take(expected as u64).read_to_end(&mut indices)?;
    if actual < expected {
        error!(
            "Unexpected end of pixel data: got {} of {} bytes",
            actual, expected
        );
        return Err(DecodeError::TruncatedPixelData { expected, actual });
    }
    debug!("Read {} palette indices", expected);

    let rgb = header.palette.expand(&indices);
    debug_assert_eq!(rgb.len(), expected * 3);

    Ok(DecodedImage::new(header.width, header.height, rgb))
}

/// Decodes a complete PIC stream: header first, then pixel data.
pub fn decode<R: Read>(reader: &mut R) -> Result<DecodedImage, DecodeError> {
    let header = PicHeader::read(reader)?;
    let image = expand_pixels(&header, reader)?;
    info!(
        "Decoded {}x{} PIC image ({} bytes RGB)",
        image.width,
        image.height,
        image.rgb.len()
    );
    Ok(image)
}

pub fn decode_bytes(encoded_data: &[u8]) -> Result<DecodedImage, DecodeError> {
    let mut cursor = encoded_data;
    decode(&mut cursor)
}

/// Opens `path` and decodes it. The file is closed on every return path.
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<DecodedImage, DecodeError> {
    let path = path.as_ref();
    debug!("Opening {}", path.display());
    let mut reader = BufReader::new(File::open(path)?);
    decode(&mut reader)
}
