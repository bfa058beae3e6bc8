use crate::constants::{HEADER_SIZE, MAGIC, OBSERVED_PALETTE_SIZE};
use crate::palette::Palette;

/// Fixed-layout header at the start of every PIC file.
///
/// Fields are stored little-endian and packed in declaration order. The
/// `unknown*` fields and `palette_size` have no confirmed meaning and are
/// kept verbatim so a header can be written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PicHeader {
    /// Declared total file size. Not checked against the real size.
    pub file_size: u32,
    pub magic: u16,
    pub width: u16,
    pub height: u16,
    pub unknown1: u16,
    pub unknown2: u16,
    pub unknown3: [u8; 50],
    /// Always 776 in known samples. The palette is 256 entries regardless.
    pub palette_size: u16,
    /// Observed all zeros.
    pub unknown4: [u8; 6],
    pub palette: Palette,
    pub unknown5: u16,
    /// Seen as `0 0 1 0` and `4 0 1 0`. Possibly orientation; not acted on.
    pub unknown6: [u8; 4],
}

impl PicHeader {
    pub const MAGIC_OFFSET: usize = 4;
    pub const PALETTE_OFFSET: usize = 72;

    pub fn new(width: u16, height: u16, palette: Palette) -> Self {
        let pixels = width as usize * height as usize;
        Self {
            file_size: (HEADER_SIZE + pixels) as u32,
            magic: MAGIC,
            width,
            height,
            unknown1: 0,
            unknown2: 0,
            unknown3: [0; 50],
            palette_size: OBSERVED_PALETTE_SIZE,
            unknown4: [0; 6],
            palette,
            unknown5: 0,
            unknown6: [0; 4],
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// True-color result of expanding a PIC image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u16,
    pub height: u16,
    /// Row-major RGB, top row first, `width * height * 3` bytes.
    pub rgb: Vec<u8>,
}

impl DecodedImage {
    pub fn new(width: u16, height: u16, rgb: Vec<u8>) -> Self {
        Self { width, height, rgb }
    }

    pub fn dims(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32)
    }
}
