use crate::constants::{PALETTE_ENTRIES, PALETTE_LEN};

/// A fixed 256-entry RGB color table.
///
/// Any `u8` is a valid index, so lookups never go out of range.
#[derive(Clone, PartialEq, Eq)]
pub struct Palette {
    pub colors: [[u8; 3]; PALETTE_ENTRIES],
}

impl Palette {
    /// Builds a palette from 768 packed bytes in R, G, B order.
    pub fn from_bytes(bytes: &[u8; PALETTE_LEN]) -> Self {
        let mut colors = [[0u8; 3]; PALETTE_ENTRIES];
        for (color, rgb) in colors.iter_mut().zip(bytes.chunks_exact(3)) {
            color.copy_from_slice(rgb);
        }
        Self { colors }
    }

    pub fn to_bytes(&self) -> [u8; PALETTE_LEN] {
        let mut bytes = [0u8; PALETTE_LEN];
        for (rgb, color) in bytes.chunks_exact_mut(3).zip(self.colors.iter()) {
            rgb.copy_from_slice(color);
        }
        bytes
    }

    #[inline]
    pub fn color(&self, index: u8) -> [u8; 3] {
        self.colors[index as usize]
    }

    /// Expands palette indices into packed RGB pixel data.
    ///
    /// # Parameters
    /// - `indices`: one palette index per pixel.
    ///
    /// # Returns
    /// A buffer of exactly `indices.len() * 3` bytes.
    pub fn expand(&self, indices: &[u8]) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(indices.len() * 3);
        for &index in indices {
            rgb.extend_from_slice(&self.color(index));
        }
        rgb
    }

    /// Expands palette indices into RGBA pixel data.
    ///
    /// Pixels using `transparent` get alpha 0, every other pixel is opaque.
    pub fn expand_rgba(&self, indices: &[u8], transparent: Option<u8>) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(indices.len() * 4);
        for &index in indices {
            let alpha = if Some(index) == transparent { 0 } else { 255 };
            rgba.extend_from_slice(&self.color(index));
            rgba.push(alpha);
        }
        rgba
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: [[0u8; 3]; PALETTE_ENTRIES],
        }
    }
}

impl std::fmt::Debug for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Palette")
            .field("entries", &self.colors.len())
            .finish()
    }
}
