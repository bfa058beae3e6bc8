pub const OUTPUT_SUFFIX: &str = ".tga";

/// Value of the header's magic field (bytes `0x00 0x95` on disk).
pub const MAGIC: u16 = 38144;

pub const PALETTE_ENTRIES: usize = 256;
pub const PALETTE_LEN: usize = PALETTE_ENTRIES * 3;

/// Every known sample carries this in `palette_size`. It is not checked.
pub const OBSERVED_PALETTE_SIZE: u16 = 776;

/// Packed size of the header, no padding between fields.
pub const HEADER_SIZE: usize = 4 + 2 + 2 + 2 + 2 + 2 + 50 + 2 + 6 + PALETTE_LEN + 2 + 4;
