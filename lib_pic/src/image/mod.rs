pub mod decoder;
pub mod encoder;
pub mod format;
pub mod header;

pub use decoder::{decode, decode_bytes, decode_file, expand_pixels, DecodeError};
pub use encoder::{encode, EncodeError};
