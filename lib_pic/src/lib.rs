pub mod constants;
pub mod image;
pub mod pal;
pub mod palette;
pub mod texture;

use log::*;
use std::io::Write;

pub use crate::image::format::{DecodedImage, PicHeader};
pub use crate::image::{decode, decode_bytes, decode_file, encode, expand_pixels, DecodeError};
pub use crate::palette::Palette;

pub fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter(Some("lib_pic"), level)
        .filter(Some("pic2tga"), level)
        .filter(Some("tex2tga"), level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
