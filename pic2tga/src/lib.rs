use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use image::codecs::tga::TgaEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError};
use lib_pic::constants::OUTPUT_SUFFIX;
use lib_pic::pal::{read_pal, PalError};
use lib_pic::texture::{read_textures, read_tile_indices, TextureError, TILE_SIZE};
use lib_pic::{decode_file, DecodeError, DecodedImage, Palette};
use log::{debug, info, warn};
use thiserror::Error;

pub const USAGE: &str = "pic2tga --input INPUT [--output OUTPUT]";
pub const TEX_USAGE: &str =
    "tex2tga --textures TEXTURES --palette PALETTE [--output-dir DIR] [--alpha]";

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Palette(#[from] PalError),

    #[error(transparent)]
    Texture(#[from] TextureError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] ImageError),

    #[error("Pixel buffer does not fit a {0}x{1} image")]
    BufferSize(u32, u32),
}

/// `input` with the TGA suffix appended, e.g. `TRACK.PIC` -> `TRACK.PIC.tga`.
pub fn default_output(input: &Path) -> PathBuf {
    let mut output = OsString::from(input.as_os_str());
    output.push(OUTPUT_SUFFIX);
    PathBuf::from(output)
}

/// Writes an uncompressed true-color TGA (image type 2).
fn write_tga(
    pixels: &[u8],
    width: u32,
    height: u32,
    color: ExtendedColorType,
    path: &Path,
) -> Result<(), ConvertError> {
    let channels = if color == ExtendedColorType::Rgba8 { 4 } else { 3 };
    if pixels.len() != width as usize * height as usize * channels {
        return Err(ConvertError::BufferSize(width, height));
    }

    let writer = BufWriter::new(File::create(path)?);
    TgaEncoder::new(writer)
        .disable_rle()
        .write_image(pixels, width, height, color)?;
    Ok(())
}

pub fn save_tga(image: &DecodedImage, path: &Path) -> Result<(), ConvertError> {
    let (width, height) = image.dims();
    write_tga(&image.rgb, width, height, ExtendedColorType::Rgb8, path)
}

pub fn save_tga_rgba(
    width: u32,
    height: u32,
    rgba: &[u8],
    path: &Path,
) -> Result<(), ConvertError> {
    write_tga(rgba, width, height, ExtendedColorType::Rgba8, path)
}

/// Decodes the PIC file at `input` and writes it to `output` as TGA.
///
/// An image with no pixels decodes fine but has nothing to write; it is
/// skipped with a warning and no output file is created.
pub fn pic_to_tga(input: &Path, output: &Path) -> Result<(), ConvertError> {
    let image = decode_file(input)?;
    if image.rgb.is_empty() {
        warn!(
            "{} is {}x{}, nothing to write",
            input.display(),
            image.width,
            image.height
        );
        return Ok(());
    }
    save_tga(&image, output)?;
    info!("Wrote {}", output.display());
    Ok(())
}

pub fn load_palette(path: &Path) -> Result<Palette, ConvertError> {
    let mut reader = BufReader::new(File::open(path)?);
    Ok(read_pal(&mut reader)?)
}

/// Splits a texture sheet into `Texture{i}.tga` files under `output_dir`.
///
/// With `alpha`, index 0 is written fully transparent.
pub fn textures_to_tga(
    textures: &Path,
    palette: &Palette,
    output_dir: &Path,
    alpha: bool,
) -> Result<Vec<PathBuf>, ConvertError> {
    let mut reader = BufReader::new(File::open(textures)?);
    let tile_path = |i: usize| output_dir.join(format!("Texture{}.tga", i));

    let mut written = Vec::new();
    if alpha {
        let size = TILE_SIZE as u32;
        for (i, indices) in read_tile_indices(&mut reader)?.iter().enumerate() {
            let path = tile_path(i);
            save_tga_rgba(size, size, &palette.expand_rgba(indices, Some(0)), &path)?;
            debug!("Wrote {}", path.display());
            written.push(path);
        }
    } else {
        for (i, image) in read_textures(&mut reader, palette)?.iter().enumerate() {
            let path = tile_path(i);
            save_tga(image, &path)?;
            debug!("Wrote {}", path.display());
            written.push(path);
        }
    }

    info!("Wrote {} textures to {}", written.len(), output_dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_pic::{encode, PicHeader};

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pic2tga_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_default_output_appends_suffix() {
        assert_eq!(
            default_output(Path::new("data/TRACK.PIC")),
            PathBuf::from("data/TRACK.PIC.tga")
        );
    }

    #[test]
    fn test_pic_to_tga_writes_decoded_pixels() {
        let mut palette = Palette::default();
        palette.colors[0] = [10, 20, 30];
        palette.colors[5] = [1, 2, 3];
        let header = PicHeader::new(2, 2, palette);

        let input = scratch("in.pic");
        let output = scratch("in.pic.tga");
        std::fs::write(&input, encode(&header, &[0, 5, 5, 0]).unwrap()).unwrap();

        pic_to_tga(&input, &output).unwrap();
        let raw = std::fs::read(&output).unwrap();
        let written = image::open(&output).unwrap().to_rgb8();
        std::fs::remove_file(&input).unwrap();
        std::fs::remove_file(&output).unwrap();

        // Image type 2: uncompressed true-color.
        assert_eq!(raw[2], 2);
        assert!(raw.len() >= 18 + 2 * 2 * 3);
        assert_eq!(written.dimensions(), (2, 2));
        assert_eq!(
            written.into_raw(),
            vec![10, 20, 30, 1, 2, 3, 1, 2, 3, 10, 20, 30]
        );
    }

    #[test]
    fn test_pic_to_tga_rejects_bad_magic() {
        let mut header = PicHeader::new(1, 1, Palette::default());
        header.magic = 0;

        let input = scratch("bad.pic");
        let output = scratch("bad.pic.tga");
        std::fs::write(&input, encode(&header, &[0]).unwrap()).unwrap();

        let result = pic_to_tga(&input, &output);
        std::fs::remove_file(&input).unwrap();

        assert!(matches!(
            result,
            Err(ConvertError::Decode(DecodeError::InvalidMagic(0)))
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_pic_to_tga_skips_empty_image() {
        let header = PicHeader::new(0, 0, Palette::default());

        let input = scratch("empty.pic");
        let output = scratch("empty.pic.tga");
        std::fs::write(&input, encode(&header, &[]).unwrap()).unwrap();

        let result = pic_to_tga(&input, &output);
        std::fs::remove_file(&input).unwrap();

        assert!(result.is_ok());
        assert!(!output.exists());
    }

    #[test]
    fn test_textures_to_tga_rgb() {
        use lib_pic::texture::{TILES_PER_SHEET, TILE_PIXELS};

        let mut palette = Palette::default();
        palette.colors[3] = [7, 8, 9];

        let sheet = vec![3u8; TILE_PIXELS * TILES_PER_SHEET];
        let textures = scratch("rgb_sheet.tex");
        let output_dir = scratch("rgb_tiles");
        std::fs::write(&textures, &sheet).unwrap();
        std::fs::create_dir_all(&output_dir).unwrap();

        let written = textures_to_tga(&textures, &palette, &output_dir, false).unwrap();
        let raw = std::fs::read(&written[15]).unwrap();
        let last = image::open(&written[15]).unwrap().to_rgb8();
        std::fs::remove_file(&textures).unwrap();
        std::fs::remove_dir_all(&output_dir).unwrap();

        assert_eq!(written.len(), TILES_PER_SHEET);
        assert_eq!(raw[2], 2);
        assert_eq!(last.get_pixel(255, 255).0, [7, 8, 9]);
    }

    #[test]
    fn test_textures_to_tga_alpha() {
        use lib_pic::texture::{TILES_PER_SHEET, TILE_PIXELS};

        let mut palette = Palette::default();
        palette.colors[0] = [50, 50, 50];
        palette.colors[1] = [200, 100, 0];

        let mut sheet = vec![1u8; TILE_PIXELS * TILES_PER_SHEET];
        sheet[0] = 0;
        let textures = scratch("sheet.tex");
        let output_dir = scratch("tiles");
        std::fs::write(&textures, &sheet).unwrap();
        std::fs::create_dir_all(&output_dir).unwrap();

        let written = textures_to_tga(&textures, &palette, &output_dir, true).unwrap();
        let raw = std::fs::read(&written[0]).unwrap();
        let first = image::open(&written[0]).unwrap().to_rgba8();
        std::fs::remove_file(&textures).unwrap();
        std::fs::remove_dir_all(&output_dir).unwrap();

        assert_eq!(written.len(), TILES_PER_SHEET);
        assert_eq!(raw[2], 2);
        assert_eq!(first.dimensions(), (256, 256));
        assert_eq!(first.get_pixel(0, 0).0, [50, 50, 50, 0]);
        assert_eq!(first.get_pixel(1, 0).0, [200, 100, 0, 255]);
    }

    #[test]
    fn test_save_tga_buffer_mismatch() {
        let image = DecodedImage::new(2, 2, vec![0; 3]);
        let result = save_tga(&image, &scratch("never.tga"));
        assert!(matches!(result, Err(ConvertError::BufferSize(2, 2))));
    }
}
