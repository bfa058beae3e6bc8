use std::io::{self, Cursor, Read, Write};

use byteorder::{ReadBytesExt, WriteBytesExt, LE};
use log::{debug, error};

use super::decoder::DecodeError;
use super::format::PicHeader;
use crate::constants::{HEADER_SIZE, MAGIC, PALETTE_LEN};
use crate::palette::Palette;

impl PicHeader {
    /// Reads and validates a header from a stream positioned at offset 0.
    ///
    /// On success the stream sits exactly at the first pixel byte.
    pub fn read<R: Read>(reader: &mut R) -> Result<Self, DecodeError> {
        let mut raw = [0u8; HEADER_SIZE];
        let got = read_full(reader, &mut raw)?;
        if got < HEADER_SIZE {
            error!("Header truncated: got {} of {} bytes", got, HEADER_SIZE);
            return Err(DecodeError::TruncatedHeader {
                expected: HEADER_SIZE,
                actual: got,
            });
        }

        let header = Self::parse(&raw)?;
        debug!(
            "Header read: size={} magic={} width={} height={}",
            header.file_size, header.magic, header.width, header.height
        );

        if header.magic != MAGIC {
            error!("Bad magic {} (expected {})", header.magic, MAGIC);
            return Err(DecodeError::InvalidMagic(header.magic));
        }
        debug!("Magic number validated successfully");

        Ok(header)
    }

    fn parse(raw: &[u8; HEADER_SIZE]) -> io::Result<Self> {
        let mut cursor = Cursor::new(&raw[..]);

        let file_size = cursor.read_u32::<LE>()?;
        let magic = cursor.read_u16::<LE>()?;
        let width = cursor.read_u16::<LE>()?;
        let height = cursor.read_u16::<LE>()?;
        let unknown1 = cursor.read_u16::<LE>()?;
        let unknown2 = cursor.read_u16::<LE>()?;
        let unknown3 = read_array(&mut cursor)?;
        let palette_size = cursor.read_u16::<LE>()?;
        let unknown4 = read_array(&mut cursor)?;
        let palette = Palette::from_bytes(&read_array::<PALETTE_LEN>(&mut cursor)?);
        let unknown5 = cursor.read_u16::<LE>()?;
        let unknown6 = read_array(&mut cursor)?;
        debug_assert_eq!(cursor.position() as usize, HEADER_SIZE);

        Ok(Self {
            file_size,
            magic,
            width,
            height,
            unknown1,
            unknown2,
            unknown3,
            palette_size,
            unknown4,
            palette,
            unknown5,
            unknown6,
        })
    }

    /// Writes the header back in its packed on-disk layout.
    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_u32::<LE>(self.file_size)?;
        writer.write_u16::<LE>(self.magic)?;
        writer.write_u16::<LE>(self.width)?;
        writer.write_u16::<LE>(self.height)?;
        writer.write_u16::<LE>(self.unknown1)?;
        writer.write_u16::<LE>(self.unknown2)?;
        writer.write_all(&self.unknown3)?;
        writer.write_u16::<LE>(self.palette_size)?;
        writer.write_all(&self.unknown4)?;
        writer.write_all(&self.palette.to_bytes())?;
        writer.write_u16::<LE>(self.unknown5)?;
        writer.write_all(&self.unknown6)?;
        Ok(())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(HEADER_SIZE);
        // Writing into a Vec cannot fail.
        let _ = self.write(&mut bytes);
        bytes
    }
}

fn read_array<const N: usize>(cursor: &mut Cursor<&[u8]>) -> io::Result<[u8; N]> {
    let mut bytes = [0u8; N];
    cursor.read_exact(&mut bytes)?;
    Ok(bytes)
}

/// Fills `buf` as far as the stream allows and returns how many bytes were read.
pub(crate) fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
