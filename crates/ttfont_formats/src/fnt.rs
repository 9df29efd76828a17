//! FNT font containers
//!
//! Little endian. The file starts with a preamble that points, through relative offsets, to a font
//! header and to the embedded image:
//!
//! ```text
//! 0x00  u32  file size
//! 0x04  u32  delta to font header    (relative to 0x08)
//! 0x08  u32  delta to image          (relative to 0x0c)
//! 0x0c  u32  reserved
//! ```
//!
//! The font header holds the table counts and metrics, followed by two more relative offsets to the
//! glyph table and the unicode table. The image runs from its offset up to the stored file size.

use crate::asset::{read_table, FontAsset, GlyphRect, UnicodeEntry};
use crate::format::FontFormat;
use crate::image_container::ImageContainerDecoder;
use byteorder::LittleEndian;
use std::path::Path;
use ttfont_shared::byte_cursor::ByteCursor;
use ttfont_shared::{Error, Result};

/// Decodes an FNT container
pub fn decode(buffer: &[u8], images: &impl ImageContainerDecoder) -> Result<FontAsset> {
    let mut cursor = ByteCursor::new(buffer);

    let file_size = cursor.read_u32::<LittleEndian>()? as usize;
    let header_offset = read_offset(&mut cursor, file_size)?;
    let image_offset = read_offset(&mut cursor, file_size)?;
    cursor.skip(4)?;

    cursor.seek(header_offset)?;
    cursor.skip(4)?;
    // Only the low half of the version word is used, the high half is reserved
    let _file_version = cursor.read_u16::<LittleEndian>()?;
    cursor.skip(2)?;
    let _size = cursor.read_u32::<LittleEndian>()?;
    let chars_count = cursor.read_u32::<LittleEndian>()?;
    let unicode_count = cursor.read_u32::<LittleEndian>()?;

    let min_height = cursor.read_f32::<LittleEndian>()?;
    let base_line = cursor.read_f32::<LittleEndian>()?;
    let space_width = cursor.read_f32::<LittleEndian>()?;
    cursor.skip(20)?;

    let chars_offset = read_offset(&mut cursor, file_size)?;
    let unicode_offset = read_offset(&mut cursor, file_size)?;

    cursor.seek(chars_offset)?;
    let glyphs = read_table(&mut cursor, chars_count, GlyphRect::ENCODED_LEN, |c| {
        GlyphRect::read::<LittleEndian>(c, min_height)
    })?;

    cursor.seek(unicode_offset)?;
    let unicode = read_table(
        &mut cursor,
        unicode_count,
        UnicodeEntry::ENCODED_LEN,
        UnicodeEntry::read::<LittleEndian>,
    )?;

    // read_offset keeps image_offset below file_size
    cursor.seek(image_offset)?;
    let payload = cursor.read_bytes(file_size - image_offset)?;
    let image = images.decode(payload)?;

    Ok(FontAsset {
        format: FontFormat::Fnt,
        glyphs,
        unicode,
        kerning: Vec::new(),
        min_height,
        base_line,
        space_width,
        snd_id: 0,
        ic_gap: 0,
        image,
    })
}

/// Reads the file into memory and decodes it as an FNT container
pub fn decode_file(path: impl AsRef<Path>, images: &impl ImageContainerDecoder) -> Result<FontAsset> {
    FontFormat::Fnt.decode_file(path, images)
}

/// Reads a relative offset. The target has to fall inside the stored file size.
fn read_offset(cursor: &mut ByteCursor<'_>, file_size: usize) -> Result<usize> {
    let offset = cursor.read_relative_offset::<LittleEndian>()?;
    if offset >= file_size {
        return Err(Error::Bounds {
            offset: offset as u64,
        });
    }
    Ok(offset)
}
