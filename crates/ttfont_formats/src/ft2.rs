//! FT2 font containers
//!
//! Big endian. A fixed header, validated by a "TNFN" magic, is followed by three tables: glyph
//! rectangles, unicode entries and kerning pairs. From header version 3 on every table starts with
//! a "ROTV" magic. The glyph and unicode tables restate the count already given in the header.
//! Everything after the kerning table is the embedded image.

use crate::asset::{read_table, FontAsset, GlyphRect, KerningPair, UnicodeEntry};
use crate::format::FontFormat;
use crate::image_container::ImageContainerDecoder;
use byteorder::{BigEndian, LittleEndian};
use std::path::Path;
use ttfont_shared::byte_cursor::{ByteCursor, Tag};
use ttfont_shared::errors::Section;
use ttfont_shared::{Error, Result};

pub const MAGIC_NFNT: Tag = Tag::new(b"TNFN");
pub const MAGIC_VTOR: Tag = Tag::new(b"ROTV");

/// First header version whose tables are introduced by a "ROTV" magic
const TAGGED_SECTIONS_VERSION: u32 = 3;

/// Decodes an FT2 container
pub fn decode(buffer: &[u8], images: &impl ImageContainerDecoder) -> Result<FontAsset> {
    let mut cursor = ByteCursor::new(buffer);

    let _header_size = cursor.read_u32::<BigEndian>()?;
    let _file_version = cursor.read_u32::<BigEndian>()?;
    expect_magic(&mut cursor, MAGIC_NFNT)?;

    let header_version = cursor.read_u32::<BigEndian>()?;
    // Two reserved fields, stored without byte swapping
    let _reserved = (
        cursor.read_u32::<LittleEndian>()?,
        cursor.read_u16::<LittleEndian>()?,
    );
    let _unknown_size = cursor.read_u32::<BigEndian>()?;
    let chars_count = cursor.read_u32::<BigEndian>()?;
    let unicode_count = cursor.read_u32::<BigEndian>()?;

    let min_height = cursor.read_f32::<BigEndian>()?;
    let base_line = cursor.read_f32::<BigEndian>()?;
    let space_width = cursor.read_f32::<BigEndian>()?;
    let snd_id = cursor.read_u32::<BigEndian>()?;
    let ic_gap = cursor.read_u32::<BigEndian>()?;

    section_start(&mut cursor, header_version)?;
    expect_count(&mut cursor, Section::CharMapping, chars_count)?;
    let glyphs = read_table(&mut cursor, chars_count, GlyphRect::ENCODED_LEN, |c| {
        GlyphRect::read::<BigEndian>(c, min_height)
    })?;

    section_start(&mut cursor, header_version)?;
    expect_count(&mut cursor, Section::Unicode, unicode_count)?;
    let unicode = read_table(
        &mut cursor,
        unicode_count,
        UnicodeEntry::ENCODED_LEN,
        UnicodeEntry::read::<BigEndian>,
    )?;

    section_start(&mut cursor, header_version)?;
    let kerning_count = cursor.read_u32::<BigEndian>()?;
    let kerning = read_table(
        &mut cursor,
        kerning_count,
        KerningPair::ENCODED_LEN,
        KerningPair::read::<BigEndian>,
    )?;

    let image = images.decode(cursor.remaining())?;

    Ok(FontAsset {
        format: FontFormat::Ft2,
        glyphs,
        unicode,
        kerning,
        min_height,
        base_line,
        space_width,
        snd_id,
        ic_gap,
        image,
    })
}

/// Reads the file into memory and decodes it as an FT2 container
pub fn decode_file(path: impl AsRef<Path>, images: &impl ImageContainerDecoder) -> Result<FontAsset> {
    FontFormat::Ft2.decode_file(path, images)
}

fn expect_magic(cursor: &mut ByteCursor<'_>, expected: Tag) -> Result<()> {
    let offset = cursor.position();
    let found = cursor.read_tag()?;
    if found != expected {
        return Err(Error::Format {
            offset,
            expected,
            found,
        });
    }
    Ok(())
}

fn section_start(cursor: &mut ByteCursor<'_>, header_version: u32) -> Result<()> {
    if header_version >= TAGGED_SECTIONS_VERSION {
        expect_magic(cursor, MAGIC_VTOR)?;
    }
    Ok(())
}

/// Tables restate their entry count, which has to match the header
fn expect_count(cursor: &mut ByteCursor<'_>, section: Section, expected: u32) -> Result<()> {
    let offset = cursor.position();
    let found = cursor.read_u32::<BigEndian>()?;
    if found != expected {
        return Err(Error::Consistency {
            offset,
            section,
            expected,
            found,
        });
    }
    Ok(())
}
