use crate::format::FontFormat;
use crate::image_container::FontImage;
use byteorder::ByteOrder;
use ttfont_shared::byte_cursor::ByteCursor;
use ttfont_shared::Result;

/// Bounding box of a glyph inside the atlas image. Values are kept as stored in the container,
/// no unit conversion is done.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    /// Glyphs do not store a height, this is the container-wide minimum height
    pub height: f32,
}

impl GlyphRect {
    pub(crate) const ENCODED_LEN: usize = 12;

    pub(crate) fn read<B: ByteOrder>(cursor: &mut ByteCursor<'_>, height: f32) -> Result<Self> {
        Ok(Self {
            x: cursor.read_f32::<B>()?,
            y: cursor.read_f32::<B>()?,
            width: cursor.read_f32::<B>()?,
            height,
        })
    }
}

/// Maps a single UTF-16 code unit onto an index in the glyph table.
///
/// The glyph index is not validated against the glyph table: containers shipped with the games
/// reference glyphs that do not exist. Use [`FontAsset::glyph_for_entry`] to look up the glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnicodeEntry {
    pub codepoint: u16,
    pub glyph_index: u16,
}

impl UnicodeEntry {
    pub(crate) const ENCODED_LEN: usize = 4;

    pub(crate) fn read<B: ByteOrder>(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        Ok(Self {
            codepoint: cursor.read_u16::<B>()?,
            glyph_index: cursor.read_u16::<B>()?,
        })
    }

    /// Returns the character of this entry, or `None` for a lone surrogate code unit
    pub fn character(&self) -> Option<char> {
        char::from_u32(u32::from(self.codepoint))
    }
}

/// Spacing adjustment between two adjacent characters (FT2 only)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KerningPair {
    pub left: u16,
    pub right: u16,
    pub gap: f32,
}

impl KerningPair {
    pub(crate) const ENCODED_LEN: usize = 8;

    pub(crate) fn read<B: ByteOrder>(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        Ok(Self {
            left: cursor.read_u16::<B>()?,
            right: cursor.read_u16::<B>()?,
            gap: cursor.read_f32::<B>()?,
        })
    }
}

/// Reads `count` consecutive table entries of `entry_len` bytes each. The count comes straight
/// from the container, so the preallocation is capped by what the buffer can actually hold.
pub(crate) fn read_table<'a, T>(
    cursor: &mut ByteCursor<'a>,
    count: u32,
    entry_len: usize,
    mut read: impl FnMut(&mut ByteCursor<'a>) -> Result<T>,
) -> Result<Vec<T>> {
    let capacity = (count as usize).min(cursor.remaining().len() / entry_len);
    let mut table = Vec::with_capacity(capacity);
    for _ in 0..count {
        table.push(read(cursor)?);
    }
    Ok(table)
}

/// A decoded font container
#[derive(Clone, Debug, PartialEq)]
pub struct FontAsset {
    /// Container format this asset was decoded from
    pub format: FontFormat,
    /// Glyph rectangles in on-disk order
    pub glyphs: Vec<GlyphRect>,
    /// Unicode entries in on-disk order
    pub unicode: Vec<UnicodeEntry>,
    /// Kerning pairs in on-disk order, always empty for FNT
    pub kerning: Vec<KerningPair>,
    pub min_height: f32,
    pub base_line: f32,
    pub space_width: f32,
    /// Sound id (FT2 only, 0 for FNT)
    pub snd_id: u32,
    /// Inter-character gap (FT2 only, 0 for FNT)
    pub ic_gap: u32,
    /// The embedded atlas image, as returned by the image container decoder
    pub image: FontImage,
}

impl FontAsset {
    pub fn glyph(&self, index: usize) -> Option<&GlyphRect> {
        self.glyphs.get(index)
    }

    /// Returns the glyph an entry points to, `None` when its index is out of range
    pub fn glyph_for_entry(&self, entry: &UnicodeEntry) -> Option<&GlyphRect> {
        self.glyph(usize::from(entry.glyph_index))
    }

    /// Returns the glyph of the first entry mapping `ch`
    pub fn glyph_for_char(&self, ch: char) -> Option<&GlyphRect> {
        let codepoint = u16::try_from(u32::from(ch)).ok()?;
        self.unicode
            .iter()
            .find(|entry| entry.codepoint == codepoint)
            .and_then(|entry| self.glyph_for_entry(entry))
    }

    /// Iterates over all entries that have a glyph, skipping the ones pointing past the glyph table
    pub fn mapped_glyphs(&self) -> impl Iterator<Item = (&UnicodeEntry, &GlyphRect)> + '_ {
        self.unicode
            .iter()
            .filter_map(|entry| self.glyph_for_entry(entry).map(|rect| (entry, rect)))
    }

    /// Returns the kerning gap between `left` and `right` if the container defines one
    pub fn kerning_gap(&self, left: char, right: char) -> Option<f32> {
        let left = u16::try_from(u32::from(left)).ok()?;
        let right = u16::try_from(u32::from(right)).ok()?;
        self.kerning
            .iter()
            .find(|pair| pair.left == left && pair.right == right)
            .map(|pair| pair.gap)
    }
}
