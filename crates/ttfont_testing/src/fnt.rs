use crate::writer::Writer;
use crate::{IMAGE_PAYLOAD, JUNK};
use byteorder::LittleEndian;

/// Size of the preamble: file size, two relative offsets and a reserved word
pub const PREAMBLE_LEN: usize = 16;
/// Size of the font header, up to and including its two relative offsets
pub const HEADER_LEN: usize = 60;

/// Absolute offsets of the sections of a built FNT container
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FntLayout {
    pub header_offset: usize,
    pub chars_offset: usize,
    pub unicode_offset: usize,
    pub image_offset: usize,
    pub file_size: usize,
}

/// Builder for little endian FNT containers
#[derive(Clone, Debug)]
pub struct FntFixture {
    pub min_height: f32,
    pub base_line: f32,
    pub space_width: f32,
    pub glyphs: Vec<[f32; 3]>,
    pub entries: Vec<(u16, u16)>,
    pub image: Vec<u8>,
    /// Junk bytes between the preamble and the font header
    pub header_gap: usize,
    /// Junk bytes between the font header and the glyph table
    pub table_gap: usize,
    /// Overrides the file size stored in the preamble
    pub file_size: Option<u32>,
    /// Overrides the glyph count stored in the header
    pub chars_count: Option<u32>,
    /// Overrides the unicode entry count stored in the header
    pub unicode_count: Option<u32>,
}

impl Default for FntFixture {
    fn default() -> Self {
        Self {
            min_height: 5.0,
            base_line: 4.0,
            space_width: 2.5,
            glyphs: Vec::new(),
            entries: Vec::new(),
            image: IMAGE_PAYLOAD.to_vec(),
            header_gap: 0,
            table_gap: 0,
            file_size: None,
            chars_count: None,
            unicode_count: None,
        }
    }
}

impl FntFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_glyph(mut self, x: f32, y: f32, width: f32) -> Self {
        self.glyphs.push([x, y, width]);
        self
    }

    pub fn with_entry(mut self, codepoint: u16, glyph_index: u16) -> Self {
        self.entries.push((codepoint, glyph_index));
        self
    }

    pub fn with_image(mut self, image: &[u8]) -> Self {
        self.image = image.to_vec();
        self
    }

    pub fn layout(&self) -> FntLayout {
        let header_offset = PREAMBLE_LEN + self.header_gap;
        let chars_offset = header_offset + HEADER_LEN + self.table_gap;
        let unicode_offset = chars_offset + 12 * self.glyphs.len();
        let image_offset = unicode_offset + 4 * self.entries.len();

        FntLayout {
            header_offset,
            chars_offset,
            unicode_offset,
            image_offset,
            file_size: image_offset + self.image.len(),
        }
    }

    pub fn build(&self) -> Vec<u8> {
        let layout = self.layout();
        let mut w = Writer::<LittleEndian>::new();

        // Preamble. Each delta counts from the end of its own field.
        w.u32(self.file_size.unwrap_or(layout.file_size as u32));
        w.u32((layout.header_offset - 8) as u32);
        w.u32((layout.image_offset - 12) as u32);
        w.u32(0);
        w.fill(JUNK, self.header_gap);

        // Font header
        w.u32(0);
        w.u16(1);
        w.u16(0);
        w.u32((layout.file_size - layout.header_offset) as u32);
        w.u32(self.chars_count.unwrap_or(self.glyphs.len() as u32));
        w.u32(self.unicode_count.unwrap_or(self.entries.len() as u32));
        w.f32(self.min_height);
        w.f32(self.base_line);
        w.f32(self.space_width);
        w.fill(0, 20);
        w.u32((layout.chars_offset - (layout.header_offset + HEADER_LEN - 4)) as u32);
        w.u32((layout.unicode_offset - (layout.header_offset + HEADER_LEN)) as u32);
        w.fill(JUNK, self.table_gap);

        for [x, y, width] in &self.glyphs {
            w.f32(*x);
            w.f32(*y);
            w.f32(*width);
        }
        for (codepoint, glyph_index) in &self.entries {
            w.u16(*codepoint);
            w.u16(*glyph_index);
        }

        w.pad_to(JUNK, layout.image_offset);
        w.bytes(&self.image);
        debug_assert_eq!(w.len(), layout.file_size);

        w.finish()
    }
}
