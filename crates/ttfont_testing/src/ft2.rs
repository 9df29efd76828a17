use crate::writer::Writer;
use crate::IMAGE_PAYLOAD;
use byteorder::BigEndian;

/// Offset of the "TNFN" magic: right after the header size and file version words
pub const MAGIC_OFFSET: usize = 8;
/// Size of the header, from the header size word up to and including the ic gap
pub const HEADER_LEN: usize = 54;

/// Absolute offsets of the sections of a built FT2 container. A section offset points at its
/// "ROTV" tag when the header version has one, at its count otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ft2Layout {
    pub chars_section: usize,
    pub unicode_section: usize,
    pub kerning_section: usize,
    pub image_offset: usize,
}

/// Builder for big endian FT2 containers
#[derive(Clone, Debug)]
pub struct Ft2Fixture {
    pub header_version: u32,
    pub magic: [u8; 4],
    pub section_tag: [u8; 4],
    pub min_height: f32,
    pub base_line: f32,
    pub space_width: f32,
    pub snd_id: u32,
    pub ic_gap: u32,
    pub glyphs: Vec<[f32; 3]>,
    pub entries: Vec<(u16, u16)>,
    pub kerning: Vec<(u16, u16, f32)>,
    pub image: Vec<u8>,
    /// Overrides the count restated in front of the glyph table
    pub restated_chars_count: Option<u32>,
    /// Overrides the count restated in front of the unicode table
    pub restated_unicode_count: Option<u32>,
}

impl Default for Ft2Fixture {
    fn default() -> Self {
        Self {
            header_version: 3,
            magic: *b"TNFN",
            section_tag: *b"ROTV",
            min_height: 5.0,
            base_line: 4.0,
            space_width: 2.5,
            snd_id: 0x1234_5678,
            ic_gap: 2,
            glyphs: Vec::new(),
            entries: Vec::new(),
            kerning: Vec::new(),
            image: IMAGE_PAYLOAD.to_vec(),
            restated_chars_count: None,
            restated_unicode_count: None,
        }
    }
}

impl Ft2Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header_version(mut self, header_version: u32) -> Self {
        self.header_version = header_version;
        self
    }

    pub fn with_glyph(mut self, x: f32, y: f32, width: f32) -> Self {
        self.glyphs.push([x, y, width]);
        self
    }

    pub fn with_entry(mut self, codepoint: u16, glyph_index: u16) -> Self {
        self.entries.push((codepoint, glyph_index));
        self
    }

    pub fn with_kerning(mut self, left: u16, right: u16, gap: f32) -> Self {
        self.kerning.push((left, right, gap));
        self
    }

    pub fn with_image(mut self, image: &[u8]) -> Self {
        self.image = image.to_vec();
        self
    }

    fn tag_len(&self) -> usize {
        if self.header_version > 2 {
            4
        } else {
            0
        }
    }

    pub fn layout(&self) -> Ft2Layout {
        let chars_section = HEADER_LEN;
        let unicode_section = chars_section + self.tag_len() + 4 + 12 * self.glyphs.len();
        let kerning_section = unicode_section + self.tag_len() + 4 + 4 * self.entries.len();
        let image_offset = kerning_section + self.tag_len() + 4 + 8 * self.kerning.len();

        Ft2Layout {
            chars_section,
            unicode_section,
            kerning_section,
            image_offset,
        }
    }

    pub fn build(&self) -> Vec<u8> {
        let mut w = Writer::<BigEndian>::new();

        w.u32(HEADER_LEN as u32);
        w.u32(1);
        w.bytes(&self.magic);
        w.u32(self.header_version);
        w.u32(0);
        w.u16(0);
        w.u32(0);
        w.u32(self.glyphs.len() as u32);
        w.u32(self.entries.len() as u32);
        w.f32(self.min_height);
        w.f32(self.base_line);
        w.f32(self.space_width);
        w.u32(self.snd_id);
        w.u32(self.ic_gap);

        self.section_start(&mut w);
        w.u32(self.restated_chars_count.unwrap_or(self.glyphs.len() as u32));
        for [x, y, width] in &self.glyphs {
            w.f32(*x);
            w.f32(*y);
            w.f32(*width);
        }

        self.section_start(&mut w);
        w.u32(self.restated_unicode_count.unwrap_or(self.entries.len() as u32));
        for (codepoint, glyph_index) in &self.entries {
            w.u16(*codepoint);
            w.u16(*glyph_index);
        }

        self.section_start(&mut w);
        w.u32(self.kerning.len() as u32);
        for (left, right, gap) in &self.kerning {
            w.u16(*left);
            w.u16(*right);
            w.f32(*gap);
        }

        w.bytes(&self.image);
        w.finish()
    }

    fn section_start(&self, w: &mut Writer<BigEndian>) {
        if self.header_version > 2 {
            w.bytes(&self.section_tag);
        }
    }
}
