//! Testing functionality
//!
//! Builders for synthetic FNT and FT2 containers. They only produce what the test suites need to
//! pin down the decoders (chosen offsets, junk padding, broken magics and counts), they are not a
//! general purpose writer for these formats.

pub mod fnt;
pub mod ft2;
mod writer;

/// Byte used to fill gaps between sections, so that a decoder landing in a gap reads garbage
pub const JUNK: u8 = 0xee;

/// A tiny stand-in for an image container payload
pub const IMAGE_PAYLOAD: &[u8] = b"DDS \x7c\x00\x00\x00payload";
