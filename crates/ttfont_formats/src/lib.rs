//! Font container decoders
//!
//! Two unrelated on-disk layouts, the little endian FNT and the big endian FT2 container, decode
//! into the same [`FontAsset`]. Each decoder is a plain function over a byte buffer; the trailing
//! atlas image is forwarded untouched to an [`ImageContainerDecoder`].
//!
//! ```no_run
//! use ttfont_formats::{decode_path, RawContainer};
//!
//! let asset = decode_path("FONT_GAME.FNT", &RawContainer).unwrap();
//! for (entry, rect) in asset.mapped_glyphs() {
//!     println!("{:?} -> {:?}", entry.character(), rect);
//! }
//! ```

pub mod asset;
pub mod fnt;
pub mod format;
pub mod ft2;
pub mod image_container;

pub use asset::{FontAsset, GlyphRect, KerningPair, UnicodeEntry};
pub use format::{decode_path, FontFormat};
pub use image_container::{DdsContainer, FontImage, ImageContainerDecoder, RawContainer};
