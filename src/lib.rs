//! TTFont
//!
//! Decoders for the FNT and FT2 font containers found in TT Games titles, together with the
//! tooling around them: glyph atlas previews and the settings they are rendered with.

pub use ttfont_config as config;
pub use ttfont_formats as formats;
pub use ttfont_preview as preview;
pub use ttfont_shared as shared;

pub use ttfont_formats::{decode_path, FontAsset, FontFormat};
