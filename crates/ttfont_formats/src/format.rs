use crate::asset::FontAsset;
use crate::image_container::ImageContainerDecoder;
use crate::{fnt, ft2};
use derive_more::Display;
use log::debug;
use std::path::Path;
use std::str::FromStr;
use ttfont_shared::{Error, Result};

/// On-disk layout of a font container
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum FontFormat {
    /// Little endian container with relative offsets
    #[display("FNT")]
    Fnt,
    /// Big endian container with "TNFN"/"ROTV" magics
    #[display("FT2")]
    Ft2,
}

impl FontFormat {
    /// Detects the format from a file extension (case insensitive, without the dot)
    pub fn from_extension(extension: &str) -> Option<Self> {
        if extension.eq_ignore_ascii_case("fnt") {
            Some(FontFormat::Fnt)
        } else if extension.eq_ignore_ascii_case("ft2") {
            Some(FontFormat::Ft2)
        } else {
            None
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| Error::UnknownFormat(path.display().to_string()))
    }

    /// Decodes `buffer` with the decoder of this format
    pub fn decode(self, buffer: &[u8], images: &impl ImageContainerDecoder) -> Result<FontAsset> {
        match self {
            FontFormat::Fnt => fnt::decode(buffer, images),
            FontFormat::Ft2 => ft2::decode(buffer, images),
        }
    }

    /// Reads the whole file into memory and decodes it with the decoder of this format
    pub fn decode_file(
        self,
        path: impl AsRef<Path>,
        images: &impl ImageContainerDecoder,
    ) -> Result<FontAsset> {
        let path = path.as_ref();
        let buffer = std::fs::read(path)?;
        debug!("decoding {} as {self} ({} bytes)", path.display(), buffer.len());

        self.decode(&buffer, images)
    }
}

impl FromStr for FontFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.strip_prefix('.').unwrap_or(s);
        Self::from_extension(s).ok_or_else(|| Error::UnknownFormat(s.to_string()))
    }
}

/// Decodes a font container, picking the decoder from the file extension
pub fn decode_path(path: impl AsRef<Path>, images: &impl ImageContainerDecoder) -> Result<FontAsset> {
    let format = FontFormat::from_path(&path)?;
    format.decode_file(path, images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("FONT_GAME.FNT", Some(FontFormat::Fnt))]
    #[test_case("fonts/hud.fnt", Some(FontFormat::Fnt))]
    #[test_case("FONT_GAME.FT2", Some(FontFormat::Ft2))]
    #[test_case("a/b/c.Ft2", Some(FontFormat::Ft2))]
    #[test_case("FONT_GAME.DDS", None)]
    #[test_case("FNT", None)]
    fn detect_by_extension(path: &str, expected: Option<FontFormat>) {
        assert_eq!(FontFormat::from_path(path).ok(), expected);
    }

    #[test]
    fn unknown_extension_is_reported() {
        let err = FontFormat::from_path("font.ttf").unwrap_err();
        assert!(matches!(err, Error::UnknownFormat(ref p) if p == "font.ttf"));
    }

    #[test]
    fn parse_from_str() {
        assert_eq!("fnt".parse::<FontFormat>().unwrap(), FontFormat::Fnt);
        assert_eq!(".FT2".parse::<FontFormat>().unwrap(), FontFormat::Ft2);
        assert!("dds".parse::<FontFormat>().is_err());
        assert_eq!(FontFormat::Ft2.to_string(), "FT2");
    }
}
