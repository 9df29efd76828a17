mod errors;

pub use crate::errors::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Overlay colour used to highlight glyphs: translucent red
pub const DEFAULT_OVERLAY_COLOR: [u8; 4] = [255, 0, 0, 120];

/// Settings for rendering glyph atlas previews. Settings files only need to list the keys they
/// change, everything else keeps its default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSettings {
    /// RGBA colour blended over highlighted glyph rectangles
    pub overlay_color: [u8; 4],
    /// Zoom in percent, 100 keeps the atlas size
    pub zoom: u32,
    /// Highlight every mapped glyph when no single character is selected
    pub highlight_all: bool,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            overlay_color: DEFAULT_OVERLAY_COLOR,
            zoom: 100,
            highlight_all: true,
        }
    }
}

impl PreviewSettings {
    /// Parses settings from a json string
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a json file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading preview settings from {}", path.display());

        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Loads settings from `path` when given, returns the defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("using default preview settings");
                Ok(Self::default())
            }
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<()> {
        if self.zoom == 0 {
            return Err(Error::Config("zoom must be larger than 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn missing_keys_keep_their_default() {
        let settings = PreviewSettings::from_json(r#"{ "zoom": 250 }"#).unwrap();
        assert_eq!(settings.zoom, 250);
        assert_eq!(settings.overlay_color, DEFAULT_OVERLAY_COLOR);
        assert!(settings.highlight_all);
    }

    #[test]
    fn round_trip_through_json() {
        let settings = PreviewSettings {
            overlay_color: [0, 255, 0, 64],
            zoom: 50,
            highlight_all: false,
        };
        let json = settings.to_json().unwrap();
        assert_eq!(PreviewSettings::from_json(&json).unwrap(), settings);
    }

    #[test_case(r#"{ "zoom": 0 }"#; "zero zoom")]
    #[test_case(r#"{ "overlay_color": [1, 2, 3] }"#; "short colour")]
    #[test_case(r#"{ "overlay_color": [1, 2, 3, 300] }"#; "channel overflow")]
    #[test_case("zoom = 10"; "not json")]
    fn invalid_settings(json: &str) {
        assert!(PreviewSettings::from_json(json).is_err());
    }

    #[test]
    fn load_without_path_gives_defaults() {
        assert_eq!(PreviewSettings::load(None).unwrap(), PreviewSettings::default());
    }

    #[test]
    fn load_missing_file() {
        let err = PreviewSettings::load(Some(Path::new("/nonexistent/ttfont/settings.json"))).unwrap_err();
        assert!(matches!(err, Error::IO(_)));
    }
}
