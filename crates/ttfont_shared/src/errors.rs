//! Error results that can be returned from the decoders
use crate::byte_cursor::Tag;
use derive_more::Display;
use thiserror::Error;

/// Table section of a font container that restates its own entry count
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Section {
    #[display("char mapping")]
    CharMapping,
    #[display("unicode")]
    Unicode,
}

/// Decode errors. Every one of them is fatal for the whole decode: no partial font asset is ever
/// returned next to an error.
#[derive(Debug, Error)]
pub enum Error {
    /// A computed offset or a read falls outside the buffer. `offset` is the absolute offset that
    /// was attempted, widened so that overflowing computations can still be reported.
    #[error("bounds error: offset {offset:#010x} is outside the buffer")]
    Bounds { offset: u64 },

    /// A magic tag did not match. `offset` is where the tag starts.
    #[error("format error at {offset:#010x}: expected magic {expected}, found {found}")]
    Format { offset: usize, expected: Tag, found: Tag },

    /// A section restates an entry count that differs from the one in the header. `offset` is
    /// where the restated count field starts.
    #[error("consistency error at {offset:#010x}: {section} section holds {found} entries, header says {expected}")]
    Consistency {
        offset: usize,
        section: Section,
        expected: u32,
        found: u32,
    },

    #[error("image decode error: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("unknown font format: {0}")]
    UnknownFormat(String),

    #[error("io error: {0}")]
    IO(#[from] std::io::Error),
}

/// Result that can be returned which holds either T or an Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_rendered_in_hex() {
        let err = Error::Bounds { offset: 0x1234 };
        assert_eq!(err.to_string(), "bounds error: offset 0x00001234 is outside the buffer");

        let err = Error::Format {
            offset: 8,
            expected: Tag(*b"TNFN"),
            found: Tag(*b"ABCD"),
        };
        assert_eq!(
            err.to_string(),
            "format error at 0x00000008: expected magic \"TNFN\", found \"ABCD\""
        );
    }

    #[test]
    fn consistency_names_the_section() {
        let err = Error::Consistency {
            offset: 0x40,
            section: Section::Unicode,
            expected: 3,
            found: 4,
        };
        assert_eq!(
            err.to_string(),
            "consistency error at 0x00000040: unicode section holds 4 entries, header says 3"
        );
    }
}
