use crate::errors::{Error, Result};
use byteorder::ByteOrder;
use std::fmt;
use std::fmt::{Debug, Formatter};

/// A four byte magic tag as stored in front of container sections. Tags are compared byte for
/// byte, no case folding or trimming is applied.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag(pub [u8; 4]);

impl Tag {
    pub const fn new(bytes: &[u8; 4]) -> Self {
        Self(*bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "\"")?;
        for b in self.0 {
            write!(f, "{}", std::ascii::escape_default(b))?;
        }
        write!(f, "\"")
    }
}

impl Debug for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({self})")
    }
}

/// Resolves a relative offset: `delta` is added to `base`, which is the stream position the delta
/// is relative to. Overflow is reported as a bounds error carrying the widened (saturated) sum.
pub fn resolve_offset(base: usize, delta: u32) -> Result<usize> {
    usize::try_from(delta)
        .ok()
        .and_then(|delta| base.checked_add(delta))
        .ok_or(Error::Bounds {
            offset: (base as u64).saturating_add(u64::from(delta)),
        })
}

/// Sequential reader over an immutable byte buffer. The only state is the read position, which
/// always stays within `0..=len`.
///
/// Multi-byte reads are generic over the byte order, so the same cursor can be used for the little
/// endian FNT and the big endian FT2 containers:
///
/// ```
/// use byteorder::{BigEndian, LittleEndian};
/// use ttfont_shared::byte_cursor::ByteCursor;
///
/// let mut cursor = ByteCursor::new(&[0x3f, 0x80, 0x00, 0x00, 0x01, 0x00]);
/// assert_eq!(cursor.read_f32::<BigEndian>().unwrap(), 1.0);
/// assert_eq!(cursor.read_u16::<LittleEndian>().unwrap(), 1);
/// assert!(cursor.read_u16::<LittleEndian>().is_err());
/// ```
#[derive(Clone)]
pub struct ByteCursor<'a> {
    /// Actual buffer in u8 bytes
    buffer: &'a [u8],
    /// Current position in the buffer
    position: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, position: 0 }
    }

    /// Current read position in bytes
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the full underlying buffer
    pub fn buffer(&self) -> &'a [u8] {
        self.buffer
    }

    /// Returns the unread tail of the buffer
    pub fn remaining(&self) -> &'a [u8] {
        self.buffer.get(self.position..).unwrap_or_default()
    }

    /// Seek to an absolute position. Seeking to the very end is allowed, reading from there is not.
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        if pos > self.buffer.len() {
            return Err(Error::Bounds { offset: pos as u64 });
        }
        self.position = pos;
        Ok(())
    }

    /// Skip `n` bytes
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.take(n).map(|_| ())
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let start = self.position;
        let end = start
            .checked_add(n)
            .filter(|end| *end <= self.buffer.len())
            .ok_or(Error::Bounds {
                offset: (start as u64).saturating_add(n as u64),
            })?;

        self.position = end;
        Ok(&self.buffer[start..end])
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16<B: ByteOrder>(&mut self) -> Result<u16> {
        Ok(B::read_u16(self.take(2)?))
    }

    pub fn read_u32<B: ByteOrder>(&mut self) -> Result<u32> {
        Ok(B::read_u32(self.take(4)?))
    }

    pub fn read_f32<B: ByteOrder>(&mut self) -> Result<f32> {
        Ok(B::read_f32(self.take(4)?))
    }

    /// Reads four bytes as a magic tag
    pub fn read_tag(&mut self) -> Result<Tag> {
        let mut tag = [0u8; 4];
        tag.copy_from_slice(self.take(4)?);
        Ok(Tag(tag))
    }

    /// Reads exactly `n` bytes
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.take(n)
    }

    /// Reads a u32 delta and resolves it against the position right after the delta field.
    pub fn read_relative_offset<B: ByteOrder>(&mut self) -> Result<usize> {
        let delta = self.read_u32::<B>()?;
        resolve_offset(self.position, delta)
    }
}

impl Debug for ByteCursor<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteCursor")
            .field("len", &self.buffer.len())
            .field("position", &self.position)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{BigEndian, LittleEndian};
    use test_case::test_case;

    #[test]
    fn test_sequential_reads() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, b'T', b'N', b'F', b'N', 0xaa];
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(cursor.read_u16::<LittleEndian>().unwrap(), 0x0201);
        assert_eq!(cursor.read_u32::<BigEndian>().unwrap(), 0x0304_0506);
        assert_eq!(cursor.position(), 6);
        assert_eq!(cursor.read_tag().unwrap(), Tag::new(b"TNFN"));
        assert_eq!(cursor.remaining(), &[0xaa]);
        assert_eq!(cursor.read_u8().unwrap(), 0xaa);
        assert!(cursor.remaining().is_empty());
    }

    #[test_case(&[0x3f, 0x80, 0x00, 0x00], 1.0; "unit")]
    #[test_case(&[0xc0, 0x00, 0x00, 0x00], -2.0; "negative")]
    #[test_case(&[0x41, 0x20, 0x00, 0x00], 10.0; "ten")]
    fn test_big_endian_floats(bytes: &[u8], expected: f32) {
        let mut cursor = ByteCursor::new(bytes);
        assert_eq!(cursor.read_f32::<BigEndian>().unwrap(), expected);
    }

    #[test]
    fn test_byte_order_is_not_interchangeable() {
        let bytes = [0x3f, 0x80, 0x00, 0x00];

        let mut cursor = ByteCursor::new(&bytes);
        let value = cursor.read_f32::<LittleEndian>().unwrap();
        assert_ne!(value, 1.0);
        assert_eq!(value.to_bits(), 0x0000_803f);
    }

    #[test]
    fn test_read_past_end() {
        let mut cursor = ByteCursor::new(&[0x00, 0x01, 0x02]);
        cursor.skip(2).unwrap();

        match cursor.read_u16::<LittleEndian>() {
            Err(Error::Bounds { offset }) => assert_eq!(offset, 4),
            other => panic!("expected bounds error, got {other:?}"),
        }
        // a failed read does not move the cursor
        assert_eq!(cursor.position(), 2);
        assert!(cursor.read_bytes(2).is_err());
        assert_eq!(cursor.read_bytes(1).unwrap(), &[0x02]);
    }

    #[test]
    fn test_seek() {
        let mut cursor = ByteCursor::new(&[0u8; 8]);

        cursor.seek(8).unwrap();
        assert!(cursor.read_u8().is_err());

        assert!(matches!(cursor.seek(9), Err(Error::Bounds { offset: 9 })));
        assert_eq!(cursor.position(), 8);

        cursor.seek(4).unwrap();
        assert!(cursor.skip(5).is_err());
        cursor.skip(4).unwrap();
        assert_eq!(cursor.position(), 8);
    }

    #[test]
    fn test_huge_skip_does_not_wrap() {
        let mut cursor = ByteCursor::new(&[0u8; 4]);
        cursor.skip(2).unwrap();
        assert!(matches!(cursor.skip(usize::MAX), Err(Error::Bounds { .. })));
        assert_eq!(cursor.position(), 2);
    }

    #[test_case(0, 0, 0)]
    #[test_case(4, 12, 16)]
    #[test_case(100, u32::MAX, 100 + u32::MAX as usize)]
    fn test_resolve_offset(base: usize, delta: u32, expected: usize) {
        assert_eq!(resolve_offset(base, delta).unwrap(), expected);
    }

    #[test]
    fn test_resolve_offset_overflow() {
        let err = resolve_offset(usize::MAX, 2).unwrap_err();
        assert!(matches!(err, Error::Bounds { offset } if offset == (usize::MAX as u64).saturating_add(2)));
    }

    #[test]
    fn test_relative_offset_is_taken_after_the_field() {
        // four bytes of padding, then a delta of 8
        let data = [0, 0, 0, 0, 8, 0, 0, 0];
        let mut cursor = ByteCursor::new(&data);
        cursor.skip(4).unwrap();

        assert_eq!(cursor.read_relative_offset::<LittleEndian>().unwrap(), 16);
        assert_eq!(cursor.position(), 8);
    }

    #[test]
    fn test_tag_display() {
        assert_eq!(Tag::new(b"ROTV").to_string(), "\"ROTV\"");
        assert_eq!(Tag([0x00, b'A', 0xff, b'"']).to_string(), "\"\\x00A\\xff\\\"\"");
        assert_eq!(format!("{:?}", Tag::new(b"TNFN")), "Tag(\"TNFN\")");
    }
}
