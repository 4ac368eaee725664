use crate::{Data, Error, Result};
use nom::{
    bytes::complete::take,
    number::{complete as number, Endianness},
    IResult,
};
use std::mem::size_of;

type NomError<'a> = nom::error::Error<&'a [u8]>;

/// Keytab file format version, taken from the second byte of the file.
///
/// Version 1 uses native byte order for integers and counts the realm in the
/// principal component count. Version 2 is always big-endian, excludes the
/// realm from the count and appends a name type to each principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormatVersion {
    V1 = 1,
    V2,
}

impl TryFrom<u8> for FileFormatVersion {
    type Error = Error;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::V1),
            2 => Ok(Self::V2),
            marker => Err(Error::InvalidByteOrder { marker }),
        }
    }
}

/// Outcome of [`Cursor::skip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skipped {
    pub skipped: usize,
    /// Fewer bytes than requested were left.
    pub end_of_input: bool,
}

/// Positional reader over a borrowed keytab buffer.
///
/// A failed read never moves the cursor.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    offset: usize,
    // absolute file offset of `data[0]`, only used in errors
    base: usize,
    endianness: Endianness,
    version: FileFormatVersion,
}

macro_rules! read_int {
    ($fn:ident, $type:ident) => {
        pub fn $fn(&mut self) -> Result<$type> {
            let endianness = self.endianness;
            self.read_with(size_of::<$type>(), number::$type(endianness))
        }
    };
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8], endianness: Endianness, version: FileFormatVersion) -> Self {
        Self {
            data,
            offset: 0,
            base: 0,
            endianness,
            version,
        }
    }

    /// Derives a cursor bounded to `data`, which starts at absolute file
    /// offset `base`. Byte order and version are inherited.
    pub fn sub(&self, data: &'a [u8], base: usize) -> Self {
        Self {
            data,
            offset: 0,
            base,
            endianness: self.endianness,
            version: self.version,
        }
    }

    pub fn version(&self) -> FileFormatVersion {
        self.version
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Offset relative to the start of this cursor's buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Offset relative to the start of the file.
    pub fn position(&self) -> usize {
        self.base + self.offset
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.read_with(size_of::<u8>(), number::u8)
    }

    read_int!(read_u16, u16);
    read_int!(read_i32, i32);
    read_int!(read_u32, u32);

    pub fn read_raw(&mut self, size: usize) -> Result<&'a [u8]> {
        self.read_with(size, take(size))
    }

    /// Reads a 16-bit length followed by that many bytes.
    pub fn read_data(&mut self) -> Result<Data> {
        let start = self.offset;
        let size = self.read_u16()?;
        match self.read_raw(size.into()) {
            Ok(bytes) => Ok(bytes.to_vec()),
            Err(err) => {
                self.offset = start;
                Err(err)
            }
        }
    }

    /// Advances by up to `size` bytes. Never fails; a short skip is reported
    /// through [`Skipped::end_of_input`].
    pub fn skip(&mut self, size: usize) -> Skipped {
        let skipped = size.min(self.remaining());
        self.offset += skipped;
        Skipped {
            skipped,
            end_of_input: skipped < size,
        }
    }

    pub(crate) fn truncated(&self, needed: usize) -> Error {
        Error::TruncatedInput {
            offset: self.position(),
            needed,
            available: self.remaining(),
        }
    }

    fn read_with<T, F>(&mut self, needed: usize, parser: F) -> Result<T>
    where
        F: FnOnce(&'a [u8]) -> IResult<&'a [u8], T, NomError<'a>>,
    {
        let data: &'a [u8] = self.data;
        let input = &data[self.offset..];
        match parser(input) {
            Ok((rest, value)) => {
                self.offset += input.len() - rest.len();
                Ok(value)
            }
            Err(_) => Err(self.truncated(needed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(data: &[u8]) -> Cursor<'_> {
        Cursor::new(data, Endianness::Big, FileFormatVersion::V2)
    }

    #[test]
    fn test_reads_big_endian_integers() {
        let data = [0x01, 0x02, 0x03, 0xff, 0xff, 0xff, 0xfe, 0x00, 0x00, 0x01, 0x00];
        let mut c = cursor(&data);
        assert_eq!(c.read_u8().unwrap(), 0x01);
        assert_eq!(c.read_u16().unwrap(), 0x0203);
        assert_eq!(c.read_i32().unwrap(), -2);
        assert_eq!(c.read_u32().unwrap(), 0x0000_0100);
        assert_eq!(c.remaining(), 0);
        assert_eq!(c.offset(), data.len());
    }

    #[test]
    fn test_short_read_leaves_offset_unchanged() {
        let data = [0x00, 0x01, 0x02];
        let mut c = cursor(&data);
        c.read_u8().unwrap();
        let err = c.read_i32().unwrap_err();
        assert_eq!(
            err,
            Error::TruncatedInput {
                offset: 1,
                needed: 4,
                available: 2,
            }
        );
        assert_eq!(c.offset(), 1);
        assert_eq!(c.read_u16().unwrap(), 0x0102);
        assert!(matches!(c.read_u8(), Err(Error::TruncatedInput { .. })));
    }

    #[test]
    fn test_read_data() {
        let data = [0x00, 0x03, b'a', b'b', b'c', 0x00, 0x00];
        let mut c = cursor(&data);
        assert_eq!(c.read_data().unwrap(), b"abc".to_vec());
        assert_eq!(c.read_data().unwrap(), Vec::<u8>::new());
        assert_eq!(c.remaining(), 0);
    }

    #[test]
    fn test_read_data_short_payload_restores_offset() {
        let data = [0x00, 0x05, b'a', b'b'];
        let mut c = cursor(&data);
        let err = c.read_data().unwrap_err();
        assert_eq!(
            err,
            Error::TruncatedInput {
                offset: 2,
                needed: 5,
                available: 2,
            }
        );
        assert_eq!(c.offset(), 0);
    }

    #[test]
    fn test_skip_is_best_effort() {
        let data = [0; 5];
        let mut c = cursor(&data);
        assert_eq!(
            c.skip(3),
            Skipped {
                skipped: 3,
                end_of_input: false,
            }
        );
        assert_eq!(
            c.skip(10),
            Skipped {
                skipped: 2,
                end_of_input: true,
            }
        );
        assert_eq!(c.remaining(), 0);
    }

    #[test]
    fn test_sub_cursor_is_bounded_and_inherits_format() {
        let data = [0xaa, 0x00, 0x01, 0x00, 0x02];
        let mut c = Cursor::new(&data, Endianness::Little, FileFormatVersion::V1);
        c.read_u8().unwrap();
        let record = c.read_raw(2).unwrap();
        let mut sub = c.sub(record, 1);
        assert_eq!(sub.version(), FileFormatVersion::V1);
        assert_eq!(sub.endianness(), Endianness::Little);
        assert_eq!(sub.offset(), 0);
        assert_eq!(sub.read_u16().unwrap(), 0x0100);
        match sub.read_u8().unwrap_err() {
            Error::TruncatedInput { offset, .. } => assert_eq!(offset, 3),
            err => panic!("unexpected error {:?}", err),
        }
        assert_eq!(c.remaining(), 2);
    }

    #[test]
    fn test_format_version_from_marker() {
        assert_eq!(FileFormatVersion::try_from(1).unwrap(), FileFormatVersion::V1);
        assert_eq!(FileFormatVersion::try_from(2).unwrap(), FileFormatVersion::V2);
        assert_eq!(
            FileFormatVersion::try_from(7).unwrap_err(),
            Error::InvalidByteOrder { marker: 7 }
        );
    }
}
