mod keytab_entry;
mod observer;

pub use self::{
    keytab_entry::{KeytabEntry, Kvno, Timestamp},
    observer::ParseObserver,
};
use crate::{Cursor, Error, FileFormatVersion, Result};
use nom::number::Endianness;
use tracing::{debug, trace};

const FILE_FIRST_BYTE: u8 = 5;
// format byte, version byte and the first record length
const MIN_FILE_SIZE: usize = 2 + 4;

/// Decoded contents of a keytab file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keytab {
    entries: Vec<KeytabEntry>,
}

impl Keytab {
    pub fn parse(data: &[u8]) -> Result<Self> {
        Self::parse_with_observer(data, &mut ())
    }

    pub fn parse_with_observer(data: &[u8], observer: &mut impl ParseObserver) -> Result<Self> {
        let mut cursor = Self::read_header(data)?;
        let mut entries = vec![];

        // After the two-byte version indicator, the file contains a sequence
        // of signed 32-bit record lengths followed by key records or holes. A
        // negative length indicates a hole whose size is the inverse of the
        // length, left behind when an entry was deleted in place.
        while cursor.remaining() > 0 {
            let position = cursor.position();
            let size = cursor.read_i32()?;
            if size < 0 {
                let size = size.unsigned_abs() as usize;
                trace!(offset = position, size, "skipping hole");
                if cursor.skip(size).end_of_input {
                    return Err(Error::TruncatedInput {
                        offset: position + 4,
                        needed: size,
                        available: data.len() - position - 4,
                    });
                }
                observer.hole(position, size);
                continue;
            }

            let body = cursor.read_raw(size as usize)?;
            let base = position + 4;
            trace!(offset = base, size, "reading entry");
            observer.record(base, body);
            let mut record = cursor.sub(body, base);
            entries.push(KeytabEntry::parse(&mut record, observer)?);
        }

        debug!(entries = entries.len(), "parsed keytab");
        Ok(Self { entries })
    }

    // The first byte of the file always has the value 5, and the value of the
    // second byte contains the version number (1 or 2).
    fn read_header(data: &[u8]) -> Result<Cursor<'_>> {
        if data.len() < MIN_FILE_SIZE {
            return Err(Error::TruncatedInput {
                offset: 0,
                needed: MIN_FILE_SIZE,
                available: data.len(),
            });
        }
        if data[0] != FILE_FIRST_BYTE {
            return Err(Error::InvalidVersion { version: data[0] });
        }

        // Version 1 uses native byte order for integer representations.
        // Version 2 always uses big-endian byte order.
        let version = FileFormatVersion::try_from(data[1])?;
        let endianness = match version {
            FileFormatVersion::V1 => return Err(Error::Unimplemented { marker: data[1] }),
            FileFormatVersion::V2 => Endianness::Big,
        };

        let mut cursor = Cursor::new(data, endianness, version);
        cursor.skip(2);
        Ok(cursor)
    }

    pub fn entries(&self) -> &[KeytabEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KeytabEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Keytab {
    type Item = KeytabEntry;
    type IntoIter = std::vec::IntoIter<KeytabEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Keytab {
    type Item = &'a KeytabEntry;
    type IntoIter = std::slice::Iter<'a, KeytabEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
