use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while decoding a keytab.
///
/// Every variant is terminal for the enclosing [`Keytab::parse`] call.
///
/// [`Keytab::parse`]: crate::Keytab::parse
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A read would run past the end of the buffer (or of the current record).
    #[error("Truncated keytab at offset {offset}: needed {needed} bytes, {available} available")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Unsupported key table format version number {version}")]
    InvalidVersion { version: u8 },

    #[error("Invalid byte order marker {marker}")]
    InvalidByteOrder { marker: u8 },

    /// Version 1 files use the writer's native byte order.
    #[error("Native byte order (marker {marker}) not implemented")]
    Unimplemented { marker: u8 },
}

impl Error {
    /// Absolute file offset at which decoding stopped.
    pub fn offset(&self) -> usize {
        match self {
            Self::TruncatedInput { offset, .. } => *offset,
            Self::InvalidVersion { .. } => 0,
            Self::InvalidByteOrder { .. } | Self::Unimplemented { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_points_at_failing_byte() {
        assert_eq!(Error::InvalidVersion { version: 9 }.offset(), 0);
        assert_eq!(Error::Unimplemented { marker: 1 }.offset(), 1);
        assert_eq!(Error::InvalidByteOrder { marker: 9 }.offset(), 1);
        let err = Error::TruncatedInput {
            offset: 42,
            needed: 4,
            available: 1,
        };
        assert_eq!(err.offset(), 42);
    }

    #[test]
    fn test_display() {
        let err = Error::TruncatedInput {
            offset: 6,
            needed: 2,
            available: 0,
        };
        assert_eq!(
            err.to_string(),
            "Truncated keytab at offset 6: needed 2 bytes, 0 available"
        );
        assert_eq!(
            Error::InvalidVersion { version: 9 }.to_string(),
            "Unsupported key table format version number 9"
        );
    }
}
