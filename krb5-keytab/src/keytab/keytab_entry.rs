use crate::{Cursor, Data, EncType, ParseObserver, Principal, Result};
use chrono::{DateTime, TimeZone, Utc};

pub type Kvno = u8;
pub type Timestamp = i32;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeytabEntry {
    pub principal: Principal,
    pub timestamp: Timestamp,
    pub vno: Kvno,
    pub enctype: EncType,
    pub key: Data,
}

impl KeytabEntry {
    // entry ::=
    //     principal
    //     timestamp (32 bits)
    //     key version (8 bits)
    //     enctype (16 bits)
    //     key length (16 bits)
    //     key contents
    //
    // Anything left in the record after the key is ignored.
    pub fn parse(cursor: &mut Cursor<'_>, observer: &mut impl ParseObserver) -> Result<Self> {
        let principal = Principal::parse(cursor, observer)?;
        let timestamp = cursor.read_i32()?;
        let vno = cursor.read_u8()?;
        let enctype = EncType(cursor.read_u16()?);
        let key = cursor.read_data()?;
        Ok(Self {
            principal,
            timestamp,
            vno,
            enctype,
            key,
        })
    }

    pub fn timestamp_datetime(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.timestamp.into(), 0).single()
    }
}
