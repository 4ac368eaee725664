use chrono::{DateTime, Utc};

pub struct StrConv;

impl StrConv {
    // Short `strftime` form used by the listing tools.
    pub fn timestamp_to_sfstring(timestamp: DateTime<Utc>) -> String {
        timestamp.format("%x %X").to_string()
    }
}
