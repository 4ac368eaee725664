use super::Keytype;
use std::fmt;

/// Encryption type identifier, as stored on the wire.
///
/// Values missing from the registry are still valid; they render as
/// `{EncType 0x..}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncType(pub u16);

macro_rules! enctype {
    ($enctype:ident, $int:expr) => {
        pub const $enctype: EncType = EncType($int);
    };
}

impl EncType {
    enctype!(NULL, 0x0000);
    // @deprecated no longer supported
    enctype!(DES_CBC_CRC, 0x0001);
    // @deprecated no longer supported
    enctype!(DES_CBC_MD4, 0x0002);
    // @deprecated no longer supported
    enctype!(DES_CBC_MD5, 0x0003);
    // @deprecated no longer supported
    enctype!(DES_CBC_RAW, 0x0004);
    // @deprecated DES-3 cbc with SHA1
    enctype!(DES3_CBC_SHA, 0x0005);
    // @deprecated DES-3 cbc mode raw
    enctype!(DES3_CBC_RAW, 0x0006);
    // @deprecated no longer supported
    enctype!(DES_HMAC_SHA1, 0x0008);

    enctype!(DES3_CBC_SHA1, 0x0010);
    // RFC 3962
    enctype!(AES128_CTS_HMAC_SHA1_96, 0x0011);
    // RFC 3962
    enctype!(AES256_CTS_HMAC_SHA1_96, 0x0012);
    // RFC 8009
    enctype!(AES128_CTS_HMAC_SHA256_128, 0x0013);
    // RFC 8009
    enctype!(AES256_CTS_HMAC_SHA384_192, 0x0014);
    // RFC 4757
    enctype!(ARCFOUR_HMAC, 0x0017);
    // RFC 4757
    enctype!(ARCFOUR_HMAC_EXP, 0x0018);
    // RFC 6803
    enctype!(CAMELLIA128_CTS_CMAC, 0x0019);
    // RFC 6803
    enctype!(CAMELLIA256_CTS_CMAC, 0x001a);
    enctype!(UNKNOWN, 0x01ff);

    pub fn info(self) -> Option<&'static Keytype> {
        Keytype::find_enctype(self)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Keytype::find_name(name).map(|keytype| keytype.enctype)
    }

    pub fn name(self, shortest: bool) -> Option<&'static str> {
        self.info().map(|keytype| keytype.name(shortest))
    }

    /// Unknown encryption types are treated as deprecated.
    pub fn is_deprecated(self) -> bool {
        self.info()
            .map(|keytype| keytype.is_deprecated())
            .unwrap_or(true)
    }

    pub fn deprecated_name(self, shortest: bool) -> String {
        let name = match self.name(shortest) {
            Some(name) => name.to_owned(),
            None => self.to_string(),
        };
        if self.is_deprecated() {
            format!("DEPRECATED:{}", name)
        } else {
            name
        }
    }
}

impl fmt::Display for EncType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name(false) {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "{{EncType {:#x}}}", self.0),
        }
    }
}

impl From<u16> for EncType {
    fn from(value: u16) -> Self {
        Self(value)
    }
}
