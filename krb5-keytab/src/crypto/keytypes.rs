use super::{EncType, ENCTYPE_DEPRECATED, ENCTYPE_WEAK};
use crate::Flags;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub static KEYTYPES: [Keytype; 14] = [
    Keytype {
        enctype: EncType::DES_CBC_CRC,
        name: "des-cbc-crc",
        aliases: &[],
        description: "DES CBC mode with CRC-32",
        rfc: "RFC 3961 section 6.2.3",
        flags: ENCTYPE_WEAK | ENCTYPE_DEPRECATED,
    },
    Keytype {
        enctype: EncType::DES_CBC_MD4,
        name: "des-cbc-md4",
        aliases: &[],
        description: "DES CBC mode with RSA-MD4",
        rfc: "RFC 3961 section 6.2.2",
        flags: ENCTYPE_WEAK | ENCTYPE_DEPRECATED,
    },
    Keytype {
        enctype: EncType::DES_CBC_MD5,
        name: "des-cbc-md5",
        aliases: &["des"],
        description: "DES CBC mode with RSA-MD5",
        rfc: "RFC 3961 section 6.2.1",
        flags: ENCTYPE_WEAK | ENCTYPE_DEPRECATED,
    },
    Keytype {
        enctype: EncType::DES_CBC_RAW,
        name: "des-cbc-raw",
        aliases: &[],
        description: "DES CBC mode raw",
        rfc: "RFC 3961 marked as \"reserved\"",
        flags: ENCTYPE_WEAK | ENCTYPE_DEPRECATED,
    },
    Keytype {
        enctype: EncType::DES3_CBC_RAW,
        name: "des3-cbc-raw",
        aliases: &[],
        description: "Triple DES CBC mode raw",
        rfc: "RFC 3961 marked as \"reserved\"",
        flags: ENCTYPE_WEAK | ENCTYPE_DEPRECATED,
    },
    Keytype {
        enctype: EncType::DES3_CBC_SHA1,
        name: "des3-cbc-sha1",
        aliases: &["des3-hmac-sha1", "des3-cbc-sha1-kd"],
        description: "Triple DES CBC mode with HMAC/SHA1",
        rfc: "RFC 3961 section 6.3",
        flags: ENCTYPE_DEPRECATED,
    },
    Keytype {
        enctype: EncType::AES128_CTS_HMAC_SHA1_96,
        name: "aes128-cts-hmac-sha1-96",
        aliases: &["aes128-cts", "aes128-sha1"],
        description: "AES-128 CTS mode with 96-bit SHA-1 HMAC",
        rfc: "RFC 3962",
        flags: 0,
    },
    Keytype {
        enctype: EncType::AES256_CTS_HMAC_SHA1_96,
        name: "aes256-cts-hmac-sha1-96",
        aliases: &["aes256-cts", "aes256-sha1"],
        description: "AES-256 CTS mode with 96-bit SHA-1 HMAC",
        rfc: "RFC 3962",
        flags: 0,
    },
    Keytype {
        enctype: EncType::AES128_CTS_HMAC_SHA256_128,
        name: "aes128-cts-hmac-sha256-128",
        aliases: &["aes128-sha2"],
        description: "AES-128 CTS mode with 128-bit SHA-256 HMAC",
        rfc: "RFC 8009",
        flags: 0,
    },
    Keytype {
        enctype: EncType::AES256_CTS_HMAC_SHA384_192,
        name: "aes256-cts-hmac-sha384-192",
        aliases: &["aes256-sha2"],
        description: "AES-256 CTS mode with 192-bit SHA-384 HMAC",
        rfc: "RFC 8009",
        flags: 0,
    },
    Keytype {
        enctype: EncType::ARCFOUR_HMAC,
        name: "arcfour-hmac",
        aliases: &["rc4-hmac", "arcfour-hmac-md5"],
        description: "Arcfour with HMAC/MD5",
        rfc: "RFC 4757",
        flags: ENCTYPE_DEPRECATED,
    },
    Keytype {
        enctype: EncType::ARCFOUR_HMAC_EXP,
        name: "arcfour-hmac-exp",
        aliases: &["rc4-hmac-exp", "arcfour-hmac-md5-exp"],
        description: "Exportable Arcfour with HMAC/MD5",
        rfc: "RFC 4757",
        flags: ENCTYPE_WEAK | ENCTYPE_DEPRECATED,
    },
    Keytype {
        enctype: EncType::CAMELLIA128_CTS_CMAC,
        name: "camellia128-cts-cmac",
        aliases: &["camellia128-cts"],
        description: "Camellia-128 CTS mode with CMAC",
        rfc: "RFC 6803",
        flags: 0,
    },
    Keytype {
        enctype: EncType::CAMELLIA256_CTS_CMAC,
        name: "camellia256-cts-cmac",
        aliases: &["camellia256-cts"],
        description: "Camellia-256 CTS mode with CMAC",
        rfc: "RFC 6803",
        flags: 0,
    },
];

static BY_ENCTYPE: Lazy<HashMap<EncType, &'static Keytype>> =
    Lazy::new(|| KEYTYPES.iter().map(|ktp| (ktp.enctype, ktp)).collect());

static BY_NAME: Lazy<HashMap<&'static str, &'static Keytype>> = Lazy::new(|| {
    KEYTYPES
        .iter()
        .flat_map(|ktp| {
            std::iter::once(ktp.name)
                .chain(ktp.aliases.iter().copied())
                .map(move |name| (name, ktp))
        })
        .collect()
});

/// Registry record for one encryption type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keytype {
    pub enctype: EncType,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub rfc: &'static str,
    pub flags: Flags,
}

impl Keytype {
    pub fn find_enctype(enctype: EncType) -> Option<&'static Self> {
        BY_ENCTYPE.get(&enctype).copied()
    }

    /// Looks up a canonical name or alias.
    pub fn find_name(name: &str) -> Option<&'static Self> {
        BY_NAME.get(name).copied()
    }

    pub fn name(&self, shortest: bool) -> &'static str {
        let mut name = self.name;
        if shortest {
            self.aliases.iter().for_each(|alias| {
                if alias.len() < name.len() {
                    name = alias
                }
            });
        }
        name
    }

    pub fn is_weak(&self) -> bool {
        self.flags & ENCTYPE_WEAK != 0
    }

    pub fn is_deprecated(&self) -> bool {
        self.flags & ENCTYPE_DEPRECATED != 0
    }
}
