use crate::{Cursor, Data, FileFormatVersion, ParseObserver, Result};
use std::fmt;

const REALM_SEP: char = '@';
const COMPONENT_SEP: char = '/';

/// A principal as stored in a keytab entry.
///
/// `components` holds the realm first, followed by the name components.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Principal {
    pub components: Vec<Data>,
    pub name_type: NameType,
}

impl Principal {
    // principal ::=
    //     count of components (16 bits) [includes realm in version 1]
    //     realm (data)
    //     component1 (data)
    //     component2 (data)
    //     ...
    //     name type (32 bits) [omitted in version 1]
    pub fn parse(cursor: &mut Cursor<'_>, observer: &mut impl ParseObserver) -> Result<Self> {
        let mut component_count = u32::from(cursor.read_u16()?);
        if cursor.version() == FileFormatVersion::V2 {
            // The realm is not counted in version 2
            component_count += 1;
        }

        let mut components = vec![];
        for index in 0..component_count as usize {
            let component = cursor.read_data()?;
            observer.component(index, &component);
            components.push(component);
        }

        let name_type = match cursor.version() {
            FileFormatVersion::V1 => NameType::UNKNOWN,
            FileFormatVersion::V2 => NameType(cursor.read_i32()?),
        };

        Ok(Self {
            components,
            name_type,
        })
    }

    pub fn realm(&self) -> Option<&Data> {
        self.components.first()
    }

    /// Components following the realm.
    pub fn name_components(&self) -> &[Data] {
        self.components.get(1..).unwrap_or_default()
    }

    /// Renders the principal as `comp1/comp2@REALM`, escaping separators.
    pub fn unparse_name(&self) -> String {
        let mut name = self
            .name_components()
            .iter()
            .map(|component| quote(component, true))
            .collect::<Vec<String>>()
            .join(&COMPONENT_SEP.to_string());
        if let Some(realm) = self.realm() {
            name.push(REALM_SEP);
            name.push_str(&quote(realm, false));
        }
        name
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.unparse_name())
    }
}

fn quote(data: &[u8], is_component: bool) -> String {
    let mut buf = String::with_capacity(data.len());
    for c in String::from_utf8_lossy(data).chars() {
        match c {
            REALM_SEP | '\\' => {
                buf.push('\\');
                buf.push(c);
            }
            COMPONENT_SEP if is_component => buf.push_str("\\/"),
            '\n' => buf.push_str("\\n"),
            '\t' => buf.push_str("\\t"),
            '\u{8}' => buf.push_str("\\b"),
            '\0' => buf.push_str("\\0"),
            _ => buf.push(c),
        }
    }
    buf
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NameType(pub i32);

macro_rules! name_type {
    ($name_type:ident, $int:expr) => {
        pub const $name_type: NameType = NameType($int);
    };
}

impl NameType {
    // Name type not known
    name_type!(UNKNOWN, 0);
    // Just the name of the principal as in DCE, or for users
    name_type!(PRINCIPAL, 1);
    // Service and other unique instance (krbtgt)
    name_type!(SRV_INST, 2);
    // Service with host name as instance (telnet, rcommands)
    name_type!(SRV_HST, 3);
    // Service with host as remaining components
    name_type!(SRV_XHST, 4);
    // Unique ID
    name_type!(UID, 5);
    // PKINIT
    name_type!(X500_PRINCIPAL, 6);
    // Name in form of SMTP email name
    name_type!(SMTP_NAME, 7);
    // Windows 2000 UPN
    name_type!(ENTERPRISE_PRINCIPAL, 10);
    // Well-known (special) principal
    name_type!(WELLKNOWN, 11);
    // Windows 2000 UPN and SID
    name_type!(MS_PRINCIPAL, -128);
    // NT 4 style name
    name_type!(MS_PRINCIPAL_AND_ID, -129);
    // NT 4 style name and SID
    name_type!(ENT_PRINCIPAL_AND_ID, -130);
}
