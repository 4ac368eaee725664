mod enctype;
mod keytypes;

pub use self::{
    enctype::EncType,
    keytypes::{Keytype, KEYTYPES},
};
use crate::Flags;

pub const ENCTYPE_WEAK: Flags = 1 << 0;
pub const ENCTYPE_DEPRECATED: Flags = 1 << 1;
