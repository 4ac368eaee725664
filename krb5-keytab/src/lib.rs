//! Decoding of Kerberos keytab files.
//!
//! [`Keytab::parse`] turns the bytes of a keytab file into its entries.
//! Encryption types are kept as raw identifiers; [`EncType`] and
//! [`Keytype`] resolve them to names after the fact.

pub mod context;
pub mod crypto;
pub mod cursor;
pub mod error;
pub mod keytab;
pub mod krb;
mod principal;

pub use self::{
    context::Context,
    crypto::{EncType, Keytype},
    cursor::{Cursor, FileFormatVersion, Skipped},
    error::{Error, Result},
    keytab::{Keytab, KeytabEntry, Kvno, ParseObserver, Timestamp},
    krb::StrConv,
    principal::{NameType, Principal},
};
use std::process::ExitCode;

pub const BUFSIZ: usize = 1024;

pub type Flags = i32;
pub type Data = Vec<u8>;

pub fn prefix_progname_to_error(progname: &str, result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {:?}", progname, err);
            ExitCode::FAILURE
        }
    }
}
