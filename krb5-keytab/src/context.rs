mod profile;

pub use self::profile::Profile;
use nix::unistd::{Uid, User};
use std::{env, path::PathBuf};

const DFL_KEYTAB_NAME: &str = "FILE:/etc/krb5.keytab";
const KTNAME_ENV: &str = "KRB5_KTNAME";
const KEYTAB_PREFIXES: [&str; 2] = ["FILE", "WRFILE"];

pub struct Conf;

macro_rules! conf {
    ($name:ident, $value:expr) => {
        pub const $name: &'static str = $value;
    };
}

impl Conf {
    conf!(DEFAULT_KEYTAB_NAME, "default_keytab_name");
    conf!(LIBDEFAULTS, "libdefaults");
}

/// Library settings consulted when no keytab name is given explicitly.
#[derive(Debug, Default)]
pub struct Context {
    pub profile: Profile,
}

impl Context {
    pub fn init() -> anyhow::Result<Self> {
        Ok(Self::with_profile(Profile::new()?))
    }

    pub fn with_profile(profile: Profile) -> Self {
        Self { profile }
    }

    /// `KRB5_KTNAME`, then `[libdefaults] default_keytab_name`, then
    /// `FILE:/etc/krb5.keytab`, with path tokens expanded.
    pub fn default_keytab_name(&self) -> anyhow::Result<String> {
        let name = match env::var(KTNAME_ENV) {
            Ok(name) => name,
            Err(_) => self
                .get_string(Conf::DEFAULT_KEYTAB_NAME)
                .unwrap_or(DFL_KEYTAB_NAME.to_owned()),
        };
        Self::expand_path_tokens(&name)
    }

    fn get_string(&self, name: &str) -> Option<String> {
        self.profile
            .get_string(&format!("{}.{}", Conf::LIBDEFAULTS, name))
    }

    /// Maps a keytab name such as `FILE:/etc/krb5.keytab` to the file path.
    pub fn resolve_keytab_path(name: &str) -> anyhow::Result<PathBuf> {
        let real_name = match name.split_once(':') {
            None => name,
            // A drive letter, not a prefix
            Some((p, _)) if p.len() == 1 && p.as_bytes()[0].is_ascii_alphabetic() => name,
            Some(_) if name.starts_with('/') => name,
            Some((prefix, real_name)) if KEYTAB_PREFIXES.contains(&prefix) => real_name,
            Some(_) => return Err(anyhow::anyhow!("Unknown Key table type")),
        };
        Ok(PathBuf::from(real_name))
    }

    pub fn expand_path_tokens(path: &str) -> anyhow::Result<String> {
        let mut buf = String::with_capacity(path.len());
        let mut path_remained = path;
        while !path_remained.is_empty() {
            let token_begin = match path_remained.find("%{") {
                Some(token_begin) => {
                    buf.push_str(&path_remained[..token_begin]);
                    token_begin
                }
                None => {
                    buf.push_str(path_remained);
                    break;
                }
            };
            let token_end = match path_remained[token_begin..].find('}') {
                Some(token_end) => token_begin + token_end,
                None => return Err(anyhow::anyhow!("Invalid argument")),
            };
            buf.push_str(&Self::expand_token(
                &path_remained[token_begin + 2..token_end],
            )?);
            path_remained = &path_remained[token_end + 1..];
        }
        Ok(buf)
    }

    fn expand_token(token: &str) -> anyhow::Result<String> {
        let token_value = match token {
            "euid" => Uid::effective().to_string(),
            "username" => User::from_uid(Uid::effective())?
                .map(|u| u.name)
                .unwrap_or_else(|| Uid::effective().to_string()),
            "uid" | "USERID" => Uid::current().to_string(),
            _ => return Err(anyhow::anyhow!("Invalid argument")),
        };
        Ok(token_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_keytab_path() {
        assert_eq!(
            Context::resolve_keytab_path("FILE:/etc/krb5.keytab").unwrap(),
            PathBuf::from("/etc/krb5.keytab")
        );
        assert_eq!(
            Context::resolve_keytab_path("WRFILE:service.keytab").unwrap(),
            PathBuf::from("service.keytab")
        );
        assert_eq!(
            Context::resolve_keytab_path("/tmp/a:b.keytab").unwrap(),
            PathBuf::from("/tmp/a:b.keytab")
        );
        assert_eq!(
            Context::resolve_keytab_path("C:\\krb5.keytab").unwrap(),
            PathBuf::from("C:\\krb5.keytab")
        );
        assert!(Context::resolve_keytab_path("MEMORY:test").is_err());
    }

    #[test]
    fn test_expand_path_tokens() {
        let uid = Uid::current().to_string();
        assert_eq!(
            Context::expand_path_tokens("/var/krb5/user/%{uid}/client.keytab").unwrap(),
            format!("/var/krb5/user/{}/client.keytab", uid)
        );
        assert_eq!(
            Context::expand_path_tokens("%{USERID}").unwrap(),
            uid
        );
        assert_eq!(
            Context::expand_path_tokens("/etc/krb5.keytab").unwrap(),
            "/etc/krb5.keytab"
        );
        assert!(Context::expand_path_tokens("/tmp/%{bogus}").is_err());
        assert!(Context::expand_path_tokens("/tmp/%{uid").is_err());
    }

    #[test]
    fn test_profile_default_keytab_name() {
        if env::var(KTNAME_ENV).is_ok() {
            return;
        }
        let context = Context::default();
        assert_eq!(
            context.default_keytab_name().unwrap(),
            DFL_KEYTAB_NAME
        );
    }
}
