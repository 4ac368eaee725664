use config::{Config, File, FileFormat};
use std::env;

const DEFAULT_PROFILE_PATH: &str = "/etc/krb5.conf";

/// The krb5 profile, read as a stack of INI files. Earlier files win.
#[derive(Debug, Default)]
pub struct Profile {
    files: Vec<ProfileFile>,
}

macro_rules! get_value {
    ($fn:ident, $type:ident) => {
        pub fn $fn(&self, key: &str) -> Option<$type> {
            for file in &self.files {
                if let Ok(value) = file.config.$fn(key) {
                    return Some(value);
                }
            }
            None
        }
    };
}

impl Profile {
    pub fn new() -> anyhow::Result<Self> {
        Self::from_files(&Self::default_config_files())
    }

    /// Missing files are skipped; unparsable ones are an error.
    pub fn from_files(files: &[String]) -> anyhow::Result<Self> {
        let mut profile_files = vec![];
        for file in files {
            profile_files.push(ProfileFile::new(file)?);
        }
        Ok(Self {
            files: profile_files,
        })
    }

    fn default_config_files() -> Vec<String> {
        let filepath = env::var("KRB5_CONFIG").unwrap_or(DEFAULT_PROFILE_PATH.to_owned());
        filepath.split(':').map(|f| f.to_owned()).collect()
    }

    get_value!(get_string, String);

    get_value!(get_bool, bool);

    get_value!(get_int, i64);
}

#[derive(Debug)]
struct ProfileFile {
    config: Config,
}

impl ProfileFile {
    fn new(filename: &str) -> anyhow::Result<Self> {
        let expanded_filename = match (filename.starts_with("~/"), env::var("HOME")) {
            (true, Ok(home_env)) => format!("{}{}", home_env, &filename[1..]),
            _ => filename.to_owned(),
        };
        let config = Config::builder()
            .add_source(
                File::with_name(&expanded_filename)
                    .format(FileFormat::Ini)
                    .required(false),
            )
            .build()?;
        Ok(Self { config })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_reads_libdefaults() {
        let path =
            env::temp_dir().join(format!("krb5-keytab-profile-{}.conf", std::process::id()));
        fs::write(
            &path,
            "[libdefaults]\ndefault_keytab_name = FILE:/srv/service.keytab\nkdc_timesync = 1\n",
        )
        .unwrap();
        let profile = Profile::from_files(&[path.to_string_lossy().into_owned()]).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(
            profile.get_string("libdefaults.default_keytab_name").as_deref(),
            Some("FILE:/srv/service.keytab")
        );
        assert_eq!(profile.get_int("libdefaults.kdc_timesync"), Some(1));
        assert_eq!(profile.get_string("libdefaults.missing"), None);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let profile =
            Profile::from_files(&["/nonexistent/krb5-keytab/krb5.conf".to_owned()]).unwrap();
        assert_eq!(profile.get_string("libdefaults.default_keytab_name"), None);
    }
}
