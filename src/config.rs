use dirs::config_dir;
use log::{debug, info, warn};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::dictionary::BackendKind;
use crate::error::ConfigError;

const APP_DIR: &str = "spellbench";

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    #[serde(default = "default_dict_path")]
    pub dict_path: Option<PathBuf>,
    #[serde(default)]
    pub backend: BackendKind,
    #[serde(default = "default_iterations")]
    pub iterations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dict_path: default_dict_path(),
            backend: BackendKind::default(),
            iterations: default_iterations(),
        }
    }
}

impl Config {
    /// Reads the config from `path`, or from the default location when no
    /// path is given. Only a missing default file falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        Config::load_or(path, default_config_path())
    }

    fn load_or(path: Option<&Path>, default: Option<PathBuf>) -> Result<Config, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match default {
                Some(path) => (path, false),
                None => {
                    warn!("no config directory on this platform, using defaults");
                    return Ok(Config::default());
                }
            },
        };

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if !required && err.kind() == ErrorKind::NotFound => {
                debug!("no config at {:?}, using defaults", path);
                return Ok(Config::default());
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };
        info!("reading config {:?}", path);
        Config::parse(&text).map_err(|source| ConfigError::Parse { path, source })
    }

    pub fn parse(text: &str) -> Result<Config, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// The dictionary file to load, with `~` expanded.
    pub fn dictionary(&self) -> Result<PathBuf, ConfigError> {
        self.dict_path
            .as_ref()
            .and_then(expand_tilde)
            .ok_or(ConfigError::NoDictionary)
    }
}

fn default_iterations() -> usize {
    5
}

fn default_dict_path() -> Option<PathBuf> {
    config_dir().map(|path| path.join(APP_DIR).join("words.txt"))
}

fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|path| path.join(APP_DIR).join("config.json"))
}

pub fn expand_tilde<P: AsRef<Path>>(path_user_input: P) -> Option<PathBuf> {
    let p = path_user_input.as_ref();
    if !p.starts_with("~") {
        return Some(p.to_path_buf());
    }
    if p == Path::new("~") {
        return dirs::home_dir();
    }
    let rest = p.strip_prefix("~").ok()?;
    dirs::home_dir().map(|mut h| {
        if h == Path::new("/") {
            // Corner case: `h` root directory;
            // don't prepend extra `/`, just drop the tilde.
            rest.to_path_buf()
        } else {
            h.push(rest);
            h
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn empty_object_uses_defaults() {
        let config = Config::parse("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.backend, BackendKind::Fastest);
        assert_eq!(config.iterations, 5);
    }

    #[test]
    fn fields_override_defaults() {
        let config = Config::parse(
            r#"{ "dict_path": "/usr/share/dict/words", "backend": "chained", "iterations": 2 }"#,
        )
        .unwrap();
        assert_eq!(config.dict_path, Some(PathBuf::from("/usr/share/dict/words")));
        assert_eq!(config.backend, BackendKind::Chained);
        assert_eq!(config.iterations, 2);
        assert_eq!(
            config.dictionary().unwrap(),
            PathBuf::from("/usr/share/dict/words")
        );
    }

    #[test]
    fn unknown_backend_is_rejected() {
        assert!(Config::parse(r#"{ "backend": "btree" }"#).is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = TempDir::new("config").unwrap();
        let path = dir.path().join("missing.json");
        assert!(matches!(
            Config::load(Some(path.as_path())),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn load_reads_and_reports_bad_json() {
        let dir = TempDir::new("config").unwrap();
        let path = dir.path().join("config.json");

        fs::write(&path, r#"{ "backend": "trie-ascii" }"#).unwrap();
        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.backend, BackendKind::TrieAscii);

        fs::write(&path, "{ backend").unwrap();
        assert!(matches!(
            Config::load(Some(path.as_path())),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn missing_defaults_fall_back() {
        assert_eq!(Config::load_or(None, None).unwrap(), Config::default());

        let dir = TempDir::new("config").unwrap();
        let absent = dir.path().join("config.json");
        assert_eq!(
            Config::load_or(None, Some(absent)).unwrap(),
            Config::default()
        );
    }

    #[test]
    fn no_dictionary_configured() {
        let config = Config::parse(r#"{ "dict_path": null }"#).unwrap();
        assert!(matches!(config.dictionary(), Err(ConfigError::NoDictionary)));
    }

    #[test]
    fn tilde_expansion() {
        assert_eq!(
            expand_tilde("/etc/words"),
            Some(PathBuf::from("/etc/words"))
        );
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~"), Some(home.clone()));
            assert!(expand_tilde("~/words").unwrap().ends_with("words"));
        }
    }
}
