use log::warn;
use platform_dirs::AppDirs;
use serde::{Serialize, Deserialize};
use ron::ser::{to_string_pretty, PrettyConfig};
use ron::de::from_reader;
use std::fs;
use std::path::{Path, PathBuf};
use crate::math::base::NumberBase;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "defaults::max_fractional_places")]
    pub max_fractional_places: u32,
    #[serde(default = "defaults::base")]
    pub base: NumberBase,
    #[serde(default = "defaults::exp_terms")]
    pub exp_terms: i64,
    #[serde(default = "defaults::ln_terms")]
    pub ln_terms: i64,
}

macro_rules! default_ {
    ($name:ident, $type:ident) => {
        pub fn $name() -> $type {
            Config::default().$name
        }
    };
}

mod defaults {
    use super::Config;
    use super::NumberBase;
    default_!(max_fractional_places, u32);
    default_!(base, NumberBase);
    default_!(exp_terms, i64);
    default_!(ln_terms, i64);
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_fractional_places: 50,
            base: NumberBase::Decimal,
            exp_terms: 30,
            ln_terms: 1000,
        }
    }
}

impl Config {
    pub fn path() -> Option<PathBuf> {
        let dirs = AppDirs::new(Some("qseries"), false)?;
        Some(dirs.config_dir.join("qseries.cfg"))
    }

    pub fn load() -> Self {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => {
                warn!("no config directory on this platform, using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        if let Some(dir) = path.parent() {
            if let Err(err) = fs::create_dir_all(dir) {
                warn!("could not create config directory {}: {err}", dir.display());
            }
        }
        let file = fs::File::open(path);
        let file = match file {
            Ok(file) => {file},
            Err(_) => {
                let conf = Self::default();
                conf.store(path);
                return conf
            }
        };
        let conf = from_reader::<fs::File, Self>(file);
        match conf {
            Ok(conf) => {
                // write back default values of any fields not present
                conf.store(path);
                conf
            },
            Err(err) => {
                warn!("ignoring malformed config {}: {err}", path.display());
                Self::default()
            },
        }
    }

    fn store(&self, path: &Path) {
        let text = match to_string_pretty(self, PrettyConfig::default()) {
            Ok(text) => text,
            Err(err) => {
                warn!("could not serialize config: {err}");
                return;
            }
        };
        if let Err(err) = fs::write(path, text) {
            warn!("could not write config {}: {err}", path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("qseries-config-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir.join("qseries.cfg")
    }

    #[test]
    fn missing_file_writes_defaults() {
        let path = scratch("missing");
        assert_eq!(Config::load_from(&path), Config::default());
        assert!(path.exists());
        assert_eq!(Config::load_from(&path), Config::default());
    }

    #[test]
    fn partial_file_is_filled_in() {
        let path = scratch("partial");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "(ln_terms: 64, base: Hexadecimal)").unwrap();
        let conf = Config::load_from(&path);
        assert_eq!(conf.ln_terms, 64);
        assert_eq!(conf.base, NumberBase::Hexadecimal);
        assert_eq!(conf.exp_terms, Config::default().exp_terms);
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("max_fractional_places"));
    }

    #[test]
    fn malformed_file_falls_back() {
        let path = scratch("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not ron at all {").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());
    }

    #[test]
    fn unwritable_directory_falls_back() {
        let path = scratch("blocked");
        let dir = path.parent().unwrap();
        fs::create_dir_all(dir).unwrap();
        // a plain file where the config directory should go
        let blocker = dir.join("blocker");
        fs::write(&blocker, "").unwrap();
        let nested = blocker.join("nested").join("qseries.cfg");
        assert_eq!(Config::load_from(&nested), Config::default());
        assert!(!nested.exists());
    }
}
