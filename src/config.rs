//!
//! Where to find the data files.
//!

use crate::error::ColorError;
use configparser::ini::Ini;
use dirs::{config_dir, data_dir};
use log::debug;
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the data directory.
pub const DATA_ENV: &str = "CHINACOLOR_DATA";

/// Color table with the full metadata.
pub const COLORS_CSV: &str = "chinacolor.csv";
/// Color table with name and hex only.
pub const COLORS_JSON: &str = "chinacolor.json";
/// Built-in palettes.
pub const PALETTES_JSON: &str = "palette_list.json";

/// Configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
}

impl Default for Config {
    /// `chinacolor` in the users data directory, or `./data`
    /// if there is none.
    fn default() -> Self {
        let data_dir = match data_dir() {
            Some(v) => v.join("chinacolor"),
            None => PathBuf::from("data"),
        };
        Self { data_dir }
    }
}

impl Config {
    /// Config with an explicit data directory.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Find the data directory.
    ///
    /// * environment variable `CHINACOLOR_DATA`
    /// * `[data] dir=` in `chinacolor/chinacolor.ini` in the
    ///   users config directory.
    /// * `chinacolor` in the users data directory,
    ///   e.g. `~/.local/share/chinacolor`.
    pub fn load() -> Result<Config, ColorError> {
        if let Some(dir) = env::var_os(DATA_ENV) {
            if !dir.is_empty() {
                debug!("data dir from {}: {:?}", DATA_ENV, dir);
                return Ok(Config::with_data_dir(dir));
            }
        }

        if let Some(cfg_dir) = config_dir() {
            let cfg_file = cfg_dir.join("chinacolor").join("chinacolor.ini");
            if cfg_file.exists() {
                if let Some(cfg) = Self::load_ini(&cfg_file)? {
                    return Ok(cfg);
                }
            }
        }

        Ok(Config::default())
    }

    /// Read the data directory from an ini file.
    /// A relative directory is taken relative to the ini file.
    pub fn load_ini(path: &Path) -> Result<Option<Config>, ColorError> {
        let mut ini = Ini::new();
        if let Err(e) = ini.load(path) {
            return Err(ColorError::Config(format!("{}: {}", path.display(), e)));
        }

        let Some(dir) = ini.get("data", "dir") else {
            return Ok(None);
        };
        let dir = PathBuf::from(dir.trim());
        let dir = if dir.is_relative() {
            path.parent().map(|v| v.join(&dir)).unwrap_or(dir)
        } else {
            dir
        };
        debug!("data dir from {:?}: {:?}", path, dir);
        Ok(Some(Config::with_data_dir(dir)))
    }

    pub fn colors_csv(&self) -> PathBuf {
        self.data_dir.join(COLORS_CSV)
    }

    pub fn colors_json(&self) -> PathBuf {
        self.data_dir.join(COLORS_JSON)
    }

    pub fn palettes_json(&self) -> PathBuf {
        self.data_dir.join(PALETTES_JSON)
    }
}
