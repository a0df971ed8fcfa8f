// Report configuration, optionally read from a toml file

use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_LABEL_WIDTH: usize = 32;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub color: ColorMode,
    // visible width of the "<index>/<total> <name>" column
    pub label_width: usize,
    // only report failing runs
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            label_width: DEFAULT_LABEL_WIDTH,
            quiet: false,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let read_error = |source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(read_error)?;
        let mut s = String::new();
        file.read_to_string(&mut s).map_err(read_error)?;

        Self::from_toml_str(&s)
    }
}
