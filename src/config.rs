use crate::cli::output::OutputFormat;
use crate::error::{CheckError, Result};
use directories::ProjectDirs;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";
pub const LOCAL_CONFIG_FILE: &str = ".wordcheck.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dictionary: Option<PathBuf>,
    pub format: OutputFormat,
    pub color: bool,
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: None,
            format: OutputFormat::Text,
            color: true,
            parallel: false,
        }
    }
}

/// One config file. Only the keys present in the file are `Some`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub dictionary: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub color: Option<bool>,
    pub parallel: Option<bool>,
}

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub dictionary: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub no_color: bool,
    pub parallel: bool,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if let Some(global_config) = Self::from_file(&global_path)? {
                debug!("Using global config {}", global_path.display());
                config = config.merge(global_config);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if let Some(local_config) = Self::from_file(&local_path)? {
            debug!("Using local config {}", local_path.display());
            config = config.merge(local_config);
        }

        Ok(config.apply(overrides))
    }

    /// Read a config file. A missing file is not an error.
    pub fn from_file(path: &Path) -> Result<Option<ConfigFile>> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CheckError::io(path, e)),
        };

        toml::from_str(&contents)
            .map(Some)
            .map_err(|source| CheckError::Config {
                path: path.to_path_buf(),
                source,
            })
    }

    fn merge(mut self, layer: ConfigFile) -> Self {
        if let Some(dict) = layer.dictionary {
            self.dictionary = Some(dict);
        }
        if let Some(format) = layer.format {
            self.format = format;
        }
        if let Some(color) = layer.color {
            self.color = color;
        }
        if let Some(parallel) = layer.parallel {
            self.parallel = parallel;
        }
        self
    }

    fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(dict) = overrides.dictionary {
            self.dictionary = Some(dict);
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        if overrides.no_color {
            self.color = false;
        }
        if overrides.parallel {
            self.parallel = true;
        }
        self
    }

    /// Dictionary to use for this run, falling back to the system word list.
    pub fn dictionary_path(&self) -> PathBuf {
        self.dictionary
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DICTIONARY))
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "wordcheck").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
