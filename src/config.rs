use crate::highscores::HighScoreFile;
use crate::ticker::Speed;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Tick cadence to drive the engine at
    pub speed: Speed,

    /// Settings about data files
    pub files: FileConfig,
}

impl Config {
    /// Return the default configuration file path
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist
    /// and `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// The file the high score should be stored in: the file given in the
    /// configuration or, if that is not set, the default path.  Returns
    /// `None` when persistence is disabled or no path could be determined;
    /// such hosts keep the high score in memory only.
    pub fn high_scores_file(&self) -> Option<Cow<'_, Path>> {
        if !self.files.save_high_scores {
            return None;
        }
        self.files
            .high_scores_file
            .as_deref()
            .map(Cow::from)
            .or_else(|| HighScoreFile::default_path().map(Cow::from))
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct FileConfig {
    /// Path at which the high score should be stored
    pub high_scores_file: Option<PathBuf>,

    /// Whether to load & save the high score at all
    pub save_high_scores: bool,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            high_scores_file: None,
            save_high_scores: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
