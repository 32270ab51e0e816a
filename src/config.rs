use crate::detect::DetectOptions;
use crate::error::{ConfigError, Result};
use crate::manager::PackageManagerKind;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub detect: DetectConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectConfig {
    /// Preferred package managers in order (unset = npm, yarn, pnpm, cnpm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefer: Option<Vec<PackageManagerKind>>,
    /// Search parent directories for lockfiles
    pub workspace: bool,
    /// Discard output of wrapped commands
    pub silent: bool,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the file in the user
    /// config directory is used if present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// `<config dir>/pmdetect/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pmdetect").join("config.toml"))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if let Some(prefer) = &self.detect.prefer {
            let mut seen = HashSet::new();
            for kind in prefer {
                if !seen.insert(kind) {
                    return Err(ConfigError::DuplicatePreference(*kind));
                }
            }
        }
        Ok(())
    }

    /// Detection options carrying the configured values.
    pub fn detect_options(&self) -> DetectOptions {
        DetectOptions {
            prefer: self.detect.prefer.clone(),
            workspace: self.detect.workspace,
            cwd: None,
            silent: self.detect.silent,
        }
    }
}
