// Inspector configuration - JSON file under the user config directory
use crate::error::{InspectError, Result};
use crate::language::Dialect;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const MIN_INDICATOR_WIDTH: usize = 4;
pub const MAX_INDICATOR_WIDTH: usize = 200;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colours and symbols
    Human,
    /// No colours, for pipes and logs
    Plain,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectorConfig {
    /// Initial dialect selection
    pub dialect: Dialect,
    /// None = detect from the terminal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
    pub indicator_width: usize,
    pub color: bool,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::C,
            format: None,
            indicator_width: 30,
            color: true,
        }
    }
}

impl InspectorConfig {
    /// Default location: `<config dir>/loopsight/config.json`
    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("loopsight")
            .join("config.json")
    }

    /// Load from the given path, or the default location. A missing file
    /// yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file_path);

        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| InspectError::ConfigIo {
            path: path.clone(),
            source,
        })?;
        let config: InspectorConfig =
            serde_json::from_str(&content).map_err(|source| InspectError::ConfigParse {
                path: path.clone(),
                source,
            })?;
        config.validate()?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write this config as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        let io_err = |source| InspectError::ConfigIo {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|source| {
            InspectError::ConfigSerialize {
                path: path.to_path_buf(),
                source,
            }
        })?;
        fs::write(path, json).map_err(io_err)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_INDICATOR_WIDTH..=MAX_INDICATOR_WIDTH).contains(&self.indicator_width) {
            return Err(InspectError::InvalidIndicatorWidth {
                value: self.indicator_width,
                min: MIN_INDICATOR_WIDTH,
                max: MAX_INDICATOR_WIDTH,
            });
        }
        Ok(())
    }
}
