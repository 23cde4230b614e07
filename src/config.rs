use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::{HEIGHT, WIDTH};

/// Largest board dimension accepted from configuration.
pub const MAX_DIMENSION: usize = 16;

/// Board geometry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: WIDTH,
            height: HEIGHT,
        }
    }
}

/// Terminal front end settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Column the selector starts on; defaults to the middle column.
    pub start_column: Option<usize>,
    /// Input poll interval in milliseconds.
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            start_column: None,
            tick_ms: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `"info"` or
    /// `"connect_four=debug"`. `RUST_LOG` takes precedence when set.
    pub filter: String,
    /// Log destination. Nothing is logged when unset, since the terminal
    /// belongs to the UI.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "info".to_string(),
            file: None,
        }
    }
}

/// Where a loaded configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    Defaults,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Parse configuration from a TOML file without validating it, so that
    /// overrides can be applied first.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML file, falling back to defaults if the
    /// file does not exist. Not validated; call [`AppConfig::validate`] after
    /// applying overrides.
    pub fn read_or_default(path: &Path) -> Result<(Self, ConfigSource), ConfigError> {
        if path.exists() {
            Ok((Self::read(path)?, ConfigSource::File))
        } else {
            Ok((Self::default(), ConfigSource::Defaults))
        }
    }

    /// Replace the board size where an override is given.
    pub fn with_board_overrides(mut self, width: Option<usize>, height: Option<usize>) -> Self {
        if let Some(width) = width {
            self.board.width = width;
        }
        if let Some(height) = height {
            self.board.height = height;
        }
        self
    }

    /// Column the selector starts on.
    pub fn start_column(&self) -> usize {
        self.ui.start_column.unwrap_or(self.board.width / 2)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.width == 0 || self.board.width > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.width must be in [1, {MAX_DIMENSION}]"
            )));
        }
        if self.board.height == 0 || self.board.height > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "board.height must be in [1, {MAX_DIMENSION}]"
            )));
        }
        if let Some(col) = self.ui.start_column {
            if col >= self.board.width {
                return Err(ConfigError::Validation(
                    "ui.start_column must be < board.width".into(),
                ));
            }
        }
        if self.ui.tick_ms == 0 {
            return Err(ConfigError::Validation("ui.tick_ms must be > 0".into()));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.filter must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
