use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub buffer: BufferConfig,
    #[serde(default)]
    pub split: SplitConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BufferConfig {
    /// Maximum experiences a buffer may hold
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_capacity() -> usize {
    400_000
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SplitConfig {
    /// Buffer file to split
    #[serde(default = "default_source_path")]
    pub source_path: String,
    /// Destination file for the split-off experiences
    #[serde(default = "default_target_path")]
    pub target_path: String,
    /// Number of experiences to move into the target buffer
    #[serde(default = "default_split_experiences")]
    pub experiences: usize,
}

fn default_source_path() -> String {
    "./data/replay_buffer.rbuf".to_string()
}

fn default_target_path() -> String {
    "./data/replay_buffer_split.rbuf".to_string()
}

fn default_split_experiences() -> usize {
    3_000
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            source_path: default_source_path(),
            target_path: default_target_path(),
            experiences: default_split_experiences(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            // Start with default values
            .set_default("logging.level", "info")?
            // Load default config file
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Load environment-specific config (e.g., config/production.toml)
            .add_source(
                File::from(config_dir.join(
                    std::env::var("REPLAYKIT_ENV").unwrap_or_else(|_| "development".to_string()),
                ))
                .required(false),
            )
            // Override with environment variables (REPLAYKIT_BUFFER__CAPACITY, etc.)
            .add_source(
                Environment::with_prefix("REPLAYKIT")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_hold_expected_values() {
        let config = AppConfig::default();

        assert_eq!(config.buffer.capacity, 400_000);
        assert_eq!(config.split.experiences, 3_000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn load_from_missing_dir_falls_back_to_defaults() {
        let config = AppConfig::load_from("/nonexistent/config/dir").unwrap();

        assert_eq!(config.buffer.capacity, 400_000);
        assert_eq!(config.split.experiences, 3_000);
        assert_eq!(config.split.source_path, "./data/replay_buffer.rbuf");
        assert_eq!(config.split.target_path, "./data/replay_buffer_split.rbuf");
    }
}
