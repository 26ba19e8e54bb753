//! 配置加载模块
//! 处理配置文件的读取与环境变量覆盖

use std::fs;
use std::path::{Path, PathBuf};

use super::types::*;
use super::ConfigError;
use crate::util::logging::standards::events;

/// Names the YAML file to read.
pub const CONFIG_PATH_ENV: &str = "RELEASES_CONFIG";
pub const LOG_LEVEL_ENV: &str = "RELEASES_LOG_LEVEL";
pub const LOG_JSON_ENV: &str = "RELEASES_LOG_JSON";
pub const LOG_DIR_ENV: &str = "RELEASES_LOG_DIR";

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从YAML文件读取配置
    pub fn read_yaml(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&config_str).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads the file named by `RELEASES_CONFIG` if set, otherwise starts from
    /// defaults, then applies environment overrides and validates.
    pub fn load() -> Result<Config, ConfigError> {
        let config = match std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from) {
            Some(path) => {
                let config = Self::read_yaml(&path)?;
                tracing::debug!(event = events::CONFIG_LOAD, path = %path.display());
                config
            }
            None => Config::default(),
        };

        let config = Self::apply_env_overrides(config);
        Self::validate(&config)?;
        Ok(config)
    }

    /// 从环境变量读取配置覆盖
    pub fn apply_env_overrides(mut config: Config) -> Config {
        if let Ok(level) = std::env::var(LOG_LEVEL_ENV) {
            tracing::debug!(event = events::CONFIG_ENV_OVERRIDE, key = LOG_LEVEL_ENV, value = %level);
            config.logging.level = level;
        }

        if let Ok(json) = std::env::var(LOG_JSON_ENV) {
            match parse_bool(&json) {
                Some(structured) => config.logging.structured = structured,
                None => tracing::warn!(
                    event = events::CONFIG_ENV_OVERRIDE,
                    key = LOG_JSON_ENV,
                    value = %json,
                    "ignoring non-boolean value"
                ),
            }
        }

        if let Ok(dir) = std::env::var(LOG_DIR_ENV) {
            if !dir.trim().is_empty() {
                config.logging.file.enabled = true;
                config.logging.file.directory = dir;
            }
        }

        config
    }

    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let level = config.logging.level.to_lowercase();
        if !LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidLevel(config.logging.level.clone()));
        }
        if config.logging.file.enabled && config.logging.file.directory.trim().is_empty() {
            return Err(ConfigError::EmptyLogDirectory);
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
