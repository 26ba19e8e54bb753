//! 配置管理模块
//!
//! - types: 配置数据结构定义
//! - loader: 配置加载和环境变量处理

pub mod loader;
pub mod types;

use std::path::PathBuf;

pub use loader::ConfigLoader;
pub use types::*;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("unknown log level `{0}`, expected one of trace/debug/info/warn/error")]
    InvalidLevel(String),
    #[error("file logging is enabled but no directory is configured")]
    EmptyLogDirectory,
}
