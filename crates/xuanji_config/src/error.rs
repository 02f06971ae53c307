//! Error type for configuration loading.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config TOML: {0}")]
    Toml(#[from] toml::de::Error),
    /// An environment override could not be parsed.
    #[error("invalid value '{value}' for {var}")]
    InvalidEnv { var: &'static str, value: String },
    #[error("utc offset {0} minutes outside -720..=840")]
    OffsetOutOfRange(i32),
}
