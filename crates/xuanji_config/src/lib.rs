//! Configuration for the xuanji engine.
//!
//! Three layers, later ones winning:
//!
//! 1. built-in defaults (UTC+8, lunar New Year boundary, `info` logging);
//! 2. a TOML file ([`XuanjiConfig::load`]);
//! 3. environment overrides ([`XuanjiConfig::apply_env`]).
//!
//! ```toml
//! [calendar]
//! utc_offset_minutes = 480
//! year_boundary = "lichun"
//! zi_hour_starts_day = false
//!
//! [logging]
//! filter = "xuanji_divine=debug,info"
//! ```

pub mod error;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use xuanji_search::{PillarConfig, YearBoundary};

pub use error::ConfigError;

/// Overrides `calendar.utc_offset_minutes`.
pub const ENV_UTC_OFFSET: &str = "XUANJI_UTC_OFFSET_MINUTES";
/// Overrides `calendar.year_boundary`.
pub const ENV_YEAR_BOUNDARY: &str = "XUANJI_YEAR_BOUNDARY";
/// Overrides `logging.filter`.
pub const ENV_LOG: &str = "XUANJI_LOG";

/// Accepted zone offsets in minutes east of UTC (UTC-12 to UTC+14).
pub const UTC_OFFSET_RANGE: std::ops::RangeInclusive<i32> = -720..=840;

/// Calendar conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub utc_offset_minutes: i32,
    pub year_boundary: YearBoundary,
    pub zi_hour_starts_day: bool,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        let p = PillarConfig::default();
        Self {
            utc_offset_minutes: p.utc_offset_minutes,
            year_boundary: p.year_boundary,
            zi_hour_starts_day: p.zi_hour_starts_day,
        }
    }
}

impl CalendarConfig {
    pub fn pillar_config(&self) -> PillarConfig {
        PillarConfig {
            utc_offset_minutes: self.utc_offset_minutes,
            year_boundary: self.year_boundary,
            zi_hour_starts_day: self.zi_hour_starts_day,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct XuanjiConfig {
    pub calendar: CalendarConfig,
    pub logging: LoggingConfig,
}

impl XuanjiConfig {
    /// Parse TOML text. Missing tables and keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: XuanjiConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Apply `XUANJI_*` environment overrides.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides from an arbitrary variable lookup. Empty values are
    /// ignored.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        if let Some(value) = get(ENV_UTC_OFFSET) {
            self.calendar.utc_offset_minutes =
                value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                    var: ENV_UTC_OFFSET,
                    value: value.clone(),
                })?;
        }
        if let Some(value) = get(ENV_YEAR_BOUNDARY) {
            self.calendar.year_boundary =
                YearBoundary::from_name(&value).ok_or_else(|| ConfigError::InvalidEnv {
                    var: ENV_YEAR_BOUNDARY,
                    value: value.clone(),
                })?;
        }
        if let Some(value) = get(ENV_LOG) {
            self.logging.filter = value;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn pillar_config(&self) -> PillarConfig {
        self.calendar.pillar_config()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let offset = self.calendar.utc_offset_minutes;
        if !UTC_OFFSET_RANGE.contains(&offset) {
            return Err(ConfigError::OffsetOutOfRange(offset));
        }
        Ok(())
    }
}
