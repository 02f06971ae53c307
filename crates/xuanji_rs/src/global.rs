//! Process-wide configuration, set at most once.

use std::sync::OnceLock;

use tracing::debug;
use xuanji_config::XuanjiConfig;

use crate::error::XuanjiError;

static CONFIG: OnceLock<XuanjiConfig> = OnceLock::new();
static DEFAULT: OnceLock<XuanjiConfig> = OnceLock::new();

/// Install the global configuration. Fails if already installed.
pub fn init(config: XuanjiConfig) -> Result<(), XuanjiError> {
    debug!(?config, "initializing xuanji");
    CONFIG
        .set(config)
        .map_err(|_| XuanjiError::AlreadyInitialized)
}

pub fn is_initialized() -> bool {
    CONFIG.get().is_some()
}

/// The installed configuration, or the defaults before [`init`].
pub fn config() -> &'static XuanjiConfig {
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(XuanjiConfig::default))
}
