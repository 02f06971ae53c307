//! Unified error type for the facade.

use thiserror::Error;
use xuanji_config::ConfigError;
use xuanji_divine::DivinationError;
use xuanji_search::SearchError;
use xuanji_time::TimeError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum XuanjiError {
    /// [`init`](crate::init) was called a second time.
    #[error("xuanji is already initialized")]
    AlreadyInitialized,
    #[error("cannot parse birth data '{0}'")]
    BirthParse(String),
    #[error("invalid request JSON: {0}")]
    Request(#[from] serde_json::Error),
    #[error(transparent)]
    Divination(#[from] DivinationError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
