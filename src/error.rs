use std::num::ParseIntError;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid interval: end {en} before start {st}")]
    InvalidSpan { st: String, en: String },

    #[error("invalid split duration: {0}")]
    InvalidDuration(String),

    #[error("duration parse error: {0}")]
    DurationParse(String),

    #[error("interval parse error: {0}")]
    IntervalParse(String),

    #[error("unparseable interval at position {pos}: {source}")]
    Batch {
        pos: usize,
        #[source]
        source: Box<Error>,
    },

    #[error(transparent)]
    ChronoParse(#[from] chrono::ParseError),

    #[error(transparent)]
    IntParse(#[from] ParseIntError),

    #[error(transparent)]
    StrumParse(#[from] strum::ParseError),

    #[error(transparent)]
    Custom(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Create a custom error from any error type.
    pub fn custom<E: std::error::Error + Send + Sync + 'static>(err: E) -> Self {
        Self::Custom(Box::new(err))
    }

    /// Position of the failing entry for batch parse errors.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::Batch { pos, .. } => Some(*pos),
            _ => None,
        }
    }
}
