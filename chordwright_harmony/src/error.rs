// Error types for the harmony engine.
//
// The engine's operations are total functions and never fail. Errors only
// arise at the parsing boundary, where text (quality tags, chord symbols,
// config JSON) becomes typed values. Once a `Quality` exists it is a closed
// enum and every template lookup is an exhaustive match.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarmonyError>;

#[derive(Debug, Error)]
pub enum HarmonyError {
    /// A quality tag or chord symbol suffix outside the quality enumeration.
    #[error("unknown chord quality '{0}'")]
    UnknownQuality(String),

    /// A chord symbol whose note name could not be read.
    #[error("invalid chord symbol '{0}'")]
    InvalidChordSymbol(String),

    #[error("invalid config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
