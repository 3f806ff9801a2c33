use chordwright_harmony::HarmonyError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExportError>;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Harmony(#[from] HarmonyError),

    #[error("unknown progression template '{0}'")]
    UnknownTemplate(String),

    #[error("invalid MIDI config: {0}")]
    MidiConfig(String),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("nothing to analyze: give chord symbols or --template")]
    EmptyProgression,

    #[error("failed to write MIDI: {0}")]
    Io(#[from] std::io::Error),
}
