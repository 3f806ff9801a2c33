// Chordwright export: artifacts built from harmony engine output.
//
// `midi` encodes voiced progressions as Standard MIDI Files via `midly`,
// `report` renders a plain-text analysis of a progression, and `error`
// holds the crate error type. The `analyze` binary (main.rs) wires both to
// the command line.

pub mod error;
pub mod midi;
pub mod report;

pub use error::{ExportError, Result};
