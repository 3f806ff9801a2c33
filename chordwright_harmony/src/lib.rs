// chordwright_harmony — deterministic harmonic reasoning engine.
//
// Models chords as a root pitch class plus a quality from a closed
// enumeration, and derives relationships and higher-level artifacts from
// them. Every operation is a pure function of immutable values: no I/O, no
// randomness, no global state. The one piece of continuity (the last voicing
// during playback) lives in a caller-owned `VoicingSession`.
//
// Module overview:
// - `quality.rs`:      Quality enum, interval templates, symbols, stable tags.
// - `chord.rs`:        Chord value, root normalization, naming, parsing, keys.
// - `assignment.rs`:   Bounded minimum-cost assignment (permutation search).
// - `voicing.rs`:      Concrete voicings, smooth voice leading, VoicingSession.
// - `transform.rs`:    Neo-Riemannian P, L, R.
// - `relationship.rs`: Shared notes, fifths distance, dominant / tritone
//                      relations, voice-leading distance.
// - `proximity.rs`:    Proximity pyramid ranked by shared notes.
// - `bridge.rs`:       Bridge-chord suggestions, chromatic bass detection.
// - `cycles.rs`:       Dominant chains, ii-V-I finder, P/L/R cycles.
// - `coltrane.rs`:     Coltrane substitution generation and detection.
// - `altered.rs`:      Altered-dominant catalog and resolutions.
// - `library.rs`:      Named progression templates and transposition.
// - `config.rs`:       EngineConfig (JSON).
// - `error.rs`:        HarmonyError for the text-parsing boundary.
//
// Logging goes through the `log` facade; nothing is emitted unless the host
// installs a logger.

pub mod altered;
pub mod assignment;
pub mod bridge;
pub mod chord;
pub mod coltrane;
pub mod config;
pub mod cycles;
pub mod error;
pub mod library;
pub mod proximity;
pub mod quality;
pub mod relationship;
pub mod transform;
pub mod voicing;

pub use chord::Chord;
pub use error::{HarmonyError, Result};
pub use quality::Quality;
