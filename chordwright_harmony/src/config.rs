// Engine configuration.
//
// The tunable parameters of the engine live in `EngineConfig`, loadable from
// JSON. Every field has a default, and partially specified documents fill
// the rest from `Default`, so `{}` is a valid config.
//
// `VoicingConfig` controls where concrete notes land (base octave for fresh
// voicings, center register for voices added when a chord grows).
// `ProximityConfig` lists the qualities a proximity pyramid ranks by default.

use crate::error::{HarmonyError, Result};
use crate::quality::Quality;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoicingConfig {
    /// Octave number for fresh voicings, in MIDI convention (octave 4 starts
    /// at C4 = 60).
    pub base_octave: i32,
    /// MIDI pitch that new voices gather around when a chord grows.
    pub center_pitch: i32,
}

impl Default for VoicingConfig {
    fn default() -> Self {
        VoicingConfig {
            base_octave: 4,
            center_pitch: 60,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProximityConfig {
    pub qualities: Vec<Quality>,
}

impl Default for ProximityConfig {
    fn default() -> Self {
        ProximityConfig {
            qualities: vec![Quality::Major, Quality::Minor],
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub voicing: VoicingConfig,
    pub proximity: ProximityConfig,
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| HarmonyError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(EngineConfig::from_json_str("{}").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = EngineConfig::from_json_str(
            r#"{"voicing": {"base_octave": 3}, "proximity": {"qualities": ["dom7", "min7"]}}"#,
        )
        .unwrap();
        assert_eq!(config.voicing.base_octave, 3);
        assert_eq!(config.voicing.center_pitch, 60);
        assert_eq!(
            config.proximity.qualities,
            vec![Quality::DominantSeventh, Quality::MinorSeventh]
        );
    }

    #[test]
    fn test_unknown_quality_rejected() {
        let err = EngineConfig::from_json_str(r#"{"proximity": {"qualities": ["bogus"]}}"#)
            .unwrap_err();
        assert!(matches!(err, HarmonyError::Config(ref msg) if msg.contains("bogus")));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("chordwright_config_{}.json", std::process::id()));
        std::fs::write(&path, r#"{"voicing": {"center_pitch": 55}}"#).unwrap();
        let config = EngineConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.voicing.center_pitch, 55);
        assert_eq!(config.voicing.base_octave, 4);
        assert_eq!(config.proximity, ProximityConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("chordwright_config_does_not_exist.json");
        assert!(matches!(EngineConfig::load(&path), Err(HarmonyError::Io(_))));
    }
}
