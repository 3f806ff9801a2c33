// The chord value type: a root pitch class plus a quality.
//
// Chords are immutable values compared structurally. The root is always
// normalized into 0-11 by double-modulo at construction (and again on
// deserialization), so negative or out-of-range roots wrap instead of
// failing. The canonical key `"{root}-{tag}"` is the stable identity used
// wherever chords are deduplicated or indexed by ordered collections.
//
// Pitch classes are derived on demand from the quality's interval template
// and never stored.

use crate::error::HarmonyError;
use crate::quality::Quality;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Note names indexed by pitch class, spelled the way lead sheets usually
/// spell them out of context.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "Eb", "E", "F", "F#", "G", "Ab", "A", "Bb", "B",
];

/// Reduce any integer into pitch-class range 0-11.
pub fn normalize_pc(value: i32) -> u8 {
    (((value % 12) + 12) % 12) as u8
}

/// Name of a pitch class ("C", "Eb").
pub fn pitch_name(pc: u8) -> &'static str {
    NOTE_NAMES[(pc % 12) as usize]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "ChordRepr")]
pub struct Chord {
    root: u8,
    quality: Quality,
}

/// Wire form of a chord. Accepts any integer root and normalizes it.
#[derive(Deserialize)]
struct ChordRepr {
    root: i32,
    quality: Quality,
}

impl From<ChordRepr> for Chord {
    fn from(repr: ChordRepr) -> Self {
        Chord::new(repr.root, repr.quality)
    }
}

impl Chord {
    pub fn new(root: i32, quality: Quality) -> Self {
        Chord {
            root: normalize_pc(root),
            quality,
        }
    }

    pub fn root(&self) -> u8 {
        self.root
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// Pitch classes in template order (root first).
    pub fn pitch_classes(&self) -> Vec<u8> {
        self.quality
            .intervals()
            .iter()
            .map(|&iv| (self.root + iv) % 12)
            .collect()
    }

    pub fn contains_pc(&self, pc: u8) -> bool {
        self.quality
            .intervals()
            .iter()
            .any(|&iv| (self.root + iv) % 12 == pc % 12)
    }

    /// True if the chord has a note `semitones` above its own root.
    pub fn has_interval(&self, semitones: u8) -> bool {
        self.quality.has_interval(semitones)
    }

    pub fn size(&self) -> usize {
        self.quality.size()
    }

    /// Display name: note name followed by the quality symbol ("Dm7").
    pub fn name(&self) -> String {
        format!("{}{}", pitch_name(self.root), self.quality.symbol())
    }

    /// Shift the root by `semitones`, keeping the quality.
    pub fn transpose(&self, semitones: i32) -> Chord {
        Chord::new(self.root as i32 + semitones, self.quality)
    }

    /// Same root, different quality.
    pub fn with_quality(&self, quality: Quality) -> Chord {
        Chord {
            root: self.root,
            quality,
        }
    }

    /// Canonical `"{root}-{tag}"` key, e.g. `"7-dom7"`.
    pub fn key(&self) -> String {
        format!("{}-{}", self.root, self.quality.tag())
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", pitch_name(self.root), self.quality.symbol())
    }
}

impl FromStr for Chord {
    type Err = HarmonyError;

    /// Parse a chord symbol such as "C", "F#m7", "Bb7b9" or "Ebmaj7#5".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars
            .next()
            .ok_or_else(|| HarmonyError::InvalidChordSymbol(s.to_string()))?;
        let natural: i32 = match letter.to_ascii_uppercase() {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return Err(HarmonyError::InvalidChordSymbol(s.to_string())),
        };
        let rest = &s[letter.len_utf8()..];
        let (accidental, suffix) = match rest.as_bytes().first() {
            Some(b'#') => (1, &rest[1..]),
            Some(b'b') => (-1, &rest[1..]),
            _ => (0, rest),
        };
        let quality = Quality::from_symbol(suffix)
            .ok_or_else(|| HarmonyError::UnknownQuality(suffix.to_string()))?;
        Ok(Chord::new(natural + accidental, quality))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_normalization() {
        assert_eq!(Chord::new(-1, Quality::Major).root(), 11);
        assert_eq!(Chord::new(14, Quality::Major).root(), 2);
        assert_eq!(Chord::new(-25, Quality::Minor).root(), 11);
    }

    #[test]
    fn test_pitch_classes() {
        assert_eq!(Chord::new(0, Quality::Minor).pitch_classes(), vec![0, 3, 7]);
        assert_eq!(
            Chord::new(7, Quality::DominantNinth).pitch_classes(),
            vec![7, 11, 2, 5, 9]
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(Chord::new(0, Quality::Major).name(), "C");
        assert_eq!(Chord::new(2, Quality::MinorSeventh).name(), "Dm7");
        assert_eq!(Chord::new(10, Quality::SeventhFlatNine).to_string(), "Bb7b9");
    }

    #[test]
    fn test_key_format() {
        assert_eq!(Chord::new(7, Quality::DominantSeventh).key(), "7-dom7");
        assert_eq!(Chord::new(-12, Quality::Major).key(), "0-major");
    }

    #[test]
    fn test_transpose_wraps() {
        let c = Chord::new(10, Quality::MajorSeventh);
        assert_eq!(c.transpose(5).root(), 3);
        assert_eq!(c.transpose(-11).root(), 11);
        assert_eq!(c.transpose(5).quality(), Quality::MajorSeventh);
    }

    #[test]
    fn test_with_quality_keeps_root() {
        let eb = Chord::new(3, Quality::Major);
        let eb7 = eb.with_quality(Quality::DominantSeventh);
        assert_eq!(eb7.root(), 3);
        assert_eq!(eb7.name(), "Eb7");
        assert_eq!(eb7.with_quality(Quality::Major), eb);
    }

    #[test]
    fn test_parse_symbols() {
        assert_eq!("C".parse::<Chord>().unwrap(), Chord::new(0, Quality::Major));
        assert_eq!("F#m7".parse::<Chord>().unwrap(), Chord::new(6, Quality::MinorSeventh));
        assert_eq!("Bb7b9".parse::<Chord>().unwrap(), Chord::new(10, Quality::SeventhFlatNine));
        assert_eq!("Cb".parse::<Chord>().unwrap(), Chord::new(11, Quality::Major));
        assert_eq!("Ebmaj7#5".parse::<Chord>().unwrap(), Chord::new(3, Quality::AugmentedMajorSeventh));
    }

    #[test]
    fn test_parse_rejects_bad_symbols() {
        assert!(matches!("H7".parse::<Chord>(), Err(HarmonyError::InvalidChordSymbol(_))));
        assert!(matches!("".parse::<Chord>(), Err(HarmonyError::InvalidChordSymbol(_))));
        assert!(matches!("Cblah".parse::<Chord>(), Err(HarmonyError::UnknownQuality(_))));
    }

    #[test]
    fn test_serde_normalizes_root() {
        let chord: Chord = serde_json::from_str(r#"{"root": -3, "quality": "min7"}"#).unwrap();
        assert_eq!(chord, Chord::new(9, Quality::MinorSeventh));
        let json = serde_json::to_string(&chord).unwrap();
        assert_eq!(json, r#"{"root":9,"quality":"min7"}"#);
        assert!(serde_json::from_str::<Chord>(r#"{"root": 0, "quality": "nope"}"#).is_err());
    }
}
