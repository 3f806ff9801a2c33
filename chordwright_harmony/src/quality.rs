// Chord qualities: the closed enumeration every engine component shares.
//
// Each quality carries its interval template (semitone offsets from the
// root, in stacking order), a display symbol used in chord names ("m7",
// "7b9"), and a stable tag used in canonical keys and serialized data
// ("min7", "dom7b9"). Tags and symbols are both unique across the
// enumeration, so either can be parsed back into a `Quality`.
//
// Templates may contain compound intervals (ninths, elevenths, thirteenths);
// pitch-class derivation reduces them mod 12. No template contains two
// offsets that reduce to the same pitch class.
//
// See also: `chord.rs` for pitch-class derivation, `altered.rs` for the
// dominant-family catalog keyed by this enum.

use crate::error::HarmonyError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quality {
    // Triads
    Major,
    Minor,
    Diminished,
    Augmented,
    Sus2,
    Sus4,

    // Sixths and sevenths
    MajorSixth,
    MinorSixth,
    DominantSeventh,
    MajorSeventh,
    MinorSeventh,
    MinorMajorSeventh,
    HalfDiminished,
    DiminishedSeventh,
    AugmentedMajorSeventh,
    SeventhSus4,

    // Extended
    AddNine,
    DominantNinth,
    MajorNinth,
    MinorNinth,
    DominantEleventh,
    MinorEleventh,
    DominantThirteenth,

    // Altered dominants
    SeventhFlatNine,
    SeventhSharpNine,
    SeventhFlatFive,
    SeventhSharpFive,
    SeventhSharpEleven,
    SeventhFlatThirteen,
    SeventhFlatNineSharpNine,
    SeventhSharpFiveSharpNine,
    SeventhFlatFiveFlatNine,
    Altered,
    ThirteenthFlatNine,
}

impl Quality {
    /// Canonical enumeration order. Proximity pyramids, catalogs and
    /// consumers that lay out qualities all iterate in this order.
    pub const ALL: [Quality; 34] = [
        Quality::Major,
        Quality::Minor,
        Quality::Diminished,
        Quality::Augmented,
        Quality::Sus2,
        Quality::Sus4,
        Quality::MajorSixth,
        Quality::MinorSixth,
        Quality::DominantSeventh,
        Quality::MajorSeventh,
        Quality::MinorSeventh,
        Quality::MinorMajorSeventh,
        Quality::HalfDiminished,
        Quality::DiminishedSeventh,
        Quality::AugmentedMajorSeventh,
        Quality::SeventhSus4,
        Quality::AddNine,
        Quality::DominantNinth,
        Quality::MajorNinth,
        Quality::MinorNinth,
        Quality::DominantEleventh,
        Quality::MinorEleventh,
        Quality::DominantThirteenth,
        Quality::SeventhFlatNine,
        Quality::SeventhSharpNine,
        Quality::SeventhFlatFive,
        Quality::SeventhSharpFive,
        Quality::SeventhSharpEleven,
        Quality::SeventhFlatThirteen,
        Quality::SeventhFlatNineSharpNine,
        Quality::SeventhSharpFiveSharpNine,
        Quality::SeventhFlatFiveFlatNine,
        Quality::Altered,
        Quality::ThirteenthFlatNine,
    ];

    /// Semitone offsets from the root, lowest first.
    pub fn intervals(self) -> &'static [u8] {
        match self {
            Quality::Major => &[0, 4, 7],
            Quality::Minor => &[0, 3, 7],
            Quality::Diminished => &[0, 3, 6],
            Quality::Augmented => &[0, 4, 8],
            Quality::Sus2 => &[0, 2, 7],
            Quality::Sus4 => &[0, 5, 7],
            Quality::MajorSixth => &[0, 4, 7, 9],
            Quality::MinorSixth => &[0, 3, 7, 9],
            Quality::DominantSeventh => &[0, 4, 7, 10],
            Quality::MajorSeventh => &[0, 4, 7, 11],
            Quality::MinorSeventh => &[0, 3, 7, 10],
            Quality::MinorMajorSeventh => &[0, 3, 7, 11],
            Quality::HalfDiminished => &[0, 3, 6, 10],
            Quality::DiminishedSeventh => &[0, 3, 6, 9],
            Quality::AugmentedMajorSeventh => &[0, 4, 8, 11],
            Quality::SeventhSus4 => &[0, 5, 7, 10],
            Quality::AddNine => &[0, 4, 7, 14],
            Quality::DominantNinth => &[0, 4, 7, 10, 14],
            Quality::MajorNinth => &[0, 4, 7, 11, 14],
            Quality::MinorNinth => &[0, 3, 7, 10, 14],
            Quality::DominantEleventh => &[0, 4, 7, 10, 14, 17],
            Quality::MinorEleventh => &[0, 3, 7, 10, 14, 17],
            Quality::DominantThirteenth => &[0, 4, 7, 10, 14, 21],
            Quality::SeventhFlatNine => &[0, 4, 7, 10, 13],
            Quality::SeventhSharpNine => &[0, 4, 7, 10, 15],
            Quality::SeventhFlatFive => &[0, 4, 6, 10],
            Quality::SeventhSharpFive => &[0, 4, 8, 10],
            Quality::SeventhSharpEleven => &[0, 4, 7, 10, 18],
            Quality::SeventhFlatThirteen => &[0, 4, 7, 10, 20],
            Quality::SeventhFlatNineSharpNine => &[0, 4, 7, 10, 13, 15],
            Quality::SeventhSharpFiveSharpNine => &[0, 4, 8, 10, 15],
            Quality::SeventhFlatFiveFlatNine => &[0, 4, 6, 10, 13],
            Quality::Altered => &[0, 4, 10, 13, 15, 18, 20],
            Quality::ThirteenthFlatNine => &[0, 4, 7, 10, 13, 21],
        }
    }

    /// Number of notes in the template.
    pub fn size(self) -> usize {
        self.intervals().len()
    }

    /// Symbol appended to the root's note name ("" for major, "m7", "7#9").
    pub fn symbol(self) -> &'static str {
        match self {
            Quality::Major => "",
            Quality::Minor => "m",
            Quality::Diminished => "dim",
            Quality::Augmented => "aug",
            Quality::Sus2 => "sus2",
            Quality::Sus4 => "sus4",
            Quality::MajorSixth => "6",
            Quality::MinorSixth => "m6",
            Quality::DominantSeventh => "7",
            Quality::MajorSeventh => "maj7",
            Quality::MinorSeventh => "m7",
            Quality::MinorMajorSeventh => "mMaj7",
            Quality::HalfDiminished => "m7b5",
            Quality::DiminishedSeventh => "dim7",
            Quality::AugmentedMajorSeventh => "maj7#5",
            Quality::SeventhSus4 => "7sus4",
            Quality::AddNine => "add9",
            Quality::DominantNinth => "9",
            Quality::MajorNinth => "maj9",
            Quality::MinorNinth => "m9",
            Quality::DominantEleventh => "11",
            Quality::MinorEleventh => "m11",
            Quality::DominantThirteenth => "13",
            Quality::SeventhFlatNine => "7b9",
            Quality::SeventhSharpNine => "7#9",
            Quality::SeventhFlatFive => "7b5",
            Quality::SeventhSharpFive => "7#5",
            Quality::SeventhSharpEleven => "7#11",
            Quality::SeventhFlatThirteen => "7b13",
            Quality::SeventhFlatNineSharpNine => "7b9#9",
            Quality::SeventhSharpFiveSharpNine => "7#5#9",
            Quality::SeventhFlatFiveFlatNine => "7b5b9",
            Quality::Altered => "7alt",
            Quality::ThirteenthFlatNine => "13b9",
        }
    }

    /// Stable identifier used in canonical chord keys and serialized data.
    /// Never changes once published; consumers persist it.
    pub fn tag(self) -> &'static str {
        match self {
            Quality::Major => "major",
            Quality::Minor => "minor",
            Quality::Diminished => "dim",
            Quality::Augmented => "aug",
            Quality::Sus2 => "sus2",
            Quality::Sus4 => "sus4",
            Quality::MajorSixth => "maj6",
            Quality::MinorSixth => "min6",
            Quality::DominantSeventh => "dom7",
            Quality::MajorSeventh => "maj7",
            Quality::MinorSeventh => "min7",
            Quality::MinorMajorSeventh => "minMaj7",
            Quality::HalfDiminished => "halfDim7",
            Quality::DiminishedSeventh => "dim7",
            Quality::AugmentedMajorSeventh => "augMaj7",
            Quality::SeventhSus4 => "dom7sus4",
            Quality::AddNine => "add9",
            Quality::DominantNinth => "dom9",
            Quality::MajorNinth => "maj9",
            Quality::MinorNinth => "min9",
            Quality::DominantEleventh => "dom11",
            Quality::MinorEleventh => "min11",
            Quality::DominantThirteenth => "dom13",
            Quality::SeventhFlatNine => "dom7b9",
            Quality::SeventhSharpNine => "dom7#9",
            Quality::SeventhFlatFive => "dom7b5",
            Quality::SeventhSharpFive => "dom7#5",
            Quality::SeventhSharpEleven => "dom7#11",
            Quality::SeventhFlatThirteen => "dom7b13",
            Quality::SeventhFlatNineSharpNine => "dom7b9#9",
            Quality::SeventhSharpFiveSharpNine => "dom7#5#9",
            Quality::SeventhFlatFiveFlatNine => "dom7b5b9",
            Quality::Altered => "alt",
            Quality::ThirteenthFlatNine => "dom13b9",
        }
    }

    /// Look up a quality by its display symbol.
    pub fn from_symbol(symbol: &str) -> Option<Quality> {
        Quality::ALL.iter().copied().find(|q| q.symbol() == symbol)
    }

    /// True for the two qualities neo-Riemannian transforms act on.
    pub fn is_major_minor_triad(self) -> bool {
        matches!(self, Quality::Major | Quality::Minor)
    }

    /// True if the template contains `semitones` above the root (mod 12).
    pub fn has_interval(self, semitones: u8) -> bool {
        let target = semitones % 12;
        self.intervals().iter().any(|&iv| iv % 12 == target)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Quality {
    type Err = HarmonyError;

    /// Parse a quality tag ("dom7", "min7"). This is the validation boundary
    /// for qualities arriving as text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Quality::ALL
            .iter()
            .copied()
            .find(|q| q.tag() == s)
            .ok_or_else(|| HarmonyError::UnknownQuality(s.to_string()))
    }
}

impl Serialize for Quality {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for Quality {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
