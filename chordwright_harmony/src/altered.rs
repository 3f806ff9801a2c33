// Altered-dominant catalog and resolution suggestions.
//
// The catalog is an exhaustive match over `Quality`: dominant-family
// qualities map to their alterations, associated scale, and a tension level
// from 1 (plain dominant colour) to 4 (fully altered). Every other quality
// maps to `None`. Adding a quality to the enumeration forces a decision here
// at compile time.

use crate::chord::Chord;
use crate::quality::Quality;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlteredDominantInfo {
    pub quality: Quality,
    pub alterations: &'static [&'static str],
    pub associated_scale: &'static str,
    pub tension_level: u8,
    /// Roman numerals this dominant customarily resolves to.
    pub resolution_targets: &'static [&'static str],
}

/// Catalog entry for `quality`, or `None` outside the dominant family.
pub fn altered_info(quality: Quality) -> Option<AlteredDominantInfo> {
    let (alterations, associated_scale, tension_level, resolution_targets): (
        &'static [&'static str],
        &'static str,
        u8,
        &'static [&'static str],
    ) = match quality {
        Quality::DominantSeventh => (&[], "Mixolydian", 1, &["I", "i"]),
        Quality::DominantNinth => (&["9"], "Mixolydian", 1, &["I"]),
        Quality::DominantThirteenth => (&["9", "13"], "Mixolydian", 1, &["I"]),
        Quality::SeventhSharpEleven => (&["#11"], "Lydian dominant", 2, &["I", "bII"]),
        Quality::SeventhFlatThirteen => (&["b13"], "Mixolydian b6", 2, &["i", "I"]),
        Quality::SeventhFlatFive => (&["b5"], "Whole tone", 2, &["I", "bII"]),
        Quality::SeventhSharpFive => (&["#5"], "Whole tone", 2, &["I", "i"]),
        Quality::SeventhFlatNine => (&["b9"], "Half-whole diminished", 3, &["i", "I"]),
        Quality::SeventhSharpNine => (&["#9"], "Altered", 3, &["i", "I"]),
        Quality::ThirteenthFlatNine => (&["b9", "13"], "Half-whole diminished", 3, &["I"]),
        Quality::SeventhFlatFiveFlatNine => (&["b5", "b9"], "Half-whole diminished", 3, &["i"]),
        Quality::SeventhFlatNineSharpNine => (&["b9", "#9"], "Half-whole diminished", 4, &["i", "I"]),
        Quality::SeventhSharpFiveSharpNine => (&["#5", "#9"], "Altered", 4, &["i"]),
        Quality::Altered => (&["b9", "#9", "#11", "b13"], "Altered", 4, &["i", "I"]),
        Quality::Major
        | Quality::Minor
        | Quality::Diminished
        | Quality::Augmented
        | Quality::Sus2
        | Quality::Sus4
        | Quality::MajorSixth
        | Quality::MinorSixth
        | Quality::MajorSeventh
        | Quality::MinorSeventh
        | Quality::MinorMajorSeventh
        | Quality::HalfDiminished
        | Quality::DiminishedSeventh
        | Quality::AugmentedMajorSeventh
        | Quality::SeventhSus4
        | Quality::AddNine
        | Quality::MajorNinth
        | Quality::MinorNinth
        | Quality::DominantEleventh
        | Quality::MinorEleventh => return None,
    };
    Some(AlteredDominantInfo {
        quality,
        alterations,
        associated_scale,
        tension_level,
        resolution_targets,
    })
}

pub fn is_dominant_family(quality: Quality) -> bool {
    altered_info(quality).is_some()
}

/// Every catalog entry, in quality enumeration order.
pub fn catalog() -> Vec<AlteredDominantInfo> {
    Quality::ALL.iter().filter_map(|&q| altered_info(q)).collect()
}

// ---------------------------------------------------------------------------
// Resolutions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionStrength {
    Strong,
    Common,
    Creative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub target: Chord,
    pub description: &'static str,
    pub strength: ResolutionStrength,
}

/// The four standard landings for a dominant-family chord. The same four
/// are returned whatever the alteration; non-dominant chords get none.
pub fn suggest_resolutions(chord: Chord) -> Vec<Resolution> {
    if !is_dominant_family(chord.quality()) {
        return Vec::new();
    }
    let tonic = chord.root() as i32 + 5;
    vec![
        Resolution {
            target: Chord::new(tonic, Quality::Major),
            description: "V-I: down a fifth to the major tonic",
            strength: ResolutionStrength::Strong,
        },
        Resolution {
            target: Chord::new(tonic, Quality::Minor),
            description: "V-i: down a fifth to the minor tonic",
            strength: ResolutionStrength::Common,
        },
        Resolution {
            target: Chord::new(chord.root() as i32 - 1, Quality::Major),
            description: "down a semitone, as a tritone substitute",
            strength: ResolutionStrength::Common,
        },
        Resolution {
            target: Chord::new(tonic + 9, Quality::Minor),
            description: "V-vi: deceptive cadence",
            strength: ResolutionStrength::Creative,
        },
    ]
}

/// Alterations worth trying on a dominant built on `root`.
const CANDIDATE_ALTERATIONS: [Quality; 8] = [
    Quality::SeventhFlatNine,
    Quality::SeventhSharpNine,
    Quality::SeventhFlatFive,
    Quality::SeventhSharpFive,
    Quality::SeventhSharpEleven,
    Quality::SeventhFlatThirteen,
    Quality::SeventhFlatNineSharpNine,
    Quality::Altered,
];

/// Altered dominants on `root` with at least two notes that resolve by a
/// semitone (either way) into `target`.
pub fn suggest_alterations(root: i32, target: Chord) -> Vec<Chord> {
    CANDIDATE_ALTERATIONS
        .iter()
        .map(|&q| Chord::new(root, q))
        .filter(|dominant| {
            let leading = dominant
                .pitch_classes()
                .into_iter()
                .filter(|&pc| target.contains_pc((pc + 1) % 12) || target.contains_pc((pc + 11) % 12))
                .count();
            leading >= 2
        })
        .collect()
}

/// Every catalog dominant on `root` except the plain seventh, least tense
/// first. The sort is stable, so equal tensions keep catalog order.
pub fn get_altered_variants(root: i32) -> Vec<Chord> {
    let mut entries: Vec<AlteredDominantInfo> = catalog()
        .into_iter()
        .filter(|info| info.quality != Quality::DominantSeventh)
        .collect();
    entries.sort_by_key(|info| info.tension_level);
    entries
        .into_iter()
        .map(|info| Chord::new(root, info.quality))
        .collect()
}
