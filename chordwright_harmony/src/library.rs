// Catalogued progression templates.
//
// Templates are stored in C and moved to other keys with
// `transpose_progression`, which applies the same root normalization as
// chord construction. Names are stable lookup keys for front ends.

use crate::chord::Chord;
use crate::quality::Quality;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressionTemplate {
    pub name: &'static str,
    pub description: &'static str,
    /// The progression in C.
    pub chords: Vec<Chord>,
}

impl ProgressionTemplate {
    /// The progression with C moved to `key_root`.
    pub fn in_key(&self, key_root: i32) -> Vec<Chord> {
        transpose_progression(&self.chords, key_root)
    }
}

pub fn transpose_progression(chords: &[Chord], semitones: i32) -> Vec<Chord> {
    chords.iter().map(|c| c.transpose(semitones)).collect()
}

fn seq(chords: &[(i32, Quality)]) -> Vec<Chord> {
    chords.iter().map(|&(r, q)| Chord::new(r, q)).collect()
}

pub fn templates() -> Vec<ProgressionTemplate> {
    use Quality::*;
    vec![
        ProgressionTemplate {
            name: "pop",
            description: "I-V-vi-IV",
            chords: seq(&[(0, Major), (7, Major), (9, Minor), (5, Major)]),
        },
        ProgressionTemplate {
            name: "fifties",
            description: "I-vi-IV-V",
            chords: seq(&[(0, Major), (9, Minor), (5, Major), (7, Major)]),
        },
        ProgressionTemplate {
            name: "jazz",
            description: "ii7-V7-Imaj7",
            chords: seq(&[(2, MinorSeventh), (7, DominantSeventh), (0, MajorSeventh)]),
        },
        ProgressionTemplate {
            name: "minor-jazz",
            description: "iiø7-V7b9-i",
            chords: seq(&[(2, HalfDiminished), (7, SeventhFlatNine), (0, MinorSixth)]),
        },
        ProgressionTemplate {
            name: "blues",
            description: "Twelve-bar blues",
            chords: seq(&[
                (0, DominantSeventh),
                (0, DominantSeventh),
                (0, DominantSeventh),
                (0, DominantSeventh),
                (5, DominantSeventh),
                (5, DominantSeventh),
                (0, DominantSeventh),
                (0, DominantSeventh),
                (7, DominantSeventh),
                (5, DominantSeventh),
                (0, DominantSeventh),
                (7, DominantSeventh),
            ]),
        },
        ProgressionTemplate {
            name: "rhythm",
            description: "Rhythm changes, A section",
            chords: seq(&[
                (0, MajorSixth),
                (9, MinorSeventh),
                (2, MinorSeventh),
                (7, DominantSeventh),
                (4, MinorSeventh),
                (9, DominantSeventh),
                (2, MinorSeventh),
                (7, DominantSeventh),
            ]),
        },
        ProgressionTemplate {
            name: "pachelbel",
            description: "I-V-vi-iii-IV-I-IV-V",
            chords: seq(&[
                (0, Major),
                (7, Major),
                (9, Minor),
                (4, Minor),
                (5, Major),
                (0, Major),
                (5, Major),
                (7, Major),
            ]),
        },
        ProgressionTemplate {
            name: "coltrane",
            description: "Major-third cycle with dominant approaches",
            chords: crate::coltrane::generate_coltrane_substitution(0),
        },
    ]
}

pub fn find_template(name: &str) -> Option<ProgressionTemplate> {
    templates().into_iter().find(|t| t.name == name)
}
