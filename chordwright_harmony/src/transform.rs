// Neo-Riemannian P, L and R transforms on major and minor triads.
//
// Each transform keeps two notes of a triad and moves the third by one or
// two semitones, flipping major <-> minor:
// - P (parallel):         C major <-> C minor
// - L (leading-tone):     C major <-> E minor   (major r -> minor r+4)
// - R (relative):         C major <-> A minor   (major r -> minor r+9)
//
// All three are involutions on the 24 triads. Other qualities have no
// transform, and applying one yields `None`.

use crate::chord::Chord;
use crate::quality::Quality;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transform {
    P,
    L,
    R,
}

impl Transform {
    pub const ALL: [Transform; 3] = [Transform::P, Transform::L, Transform::R];
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Transform::P => "P",
            Transform::L => "L",
            Transform::R => "R",
        };
        f.write_str(s)
    }
}

/// Apply `transform` to a major or minor triad.
pub fn apply_neo_riemannian(chord: Chord, transform: Transform) -> Option<Chord> {
    if !chord.quality().is_major_minor_triad() {
        return None;
    }
    let r = chord.root() as i32;
    let major = chord.quality() == Quality::Major;
    let result = match (transform, major) {
        (Transform::P, true) => chord.with_quality(Quality::Minor),
        (Transform::P, false) => chord.with_quality(Quality::Major),
        (Transform::L, true) => Chord::new(r + 4, Quality::Minor),
        (Transform::L, false) => Chord::new(r + 8, Quality::Major),
        (Transform::R, true) => Chord::new(r + 9, Quality::Minor),
        (Transform::R, false) => Chord::new(r + 3, Quality::Major),
    };
    Some(result)
}

/// The transform that takes `from` to `to`, if any. Only transforms applied
/// to `from` are tried; call again with the arguments swapped to search the
/// other direction.
pub fn find_neo_riemannian_transform(from: Chord, to: Chord) -> Option<Transform> {
    Transform::ALL
        .into_iter()
        .find(|&t| apply_neo_riemannian(from, t) == Some(to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transforms_from_c_major() {
        let c = Chord::new(0, Quality::Major);
        assert_eq!(apply_neo_riemannian(c, Transform::P), Some(Chord::new(0, Quality::Minor)));
        assert_eq!(apply_neo_riemannian(c, Transform::L), Some(Chord::new(4, Quality::Minor)));
        assert_eq!(apply_neo_riemannian(c, Transform::R), Some(Chord::new(9, Quality::Minor)));
    }

    #[test]
    fn test_all_transforms_are_involutions() {
        for root in 0..12 {
            for quality in [Quality::Major, Quality::Minor] {
                let c = Chord::new(root, quality);
                for t in Transform::ALL {
                    let once = apply_neo_riemannian(c, t).unwrap();
                    assert_eq!(apply_neo_riemannian(once, t), Some(c), "{c} {t}");
                    assert_eq!(c.pitch_classes().iter().filter(|pc| once.contains_pc(**pc)).count(), 2);
                }
            }
        }
    }

    #[test]
    fn test_non_triads_have_no_transform() {
        for quality in Quality::ALL {
            let chord = Chord::new(0, quality);
            for t in Transform::ALL {
                assert_eq!(
                    apply_neo_riemannian(chord, t).is_some(),
                    quality.is_major_minor_triad(),
                    "{quality} {t}"
                );
            }
        }
    }

    #[test]
    fn test_find_transform() {
        let c = Chord::new(0, Quality::Major);
        let e_minor = Chord::new(4, Quality::Minor);
        assert_eq!(find_neo_riemannian_transform(c, e_minor), Some(Transform::L));
        assert_eq!(find_neo_riemannian_transform(c, Chord::new(2, Quality::Minor)), None);
        assert_eq!(find_neo_riemannian_transform(c, c), None);
    }
}
