// Proximity pyramid: every chord of the requested qualities ranked by how
// many pitch classes it shares with a reference chord.
//
// Candidates are enumerated quality-major, root-minor (all twelve roots of
// the first quality, then the second, ...). Within a level, chords keep that
// enumeration order. Levels are sorted by shared count, highest first.
// Renderers lay pyramids out positionally, so this order is part of the
// contract.

use crate::chord::Chord;
use crate::quality::Quality;
use crate::relationship::shared_note_count;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProximityLevel {
    pub shared_count: usize,
    pub chords: Vec<Chord>,
}

pub fn build_proximity_pyramid(reference: Chord, qualities: &[Quality]) -> Vec<ProximityLevel> {
    let reference_key = reference.key();
    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut by_count: BTreeMap<usize, Vec<Chord>> = BTreeMap::new();

    for &quality in qualities {
        for root in 0..12 {
            let candidate = Chord::new(root, quality);
            let key = candidate.key();
            if key == reference_key || !seen.insert(key) {
                continue;
            }
            by_count
                .entry(shared_note_count(reference, candidate))
                .or_default()
                .push(candidate);
        }
    }

    by_count
        .into_iter()
        .rev()
        .map(|(shared_count, chords)| ProximityLevel {
            shared_count,
            chords,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_major_triads() {
        let c = Chord::new(0, Quality::Major);
        let pyramid = build_proximity_pyramid(c, &[Quality::Major, Quality::Minor]);
        let counts: Vec<usize> = pyramid.iter().map(|l| l.shared_count).collect();
        assert_eq!(counts, vec![2, 1, 0]);

        // Two notes in common: the three single-transform neighbours.
        // Majors come first (none share two notes with C), then minors by root.
        assert_eq!(
            pyramid[0].chords,
            vec![
                Chord::new(0, Quality::Minor),
                Chord::new(4, Quality::Minor),
                Chord::new(9, Quality::Minor),
            ]
        );

        let total: usize = pyramid.iter().map(|l| l.chords.len()).sum();
        assert_eq!(total, 23);
        assert!(pyramid.iter().all(|l| !l.chords.contains(&c)));
    }

    #[test]
    fn test_within_level_order_is_quality_then_root() {
        let c = Chord::new(0, Quality::Major);
        let pyramid = build_proximity_pyramid(c, &[Quality::Minor, Quality::Major]);
        let one = &pyramid[1];
        assert_eq!(one.shared_count, 1);
        let first_major = one.chords.iter().position(|ch| ch.quality() == Quality::Major).unwrap();
        assert!(one.chords[..first_major].iter().all(|ch| ch.quality() == Quality::Minor));
        let roots: Vec<u8> = one.chords[..first_major].iter().map(|ch| ch.root()).collect();
        let mut sorted = roots.clone();
        sorted.sort_unstable();
        assert_eq!(roots, sorted);
    }

    #[test]
    fn test_duplicate_qualities_are_ignored() {
        let c = Chord::new(0, Quality::Major);
        let once = build_proximity_pyramid(c, &[Quality::Major]);
        let twice = build_proximity_pyramid(c, &[Quality::Major, Quality::Major]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_no_qualities() {
        assert!(build_proximity_pyramid(Chord::new(0, Quality::Major), &[]).is_empty());
    }
}
