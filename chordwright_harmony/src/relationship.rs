// Pairwise chord relationships.
//
// Everything here compares two chords by pitch-class content or by root
// motion: shared notes, distance around the circle of fifths, dominant and
// tritone-substitute relations, neo-Riemannian adjacency, and the minimal
// voice-leading distance between their pitch-class sets.
// `analyze_relationship` bundles all of it into one record.

use crate::assignment::{circular_distance, min_cost_assignment};
use crate::chord::Chord;
use crate::transform::{Transform, find_neo_riemannian_transform};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relationship {
    pub from: Chord,
    pub to: Chord,
    /// Pitch classes of `from` that `to` also contains, in `from`'s order.
    pub shared_pitch_classes: Vec<u8>,
    pub shared_count: usize,
    pub fifths_distance: u8,
    /// `from` is a dominant of `to`.
    pub is_dominant: bool,
    /// `to` is a dominant of `from`.
    pub is_reverse_dominant: bool,
    pub is_tritone_substitution: bool,
    pub transform: Option<Transform>,
    pub voice_leading_distance: u32,
}

pub fn shared_notes(a: Chord, b: Chord) -> Vec<u8> {
    a.pitch_classes()
        .into_iter()
        .filter(|&pc| b.contains_pc(pc))
        .collect()
}

pub fn shared_note_count(a: Chord, b: Chord) -> usize {
    shared_notes(a, b).len()
}

/// Fewest steps along the circle of fifths between two roots (0-6).
pub fn fifths_distance(root_a: u8, root_b: u8) -> u8 {
    let a = root_a % 12;
    let b = root_b % 12;
    let steps = (0..12u8)
        .find(|&s| (a as u32 + 7 * s as u32) % 12 == b as u32)
        .unwrap_or(0);
    steps.min(12 - steps)
}

/// `a` sits a fifth above `b` and has a major third.
pub fn is_dominant_of(a: Chord, b: Chord) -> bool {
    root_interval(b, a) == 7 && a.has_interval(4)
}

/// Roots a tritone apart and both chords dominant-shaped (major third and
/// minor seventh).
pub fn is_tritone_substitution(a: Chord, b: Chord) -> bool {
    let dominant_shaped = |c: Chord| c.has_interval(4) && c.has_interval(10);
    root_interval(a, b) == 6 && dominant_shaped(a) && dominant_shaped(b)
}

/// Least total circular movement pairing the smaller chord's pitch classes
/// with distinct pitch classes of the larger one.
pub fn voice_leading_distance(a: Chord, b: Chord) -> u32 {
    let (small, large) = if a.size() <= b.size() {
        (a.pitch_classes(), b.pitch_classes())
    } else {
        (b.pitch_classes(), a.pitch_classes())
    };
    min_cost_assignment(small.len(), large.len(), |r, c| {
        circular_distance(small[r], large[c])
    })
    .cost
}

pub fn analyze_relationship(a: Chord, b: Chord) -> Relationship {
    let shared = shared_notes(a, b);
    Relationship {
        from: a,
        to: b,
        shared_count: shared.len(),
        shared_pitch_classes: shared,
        fifths_distance: fifths_distance(a.root(), b.root()),
        is_dominant: is_dominant_of(a, b),
        is_reverse_dominant: is_dominant_of(b, a),
        is_tritone_substitution: is_tritone_substitution(a, b),
        transform: find_neo_riemannian_transform(a, b),
        voice_leading_distance: voice_leading_distance(a, b),
    }
}

/// Semitones from `from`'s root up to `to`'s root (0-11).
pub(crate) fn root_interval(from: Chord, to: Chord) -> u8 {
    (to.root() + 12 - from.root()) % 12
}
