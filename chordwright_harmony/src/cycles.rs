// Cyclic generators: dominant chains, ii-V-I families, and neo-Riemannian
// transform cycles.
//
// - `build_dominant_chain`: dominant sevenths falling by fifths (root +5 each
//   step). Twelve steps visit every pitch class once.
// - `find_ii_v_is`: the key's own ii-V-I plus a secondary ii-V-I onto each
//   diatonic degree from ii to vi.
// - `build_pl_cycle` / `build_lr_cycle` / `build_pr_cycle`: alternate two
//   transforms from a major triad. PL and LR always emit 24 steps. PR stops as
//   soon as the next triad was already visited, which happens after 8.

use crate::chord::Chord;
use crate::quality::Quality;
use crate::transform::{Transform, apply_neo_riemannian};
use serde::Serialize;
use std::collections::BTreeSet;

/// Most steps a transform cycle may take after its starting triad.
const MAX_CYCLE_STEPS: usize = 23;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleStep {
    pub chord: Chord,
    /// Transform that produced this chord; `None` only for the first step.
    pub transform: Option<Transform>,
}

pub fn build_dominant_chain(start_root: i32, length: usize) -> Vec<Chord> {
    (0..length as i32)
        .map(|i| Chord::new(start_root + 5 * i, Quality::DominantSeventh))
        .collect()
}

// ---------------------------------------------------------------------------
// ii-V-I
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwoFiveOne {
    /// Roman numeral of the target within the key ("I", "ii", ...).
    pub label: &'static str,
    pub ii: Chord,
    pub v: Chord,
    pub target: Chord,
    /// True for the key's own ii-V-I.
    pub primary: bool,
}

/// Diatonic degrees of the major scale that a secondary ii-V can target:
/// (label, semitones above the tonic, triad quality). The tonic and the
/// leading-tone triad are excluded.
const SECONDARY_TARGETS: [(&str, i32, Quality); 5] = [
    ("ii", 2, Quality::Minor),
    ("iii", 4, Quality::Minor),
    ("IV", 5, Quality::Major),
    ("V", 7, Quality::Major),
    ("vi", 9, Quality::Minor),
];

fn ii_v_onto(label: &'static str, target: Chord, primary: bool) -> TwoFiveOne {
    let root = target.root() as i32;
    TwoFiveOne {
        label,
        ii: Chord::new(root + 2, Quality::MinorSeventh),
        v: Chord::new(root + 7, Quality::DominantSeventh),
        target,
        primary,
    }
}

pub fn find_ii_v_is(key_root: i32) -> Vec<TwoFiveOne> {
    let mut result = vec![ii_v_onto("I", Chord::new(key_root, Quality::Major), true)];
    result.extend(
        SECONDARY_TARGETS
            .iter()
            .map(|&(label, offset, quality)| {
                ii_v_onto(label, Chord::new(key_root + offset, quality), false)
            }),
    );
    result
}

// ---------------------------------------------------------------------------
// Neo-Riemannian cycles
// ---------------------------------------------------------------------------

fn build_transform_cycle(start_root: i32, pair: [Transform; 2], stop_on_repeat: bool) -> Vec<CycleStep> {
    let start = Chord::new(start_root, Quality::Major);
    let mut steps = vec![CycleStep {
        chord: start,
        transform: None,
    }];
    let mut visited: BTreeSet<String> = BTreeSet::new();
    visited.insert(start.key());

    let mut current = start;
    for i in 0..MAX_CYCLE_STEPS {
        let transform = pair[i % 2];
        // Major/minor triads are closed under P, L and R.
        let Some(next) = apply_neo_riemannian(current, transform) else {
            break;
        };
        if stop_on_repeat && !visited.insert(next.key()) {
            break;
        }
        steps.push(CycleStep {
            chord: next,
            transform: Some(transform),
        });
        current = next;
    }
    steps
}

pub fn build_pl_cycle(start_root: i32) -> Vec<CycleStep> {
    build_transform_cycle(start_root, [Transform::P, Transform::L], false)
}

pub fn build_lr_cycle(start_root: i32) -> Vec<CycleStep> {
    build_transform_cycle(start_root, [Transform::L, Transform::R], false)
}

pub fn build_pr_cycle(start_root: i32) -> Vec<CycleStep> {
    build_transform_cycle(start_root, [Transform::P, Transform::R], true)
}
