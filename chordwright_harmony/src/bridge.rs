// Bridge chords and chromatic bass lines.
//
// A bridge chord is inserted between two chords of a progression to smooth
// or colour the motion. `suggest_bridge_chords` proposes up to four:
//
// 1. Tritone substitute of the target's dominant (a dominant seventh a
//    semitone above the target). Chromatic when both hops are semitones in
//    the same direction.
// 2. Diminished seventh a semitone below the target.
// 3. Diminished seventh a semitone above the target.
//    (2 and 3 are chromatic when the hop from the source is a semitone.)
// 4. Secondary dominant a fifth above the target. Resolves by fifth, so it
//    never makes a chromatic bass.
//
// A candidate whose root collides with either endpoint is dropped.
//
// `find_chromatic_bass_lines` reports maximal single-direction semitone runs
// of at least three chords. `suggest_bridges_for_progression` picks one
// bridge per adjacent pair by a fixed priority.

use crate::chord::{Chord, pitch_name};
use crate::quality::Quality;
use crate::relationship::root_interval;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BridgeType {
    TritoneSub,
    PassingDim,
    SecondaryDom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BridgeChord {
    pub chord: Chord,
    #[serde(rename = "type")]
    pub bridge_type: BridgeType,
    pub reason: String,
    pub creates_chromatic_bass: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Ascending,
    Descending,
}

/// Inclusive range of progression indices whose roots move by semitones in
/// one direction. Always covers at least three chords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChromaticBassSpan {
    pub start: usize,
    pub end: usize,
    pub direction: Direction,
}

/// A bridge chosen for the pair `(progression[index], progression[index + 1])`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressionBridge {
    pub index: usize,
    pub bridge: BridgeChord,
}

fn semitone_direction(interval: u8) -> Option<Direction> {
    match interval {
        1 => Some(Direction::Ascending),
        11 => Some(Direction::Descending),
        _ => None,
    }
}

pub fn suggest_bridge_chords(from: Chord, to: Chord) -> Vec<BridgeChord> {
    let collides = |root: u8| root == from.root() || root == to.root();
    let mut bridges = Vec::new();

    // 1. Tritone substitute for the target's V7.
    let dominant_root = (to.root() + 7) % 12;
    let sub = Chord::new(dominant_root as i32 + 6, Quality::DominantSeventh);
    if !collides(sub.root()) {
        let into = semitone_direction(root_interval(from, sub));
        let out = semitone_direction(root_interval(sub, to));
        bridges.push(BridgeChord {
            chord: sub,
            bridge_type: BridgeType::TritoneSub,
            reason: format!(
                "{} substitutes for {}7 and resolves down a semitone to {}",
                sub,
                pitch_name(dominant_root),
                to
            ),
            creates_chromatic_bass: into.is_some() && into == out,
        });
    }

    // 2 and 3. Passing diminished sevenths either side of the target.
    let below = Chord::new(to.root() as i32 - 1, Quality::DiminishedSeventh);
    if !collides(below.root()) {
        bridges.push(BridgeChord {
            chord: below,
            bridge_type: BridgeType::PassingDim,
            reason: format!("{below} passes up a semitone into {to}"),
            creates_chromatic_bass: semitone_direction(root_interval(from, below)).is_some(),
        });
    }
    let above = Chord::new(to.root() as i32 + 1, Quality::DiminishedSeventh);
    if !collides(above.root()) && above != below {
        bridges.push(BridgeChord {
            chord: above,
            bridge_type: BridgeType::PassingDim,
            reason: format!("{above} passes down a semitone into {to}"),
            creates_chromatic_bass: semitone_direction(root_interval(from, above)).is_some(),
        });
    }

    // 4. Secondary dominant.
    let secondary = Chord::new(dominant_root as i32, Quality::DominantSeventh);
    if !collides(secondary.root()) {
        bridges.push(BridgeChord {
            chord: secondary,
            bridge_type: BridgeType::SecondaryDom,
            reason: format!("{secondary} is V7 of {to} and resolves down a fifth"),
            creates_chromatic_bass: false,
        });
    }

    bridges
}

/// An open run: start index, direction, semitone steps so far.
type Run = (usize, Direction, usize);

fn close_run(run: Option<Run>, end: usize, spans: &mut Vec<ChromaticBassSpan>) {
    if let Some((start, direction, steps)) = run {
        if steps >= 2 {
            spans.push(ChromaticBassSpan {
                start,
                end,
                direction,
            });
        }
    }
}

pub fn find_chromatic_bass_lines(progression: &[Chord]) -> Vec<ChromaticBassSpan> {
    let mut spans = Vec::new();
    let mut run: Option<Run> = None;

    for i in 1..progression.len() {
        let step = semitone_direction(root_interval(progression[i - 1], progression[i]));
        match (run, step) {
            (Some((start, direction, steps)), Some(d)) if d == direction => {
                run = Some((start, direction, steps + 1));
            }
            (_, step) => {
                close_run(run, i - 1, &mut spans);
                run = step.map(|d| (i - 1, d, 1));
            }
        }
    }
    close_run(run, progression.len().saturating_sub(1), &mut spans);
    spans
}

/// Pick one bridge per adjacent pair. Priority: chromatic tritone sub, any
/// chromatic candidate, any tritone sub, secondary dominant, passing
/// diminished, then whatever comes first. Pairs without candidates are
/// skipped.
pub fn suggest_bridges_for_progression(progression: &[Chord]) -> Vec<ProgressionBridge> {
    progression
        .windows(2)
        .enumerate()
        .filter_map(|(index, pair)| {
            let candidates = suggest_bridge_chords(pair[0], pair[1]);
            let pick = candidates
                .iter()
                .find(|b| b.bridge_type == BridgeType::TritoneSub && b.creates_chromatic_bass)
                .or_else(|| candidates.iter().find(|b| b.creates_chromatic_bass))
                .or_else(|| candidates.iter().find(|b| b.bridge_type == BridgeType::TritoneSub))
                .or_else(|| candidates.iter().find(|b| b.bridge_type == BridgeType::SecondaryDom))
                .or_else(|| candidates.iter().find(|b| b.bridge_type == BridgeType::PassingDim))
                .or_else(|| candidates.first())?;
            log::debug!(
                "bridge {} -> {}: {} ({:?})",
                pair[0],
                pair[1],
                pick.chord,
                pick.bridge_type
            );
            Some(ProgressionBridge {
                index,
                bridge: pick.clone(),
            })
        })
        .collect()
}
