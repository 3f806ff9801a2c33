// Concrete voicings and minimal-movement voice leading.
//
// A `VoicedChord` realizes a chord as ascending MIDI note numbers, one per
// template offset. Fresh voicings put every pitch class in the base octave
// (C of that octave up to B), clamped to the window from one octave below to
// two octaves above the base C, and sort them. Compound extensions therefore
// land in the base octave too.
//
// `smooth_voice_leading` moves from a previous voicing to the next chord
// with least total semitone movement:
// - Each previous voice is paired with a distinct target pitch class via
//   `assignment::min_cost_assignment`. A paired voice moves to the nearer of
//   the upward or downward realization of its target (tritones go up).
// - Shrinking (more previous voices than targets): the highest excess
//   previous voices are discarded before pairing.
// - Growing: every previous voice is paired, and the leftover target pitch
//   classes enter as new voices nearest the configured center pitch.
// - An empty previous voicing falls back to a fresh voicing.
//
// Continuity across calls is the caller's concern: `VoicingSession` holds the
// last voicing and must be reset when the harmonic context changes. Nothing
// here is global.

use crate::assignment::min_cost_assignment;
use crate::chord::Chord;
use crate::config::VoicingConfig;
use serde::Serialize;

/// Playable MIDI range.
const MIDI_MIN: i32 = 0;
const MIDI_MAX: i32 = 127;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoicedChord {
    pub chord: Chord,
    /// MIDI note numbers, ascending.
    pub notes: Vec<u8>,
}

impl VoicedChord {
    pub fn pitch_classes(&self) -> Vec<u8> {
        self.notes.iter().map(|n| n % 12).collect()
    }
}

/// Place each pitch class in the base octave, keep it within one octave
/// either side, then sort.
pub fn initial_voicing(chord: Chord, base_octave: i32) -> VoicedChord {
    let base_c = 12 * (base_octave + 1);
    let low = base_c - 12;
    let high = base_c + 23;
    let mut notes: Vec<u8> = chord
        .pitch_classes()
        .into_iter()
        .map(|pc| fold_into_midi((base_c + pc as i32).clamp(low, high)))
        .collect();
    notes.sort_unstable();
    VoicedChord { chord, notes }
}

/// Voice-lead from `prev` to `next` with the default config.
pub fn smooth_voice_leading(prev: &[u8], next: Chord) -> VoicedChord {
    smooth_voice_leading_with(prev, next, &VoicingConfig::default())
}

pub fn smooth_voice_leading_with(prev: &[u8], next: Chord, config: &VoicingConfig) -> VoicedChord {
    if prev.is_empty() {
        return initial_voicing(next, config.base_octave);
    }

    let targets = next.pitch_classes();
    let mut voices = prev.to_vec();
    voices.sort_unstable();
    // Shrinking drops the top voices; they are not reassigned.
    voices.truncate(targets.len());
    let paired = voices.len();

    let best = min_cost_assignment(paired, targets.len(), |r, c| {
        nearest_step(voices[r], targets[c]).unsigned_abs()
    });

    let mut notes: Vec<u8> = voices
        .iter()
        .zip(&best.columns)
        .map(|(&v, &c)| fold_into_midi(v as i32 + nearest_step(v, targets[c])))
        .collect();
    for &c in &best.columns[paired..] {
        notes.push(fold_into_midi(nearest_to_center(targets[c], config.center_pitch)));
    }
    notes.sort_unstable();

    log::trace!(
        "voice-led {:?} -> {} as {:?} (movement {})",
        prev,
        next,
        notes,
        best.cost
    );
    VoicedChord { chord: next, notes }
}

/// Total absolute movement between two voicings, pairing voices in
/// ascending order. Extra voices in the longer voicing are ignored.
pub fn voicing_movement(a: &[u8], b: &[u8]) -> u32 {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a.iter()
        .zip(&b)
        .map(|(&x, &y)| (x as i32 - y as i32).unsigned_abs())
        .sum()
}

/// Signed semitone step from `note` to the nearest realization of `pc`.
/// A tritone resolves upward.
fn nearest_step(note: u8, pc: u8) -> i32 {
    let up = (pc as i32 - (note % 12) as i32).rem_euclid(12);
    if up <= 12 - up { up } else { up - 12 }
}

/// The realization of `pc` closest to `center`; ties go upward.
fn nearest_to_center(pc: u8, center: i32) -> i32 {
    let below = center - (center - pc as i32).rem_euclid(12);
    if below == center {
        return center;
    }
    let above = below + 12;
    if center - below < above - center { below } else { above }
}

/// Shift by octaves until the note is a valid MIDI number.
fn fold_into_midi(mut note: i32) -> u8 {
    while note < MIDI_MIN {
        note += 12;
    }
    while note > MIDI_MAX {
        note -= 12;
    }
    note as u8
}

// ---------------------------------------------------------------------------
// Caller-owned continuity
// ---------------------------------------------------------------------------

/// Holds the last voicing so successive chords lead smoothly into each
/// other. Each session is independent; reset on key changes.
#[derive(Debug, Clone, Default)]
pub struct VoicingSession {
    config: VoicingConfig,
    last: Option<VoicedChord>,
}

impl VoicingSession {
    pub fn new(config: VoicingConfig) -> Self {
        VoicingSession { config, last: None }
    }

    /// Voice `chord` against the previous voicing (or freshly, if none) and
    /// remember the result.
    pub fn voice(&mut self, chord: Chord) -> VoicedChord {
        let voiced = match &self.last {
            Some(prev) => smooth_voice_leading_with(&prev.notes, chord, &self.config),
            None => initial_voicing(chord, self.config.base_octave),
        };
        self.last = Some(voiced.clone());
        voiced
    }

    pub fn last(&self) -> Option<&VoicedChord> {
        self.last.as_ref()
    }

    pub fn reset(&mut self) {
        log::debug!("voicing session reset");
        self.last = None;
    }
}

/// Voice a whole progression through one fresh session.
pub fn voice_progression(chords: &[Chord], config: &VoicingConfig) -> Vec<VoicedChord> {
    let mut session = VoicingSession::new(config.clone());
    chords.iter().map(|&c| session.voice(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::Quality;

    fn chord(root: i32, quality: Quality) -> Chord {
        Chord::new(root, quality)
    }

    #[test]
    fn test_initial_voicing_c_major() {
        let v = initial_voicing(chord(0, Quality::Major), 4);
        assert_eq!(v.notes, vec![60, 64, 67]);
    }

    #[test]
    fn test_initial_voicing_places_pitch_classes_in_base_octave() {
        assert_eq!(initial_voicing(chord(7, Quality::Major), 4).notes, vec![62, 67, 71]);
        assert_eq!(initial_voicing(chord(11, Quality::Major), 4).notes, vec![63, 66, 71]);
        // The ninth lands below the third, not an octave up.
        assert_eq!(
            initial_voicing(chord(0, Quality::DominantNinth), 4).notes,
            vec![60, 62, 64, 67, 70]
        );
    }

    #[test]
    fn test_initial_voicing_extended_chord() {
        // B13: B D# F# A C# G#.
        let v = initial_voicing(chord(11, Quality::DominantThirteenth), 4);
        assert_eq!(v.notes, vec![61, 63, 66, 68, 69, 71]);
        assert!(v.notes.iter().all(|&n| (48..=83).contains(&n)));
    }

    #[test]
    fn test_initial_voicing_other_octaves() {
        assert_eq!(initial_voicing(chord(9, Quality::Minor), 3).notes, vec![48, 52, 57]);
        // Octave -1 starts at MIDI 0.
        assert_eq!(initial_voicing(chord(0, Quality::Major), -1).notes, vec![0, 4, 7]);
    }

    #[test]
    fn test_major_to_minor_moves_one_semitone() {
        let start = initial_voicing(chord(0, Quality::Major), 4);
        let next = smooth_voice_leading(&start.notes, chord(0, Quality::Minor));
        assert_eq!(next.notes, vec![60, 63, 67]);
        assert_eq!(voicing_movement(&start.notes, &next.notes), 1);
    }

    #[test]
    fn test_ii_v_i_keeps_common_tones() {
        // Dm7 (60 62 65 69) -> G7: D and F hold, C falls to B, A to G.
        let dm7 = initial_voicing(chord(2, Quality::MinorSeventh), 4);
        let g7 = smooth_voice_leading(&dm7.notes, chord(7, Quality::DominantSeventh));
        let mut pcs = g7.pitch_classes();
        pcs.sort_unstable();
        assert_eq!(pcs, vec![2, 5, 7, 11]);
        assert_eq!(g7.notes, vec![59, 62, 65, 67]);
        assert_eq!(voicing_movement(&dm7.notes, &g7.notes), 3);
    }

    #[test]
    fn test_empty_previous_falls_back() {
        let v = smooth_voice_leading(&[], chord(5, Quality::Major));
        assert_eq!(v, initial_voicing(chord(5, Quality::Major), 4));
    }

    #[test]
    fn test_growing_adds_voice_near_center() {
        let v = smooth_voice_leading(&[60, 64, 67], chord(0, Quality::DominantSeventh));
        assert_eq!(v.notes, vec![58, 60, 64, 67]);
    }

    #[test]
    fn test_shrinking_drops_top_voice() {
        let v = smooth_voice_leading(&[60, 64, 67, 70], chord(0, Quality::Major));
        assert_eq!(v.notes, vec![60, 64, 67]);
    }

    #[test]
    fn test_tritone_resolves_upward() {
        assert_eq!(nearest_step(60, 6), 6);
        assert_eq!(nearest_step(60, 11), -1);
        assert_eq!(nearest_step(60, 0), 0);
    }

    #[test]
    fn test_nearest_to_center() {
        assert_eq!(nearest_to_center(0, 60), 60);
        assert_eq!(nearest_to_center(10, 60), 58);
        assert_eq!(nearest_to_center(6, 60), 66);
        assert_eq!(nearest_to_center(5, 60), 65);
    }

    #[test]
    fn test_session_continuity_and_reset() {
        let mut session = VoicingSession::default();
        let first = session.voice(chord(0, Quality::Major));
        let second = session.voice(chord(0, Quality::Minor));
        assert_eq!(first.notes, vec![60, 64, 67]);
        assert_eq!(second.notes, vec![60, 63, 67]);
        assert_eq!(session.last(), Some(&second));

        session.reset();
        assert!(session.last().is_none());
        let fresh = session.voice(chord(7, Quality::Major));
        assert_eq!(fresh, initial_voicing(chord(7, Quality::Major), 4));
    }

    #[test]
    fn test_independent_sessions() {
        let mut a = VoicingSession::default();
        let mut b = VoicingSession::new(VoicingConfig {
            base_octave: 2,
            center_pitch: 36,
        });
        a.voice(chord(0, Quality::Major));
        let from_b = b.voice(chord(7, Quality::Major));
        assert_eq!(from_b.notes, vec![38, 43, 47]);
        assert_eq!(a.last().map(|v| v.notes.clone()), Some(vec![60, 64, 67]));
    }

    #[test]
    fn test_voice_progression_length() {
        let chords = [
            chord(2, Quality::MinorSeventh),
            chord(7, Quality::DominantSeventh),
            chord(0, Quality::MajorSeventh),
        ];
        let voiced = voice_progression(&chords, &VoicingConfig::default());
        assert_eq!(voiced.len(), 3);
        for (v, c) in voiced.iter().zip(&chords) {
            assert_eq!(v.notes.len(), c.size());
            assert_eq!(v.chord, *c);
        }
    }
}
