// MIDI output from voiced progressions.
//
// Encodes a sequence of `VoicedChord`s as a Standard MIDI File, format 1:
// track 0 carries the tempo, track 1 carries the chords as block notes, each
// held for `beats_per_chord` quarter notes. Uses the `midly` crate for
// encoding.

use crate::error::{ExportError, Result};
use chordwright_harmony::voicing::VoicedChord;
use midly::{
    Format, Header, MetaMessage, MidiMessage, Smf, Timing, Track, TrackEvent, TrackEventKind,
    num::{u4, u7, u15, u24, u28},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ticks per quarter note in MIDI output.
const TICKS_PER_QUARTER: u16 = 480;

const CHORD_CHANNEL: u8 = 0;

/// Slowest tempo whose microseconds-per-quarter fits the 24-bit tempo field.
pub const MIN_TEMPO_BPM: u16 = 4;

/// Longest chord, in quarter notes. Keeps every delta inside 28 bits.
pub const MAX_BEATS_PER_CHORD: u32 = 256;

/// Largest value a 28-bit delta time can hold.
const MAX_DELTA: u32 = (1 << 28) - 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MidiConfig {
    pub tempo_bpm: u16,
    /// Quarter notes each chord is held for.
    pub beats_per_chord: u32,
    pub velocity: u8,
    /// General MIDI program (0 = acoustic grand piano).
    pub program: u8,
}

impl MidiConfig {
    /// Reject values that the MIDI fields cannot represent.
    pub fn validate(&self) -> Result<()> {
        if self.tempo_bpm < MIN_TEMPO_BPM {
            return Err(ExportError::MidiConfig(format!(
                "tempo {} BPM is below the minimum of {MIN_TEMPO_BPM}",
                self.tempo_bpm
            )));
        }
        if !(1..=MAX_BEATS_PER_CHORD).contains(&self.beats_per_chord) {
            return Err(ExportError::MidiConfig(format!(
                "beats per chord must be between 1 and {MAX_BEATS_PER_CHORD}, got {}",
                self.beats_per_chord
            )));
        }
        Ok(())
    }
}

impl Default for MidiConfig {
    fn default() -> Self {
        MidiConfig {
            tempo_bpm: 90,
            beats_per_chord: 4,
            velocity: 80,
            program: 0,
        }
    }
}

/// Encode to SMF bytes.
pub fn progression_to_smf_bytes(voicings: &[VoicedChord], config: &MidiConfig) -> Result<Vec<u8>> {
    let smf = progression_to_smf(voicings, config)?;
    let mut buf = Vec::new();
    smf.write_std(&mut buf)?;
    Ok(buf)
}

/// Encode and write to `path`.
pub fn write_midi(voicings: &[VoicedChord], config: &MidiConfig, path: &Path) -> Result<()> {
    let bytes = progression_to_smf_bytes(voicings, config)?;
    std::fs::write(path, &bytes)?;
    log::debug!("wrote {} bytes of MIDI to {}", bytes.len(), path.display());
    Ok(())
}

fn midi_event(delta: u32, message: MidiMessage) -> TrackEvent<'static> {
    TrackEvent {
        delta: u28::new(delta),
        kind: TrackEventKind::Midi {
            channel: u4::new(CHORD_CHANNEL),
            message,
        },
    }
}

pub fn progression_to_smf(voicings: &[VoicedChord], config: &MidiConfig) -> Result<Smf<'static>> {
    config.validate()?;
    let mut smf = Smf::new(Header::new(
        Format::Parallel,
        Timing::Metrical(u15::new(TICKS_PER_QUARTER)),
    ));

    // Track 0: tempo
    let tempo_microseconds = 60_000_000 / config.tempo_bpm as u32;
    let tempo_track: Track<'static> = vec![
        TrackEvent {
            delta: u28::new(0),
            kind: TrackEventKind::Meta(MetaMessage::Tempo(u24::new(tempo_microseconds))),
        },
        TrackEvent {
            delta: u28::new(0),
            kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
        },
    ];
    smf.tracks.push(tempo_track);

    // Track 1: chords
    let mut track: Track<'static> = vec![
        TrackEvent {
            delta: u28::new(0),
            kind: TrackEventKind::Meta(MetaMessage::TrackName(b"Chords")),
        },
        midi_event(
            0,
            MidiMessage::ProgramChange {
                program: u7::new(config.program.min(127)),
            },
        ),
    ];

    let chord_ticks = TICKS_PER_QUARTER as u32 * config.beats_per_chord;
    let velocity = u7::new(config.velocity.min(127));
    // Silence carried over from empty voicings.
    let mut pending: u32 = 0;

    for voiced in voicings {
        if voiced.notes.is_empty() {
            pending = (pending + chord_ticks).min(MAX_DELTA);
            continue;
        }
        for (i, &note) in voiced.notes.iter().enumerate() {
            let delta = if i == 0 { pending } else { 0 };
            track.push(midi_event(
                delta,
                MidiMessage::NoteOn {
                    key: u7::new(note.min(127)),
                    vel: velocity,
                },
            ));
        }
        pending = 0;
        for (i, &note) in voiced.notes.iter().enumerate() {
            let delta = if i == 0 { chord_ticks } else { 0 };
            track.push(midi_event(
                delta,
                MidiMessage::NoteOff {
                    key: u7::new(note.min(127)),
                    vel: u7::new(0),
                },
            ));
        }
    }

    track.push(TrackEvent {
        delta: u28::new(pending),
        kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
    });
    smf.tracks.push(track);

    Ok(smf)
}
