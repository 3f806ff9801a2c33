// Analysis of a progression, rendered as text or JSON.
//
// `Analysis` gathers everything the engine can say about a progression: the
// chords with their voicings, pairwise relationships between neighbours,
// chromatic bass lines, one suggested bridge per pair, the proximity pyramid
// of the opening chord over the configured qualities, and the Coltrane
// analysis. `Display` renders the plain-text report; `to_json` serializes the
// same record.
//
// Text sections identify chords by display name, with the canonical key next
// to each in the chord list so reports can be joined with serialized data.

use crate::error::Result;
use chordwright_harmony::bridge::{
    ChromaticBassSpan, Direction, ProgressionBridge, find_chromatic_bass_lines,
    suggest_bridges_for_progression,
};
use chordwright_harmony::chord::pitch_name;
use chordwright_harmony::coltrane::{ColtraneAnalysis, analyze_coltrane_progression};
use chordwright_harmony::config::EngineConfig;
use chordwright_harmony::proximity::{ProximityLevel, build_proximity_pyramid};
use chordwright_harmony::relationship::{Relationship, analyze_relationship};
use chordwright_harmony::voicing::VoicedChord;
use chordwright_harmony::{Chord, Quality};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub chords: Vec<Chord>,
    /// Empty when the progression was analyzed without voicing it.
    pub voicings: Vec<VoicedChord>,
    pub relationships: Vec<Relationship>,
    pub chromatic_bass_lines: Vec<ChromaticBassSpan>,
    pub bridges: Vec<ProgressionBridge>,
    /// Pyramid around the first chord; empty for an empty progression.
    pub proximity: Vec<ProximityLevel>,
    pub coltrane: ColtraneAnalysis,
}

impl Analysis {
    /// Analyze `progression`. `voicings`, if non-empty, must line up with it.
    pub fn new(
        progression: &[Chord],
        voicings: Vec<VoicedChord>,
        proximity_qualities: &[Quality],
    ) -> Self {
        Analysis {
            chords: progression.to_vec(),
            voicings,
            relationships: progression
                .windows(2)
                .map(|pair| analyze_relationship(pair[0], pair[1]))
                .collect(),
            chromatic_bass_lines: find_chromatic_bass_lines(progression),
            bridges: suggest_bridges_for_progression(progression),
            proximity: progression
                .first()
                .map(|&first| build_proximity_pyramid(first, proximity_qualities))
                .unwrap_or_default(),
            coltrane: analyze_coltrane_progression(progression),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Text report, with the proximity qualities taken from `config`.
pub fn render_report(
    progression: &[Chord],
    voicings: Option<&[VoicedChord]>,
    config: &EngineConfig,
) -> String {
    let voicings = voicings.map(<[VoicedChord]>::to_vec).unwrap_or_default();
    Analysis::new(progression, voicings, &config.proximity.qualities).to_string()
}

fn pcs_string(pcs: &[u8]) -> String {
    pcs.iter().map(|pc| pc.to_string()).collect::<Vec<_>>().join(" ")
}

fn names(chords: &[Chord]) -> String {
    chords.iter().map(|c| c.name()).collect::<Vec<_>>().join(" ")
}

fn relationship_tags(rel: &Relationship) -> String {
    let mut tags = Vec::new();
    if rel.is_dominant {
        tags.push("dominant".to_string());
    }
    if rel.is_reverse_dominant {
        tags.push("reverse dominant".to_string());
    }
    if rel.is_tritone_substitution {
        tags.push("tritone sub".to_string());
    }
    if let Some(t) = rel.transform {
        tags.push(format!("{t} transform"));
    }
    if tags.is_empty() {
        String::new()
    } else {
        format!(" ({})", tags.join(", "))
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Progression: {}", names(&self.chords))?;
        writeln!(f)?;

        writeln!(f, "Chords:")?;
        for (i, chord) in self.chords.iter().enumerate() {
            write!(
                f,
                "  {:>2}. {:<8} {:<12} pcs [{}]",
                i + 1,
                chord.name(),
                chord.key(),
                pcs_string(&chord.pitch_classes())
            )?;
            if let Some(v) = self.voicings.get(i) {
                write!(f, "  notes {:?}", v.notes)?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        writeln!(f, "Relationships:")?;
        if self.relationships.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for rel in &self.relationships {
            writeln!(
                f,
                "  {} -> {}: {} shared [{}], fifths {}, voice leading {}{}",
                rel.from,
                rel.to,
                rel.shared_count,
                pcs_string(&rel.shared_pitch_classes),
                rel.fifths_distance,
                rel.voice_leading_distance,
                relationship_tags(rel)
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Chromatic bass lines:")?;
        if self.chromatic_bass_lines.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for span in &self.chromatic_bass_lines {
            let direction = match span.direction {
                Direction::Ascending => "ascending",
                Direction::Descending => "descending",
            };
            writeln!(
                f,
                "  chords {}-{} {}: {}",
                span.start + 1,
                span.end + 1,
                direction,
                names(&self.chords[span.start..=span.end])
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Bridge suggestions:")?;
        if self.bridges.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for pb in &self.bridges {
            writeln!(
                f,
                "  {} -> [{}] -> {}: {}{}",
                self.chords[pb.index],
                pb.bridge.chord,
                self.chords[pb.index + 1],
                pb.bridge.reason,
                if pb.bridge.creates_chromatic_bass {
                    " (chromatic bass)"
                } else {
                    ""
                }
            )?;
        }
        writeln!(f)?;

        match self.chords.first() {
            Some(first) => writeln!(f, "Proximity to {first}:")?,
            None => writeln!(f, "Proximity:")?,
        }
        if self.proximity.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for level in &self.proximity {
            writeln!(f, "  {} shared: {}", level.shared_count, names(&level.chords))?;
        }
        writeln!(f)?;

        let centers: Vec<&str> = self
            .coltrane
            .tonal_centers
            .iter()
            .map(|&pc| pitch_name(pc))
            .collect();
        writeln!(
            f,
            "Coltrane changes: {} (confidence {:.2}{})",
            if self.coltrane.detected { "detected" } else { "not detected" },
            self.coltrane.confidence,
            if centers.is_empty() {
                String::new()
            } else {
                format!(", centers {}", centers.join(" "))
            }
        )
    }
}
