// End-to-end: template → voicing → report → MIDI bytes.

use chordwright_export::ExportError;
use chordwright_export::midi::{MidiConfig, progression_to_smf_bytes, write_midi};
use chordwright_export::report::{Analysis, render_report};
use chordwright_harmony::config::{EngineConfig, VoicingConfig};
use chordwright_harmony::library::find_template;
use chordwright_harmony::voicing::voice_progression;
use chordwright_harmony::{Chord, Quality};

#[test]
fn test_template_pipeline() {
    let blues = find_template("blues").unwrap().in_key(9);
    assert_eq!(blues[0], Chord::new(9, Quality::DominantSeventh));

    let voicings = voice_progression(&blues, &VoicingConfig::default());
    assert_eq!(voicings.len(), 12);
    assert!(voicings.iter().all(|v| v.notes.len() == 4));

    let report = render_report(&blues, Some(&voicings), &EngineConfig::default());
    assert!(report.starts_with("Progression: A7 A7 A7 A7 D7 D7"));
    assert!(report.contains("notes ["));

    let bytes = progression_to_smf_bytes(&voicings, &MidiConfig::default()).unwrap();
    let smf = midly::Smf::parse(&bytes).unwrap();
    assert_eq!(smf.tracks.len(), 2);
}

#[test]
fn test_coltrane_template_report() {
    let coltrane = find_template("coltrane").unwrap().in_key(0);
    let report = render_report(&coltrane, None, &EngineConfig::default());
    assert!(report.contains("Coltrane changes: detected"));
    assert!(report.contains("centers"));
}

#[test]
fn test_parsed_symbols_pipeline() {
    let chords: Vec<Chord> = ["Dm7", "G7", "Cmaj7"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    let voicings = voice_progression(&chords, &VoicingConfig::default());
    let analysis = Analysis::new(&chords, voicings, &[]);
    let report = analysis.to_string();
    assert!(report.contains("Dm7 -> G7"));
    assert!(report.contains("G7 -> Cmaj7"));
    assert!(report.contains("Proximity to Dm7:\n  (none)"));

    let value: serde_json::Value = serde_json::from_str(&analysis.to_json().unwrap()).unwrap();
    assert_eq!(value["voicings"][0]["notes"], serde_json::json!([60, 62, 65, 69]));
}

#[test]
fn test_write_midi_file() {
    let chords = find_template("pop").unwrap().in_key(0);
    let voicings = voice_progression(&chords, &VoicingConfig::default());
    let path = std::env::temp_dir().join(format!("chordwright_pipeline_{}.mid", std::process::id()));
    write_midi(&voicings, &MidiConfig::default(), &path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..4], b"MThd");
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_slow_tempo_rejected() {
    let chords = find_template("jazz").unwrap().in_key(0);
    let voicings = voice_progression(&chords, &VoicingConfig::default());
    let config = MidiConfig {
        tempo_bpm: 2,
        ..Default::default()
    };
    assert!(matches!(
        progression_to_smf_bytes(&voicings, &config),
        Err(ExportError::MidiConfig(_))
    ));
}
