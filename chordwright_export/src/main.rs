// Chordwright analyze: CLI entry point.
//
// Builds a progression from chord symbols or a catalogued template, voices
// it, prints an analysis report, and optionally writes the voicings to MIDI.
// The pipeline: load config → build progression → voice → report → MIDI.
//
// Usage:
//   cargo run -p chordwright_export --bin analyze -- [CHORD ...] [--key ROOT]
//     [--template NAME] [--midi PATH] [--config PATH] [--tempo BPM] [--json]
//
// Chord symbols look like "C", "F#m7" or "Bb7b9". With --template the
// template is moved from C to --key (default C) and any chord symbols are
// ignored. --json prints the analysis as JSON instead of the text report.
// Set RUST_LOG=debug for engine decisions.

use chordwright_export::error::{ExportError, Result};
use chordwright_export::midi::{MidiConfig, write_midi};
use chordwright_export::report::Analysis;
use chordwright_harmony::Chord;
use chordwright_harmony::config::EngineConfig;
use chordwright_harmony::library::{find_template, templates};
use chordwright_harmony::voicing::voice_progression;
use std::path::Path;

/// Flags that consume the following argument.
const VALUE_FLAGS: [&str; 5] = ["--key", "--template", "--midi", "--config", "--tempo"];

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    if let Err(e) = run(&args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<()> {
    let key_name: String = parse_flag(args, "--key").unwrap_or_else(|| "C".to_string());
    let template_name: Option<String> = parse_flag(args, "--template");
    let midi_path: Option<String> = parse_flag(args, "--midi");
    let config_path: Option<String> = parse_flag(args, "--config");
    let json = args.iter().any(|a| a == "--json");
    let midi_config = MidiConfig {
        tempo_bpm: parse_flag(args, "--tempo").unwrap_or(MidiConfig::default().tempo_bpm),
        ..MidiConfig::default()
    };

    println!("=== Chordwright Analyze ===");

    // A key is a bare note name, so it parses as a major triad.
    let key: Chord = key_name.parse()?;
    println!("Key: {}", key.name());
    println!();

    println!("[1/4] Loading config...");
    let config = match &config_path {
        Some(path) => {
            let config = EngineConfig::load(Path::new(path))?;
            println!("  Loaded {path}.");
            config
        }
        None => {
            println!("  Using defaults.");
            EngineConfig::default()
        }
    };

    println!("[2/4] Building progression...");
    let progression = match &template_name {
        Some(name) => {
            let template =
                find_template(name).ok_or_else(|| ExportError::UnknownTemplate(name.clone()))?;
            println!("  Template '{}': {}", template.name, template.description);
            template.in_key(key.root() as i32)
        }
        None => positional_args(args)
            .iter()
            .map(|s| s.parse::<Chord>())
            .collect::<std::result::Result<Vec<_>, _>>()?,
    };
    if progression.is_empty() {
        let names: Vec<&str> = templates().iter().map(|t| t.name).collect();
        println!("  Available templates: {}", names.join(", "));
        return Err(ExportError::EmptyProgression);
    }
    println!("  {} chords.", progression.len());

    println!("[3/4] Voicing...");
    let voicings = voice_progression(&progression, &config.voicing);
    println!();
    let analysis = Analysis::new(&progression, voicings, &config.proximity.qualities);
    if json {
        println!("{}", analysis.to_json()?);
    } else {
        print!("{analysis}");
    }
    println!();

    println!("[4/4] Writing MIDI...");
    match &midi_path {
        Some(path) => {
            write_midi(&analysis.voicings, &midi_config, Path::new(path))?;
            println!("  Wrote {path} ({} BPM).", midi_config.tempo_bpm);
        }
        None => println!("  Skipped (no --midi)."),
    }

    Ok(())
}

/// Arguments after the program name that are neither flags nor flag values.
/// Flags other than `VALUE_FLAGS` take no value.
fn positional_args(args: &[String]) -> Vec<&str> {
    let mut out = Vec::new();
    let mut skip_next = false;
    for arg in args.iter().skip(1) {
        if skip_next {
            skip_next = false;
            continue;
        }
        if VALUE_FLAGS.contains(&arg.as_str()) {
            skip_next = true;
            continue;
        }
        if arg.starts_with("--") {
            continue;
        }
        out.push(arg.as_str());
    }
    out
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_positional_args_skip_flag_values() {
        let args = argv("analyze Dm7 --key F G7 --json --midi out.mid Cmaj7");
        assert_eq!(positional_args(&args), vec!["Dm7", "G7", "Cmaj7"]);
    }

    #[test]
    fn test_parse_flag() {
        let args = argv("analyze --tempo 120 --key Eb");
        assert_eq!(parse_flag::<u16>(&args, "--tempo"), Some(120));
        assert_eq!(parse_flag::<String>(&args, "--key").as_deref(), Some("Eb"));
        assert_eq!(parse_flag::<u16>(&args, "--midi"), None);
    }
}
