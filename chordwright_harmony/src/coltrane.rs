// Coltrane changes: three tonal centers a major third apart, each approached
// by its dominant.
//
// Generation is fixed-form. Detection is a heuristic: any two major or
// major-seventh chords whose roots lie a major third apart imply a triangle
// of centers; confidence grows with how many of those centers are also
// preceded (anywhere in the input) by their dominant.

use crate::chord::Chord;
use crate::quality::Quality;
use serde::Serialize;
use std::collections::BTreeSet;

/// Confidence above which a progression counts as Coltrane changes.
const DETECTION_THRESHOLD: f64 = 0.5;

/// Bonus once a full triangle of centers is present.
const TRIANGLE_BONUS: f64 = 0.3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColtraneAnalysis {
    pub detected: bool,
    /// Candidate centers, ascending.
    pub tonal_centers: Vec<u8>,
    pub confidence: f64,
}

/// Centers `[tonic, tonic + 4, tonic + 8]`.
pub fn get_coltrane_triangle(tonic: i32) -> [u8; 3] {
    let t = Chord::new(tonic, Quality::Major).root();
    [t, (t + 4) % 12, (t + 8) % 12]
}

/// I, V7 of c2, c2, V7 of c3, c3, V7 of I, I. In C: Cmaj7 B7 Emaj7 Eb7 Abmaj7 G7 Cmaj7.
pub fn generate_coltrane_substitution(tonic: i32) -> Vec<Chord> {
    let [c1, c2, c3] = get_coltrane_triangle(tonic).map(|c| c as i32);
    vec![
        Chord::new(c1, Quality::MajorSeventh),
        Chord::new(c2 + 7, Quality::DominantSeventh),
        Chord::new(c2, Quality::MajorSeventh),
        Chord::new(c3 + 7, Quality::DominantSeventh),
        Chord::new(c3, Quality::MajorSeventh),
        Chord::new(c1 + 7, Quality::DominantSeventh),
        Chord::new(c1, Quality::MajorSeventh),
    ]
}

/// The substitution with every dominant prepared by its ii.
pub fn expand_ii_v_coltrane(tonic: i32) -> Vec<Chord> {
    let [c1, c2, c3] = get_coltrane_triangle(tonic).map(|c| c as i32);
    let mut chords = vec![Chord::new(c1, Quality::MajorSeventh)];
    for center in [c2, c3, c1] {
        chords.push(Chord::new(center + 2, Quality::MinorSeventh));
        chords.push(Chord::new(center + 7, Quality::DominantSeventh));
        chords.push(Chord::new(center, Quality::MajorSeventh));
    }
    chords
}

pub fn analyze_coltrane_progression(chords: &[Chord]) -> ColtraneAnalysis {
    let major_roots: Vec<u8> = chords
        .iter()
        .filter(|c| matches!(c.quality(), Quality::Major | Quality::MajorSeventh))
        .map(|c| c.root())
        .collect();

    let mut centers: BTreeSet<u8> = BTreeSet::new();
    for (i, &a) in major_roots.iter().enumerate() {
        for &b in &major_roots[i + 1..] {
            let diff = (b + 12 - a) % 12;
            if diff == 4 || diff == 8 {
                let third = if diff == 4 { (b + 4) % 12 } else { (a + 4) % 12 };
                centers.extend([a, b, third]);
            }
        }
    }

    if centers.len() < 3 {
        return ColtraneAnalysis {
            detected: false,
            tonal_centers: centers.into_iter().collect(),
            confidence: 0.0,
        };
    }

    let has_dominant = |center: u8| {
        chords.iter().any(|c| {
            matches!(c.quality(), Quality::DominantSeventh | Quality::DominantNinth)
                && c.root() == (center + 7) % 12
        })
    };
    let v7_count = centers.iter().filter(|&&c| has_dominant(c)).count();
    let confidence = (v7_count as f64 / centers.len() as f64 + TRIANGLE_BONUS).min(1.0);
    let detected = confidence > DETECTION_THRESHOLD;

    log::debug!(
        "coltrane analysis: centers {:?}, {} with dominants, confidence {:.2}",
        centers,
        v7_count,
        confidence
    );
    ColtraneAnalysis {
        detected,
        tonal_centers: centers.into_iter().collect(),
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle() {
        assert_eq!(get_coltrane_triangle(0), [0, 4, 8]);
        assert_eq!(get_coltrane_triangle(11), [11, 3, 7]);
        assert_eq!(get_coltrane_triangle(-1), [11, 3, 7]);
    }

    #[test]
    fn test_substitution_in_c() {
        let names: Vec<String> = generate_coltrane_substitution(0).iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Cmaj7", "B7", "Emaj7", "Eb7", "Abmaj7", "G7", "Cmaj7"]);
    }

    #[test]
    fn test_expanded_in_c() {
        let names: Vec<String> = expand_ii_v_coltrane(0).iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec![
                "Cmaj7", "F#m7", "B7", "Emaj7", "Bbm7", "Eb7", "Abmaj7", "Dm7", "G7", "Cmaj7"
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let analysis = analyze_coltrane_progression(&[]);
        assert_eq!(
            analysis,
            ColtraneAnalysis {
                detected: false,
                tonal_centers: vec![],
                confidence: 0.0,
            }
        );
    }

    #[test]
    fn test_detects_generated_substitution() {
        let analysis = analyze_coltrane_progression(&generate_coltrane_substitution(2));
        assert!(analysis.detected);
        assert_eq!(analysis.tonal_centers, vec![2, 6, 10]);
        assert_eq!(analysis.confidence, 1.0);
    }

    #[test]
    fn test_triangle_without_dominants() {
        // Three centers but no dominants: confidence is the bonus alone.
        let chords = [
            Chord::new(0, Quality::Major),
            Chord::new(4, Quality::Major),
        ];
        let analysis = analyze_coltrane_progression(&chords);
        assert_eq!(analysis.tonal_centers, vec![0, 4, 8]);
        assert!((analysis.confidence - 0.3).abs() < 1e-9);
        assert!(!analysis.detected);
    }

    #[test]
    fn test_plain_cadence_not_detected() {
        let chords = [
            Chord::new(2, Quality::MinorSeventh),
            Chord::new(7, Quality::DominantSeventh),
            Chord::new(0, Quality::MajorSeventh),
        ];
        let analysis = analyze_coltrane_progression(&chords);
        assert!(!analysis.detected);
        assert!(analysis.tonal_centers.is_empty());
        assert_eq!(analysis.confidence, 0.0);
    }

    #[test]
    fn test_one_dominant_is_enough() {
        // One of three centers has its dominant: 1/3 + 0.3 > 0.5.
        let chords = [
            Chord::new(0, Quality::MajorSeventh),
            Chord::new(11, Quality::DominantNinth),
            Chord::new(4, Quality::MajorSeventh),
        ];
        let analysis = analyze_coltrane_progression(&chords);
        assert!(analysis.detected);
        assert!((analysis.confidence - (1.0 / 3.0 + 0.3)).abs() < 1e-9);
    }
}
