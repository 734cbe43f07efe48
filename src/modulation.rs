//! Modulation planning: pivot chords shared between two keys and a
//! qualitative relationship label with technique suggestions.

use std::fmt::Display;

use serde::Serialize;

use crate::chord::Chord;
use crate::harmony::diatonic_chords;
use crate::note::{PitchClass, SEMITONES};
use crate::scale::ScaleType;

/// A chord diatonic to both the source and destination keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PivotChord {
    /// The shared chord, voiced from the source key.
    pub chord: Chord,
    /// Scale degree in the source key, 1-7.
    pub from_degree: u8,
    /// Roman numeral in the source key.
    pub from_numeral: &'static str,
    /// Scale degree in the destination key, 1-7.
    pub to_degree: u8,
    /// Roman numeral in the destination key.
    pub to_numeral: &'static str,
}

/// Qualitative relationship between two keys, derived from the semitone
/// distance of their roots and, for relatives and parallels, the scale types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyRelationship {
    /// Identical root and scale type.
    Same,
    /// Same root, different scale type.
    Parallel,
    /// Destination root a perfect fifth above the source.
    Dominant,
    /// Destination root a perfect fourth above the source.
    Subdominant,
    /// Major source to the minor key on its sixth degree.
    RelativeMinor,
    /// Minor source to the major key a minor third up.
    RelativeMajor,
    /// Roots a whole step apart.
    WholeStep,
    /// Roots a half step apart.
    HalfStep,
    /// Anything else.
    Distant,
}

impl KeyRelationship {
    /// One-line description for display.
    pub fn label(self) -> &'static str {
        match self {
            KeyRelationship::Same => "Same key",
            KeyRelationship::Parallel => "Parallel keys sharing a tonic",
            KeyRelationship::Dominant => "Destination is the dominant key",
            KeyRelationship::Subdominant => "Destination is the subdominant key",
            KeyRelationship::RelativeMinor => "Destination is the relative minor",
            KeyRelationship::RelativeMajor => "Destination is the relative major",
            KeyRelationship::WholeStep => "Keys a whole step apart",
            KeyRelationship::HalfStep => "Keys a half step apart",
            KeyRelationship::Distant => "Distantly related keys",
        }
    }
}

impl Display for KeyRelationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A plan for moving from one key to another.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModulationSuggestion {
    /// Relationship between the two keys.
    pub relationship: KeyRelationship,
    /// Semitone distance from source to destination root, wrapped to [0,11].
    pub distance: u8,
    /// Chords diatonic to both keys; empty when either key has no diatonic
    /// pattern or the keys share no chord.
    pub pivots: Vec<PivotChord>,
    /// Technique suggestions gated on the relationship and distance.
    pub techniques: Vec<&'static str>,
}

/// Cross-join both keys' diatonic triads and pair the chords they share.
///
/// `None` when either scale type has no registered diatonic pattern (the
/// same unavailable result that `diatonic_chords` reports).
pub fn find_pivot_chords(
    from_root: PitchClass,
    from_scale: ScaleType,
    to_root: PitchClass,
    to_scale: ScaleType,
) -> Option<Vec<PivotChord>> {
    let from_chords = diatonic_chords(from_root, from_scale, false)?;
    let to_chords = diatonic_chords(to_root, to_scale, false)?;

    let mut pivots = Vec::new();
    for from in &from_chords {
        for to in &to_chords {
            if from.chord.root() == to.chord.root() && from.chord.kind() == to.chord.kind() {
                pivots.push(PivotChord {
                    chord: from.chord.clone(),
                    from_degree: from.degree,
                    from_numeral: from.numeral,
                    to_degree: to.degree,
                    to_numeral: to.numeral,
                });
            }
        }
    }
    Some(pivots)
}

/// Semitone distance from one root up to another, wrapped to [0,11].
fn root_distance(from: PitchClass, to: PitchClass) -> u8 {
    (to.index() + SEMITONES as u8 - from.index()) % SEMITONES as u8
}

/// Classify the relationship between two keys and suggest how to get from
/// one to the other.
pub fn suggest_modulation(
    from_root: PitchClass,
    from_scale: ScaleType,
    to_root: PitchClass,
    to_scale: ScaleType,
) -> ModulationSuggestion {
    let distance = root_distance(from_root, to_root);
    let relationship = match distance {
        0 if from_scale == to_scale => KeyRelationship::Same,
        0 => KeyRelationship::Parallel,
        7 => KeyRelationship::Dominant,
        5 => KeyRelationship::Subdominant,
        9 if from_scale == ScaleType::Major && to_scale == ScaleType::NaturalMinor => {
            KeyRelationship::RelativeMinor
        }
        3 if from_scale == ScaleType::NaturalMinor && to_scale == ScaleType::Major => {
            KeyRelationship::RelativeMajor
        }
        2 | 10 => KeyRelationship::WholeStep,
        1 | 11 => KeyRelationship::HalfStep,
        _ => KeyRelationship::Distant,
    };

    let pivots =
        find_pivot_chords(from_root, from_scale, to_root, to_scale).unwrap_or_default();

    let mut techniques = Vec::new();
    if !pivots.is_empty() {
        techniques.push("Pivot chord: reinterpret a chord shared by both keys");
    }
    match relationship {
        KeyRelationship::Same => {}
        KeyRelationship::Parallel => {
            techniques.push("Mode mixture: borrow chords from the parallel key before committing");
        }
        KeyRelationship::Dominant | KeyRelationship::Subdominant => {
            techniques.push("Tonicize: approach the new key through its dominant seventh");
        }
        KeyRelationship::RelativeMinor | KeyRelationship::RelativeMajor => {
            techniques.push("Lean on the shared note set and cadence in the new key");
        }
        KeyRelationship::HalfStep => {
            techniques.push("Direct modulation: restate the phrase a semitone away");
        }
        KeyRelationship::WholeStep => {
            techniques.push("Sequential modulation: step the progression a whole tone");
        }
        KeyRelationship::Distant => {
            techniques.push("Common-tone modulation: sustain one shared pitch while the harmony shifts");
        }
    }

    ModulationSuggestion {
        relationship,
        distance,
        pivots,
        techniques,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c_to_g_shares_four_triads() {
        let pivots = find_pivot_chords(
            PitchClass::C,
            ScaleType::Major,
            PitchClass::G,
            ScaleType::Major,
        )
        .unwrap();
        let symbols: Vec<String> = pivots.iter().map(|p| p.chord.symbol()).collect();
        assert_eq!(symbols, vec!["C", "Em", "G", "Am"]);
        // C is I at home and IV in G major.
        assert_eq!(pivots[0].from_numeral, "I");
        assert_eq!(pivots[0].to_numeral, "IV");
    }

    #[test]
    fn relative_keys_share_every_triad() {
        let pivots = find_pivot_chords(
            PitchClass::C,
            ScaleType::Major,
            PitchClass::A,
            ScaleType::NaturalMinor,
        )
        .unwrap();
        assert_eq!(pivots.len(), 7);
    }

    #[test]
    fn unregistered_scale_reports_unavailable() {
        assert!(find_pivot_chords(
            PitchClass::C,
            ScaleType::Blues,
            PitchClass::G,
            ScaleType::Major,
        )
        .is_none());
    }

    #[test]
    fn dominant_relationship() {
        let plan = suggest_modulation(
            PitchClass::C,
            ScaleType::Major,
            PitchClass::G,
            ScaleType::Major,
        );
        assert_eq!(plan.relationship, KeyRelationship::Dominant);
        assert_eq!(plan.distance, 7);
        assert!(!plan.pivots.is_empty());
        assert!(plan
            .techniques
            .iter()
            .any(|t| t.starts_with("Tonicize")));
    }

    #[test]
    fn relative_minor_relationship() {
        let plan = suggest_modulation(
            PitchClass::C,
            ScaleType::Major,
            PitchClass::A,
            ScaleType::NaturalMinor,
        );
        assert_eq!(plan.relationship, KeyRelationship::RelativeMinor);
        assert_eq!(plan.distance, 9);
    }

    #[test]
    fn nine_semitones_without_relative_scales_is_distant() {
        let plan = suggest_modulation(
            PitchClass::C,
            ScaleType::Major,
            PitchClass::A,
            ScaleType::Major,
        );
        assert_eq!(plan.relationship, KeyRelationship::Distant);
    }

    #[test]
    fn parallel_relationship() {
        let plan = suggest_modulation(
            PitchClass::C,
            ScaleType::Major,
            PitchClass::C,
            ScaleType::NaturalMinor,
        );
        assert_eq!(plan.relationship, KeyRelationship::Parallel);
        assert_eq!(plan.distance, 0);
        assert!(plan
            .techniques
            .iter()
            .any(|t| t.starts_with("Mode mixture")));
    }

    #[test]
    fn half_step_suggests_direct_modulation() {
        let plan = suggest_modulation(
            PitchClass::C,
            ScaleType::Major,
            PitchClass::Cs,
            ScaleType::Major,
        );
        assert_eq!(plan.relationship, KeyRelationship::HalfStep);
        assert!(plan
            .techniques
            .iter()
            .any(|t| t.starts_with("Direct modulation")));
        // Distance 11 is the same relationship from the other side.
        let down = suggest_modulation(
            PitchClass::C,
            ScaleType::Major,
            PitchClass::B,
            ScaleType::Major,
        );
        assert_eq!(down.relationship, KeyRelationship::HalfStep);
    }

    #[test]
    fn pivots_degrade_gracefully_without_patterns() {
        let plan = suggest_modulation(
            PitchClass::C,
            ScaleType::WholeTone,
            PitchClass::G,
            ScaleType::Major,
        );
        assert_eq!(plan.relationship, KeyRelationship::Dominant);
        assert!(plan.pivots.is_empty());
    }
}
