//! Diatonic harmony: one chord per scale degree, Roman numerals, and the
//! named-progression catalog.
//!
//! Patterns are registered for four scale types only (major, natural minor,
//! harmonic minor, dorian). Asking for any other scale type is not an error;
//! it reports unavailable via `None`.

use serde::Serialize;

use crate::chord::{Chord, ChordType};
use crate::note::PitchClass;
use crate::scale::{Scale, ScaleType};

/// Degrees in a heptatonic scale.
const DEGREES: usize = 7;

/// Per-scale-type parallel arrays of chord qualities and Roman numerals.
struct DiatonicPattern {
    triads: [ChordType; DEGREES],
    triad_numerals: [&'static str; DEGREES],
    sevenths: [ChordType; DEGREES],
    seventh_numerals: [&'static str; DEGREES],
}

const MAJOR_PATTERN: DiatonicPattern = DiatonicPattern {
    triads: [
        ChordType::Major,
        ChordType::Minor,
        ChordType::Minor,
        ChordType::Major,
        ChordType::Major,
        ChordType::Minor,
        ChordType::Diminished,
    ],
    triad_numerals: ["I", "ii", "iii", "IV", "V", "vi", "vii\u{00b0}"],
    sevenths: [
        ChordType::Major7,
        ChordType::Minor7,
        ChordType::Minor7,
        ChordType::Major7,
        ChordType::Dominant7,
        ChordType::Minor7,
        ChordType::HalfDiminished7,
    ],
    seventh_numerals: ["Imaj7", "iim7", "iiim7", "IVmaj7", "V7", "vim7", "vii\u{00f8}7"],
};

const NATURAL_MINOR_PATTERN: DiatonicPattern = DiatonicPattern {
    triads: [
        ChordType::Minor,
        ChordType::Diminished,
        ChordType::Major,
        ChordType::Minor,
        ChordType::Minor,
        ChordType::Major,
        ChordType::Major,
    ],
    triad_numerals: ["i", "ii\u{00b0}", "III", "iv", "v", "VI", "VII"],
    sevenths: [
        ChordType::Minor7,
        ChordType::HalfDiminished7,
        ChordType::Major7,
        ChordType::Minor7,
        ChordType::Minor7,
        ChordType::Major7,
        ChordType::Dominant7,
    ],
    seventh_numerals: ["im7", "ii\u{00f8}7", "IIImaj7", "ivm7", "vm7", "VImaj7", "VII7"],
};

const HARMONIC_MINOR_PATTERN: DiatonicPattern = DiatonicPattern {
    triads: [
        ChordType::Minor,
        ChordType::Diminished,
        ChordType::Augmented,
        ChordType::Minor,
        ChordType::Major,
        ChordType::Major,
        ChordType::Diminished,
    ],
    triad_numerals: ["i", "ii\u{00b0}", "III+", "iv", "V", "VI", "vii\u{00b0}"],
    sevenths: [
        ChordType::MinorMajor7,
        ChordType::HalfDiminished7,
        ChordType::AugmentedMajor7,
        ChordType::Minor7,
        ChordType::Dominant7,
        ChordType::Major7,
        ChordType::Diminished7,
    ],
    seventh_numerals: [
        "imMaj7",
        "ii\u{00f8}7",
        "III+maj7",
        "ivm7",
        "V7",
        "VImaj7",
        "vii\u{00b0}7",
    ],
};

const DORIAN_PATTERN: DiatonicPattern = DiatonicPattern {
    triads: [
        ChordType::Minor,
        ChordType::Minor,
        ChordType::Major,
        ChordType::Major,
        ChordType::Minor,
        ChordType::Diminished,
        ChordType::Major,
    ],
    triad_numerals: ["i", "ii", "III", "IV", "v", "vi\u{00b0}", "VII"],
    sevenths: [
        ChordType::Minor7,
        ChordType::Minor7,
        ChordType::Major7,
        ChordType::Dominant7,
        ChordType::Minor7,
        ChordType::HalfDiminished7,
        ChordType::Major7,
    ],
    seventh_numerals: [
        "im7",
        "iim7",
        "IIImaj7",
        "IV7",
        "vm7",
        "vi\u{00f8}7",
        "VIImaj7",
    ],
};

fn pattern_for(scale_type: ScaleType) -> Option<&'static DiatonicPattern> {
    match scale_type {
        ScaleType::Major => Some(&MAJOR_PATTERN),
        ScaleType::NaturalMinor => Some(&NATURAL_MINOR_PATTERN),
        ScaleType::HarmonicMinor => Some(&HARMONIC_MINOR_PATTERN),
        ScaleType::Dorian => Some(&DORIAN_PATTERN),
        _ => None,
    }
}

/// A chord built on one scale degree of a key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiatonicChord {
    /// Scale degree, 1-7.
    pub degree: u8,
    /// Roman-numeral label in the key.
    pub numeral: &'static str,
    /// The chord itself, voiced at the default octave.
    pub chord: Chord,
}

/// One chord per scale degree of `(root, scale_type)`, as triads or seventh
/// chords. `None` when no diatonic pattern is registered for the scale type.
pub fn diatonic_chords(
    root: PitchClass,
    scale_type: ScaleType,
    sevenths: bool,
) -> Option<Vec<DiatonicChord>> {
    let pattern = pattern_for(scale_type)?;
    let scale = Scale::new(root, scale_type);
    let (qualities, numerals) = if sevenths {
        (&pattern.sevenths, &pattern.seventh_numerals)
    } else {
        (&pattern.triads, &pattern.triad_numerals)
    };
    let chords = scale
        .notes()
        .iter()
        .zip(qualities.iter().zip(numerals.iter()))
        .enumerate()
        .map(|(i, (&degree_root, (&quality, &numeral)))| DiatonicChord {
            degree: i as u8 + 1,
            numeral,
            chord: Chord::new(degree_root, quality),
        })
        .collect();
    Some(chords)
}

/// A named sequence of scale degrees with a teaching description.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Progression {
    /// Display name, conventionally the numeral sequence.
    pub name: &'static str,
    /// 1-indexed scale degrees, repeats allowed.
    pub degrees: &'static [u8],
    /// What the progression is for.
    pub description: &'static str,
}

/// The named-progression catalog.
pub const PROGRESSIONS: [Progression; 9] = [
    Progression {
        name: "I-IV-V",
        degrees: &[1, 4, 5],
        description: "The three-chord backbone of folk, country, and early rock",
    },
    Progression {
        name: "I-V-vi-IV",
        degrees: &[1, 5, 6, 4],
        description: "The modern pop axis progression",
    },
    Progression {
        name: "ii-V-I",
        degrees: &[2, 5, 1],
        description: "The fundamental jazz cadence",
    },
    Progression {
        name: "I-vi-IV-V",
        degrees: &[1, 6, 4, 5],
        description: "The 1950s doo-wop turnaround",
    },
    Progression {
        name: "vi-IV-I-V",
        degrees: &[6, 4, 1, 5],
        description: "The axis progression started from its relative minor",
    },
    Progression {
        name: "I-vi-ii-V",
        degrees: &[1, 6, 2, 5],
        description: "The rhythm-changes A-section turnaround",
    },
    Progression {
        name: "12-Bar Blues",
        degrees: &[1, 1, 1, 1, 4, 4, 1, 1, 5, 4, 1, 1],
        description: "One chord per bar of the standard blues form",
    },
    Progression {
        name: "i-VII-VI-VII",
        degrees: &[1, 7, 6, 7],
        description: "An aeolian vamp common in rock ballads",
    },
    Progression {
        name: "i-iv-v",
        degrees: &[1, 4, 5],
        description: "The minor-key counterpart of the three-chord form",
    },
];

impl Progression {
    /// Look up a catalog entry by display name, case-insensitively.
    pub fn by_name(name: &str) -> Option<&'static Progression> {
        PROGRESSIONS
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Resolve the degree sequence against a key, as triads or sevenths.
    /// `None` when the scale type has no diatonic pattern.
    pub fn resolve(
        &self,
        root: PitchClass,
        scale_type: ScaleType,
        sevenths: bool,
    ) -> Option<Vec<DiatonicChord>> {
        let diatonic = diatonic_chords(root, scale_type, sevenths)?;
        self.degrees
            .iter()
            .map(|&degree| diatonic.get(degree as usize - 1).cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c_major_triads() {
        let chords = diatonic_chords(PitchClass::C, ScaleType::Major, false).unwrap();
        assert_eq!(chords.len(), 7);
        let symbols: Vec<String> = chords.iter().map(|d| d.chord.symbol()).collect();
        assert_eq!(symbols, vec!["C", "Dm", "Em", "F", "G", "Am", "Bdim"]);
        let numerals: Vec<&str> = chords.iter().map(|d| d.numeral).collect();
        assert_eq!(numerals, vec!["I", "ii", "iii", "IV", "V", "vi", "vii°"]);
    }

    #[test]
    fn a_natural_minor_numerals() {
        let chords = diatonic_chords(PitchClass::A, ScaleType::NaturalMinor, false).unwrap();
        assert_eq!(chords.len(), 7);
        let numerals: Vec<&str> = chords.iter().map(|d| d.numeral).collect();
        assert_eq!(numerals, vec!["i", "ii°", "III", "iv", "v", "VI", "VII"]);
        assert_eq!(chords[0].chord.symbol(), "Am");
        assert_eq!(chords[1].chord.symbol(), "Bdim");
    }

    #[test]
    fn c_major_sevenths_have_dominant_on_five() {
        let chords = diatonic_chords(PitchClass::C, ScaleType::Major, true).unwrap();
        assert_eq!(chords[4].chord.symbol(), "G7");
        assert_eq!(chords[4].numeral, "V7");
        assert_eq!(chords[6].chord.kind(), ChordType::HalfDiminished7);
    }

    #[test]
    fn harmonic_minor_has_augmented_third_degree() {
        let chords = diatonic_chords(PitchClass::A, ScaleType::HarmonicMinor, false).unwrap();
        assert_eq!(chords[2].chord.kind(), ChordType::Augmented);
        assert_eq!(chords[2].numeral, "III+");
        // The raised seventh gives a true dominant on V.
        let sevenths = diatonic_chords(PitchClass::A, ScaleType::HarmonicMinor, true).unwrap();
        assert_eq!(sevenths[4].chord.symbol(), "E7");
    }

    #[test]
    fn unregistered_scale_types_are_unavailable() {
        assert!(diatonic_chords(PitchClass::C, ScaleType::Blues, false).is_none());
        assert!(diatonic_chords(PitchClass::C, ScaleType::WholeTone, true).is_none());
        assert!(diatonic_chords(PitchClass::C, ScaleType::Lydian, false).is_none());
    }

    #[test]
    fn degrees_are_one_indexed_and_sequential() {
        let chords = diatonic_chords(PitchClass::D, ScaleType::Dorian, false).unwrap();
        let degrees: Vec<u8> = chords.iter().map(|d| d.degree).collect();
        assert_eq!(degrees, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn two_five_one_in_c() {
        let prog = Progression::by_name("ii-V-I").unwrap();
        let chords = prog.resolve(PitchClass::C, ScaleType::Major, false).unwrap();
        let symbols: Vec<String> = chords.iter().map(|d| d.chord.symbol()).collect();
        assert_eq!(symbols, vec!["Dm", "G", "C"]);
    }

    #[test]
    fn twelve_bar_blues_has_twelve_bars() {
        let prog = Progression::by_name("12-bar blues").unwrap();
        assert_eq!(prog.degrees.len(), 12);
        let chords = prog.resolve(PitchClass::A, ScaleType::Major, true).unwrap();
        assert_eq!(chords.len(), 12);
        assert_eq!(chords[8].chord.symbol(), "E7");
    }

    #[test]
    fn progressions_only_resolve_with_a_pattern() {
        let prog = Progression::by_name("I-IV-V").unwrap();
        assert!(prog.resolve(PitchClass::C, ScaleType::Blues, false).is_none());
    }

    #[test]
    fn progression_degrees_stay_in_range() {
        for prog in &PROGRESSIONS {
            for &degree in prog.degrees {
                assert!((1..=7).contains(&degree), "{} has degree {degree}", prog.name);
            }
        }
    }
}
