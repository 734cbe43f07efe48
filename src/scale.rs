//! Scale catalog and scale construction.
//!
//! Each scale type is a fixed ascending template of semitone offsets from the
//! root. Construction maps the template mod 12; the produced note order is the
//! template order and is never re-sorted.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::note::PitchClass;

/// Registered scale templates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    /// Ionian mode, the major scale.
    Major,
    /// Aeolian mode.
    NaturalMinor,
    /// Minor with a raised seventh.
    HarmonicMinor,
    /// Ascending melodic (jazz) minor.
    MelodicMinor,
    /// Minor with a raised sixth.
    Dorian,
    /// Minor with a lowered second.
    Phrygian,
    /// Major with a raised fourth.
    Lydian,
    /// Major with a lowered seventh.
    Mixolydian,
    /// Diminished tonic mode.
    Locrian,
    /// Five-note major subset.
    MajorPentatonic,
    /// Five-note minor subset.
    MinorPentatonic,
    /// Minor pentatonic plus the flat fifth.
    Blues,
    /// Major pentatonic plus the flat third.
    MajorBlues,
    /// Six equal whole steps.
    WholeTone,
    /// Octatonic, half-whole ordering.
    DiminishedHalfWhole,
    /// Octatonic, whole-half ordering.
    DiminishedWholeHalf,
    /// Symmetric augmented scale.
    Augmented,
    /// Harmonic minor with a raised fourth.
    HungarianMinor,
    /// Mixolydian plus a passing major seventh.
    BebopDominant,
    /// All twelve classes.
    Chromatic,
}

impl ScaleType {
    /// All registered scale types, in catalog order.
    pub const ALL: [ScaleType; 20] = [
        ScaleType::Major,
        ScaleType::NaturalMinor,
        ScaleType::HarmonicMinor,
        ScaleType::MelodicMinor,
        ScaleType::Dorian,
        ScaleType::Phrygian,
        ScaleType::Lydian,
        ScaleType::Mixolydian,
        ScaleType::Locrian,
        ScaleType::MajorPentatonic,
        ScaleType::MinorPentatonic,
        ScaleType::Blues,
        ScaleType::MajorBlues,
        ScaleType::WholeTone,
        ScaleType::DiminishedHalfWhole,
        ScaleType::DiminishedWholeHalf,
        ScaleType::Augmented,
        ScaleType::HungarianMinor,
        ScaleType::BebopDominant,
        ScaleType::Chromatic,
    ];

    /// Ascending semitone offsets from the root.
    pub fn intervals(self) -> &'static [u8] {
        match self {
            ScaleType::Major => &[0, 2, 4, 5, 7, 9, 11],
            ScaleType::NaturalMinor => &[0, 2, 3, 5, 7, 8, 10],
            ScaleType::HarmonicMinor => &[0, 2, 3, 5, 7, 8, 11],
            ScaleType::MelodicMinor => &[0, 2, 3, 5, 7, 9, 11],
            ScaleType::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            ScaleType::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            ScaleType::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            ScaleType::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            ScaleType::Locrian => &[0, 1, 3, 5, 6, 8, 10],
            ScaleType::MajorPentatonic => &[0, 2, 4, 7, 9],
            ScaleType::MinorPentatonic => &[0, 3, 5, 7, 10],
            ScaleType::Blues => &[0, 3, 5, 6, 7, 10],
            ScaleType::MajorBlues => &[0, 2, 3, 4, 7, 9],
            ScaleType::WholeTone => &[0, 2, 4, 6, 8, 10],
            ScaleType::DiminishedHalfWhole => &[0, 1, 3, 4, 6, 7, 9, 10],
            ScaleType::DiminishedWholeHalf => &[0, 2, 3, 5, 6, 8, 9, 11],
            ScaleType::Augmented => &[0, 3, 4, 7, 8, 11],
            ScaleType::HungarianMinor => &[0, 2, 3, 6, 7, 8, 11],
            ScaleType::BebopDominant => &[0, 2, 4, 5, 7, 9, 10, 11],
            ScaleType::Chromatic => &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
        }
    }

    /// Human-readable display name.
    pub fn name(self) -> &'static str {
        match self {
            ScaleType::Major => "Major",
            ScaleType::NaturalMinor => "Natural Minor",
            ScaleType::HarmonicMinor => "Harmonic Minor",
            ScaleType::MelodicMinor => "Melodic Minor",
            ScaleType::Dorian => "Dorian",
            ScaleType::Phrygian => "Phrygian",
            ScaleType::Lydian => "Lydian",
            ScaleType::Mixolydian => "Mixolydian",
            ScaleType::Locrian => "Locrian",
            ScaleType::MajorPentatonic => "Major Pentatonic",
            ScaleType::MinorPentatonic => "Minor Pentatonic",
            ScaleType::Blues => "Blues",
            ScaleType::MajorBlues => "Major Blues",
            ScaleType::WholeTone => "Whole Tone",
            ScaleType::DiminishedHalfWhole => "Diminished (Half-Whole)",
            ScaleType::DiminishedWholeHalf => "Diminished (Whole-Half)",
            ScaleType::Augmented => "Augmented",
            ScaleType::HungarianMinor => "Hungarian Minor",
            ScaleType::BebopDominant => "Bebop Dominant",
            ScaleType::Chromatic => "Chromatic",
        }
    }

    /// One-line teaching description shown alongside the scale.
    pub fn description(self) -> &'static str {
        match self {
            ScaleType::Major => "Bright and stable; the reference point for western harmony",
            ScaleType::NaturalMinor => "Darker relative of the major scale",
            ScaleType::HarmonicMinor => "Minor with a leading tone and an augmented-second step",
            ScaleType::MelodicMinor => "Minor with raised sixth and seventh on the way up",
            ScaleType::Dorian => "Minor color with a hopeful raised sixth",
            ScaleType::Phrygian => "Minor with a flat second; Spanish and modal flavors",
            ScaleType::Lydian => "Major with a floating raised fourth",
            ScaleType::Mixolydian => "Major with a flat seventh; the dominant sound",
            ScaleType::Locrian => "Unstable mode over a diminished tonic",
            ScaleType::MajorPentatonic => "Five-note major scale with no half steps",
            ScaleType::MinorPentatonic => "Five-note minor workhorse of rock and blues",
            ScaleType::Blues => "Minor pentatonic plus the blue note",
            ScaleType::MajorBlues => "Major pentatonic plus a chromatic blue third",
            ScaleType::WholeTone => "Six even steps; dreamlike and rootless",
            ScaleType::DiminishedHalfWhole => "Symmetric eight-note scale over dominant chords",
            ScaleType::DiminishedWholeHalf => "Symmetric eight-note scale over diminished chords",
            ScaleType::Augmented => "Alternating minor thirds and half steps",
            ScaleType::HungarianMinor => "Harmonic minor with a raised fourth; gypsy sound",
            ScaleType::BebopDominant => "Mixolydian with a passing major seventh",
            ScaleType::Chromatic => "All twelve pitch classes",
        }
    }

    /// Resolve a catalog key such as `"major"`, `"natural_minor"` or
    /// `"harmonic minor"`. Case and punctuation are ignored.
    pub fn from_name(name: &str) -> Result<ScaleType, TheoryError> {
        let canon: String = name
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        let st = match canon.as_str() {
            "major" | "ionian" => ScaleType::Major,
            "minor" | "naturalminor" | "aeolian" => ScaleType::NaturalMinor,
            "harmonicminor" => ScaleType::HarmonicMinor,
            "melodicminor" => ScaleType::MelodicMinor,
            "dorian" => ScaleType::Dorian,
            "phrygian" => ScaleType::Phrygian,
            "lydian" => ScaleType::Lydian,
            "mixolydian" => ScaleType::Mixolydian,
            "locrian" => ScaleType::Locrian,
            "majorpentatonic" | "pentatonicmajor" => ScaleType::MajorPentatonic,
            "minorpentatonic" | "pentatonicminor" | "pentatonic" => ScaleType::MinorPentatonic,
            "blues" | "minorblues" => ScaleType::Blues,
            "majorblues" => ScaleType::MajorBlues,
            "wholetone" => ScaleType::WholeTone,
            "diminishedhalfwhole" | "halfwhole" | "diminished" | "octatonic" => {
                ScaleType::DiminishedHalfWhole
            }
            "diminishedwholehalf" | "wholehalf" => ScaleType::DiminishedWholeHalf,
            "augmented" => ScaleType::Augmented,
            "hungarianminor" => ScaleType::HungarianMinor,
            "bebopdominant" | "bebop" => ScaleType::BebopDominant,
            "chromatic" => ScaleType::Chromatic,
            _ => {
                return Err(TheoryError::UnknownScaleType {
                    name: name.to_string(),
                })
            }
        };
        Ok(st)
    }
}

impl Display for ScaleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A scale rooted at a concrete pitch class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scale {
    root: PitchClass,
    scale_type: ScaleType,
    notes: Vec<PitchClass>,
}

impl Scale {
    /// Build a scale from an enum-keyed catalog entry. Infallible.
    pub fn new(root: PitchClass, scale_type: ScaleType) -> Scale {
        let notes = scale_type
            .intervals()
            .iter()
            .map(|&offset| root.transpose(i32::from(offset)))
            .collect();
        Scale {
            root,
            scale_type,
            notes,
        }
    }

    /// String-boundary constructor for UI-supplied root and scale keys.
    pub fn parse(root: &str, scale_type: &str) -> Result<Scale, TheoryError> {
        Ok(Scale::new(
            PitchClass::from_name(root)?,
            ScaleType::from_name(scale_type)?,
        ))
    }

    /// The root pitch class.
    pub fn root(&self) -> PitchClass {
        self.root
    }

    /// The scale type.
    pub fn scale_type(&self) -> ScaleType {
        self.scale_type
    }

    /// Semitone offsets from the root, in template order.
    pub fn intervals(&self) -> &'static [u8] {
        self.scale_type.intervals()
    }

    /// Notes in template order, root first. Never re-sorted.
    pub fn notes(&self) -> &[PitchClass] {
        &self.notes
    }

    /// Canonical sharp spellings of [`Scale::notes`].
    pub fn names(&self) -> Vec<&'static str> {
        self.notes.iter().map(|pc| pc.name()).collect()
    }

    /// Number of notes in the scale.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Always false for registered templates; kept for the usual pairing
    /// with [`Scale::len`].
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Membership test on the produced note set.
    pub fn contains(&self, pc: PitchClass) -> bool {
        self.notes.contains(&pc)
    }

    /// Membership test for a spelled note; flat spellings are normalized
    /// before the check, so `"Bb"` matches a scale displaying `A#`.
    pub fn contains_name(&self, name: &str) -> Result<bool, TheoryError> {
        Ok(self.contains(PitchClass::from_name(name)?))
    }

    /// 1-based scale degree of a note, if present.
    pub fn degree_of(&self, pc: PitchClass) -> Option<usize> {
        self.notes.iter().position(|&n| n == pc).map(|i| i + 1)
    }

    /// Note at a 1-based scale degree.
    pub fn note_at_degree(&self, degree: usize) -> Option<PitchClass> {
        if degree == 0 || degree > self.notes.len() {
            return None;
        }
        Some(self.notes[degree - 1])
    }

    /// One-line description of the scale type.
    pub fn description(&self) -> &'static str {
        self.scale_type.description()
    }
}

impl Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.root, self.scale_type)
    }
}
