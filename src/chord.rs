//! Chord catalog and concrete chord voicing.
//!
//! Template offsets above 11 denote compound tones; a tone's octave is the
//! base octave plus however many full octaves its offset spans, so a ninth
//! (offset 14) lands one octave above the root.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::interval::any_dissonant;
use crate::note::{Note, PitchClass, BASE_OCTAVE, SEMITONES};

/// Registered chord templates, triads through ninth extensions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordType {
    /// Major triad.
    Major,
    /// Minor triad.
    Minor,
    /// Diminished triad.
    Diminished,
    /// Augmented triad.
    Augmented,
    /// Suspended second.
    Sus2,
    /// Suspended fourth.
    Sus4,
    /// Major triad with added sixth.
    Major6,
    /// Minor triad with added sixth.
    Minor6,
    /// Dominant seventh.
    Dominant7,
    /// Major seventh.
    Major7,
    /// Minor seventh.
    Minor7,
    /// Minor triad with major seventh.
    MinorMajor7,
    /// Fully diminished seventh.
    Diminished7,
    /// Half-diminished seventh.
    HalfDiminished7,
    /// Augmented triad with major seventh.
    AugmentedMajor7,
    /// Dominant ninth.
    Dominant9,
    /// Major ninth.
    Major9,
    /// Minor ninth.
    Minor9,
    /// Major triad with added ninth, no seventh.
    Add9,
}

impl ChordType {
    /// All registered chord types, in catalog order (simple before extended).
    ///
    /// This order is the documented tie-break for identification: when two
    /// templates match the same note set from the same root, the earlier
    /// entry wins.
    pub const ALL: [ChordType; 19] = [
        ChordType::Major,
        ChordType::Minor,
        ChordType::Diminished,
        ChordType::Augmented,
        ChordType::Sus2,
        ChordType::Sus4,
        ChordType::Major6,
        ChordType::Minor6,
        ChordType::Dominant7,
        ChordType::Major7,
        ChordType::Minor7,
        ChordType::MinorMajor7,
        ChordType::Diminished7,
        ChordType::HalfDiminished7,
        ChordType::AugmentedMajor7,
        ChordType::Dominant9,
        ChordType::Major9,
        ChordType::Minor9,
        ChordType::Add9,
    ];

    /// Semitone offsets from the root, in voicing order. Values above 11
    /// place the tone in a higher octave.
    pub fn intervals(self) -> &'static [u8] {
        match self {
            ChordType::Major => &[0, 4, 7],
            ChordType::Minor => &[0, 3, 7],
            ChordType::Diminished => &[0, 3, 6],
            ChordType::Augmented => &[0, 4, 8],
            ChordType::Sus2 => &[0, 2, 7],
            ChordType::Sus4 => &[0, 5, 7],
            ChordType::Major6 => &[0, 4, 7, 9],
            ChordType::Minor6 => &[0, 3, 7, 9],
            ChordType::Dominant7 => &[0, 4, 7, 10],
            ChordType::Major7 => &[0, 4, 7, 11],
            ChordType::Minor7 => &[0, 3, 7, 10],
            ChordType::MinorMajor7 => &[0, 3, 7, 11],
            ChordType::Diminished7 => &[0, 3, 6, 9],
            ChordType::HalfDiminished7 => &[0, 3, 6, 10],
            ChordType::AugmentedMajor7 => &[0, 4, 8, 11],
            ChordType::Dominant9 => &[0, 4, 7, 10, 14],
            ChordType::Major9 => &[0, 4, 7, 11, 14],
            ChordType::Minor9 => &[0, 3, 7, 10, 14],
            ChordType::Add9 => &[0, 4, 7, 14],
        }
    }

    /// Suffix appended to the root name, e.g. `"m7"` in `Cm7`.
    pub fn symbol(self) -> &'static str {
        match self {
            ChordType::Major => "",
            ChordType::Minor => "m",
            ChordType::Diminished => "dim",
            ChordType::Augmented => "aug",
            ChordType::Sus2 => "sus2",
            ChordType::Sus4 => "sus4",
            ChordType::Major6 => "6",
            ChordType::Minor6 => "m6",
            ChordType::Dominant7 => "7",
            ChordType::Major7 => "maj7",
            ChordType::Minor7 => "m7",
            ChordType::MinorMajor7 => "mMaj7",
            ChordType::Diminished7 => "dim7",
            ChordType::HalfDiminished7 => "m7b5",
            ChordType::AugmentedMajor7 => "augMaj7",
            ChordType::Dominant9 => "9",
            ChordType::Major9 => "maj9",
            ChordType::Minor9 => "m9",
            ChordType::Add9 => "add9",
        }
    }

    /// Full descriptive name.
    pub fn name(self) -> &'static str {
        match self {
            ChordType::Major => "Major",
            ChordType::Minor => "Minor",
            ChordType::Diminished => "Diminished",
            ChordType::Augmented => "Augmented",
            ChordType::Sus2 => "Suspended Second",
            ChordType::Sus4 => "Suspended Fourth",
            ChordType::Major6 => "Major Sixth",
            ChordType::Minor6 => "Minor Sixth",
            ChordType::Dominant7 => "Dominant Seventh",
            ChordType::Major7 => "Major Seventh",
            ChordType::Minor7 => "Minor Seventh",
            ChordType::MinorMajor7 => "Minor-Major Seventh",
            ChordType::Diminished7 => "Diminished Seventh",
            ChordType::HalfDiminished7 => "Half-Diminished Seventh",
            ChordType::AugmentedMajor7 => "Augmented Major Seventh",
            ChordType::Dominant9 => "Dominant Ninth",
            ChordType::Major9 => "Major Ninth",
            ChordType::Minor9 => "Minor Ninth",
            ChordType::Add9 => "Added Ninth",
        }
    }

    /// Scale-degree formula string, e.g. `"1-b3-5-b7"`.
    pub fn formula(self) -> &'static str {
        match self {
            ChordType::Major => "1-3-5",
            ChordType::Minor => "1-b3-5",
            ChordType::Diminished => "1-b3-b5",
            ChordType::Augmented => "1-3-#5",
            ChordType::Sus2 => "1-2-5",
            ChordType::Sus4 => "1-4-5",
            ChordType::Major6 => "1-3-5-6",
            ChordType::Minor6 => "1-b3-5-6",
            ChordType::Dominant7 => "1-3-5-b7",
            ChordType::Major7 => "1-3-5-7",
            ChordType::Minor7 => "1-b3-5-b7",
            ChordType::MinorMajor7 => "1-b3-5-7",
            ChordType::Diminished7 => "1-b3-b5-bb7",
            ChordType::HalfDiminished7 => "1-b3-b5-b7",
            ChordType::AugmentedMajor7 => "1-3-#5-7",
            ChordType::Dominant9 => "1-3-5-b7-9",
            ChordType::Major9 => "1-3-5-7-9",
            ChordType::Minor9 => "1-b3-5-b7-9",
            ChordType::Add9 => "1-3-5-9",
        }
    }

    /// Resolve a catalog key such as `"major"`, `"m7b5"` or `"dominant7"`.
    pub fn from_name(name: &str) -> Result<ChordType, TheoryError> {
        let canon: String = name
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        let ct = match canon.as_str() {
            "major" | "maj" => ChordType::Major,
            "minor" | "min" | "m" => ChordType::Minor,
            "diminished" | "dim" => ChordType::Diminished,
            "augmented" | "aug" => ChordType::Augmented,
            "sus2" | "suspendedsecond" => ChordType::Sus2,
            "sus4" | "suspendedfourth" | "sus" => ChordType::Sus4,
            "major6" | "maj6" | "6" => ChordType::Major6,
            "minor6" | "min6" | "m6" => ChordType::Minor6,
            "dominant7" | "dom7" | "7" => ChordType::Dominant7,
            "major7" | "maj7" => ChordType::Major7,
            "minor7" | "min7" | "m7" => ChordType::Minor7,
            "minormajor7" | "minmaj7" | "mmaj7" => ChordType::MinorMajor7,
            "diminished7" | "dim7" => ChordType::Diminished7,
            "halfdiminished7" | "halfdiminished" | "m7b5" => ChordType::HalfDiminished7,
            "augmentedmajor7" | "augmaj7" => ChordType::AugmentedMajor7,
            "dominant9" | "dom9" | "9" => ChordType::Dominant9,
            "major9" | "maj9" => ChordType::Major9,
            "minor9" | "min9" | "m9" => ChordType::Minor9,
            "add9" | "added9" | "addedninth" => ChordType::Add9,
            _ => {
                return Err(TheoryError::UnknownChordType {
                    name: name.to_string(),
                })
            }
        };
        Ok(ct)
    }
}

impl Display for ChordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A chord voiced at a concrete octave.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chord {
    root: PitchClass,
    chord_type: ChordType,
    notes: Vec<Note>,
}

impl Chord {
    /// Voice a chord at the default base octave (4).
    pub fn new(root: PitchClass, chord_type: ChordType) -> Chord {
        Chord::voiced_at(root, chord_type, BASE_OCTAVE)
    }

    /// Voice a chord at an explicit base octave. Each tone's octave is the
    /// base plus `offset / 12`, so compound offsets shift up automatically.
    pub fn voiced_at(root: PitchClass, chord_type: ChordType, octave: i32) -> Chord {
        let notes = chord_type
            .intervals()
            .iter()
            .map(|&offset| {
                Note::new(
                    root.transpose(i32::from(offset)),
                    octave + i32::from(offset) / SEMITONES as i32,
                )
            })
            .collect();
        Chord {
            root,
            chord_type,
            notes,
        }
    }

    /// String-boundary constructor for UI-supplied root and chord keys.
    pub fn parse(root: &str, chord_type: &str) -> Result<Chord, TheoryError> {
        Ok(Chord::new(
            PitchClass::from_name(root)?,
            ChordType::from_name(chord_type)?,
        ))
    }

    /// The root pitch class.
    pub fn root(&self) -> PitchClass {
        self.root
    }

    /// The chord type.
    pub fn kind(&self) -> ChordType {
        self.chord_type
    }

    /// Tones in template order, with concrete octaves.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Pitch classes of the tones, in template order.
    pub fn pitch_classes(&self) -> Vec<PitchClass> {
        self.notes.iter().map(|n| n.pitch_class).collect()
    }

    /// Canonical sharp spellings of the tones, in template order.
    pub fn names(&self) -> Vec<&'static str> {
        self.notes.iter().map(|n| n.pitch_class.name()).collect()
    }

    /// Equal-tempered frequency of each tone, in template order.
    pub fn frequencies(&self) -> Vec<f64> {
        self.notes.iter().map(|n| n.frequency()).collect()
    }

    /// Compact symbol, root plus suffix, e.g. `"Cm7"`.
    pub fn symbol(&self) -> String {
        format!("{}{}", self.root.name(), self.chord_type.symbol())
    }

    /// Full descriptive name, e.g. `"C Minor Seventh"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.root.name(), self.chord_type.name())
    }

    /// Scale-degree formula of the template.
    pub fn formula(&self) -> &'static str {
        self.chord_type.formula()
    }

    /// Root-relative dissonance tag: true if any template offset reduces to
    /// a second, seventh, or tritone.
    pub fn is_dissonant(&self) -> bool {
        any_dissonant(self.chord_type.intervals().iter().copied())
    }
}

impl Display for Chord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c_major_triad() {
        let chord = Chord::new(PitchClass::C, ChordType::Major);
        assert_eq!(chord.names(), vec!["C", "E", "G"]);
        assert_eq!(chord.symbol(), "C");
        assert_eq!(chord.full_name(), "C Major");
        assert_eq!(chord.formula(), "1-3-5");
        assert!(!chord.is_dissonant());
    }

    #[test]
    fn c_dominant_seventh() {
        let chord = Chord::new(PitchClass::C, ChordType::Dominant7);
        assert_eq!(chord.names(), vec!["C", "E", "G", "A#"]);
        assert_eq!(chord.symbol(), "C7");
        assert!(chord.is_dissonant());
    }

    #[test]
    fn tones_below_an_octave_stay_in_base_octave() {
        let chord = Chord::new(PitchClass::C, ChordType::Major7);
        for note in chord.notes() {
            assert_eq!(note.octave, 4);
        }
    }

    #[test]
    fn compound_ninth_lands_one_octave_up() {
        let chord = Chord::new(PitchClass::C, ChordType::Dominant9);
        let ninth = chord.notes().last().unwrap();
        assert_eq!(ninth.pitch_class, PitchClass::D);
        assert_eq!(ninth.octave, 5);
    }

    #[test]
    fn wrapped_tone_octave_follows_offset_not_pitch() {
        // G major7: F# has offset 11 < 12, so it stays in the base octave
        // even though its pitch class wrapped past C.
        let chord = Chord::new(PitchClass::G, ChordType::Major7);
        let seventh = chord.notes().last().unwrap();
        assert_eq!(seventh.pitch_class, PitchClass::Fs);
        assert_eq!(seventh.octave, 4);
    }

    #[test]
    fn explicit_voicing_octave() {
        let chord = Chord::voiced_at(PitchClass::A, ChordType::Minor, 2);
        assert_eq!(chord.notes()[0].octave, 2);
        assert_eq!(chord.notes()[0].midi(), 45);
    }

    #[test]
    fn frequencies_are_equal_tempered_from_root() {
        // C root: no tone wraps past the octave boundary, so the tempered
        // ratios read straight off the offsets.
        let chord = Chord::new(PitchClass::C, ChordType::Major);
        let freqs = chord.frequencies();
        let root = PitchClass::C.frequency(4);
        assert_eq!(freqs[0], root);
        // Major third = 2^(4/12), perfect fifth = 2^(7/12).
        assert!((freqs[1] - root * 2f64.powf(4.0 / 12.0)).abs() < 1e-9);
        assert!((freqs[2] - root * 2f64.powf(7.0 / 12.0)).abs() < 1e-9);
    }

    #[test]
    fn wrapped_tone_frequencies_stay_in_the_base_octave() {
        // A major: C# wraps past C, so it sounds as C#4 below the A4 root,
        // an octave under the tempered third.
        let chord = Chord::new(PitchClass::A, ChordType::Major);
        let freqs = chord.frequencies();
        assert_eq!(freqs[0], 440.0);
        assert!((freqs[1] - 440.0 * 2f64.powf(4.0 / 12.0) / 2.0).abs() < 1e-9);
        assert!((freqs[2] - 440.0 * 2f64.powf(7.0 / 12.0) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn every_template_is_rooted_and_at_least_a_triad() {
        for ct in ChordType::ALL {
            let intervals = ct.intervals();
            assert_eq!(intervals[0], 0, "{ct:?}");
            assert!(intervals.len() >= 3, "{ct:?}");
        }
    }

    #[test]
    fn parse_boundary() {
        let chord = Chord::parse("Bb", "m7").unwrap();
        assert_eq!(chord.symbol(), "A#m7");
        assert!(matches!(
            Chord::parse("C", "quartal"),
            Err(TheoryError::UnknownChordType { .. })
        ));
    }

    #[test]
    fn catalog_symbols_resolve() {
        for ct in ChordType::ALL {
            if ct == ChordType::Major {
                // The empty major suffix is not a parseable key.
                continue;
            }
            assert_eq!(ChordType::from_name(ct.symbol()).unwrap(), ct);
        }
    }
}
