//! Pitch classes, concrete notes, and equal-temperament frequency math.
//!
//! Everything here is closed-form arithmetic around the A4 = 440 Hz reference:
//! `f = 440 * 2^((midi - 69) / 12)` with `midi = (octave + 1) * 12 + class`.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;

/// Number of pitch classes in the chromatic octave.
pub const SEMITONES: usize = 12;

/// Reference tuning frequency of A4, in hertz.
pub const A4_HZ: f64 = 440.0;

/// MIDI key number of A4.
pub const A4_MIDI: i32 = 69;

/// Octave that voicings default to; C4 is middle C.
pub const BASE_OCTAVE: i32 = 4;

/// Twelve chromatic pitch classes, canonically sharp-spelled.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PitchClass {
    /// C
    C,
    /// C sharp / D flat
    Cs,
    /// D
    D,
    /// D sharp / E flat
    Ds,
    /// E
    E,
    /// F
    F,
    /// F sharp / G flat
    Fs,
    /// G
    G,
    /// G sharp / A flat
    Gs,
    /// A
    A,
    /// A sharp / B flat
    As,
    /// B
    B,
}

/// Sharp spellings in chromatic order.
const SHARP_NAMES: [&str; SEMITONES] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat spellings in chromatic order.
const FLAT_NAMES: [&str; SEMITONES] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

impl PitchClass {
    /// All pitch classes in chromatic order, starting at C.
    pub const ALL: [PitchClass; SEMITONES] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    /// Chromatic index 0-11, C = 0.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Canonicalize any integer (negative or > 11) into a pitch class.
    pub fn from_index(index: i64) -> PitchClass {
        PitchClass::ALL[index.rem_euclid(SEMITONES as i64) as usize]
    }

    /// Parse a spelled note, accepting sharps, the six flat aliases
    /// (Db, Eb, Gb, Ab, Bb, Cb) and the rarer enharmonics (Fb, E#, B#),
    /// case-insensitively.
    pub fn from_name(name: &str) -> Result<PitchClass, TheoryError> {
        let canon = name.trim().to_uppercase();
        let pc = match canon.as_str() {
            "C" | "B#" => PitchClass::C,
            "C#" | "DB" => PitchClass::Cs,
            "D" => PitchClass::D,
            "D#" | "EB" => PitchClass::Ds,
            "E" | "FB" => PitchClass::E,
            "F" | "E#" => PitchClass::F,
            "F#" | "GB" => PitchClass::Fs,
            "G" => PitchClass::G,
            "G#" | "AB" => PitchClass::Gs,
            "A" => PitchClass::A,
            "A#" | "BB" => PitchClass::As,
            "B" | "CB" => PitchClass::B,
            _ => {
                return Err(TheoryError::InvalidNoteName {
                    name: name.to_string(),
                })
            }
        };
        Ok(pc)
    }

    /// Canonical sharp spelling.
    pub fn name(self) -> &'static str {
        SHARP_NAMES[self.index() as usize]
    }

    /// Flat spelling of the same class.
    pub fn flat_name(self) -> &'static str {
        FLAT_NAMES[self.index() as usize]
    }

    /// Sharp or flat spelling per flag.
    pub fn name_with(self, use_flats: bool) -> &'static str {
        if use_flats {
            self.flat_name()
        } else {
            self.name()
        }
    }

    /// Shift by a signed number of semitones, wrapping mod 12.
    pub fn transpose(self, semitones: i32) -> PitchClass {
        PitchClass::from_index(i64::from(self.index()) + i64::from(semitones))
    }

    /// Equal-tempered frequency of this class at the given octave.
    ///
    /// Octaves are unbounded; extreme values extrapolate beyond the audible
    /// range and that is the caller's concern.
    pub fn frequency(self, octave: i32) -> f64 {
        Note::new(self, octave).frequency()
    }

    /// Snap a frequency to the nearest equal-tempered pitch class.
    ///
    /// Octave-lossy by design. Frequencies far from any tempered pitch still
    /// snap to the nearest class with no reported error margin.
    pub fn from_frequency(freq: f64) -> Result<PitchClass, TheoryError> {
        if !freq.is_finite() || freq <= 0.0 {
            return Err(TheoryError::InvalidFrequency { value: freq });
        }
        let midi = (12.0 * (freq / A4_HZ).log2() + f64::from(A4_MIDI)).round() as i64;
        Ok(PitchClass::from_index(midi))
    }
}

impl Display for PitchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A pitch class pinned to a concrete octave.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    /// The pitch class.
    pub pitch_class: PitchClass,
    /// Octave in scientific pitch notation; 4 holds middle C.
    pub octave: i32,
}

impl Note {
    /// Pin a pitch class to an octave.
    pub fn new(pitch_class: PitchClass, octave: i32) -> Note {
        Note {
            pitch_class,
            octave,
        }
    }

    /// Parse a label like `"C#4"`, `"Bb3"` or `"A-1"`. A bare pitch name
    /// defaults to octave 4.
    pub fn parse(label: &str) -> Result<Note, TheoryError> {
        let label = label.trim();
        let split = label
            .find(|c: char| c.is_ascii_digit() || c == '-')
            .unwrap_or(label.len());
        let (name, octave) = label.split_at(split);
        let pitch_class = PitchClass::from_name(name)?;
        let octave = if octave.is_empty() {
            BASE_OCTAVE
        } else {
            octave.parse().map_err(|_| TheoryError::InvalidNoteName {
                name: label.to_string(),
            })?
        };
        Ok(Note::new(pitch_class, octave))
    }

    /// MIDI-equivalent key number; C4 = 60, A4 = 69. Unbounded.
    pub fn midi(self) -> i32 {
        (self.octave + 1) * SEMITONES as i32 + i32::from(self.pitch_class.index())
    }

    /// Equal-tempered frequency in hertz.
    pub fn frequency(self) -> f64 {
        A4_HZ * 2f64.powf(f64::from(self.midi() - A4_MIDI) / 12.0)
    }
}

impl Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.pitch_class, self.octave)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sharp_names_round_trip() {
        for pc in PitchClass::ALL {
            assert_eq!(PitchClass::from_name(pc.name()).unwrap(), pc);
        }
    }

    #[test]
    fn flat_names_round_trip() {
        for pc in PitchClass::ALL {
            assert_eq!(PitchClass::from_name(pc.flat_name()).unwrap(), pc);
        }
    }

    #[test]
    fn flats_normalize_to_sharps() {
        assert_eq!(PitchClass::from_name("Db").unwrap(), PitchClass::Cs);
        assert_eq!(PitchClass::from_name("bb").unwrap(), PitchClass::As);
        assert_eq!(PitchClass::from_name("Cb").unwrap(), PitchClass::B);
        assert_eq!(PitchClass::from_name("E#").unwrap(), PitchClass::F);
    }

    #[test]
    fn bad_names_fail_fast() {
        assert!(PitchClass::from_name("H").is_err());
        assert!(PitchClass::from_name("").is_err());
        assert!(PitchClass::from_name("C##").is_err());
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(PitchClass::from_index(12), PitchClass::C);
        assert_eq!(PitchClass::from_index(-1), PitchClass::B);
        assert_eq!(PitchClass::from_index(-13), PitchClass::B);
        assert_eq!(PitchClass::from_index(25), PitchClass::Cs);
    }

    #[test]
    fn a4_is_exactly_440() {
        assert_eq!(PitchClass::A.frequency(4), 440.0);
    }

    #[test]
    fn frequency_is_monotonic_in_octave() {
        for pc in PitchClass::ALL {
            for octave in -1..8 {
                assert!(pc.frequency(octave) < pc.frequency(octave + 1));
            }
        }
    }

    #[test]
    fn frequency_round_trips_to_pitch_class() {
        for pc in PitchClass::ALL {
            for octave in 0..8 {
                let freq = pc.frequency(octave);
                assert_eq!(PitchClass::from_frequency(freq).unwrap(), pc);
            }
        }
    }

    #[test]
    fn octave_doublings_of_a_stay_a() {
        for k in -3..=4 {
            let freq = 440.0 * 2f64.powi(k);
            assert_eq!(PitchClass::from_frequency(freq).unwrap(), PitchClass::A);
        }
    }

    #[test]
    fn detuned_frequency_snaps_to_nearest() {
        // 5 cents above A4
        assert_eq!(
            PitchClass::from_frequency(441.3).unwrap(),
            PitchClass::A
        );
    }

    #[test]
    fn non_positive_frequency_is_rejected() {
        assert!(PitchClass::from_frequency(0.0).is_err());
        assert!(PitchClass::from_frequency(-440.0).is_err());
        assert!(PitchClass::from_frequency(f64::NAN).is_err());
    }

    #[test]
    fn midi_numbers() {
        assert_eq!(Note::new(PitchClass::C, 4).midi(), 60);
        assert_eq!(Note::new(PitchClass::A, 4).midi(), 69);
        assert_eq!(Note::new(PitchClass::C, -1).midi(), 0);
    }

    #[test]
    fn note_labels_parse() {
        assert_eq!(
            Note::parse("C#4").unwrap(),
            Note::new(PitchClass::Cs, 4)
        );
        assert_eq!(
            Note::parse("Bb3").unwrap(),
            Note::new(PitchClass::As, 3)
        );
        assert_eq!(Note::parse("A").unwrap(), Note::new(PitchClass::A, 4));
        assert_eq!(
            Note::parse("G-1").unwrap(),
            Note::new(PitchClass::G, -1)
        );
        assert!(Note::parse("4").is_err());
        assert!(Note::parse("Cx4").is_err());
    }

    #[test]
    fn transpose_wraps() {
        assert_eq!(PitchClass::C.transpose(2), PitchClass::D);
        assert_eq!(PitchClass::B.transpose(1), PitchClass::C);
        assert_eq!(PitchClass::C.transpose(-1), PitchClass::B);
        assert_eq!(PitchClass::G.transpose(12), PitchClass::G);
    }
}
