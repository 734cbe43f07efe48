//! Interval classification over the 13 canonical equal-tempered intervals.
//!
//! The just-intonation ratios are descriptive metadata only; all frequency
//! math elsewhere in the crate is equal-tempered.

use serde::{Deserialize, Serialize};

use crate::note::{PitchClass, SEMITONES};

/// Perceptual stability classes of an interval.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Consonance {
    /// Unison, fourth, fifth, octave.
    Perfect,
    /// Thirds and sixths.
    Consonant,
    /// Seconds, sevenths, and the tritone.
    Dissonant,
}

/// One of the 13 canonical intervals, unison through octave.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Interval {
    /// Width in equal-tempered semitones, 0-12.
    pub semitones: u8,
    /// Full display name.
    pub name: &'static str,
    /// Conventional abbreviation.
    pub abbrev: &'static str,
    /// Just-intonation ratio, for display only.
    pub just_ratio: &'static str,
    /// Stability classification.
    pub consonance: Consonance,
}

/// Canonical interval table, total over 0..=12 semitones.
pub const INTERVALS: [Interval; 13] = [
    Interval {
        semitones: 0,
        name: "Unison",
        abbrev: "P1",
        just_ratio: "1:1",
        consonance: Consonance::Perfect,
    },
    Interval {
        semitones: 1,
        name: "Minor Second",
        abbrev: "m2",
        just_ratio: "16:15",
        consonance: Consonance::Dissonant,
    },
    Interval {
        semitones: 2,
        name: "Major Second",
        abbrev: "M2",
        just_ratio: "9:8",
        consonance: Consonance::Dissonant,
    },
    Interval {
        semitones: 3,
        name: "Minor Third",
        abbrev: "m3",
        just_ratio: "6:5",
        consonance: Consonance::Consonant,
    },
    Interval {
        semitones: 4,
        name: "Major Third",
        abbrev: "M3",
        just_ratio: "5:4",
        consonance: Consonance::Consonant,
    },
    Interval {
        semitones: 5,
        name: "Perfect Fourth",
        abbrev: "P4",
        just_ratio: "4:3",
        consonance: Consonance::Perfect,
    },
    Interval {
        semitones: 6,
        name: "Tritone",
        abbrev: "TT",
        just_ratio: "45:32",
        consonance: Consonance::Dissonant,
    },
    Interval {
        semitones: 7,
        name: "Perfect Fifth",
        abbrev: "P5",
        just_ratio: "3:2",
        consonance: Consonance::Perfect,
    },
    Interval {
        semitones: 8,
        name: "Minor Sixth",
        abbrev: "m6",
        just_ratio: "8:5",
        consonance: Consonance::Consonant,
    },
    Interval {
        semitones: 9,
        name: "Major Sixth",
        abbrev: "M6",
        just_ratio: "5:3",
        consonance: Consonance::Consonant,
    },
    Interval {
        semitones: 10,
        name: "Minor Seventh",
        abbrev: "m7",
        just_ratio: "16:9",
        consonance: Consonance::Dissonant,
    },
    Interval {
        semitones: 11,
        name: "Major Seventh",
        abbrev: "M7",
        just_ratio: "15:8",
        consonance: Consonance::Dissonant,
    },
    Interval {
        semitones: 12,
        name: "Octave",
        abbrev: "P8",
        just_ratio: "2:1",
        consonance: Consonance::Perfect,
    },
];

/// Semitone steps (mod 12) that make a sonority dissonant.
pub(crate) const DISSONANT_STEPS: [u8; 5] = [1, 2, 6, 10, 11];

/// True if any step, reduced mod 12, lands on a dissonant interval.
pub(crate) fn any_dissonant<I: IntoIterator<Item = u8>>(steps: I) -> bool {
    steps
        .into_iter()
        .any(|s| DISSONANT_STEPS.contains(&(s % SEMITONES as u8)))
}

impl Interval {
    /// Look up a canonical interval by exact semitone count (0..=12).
    pub fn from_semitones(semitones: u8) -> Option<&'static Interval> {
        INTERVALS.get(semitones as usize)
    }

    /// Directional interval from `a` to `b`, wrapped into [0,11].
    ///
    /// A true octave collapses to a unison under this reduction; the 12
    /// semitone entry is reachable only through [`Interval::from_semitones`].
    pub fn between(a: PitchClass, b: PitchClass) -> &'static Interval {
        let semitones =
            (usize::from(b.index()) + SEMITONES - usize::from(a.index())) % SEMITONES;
        &INTERVALS[semitones]
    }

    /// Equal-tempered frequency ratio `2^(n/12)`, rounded to four decimals.
    pub fn equal_tempered_ratio(&self) -> f64 {
        let ratio = 2f64.powf(f64::from(self.semitones) / 12.0);
        (ratio * 10_000.0).round() / 10_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_total_over_0_to_12() {
        for (i, entry) in INTERVALS.iter().enumerate() {
            assert_eq!(entry.semitones as usize, i);
        }
        assert!(Interval::from_semitones(12).is_some());
        assert!(Interval::from_semitones(13).is_none());
    }

    #[test]
    fn between_stays_in_range() {
        for a in PitchClass::ALL {
            for b in PitchClass::ALL {
                let iv = Interval::between(a, b);
                assert!(iv.semitones < 12);
            }
        }
    }

    #[test]
    fn unison_on_equal_classes() {
        for pc in PitchClass::ALL {
            assert_eq!(Interval::between(pc, pc).semitones, 0);
        }
    }

    #[test]
    fn fifth_from_c_to_g() {
        let iv = Interval::between(PitchClass::C, PitchClass::G);
        assert_eq!(iv.semitones, 7);
        assert_eq!(iv.abbrev, "P5");
        assert_eq!(iv.consonance, Consonance::Perfect);
        assert_eq!(iv.equal_tempered_ratio(), 1.4983);
    }

    #[test]
    fn direction_matters() {
        // G up to C is a fourth, not a fifth.
        assert_eq!(Interval::between(PitchClass::G, PitchClass::C).semitones, 5);
    }

    #[test]
    fn tritone_is_dissonant() {
        let iv = Interval::between(PitchClass::C, PitchClass::Fs);
        assert_eq!(iv.name, "Tritone");
        assert_eq!(iv.consonance, Consonance::Dissonant);
    }

    #[test]
    fn octave_entry_ratio() {
        let octave = Interval::from_semitones(12).unwrap();
        assert_eq!(octave.equal_tempered_ratio(), 2.0);
        assert_eq!(octave.just_ratio, "2:1");
    }

    #[test]
    fn dissonance_step_set() {
        assert!(any_dissonant([4, 7, 10])); // dominant seventh
        assert!(!any_dissonant([4, 7])); // major triad
        assert!(any_dissonant([13])); // reduced mod 12 to a minor second
    }
}
