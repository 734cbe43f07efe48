//! Chord identification from sounding notes.
//!
//! Two strategies share one result shape:
//!
//! - [`identify_chord_exhaustive`] tries every sounding pitch class as a
//!   candidate root against every chord template. Used for theory queries
//!   where accuracy beats latency.
//! - [`identify_chord_fast`] measures intervals from the lowest sounding
//!   note only and matches a small exact-set table. Used for real-time
//!   display where a wrong inversion label is acceptable.
//!
//! Failure to identify is a result value (confidence 0), never an error.

use std::fmt::Display;

use serde::Serialize;
use tracing::debug;

use crate::chord::ChordType;
use crate::error::TheoryError;
use crate::interval::any_dissonant;
use crate::note::{Note, PitchClass, SEMITONES};

/// A sounding note as reported by a caller: either a spelled name or a raw
/// frequency in hertz.
#[derive(Debug, Clone, PartialEq)]
pub enum NoteRef {
    /// A spelled pitch, e.g. `"C#"` or `"Bb"`; an octave suffix such as
    /// `"A4"` is accepted.
    Name(String),
    /// A frequency in hertz, snapped to the nearest tempered pitch.
    Frequency(f64),
}

impl NoteRef {
    /// Pitch class of this reference, normalizing spelling or snapping
    /// frequency.
    pub fn pitch_class(&self) -> Result<PitchClass, TheoryError> {
        match self {
            NoteRef::Name(name) => Ok(Note::parse(name)?.pitch_class),
            NoteRef::Frequency(freq) => PitchClass::from_frequency(*freq),
        }
    }

    /// Concrete frequency of this reference. Named notes without an octave
    /// resolve at the base octave (4).
    pub fn frequency(&self) -> Result<f64, TheoryError> {
        match self {
            NoteRef::Name(name) => Ok(Note::parse(name)?.frequency()),
            NoteRef::Frequency(freq) => {
                if !freq.is_finite() || *freq <= 0.0 {
                    return Err(TheoryError::InvalidFrequency { value: *freq });
                }
                Ok(*freq)
            }
        }
    }
}

impl From<&str> for NoteRef {
    fn from(name: &str) -> NoteRef {
        NoteRef::Name(name.to_string())
    }
}

impl From<String> for NoteRef {
    fn from(name: String) -> NoteRef {
        NoteRef::Name(name)
    }
}

impl From<f64> for NoteRef {
    fn from(freq: f64) -> NoteRef {
        NoteRef::Frequency(freq)
    }
}

impl From<PitchClass> for NoteRef {
    fn from(pc: PitchClass) -> NoteRef {
        NoteRef::Name(pc.name().to_string())
    }
}

impl From<Note> for NoteRef {
    fn from(note: Note) -> NoteRef {
        NoteRef::Frequency(note.frequency())
    }
}

/// Unique pitch classes of the input, first-seen order preserved.
pub(crate) fn unique_pitch_classes(
    notes: &[NoteRef],
) -> Result<Vec<PitchClass>, TheoryError> {
    let mut seen = [false; SEMITONES];
    let mut out = Vec::with_capacity(notes.len().min(SEMITONES));
    for note in notes {
        let pc = note.pitch_class()?;
        if !seen[pc.index() as usize] {
            seen[pc.index() as usize] = true;
            out.push(pc);
        }
    }
    Ok(out)
}

/// Result of a chord-identification query, shared by both strategies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChordMatch {
    /// Root of the identified chord, if any.
    pub root: Option<PitchClass>,
    /// Identified chord type, if it maps onto the main catalog.
    pub kind: Option<ChordType>,
    /// Display symbol, `"Unknown"` when nothing matched.
    pub symbol: String,
    /// 1.0 on an exact template match, 0.0 otherwise.
    pub confidence: f64,
    /// The unique pitch classes that were analyzed, first-seen order.
    pub pitch_classes: Vec<PitchClass>,
    /// True if any interval between sounding notes reduces to a second,
    /// seventh, or tritone.
    pub dissonant: bool,
}

impl ChordMatch {
    fn unknown(pitch_classes: Vec<PitchClass>) -> ChordMatch {
        let dissonant = pairwise_dissonant(&pitch_classes);
        ChordMatch {
            root: None,
            kind: None,
            symbol: "Unknown".to_string(),
            confidence: 0.0,
            pitch_classes,
            dissonant,
        }
    }

    /// True if a chord was identified.
    pub fn is_match(&self) -> bool {
        self.root.is_some()
    }
}

impl Display for ChordMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.symbol)
    }
}

fn pairwise_dissonant(pcs: &[PitchClass]) -> bool {
    pcs.iter().enumerate().any(|(i, &a)| {
        pcs[i + 1..]
            .iter()
            .any(|&b| any_dissonant([(b.index() + SEMITONES as u8 - a.index()) % SEMITONES as u8]))
    })
}

/// Sorted unique mod-12 offset set of a chord template.
fn template_offsets(kind: ChordType) -> Vec<u8> {
    let mut offsets: Vec<u8> = kind
        .intervals()
        .iter()
        .map(|&o| o % SEMITONES as u8)
        .collect();
    offsets.sort_unstable();
    offsets.dedup();
    offsets
}

/// Identify a chord by trying every sounding pitch class as the root.
///
/// Candidate roots are tried in canonical chromatic order (C first), and
/// templates in catalog order; the first exact offset-set match wins with
/// confidence 1.0. Fewer than 2 unique classes, or no match, yields an
/// Unknown result. All templates have at least three tones, so a dyad never
/// identifies.
pub fn identify_chord_exhaustive(notes: &[NoteRef]) -> Result<ChordMatch, TheoryError> {
    let pcs = unique_pitch_classes(notes)?;
    if pcs.len() < 2 {
        return Ok(ChordMatch::unknown(pcs));
    }

    let mut present = [false; SEMITONES];
    for pc in &pcs {
        present[pc.index() as usize] = true;
    }

    for root in PitchClass::ALL {
        if !present[root.index() as usize] {
            continue;
        }
        let mut offsets: Vec<u8> = pcs
            .iter()
            .map(|pc| (pc.index() + SEMITONES as u8 - root.index()) % SEMITONES as u8)
            .collect();
        offsets.sort_unstable();

        for kind in ChordType::ALL {
            if template_offsets(kind) == offsets {
                debug!(root = %root, kind = %kind, "chord identified");
                return Ok(ChordMatch {
                    root: Some(root),
                    kind: Some(kind),
                    symbol: format!("{}{}", root.name(), kind.symbol()),
                    confidence: 1.0,
                    dissonant: any_dissonant(offsets.iter().copied()),
                    pitch_classes: pcs,
                });
            }
        }
    }

    debug!(classes = pcs.len(), "no chord template matched");
    Ok(ChordMatch::unknown(pcs))
}

/// Small exact-set table for the fast path: intervals above the lowest note
/// (sorted, deduplicated, root excluded) against symbol suffix and, where it
/// exists, the main-catalog type. Dyads are allowed here.
const FAST_TEMPLATES: &[(&[u8], &str, Option<ChordType>)] = &[
    (&[7], "5", None),
    (&[4, 7], "", Some(ChordType::Major)),
    (&[3, 7], "m", Some(ChordType::Minor)),
    (&[3, 6], "dim", Some(ChordType::Diminished)),
    (&[4, 8], "aug", Some(ChordType::Augmented)),
    (&[2, 7], "sus2", Some(ChordType::Sus2)),
    (&[5, 7], "sus4", Some(ChordType::Sus4)),
    (&[4, 7, 9], "6", Some(ChordType::Major6)),
    (&[4, 7, 10], "7", Some(ChordType::Dominant7)),
    (&[4, 7, 11], "maj7", Some(ChordType::Major7)),
    (&[3, 7, 10], "m7", Some(ChordType::Minor7)),
    (&[3, 6, 9], "dim7", Some(ChordType::Diminished7)),
];

/// Identify a chord relative to the lowest sounding note only.
///
/// This is the low-latency strategy for real-time display: it never searches
/// alternative roots, so an inversion reads as whatever shape it makes above
/// the bass. Named notes without an octave resolve at octave 4.
pub fn identify_chord_fast(notes: &[NoteRef]) -> Result<ChordMatch, TheoryError> {
    if notes.is_empty() {
        return Ok(ChordMatch::unknown(Vec::new()));
    }

    let mut resolved = Vec::with_capacity(notes.len());
    for note in notes {
        resolved.push((note.frequency()?, note.pitch_class()?));
    }
    let (low_freq, low_pc) = resolved
        .iter()
        .copied()
        .fold(resolved[0], |best, cur| if cur.0 < best.0 { cur } else { best });

    let mut steps: Vec<u8> = resolved
        .iter()
        .map(|&(freq, _)| {
            ((12.0 * (freq / low_freq).log2()).round() as i64).rem_euclid(SEMITONES as i64) as u8
        })
        .filter(|&s| s != 0)
        .collect();
    steps.sort_unstable();
    steps.dedup();

    let mut seen = [false; SEMITONES];
    let mut pcs = Vec::with_capacity(resolved.len().min(SEMITONES));
    for &(_, pc) in &resolved {
        if !seen[pc.index() as usize] {
            seen[pc.index() as usize] = true;
            pcs.push(pc);
        }
    }
    let dissonant = any_dissonant(steps.iter().copied());

    if steps.is_empty() {
        // Unisons and octaves of a single class.
        return Ok(ChordMatch::unknown(pcs));
    }

    for &(template, suffix, kind) in FAST_TEMPLATES {
        if template == steps.as_slice() {
            return Ok(ChordMatch {
                root: Some(low_pc),
                kind,
                symbol: format!("{}{}", low_pc.name(), suffix),
                confidence: 1.0,
                pitch_classes: pcs,
                dissonant,
            });
        }
    }

    Ok(ChordMatch {
        root: None,
        kind: None,
        symbol: "Unknown".to_string(),
        confidence: 0.0,
        pitch_classes: pcs,
        dissonant,
    })
}
