//! # theory_engine
//!
//! A closed-form music-theory engine: note/frequency conversion, interval
//! analysis, scale and chord construction, diatonic harmony, chord
//! identification, key detection, and modulation planning.
//!
//! Every operation is a pure, terminating computation over fixed catalog
//! tables; there is no I/O and no shared mutable state, so the whole crate
//! is safe to call concurrently without locking. Callers (an audio source,
//! a renderer, an input adapter) supply roots, scale/chord keys, and
//! sounding notes, and consume the structured results.
//!
//! ## Example
//! ```rust
//! use theory_engine::{
//!     detect_key, identify_chord_exhaustive, Chord, ChordType, NoteRef, PitchClass, Scale,
//!     ScaleType,
//! };
//!
//! fn run() -> Result<(), theory_engine::TheoryError> {
//!     // Spell out a scale for display.
//!     let scale = Scale::new(PitchClass::C, ScaleType::Major);
//!     assert_eq!(scale.names(), vec!["C", "D", "E", "F", "G", "A", "B"]);
//!
//!     // Voice a chord and hand its frequencies to a synth.
//!     let chord = Chord::new(PitchClass::C, ChordType::Dominant7);
//!     assert_eq!(chord.symbol(), "C7");
//!     assert_eq!(chord.frequencies().len(), 4);
//!
//!     // Identify what the user is holding down.
//!     let held = [NoteRef::from("C"), NoteRef::from("Eb"), NoteRef::from("G")];
//!     let found = identify_chord_exhaustive(&held)?;
//!     assert_eq!(found.kind, Some(ChordType::Minor));
//!
//!     // Guess the key from recently played notes.
//!     let candidates = detect_key(&held)?;
//!     assert!(!candidates.is_empty());
//!     Ok(())
//! }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// Chord catalog and voicing.
pub use chord::{Chord, ChordType};

/// Error taxonomy.
pub use error::TheoryError;

/// Diatonic harmony and named progressions.
pub use harmony::{diatonic_chords, DiatonicChord, Progression, PROGRESSIONS};

/// Chord identification strategies.
pub use identify::{identify_chord_exhaustive, identify_chord_fast, ChordMatch, NoteRef};

/// Interval table and classification.
pub use interval::{Consonance, Interval, INTERVALS};

/// Key detection.
pub use key_detect::{detect_key, KeyCandidate, KEY_SCALE_CANDIDATES};

/// Modulation planning.
pub use modulation::{
    find_pivot_chords, suggest_modulation, KeyRelationship, ModulationSuggestion, PivotChord,
};

/// Pitch classes and frequency math.
pub use note::{Note, PitchClass, A4_HZ, A4_MIDI, BASE_OCTAVE, SEMITONES};

/// Scale catalog and construction.
pub use scale::{Scale, ScaleType};

/// Chord templates and concrete voicings.
pub mod chord;

/// Shared error taxonomy.
pub mod error;

/// Diatonic chords, Roman numerals, and progressions.
pub mod harmony;

/// Chord identification from sounding notes.
pub mod identify;

/// Canonical intervals and consonance classes.
pub mod interval;

/// Key detection scoring.
pub mod key_detect;

/// Pivot chords and modulation suggestions.
pub mod modulation;

/// Pitch classes, notes, and equal temperament.
pub mod note;

/// Scale templates and membership.
pub mod scale;
