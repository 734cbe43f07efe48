//! Key detection by best-fit scoring over a fixed candidate grid.
//!
//! Every root (12) crossed with a small set of candidate scales (4) is scored
//! against the unique pitch classes the caller reports; this is a simple
//! counting heuristic, not a probabilistic model.

use std::fmt::Display;

use serde::Serialize;
use tracing::debug;

use crate::error::TheoryError;
use crate::identify::{unique_pitch_classes, NoteRef};
use crate::note::PitchClass;
use crate::scale::{Scale, ScaleType};

/// Scales considered as key candidates, in tie-break order.
pub const KEY_SCALE_CANDIDATES: [ScaleType; 4] = [
    ScaleType::Major,
    ScaleType::NaturalMinor,
    ScaleType::Dorian,
    ScaleType::Mixolydian,
];

/// Maximum number of candidates returned.
const MAX_CANDIDATES: usize = 5;

/// Weight applied to out-of-scale notes when scoring.
const UNMATCHED_PENALTY: f64 = 2.0;

/// One scored key hypothesis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyCandidate {
    /// Root of the candidate key.
    pub root: PitchClass,
    /// Scale type of the candidate key.
    pub scale_type: ScaleType,
    /// `(matched - 2 * unmatched) / total`; always positive in results.
    pub score: f64,
    /// Input classes inside the candidate scale.
    pub matched: usize,
    /// Unique input classes scored.
    pub total: usize,
}

impl KeyCandidate {
    /// Display label, e.g. `"C Major"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.root.name(), self.scale_type.name())
    }
}

impl Display for KeyCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.2})", self.label(), self.score)
    }
}

/// Score every candidate key against the sounding notes and return up to
/// five, best first.
///
/// Fewer than 2 unique pitch classes yields an empty list, as does input
/// that fits no candidate positively. Ties are broken by chromatic root
/// order, then by [`KEY_SCALE_CANDIDATES`] order; the sort is stable so that
/// rule holds through ranking.
pub fn detect_key(notes: &[NoteRef]) -> Result<Vec<KeyCandidate>, TheoryError> {
    let pcs = unique_pitch_classes(notes)?;
    if pcs.len() < 2 {
        return Ok(Vec::new());
    }
    let total = pcs.len();

    let mut candidates = Vec::new();
    for root in PitchClass::ALL {
        for scale_type in KEY_SCALE_CANDIDATES {
            let scale = Scale::new(root, scale_type);
            let matched = pcs.iter().filter(|&&pc| scale.contains(pc)).count();
            let unmatched = total - matched;
            let score =
                (matched as f64 - unmatched as f64 * UNMATCHED_PENALTY) / total as f64;
            if score > 0.0 {
                candidates.push(KeyCandidate {
                    root,
                    scale_type,
                    score,
                    matched,
                    total,
                });
            }
        }
    }

    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates.truncate(MAX_CANDIDATES);
    debug!(notes = total, candidates = candidates.len(), "key detection scored");
    Ok(candidates)
}
