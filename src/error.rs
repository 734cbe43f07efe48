//! Error taxonomy shared by every string- and frequency-consuming entry point.
//!
//! All variants are local validation failures on malformed input; nothing here
//! is transient or retryable. A failed chord identification or an empty key
//! detection is a *result value*, never an error.

use thiserror::Error;

/// Errors produced by the theory engine.
#[derive(Debug, Error)]
pub enum TheoryError {
    /// A spelled note was not one of the recognized sharp or flat spellings.
    #[error("unrecognized note name `{name}`")]
    InvalidNoteName {
        /// The spelling as received, before normalization.
        name: String,
    },

    /// A scale-type key did not name any registered scale template.
    #[error("unknown scale type `{name}`")]
    UnknownScaleType {
        /// The key as received.
        name: String,
    },

    /// A chord-type key did not name any registered chord template.
    #[error("unknown chord type `{name}`")]
    UnknownChordType {
        /// The key as received.
        name: String,
    },

    /// A frequency input was not a positive, finite number of hertz.
    #[error("frequency must be positive and finite, got {value}")]
    InvalidFrequency {
        /// The offending value.
        value: f64,
    },
}
