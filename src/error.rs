//! Error type for the segment encoder.
//!
//! Every failure is terminal for the encode call that produced it. Nothing is
//! truncated or wrapped to make data fit.

use thiserror::Error;

use crate::mode::QrSegmentMode;
use crate::version::QrCodeEcc;

/// Ways an encode call can fail.
///
/// Ways to handle these errors include:
///
/// - `NoVersionFits`: lower the error correction level, shorten the text, or reject it.
/// - `InvalidCharacterForMode`: let the encoder classify the text instead of forcing a mode,
///   or supply a Kanji mapping that covers the character.
/// - `CapacityOverflow`: none at the call site. The capacity table and the assembler disagree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A character reached a segment encoder outside that mode's legal set.
    #[error("character {character:?} at index {position} cannot be encoded in {mode:?} mode")]
    InvalidCharacterForMode {
        character: char,
        mode: QrSegmentMode,
        position: usize,
    },

    /// The text is longer than the version 40 capacity for the requested level.
    #[error("{required} characters exceed the {mode:?} capacity of {max} at level {ecl}")]
    NoVersionFits {
        mode: QrSegmentMode,
        ecl: QrCodeEcc,
        required: usize,
        max: usize,
    },

    /// The bit cursor would run past the end of the codeword buffer.
    #[error("data needs {required_bits} bits, only {available_bits} available")]
    CapacityOverflow {
        required_bits: usize,
        available_bits: usize,
    },

    /// Text that does not name a correction level.
    #[error("unknown error correction level {0:?}")]
    UnknownCorrectionLevel(String),
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, EncodeError>;
