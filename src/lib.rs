//! # qirust-segment
//!
//! The data-segment stage of a QR code generator.
//!
//! `qirust-segment` turns text into the fixed-length data codeword buffer that the error
//! correction and module placement stages consume. It classifies the text into one of
//! the four QR encoding modes, picks the smallest of the 40 versions that holds it at
//! the requested error correction level, and packs the mode indicator, character
//! count and data bits into the buffer, padding what is left.
//!
//! ## Features
//!
//! - Numeric, alphanumeric, byte and kanji modes, one segment per symbol.
//! - Capacity and block layout for all 160 version and error correction level pairs.
//! - Pluggable Shift JIS lookup for kanji mode.
//! - Typed errors, no panics on input.
//! - Safe Rust implementation with no unsafe code.
//!
//! ## Example
//!
//! ```rust
//! use qirust_segment::{encode_text, QrCodeEcc, QrSegmentMode};
//!
//! let data = encode_text("HELLO WORLD", QrCodeEcc::Medium).unwrap();
//!
//! assert_eq!(data.mode(), QrSegmentMode::Alphanumeric);
//! assert_eq!(data.version_info().version().value(), 1);
//! assert_eq!(data.len(), 16);
//! assert_eq!(&data.as_bytes()[10..], &[0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11]);
//! ```
//!
//! ## Modules
//!
//! - [`mode`]: Mode classification, indicators and character-count widths.
//! - [`version`]: Versions, error correction levels and version selection.
//! - [`segment`]: Per-mode bit packing.
//! - [`kanji`]: Shift JIS lookups for kanji mode.
//! - [`codewords`]: Lays a segment out into the codeword buffer.
//! - [`encoder`]: The end-to-end encoder and its options.
#![forbid(unsafe_code)]

mod bitbuffer;
mod capacity;
pub mod codewords;
pub mod encoder;
pub mod error;
pub mod kanji;
pub mod mode;
pub mod segment;
pub mod version;

pub use codewords::DataCodewords;
pub use encoder::{encode_binary, encode_text, EncodeOptions, Encoder};
pub use error::{EncodeError, Result};
pub use kanji::{KanjiMapper, ShiftJisTable};
pub use mode::QrSegmentMode;
pub use segment::QrSegment;
pub use version::{BlockGroup, QrCodeEcc, Version, VersionInfo};
