use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codewords::DataCodewords;
use crate::error::Result;
use crate::kanji::{KanjiMapper, ShiftJisTable};
use crate::mode::QrSegmentMode;
use crate::segment::QrSegment;
use crate::version::{QrCodeEcc, VersionInfo};

/// Settings for an [`Encoder`].
///
/// Deserializes from any serde format, e.g. `{"ecl": "Medium", "mode": "Byte"}`.
/// `mode` may be omitted, in which case the text is classified.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct EncodeOptions {
    /// Error correction level of the symbol.
    pub ecl: QrCodeEcc,
    /// Mode to encode in instead of classifying the text.
    #[serde(default)]
    pub mode: Option<QrSegmentMode>,
}

impl EncodeOptions {
    pub fn new(ecl: QrCodeEcc) -> Self {
        Self { ecl, mode: None }
    }

    pub fn with_mode(mut self, mode: QrSegmentMode) -> Self {
        self.mode = Some(mode);
        self
    }
}

/// Turns text into the data codewords of a single-segment QR code.
///
/// An encoder holds no state between calls; the same text always yields the
/// same codewords. Kanji mode needs a Shift JIS mapping, which the default
/// encoder does not have.
///
/// # Example
///
/// ```rust
/// use qirust_segment::{EncodeOptions, Encoder, QrCodeEcc, ShiftJisTable};
///
/// let table: ShiftJisTable = [('点', 0x935F), ('茗', 0xE4AA)].into_iter().collect();
/// let encoder = Encoder::new(EncodeOptions::new(QrCodeEcc::Low)).with_kanji_mapper(table);
///
/// let data = encoder.encode("点茗").unwrap();
/// assert_eq!(&data.as_bytes()[..5], &[0x80, 0x26, 0xCF, 0xEA, 0xA8]);
/// ```
#[derive(Clone, Debug)]
pub struct Encoder<M = ShiftJisTable> {
    options: EncodeOptions,
    kanji: M,
}

impl Encoder<ShiftJisTable> {
    pub fn new(options: EncodeOptions) -> Self {
        Self {
            options,
            kanji: ShiftJisTable::new(),
        }
    }
}

impl<M: KanjiMapper> Encoder<M> {
    /// Replaces the Shift JIS mapping used for kanji mode.
    pub fn with_kanji_mapper<N: KanjiMapper>(self, mapper: N) -> Encoder<N> {
        Encoder {
            options: self.options,
            kanji: mapper,
        }
    }

    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Encodes `text` in its classified mode, or the configured one.
    ///
    /// Picks the mode, selects the smallest version that holds the text at the
    /// configured level, packs the characters and lays out the codewords.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::NoVersionFits`](crate::EncodeError::NoVersionFits) if the text is too long.
    /// - [`EncodeError::InvalidCharacterForMode`](crate::EncodeError::InvalidCharacterForMode) if a
    ///   character cannot be encoded in the mode.
    pub fn encode(&self, text: &str) -> Result<DataCodewords> {
        let mode = self.options.mode.unwrap_or_else(|| QrSegmentMode::classify(text));
        let numchars = match mode {
            QrSegmentMode::Byte => text.len(),
            _ => text.chars().count(),
        };
        debug!(?mode, numchars, forced = self.options.mode.is_some(), "encoding text");

        let info = VersionInfo::select(mode, self.options.ecl, numchars)?;
        let seg = match mode {
            QrSegmentMode::Numeric => QrSegment::make_numeric(text)?,
            QrSegmentMode::Alphanumeric => QrSegment::make_alphanumeric(text)?,
            QrSegmentMode::Byte => QrSegment::make_bytes(text.as_bytes()),
            QrSegmentMode::Kanji => QrSegment::make_kanji(text, &self.kanji)?,
        };
        DataCodewords::assemble(info, &seg)
    }

    /// Encodes arbitrary bytes in byte mode, ignoring the configured mode.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::NoVersionFits`](crate::EncodeError::NoVersionFits) if the data is too long.
    pub fn encode_binary(&self, data: &[u8]) -> Result<DataCodewords> {
        debug!(len = data.len(), "encoding binary");
        let info = VersionInfo::select(QrSegmentMode::Byte, self.options.ecl, data.len())?;
        DataCodewords::assemble(info, &QrSegment::make_bytes(data))
    }
}

/// Encodes text at the given error correction level, classifying its mode.
///
/// # Example
///
/// ```rust
/// use qirust_segment::{encode_text, QrCodeEcc};
///
/// let data = encode_text("HELLO WORLD", QrCodeEcc::Medium).unwrap();
/// assert_eq!(data.version_info().version().value(), 1);
/// assert_eq!(data.len(), 16);
/// assert_eq!(data.as_bytes()[0] >> 4, 0b0010);
/// ```
pub fn encode_text(text: &str, ecl: QrCodeEcc) -> Result<DataCodewords> {
    Encoder::new(EncodeOptions::new(ecl)).encode(text)
}

/// Encodes binary data in byte mode at the given error correction level.
pub fn encode_binary(data: &[u8], ecl: QrCodeEcc) -> Result<DataCodewords> {
    Encoder::new(EncodeOptions::new(ecl)).encode_binary(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EncodeError;

    #[test]
    fn test_forced_mode_rejects_foreign_characters() {
        let encoder = Encoder::new(EncodeOptions::new(QrCodeEcc::Low).with_mode(QrSegmentMode::Numeric));
        let err = encoder.encode("12A").unwrap_err();
        assert_eq!(
            err,
            EncodeError::InvalidCharacterForMode { character: 'A', mode: QrSegmentMode::Numeric, position: 2 }
        );
    }

    #[test]
    fn test_forced_byte_mode() {
        let encoder = Encoder::new(EncodeOptions::new(QrCodeEcc::Low).with_mode(QrSegmentMode::Byte));
        let data = encoder.encode("123").unwrap();
        assert_eq!(data.mode(), QrSegmentMode::Byte);
        assert_eq!(&data.as_bytes()[..5], &[0x40, 0x33, 0x13, 0x23, 0x30]);
    }

    #[test]
    fn test_kanji_without_mapping_fails() {
        let err = encode_text("漢字", QrCodeEcc::Low).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::InvalidCharacterForMode { character: '漢', mode: QrSegmentMode::Kanji, position: 0 }
        ));
    }

    #[test]
    fn test_kanji_with_closure_mapper() {
        let encoder = Encoder::new(EncodeOptions::new(QrCodeEcc::Low)).with_kanji_mapper(|c: char| -> Option<u16> {
            match c {
                '点' => Some(0x935F),
                '茗' => Some(0xE4AA),
                _ => None,
            }
        });
        let data = encoder.encode("点茗").unwrap();
        assert_eq!(data.mode(), QrSegmentMode::Kanji);
        assert_eq!(
            &data.as_bytes()[..8],
            &[0x80, 0x26, 0xCF, 0xEA, 0xA8, 0x00, 0xEC, 0x11]
        );
    }

    #[test]
    fn test_classified_alphanumeric_with_non_ascii_uppercase() {
        // Upper-case letters outside A-Z classify as alphanumeric but cannot be encoded.
        let err = encode_text("ÄB", QrCodeEcc::Low).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::InvalidCharacterForMode { character: 'Ä', mode: QrSegmentMode::Alphanumeric, .. }
        ));
    }

    #[test]
    fn test_byte_mode_counts_bytes() {
        let data = encode_text("héllo", QrCodeEcc::Low).unwrap();
        assert_eq!(data.mode(), QrSegmentMode::Byte);
        assert_eq!(data.num_chars(), 6);
    }

    #[test]
    fn test_encode_binary() {
        let data = encode_binary(&[0x00, 0xFF], QrCodeEcc::Quartile).unwrap();
        assert_eq!(data.len(), 13);
        // 0100 00000010 00000000 11111111, then padding right after the spill byte
        assert_eq!(&data.as_bytes()[..6], &[0x40, 0x20, 0x0F, 0xF0, 0xEC, 0x11]);
    }
}
