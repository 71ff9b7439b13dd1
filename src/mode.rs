use serde::{Deserialize, Serialize};

use crate::version::Version;

/// The 45 characters of alphanumeric mode, in value order.
pub(crate) static ALPHANUMERIC_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// Non-alphanumeric characters that still keep text in alphanumeric mode.
const ALPHANUMERIC_SYMBOLS: [char; 9] = ['$', '%', '*', '+', '-', '.', '/', ':', ' '];

/// Encoding mode of a segment.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum QrSegmentMode {
    Numeric,
    Alphanumeric,
    Byte,
    Kanji,
}

impl QrSegmentMode {
    pub const ALL: [QrSegmentMode; 4] = [
        QrSegmentMode::Numeric,
        QrSegmentMode::Alphanumeric,
        QrSegmentMode::Byte,
        QrSegmentMode::Kanji,
    ];

    /// Picks the mode for `text`.
    ///
    /// Starts at numeric and looks at each character in turn. Digits change nothing.
    /// An upper-case letter or one of `$ % * + - . / :` and space switches to
    /// alphanumeric, a CJK ideograph switches to kanji, and anything else switches to
    /// byte and ends the scan. Each switch overwrites the previous one, so for text
    /// mixing alphanumeric and kanji characters the last one seen decides.
    ///
    /// Mixed text is not split into several segments, so the result may be a mode
    /// that cannot encode every character. The segment encoder reports those with
    /// [`EncodeError::InvalidCharacterForMode`](crate::EncodeError::InvalidCharacterForMode).
    ///
    /// # Example
    ///
    /// ```rust
    /// use qirust_segment::QrSegmentMode;
    ///
    /// assert_eq!(QrSegmentMode::classify("12345"), QrSegmentMode::Numeric);
    /// assert_eq!(QrSegmentMode::classify("HELLO WORLD"), QrSegmentMode::Alphanumeric);
    /// assert_eq!(QrSegmentMode::classify("hello"), QrSegmentMode::Byte);
    /// ```
    pub fn classify(text: &str) -> QrSegmentMode {
        use QrSegmentMode::*;
        let mut mode = Numeric;
        for c in text.chars() {
            if c.is_ascii_digit() {
                continue;
            }
            if c.is_uppercase() || ALPHANUMERIC_SYMBOLS.contains(&c) {
                mode = Alphanumeric;
            } else if is_cjk_ideograph(c) {
                mode = Kanji;
            } else {
                mode = Byte;
                break;
            }
        }
        mode
    }

    pub(crate) fn ordinal(self) -> usize {
        use QrSegmentMode::*;
        match self {
            Numeric => 0,
            Alphanumeric => 1,
            Byte => 2,
            Kanji => 3,
        }
    }

    /// The 4-bit mode indicator.
    pub fn mode_bits(self) -> u32 {
        use QrSegmentMode::*;
        match self {
            Numeric => 0x1,
            Alphanumeric => 0x2,
            Byte => 0x4,
            Kanji => 0x8,
        }
    }

    /// Width in bits of the character-count indicator at the given version.
    pub fn num_char_count_bits(self, ver: Version) -> u8 {
        use QrSegmentMode::*;
        (
            match self {
                Numeric => [10, 12, 14],
                Alphanumeric => [9, 11, 13],
                Byte => [8, 16, 16],
                Kanji => [8, 10, 12],
            }
        )[ver.tier()]
    }

    /// Whether `c` belongs to this mode's character set.
    ///
    /// Kanji accepts any CJK ideograph here; whether it actually has a
    /// Shift JIS code is up to the [`KanjiMapper`](crate::KanjiMapper).
    pub fn can_encode(self, c: char) -> bool {
        use QrSegmentMode::*;
        match self {
            Numeric => c.is_ascii_digit(),
            Alphanumeric => ALPHANUMERIC_CHARSET.contains(c),
            Byte => true,
            Kanji => is_cjk_ideograph(c),
        }
    }
}

/// Code point ranges of the Unicode Han script.
const HAN_RANGES: [(u32, u32); 13] = [
    (0x2E80, 0x2E99),
    (0x2E9B, 0x2EF3),
    (0x2F00, 0x2FD5),
    (0x3005, 0x3005),
    (0x3007, 0x3007),
    (0x3021, 0x3029),
    (0x3038, 0x303B),
    (0x3400, 0x4DBF),
    (0x4E00, 0x9FFF),
    (0xF900, 0xFA6D),
    (0xFA70, 0xFAD9),
    (0x20000, 0x2FA1F),
    (0x30000, 0x323AF),
];

/// Whether `c` is a CJK ideograph (Han script).
pub fn is_cjk_ideograph(c: char) -> bool {
    let cp = u32::from(c);
    HAN_RANGES.iter().any(|&(lo, hi)| lo <= cp && cp <= hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use QrSegmentMode::*;

    #[test]
    fn test_classify_basic() {
        assert_eq!(QrSegmentMode::classify("12345"), Numeric);
        assert_eq!(QrSegmentMode::classify("HELLO WORLD"), Alphanumeric);
        assert_eq!(QrSegmentMode::classify("hello"), Byte);
        assert_eq!(QrSegmentMode::classify("$12.50"), Alphanumeric);
        assert_eq!(QrSegmentMode::classify(""), Numeric);
    }

    #[test]
    fn test_classify_byte_halts_scan() {
        // The kanji seen first is discarded once a byte character shows up.
        assert_eq!(QrSegmentMode::classify("漢a"), Byte);
        assert_eq!(QrSegmentMode::classify("a漢"), Byte);
        assert_eq!(QrSegmentMode::classify("x漢ABC"), Byte);
    }

    #[test]
    fn test_classify_last_mode_wins() {
        assert_eq!(QrSegmentMode::classify("漢字"), Kanji);
        assert_eq!(QrSegmentMode::classify("A漢"), Kanji);
        assert_eq!(QrSegmentMode::classify("漢A"), Alphanumeric);
        assert_eq!(QrSegmentMode::classify("漢1"), Kanji);
    }

    #[test]
    fn test_mode_bits() {
        assert_eq!(Numeric.mode_bits(), 0b0001);
        assert_eq!(Alphanumeric.mode_bits(), 0b0010);
        assert_eq!(Byte.mode_bits(), 0b0100);
        assert_eq!(Kanji.mode_bits(), 0b1000);
    }

    #[test]
    fn test_char_count_bits() {
        let widths = |v: u8| QrSegmentMode::ALL.map(|m| m.num_char_count_bits(Version::new(v)));
        assert_eq!(widths(1), [10, 9, 8, 8]);
        assert_eq!(widths(9), [10, 9, 8, 8]);
        assert_eq!(widths(10), [12, 11, 16, 10]);
        assert_eq!(widths(26), [12, 11, 16, 10]);
        assert_eq!(widths(27), [14, 13, 16, 12]);
        assert_eq!(widths(40), [14, 13, 16, 12]);
    }

    #[test]
    fn test_can_encode() {
        assert!(Numeric.can_encode('7'));
        assert!(!Numeric.can_encode('A'));
        assert!(Alphanumeric.can_encode(':'));
        assert!(!Alphanumeric.can_encode('a'));
        assert!(Byte.can_encode('é'));
        assert!(Kanji.can_encode('点'));
        assert!(!Kanji.can_encode('あ'));
    }

    #[test]
    fn test_is_cjk_ideograph() {
        assert!(is_cjk_ideograph('漢'));
        assert!(is_cjk_ideograph('〇'));
        assert!(!is_cjk_ideograph('ア'));
        assert!(!is_cjk_ideograph('z'));
    }
}
