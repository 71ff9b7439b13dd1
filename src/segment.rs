use crate::bitbuffer::BitBuffer;
use crate::error::{EncodeError, Result};
use crate::kanji::{kanji_value, KanjiMapper};
use crate::mode::{QrSegmentMode, ALPHANUMERIC_CHARSET};

/// A segment of data in a QR code.
///
/// Holds the packed value bits of one mode, MSB-first, in the smallest whole number
/// of bytes. Unused low bits of the last byte are zero. Segments are immutable and
/// created using factory functions like [`make_numeric`], [`make_alphanumeric`],
/// [`make_bytes`] or [`make_kanji`].
///
/// [`make_numeric`]: QrSegment::make_numeric
/// [`make_alphanumeric`]: QrSegment::make_alphanumeric
/// [`make_bytes`]: QrSegment::make_bytes
/// [`make_kanji`]: QrSegment::make_kanji
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct QrSegment {
    mode: QrSegmentMode,
    numchars: usize,
    data: Vec<u8>,
    bitlength: usize,
}

impl QrSegment {
    /// Creates a segment for binary data in byte mode.
    ///
    /// Every byte is stored as-is in 8 bits, so the character count is the byte count.
    pub fn make_bytes(data: &[u8]) -> Self {
        QrSegment::new(QrSegmentMode::Byte, data.len(), data.to_vec(), data.len() * 8)
    }

    /// Creates a segment for a string of decimal digits in numeric mode.
    ///
    /// Digits are taken three at a time; each full group is stored in 10 bits, a
    /// trailing pair in 7 bits and a trailing single digit in 4 bits.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::InvalidCharacterForMode`] at the first non-digit.
    pub fn make_numeric(text: &str) -> Result<Self> {
        let numchars = text.chars().count();
        let mut buf = vec![0u8; Self::calc_buffer_size(QrSegmentMode::Numeric, numchars)];
        let mut bb = BitBuffer::new(&mut buf);
        let mut accumdata: u32 = 0;
        let mut accumcount: u8 = 0;
        for (position, c) in text.chars().enumerate() {
            let digit = c
                .to_digit(10)
                .ok_or(EncodeError::InvalidCharacterForMode {
                    character: c,
                    mode: QrSegmentMode::Numeric,
                    position,
                })?;
            accumdata = accumdata * 10 + digit;
            accumcount += 1;
            if accumcount == 3 {
                bb.append_bits(accumdata, 10)?;
                accumdata = 0;
                accumcount = 0;
            }
        }
        if accumcount > 0 {
            bb.append_bits(accumdata, accumcount * 3 + 1)?;
        }
        let bitlength = bb.len();
        Ok(QrSegment::new(QrSegmentMode::Numeric, numchars, buf, bitlength))
    }

    /// Creates a segment for alphanumeric text.
    ///
    /// Allowed characters: 0–9, A–Z (uppercase), space, `$`, `%`, `*`, `+`, `-`, `.`, `/`, `:`.
    /// Characters are taken in pairs and stored as `45 * first + second` in 11 bits; a
    /// trailing single character is stored as its own value in 6 bits.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::InvalidCharacterForMode`] at the first character outside the set.
    pub fn make_alphanumeric(text: &str) -> Result<Self> {
        let numchars = text.chars().count();
        let mut buf = vec![0u8; Self::calc_buffer_size(QrSegmentMode::Alphanumeric, numchars)];
        let mut bb = BitBuffer::new(&mut buf);
        let mut accumdata: u32 = 0;
        let mut accumcount: u8 = 0;
        for (position, c) in text.chars().enumerate() {
            let i: usize = ALPHANUMERIC_CHARSET.find(c).ok_or(EncodeError::InvalidCharacterForMode {
                character: c,
                mode: QrSegmentMode::Alphanumeric,
                position,
            })?;
            accumdata = accumdata * 45 + i as u32;
            accumcount += 1;
            if accumcount == 2 {
                bb.append_bits(accumdata, 11)?;
                accumdata = 0;
                accumcount = 0;
            }
        }
        if accumcount > 0 {
            bb.append_bits(accumdata, 6)?;
        }
        let bitlength = bb.len();
        Ok(QrSegment::new(QrSegmentMode::Alphanumeric, numchars, buf, bitlength))
    }

    /// Creates a segment for kanji text, 13 bits per character.
    ///
    /// `mapper` supplies each character's Shift JIS code, which is then folded into
    /// its 13-bit value by [`kanji_value`].
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::InvalidCharacterForMode`] for a character the mapper does
    /// not know or whose code lies outside the kanji ranges.
    pub fn make_kanji<M: KanjiMapper + ?Sized>(text: &str, mapper: &M) -> Result<Self> {
        let numchars = text.chars().count();
        let mut buf = vec![0u8; Self::calc_buffer_size(QrSegmentMode::Kanji, numchars)];
        let mut bb = BitBuffer::new(&mut buf);
        for (position, c) in text.chars().enumerate() {
            let value = mapper
                .shift_jis(c)
                .and_then(kanji_value)
                .ok_or(EncodeError::InvalidCharacterForMode {
                    character: c,
                    mode: QrSegmentMode::Kanji,
                    position,
                })?;
            bb.append_bits(u32::from(value), 13)?;
        }
        let bitlength = bb.len();
        Ok(QrSegment::new(QrSegmentMode::Kanji, numchars, buf, bitlength))
    }

    fn new(mode: QrSegmentMode, numchars: usize, data: Vec<u8>, bitlength: usize) -> Self {
        debug_assert_eq!(data.len(), bitlength.div_ceil(8));
        Self {
            mode,
            numchars,
            data,
            bitlength,
        }
    }

    pub fn mode(&self) -> QrSegmentMode {
        self.mode
    }

    /// Characters in the segment (bytes, for byte mode).
    pub fn num_chars(&self) -> usize {
        self.numchars
    }

    /// The packed value bits, MSB-first.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Number of meaningful bits in [`data`](QrSegment::data).
    pub fn bit_len(&self) -> usize {
        self.bitlength
    }

    /// Number of bytes needed to hold `numchars` characters of `mode`.
    pub fn calc_buffer_size(mode: QrSegmentMode, numchars: usize) -> usize {
        Self::calc_bit_length(mode, numchars).div_ceil(8)
    }

    fn calc_bit_length(mode: QrSegmentMode, numchars: usize) -> usize {
        let mul_frac_ceil = |numer: usize, denom: usize| numchars.saturating_mul(numer).div_ceil(denom);
        use QrSegmentMode::*;
        match mode {
            Numeric => mul_frac_ceil(10, 3),
            Alphanumeric => mul_frac_ceil(11, 2),
            Byte => mul_frac_ceil(8, 1),
            Kanji => mul_frac_ceil(13, 1),
        }
    }

    pub fn is_numeric(text: &str) -> bool {
        text.chars().all(|c| QrSegmentMode::Numeric.can_encode(c))
    }

    pub fn is_alphanumeric(text: &str) -> bool {
        text.chars().all(|c| QrSegmentMode::Alphanumeric.can_encode(c))
    }
}
