//! Character to Shift JIS lookups for kanji mode.
//!
//! Kanji mode stores each character as a 13-bit value derived from its double-byte
//! Shift JIS code. The crate owns that derivation; where the Shift JIS code comes
//! from is pluggable through [`KanjiMapper`], since a full Unicode to Shift JIS
//! table is large and callers often already have one.

use std::collections::HashMap;

/// Supplies the double-byte Shift JIS code for a character.
pub trait KanjiMapper {
    /// Returns the Shift JIS code of `c`, or `None` if it has none.
    fn shift_jis(&self, c: char) -> Option<u16>;
}

impl<F> KanjiMapper for F
where
    F: Fn(char) -> Option<u16>,
{
    fn shift_jis(&self, c: char) -> Option<u16> {
        self(c)
    }
}

/// An in-memory character to Shift JIS table.
///
/// An empty table maps nothing, so every kanji is rejected.
///
/// # Example
///
/// ```rust
/// use qirust_segment::{KanjiMapper, ShiftJisTable};
///
/// let table: ShiftJisTable = [('点', 0x935F), ('茗', 0xE4AA)].into_iter().collect();
/// assert_eq!(table.shift_jis('点'), Some(0x935F));
/// assert_eq!(table.shift_jis('字'), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ShiftJisTable {
    codes: HashMap<char, u16>,
}

impl ShiftJisTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, c: char, code: u16) -> Option<u16> {
        self.codes.insert(c, code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl FromIterator<(char, u16)> for ShiftJisTable {
    fn from_iter<I: IntoIterator<Item = (char, u16)>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}

impl KanjiMapper for ShiftJisTable {
    fn shift_jis(&self, c: char) -> Option<u16> {
        self.codes.get(&c).copied()
    }
}

/// Converts a double-byte Shift JIS code to its 13-bit kanji mode value.
///
/// Codes in `0x8140..=0x9FFC` are offset by `0x8140`, codes in `0xE040..=0xEBBF`
/// by `0xC140`. The high byte of the difference is weighted by `0xC0` and added
/// to the low byte. Returns `None` for codes outside both ranges or with an
/// invalid trail byte.
pub fn kanji_value(code: u16) -> Option<u16> {
    let offset: u16 = match code {
        0x8140..=0x9FFC => code - 0x8140,
        0xE040..=0xEBBF => code - 0xC140,
        _ => return None,
    };
    let (hi, lo) = (offset >> 8, offset & 0xFF);
    if lo > 0xBC {
        // Trail byte outside 0x40..=0xFC
        return None;
    }
    Some(hi * 0xC0 + lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kanji_value_first_range() {
        // 点 = 0x935F
        assert_eq!(kanji_value(0x935F), Some(0x0D9F));
        assert_eq!(kanji_value(0x8140), Some(0));
        assert_eq!(kanji_value(0x9FFC), Some(0x1E * 0xC0 + 0xBC));
    }

    #[test]
    fn test_kanji_value_second_range() {
        // 茗 = 0xE4AA
        assert_eq!(kanji_value(0xE4AA), Some(0x1AAA));
        assert_eq!(kanji_value(0xEBBF), Some(0x2A * 0xC0 + 0x7F));
    }

    #[test]
    fn test_kanji_value_fits_13_bits() {
        for code in (0x8140u16..=0x9FFC).chain(0xE040..=0xEBBF) {
            if let Some(v) = kanji_value(code) {
                assert!(v < 1 << 13, "{:#06x}", code);
            }
        }
    }

    #[test]
    fn test_kanji_value_out_of_range() {
        assert_eq!(kanji_value(0x0041), None);
        assert_eq!(kanji_value(0xA000), None);
        assert_eq!(kanji_value(0xEBC0), None);
        assert_eq!(kanji_value(0x81FD), None);
    }

    #[test]
    fn test_closure_mapper() {
        let mapper = |c: char| -> Option<u16> { if c == '点' { Some(0x935F) } else { None } };
        assert_eq!(mapper.shift_jis('点'), Some(0x935F));
        assert_eq!(mapper.shift_jis('x'), None);
    }

    #[test]
    fn test_empty_table_maps_nothing() {
        let table = ShiftJisTable::new();
        assert!(table.is_empty());
        assert_eq!(table.shift_jis('点'), None);
    }
}
