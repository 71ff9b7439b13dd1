//! Symbol versions, error correction levels and the capacity lookups built on them.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::capacity::CAPACITY_TABLE;
use crate::error::{EncodeError, Result};
use crate::mode::QrSegmentMode;

/// A QR code version (1–40).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Version(u8);

impl Version {
    /// The minimum version number supported in the QR Code Model 2 standard.
    pub const MIN: Version = Version(1);

    /// The maximum version number supported in the QR Code Model 2 standard.
    pub const MAX: Version = Version(40);

    /// Creates a version object from the given number.
    ///
    /// # Panics
    ///
    /// Panics if the number is outside the range [1, 40].
    pub const fn new(ver: u8) -> Self {
        assert!(
            Version::MIN.value() <= ver && ver <= Version::MAX.value(),
            "Version number out of range"
        );
        Self(ver)
    }

    /// Returns the value, which is in the range [1, 40].
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Index of the character-count width tier: 0 for versions 1–9,
    /// 1 for 10–26, 2 for 27–40.
    pub(crate) const fn tier(self) -> usize {
        match self.0 {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        }
    }
}

/// Error correction level for a QR code.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum QrCodeEcc {
    /// Tolerates ~7% erroneous codewords.
    Low,
    /// Tolerates ~15% erroneous codewords.
    Medium,
    /// Tolerates ~25% erroneous codewords.
    Quartile,
    /// Tolerates ~30% erroneous codewords.
    High,
}

impl QrCodeEcc {
    /// All four levels, weakest first.
    pub const ALL: [QrCodeEcc; 4] = [
        QrCodeEcc::Low,
        QrCodeEcc::Medium,
        QrCodeEcc::Quartile,
        QrCodeEcc::High,
    ];

    /// Returns an unsigned 2-bit integer (in the range 0 to 3).
    pub(crate) fn ordinal(self) -> usize {
        use QrCodeEcc::*;
        match self {
            Low => 0,
            Medium => 1,
            Quartile => 2,
            High => 3,
        }
    }

    /// The single-letter name used on symbols and in tables.
    pub fn letter(self) -> char {
        use QrCodeEcc::*;
        match self {
            Low => 'L',
            Medium => 'M',
            Quartile => 'Q',
            High => 'H',
        }
    }
}

impl fmt::Display for QrCodeEcc {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for QrCodeEcc {
    type Err = EncodeError;

    /// Accepts `L`, `M`, `Q`, `H` or the long names, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "low" => Ok(QrCodeEcc::Low),
            "m" | "medium" => Ok(QrCodeEcc::Medium),
            "q" | "quartile" => Ok(QrCodeEcc::Quartile),
            "h" | "high" => Ok(QrCodeEcc::High),
            _ => Err(EncodeError::UnknownCorrectionLevel(s.to_string())),
        }
    }
}

/// One group of error correction blocks that share a data codeword count.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct BlockGroup {
    pub blocks: u8,
    pub words_per_block: u16,
}

impl BlockGroup {
    /// Data codewords carried by the whole group.
    pub fn data_words(&self) -> usize {
        usize::from(self.blocks) * usize::from(self.words_per_block)
    }
}

/// Capacity and block layout of one (version, error correction level) pair.
///
/// Rows live in a static table and are handed out as `&'static VersionInfo`.
/// The block groups are not used by the data encoder; they are carried for the
/// error correction stage that consumes the codewords.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct VersionInfo {
    pub(crate) version: Version,
    pub(crate) ecl: QrCodeEcc,
    pub(crate) capacity: [u16; 4],
    pub(crate) total_words: u16,
    pub(crate) groups: [BlockGroup; 2],
    pub(crate) ec_words_per_block: u8,
}

impl VersionInfo {
    /// Looks up the row for a version and level.
    pub fn get(version: Version, ecl: QrCodeEcc) -> &'static VersionInfo {
        &CAPACITY_TABLE[(usize::from(version.value()) - 1) * 4 + ecl.ordinal()]
    }

    /// Iterates all 160 rows, by version then level.
    pub fn all() -> impl Iterator<Item = &'static VersionInfo> {
        CAPACITY_TABLE.iter()
    }

    /// Returns the smallest version at exactly `ecl` whose capacity for `mode`
    /// is at least `numchars`.
    ///
    /// Versions are tried in ascending order and the first that fits wins.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::NoVersionFits`] if even version 40 is too small.
    ///
    /// # Example
    ///
    /// ```rust
    /// use qirust_segment::{QrCodeEcc, QrSegmentMode, VersionInfo};
    ///
    /// let info = VersionInfo::select(QrSegmentMode::Alphanumeric, QrCodeEcc::Medium, 11).unwrap();
    /// assert_eq!(info.version().value(), 1);
    /// assert_eq!(info.total_words(), 16);
    /// ```
    pub fn select(mode: QrSegmentMode, ecl: QrCodeEcc, numchars: usize) -> Result<&'static VersionInfo> {
        let found = VersionInfo::all()
            .filter(|info| info.ecl == ecl)
            .find(|info| info.capacity(mode) >= numchars);
        match found {
            Some(info) => {
                debug!(
                    version = info.version.value(),
                    %ecl,
                    ?mode,
                    numchars,
                    capacity = info.capacity(mode),
                    "selected version"
                );
                Ok(info)
            }
            None => Err(EncodeError::NoVersionFits {
                mode,
                ecl,
                required: numchars,
                max: VersionInfo::get(Version::MAX, ecl).capacity(mode),
            }),
        }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn error_correction_level(&self) -> QrCodeEcc {
        self.ecl
    }

    /// Maximum number of characters of `mode` a single segment can hold.
    pub fn capacity(&self, mode: QrSegmentMode) -> usize {
        usize::from(self.capacity[mode.ordinal()])
    }

    /// Number of data codewords, which is the length of the codeword buffer.
    pub fn total_words(&self) -> usize {
        usize::from(self.total_words)
    }

    pub fn block_groups(&self) -> &[BlockGroup; 2] {
        &self.groups
    }

    pub fn ec_words_per_block(&self) -> usize {
        usize::from(self.ec_words_per_block)
    }

    /// Total number of error correction blocks over both groups.
    pub fn num_blocks(&self) -> usize {
        self.groups.iter().map(|g| usize::from(g.blocks)).sum()
    }
}
