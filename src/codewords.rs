use core::fmt;

use tracing::trace;

use crate::bitbuffer::BitBuffer;
use crate::error::{EncodeError, Result};
use crate::mode::QrSegmentMode;
use crate::segment::QrSegment;
use crate::version::VersionInfo;

/// Alternating bytes that fill the codeword buffer after the data.
const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// The data codewords of one symbol, ready for the error correction stage.
///
/// The buffer length always equals [`VersionInfo::total_words`] of the selected row.
/// The row also carries the block layout the error correction stage needs.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DataCodewords {
    info: &'static VersionInfo,
    mode: QrSegmentMode,
    numchars: usize,
    codewords: Vec<u8>,
}

impl DataCodewords {
    /// Lays a segment out into a fresh codeword buffer for `info`.
    ///
    /// In bit order: the 4-bit mode indicator, the character count in
    /// [`QrSegmentMode::num_char_count_bits`] bits, then the segment bits continuing
    /// from wherever the count ended. Padding with `0xEC, 0x11, ...` starts one byte
    /// past the segment's byte length, counted from the byte holding the end of the
    /// header. That boundary byte holds only data bits that spilled past a byte
    /// edge, so it is zero when the header ended on a byte boundary.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::CapacityOverflow`] if the character count does not fit
    /// its indicator or the header and data do not fit the buffer. Neither happens
    /// when `info` came from [`VersionInfo::select`] for this segment.
    pub fn assemble(info: &'static VersionInfo, seg: &QrSegment) -> Result<Self> {
        let mode = seg.mode();
        let numchars = seg.num_chars();
        let ccbits: u8 = mode.num_char_count_bits(info.version());
        if numchars >> ccbits != 0 {
            return Err(EncodeError::CapacityOverflow {
                required_bits: (usize::BITS - numchars.leading_zeros()) as usize,
                available_bits: usize::from(ccbits),
            });
        }

        let mut codewords = vec![0u8; info.total_words()];
        let mut bb = BitBuffer::new(&mut codewords);
        bb.append_bits(mode.mode_bits(), 4)?;
        bb.append_bits(numchars as u32, ccbits)?;
        let headerbits: usize = bb.len();
        bb.append_slice(seg.data(), seg.bit_len())?;
        let databits: usize = bb.len();

        // Boundary byte, then padding
        let padstart: usize = headerbits / 8 + seg.data().len() + 1;
        trace!(headerbits, databits, padstart, total = info.total_words(), "assembled segment");
        for (slot, &pad) in codewords.iter_mut().skip(padstart).zip(PAD_BYTES.iter().cycle()) {
            *slot = pad;
        }

        Ok(Self {
            info,
            mode,
            numchars,
            codewords,
        })
    }

    /// The capacity table row the data was laid out for.
    pub fn version_info(&self) -> &'static VersionInfo {
        self.info
    }

    pub fn mode(&self) -> QrSegmentMode {
        self.mode
    }

    /// The value written to the character-count indicator.
    pub fn num_chars(&self) -> usize {
        self.numchars
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.codewords
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.codewords
    }

    pub fn len(&self) -> usize {
        self.codewords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codewords.is_empty()
    }
}

impl AsRef<[u8]> for DataCodewords {
    fn as_ref(&self) -> &[u8] {
        &self.codewords
    }
}

/// Prints each codeword as eight binary digits, separated by spaces.
impl fmt::Display for DataCodewords {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, b) in self.codewords.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:08b}", b)?;
        }
        Ok(())
    }
}
