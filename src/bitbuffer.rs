use crate::error::{EncodeError, Result};

/// An append-only bit cursor over a fixed-size byte buffer.
///
/// Bits are written MSB-first. The cursor never moves backwards, and a value may
/// straddle any number of byte boundaries: the bits already present in the current
/// byte are kept and the new bits are OR-ed in after them. Every segment encoder and
/// the codeword assembler write through this one primitive.
///
/// The buffer must start zeroed; bits the cursor never reaches stay zero.
pub struct BitBuffer<'a> {
    data: &'a mut [u8],
    length: usize,
}

impl<'a> BitBuffer<'a> {
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self {
            data: buffer,
            length: 0,
        }
    }

    /// Number of bits written so far, i.e. the global offset of the next bit.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Total number of bits the underlying buffer can hold.
    pub fn capacity(&self) -> usize {
        self.data.len() * 8
    }

    /// Appends the low `len` bits of `val`, most significant first.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::CapacityOverflow`] without writing anything if the
    /// value would run past the end of the buffer.
    pub fn append_bits(&mut self, val: u32, len: u8) -> Result<()> {
        debug_assert!(len <= 31 && (val >> len) == 0, "value wider than {} bits", len);
        self.ensure_room(usize::from(len))?;
        let mut remaining: u8 = len;
        while remaining > 0 {
            let index: usize = self.length >> 3;
            let free: u8 = 8 - ((self.length as u8) & 7);
            let take: u8 = remaining.min(free);
            let chunk: u8 = ((val >> (remaining - take)) & ((1u32 << take) - 1)) as u8;
            self.data[index] |= chunk << (free - take);
            self.length += usize::from(take);
            remaining -= take;
        }
        Ok(())
    }

    /// Appends the first `bitlength` bits of `data`, MSB-first, continuing from the
    /// current cursor without byte alignment.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::CapacityOverflow`] if the bits do not fit.
    pub fn append_slice(&mut self, data: &[u8], bitlength: usize) -> Result<()> {
        debug_assert!(bitlength <= data.len() * 8);
        self.ensure_room(bitlength)?;
        let whole: usize = bitlength / 8;
        for &b in &data[..whole] {
            self.append_bits(u32::from(b), 8)?;
        }
        let rest: u8 = (bitlength % 8) as u8;
        if rest > 0 {
            self.append_bits(u32::from(data[whole] >> (8 - rest)), rest)?;
        }
        Ok(())
    }

    fn ensure_room(&self, bits: usize) -> Result<()> {
        let required_bits = self.length.checked_add(bits).unwrap_or(usize::MAX);
        if required_bits > self.capacity() {
            return Err(EncodeError::CapacityOverflow {
                required_bits,
                available_bits: self.capacity(),
            });
        }
        Ok(())
    }
}
