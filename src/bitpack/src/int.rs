use crate::{Codec, Error, Result};

const MAX_BITS: u32 = u64::BITS;

// Signed fields need at least one magnitude bit next to the sign.
const MIN_SIGNED_BITS: u32 = 2;

#[inline]
fn check_width(bits: u32, min: u32) -> Result<()> {
    if (min..=MAX_BITS).contains(&bits) {
        Ok(())
    } else {
        Err(Error::InvalidWidth {
            bits,
            min,
            max: MAX_BITS,
        })
    }
}

impl Codec {
    /// Writes the low `bits` bits of `value`, least significant bit
    /// first.
    ///
    /// Any bits of `value` above `bits` are silently discarded.
    ///
    /// Fails when `bits` is not in `1..=64`.
    pub fn add_uint(&mut self, value: u64, bits: u32) -> Result<&mut Self> {
        check_width(bits, 1)?;

        for i in 0..bits {
            self.add_bit((value >> i) & 1 != 0);
        }

        Ok(self)
    }

    /// Reads a `bits`-wide unsigned integer.
    ///
    /// Fails when `bits` is not in `1..=64` or not enough bits are
    /// left, in which case the cursor stays where it was.
    pub fn read_uint(&mut self, bits: u32) -> Result<u64> {
        check_width(bits, 1)?;
        self.ensure_available(bits)?;

        let mut out = 0;
        for i in 0..bits {
            out |= (self.read_bit()? as u64) << i;
        }

        Ok(out)
    }

    /// Writes a `bits`-wide signed integer as a sign bit followed by a
    /// `bits - 1` wide magnitude.
    ///
    /// Negative values store `-value - 1` so that every bit pattern
    /// maps to a distinct integer in
    /// `-(2^(bits-1))..=2^(bits-1) - 1`. Magnitudes outside of that
    /// range are truncated like in [`Codec::add_uint`].
    ///
    /// Fails when `bits` is not in `2..=64`.
    pub fn add_int(&mut self, value: i64, bits: u32) -> Result<&mut Self> {
        check_width(bits, MIN_SIGNED_BITS)?;

        // `!value` is `-value - 1` without overflowing on `i64::MIN`.
        let magnitude = (if value < 0 { !value } else { value }) as u64;

        self.add_bit(value < 0);
        self.add_uint(magnitude, bits - 1)
    }

    /// Reads a `bits`-wide signed integer written by
    /// [`Codec::add_int`].
    ///
    /// Fails when `bits` is not in `2..=64` or not enough bits are
    /// left, in which case the cursor stays where it was.
    pub fn read_int(&mut self, bits: u32) -> Result<i64> {
        check_width(bits, MIN_SIGNED_BITS)?;
        self.ensure_available(bits)?;

        let negative = self.read_bit()?;
        let magnitude = self.read_uint(bits - 1)? as i64;

        Ok(if negative { !magnitude } else { magnitude })
    }
}
