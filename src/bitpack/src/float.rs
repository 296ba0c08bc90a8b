use std::ops::RangeInclusive;

use crate::{Codec, Error, Result};

/// Field widths of an encoded floating-point value, not counting the
/// leading sign bit.
#[derive(Clone, Copy, Debug)]
struct Layout {
    exponent_bits: u32,
    mantissa_bits: u32,
}

const SINGLE: Layout = Layout {
    exponent_bits: 8,
    mantissa_bits: 23,
};

const DOUBLE: Layout = Layout {
    exponent_bits: 11,
    mantissa_bits: 52,
};

impl Layout {
    #[inline]
    const fn total_bits(self) -> u32 {
        1 + self.exponent_bits + self.mantissa_bits
    }

    // Maps the fractional part of a mantissa onto its integer field.
    #[inline]
    fn scale(self) -> f64 {
        (1u64 << self.mantissa_bits) as f64
    }

    #[inline]
    fn exponents(self) -> RangeInclusive<i64> {
        let half = 1i64 << (self.exponent_bits - 1);
        -half..=half - 1
    }
}

/// Splits a positive, finite `value` into `(exponent, mantissa)` with
/// `value == 2^exponent * mantissa` and `mantissa` in `[1, 2)`.
fn decompose(value: f64) -> (i64, f64) {
    let mantissa_for = |exponent: i64| value / (exponent as f64).exp2();

    let mut exponent = value.log2().floor() as i64;
    let mut mantissa = mantissa_for(exponent);

    // `log2` may round across an integer for values right next to a
    // power of two.
    if mantissa < 1.0 {
        log::debug!("Lowering exponent {exponent} for {value}");
        exponent -= 1;
        mantissa = mantissa_for(exponent);
    } else if mantissa >= 2.0 {
        log::debug!("Raising exponent {exponent} for {value}");
        exponent += 1;
        mantissa = mantissa_for(exponent);
    }

    log::trace!("Decomposed {value} into 2^{exponent} * {mantissa}");
    (exponent, mantissa)
}

impl Codec {
    /// Writes a 32-bit float as a sign bit, an 8-bit signed exponent
    /// and a 23-bit mantissa.
    ///
    /// See [`Codec::add_double`] for details and limitations.
    pub fn add_float(&mut self, value: f32) -> Result<&mut Self> {
        self.add_floating(value as f64, SINGLE)
    }

    /// Writes a 64-bit float as a sign bit, an 11-bit signed exponent
    /// and a 52-bit mantissa.
    ///
    /// Non-zero values are split into `2^exponent * mantissa` with the
    /// mantissa in `[1, 2)`, computed through `log2` rather than taken
    /// from the IEEE 754 representation. The exponent is stored with
    /// [`Codec::add_int`], the rounded fraction `(mantissa - 1) * 2^52`
    /// with [`Codec::add_uint`].
    ///
    /// Zero is written with exponent and mantissa fields of zero. Since
    /// `1.0` and `-1.0` decompose into the same fields, they read back
    /// as zero. Negative zero is written as positive zero.
    ///
    /// Fails for infinities and NaN, and for values whose exponent
    /// does not fit the exponent field, such as most subnormals.
    /// Nothing is written in those cases.
    pub fn add_double(&mut self, value: f64) -> Result<&mut Self> {
        self.add_floating(value, DOUBLE)
    }

    /// Reads a 32-bit float written by [`Codec::add_float`].
    pub fn read_float(&mut self) -> Result<f32> {
        self.read_floating(SINGLE).map(|v| v as f32)
    }

    /// Reads a 64-bit float written by [`Codec::add_double`].
    ///
    /// Results are approximations of the written values, bounded by
    /// the mantissa width and the accuracy of the decomposition. Only
    /// zero is guaranteed to read back exactly.
    pub fn read_double(&mut self) -> Result<f64> {
        self.read_floating(DOUBLE)
    }

    fn add_floating(&mut self, value: f64, layout: Layout) -> Result<&mut Self> {
        if !value.is_finite() {
            return Err(Error::NonFinite(value));
        }

        let (exponent, normalized) = if value == 0.0 {
            (0, 0)
        } else {
            let (mut exponent, mantissa) = decompose(value.abs());
            let mut normalized = ((mantissa - 1.0) * layout.scale()).round() as u64;

            // A fraction rounding up to a whole carries into the exponent.
            if normalized >> layout.mantissa_bits != 0 {
                exponent += 1;
                normalized = 0;
            }

            if !layout.exponents().contains(&exponent) {
                return Err(Error::ExponentOutOfRange {
                    exponent,
                    bits: layout.exponent_bits,
                });
            }

            (exponent, normalized)
        };

        self.add_bit(value < 0.0);
        self.add_int(exponent, layout.exponent_bits)?;
        self.add_uint(normalized, layout.mantissa_bits)
    }

    fn read_floating(&mut self, layout: Layout) -> Result<f64> {
        self.ensure_available(layout.total_bits())?;

        let sign = if self.read_bit()? { -1.0 } else { 1.0 };
        let exponent = self.read_int(layout.exponent_bits)?;
        let normalized = self.read_uint(layout.mantissa_bits)?;

        if exponent == 0 && normalized == 0 {
            return Ok(0.0);
        }

        let mantissa = normalized as f64 / layout.scale() + 1.0;
        Ok(sign * (exponent as f64).exp2() * mantissa)
    }
}
