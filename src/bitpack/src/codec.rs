use crate::{Error, Result};

#[cold]
#[inline(always)]
fn cold() {}

/// A buffer which enables bit-based serialization and deserialization
/// of data.
///
/// A single cursor is shared by reads and writes and only ever moves
/// forward. Writes extend the buffer as needed, reads never do.
///
/// Individual bit access starts at the LSB of the byte, working
/// towards the MSB.
///
/// All `add_*` methods return the codec again so calls can be chained:
///
/// ```
/// # fn main() -> bitpack::Result<()> {
/// let mut codec = bitpack::Codec::new();
/// codec.add_bit(true).add_uint(300, 9)?.add_int(-2, 4)?;
/// assert_eq!(codec.written_bits(), 14);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Codec {
    // The serialized bytes, either produced by writes or
    // handed in for reading.
    inner: Vec<u8>,

    // Absolute bit offset of the next read or write.
    //
    // Never points more than one bit past the end of `inner`.
    pos: usize,
}

impl Codec {
    /// Creates an empty [`Codec`] to write into.
    pub const fn new() -> Self {
        Self {
            inner: Vec::new(),
            pos: 0,
        }
    }

    /// Creates a [`Codec`] over existing bytes, positioned at the
    /// first bit.
    pub const fn from_vec(vec: Vec<u8>) -> Self {
        Self { inner: vec, pos: 0 }
    }

    /// Gets the current position of the cursor in bits.
    ///
    /// For a codec loaded for reading, this is the number of bits
    /// consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Gets the number of bits written so far.
    ///
    /// Same as [`Self::position`] for a codec that started out empty.
    #[inline]
    pub fn written_bits(&self) -> usize {
        self.pos
    }

    /// Gets the number of bits between the cursor and the end of
    /// the buffer.
    #[inline]
    pub fn remaining_bits(&self) -> usize {
        (self.inner.len() << 3).saturating_sub(self.pos)
    }

    /// Gets the length of the buffer in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the buffer holds no bytes at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Gets a view of the buffer's storage as a byte slice.
    #[inline]
    pub fn view(&self) -> &[u8] {
        &self.inner
    }

    /// Consumes the [`Codec`] and returns the byte buffer.
    #[inline]
    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }

    /// Reserves capacity for at least `nbytes` more bytes in the
    /// buffer.
    ///
    /// When the data format allows making educated guesses about
    /// size consumption, use this to optimize memory allocation.
    #[inline]
    pub fn reserve(&mut self, nbytes: usize) {
        self.inner.reserve(nbytes);
    }

    /// Writes a single bit at the cursor.
    ///
    /// Grows the buffer by a zeroed byte when the cursor crosses into
    /// a byte that does not exist yet.
    pub fn add_bit(&mut self, value: bool) -> &mut Self {
        let idx = self.pos >> 3;
        if idx == self.inner.len() {
            self.inner.push(0);
        }

        let mask = 1 << (self.pos & 7);
        if value {
            self.inner[idx] |= mask;
        } else {
            self.inner[idx] &= !mask;
        }

        self.pos += 1;
        self
    }

    /// Reads a single bit at the cursor.
    pub fn read_bit(&mut self) -> Result<bool> {
        let Some(&byte) = self.inner.get(self.pos >> 3) else {
            cold();
            return Err(self.out_of_bounds(1));
        };

        let bit = (byte >> (self.pos & 7)) & 1 != 0;
        self.pos += 1;

        Ok(bit)
    }

    /// Makes sure at least `nbits` bits can be read before a
    /// multi-bit read starts consuming them.
    #[inline]
    pub(crate) fn ensure_available(&self, nbits: u32) -> Result<()> {
        if nbits as usize <= self.remaining_bits() {
            Ok(())
        } else {
            cold();
            Err(self.out_of_bounds(nbits as usize))
        }
    }

    fn out_of_bounds(&self, bits: usize) -> Error {
        Error::OutOfBounds {
            position: self.pos,
            bits,
            len: self.inner.len(),
        }
    }
}

impl From<Vec<u8>> for Codec {
    fn from(vec: Vec<u8>) -> Self {
        Self::from_vec(vec)
    }
}

impl From<&[u8]> for Codec {
    fn from(data: &[u8]) -> Self {
        Self::from_vec(data.to_vec())
    }
}

impl From<Codec> for Vec<u8> {
    fn from(codec: Codec) -> Self {
        codec.into_inner()
    }
}
