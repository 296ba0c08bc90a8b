use crate::{Codec, Error, Result};

impl Codec {
    /// Writes a null-terminated byte string, one 8-bit unit per byte.
    ///
    /// Fails without writing anything when `value` contains a null
    /// byte, since it would cut the string short on reading.
    pub fn add_string<S: AsRef<[u8]>>(&mut self, value: S) -> Result<&mut Self> {
        let value = value.as_ref();
        if let Some(position) = value.iter().position(|&b| b == 0) {
            return Err(Error::EmbeddedNul { position });
        }

        // Only exact when the cursor is byte-aligned.
        self.reserve(value.len() + 1);

        for &b in value {
            self.add_uint(b as u64, u8::BITS)?;
        }
        self.add_uint(0, u8::BITS)
    }

    /// Reads a null-terminated byte string, excluding the terminator.
    ///
    /// Stops early without an error when fewer than 8 bits are left
    /// before a terminator shows up. Fails if not even a single unit
    /// can be read.
    pub fn read_string(&mut self) -> Result<Vec<u8>> {
        self.ensure_available(u8::BITS)?;

        let mut out = Vec::new();
        while self.remaining_bits() >= u8::BITS as usize {
            match self.read_uint(u8::BITS)? as u8 {
                0 => break,
                b => out.push(b),
            }
        }

        Ok(out)
    }

    /// Reads a string like [`Codec::read_string`] and validates it
    /// as UTF-8.
    pub fn read_str(&mut self) -> Result<String> {
        let bytes = self.read_string()?;
        String::from_utf8(bytes).map_err(Into::into)
    }
}
