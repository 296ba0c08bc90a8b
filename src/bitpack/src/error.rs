use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors that may occur when packing or unpacking values.
#[derive(Debug, Error)]
pub enum Error {
    /// A read requested more bits than are left in the buffer.
    #[error("attempted to read {bits} bits at bit {position} out of bounds of a {len}-byte buffer")]
    OutOfBounds {
        position: usize,
        bits: usize,
        len: usize,
    },

    /// An integer width outside of the supported range was requested.
    #[error("unsupported bit width {bits}; expected a value in {min}..={max}")]
    InvalidWidth { bits: u32, min: u32, max: u32 },

    /// Infinities and NaNs have no representation in the float format.
    #[error("cannot encode non-finite float value {0}")]
    NonFinite(f64),

    /// The binary exponent of a value does not fit in its field.
    #[error("exponent {exponent} does not fit in a {bits}-bit signed field")]
    ExponentOutOfRange { exponent: i64, bits: u32 },

    /// A string to be written contains its own terminator.
    #[error("string contains a null byte at index {position}")]
    EmbeddedNul { position: usize },

    /// A decoded string was not valid UTF-8.
    #[error("{0}")]
    Utf8(#[from] FromUtf8Error),
}

/// A [`Result`][std::result::Result] with [`Error`] as its error type.
pub type Result<T> = std::result::Result<T, Error>;
