//! Provides bit-granular packing of primitive values.
//!
//! Values are laid out back to back in a single bit stream without
//! any padding between them, so a 30-bit integer costs exactly 30
//! bits. The format is not self-describing: a reader must request
//! the same sequence of types and widths the writer produced.
//!
//! # Wire format
//!
//! Individual bits are written starting at the LSB of each byte,
//! working towards the MSB. Bytes are ordered by increasing index.
//!
//! | Value          | Layout                                                |
//! |----------------|-------------------------------------------------------|
//! | `bool`         | 1 bit                                                 |
//! | unsigned `W`   | `W` bits, least significant bit first                 |
//! | signed `W`     | sign bit + `W - 1` magnitude bits                     |
//! | `f32`          | sign bit + 8-bit signed exponent + 23-bit mantissa    |
//! | `f64`          | sign bit + 11-bit signed exponent + 52-bit mantissa   |
//! | string         | one 8-bit unit per byte + zero terminator             |
//!
//! Negative signed integers store `-value - 1` as their magnitude, so
//! there is no negative zero and the range of a `W`-bit field is
//! `-(2^(W-1))..=2^(W-1) - 1`.
//!
//! Floating-point values are decomposed numerically into an exponent
//! and a mantissa in `[1, 2)` rather than by reinterpreting their
//! IEEE 754 bits. See [`Codec::add_double`] for the caveats that come
//! with this.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod codec;
pub use codec::Codec;

mod error;
pub use error::{Error, Result};

mod float;

mod int;

mod string;
