//! Error types for snowflake decoding.
//!
//! This module defines the central `Error` enum, which captures every
//! recoverable failure a decode path can report. Encoding is total and never
//! appears here.
//!
//! ## Error Cases
//! - `InvalidDigit`: a decimal input byte outside `0`-`9`.
//! - `Empty`: decimal input with no bytes.
//! - `Overflow`: a decimal value that does not fit in 64 bits.
//! - `Negative`: input encoding a value below zero.
//! - `InvalidBit`: a bit-string byte other than `0` or `1`.
//! - `InvalidBitLen`: a bit-string whose length falls outside `1..=64`.

pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for snowflake decoding.
#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Decimal input contained a byte outside `0`-`9`.
    #[error("invalid decimal digit {byte:#04x} at index {index}")]
    InvalidDigit { byte: u8, index: usize },

    /// Decimal input was empty.
    #[error("empty decimal input")]
    Empty,

    /// The accumulated decimal value does not fit in 64 bits.
    #[error("decimal value overflows a 64-bit id")]
    Overflow,

    /// The input encodes a negative number; ids are unsigned.
    #[error("negative value is not a valid id")]
    Negative,

    /// A bit-string byte other than `0` or `1`.
    #[error("invalid bit character {byte:#04x} at index {index}")]
    InvalidBit { byte: u8, index: usize },

    /// A bit-string whose length falls outside `1..=64`.
    #[error("bit string length {len} is out of range (expected 1..=64)")]
    InvalidBitLen { len: usize },
}
