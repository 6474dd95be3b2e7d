use crate::codec;
use crate::id::IdInput;
use crate::{Error, Result};
use core::fmt;
use core::str::FromStr;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// A 64-bit snowflake-style ID.
///
/// - 42 bits timestamp (offset since a scheme-defined epoch)
/// - 22 bits generator payload (machine ID and sequence)
///
/// ```text
///  Bit Index:  63             22 21           0
///              +----------------+--------------+
///  Field:      | timestamp (42) | payload (22) |
///              +----------------+--------------+
///              |<-- MSB --- 64 bits --- LSB -->|
/// ```
///
/// The payload bits are opaque to this crate: they belong to whatever
/// generator minted the ID and are carried through every codec untouched.
/// The value `0` is reserved to mean "absent" and is never produced by
/// successfully parsing nonzero input.
///
/// # Example
///
/// ```
/// use snowid::Snowflake;
///
/// let id = Snowflake::from_raw(146_048_121_814_417_408);
/// assert!(id.is_valid());
/// assert_eq!(id.to_string(), "146048121814417408");
/// ```
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Snowflake {
    id: u64,
}

impl Snowflake {
    /// Number of bits to shift the timestamp down from its position (bit 22).
    pub const TIMESTAMP_SHIFT: u64 = 22;

    /// Wraps a known-good integer. Never fails.
    pub const fn from_raw(raw: u64) -> Self {
        Self { id: raw }
    }

    /// Converts this ID into its raw integer representation.
    pub const fn to_raw(&self) -> u64 {
        self.id
    }

    /// Returns true iff the ID is the reserved "absent" value.
    pub const fn is_zero(&self) -> bool {
        self.id == 0
    }

    /// Returns true iff the timestamp field is nonzero.
    ///
    /// An ID whose 64 bits hold only generator payload was not minted by a
    /// clock-bearing scheme and is rejected here.
    pub const fn is_valid(&self) -> bool {
        (self.id >> Self::TIMESTAMP_SHIFT) >= 1
    }

    /// Extracts the timestamp field: the offset since the scheme's epoch.
    pub const fn timestamp(&self) -> u64 {
        self.id >> Self::TIMESTAMP_SHIFT
    }

    /// Parses an unsigned decimal string.
    ///
    /// This is the engine under [`FromStr`], [`Snowflake::must_parse`], and
    /// the string arm of [`Snowflake::coerce`]. The digit loop uses checked
    /// arithmetic, so a value past [`u64::MAX`] reports [`Error::Overflow`]
    /// rather than wrapping.
    ///
    /// # Errors
    ///
    /// Returns an error if `s` is empty, contains a byte outside `0`-`9`,
    /// or encodes a value that does not fit in 64 bits.
    #[cfg_attr(feature = "tracing", instrument(level = "trace"))]
    pub fn from_dec_str(s: &str) -> Result<Self> {
        codec::parse_decimal(s).map(Self::from_raw)
    }

    /// Parses a decimal string, panicking on malformed input.
    ///
    /// The assert-valid companion to [`Snowflake::from_dec_str`], for
    /// trusted call sites where a malformed ID is a programming error
    /// rather than external data. Untrusted input goes through
    /// [`Snowflake::from_dec_str`] or [`Snowflake::coerce`] instead.
    ///
    /// # Panics
    ///
    /// Panics if `s` is empty, contains a non-digit byte, or encodes a
    /// value larger than [`u64::MAX`].
    #[must_use]
    pub fn must_parse(s: &str) -> Self {
        match Self::from_dec_str(s) {
            Ok(id) => id,
            Err(e) => panic!("malformed snowflake id {s:?}: {e}"),
        }
    }

    /// Builds an ID from any accepted external shape.
    ///
    /// Decimal text parses like [`Snowflake::from_dec_str`] and reports
    /// failure through the result. Native integers are taken bit-for-bit
    /// and never fail; signed input keeps its bits, not its sign.
    ///
    /// # Example
    ///
    /// ```
    /// use snowid::Snowflake;
    ///
    /// let a = Snowflake::coerce("123123123").unwrap();
    /// let b = Snowflake::coerce(123_123_123_u64).unwrap();
    /// assert_eq!(a, b);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error only for text input, with the same cases as
    /// [`Snowflake::from_dec_str`].
    pub fn coerce<'a>(input: impl Into<IdInput<'a>>) -> Result<Self> {
        match input.into() {
            IdInput::Text(s) => Self::from_dec_str(s),
            IdInput::Unsigned(n) => Ok(Self::from_raw(n)),
            IdInput::Signed(n) => Ok(Self::from_raw(n as u64)),
        }
    }

    /// Formats the ID as lowercase hex without a prefix.
    pub fn hex_string(&self) -> String {
        format!("{self:x}")
    }

    /// Formats the ID as lowercase hex with a `0x` prefix.
    pub fn hex_pretty_string(&self) -> String {
        format!("{self:#x}")
    }

    /// Spells the ID in base 2 as an ASCII `0`/`1` string.
    ///
    /// The inverse of [`Snowflake::from_bit_str`].
    pub fn to_bit_string(&self) -> String {
        codec::encode_bits(self.id)
    }

    /// Parses an ASCII `0`/`1` bit-string.
    ///
    /// # Errors
    ///
    /// Returns an error if `s` is empty, longer than 64 characters, or
    /// contains a byte other than `0` or `1`.
    #[cfg_attr(feature = "tracing", instrument(level = "trace"))]
    pub fn from_bit_str(s: &str) -> Result<Self> {
        codec::parse_bits(s).map(Self::from_raw)
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl fmt::Debug for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snowflake")
            .field("id", &format_args!("{} ({:#x})", self.id, self.id))
            .field("timestamp", &self.timestamp())
            .finish()
    }
}

impl fmt::LowerHex for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.id, f)
    }
}

impl fmt::Binary for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.id, f)
    }
}

impl FromStr for Snowflake {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_dec_str(s)
    }
}

impl From<u64> for Snowflake {
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<Snowflake> for u64 {
    fn from(id: Snowflake) -> Self {
        id.to_raw()
    }
}
