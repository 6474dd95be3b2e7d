/// External shapes accepted by [`Snowflake::coerce`].
///
/// IDs arrive from the outside either as decimal text or as a native
/// integer of any width up to 64 bits; this enum closes over exactly those
/// shapes.
///
/// [`Snowflake::coerce`]: crate::Snowflake::coerce
#[derive(Copy, Clone, Debug)]
pub enum IdInput<'a> {
    /// Unsigned decimal text.
    Text(&'a str),
    /// A native unsigned integer, used bit-for-bit.
    Unsigned(u64),
    /// A native signed integer, reinterpreted bit-for-bit.
    Signed(i64),
}

impl<'a> From<&'a str> for IdInput<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(s)
    }
}

impl From<u8> for IdInput<'_> {
    fn from(n: u8) -> Self {
        Self::Unsigned(u64::from(n))
    }
}

impl From<u16> for IdInput<'_> {
    fn from(n: u16) -> Self {
        Self::Unsigned(u64::from(n))
    }
}

impl From<u32> for IdInput<'_> {
    fn from(n: u32) -> Self {
        Self::Unsigned(u64::from(n))
    }
}

impl From<u64> for IdInput<'_> {
    fn from(n: u64) -> Self {
        Self::Unsigned(n)
    }
}

impl From<i8> for IdInput<'_> {
    fn from(n: i8) -> Self {
        Self::Signed(i64::from(n))
    }
}

impl From<i16> for IdInput<'_> {
    fn from(n: i16) -> Self {
        Self::Signed(i64::from(n))
    }
}

impl From<i32> for IdInput<'_> {
    fn from(n: i32) -> Self {
        Self::Signed(i64::from(n))
    }
}

impl From<i64> for IdInput<'_> {
    fn from(n: i64) -> Self {
        Self::Signed(n)
    }
}
