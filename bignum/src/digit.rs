//! Bounds-checked 32-bit magnitude cell.

use std::fmt;

use crate::error::BigIntError;

/// A single base-2^32 digit of a magnitude chain.
///
/// Sign lives on the enclosing [`crate::BigInt`]; a digit is always a
/// plain magnitude in `[0, u32::MAX]`. Adjustments return a new digit and
/// refuse to wrap — carry and borrow across the 32-bit boundary belong to
/// the arithmetic engine, which extends the chain instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u32);

impl Digit {
    /// Construct from a signed value, taking its absolute value.
    ///
    /// ```
    /// use bignum::Digit;
    ///
    /// assert_eq!(Digit::new(-7).unwrap().value(), 7);
    /// assert!(Digit::new(u32::MAX as i64).is_ok());
    /// assert!(Digit::new(u32::MAX as i64 + 1).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self, BigIntError> {
        let abs = value.unsigned_abs();
        if abs > u64::from(u32::MAX) {
            return Err(BigIntError::Range(value));
        }
        Ok(Self(abs as u32))
    }

    /// The raw magnitude.
    #[inline]
    pub fn value(self) -> u32 {
        self.0
    }

    /// A new digit increased by `delta`; errors instead of wrapping past
    /// the 32-bit boundary.
    pub fn increase(self, delta: u32) -> Result<Self, BigIntError> {
        self.0
            .checked_add(delta)
            .map(Self)
            .ok_or_else(|| BigIntError::Range(i64::from(self.0) + i64::from(delta)))
    }

    /// A new digit decreased by `delta`; errors instead of wrapping below
    /// zero.
    pub fn decrease(self, delta: u32) -> Result<Self, BigIntError> {
        self.0
            .checked_sub(delta)
            .map(Self)
            .ok_or_else(|| BigIntError::Range(i64::from(self.0) - i64::from(delta)))
    }
}

impl From<u32> for Digit {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
