//! Signed arbitrary-precision integer facade.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use crate::block::Block;
use crate::error::BigIntError;
use crate::math;
use crate::parser;
use crate::sign::Sign;

/// Arbitrary-precision signed integer: a [`Sign`] plus a little-endian
/// chain of 32-bit magnitude blocks.
///
/// Values are immutable. Every operation returns a new `BigInt` and never
/// writes through its operands, so values can be shared freely.
///
/// ```
/// use bignum::BigInt;
///
/// let a = BigInt::from(5);
/// let b = BigInt::from(-3);
/// assert_eq!(&a - &b, BigInt::from(8));
/// assert_eq!(&a + &b, BigInt::from(2));
/// ```
#[derive(Clone, Debug)]
pub struct BigInt {
    sign: Sign,
    magnitude: Block,
}

impl BigInt {
    pub fn zero() -> Self {
        Self {
            sign: Sign::Zero,
            magnitude: Block::zero(),
        }
    }

    pub fn one() -> Self {
        Self::from(1)
    }

    pub fn negative_one() -> Self {
        Self::from(-1)
    }

    /// Magnitude with an explicit sign; the sign normalizes to `Zero` for
    /// a zero magnitude.
    pub fn from_u32(value: u32, sign: Sign) -> Self {
        Self::from_parts(sign, Block::from_digits(&[value]))
    }

    /// Sign plus LSB-first magnitude digits, canonicalized. A `Zero` sign
    /// yields zero whatever the digits say, mirroring the zero-magnitude
    /// normalization in the other direction.
    ///
    /// ```
    /// use bignum::{BigInt, Sign};
    ///
    /// let value = BigInt::from_digits(Sign::Positive, &[0, 1]); // 2^32
    /// assert_eq!(value, BigInt::from(1i64 << 32));
    /// assert_eq!(BigInt::from_digits(Sign::Negative, &[0]), BigInt::zero());
    /// ```
    pub fn from_digits(sign: Sign, digits: &[u32]) -> Self {
        Self::from_parts(sign, Block::from_digits(digits))
    }

    pub(crate) fn from_parts(sign: Sign, magnitude: Block) -> Self {
        // sign and magnitude must agree on zeroness: a zero magnitude
        // drops the sign, a Zero sign drops the magnitude
        if sign == Sign::Zero || magnitude.is_zero() {
            return Self::zero();
        }
        Self { sign, magnitude }
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub(crate) fn magnitude(&self) -> &Block {
        &self.magnitude
    }

    /// LSB-first magnitude digits.
    pub fn digits(&self) -> Vec<u32> {
        self.magnitude.digits()
    }

    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    /// The same value with the sign flipped; zero stays zero.
    pub fn negated(&self) -> Self {
        Self {
            sign: self.sign.negate(),
            magnitude: self.magnitude.clone(),
        }
    }

    /// Quotient and remainder, truncating toward zero. The quotient takes
    /// the sign product, the remainder the dividend's sign.
    ///
    /// ```
    /// use bignum::BigInt;
    ///
    /// let (q, r) = BigInt::from(-7).div_rem(&BigInt::from(2)).unwrap();
    /// assert_eq!((q, r), (BigInt::from(-3), BigInt::from(-1)));
    /// assert!(BigInt::from(1).div_rem(&BigInt::zero()).is_err());
    /// ```
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
        math::div_rem(self, divisor)
    }

    /// Parse a binary magnitude string; see [`parser::parse`].
    pub fn parse(text: &str) -> Result<Self, BigIntError> {
        parser::parse(text)
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        let abs = value.unsigned_abs();
        let digits = [abs as u32, (abs >> 32) as u32];
        Self::from_parts(Sign::of(value), Block::from_digits(&digits))
    }
}

impl From<i32> for BigInt {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parser::parse(text)
    }
}

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> BigInt {
        math::add(self, rhs)
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: Self) -> BigInt {
        math::sub(self, rhs)
    }
}

impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: Self) -> BigInt {
        math::mul(self, rhs)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.negated()
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, rhs: Self) -> BigInt {
        math::add(&self, &rhs)
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: Self) -> BigInt {
        math::sub(&self, &rhs)
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: Self) -> BigInt {
        math::mul(&self, &rhs)
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.negated()
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigInt {}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        // opposite signs settle it; equal signs defer to the magnitudes,
        // reversed for two negatives
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => {}
            decided => return decided,
        }
        match self.sign {
            Sign::Zero => Ordering::Equal,
            Sign::Positive => self.magnitude.compare(&other.magnitude),
            Sign::Negative => other.magnitude.compare(&self.magnitude),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign.hash(state);
        // hash only significant digits so padded chains agree with Eq
        let digits = self.magnitude.digits();
        let significant = digits.iter().rposition(|&d| d != 0).map_or(0, |i| i + 1);
        digits[..significant].hash(state);
    }
}

impl TryFrom<&BigInt> for i32 {
    type Error = BigIntError;

    /// Narrowing conversion; errors when the magnitude exceeds `i32::MAX`.
    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        if value.magnitude.significant_blocks() > 1 {
            return Err(BigIntError::Overflow);
        }
        let magnitude = value.magnitude.digit().value();
        if magnitude > i32::MAX as u32 {
            return Err(BigIntError::Overflow);
        }
        let magnitude = magnitude as i32;
        Ok(match value.sign {
            Sign::Negative => -magnitude,
            _ => magnitude,
        })
    }
}

impl TryFrom<BigInt> for i32 {
    type Error = BigIntError;

    fn try_from(value: BigInt) -> Result<Self, Self::Error> {
        i32::try_from(&value)
    }
}

impl TryFrom<&BigInt> for i64 {
    type Error = BigIntError;

    /// Narrowing conversion; errors when the magnitude exceeds `i64::MAX`.
    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        let digits = value.magnitude.digits();
        if value.magnitude.significant_blocks() > 2 {
            return Err(BigIntError::Overflow);
        }
        let low = u64::from(digits[0]);
        let high = digits.get(1).copied().map_or(0, u64::from);
        let magnitude = (high << 32) | low;
        if magnitude > i64::MAX as u64 {
            return Err(BigIntError::Overflow);
        }
        let magnitude = magnitude as i64;
        Ok(match value.sign {
            Sign::Negative => -magnitude,
            _ => magnitude,
        })
    }
}

impl TryFrom<BigInt> for i64 {
    type Error = BigIntError;

    fn try_from(value: BigInt) -> Result<Self, Self::Error> {
        i64::try_from(&value)
    }
}

impl fmt::Display for BigInt {
    /// `"<glyph> <chain>"` — glyph is `+`, empty, or `-`; the chain is
    /// rendered most-significant block first with an `"... ← "` marker
    /// when more than one block exists.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.sign.glyph(), self.magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_roundtrips_through_i32() {
        for value in [-17, -1, 0, 1, 17, i32::MAX, -i32::MAX] {
            let big = BigInt::from(value);
            assert_eq!(i32::try_from(&big).unwrap(), value);
        }
    }

    #[test]
    fn construction_splits_large_values_into_blocks() {
        let big = BigInt::from(1i64 << 32);
        assert_eq!(big.digits(), vec![0, 1]);
        assert_eq!(i64::try_from(&big).unwrap(), 1i64 << 32);

        let neg = BigInt::from(i64::MIN + 1);
        assert_eq!(i64::try_from(&neg).unwrap(), i64::MIN + 1);
    }

    #[test]
    fn zero_has_zero_sign() {
        assert_eq!(BigInt::from(0).sign(), Sign::Zero);
        assert!(BigInt::from(0).is_zero());
        assert_eq!(BigInt::from(0), BigInt::zero());
    }

    #[test]
    fn clone_compares_equal() {
        let value = BigInt::from(-31_415);
        assert_eq!(value.clone(), value);
    }

    #[test]
    fn negation_flips_sign_and_fixes_zero() {
        assert_eq!(-&BigInt::from(5), BigInt::from(-5));
        assert_eq!(-&BigInt::from(-5), BigInt::from(5));
        assert_eq!(-&BigInt::zero(), BigInt::zero());
    }

    #[test]
    fn subtract_table() {
        let cases = [
            (-17i64, 0i64, -17i64),
            (-1, 0, -1),
            (0, 0, 0),
            (1, 0, 1),
            (17, 0, 17),
            (-17, -1, -16),
            (-1, -1, 0),
            (0, -1, 1),
            (1, -1, 2),
            (17, -1, 18),
            (5, -3, 8),
        ];
        for (lhs, rhs, expected) in cases {
            assert_eq!(
                BigInt::from(lhs) - BigInt::from(rhs),
                BigInt::from(expected),
                "{lhs} - {rhs}"
            );
        }
    }

    #[test]
    fn add_sign_dispatch_table() {
        let cases = [
            (5i64, 3i64),
            (-5, -3),
            (5, -3),
            (-5, 3),
            (3, -5),
            (-3, 5),
            (5, -5),
            (0, -3),
            (3, 0),
        ];
        for (lhs, rhs) in cases {
            assert_eq!(
                BigInt::from(lhs) + BigInt::from(rhs),
                BigInt::from(lhs + rhs),
                "{lhs} + {rhs}"
            );
        }
    }

    #[test]
    fn multiply_small_table() {
        let cases = [(6i64, 7i64), (-6, 7), (6, -7), (-6, -7), (0, 7), (6, 0)];
        for (lhs, rhs) in cases {
            assert_eq!(
                BigInt::from(lhs) * BigInt::from(rhs),
                BigInt::from(lhs * rhs),
                "{lhs} * {rhs}"
            );
        }
    }

    #[test]
    fn multiply_crosses_blocks() {
        let a = BigInt::from(u32::MAX as i64);
        let square = &a * &a;
        assert_eq!(i64::try_from(&square).unwrap(), (u32::MAX as i64).pow(2));
    }

    #[test]
    fn ordering_handles_negative_magnitudes() {
        assert!(BigInt::from(-5) < BigInt::from(-3));
        assert!(BigInt::from(-3) < BigInt::from(0));
        assert!(BigInt::from(0) < BigInt::from(3));
        assert!(BigInt::from(3) < BigInt::from(5));
        assert!(BigInt::from(-1) < BigInt::from(1));
    }

    #[test]
    fn equality_ignores_padded_high_zeros() {
        let canonical = BigInt::from(7);
        let padded = BigInt::from_digits(Sign::Positive, &[7, 0, 0]);
        assert_eq!(canonical, padded);
    }

    #[test]
    fn narrowing_to_i32_overflows() {
        assert_eq!(
            i32::try_from(&BigInt::from(i32::MAX as i64 + 1)),
            Err(BigIntError::Overflow)
        );
        assert_eq!(
            i32::try_from(&BigInt::from(-(i32::MAX as i64) - 1)),
            Err(BigIntError::Overflow)
        );
        assert_eq!(i32::try_from(&BigInt::from(i32::MAX)), Ok(i32::MAX));
    }

    #[test]
    fn narrowing_to_i64_overflows() {
        let too_big = BigInt::from_digits(Sign::Positive, &[0, 0, 1]);
        assert_eq!(i64::try_from(&too_big), Err(BigIntError::Overflow));
        // magnitude 2^63 does not fit even though i64::MIN holds it
        assert_eq!(
            i64::try_from(&BigInt::from(i64::MIN)),
            Err(BigIntError::Overflow)
        );
        assert_eq!(
            i64::try_from(&BigInt::from(i64::MAX)),
            Ok(i64::MAX)
        );
    }

    #[test]
    fn display_formats_sign_and_chain() {
        assert_eq!(BigInt::from(5).to_string(), "+ 5");
        assert_eq!(BigInt::from(-3).to_string(), "- 3");
        assert_eq!(BigInt::zero().to_string(), " 0");
        assert_eq!(BigInt::from(1i64 << 32).to_string(), "+ ... ← 1 0");
    }

    #[test]
    fn constants() {
        assert_eq!(BigInt::one(), BigInt::from(1));
        assert_eq!(BigInt::negative_one(), BigInt::from(-1));
        assert_eq!(BigInt::one() + BigInt::negative_one(), BigInt::zero());
    }

    #[test]
    fn from_u32_normalizes_zero() {
        assert_eq!(BigInt::from_u32(0, Sign::Negative), BigInt::zero());
        assert_eq!(BigInt::from_u32(9, Sign::Negative), BigInt::from(-9));
    }

    #[test]
    fn zero_sign_forces_zero_value() {
        let coerced = BigInt::from_digits(Sign::Zero, &[5]);
        assert_eq!(coerced, BigInt::zero());
        assert!(coerced.is_zero());
        assert_eq!(coerced.digits(), vec![0]);
        assert_eq!(BigInt::from_u32(5, Sign::Zero), BigInt::zero());
    }

    #[test]
    fn equal_values_hash_equal() {
        use std::collections::hash_map::DefaultHasher;

        fn fingerprint(value: &BigInt) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        let pairs = [
            (BigInt::from_digits(Sign::Zero, &[5]), BigInt::zero()),
            (BigInt::from_digits(Sign::Positive, &[7, 0, 0]), BigInt::from(7)),
            (BigInt::from_u32(0, Sign::Negative), BigInt::zero()),
        ];
        for (lhs, rhs) in &pairs {
            assert_eq!(lhs, rhs);
            assert_eq!(fingerprint(lhs), fingerprint(rhs));
        }
    }
}
