//! Operator facade over the pure engine in [`crate::ops`].

use std::ops::{Add, Mul, Neg, Not, Shr, Sub};

use crate::bits;
use crate::error::BitsError;
use crate::ops;

/// Fixed-length bit sequence, most significant bit first, with
/// twos-complement semantics under the arithmetic operators.
///
/// Binary operators take references and return `Result`, surfacing a
/// length mismatch instead of panicking:
///
/// ```
/// use bitwise::BitVector;
///
/// let a = BitVector::new(vec![false, true, true]); // 3
/// let b = BitVector::new(vec![false, false, true]); // 1
/// assert_eq!((&a + &b).unwrap(), BitVector::new(vec![true, false, false]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitVector {
    bits: Vec<bool>,
}

impl BitVector {
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Minimal MSB-first representation of an unsigned value; zero becomes
    /// a single false bit.
    pub fn from_u64(num: u64) -> Self {
        Self {
            bits: bits::bits_msb(num),
        }
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Unsigned positional reading of the bits.
    pub fn to_number(&self) -> u64 {
        let lsb_first: Vec<bool> = self.bits.iter().rev().copied().collect();
        bits::bits_to_number(&lsb_first)
    }
}

impl Add for &BitVector {
    type Output = Result<BitVector, BitsError>;

    fn add(self, rhs: Self) -> Self::Output {
        ops::add(&self.bits, &rhs.bits).map(BitVector::new)
    }
}

impl Sub for &BitVector {
    type Output = Result<BitVector, BitsError>;

    fn sub(self, rhs: Self) -> Self::Output {
        ops::subtract(&self.bits, &rhs.bits).map(BitVector::new)
    }
}

impl Mul for &BitVector {
    type Output = Result<BitVector, BitsError>;

    fn mul(self, rhs: Self) -> Self::Output {
        ops::multiply(&self.bits, &rhs.bits).map(BitVector::new)
    }
}

impl Neg for &BitVector {
    type Output = BitVector;

    fn neg(self) -> BitVector {
        BitVector::new(ops::unary_minus(&self.bits))
    }
}

impl Not for &BitVector {
    type Output = BitVector;

    fn not(self) -> BitVector {
        BitVector::new(ops::invert(&self.bits))
    }
}

impl Shr<usize> for &BitVector {
    type Output = BitVector;

    fn shr(self, shift: usize) -> BitVector {
        BitVector::new(ops::arithmetic_right_shift(&self.bits, shift))
    }
}
