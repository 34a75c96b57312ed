//! Sign-aware arithmetic over magnitude chains.
//!
//! Every signed operation reduces to two magnitude primitives:
//! [`add_magnitudes`] and [`sub_magnitudes`] (which requires `lhs >= rhs`;
//! callers compare first and swap, negating the result sign). Multiply and
//! divide work over the 32-bit digit sequences with 64-bit intermediates.
//! All functions borrow their operands and build fresh chains.

use std::cmp::Ordering;

use crate::bigint::BigInt;
use crate::block::Block;
use crate::error::BigIntError;
use crate::sign::Sign;

const BASE: u64 = 1 << 32;

/// Magnitude sum. Ripple carry at 32-bit granularity; a final carry
/// extends the chain with a new block instead of wrapping a digit.
pub fn add_magnitudes(lhs: &Block, rhs: &Block) -> Block {
    let mut out = Vec::with_capacity(lhs.num_blocks().max(rhs.num_blocks()) + 1);
    let mut left = Some(lhs);
    let mut right = Some(rhs);
    let mut carry = 0u64;

    while left.is_some() || right.is_some() || carry != 0 {
        let left_value = left.map_or(0, |block| u64::from(block.digit().value()));
        let right_value = right.map_or(0, |block| u64::from(block.digit().value()));
        let sum = left_value + right_value + carry;
        out.push((sum % BASE) as u32);
        carry = sum >> 32;
        left = left.and_then(Block::next);
        right = right.and_then(Block::next);
    }

    Block::from_digits(&out)
}

/// Magnitude difference; `lhs` must be at least `rhs`. Borrows propagate
/// at 32-bit granularity and the result is canonicalized.
pub fn sub_magnitudes(lhs: &Block, rhs: &Block) -> Block {
    let mut out = Vec::with_capacity(lhs.num_blocks());
    let mut left = Some(lhs);
    let mut right = Some(rhs);
    let mut borrow = 0u64;

    while left.is_some() || right.is_some() {
        let left_value = left.map_or(0, |block| u64::from(block.digit().value()));
        let right_value = right.map_or(0, |block| u64::from(block.digit().value()));
        let owed = right_value + borrow;
        if left_value >= owed {
            out.push((left_value - owed) as u32);
            borrow = 0;
        } else {
            out.push((left_value + BASE - owed) as u32);
            borrow = 1;
        }
        left = left.and_then(Block::next);
        right = right.and_then(Block::next);
    }
    debug_assert_eq!(borrow, 0, "sub_magnitudes requires lhs >= rhs");

    Block::from_digits(&out)
}

/// Magnitude product. Schoolbook multiplication: each pair of digit
/// positions contributes a 64-bit partial product accumulated at the
/// combined offset.
pub fn mul_magnitudes(lhs: &Block, rhs: &Block) -> Block {
    let a = lhs.digits();
    let b = rhs.digits();
    let mut wide = vec![0u32; a.len() + b.len()];

    for (i, &x) in a.iter().enumerate() {
        let mut carry = 0u64;
        for (j, &y) in b.iter().enumerate() {
            let partial = u64::from(x) * u64::from(y) + u64::from(wide[i + j]) + carry;
            wide[i + j] = partial as u32;
            carry = partial >> 32;
        }
        wide[i + b.len()] = carry as u32;
    }

    Block::from_digits(&wide)
}

/// Magnitude quotient and remainder by restoring binary long division,
/// most significant bit first. The divisor must be non-zero.
pub fn div_magnitudes(dividend: &Block, divisor: &Block) -> (Block, Block) {
    debug_assert!(!divisor.is_zero());
    let n = dividend.digits();
    let d = divisor.digits();
    let total_bits = n.len() * 32;
    let mut quotient = vec![0u32; n.len()];
    let mut remainder = vec![0u32; n.len()];

    for i in (0..total_bits).rev() {
        // remainder = remainder * 2 + bit i of the dividend
        let mut carry = 0u32;
        for limb in remainder.iter_mut() {
            let next_carry = *limb >> 31;
            *limb = (*limb << 1) | carry;
            carry = next_carry;
        }
        remainder[0] |= (n[i / 32] >> (i % 32)) & 1;

        if cmp_digits(&remainder, &d) != Ordering::Less {
            sub_digits_in_place(&mut remainder, &d);
            quotient[i / 32] |= 1 << (i % 32);
        }
    }

    (Block::from_digits(&quotient), Block::from_digits(&remainder))
}

/// Numeric comparison of LSB-first digit sequences of any lengths.
fn cmp_digits(lhs: &[u32], rhs: &[u32]) -> Ordering {
    for i in (0..lhs.len().max(rhs.len())).rev() {
        let left = lhs.get(i).copied().unwrap_or(0);
        let right = rhs.get(i).copied().unwrap_or(0);
        match left.cmp(&right) {
            Ordering::Equal => continue,
            decided => return decided,
        }
    }
    Ordering::Equal
}

/// `lhs -= rhs` over LSB-first digits; `lhs` must be at least `rhs`.
fn sub_digits_in_place(lhs: &mut [u32], rhs: &[u32]) {
    let mut borrow = 0u64;
    for (i, limb) in lhs.iter_mut().enumerate() {
        let left = u64::from(*limb);
        let owed = u64::from(rhs.get(i).copied().unwrap_or(0)) + borrow;
        if left >= owed {
            *limb = (left - owed) as u32;
            borrow = 0;
        } else {
            *limb = (left + BASE - owed) as u32;
            borrow = 1;
        }
    }
    debug_assert_eq!(borrow, 0, "sub_digits_in_place requires lhs >= rhs");
}

/// Signed addition, dispatching on the operand signs.
pub fn add(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    match (lhs.sign(), rhs.sign()) {
        (Sign::Zero, _) => rhs.clone(),
        (_, Sign::Zero) => lhs.clone(),
        // 5 + 3 = +(5 + 3), -5 + -3 = -(5 + 3)
        (Sign::Positive, Sign::Positive) | (Sign::Negative, Sign::Negative) => {
            BigInt::from_parts(lhs.sign(), add_magnitudes(lhs.magnitude(), rhs.magnitude()))
        }
        // opposite signs: magnitude difference, sign of the larger magnitude
        _ => match lhs.magnitude().compare(rhs.magnitude()) {
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => BigInt::from_parts(
                lhs.sign(),
                sub_magnitudes(lhs.magnitude(), rhs.magnitude()),
            ),
            Ordering::Less => BigInt::from_parts(
                rhs.sign(),
                sub_magnitudes(rhs.magnitude(), lhs.magnitude()),
            ),
        },
    }
}

/// Signed subtraction, dispatching on the operand signs.
pub fn sub(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    match (lhs.sign(), rhs.sign()) {
        (_, Sign::Zero) => lhs.clone(),
        (Sign::Zero, _) => rhs.negated(),
        // +5 - +3 and -5 - -3: same signs reduce to a magnitude
        // difference, swapping and negating when rhs is the larger
        (Sign::Positive, Sign::Positive) | (Sign::Negative, Sign::Negative) => {
            match lhs.magnitude().compare(rhs.magnitude()) {
                Ordering::Equal => BigInt::zero(),
                Ordering::Greater => BigInt::from_parts(
                    lhs.sign(),
                    sub_magnitudes(lhs.magnitude(), rhs.magnitude()),
                ),
                Ordering::Less => BigInt::from_parts(
                    lhs.sign().negate(),
                    sub_magnitudes(rhs.magnitude(), lhs.magnitude()),
                ),
            }
        }
        // 5 - -3 = +(5 + 3), -5 - +3 = -(5 + 3)
        (sign, _) => BigInt::from_parts(sign, add_magnitudes(lhs.magnitude(), rhs.magnitude())),
    }
}

/// Signed multiplication; the result sign is the sign product.
pub fn mul(lhs: &BigInt, rhs: &BigInt) -> BigInt {
    let sign = lhs.sign().product(rhs.sign());
    if sign == Sign::Zero {
        return BigInt::zero();
    }
    BigInt::from_parts(sign, mul_magnitudes(lhs.magnitude(), rhs.magnitude()))
}

/// Signed quotient and remainder, truncating toward zero: the quotient
/// carries the sign product, the remainder the dividend's sign.
pub fn div_rem(dividend: &BigInt, divisor: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
    if divisor.sign() == Sign::Zero {
        return Err(BigIntError::DivisionByZero);
    }
    if dividend.sign() == Sign::Zero {
        return Ok((BigInt::zero(), BigInt::zero()));
    }

    let (quotient, remainder) = div_magnitudes(dividend.magnitude(), divisor.magnitude());
    Ok((
        BigInt::from_parts(dividend.sign().product(divisor.sign()), quotient),
        BigInt::from_parts(dividend.sign(), remainder),
    ))
}
