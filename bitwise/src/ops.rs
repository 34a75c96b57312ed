//! Pure operations over fixed-length bit sequences.
//!
//! Bit index 0 is the most significant (sign) bit; the last index is the
//! least significant. Every function returns a freshly allocated vector of
//! the input length and leaves its operands untouched. Binary operations
//! require equal-length operands and report [`BitsError::LengthMismatch`]
//! otherwise.

use crate::error::BitsError;

fn check_len(lhs: &[bool], rhs: &[bool]) -> Result<(), BitsError> {
    if lhs.len() != rhs.len() {
        return Err(BitsError::LengthMismatch {
            lhs: lhs.len(),
            rhs: rhs.len(),
        });
    }
    Ok(())
}

/// Ripple-carry core shared by [`add`], [`unary_minus`] and [`multiply`].
/// Lengths must already match.
fn ripple_add(lhs: &[bool], rhs: &[bool]) -> Vec<bool> {
    debug_assert_eq!(lhs.len(), rhs.len());
    let mut result = vec![false; lhs.len()];
    let mut carry = false;
    for i in (0..lhs.len()).rev() {
        result[i] = lhs[i] ^ rhs[i] ^ carry;
        carry = (lhs[i] && rhs[i]) || (lhs[i] && carry) || (rhs[i] && carry);
    }
    result
}

/// Sum of two equal-length sequences. The carry out of the top bit is
/// discarded, so the result wraps modulo `2^len` — the usual fixed-width
/// twos-complement overflow behavior.
///
/// ```
/// use bitwise::ops::add;
///
/// // 3 + 1 = 4 in four bits
/// let sum = add(&[false, false, true, true], &[false, false, false, true]).unwrap();
/// assert_eq!(sum, vec![false, true, false, false]);
/// ```
pub fn add(lhs: &[bool], rhs: &[bool]) -> Result<Vec<bool>, BitsError> {
    check_len(lhs, rhs)?;
    Ok(ripple_add(lhs, rhs))
}

/// Bitwise complement.
pub fn invert(input: &[bool]) -> Vec<bool> {
    input.iter().map(|&bit| !bit).collect()
}

/// Twos-complement negation: invert, then add a one in the least
/// significant position.
pub fn unary_minus(input: &[bool]) -> Vec<bool> {
    if input.is_empty() {
        return Vec::new();
    }
    let mut one = vec![false; input.len()];
    one[input.len() - 1] = true;
    ripple_add(&invert(input), &one)
}

/// Difference of two equal-length sequences, as `lhs + (-rhs)`. Wraps on
/// overflow like [`add`].
pub fn subtract(lhs: &[bool], rhs: &[bool]) -> Result<Vec<bool>, BitsError> {
    check_len(lhs, rhs)?;
    Ok(ripple_add(lhs, &unary_minus(rhs)))
}

/// Booth's multiplication over equal-length twos-complement operands.
///
/// Both operands are sign-extended by one guard bit; the accumulator holds
/// the extended multiplier in its low bits above a guard LSB, with the
/// `A = m` and `S = -m` addend rows at the high end. Each round inspects
/// the two least significant accumulator bits (`01` adds A, `10` adds S)
/// and arithmetic-right-shifts by one. The output is the low
/// `len(m) + len(r) + 2` bits.
///
/// ```
/// use bitwise::ops::multiply;
///
/// // 1 x 1 = 1 in four result bits
/// let p = multiply(&[true], &[true]).unwrap();
/// assert_eq!(p, vec![false, false, false, true]);
/// ```
pub fn multiply(m: &[bool], r: &[bool]) -> Result<Vec<bool>, BitsError> {
    check_len(m, r)?;
    if m.is_empty() {
        return Ok(Vec::new());
    }

    // Sign-extend by one guard bit so A and S always fit.
    let mut extended_m = Vec::with_capacity(m.len() + 1);
    extended_m.push(m[0]);
    extended_m.extend_from_slice(m);
    let mut extended_r = Vec::with_capacity(r.len() + 1);
    extended_r.push(r[0]);
    extended_r.extend_from_slice(r);

    let width = extended_m.len() + extended_r.len() + 1;

    let mut a = vec![false; width];
    a[..extended_m.len()].copy_from_slice(&extended_m);
    let minus_m = unary_minus(&extended_m);
    let mut s = vec![false; width];
    s[..extended_m.len()].copy_from_slice(&minus_m);

    // Multiplier in the low bits, one guard bit below it.
    let mut acc = vec![false; width];
    acc[extended_m.len()..width - 1].copy_from_slice(&extended_r);

    // 00 / 11 -> no sum, 01 -> acc + A, 10 -> acc + S
    for _ in 0..extended_r.len() {
        let current = acc[width - 2];
        let previous = acc[width - 1];
        if !current && previous {
            acc = ripple_add(&acc, &a);
        } else if current && !previous {
            acc = ripple_add(&acc, &s);
        }
        acc = arithmetic_right_shift(&acc, 1);
    }

    // Drop the guard bit.
    acc.truncate(width - 1);
    Ok(acc)
}

/// Shift toward the least significant end, replicating the sign bit into
/// the vacated high positions. A shift of the full length or more yields a
/// vector of sign bits.
pub fn arithmetic_right_shift(input: &[bool], shift: usize) -> Vec<bool> {
    if input.is_empty() {
        return Vec::new();
    }
    let mut result = vec![input[0]; input.len()];
    if shift >= input.len() {
        return result;
    }
    for i in shift..input.len() {
        result[i] = input[i - shift];
    }
    result
}
