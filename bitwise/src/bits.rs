//! Standalone bit utilities: number/bit-sequence conversion and
//! power-of-two helpers.

/// Fold an LSB-ordered bit sequence into an unsigned value by positional
/// weight. Positions past bit 63 are ignored.
///
/// ```
/// use bitwise::bits::bits_to_number;
///
/// // 101 read LSB-first is 1 + 4
/// assert_eq!(bits_to_number(&[true, false, true]), 5);
/// ```
pub fn bits_to_number(bits: &[bool]) -> u64 {
    bits.iter()
        .enumerate()
        .take(64)
        .fold(0u64, |acc, (i, &bit)| {
            if bit {
                acc | (1u64 << i)
            } else {
                acc
            }
        })
}

/// Bits of `num`, least significant first. Zero yields a single false bit.
pub fn bits_lsb(mut num: u64) -> Vec<bool> {
    if num == 0 {
        return vec![false];
    }
    let mut out = Vec::new();
    while num != 0 {
        out.push(num & 1 == 1);
        num >>= 1;
    }
    out
}

/// Bits of `num`, most significant first. Zero yields a single false bit.
pub fn bits_msb(num: u64) -> Vec<bool> {
    let mut out = bits_lsb(num);
    out.reverse();
    out
}

/// Whether `num` is an exact power of two.
pub fn is_power_of_two(num: u64) -> bool {
    num != 0 && num & (num - 1) == 0
}

/// Smallest power of two strictly greater than `num` for exact powers and
/// zero, otherwise the next power of two above `num`: `0 -> 1`,
/// `114 -> 128`, `128 -> 256`. Wraps to zero above `2^63`.
pub fn next_power_of_two(num: u64) -> u64 {
    if num == 0 {
        return 1;
    }
    if is_power_of_two(num) {
        return num.wrapping_shl(1);
    }
    let mut n = num - 1;
    n |= n >> 1;
    n |= n >> 2;
    n |= n >> 4;
    n |= n >> 8;
    n |= n >> 16;
    n |= n >> 32;
    n.wrapping_add(1)
}
