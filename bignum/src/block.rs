//! Little-endian chain of 32-bit magnitude blocks.

use std::cmp::Ordering;
use std::fmt;

use crate::digit::Digit;

/// One node of a magnitude chain. Owns its digit and, exclusively, the
/// next more-significant block: chains are acyclic and never shared, and
/// every operation that produces a chain allocates a fresh one. Block 0 is
/// the least significant.
///
/// The canonical form carries no high zero blocks beyond a single terminal
/// zero; [`Block::compare`] treats any run of high zeros as absent even
/// when a chain is not canonical.
#[derive(Debug)]
pub struct Block {
    digit: Digit,
    next: Option<Box<Block>>,
}

impl Block {
    /// A single zero block.
    pub fn zero() -> Self {
        Self {
            digit: Digit::from(0),
            next: None,
        }
    }

    pub fn new(digit: Digit) -> Self {
        Self { digit, next: None }
    }

    /// Canonical chain from LSB-first digit values: high zero digits are
    /// trimmed down to a single terminal zero block.
    ///
    /// ```
    /// use bignum::Block;
    ///
    /// let chain = Block::from_digits(&[7, 0, 3, 0, 0]);
    /// assert_eq!(chain.digits(), vec![7, 0, 3]);
    /// assert_eq!(Block::from_digits(&[]).digits(), vec![0]);
    /// ```
    pub fn from_digits(digits: &[u32]) -> Self {
        let significant = digits.iter().rposition(|&d| d != 0).map_or(0, |i| i + 1);
        if significant == 0 {
            return Self::zero();
        }
        let mut chain = Self::new(Digit::from(digits[significant - 1]));
        for &digit in digits[..significant - 1].iter().rev() {
            chain = Self {
                digit: Digit::from(digit),
                next: Some(Box::new(chain)),
            };
        }
        chain
    }

    /// LSB-first digit values, including any non-canonical high zeros.
    pub fn digits(&self) -> Vec<u32> {
        let mut out = Vec::new();
        let mut current = Some(self);
        while let Some(block) = current {
            out.push(block.digit.value());
            current = block.next.as_deref();
        }
        out
    }

    #[inline]
    pub fn digit(&self) -> Digit {
        self.digit
    }

    /// The next more-significant block, if any.
    #[inline]
    pub fn next(&self) -> Option<&Block> {
        self.next.as_deref()
    }

    /// Number of blocks in the chain, non-canonical zeros included.
    pub fn num_blocks(&self) -> usize {
        let mut count = 0;
        let mut current = Some(self);
        while let Some(block) = current {
            count += 1;
            current = block.next.as_deref();
        }
        count
    }

    /// Number of blocks ignoring high zeros, at least one.
    pub fn significant_blocks(&self) -> usize {
        let digits = self.digits();
        digits
            .iter()
            .rposition(|&d| d != 0)
            .map_or(1, |i| i + 1)
    }

    pub fn is_zero(&self) -> bool {
        let mut current = Some(self);
        while let Some(block) = current {
            if block.digit.value() != 0 {
                return false;
            }
            current = block.next.as_deref();
        }
        true
    }

    /// Compare two chains from the most-significant end without touching
    /// either one. A longer chain equals a shorter one exactly when every
    /// extra high block is zero. Iterates over the digit vectors, so chain
    /// depth never reaches the call stack.
    pub fn compare(&self, other: &Block) -> Ordering {
        let lhs = self.digits();
        let rhs = other.digits();
        // higher blocks decide first; a missing block counts as zero
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
}

impl Drop for Block {
    /// Iterative teardown; the compiler-generated drop would recurse once
    /// per block and overflow the stack on long chains.
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut block) = next {
            next = block.next.take();
        }
    }
}

impl Clone for Block {
    /// Deep, iterative copy of the whole chain; tails are never shared.
    fn clone(&self) -> Self {
        let mut chain: Option<Box<Block>> = None;
        for &digit in self.digits().iter().rev() {
            chain = Some(Box::new(Block {
                digit: Digit::from(digit),
                next: chain,
            }));
        }
        match chain {
            Some(block) => *block,
            // a chain always has at least one block
            None => Block::zero(),
        }
    }
}

impl fmt::Display for Block {
    /// Digits most-significant first, prefixed with an ellipsis marker
    /// when the chain has more than one block.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.digits();
        if digits.len() > 1 {
            write!(f, "... ← ")?;
        }
        for (index, digit) in digits.iter().rev().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_digits_trims_high_zeros() {
        assert_eq!(Block::from_digits(&[0, 0, 0]).digits(), vec![0]);
        assert_eq!(Block::from_digits(&[5, 0, 0]).digits(), vec![5]);
        assert_eq!(Block::from_digits(&[5, 0, 9]).digits(), vec![5, 0, 9]);
        assert_eq!(Block::from_digits(&[]).digits(), vec![0]);
    }

    #[test]
    fn compare_orders_by_most_significant_difference() {
        let small = Block::from_digits(&[9, 1]);
        let large = Block::from_digits(&[0, 2]);
        assert_eq!(small.compare(&large), Ordering::Less);
        assert_eq!(large.compare(&small), Ordering::Greater);
        assert_eq!(small.compare(&small), Ordering::Equal);
    }

    #[test]
    fn compare_treats_high_zeros_as_absent() {
        let canonical = Block::from_digits(&[7]);
        let padded = Block {
            digit: Digit::from(7),
            next: Some(Box::new(Block {
                digit: Digit::from(0),
                next: Some(Box::new(Block::zero())),
            })),
        };
        assert_eq!(canonical.compare(&padded), Ordering::Equal);
        assert_eq!(padded.compare(&canonical), Ordering::Equal);
    }

    #[test]
    fn compare_shorter_versus_longer_nonzero() {
        let short = Block::from_digits(&[u32::MAX]);
        let long = Block::from_digits(&[0, 1]);
        assert_eq!(short.compare(&long), Ordering::Less);
        assert_eq!(long.compare(&short), Ordering::Greater);
    }

    #[test]
    fn clone_is_deep() {
        let original = Block::from_digits(&[1, 2, 3]);
        let copy = original.clone();
        assert_eq!(copy.digits(), original.digits());
        assert_eq!(copy.compare(&original), Ordering::Equal);
    }

    #[test]
    fn significant_blocks_ignores_padding() {
        let padded = Block {
            digit: Digit::from(7),
            next: Some(Box::new(Block::zero())),
        };
        assert_eq!(padded.num_blocks(), 2);
        assert_eq!(padded.significant_blocks(), 1);
        assert_eq!(Block::zero().significant_blocks(), 1);
    }

    #[test]
    fn long_chains_compare_clone_and_drop() {
        // deep enough that per-block recursion would blow the test stack
        let digits = vec![1u32; 500_000];
        let chain = Block::from_digits(&digits);
        let copy = chain.clone();
        assert_eq!(chain.compare(&copy), Ordering::Equal);
        let shorter = Block::from_digits(&digits[..digits.len() - 1]);
        assert_eq!(shorter.compare(&chain), Ordering::Less);
        assert_eq!(chain.compare(&shorter), Ordering::Greater);
    }

    #[test]
    fn display_marks_multi_block_chains() {
        assert_eq!(Block::from_digits(&[5]).to_string(), "5");
        assert_eq!(Block::from_digits(&[0, 1]).to_string(), "... ← 1 0");
    }
}
