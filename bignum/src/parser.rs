//! Binary text form of a magnitude.

use crate::bigint::BigInt;
use crate::block::Block;
use crate::digit::Digit;
use crate::error::BigIntError;
use crate::sign::Sign;

/// Characters the parser skips between data bits.
const SEPARATORS: [char; 6] = [' ', '\r', '\n', '_', '.', ','];

/// Parse a binary magnitude string into a [`BigInt`].
///
/// The text is read most-significant bit first, so the scan runs from the
/// right; separator characters may appear anywhere and carry no value.
/// Every 32 data bits open a new, more significant block. The result is
/// never negative: an empty or all-separator string parses as zero.
///
/// ```
/// use bignum::{parser, BigInt, BigIntError};
///
/// let value = parser::parse("0111 1010 1011 0111")?;
/// assert_eq!(value, BigInt::from(31_415));
/// assert_eq!(
///     parser::parse("01a1"),
///     Err(BigIntError::Format { character: 'a', position: 2 })
/// );
/// # Ok::<(), BigIntError>(())
/// ```
pub fn parse(text: &str) -> Result<BigInt, BigIntError> {
    let mut digits = vec![Digit::from(0)];
    let mut position = 0usize;

    for (byte_index, character) in text.char_indices().rev() {
        if SEPARATORS.contains(&character) {
            continue;
        }
        if position != 0 && position % 32 == 0 {
            digits.push(Digit::from(0));
        }
        match character {
            '0' => {}
            '1' => {
                let block = position / 32;
                digits[block] = digits[block].increase(1 << (position % 32))?;
            }
            _ => {
                return Err(BigIntError::Format {
                    character,
                    position: byte_index,
                })
            }
        }
        position += 1;
    }

    let values: Vec<u32> = digits.iter().map(|d| d.value()).collect();
    let magnitude = Block::from_digits(&values);
    let sign = if magnitude.is_zero() {
        Sign::Zero
    } else {
        Sign::Positive
    };
    Ok(BigInt::from_parts(sign, magnitude))
}
