use std::fmt;

/// Errors from big-integer construction, parsing and conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BigIntError {
    /// A digit value left the 32-bit unsigned magnitude range.
    Range(i64),
    /// The parser met a character that is neither a binary digit nor a
    /// separator. `position` is the byte offset in the input.
    Format { character: char, position: usize },
    /// Division with a zero divisor.
    DivisionByZero,
    /// A narrowing conversion whose magnitude does not fit the target.
    Overflow,
}

impl fmt::Display for BigIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BigIntError::Range(value) => {
                write!(f, "digit value {value} outside the 32-bit magnitude range")
            }
            BigIntError::Format {
                character,
                position,
            } => {
                write!(f, "unexpected character {character:?} at byte {position}")
            }
            BigIntError::DivisionByZero => write!(f, "division by zero"),
            BigIntError::Overflow => write!(f, "magnitude does not fit the target integer"),
        }
    }
}

impl std::error::Error for BigIntError {}
