use std::fmt;

/// Errors from fixed-width bit operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BitsError {
    /// A binary operation received operands of different lengths.
    LengthMismatch { lhs: usize, rhs: usize },
}

impl fmt::Display for BitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitsError::LengthMismatch { lhs, rhs } => {
                write!(f, "operand lengths differ: {lhs} vs {rhs}")
            }
        }
    }
}

impl std::error::Error for BitsError {}
