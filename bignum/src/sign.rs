//! Sign of a big integer.

/// Closed sign state of a [`crate::BigInt`]; `Zero` exactly when the
/// magnitude is numerically zero. Variant order gives the numeric
/// ordering `Negative < Zero < Positive`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// Sign of a native value.
    pub fn of(value: i64) -> Self {
        match value.cmp(&0) {
            std::cmp::Ordering::Less => Sign::Negative,
            std::cmp::Ordering::Equal => Sign::Zero,
            std::cmp::Ordering::Greater => Sign::Positive,
        }
    }

    /// Flips positive and negative; zero is its own negation.
    pub fn negate(self) -> Self {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }

    /// Sign of a product: zero absorbs, equal signs give positive,
    /// opposite signs give negative.
    pub fn product(self, other: Self) -> Self {
        match (self, other) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (lhs, rhs) if lhs == rhs => Sign::Positive,
            _ => Sign::Negative,
        }
    }

    /// Glyph used by the text form: `-`, the empty string, or `+`.
    pub fn glyph(self) -> &'static str {
        match self {
            Sign::Negative => "-",
            Sign::Zero => "",
            Sign::Positive => "+",
        }
    }
}
