//! Arbitrary-precision signed integers over linked 32-bit blocks.
//!
//! A [`BigInt`] is a [`Sign`] plus a little-endian chain of bounds-checked
//! 32-bit [`Digit`] blocks. Arithmetic is purely functional: operands are
//! borrowed, results are freshly allocated chains, and no operation ever
//! writes through an operand. That makes values safe to share across
//! threads without synchronization.

pub mod bigint;
pub mod block;
pub mod digit;
pub mod error;
pub mod math;
pub mod parser;
pub mod sign;

pub use bigint::BigInt;
pub use block::Block;
pub use digit::Digit;
pub use error::BigIntError;
pub use sign::Sign;
