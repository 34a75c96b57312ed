//! Fixed-width twos-complement arithmetic over explicit bit sequences.
//!
//! Models hardware-style integer arithmetic: ripple-carry addition, Booth
//! multiplication and arithmetic shifting over boolean vectors, most
//! significant bit first. Useful standalone and as a reference model for
//! checking wider arithmetic on representable ranges.

pub mod bits;
pub mod error;
pub mod ops;
pub mod vector;

pub use error::BitsError;
pub use vector::BitVector;
