//! Two- and four-valued bit vectors of run-time width.
//!
//! [QuadBitVector] is the four-valued (`0`, `1`, `X`, `Z`) vector used to model hardware wires and
//! registers. [BitVector] is its two-valued counterpart. [UnsignedInt] and [SignedInt] bind a quad
//! vector to a signedness and run on native machine words whenever the width allows it.

mod bits;
mod int;

pub use bits::{BitVector, BitVectorError};
pub use int::{SignedInt, UnsignedInt};

pub use bv_ops::{BitVectorOps, BitwiseOps, NativeBits};
pub use quadvec::*;

#[cfg(test)]
mod tests;
