use crate::QuadBitVector;

mod convert;
mod literal;
mod properties;

/// A vector of the given width from a binary string.
fn bv(width: usize, digits: &str) -> QuadBitVector {
    QuadBitVector::from_binary(width, digits).expect("invalid binary string")
}

fn dbv(width: usize, value: u64) -> QuadBitVector {
    QuadBitVector::from_u64(width, value)
}

fn literal(literal: &str) -> QuadBitVector {
    literal.parse().expect("invalid literal")
}
