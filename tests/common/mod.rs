use quadvec::QuadBitVector;

/// A vector of the given width from a binary string.
pub fn bv(width: usize, digits: &str) -> QuadBitVector {
    QuadBitVector::from_binary(width, digits).expect("invalid binary string")
}

pub fn dbv(width: usize, value: u64) -> QuadBitVector {
    QuadBitVector::from_u64(width, value)
}

pub fn literal(literal: &str) -> QuadBitVector {
    literal.parse().expect("invalid literal")
}

pub fn mask(width: usize) -> u64 {
    u64::MAX >> (64 - width)
}
