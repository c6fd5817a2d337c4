pub mod kernel;

mod compare;
mod convert;
mod digit;
mod literal;
mod ops;
mod vec;

pub use crate::compare::*;
pub use crate::convert::ConversionError;
pub use crate::digit::*;
pub use crate::literal::ParseLiteralError;
pub use crate::vec::QuadBitVector;

#[cfg(test)]
mod tests;
