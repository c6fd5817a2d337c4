use std::cmp::Ordering;
use std::str::FromStr;

use bv_ops::{BitVectorOps, NativeBits};
use quadvec::kernel::*;
use quadvec::{ConversionError, ParseLiteralError, QuadBitVector, QuadValue};

/// Both operands as native words, if they have a native width and every digit is known.
fn native_operands(lhs: &QuadBitVector, rhs: &QuadBitVector) -> Option<(NativeBits, NativeBits)> {
    if lhs.width() != rhs.width() || !NativeBits::is_native_width(lhs.width()) {
        return None;
    }

    let valid_bits = u32::try_from(lhs.width()).ok()?;
    let lhs = u64::try_from(lhs).ok()?;
    let rhs = u64::try_from(rhs).ok()?;
    Some((
        NativeBits::new(lhs, valid_bits),
        NativeBits::new(rhs, valid_bits),
    ))
}

fn from_native(value: NativeBits) -> QuadBitVector {
    QuadBitVector::from_u64(value.width(), value.value())
}

/// Evaluates a two-operand operation on native words when possible, otherwise with the general
/// width kernel.
fn dispatch(
    lhs: &QuadBitVector,
    rhs: &QuadBitVector,
    native: impl FnOnce(NativeBits, NativeBits) -> NativeBits,
    general: impl FnOnce(&QuadBitVector, &QuadBitVector) -> QuadBitVector,
) -> QuadBitVector {
    match native_operands(lhs, rhs) {
        Some((x, y)) => {
            log::trace!("native fast path for {} bits", lhs.width());
            from_native(native(x, y))
        }
        None => {
            log::trace!("general width kernel for {} bits", lhs.width());
            general(lhs, rhs)
        }
    }
}

fn dispatch_unary(
    value: &QuadBitVector,
    native: impl FnOnce(NativeBits) -> NativeBits,
    general: impl FnOnce(&QuadBitVector) -> QuadBitVector,
) -> QuadBitVector {
    dispatch(value, value, |x, _| native(x), |x, _| general(x))
}

/// Shifts take a `usize` amount. The native path receives the amount as a 64-bit word.
fn dispatch_shift(
    value: &QuadBitVector,
    amount: usize,
    native: impl FnOnce(NativeBits, NativeBits) -> NativeBits,
    general: impl FnOnce(&QuadBitVector, usize) -> QuadBitVector,
) -> QuadBitVector {
    dispatch_unary(
        value,
        |x| native(x, NativeBits::from(amount as u64)),
        |x| general(x, amount),
    )
}

macro_rules! typed_int {
    ($name:ident) => {
        impl $name {
            /// A zero value of the given width.
            pub fn new(width: usize) -> Self {
                Self {
                    bits: QuadBitVector::zeros(width),
                }
            }

            pub fn from_bits(bits: QuadBitVector) -> Self {
                Self { bits }
            }

            pub fn bits(&self) -> &QuadBitVector {
                &self.bits
            }

            pub fn into_bits(self) -> QuadBitVector {
                self.bits
            }

            pub fn width(&self) -> usize {
                self.bits.width()
            }

            pub fn is_fully_known(&self) -> bool {
                self.bits.is_fully_known()
            }

            /// The value as an unsigned native integer.
            pub fn to_u64(&self) -> Result<u64, ConversionError> {
                u64::try_from(&self.bits)
            }
        }

        impl From<QuadBitVector> for $name {
            fn from(bits: QuadBitVector) -> Self {
                Self::from_bits(bits)
            }
        }

        impl From<$name> for QuadBitVector {
            fn from(value: $name) -> Self {
                value.bits
            }
        }

        /// Parses a sized literal such as `16'hcdef`.
        impl FromStr for $name {
            type Err = ParseLiteralError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self::from_bits)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.bits, f)
            }
        }

        impl std::ops::Add for &$name {
            type Output = $name;

            fn add(self, rhs: Self) -> Self::Output {
                $name::from_bits(dispatch(
                    &self.bits,
                    &rhs.bits,
                    |x, y| x.add(y),
                    add_general_width_bv,
                ))
            }
        }

        impl std::ops::Sub for &$name {
            type Output = $name;

            fn sub(self, rhs: Self) -> Self::Output {
                $name::from_bits(dispatch(
                    &self.bits,
                    &rhs.bits,
                    |x, y| x.subtract(y),
                    sub_general_width_bv,
                ))
            }
        }

        impl std::ops::Mul for &$name {
            type Output = $name;

            fn mul(self, rhs: Self) -> Self::Output {
                $name::from_bits(dispatch(
                    &self.bits,
                    &rhs.bits,
                    |x, y| x.multiply(y),
                    mul_general_width_bv,
                ))
            }
        }

        impl std::ops::BitAnd for &$name {
            type Output = $name;

            fn bitand(self, rhs: Self) -> Self::Output {
                $name::from_bits(dispatch(&self.bits, &rhs.bits, |x, y| x & y, land))
            }
        }

        impl std::ops::BitOr for &$name {
            type Output = $name;

            fn bitor(self, rhs: Self) -> Self::Output {
                $name::from_bits(dispatch(&self.bits, &rhs.bits, |x, y| x | y, lor))
            }
        }

        impl std::ops::BitXor for &$name {
            type Output = $name;

            fn bitxor(self, rhs: Self) -> Self::Output {
                $name::from_bits(dispatch(&self.bits, &rhs.bits, |x, y| x ^ y, lxor))
            }
        }

        impl std::ops::Not for &$name {
            type Output = $name;

            fn not(self) -> Self::Output {
                $name::from_bits(dispatch_unary(&self.bits, |x| !x, lnot))
            }
        }

        impl std::ops::Neg for &$name {
            type Output = $name;

            fn neg(self) -> Self::Output {
                $name::from_bits(dispatch_unary(
                    &self.bits,
                    |x| x.negate(),
                    negate_general_width_bv,
                ))
            }
        }

        impl std::ops::Shl<usize> for &$name {
            type Output = $name;

            fn shl(self, amount: usize) -> Self::Output {
                $name::from_bits(dispatch_shift(
                    &self.bits,
                    amount,
                    |x, y| x.shift_left(y),
                    shl_by,
                ))
            }
        }

        typed_int!(@owned $name, Add, add);
        typed_int!(@owned $name, Sub, sub);
        typed_int!(@owned $name, Mul, mul);
        typed_int!(@owned $name, BitAnd, bitand);
        typed_int!(@owned $name, BitOr, bitor);
        typed_int!(@owned $name, BitXor, bitxor);

        impl std::ops::Not for $name {
            type Output = $name;

            fn not(self) -> Self::Output {
                !&self
            }
        }

        impl std::ops::Neg for $name {
            type Output = $name;

            fn neg(self) -> Self::Output {
                -&self
            }
        }

        impl std::ops::Shl<usize> for $name {
            type Output = $name;

            fn shl(self, amount: usize) -> Self::Output {
                &self << amount
            }
        }

        impl std::ops::Shr<usize> for $name {
            type Output = $name;

            fn shr(self, amount: usize) -> Self::Output {
                &self >> amount
            }
        }
    };

    (@owned $name:ident, $trait:ident, $fn:ident) => {
        impl std::ops::$trait for $name {
            type Output = $name;

            fn $fn(self, rhs: Self) -> Self::Output {
                std::ops::$trait::$fn(&self, &rhs)
            }
        }
    };
}

/// An unsigned integer of run-time width backed by a quad bit vector. Right shifts are logical
/// and ordering compares magnitudes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnsignedInt {
    bits: QuadBitVector,
}

/// A twos complement signed integer of run-time width backed by a quad bit vector. Right shifts
/// are arithmetic and ordering is signed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SignedInt {
    bits: QuadBitVector,
}

typed_int!(UnsignedInt);
typed_int!(SignedInt);

impl UnsignedInt {
    pub fn from_u64(width: usize, value: u64) -> Self {
        Self::from_bits(QuadBitVector::from_u64(width, value))
    }
}

impl SignedInt {
    pub fn from_i64(width: usize, value: i64) -> Self {
        Self::from_bits(QuadBitVector::from_i64(width, value))
    }

    /// The value as a signed native integer. Values of at most 64 bits are sign-extended from
    /// their own width. Wider values must be a sign extension of their low 64 bits.
    pub fn to_i64(&self) -> Result<i64, ConversionError> {
        let width = self.width();
        if width == 0 {
            return Ok(0);
        }

        if width <= 64 {
            let unused = u64::BITS as usize - width;
            let value = u64::try_from(&self.bits)?;
            return Ok(((value << unused) as i64) >> unused);
        }

        let low = u64::try_from(&slice(&self.bits, 0, 64))?;
        let sign = QuadValue::from((low as i64) < 0);
        if let Some(index) = self.bits.iter().position(|digit| digit.is_unknown()) {
            return Err(ConversionError::UnknownDigit { index });
        }

        let extended = self
            .bits
            .iter()
            .skip(64)
            .all(|&digit| digit == sign);
        if !extended {
            return Err(ConversionError::Overflow { max_bits: u64::BITS });
        }

        Ok(low as i64)
    }
}

impl std::ops::Shr<usize> for &UnsignedInt {
    type Output = UnsignedInt;

    fn shr(self, amount: usize) -> Self::Output {
        UnsignedInt::from_bits(dispatch_shift(
            &self.bits,
            amount,
            |x, y| x.logical_shift_right(y),
            lshr_by,
        ))
    }
}

impl std::ops::Shr<usize> for &SignedInt {
    type Output = SignedInt;

    fn shr(self, amount: usize) -> Self::Output {
        SignedInt::from_bits(dispatch_shift(
            &self.bits,
            amount,
            |x, y| x.arithmetic_shift_right(y),
            ashr_by,
        ))
    }
}

/// Numeric order. Unordered when an unknown digit sits at or above the deciding position, so a
/// value holding unknown digits is unordered even against itself.
impl PartialOrd for UnsignedInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        quadvec::compare_unsigned(&self.bits, &other.bits)
    }
}

/// Numeric twos complement order. Unordered when an unknown digit sits at or above the deciding
/// position.
impl PartialOrd for SignedInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        quadvec::compare_signed(&self.bits, &other.bits)
    }
}
