use std::cmp::Ordering;

use bv_ops::BitVectorOps;

use crate::compare::{compare_signed, compare_unsigned, logical_eq};
use crate::digit::QuadValue;
use crate::kernel;
use crate::vec::QuadBitVector;

/// Maps an ordering onto a digit. An undecided ordering is `X`.
fn ordering_digit(ordering: Option<Ordering>, accept: impl Fn(Ordering) -> bool) -> QuadValue {
    match ordering {
        Some(ordering) => accept(ordering).into(),
        None => QuadValue::X,
    }
}

impl BitVectorOps for QuadBitVector {
    type Bit = QuadValue;

    fn from_u64(width: usize, value: u64) -> Self {
        QuadBitVector::from_u64(width, value)
    }

    fn width(&self) -> usize {
        self.len()
    }

    fn add(self, rhs: Self) -> Self {
        kernel::add_general_width_bv(&self, &rhs)
    }

    fn subtract(self, rhs: Self) -> Self {
        kernel::sub_general_width_bv(&self, &rhs)
    }

    fn multiply(self, rhs: Self) -> Self {
        kernel::mul_general_width_bv(&self, &rhs)
    }

    fn negate(self) -> Self {
        kernel::negate_general_width_bv(&self)
    }

    fn shift_left(self, amount: Self) -> Self {
        kernel::shl(&self, &amount)
    }

    fn logical_shift_right(self, amount: Self) -> Self {
        kernel::lshr(&self, &amount)
    }

    fn arithmetic_shift_right(self, amount: Self) -> Self {
        kernel::ashr(&self, &amount)
    }

    fn concat(self, high: Self) -> Self {
        kernel::concat(&self, &high)
    }

    fn slice(self, start: usize, end: usize) -> Self {
        kernel::slice(&self, start, end)
    }

    fn zero_extend(self, extra_bits: usize) -> Self {
        kernel::extend(&self, extra_bits)
    }

    fn sign_extend(self, extra_bits: usize) -> Self {
        kernel::sign_extend(&self, extra_bits)
    }

    fn and_reduce(self) -> Self::Bit {
        kernel::andr(&self)
    }

    fn or_reduce(self) -> Self::Bit {
        kernel::orr(&self)
    }

    fn xor_reduce(self) -> Self::Bit {
        kernel::xorr(&self)
    }

    fn equals(self, rhs: Self) -> Self::Bit {
        logical_eq(&self, &rhs)
    }

    fn not_equals(self, rhs: Self) -> Self::Bit {
        !logical_eq(&self, &rhs)
    }

    fn unsigned_greater_than(self, rhs: Self) -> Self::Bit {
        ordering_digit(compare_unsigned(&self, &rhs), Ordering::is_gt)
    }

    fn unsigned_greater_than_or_equals(self, rhs: Self) -> Self::Bit {
        ordering_digit(compare_unsigned(&self, &rhs), Ordering::is_ge)
    }

    fn unsigned_less_than(self, rhs: Self) -> Self::Bit {
        ordering_digit(compare_unsigned(&self, &rhs), Ordering::is_lt)
    }

    fn unsigned_less_than_or_equals(self, rhs: Self) -> Self::Bit {
        ordering_digit(compare_unsigned(&self, &rhs), Ordering::is_le)
    }

    fn signed_greater_than(self, rhs: Self) -> Self::Bit {
        ordering_digit(compare_signed(&self, &rhs), Ordering::is_gt)
    }

    fn signed_greater_than_or_equals(self, rhs: Self) -> Self::Bit {
        ordering_digit(compare_signed(&self, &rhs), Ordering::is_ge)
    }

    fn signed_less_than(self, rhs: Self) -> Self::Bit {
        ordering_digit(compare_signed(&self, &rhs), Ordering::is_lt)
    }

    fn signed_less_than_or_equals(self, rhs: Self) -> Self::Bit {
        ordering_digit(compare_signed(&self, &rhs), Ordering::is_le)
    }
}
