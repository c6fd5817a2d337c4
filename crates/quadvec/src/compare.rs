use std::cmp::Ordering;

use crate::digit::QuadValue;
use crate::kernel;
use crate::vec::QuadBitVector;

fn assert_same_width(lhs: &QuadBitVector, rhs: &QuadBitVector) {
    assert_eq!(
        lhs.width(),
        rhs.width(),
        "operands must have the same width"
    );
}

/// Unsigned magnitude comparison. Scans from the most significant digit down; the first position
/// where the known operands differ decides the result. Returns `None` if an unknown digit appears
/// in either operand at or above that position, so vectors with unknown digits are never `Equal`.
pub fn compare_unsigned(lhs: &QuadBitVector, rhs: &QuadBitVector) -> Option<Ordering> {
    assert_same_width(lhs, rhs);

    for (x, y) in lhs.iter().rev().zip(rhs.iter().rev()) {
        match (x.to_bool()?, y.to_bool()?) {
            (x, y) if x != y => return Some(x.cmp(&y)),
            _ => (),
        }
    }

    Some(Ordering::Equal)
}

/// Signed (twos complement) comparison. Differing known sign digits decide the result. Equal known
/// sign digits order like the unsigned magnitudes, and an unknown sign digit leaves the comparison
/// undecided.
pub fn compare_signed(lhs: &QuadBitVector, rhs: &QuadBitVector) -> Option<Ordering> {
    assert_same_width(lhs, rhs);

    match (lhs.msb(), rhs.msb()) {
        (Some(QuadValue::Zero), Some(QuadValue::One)) => Some(Ordering::Greater),
        (Some(QuadValue::One), Some(QuadValue::Zero)) => Some(Ordering::Less),
        _ => compare_unsigned(lhs, rhs),
    }
}

/// Orders by the first differing position from the most significant digit. Identical digits,
/// unknown or not, are skipped.
fn compare_digits(lhs: &QuadBitVector, rhs: &QuadBitVector) -> Option<Ordering> {
    lhs.iter()
        .rev()
        .zip(rhs.iter().rev())
        .find(|(x, y)| x != y)
        .map_or(Some(Ordering::Equal), |(x, y)| x.partial_cmp(y))
}

fn compare_magnitude(lhs: &QuadBitVector, rhs: &QuadBitVector) -> Option<Ordering> {
    let magnitude_bits = lhs.width() - 1;
    compare_digits(
        &kernel::slice(lhs, 0, magnitude_bits),
        &kernel::slice(rhs, 0, magnitude_bits),
    )
}

/// Unsigned `lhs > rhs`, decided by the first position where the digits differ. Equal vectors are
/// not greater.
pub fn gt(lhs: &QuadBitVector, rhs: &QuadBitVector) -> bool {
    assert_same_width(lhs, rhs);
    compare_digits(lhs, rhs) == Some(Ordering::Greater)
}

pub fn gte(lhs: &QuadBitVector, rhs: &QuadBitVector) -> bool {
    gt(lhs, rhs) || lhs == rhs
}

/// Unsigned `lhs < rhs`, defined as neither equal nor greater.
pub fn lt(lhs: &QuadBitVector, rhs: &QuadBitVector) -> bool {
    lhs != rhs && !gt(lhs, rhs)
}

/// Signed `lhs > rhs`.
///
/// # Panics
///
/// Panics if the sign digits differ and at least one of them is unknown.
pub fn signed_gt(lhs: &QuadBitVector, rhs: &QuadBitVector) -> bool {
    assert_same_width(lhs, rhs);

    match (lhs.msb(), rhs.msb()) {
        (Some(QuadValue::Zero), Some(QuadValue::One)) => true,
        (Some(QuadValue::One), Some(QuadValue::Zero)) => false,
        (Some(x), Some(y)) if x == y => compare_magnitude(lhs, rhs) == Some(Ordering::Greater),
        (None, None) => false,
        (x, y) => panic!("signed comparison is undecided by the sign digits {x:?} and {y:?}"),
    }
}

pub fn signed_gte(lhs: &QuadBitVector, rhs: &QuadBitVector) -> bool {
    signed_gt(lhs, rhs) || lhs == rhs
}

pub fn signed_lt(lhs: &QuadBitVector, rhs: &QuadBitVector) -> bool {
    signed_gt(rhs, lhs)
}

/// Logical equality: `0` if some position holds differing known digits, `1` if the vectors are
/// identical and fully known, `X` otherwise.
pub fn logical_eq(lhs: &QuadBitVector, rhs: &QuadBitVector) -> QuadValue {
    assert_same_width(lhs, rhs);

    let mut result = QuadValue::One;
    for (x, y) in lhs.iter().zip(rhs.iter()) {
        match (x.to_bool(), y.to_bool()) {
            (Some(x), Some(y)) if x != y => return QuadValue::Zero,
            (Some(_), Some(_)) => (),
            _ => result = QuadValue::X,
        }
    }

    result
}

/// Orders vectors of equal width digit by digit from the most significant end, consistent with
/// the exact equality of `==`. Use [compare_unsigned] for a numeric ordering.
///
/// # Panics
///
/// Panics if the widths differ.
impl PartialOrd for QuadBitVector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        assert_same_width(self, other);
        compare_digits(self, other)
    }
}
