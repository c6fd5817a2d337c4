//! Width-polymorphic operations over [QuadBitVector]. Every function taking two vectors requires
//! them to have the same width and panics otherwise.
//!
//! Unknown digits propagate as follows:
//!
//! * Bitwise operations apply the digit rules position by position, so `0 & x == 0` and
//!   `1 | x == 1`.
//! * Addition ripples: the first unknown operand digit makes that position and every more
//!   significant position `X`, while less significant positions keep their computed value.
//! * Subtraction, multiplication and negation produce an all-`X` result if any operand digit is
//!   unknown.
//! * Shifting by an unknown amount produces an all-`X` result.

use bv_ops::{BitVectorOps, NativeBits};

use crate::digit::QuadValue;
use crate::vec::QuadBitVector;

fn assert_same_width(lhs: &QuadBitVector, rhs: &QuadBitVector) {
    assert_eq!(
        lhs.width(),
        rhs.width(),
        "operands must have the same width"
    );
}

/// Known operands of a native width, as machine words.
fn native_operands(lhs: &QuadBitVector, rhs: &QuadBitVector) -> Option<(NativeBits, NativeBits)> {
    if !NativeBits::is_native_width(lhs.width()) {
        return None;
    }

    let valid_bits = lhs.width() as u32;
    let lhs = NativeBits::new(lhs.known_word()?, valid_bits);
    let rhs = NativeBits::new(rhs.known_word()?, valid_bits);
    Some((lhs, rhs))
}

fn from_native(value: NativeBits) -> QuadBitVector {
    QuadBitVector::from_u64(value.width(), value.value())
}

fn zip_digits(
    lhs: &QuadBitVector,
    rhs: &QuadBitVector,
    f: impl Fn(QuadValue, QuadValue) -> QuadValue,
) -> QuadBitVector {
    lhs.iter().zip(rhs.iter()).map(|(&x, &y)| f(x, y)).collect()
}

/// Ripple-carry addition modulo the width.
pub fn add_general_width_bv(lhs: &QuadBitVector, rhs: &QuadBitVector) -> QuadBitVector {
    assert_same_width(lhs, rhs);

    let mut carry = QuadValue::Zero;
    lhs.iter()
        .zip(rhs.iter())
        .map(|(&x, &y)| {
            if carry.is_unknown() || x.is_unknown() || y.is_unknown() {
                carry = QuadValue::X;
                QuadValue::X
            } else {
                let (sum, carry_out) = x.plus(y, carry);
                carry = carry_out;
                sum
            }
        })
        .collect()
}

/// Subtraction modulo the width. A borrow at position `i` walks toward the most significant digit
/// flipping zeros until a one is found to borrow from. Underflow wraps silently.
pub fn sub_general_width_bv(lhs: &QuadBitVector, rhs: &QuadBitVector) -> QuadBitVector {
    assert_same_width(lhs, rhs);

    let (Some(mut minuend), Some(subtrahend)) = (known_bits(lhs), known_bits(rhs)) else {
        return QuadBitVector::unknown(lhs.width());
    };

    let mut difference = Vec::with_capacity(minuend.len());
    for i in 0..minuend.len() {
        let (x, y) = (minuend[i], subtrahend[i]);
        if !x && y {
            for digit in minuend[i + 1..].iter_mut() {
                let found = *digit;
                *digit = !*digit;
                if found {
                    break;
                }
            }
        }

        difference.push(QuadValue::from(x ^ y));
    }

    QuadBitVector::from_digits(difference)
}

/// Shift-and-add multiplication. Partial products accumulate in a vector of twice the width which
/// is then truncated to the operand width.
pub fn mul_general_width_bv(lhs: &QuadBitVector, rhs: &QuadBitVector) -> QuadBitVector {
    assert_same_width(lhs, rhs);

    let width = lhs.width();
    if lhs.has_unknown() || rhs.has_unknown() {
        return QuadBitVector::unknown(width);
    }

    let multiplicand = extend(lhs, width);
    let mut product = QuadBitVector::zeros(2 * width);
    for (i, digit) in rhs.iter().enumerate() {
        if *digit == QuadValue::One {
            product = add_general_width_bv(&product, &shl_by(&multiplicand, i));
        }
    }

    slice(&product, 0, width)
}

/// Twos complement negation, computed as `0 - value`.
pub fn negate_general_width_bv(value: &QuadBitVector) -> QuadBitVector {
    sub_general_width_bv(&QuadBitVector::zeros(value.width()), value)
}

fn known_bits(value: &QuadBitVector) -> Option<Vec<bool>> {
    value.iter().map(|digit| digit.to_bool()).collect()
}

pub fn land(lhs: &QuadBitVector, rhs: &QuadBitVector) -> QuadBitVector {
    assert_same_width(lhs, rhs);
    if let Some((x, y)) = native_operands(lhs, rhs) {
        log::trace!("native {width}-bit and", width = lhs.width());
        return from_native(x & y);
    }

    zip_digits(lhs, rhs, |x, y| x & y)
}

pub fn lor(lhs: &QuadBitVector, rhs: &QuadBitVector) -> QuadBitVector {
    assert_same_width(lhs, rhs);
    if let Some((x, y)) = native_operands(lhs, rhs) {
        log::trace!("native {width}-bit or", width = lhs.width());
        return from_native(x | y);
    }

    zip_digits(lhs, rhs, |x, y| x | y)
}

pub fn lxor(lhs: &QuadBitVector, rhs: &QuadBitVector) -> QuadBitVector {
    assert_same_width(lhs, rhs);
    if let Some((x, y)) = native_operands(lhs, rhs) {
        log::trace!("native {width}-bit xor", width = lhs.width());
        return from_native(x ^ y);
    }

    zip_digits(lhs, rhs, |x, y| x ^ y)
}

pub fn lnot(value: &QuadBitVector) -> QuadBitVector {
    value.iter().map(|&digit| !digit).collect()
}

/// Interprets a shift amount as an unsigned integer. Returns `None` if any digit is unknown.
///
/// # Panics
///
/// Panics if the amount does not fit in 64 bits.
pub fn shift_amount(amount: &QuadBitVector) -> Option<u64> {
    if amount.has_unknown() {
        return None;
    }

    if let Some(index) = amount.iter().skip(64).position(|&d| d == QuadValue::One) {
        panic!(
            "shift amount {amount} does not fit in 64 bits (digit {index} is set)",
            index = index + 64
        );
    }

    Some(
        amount
            .iter()
            .take(64)
            .rev()
            .fold(0u64, |word, &digit| (word << 1) | u64::from(digit == QuadValue::One)),
    )
}

fn shift_distance(value: &QuadBitVector, amount: u64) -> usize {
    match usize::try_from(amount) {
        Ok(amount) if amount < value.width() => amount,
        _ => {
            log::trace!(
                "shift amount {amount} clamped to width {width}",
                width = value.width()
            );
            value.width()
        }
    }
}

/// Logical left shift. Vacated positions are zero.
pub fn shl(value: &QuadBitVector, amount: &QuadBitVector) -> QuadBitVector {
    match shift_amount(amount) {
        Some(amount) => shl_by(value, shift_distance(value, amount)),
        None => QuadBitVector::unknown(value.width()),
    }
}

/// Logical right shift. Vacated positions are zero.
pub fn lshr(value: &QuadBitVector, amount: &QuadBitVector) -> QuadBitVector {
    match shift_amount(amount) {
        Some(amount) => lshr_by(value, shift_distance(value, amount)),
        None => QuadBitVector::unknown(value.width()),
    }
}

/// Arithmetic right shift. Vacated positions are copies of the original sign digit.
pub fn ashr(value: &QuadBitVector, amount: &QuadBitVector) -> QuadBitVector {
    match shift_amount(amount) {
        Some(amount) => ashr_by(value, shift_distance(value, amount)),
        None => QuadBitVector::unknown(value.width()),
    }
}

pub fn shl_by(value: &QuadBitVector, amount: usize) -> QuadBitVector {
    let width = value.width();
    let amount = amount.min(width);
    std::iter::repeat_n(QuadValue::Zero, amount)
        .chain(value.iter().take(width - amount).copied())
        .collect()
}

pub fn lshr_by(value: &QuadBitVector, amount: usize) -> QuadBitVector {
    shift_right(value, amount, QuadValue::Zero)
}

pub fn ashr_by(value: &QuadBitVector, amount: usize) -> QuadBitVector {
    shift_right(value, amount, value.msb().unwrap_or_default())
}

fn shift_right(value: &QuadBitVector, amount: usize, shift_in: QuadValue) -> QuadBitVector {
    let amount = amount.min(value.width());
    value
        .iter()
        .skip(amount)
        .copied()
        .chain(std::iter::repeat_n(shift_in, amount))
        .collect()
}

/// Concatenates two vectors. `low` occupies the least significant digits of the result.
pub fn concat(low: &QuadBitVector, high: &QuadBitVector) -> QuadBitVector {
    low.iter().chain(high.iter()).copied().collect()
}

/// The half-open digit range `[start, end)`. Digit `i` of the result is digit `start + i`.
pub fn slice(value: &QuadBitVector, start: usize, end: usize) -> QuadBitVector {
    assert!(
        start <= end && end <= value.width(),
        "invalid slice [{start}, {end}) of {width} digits",
        width = value.width()
    );

    QuadBitVector::from_digits(value.digits()[start..end].to_vec())
}

/// Zero-extends by `extra_bits` digits.
pub fn extend(value: &QuadBitVector, extra_bits: usize) -> QuadBitVector {
    concat(value, &QuadBitVector::zeros(extra_bits))
}

/// Extends by `extra_bits` copies of the most significant digit.
pub fn sign_extend(value: &QuadBitVector, extra_bits: usize) -> QuadBitVector {
    let sign = value.msb().unwrap_or_default();
    concat(value, &QuadBitVector::filled(extra_bits, sign))
}

pub fn andr(value: &QuadBitVector) -> QuadValue {
    value.iter().fold(QuadValue::One, |acc, &digit| acc & digit)
}

pub fn orr(value: &QuadBitVector) -> QuadValue {
    value.iter().fold(QuadValue::Zero, |acc, &digit| acc | digit)
}

pub fn xorr(value: &QuadBitVector) -> QuadValue {
    value.iter().fold(QuadValue::Zero, |acc, &digit| acc ^ digit)
}
