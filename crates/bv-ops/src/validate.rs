use std::fmt::Debug;
use std::marker::PhantomData;

use thiserror::Error;

use crate::BitVectorOps;

/// Error returned when validation fails
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{op:?} produced {actual:#x}, expected {expected:#x}")]
    IncorrectValue {
        op: Operation,
        expected: u64,
        actual: u64,
    },

    #[error("{op:?} produced {actual}, expected {expected}")]
    IncorrectBit {
        op: BitOperation,
        expected: bool,
        actual: bool,
    },

    #[error("{op:?} produced a result of width {actual}, expected {expected}")]
    IncorrectWidth {
        op: Operation,
        expected: usize,
        actual: usize,
    },

    #[error("{op:?} result could not be converted: {err}")]
    ValueConversionFailure { op: Operation, err: String },

    #[error("{op:?} result could not be converted: {err}")]
    BitConversionFailure { op: BitOperation, err: String },
}

/// Validation result
pub type Result = std::result::Result<(), ValidationError>;

/// An operation producing a value. Unless a width is given explicitly, operands of integer type
/// `uN`/`iN` are evaluated at a width of `N` bits. Shift amounts are always 8 bits wide.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    And(u8, u8),
    Or(u8, u8),
    Xor(u8, u8),
    Not(u8),
    ShiftLeft(u8, u8),
    ArithmeticShiftRight(u8, u8),
    LogicalShiftRight(u8, u8),
    Add(usize, u64, u64),
    Subtract(usize, u64, u64),
    Multiply(i64, i64),
    Negate(usize, u64),
    ZeroExtend(u8, usize),
    SignExtend(u8, usize),
    Concat(u8, u8),
    Slice(u16, usize, usize),
}

/// An operation producing a single bit.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BitOperation {
    AndReduce(usize, u64),
    OrReduce(usize, u64),
    XorReduce(usize, u64),
    Equals(u64, u64),
    NotEquals(u64, u64),
    UnsignedLessThan(u8, u8),
    UnsignedGreaterThan(u8, u8),
    UnsignedLessThanOrEquals(u8, u8),
    UnsignedGreaterThanOrEquals(u8, u8),
    SignedLessThan(i8, i8),
    SignedGreaterThan(i8, i8),
    SignedLessThanOrEquals(i8, i8),
    SignedGreaterThanOrEquals(i8, i8),
}

fn byte<T: BitVectorOps>(value: u8) -> T {
    T::from_u64(8, value.into())
}

fn signed_byte<T: BitVectorOps>(value: i8) -> T {
    T::from_u64(8, value as u8 as u64)
}

impl Operation {
    fn evaluate<T: BitVectorOps>(&self) -> T {
        match *self {
            Self::And(x, y) => byte::<T>(x).and(byte(y)),
            Self::Or(x, y) => byte::<T>(x).or(byte(y)),
            Self::Xor(x, y) => byte::<T>(x).xor(byte(y)),
            Self::Not(x) => byte::<T>(x).not(),
            Self::ShiftLeft(x, y) => byte::<T>(x).shift_left(byte(y)),
            Self::ArithmeticShiftRight(x, y) => byte::<T>(x).arithmetic_shift_right(byte(y)),
            Self::LogicalShiftRight(x, y) => byte::<T>(x).logical_shift_right(byte(y)),
            Self::Add(width, x, y) => T::from_u64(width, x).add(T::from_u64(width, y)),
            Self::Subtract(width, x, y) => T::from_u64(width, x).subtract(T::from_u64(width, y)),
            Self::Multiply(x, y) => T::from_u64(64, x as u64).multiply(T::from_u64(64, y as u64)),
            Self::Negate(width, x) => T::from_u64(width, x).negate(),
            Self::ZeroExtend(x, extra) => byte::<T>(x).zero_extend(extra),
            Self::SignExtend(x, extra) => byte::<T>(x).sign_extend(extra),
            Self::Concat(x, y) => byte::<T>(x).concat(byte(y)),
            Self::Slice(x, start, end) => T::from_u64(16, x.into()).slice(start, end),
        }
    }

    fn expected_width(&self) -> usize {
        match *self {
            Self::Add(width, ..) | Self::Subtract(width, ..) | Self::Negate(width, _) => width,
            Self::Multiply(..) => 64,
            Self::ZeroExtend(_, extra) | Self::SignExtend(_, extra) => 8 + extra,
            Self::Concat(..) => 16,
            Self::Slice(_, start, end) => end - start,
            _ => 8,
        }
    }
}

impl BitOperation {
    fn evaluate<T: BitVectorOps>(self) -> T::Bit {
        match self {
            Self::AndReduce(width, x) => T::from_u64(width, x).and_reduce(),
            Self::OrReduce(width, x) => T::from_u64(width, x).or_reduce(),
            Self::XorReduce(width, x) => T::from_u64(width, x).xor_reduce(),
            Self::Equals(lhs, rhs) => T::from_u64(64, lhs).equals(T::from_u64(64, rhs)),
            Self::NotEquals(lhs, rhs) => T::from_u64(64, lhs).not_equals(T::from_u64(64, rhs)),
            Self::UnsignedLessThan(lhs, rhs) => byte::<T>(lhs).unsigned_less_than(byte(rhs)),
            Self::UnsignedGreaterThan(lhs, rhs) => {
                byte::<T>(lhs).unsigned_greater_than(byte(rhs))
            }
            Self::UnsignedLessThanOrEquals(lhs, rhs) => {
                byte::<T>(lhs).unsigned_less_than_or_equals(byte(rhs))
            }
            Self::UnsignedGreaterThanOrEquals(lhs, rhs) => {
                byte::<T>(lhs).unsigned_greater_than_or_equals(byte(rhs))
            }
            Self::SignedLessThan(lhs, rhs) => {
                signed_byte::<T>(lhs).signed_less_than(signed_byte(rhs))
            }
            Self::SignedGreaterThan(lhs, rhs) => {
                signed_byte::<T>(lhs).signed_greater_than(signed_byte(rhs))
            }
            Self::SignedLessThanOrEquals(lhs, rhs) => {
                signed_byte::<T>(lhs).signed_less_than_or_equals(signed_byte(rhs))
            }
            Self::SignedGreaterThanOrEquals(lhs, rhs) => {
                signed_byte::<T>(lhs).signed_greater_than_or_equals(signed_byte(rhs))
            }
        }
    }
}

/// Validation functions for the implementation of [BitVectorOps] for a given type.
pub struct Validator<T: BitVectorOps> {
    // No subtyping (invariant), !Send + !Sync
    _phantom: PhantomData<*mut T>,
}

impl<T: BitVectorOps + Debug> Validator<T>
where
    T: TryInto<u64>,
    <T as TryInto<u64>>::Error: Debug,
    <<T as BitVectorOps>::Bit as TryInto<bool>>::Error: Debug,
{
    /// Validate all of the [BitVectorOps] operations.
    pub fn validate() -> Result {
        // Shift ops
        Self::shift_left()?;
        Self::arithmetic_shift_right()?;
        Self::logical_shift_right()?;

        // Width manipulation ops
        Self::zero_extend()?;
        Self::sign_extend()?;
        Self::concat()?;
        Self::slice()?;

        // Arithmetic
        Self::add()?;
        Self::subtract()?;
        Self::negate()?;
        Self::multiply()?;

        // Bitwise ops
        Self::and()?;
        Self::or()?;
        Self::xor()?;
        Self::not()?;

        // Reductions
        Self::and_reduce()?;
        Self::or_reduce()?;
        Self::xor_reduce()?;

        // Comparison ops
        Self::signed_less_than()?;
        Self::unsigned_less_than()?;
        Self::signed_greater_than()?;
        Self::unsigned_greater_than()?;
        Self::signed_less_than_or_equals()?;
        Self::unsigned_less_than_or_equals()?;
        Self::signed_greater_than_or_equals()?;
        Self::unsigned_greater_than_or_equals()?;
        Self::equals()?;
        Self::not_equals()?;

        Ok(())
    }

    fn and() -> Result {
        let test_values = [
            (0b0, 0b0, 0b0),
            (0b0, 0b1, 0b0),
            (0b1, 0b0, 0b0),
            (0b1, 0b1, 0b1),
            (0xFF, 0xA5, 0xA5),
            (0x00, 0xA5, 0x00),
        ];

        for (lhs, rhs, expected) in test_values {
            expect_op::<T>(Operation::And(lhs, rhs), expected)?;
        }

        Ok(())
    }

    fn or() -> Result {
        let test_values = [
            (0b0, 0b0, 0b0),
            (0b0, 0b1, 0b1),
            (0b1, 0b0, 0b1),
            (0b1, 0b1, 0b1),
            (0xFF, 0xA5, 0xFF),
            (0x00, 0xA5, 0xA5),
        ];

        for (lhs, rhs, expected) in test_values {
            expect_op::<T>(Operation::Or(lhs, rhs), expected)?;
        }

        Ok(())
    }

    fn xor() -> Result {
        let test_values = [
            (0b0, 0b0, 0b0),
            (0b0, 0b1, 0b1),
            (0b1, 0b0, 0b1),
            (0b1, 0b1, 0b0),
            (0xFF, 0xA5, 0x5A),
            (0x00, 0xA5, 0xA5),
        ];

        for (lhs, rhs, expected) in test_values {
            expect_op::<T>(Operation::Xor(lhs, rhs), expected)?;
        }

        Ok(())
    }

    fn not() -> Result {
        let test_values = [(0xFF, 0x00), (0x00, 0xFF), (0xA5, 0x5A)];

        for (lhs, expected) in test_values {
            expect_op::<T>(Operation::Not(lhs), expected)?;
        }

        Ok(())
    }

    fn and_reduce() -> Result {
        let test_values = [
            (8, 0xFF, true),
            (8, 0xFE, false),
            (3, 0b111, true),
            (64, u64::MAX, true),
            (64, u64::MAX - 1, false),
        ];

        for (width, value, expected) in test_values {
            expect_bit_op::<T>(BitOperation::AndReduce(width, value), expected)?;
        }

        Ok(())
    }

    fn or_reduce() -> Result {
        let test_values = [
            (8, 0x00, false),
            (8, 0x10, true),
            (5, 0b00001, true),
            (64, 1 << 63, true),
        ];

        for (width, value, expected) in test_values {
            expect_bit_op::<T>(BitOperation::OrReduce(width, value), expected)?;
        }

        Ok(())
    }

    fn xor_reduce() -> Result {
        let test_values = [
            (8, 0x00, false),
            (8, 0x01, true),
            (8, 0xA5, false),
            (8, 0xA4, true),
            (13, 0b1_0000_0000_0011, true),
            (64, u64::MAX, false),
        ];

        for (width, value, expected) in test_values {
            expect_bit_op::<T>(BitOperation::XorReduce(width, value), expected)?;
        }

        Ok(())
    }

    fn equals() -> Result {
        let test_values = [
            (0xFF, 0x00, false),
            (0x00, 0xFF, false),
            (0x00, 0x00, true),
            (u64::MAX, u64::MAX, true),
        ];

        for (lhs, rhs, expected) in test_values {
            expect_bit_op::<T>(BitOperation::Equals(lhs, rhs), expected)?;
        }

        Ok(())
    }

    fn not_equals() -> Result {
        let test_values = [(0xFF, 0x00, true), (0x00, 0xFF, true), (0x00, 0x00, false)];

        for (lhs, rhs, expected) in test_values {
            expect_bit_op::<T>(BitOperation::NotEquals(lhs, rhs), expected)?;
        }

        Ok(())
    }

    fn unsigned_greater_than() -> Result {
        let test_values = [
            (0xFF, 0x00, true),
            (0x00, 0xFF, false),
            (0x00, 0x00, false),
            (0x80, 0x7F, true),
        ];

        for (lhs, rhs, expected) in test_values {
            expect_bit_op::<T>(BitOperation::UnsignedGreaterThan(lhs, rhs), expected)?;
        }

        Ok(())
    }

    fn unsigned_less_than() -> Result {
        let test_values = [(0xFF, 0x00, false), (0x00, 0xFF, true), (0x00, 0x00, false)];

        for (lhs, rhs, expected) in test_values {
            expect_bit_op::<T>(BitOperation::UnsignedLessThan(lhs, rhs), expected)?;
        }

        Ok(())
    }

    fn unsigned_greater_than_or_equals() -> Result {
        let test_values = [(0xFF, 0x00, true), (0x00, 0xFF, false), (0x00, 0x00, true)];

        for (lhs, rhs, expected) in test_values {
            expect_bit_op::<T>(
                BitOperation::UnsignedGreaterThanOrEquals(lhs, rhs),
                expected,
            )?;
        }

        Ok(())
    }

    fn unsigned_less_than_or_equals() -> Result {
        let test_values = [(0, 0, true), (1, 0, false), (0, 1, true)];

        for (lhs, rhs, expected) in test_values {
            expect_bit_op::<T>(BitOperation::UnsignedLessThanOrEquals(lhs, rhs), expected)?;
        }

        Ok(())
    }

    fn signed_greater_than() -> Result {
        let test_values = [
            (-1, 0, false),
            (0, -1, true),
            (0, 0, false),
            (1, 0, true),
            (0, 1, false),
            (-28, -32, true),
            (i8::MIN, i8::MAX, false),
        ];

        for (lhs, rhs, expected) in test_values {
            expect_bit_op::<T>(BitOperation::SignedGreaterThan(lhs, rhs), expected)?;
        }

        Ok(())
    }

    fn signed_less_than() -> Result {
        let test_values = [
            (-1, 0, true),
            (0, -1, false),
            (0, 0, false),
            (1, 0, false),
            (0, 1, true),
        ];

        for (lhs, rhs, expected) in test_values {
            expect_bit_op::<T>(BitOperation::SignedLessThan(lhs, rhs), expected)?;
        }

        Ok(())
    }

    fn signed_greater_than_or_equals() -> Result {
        let test_values = [
            (-1, 0, false),
            (0, -1, true),
            (0, 0, true),
            (1, 0, true),
            (0, 1, false),
            (-1, -1, true),
        ];

        for (lhs, rhs, expected) in test_values {
            expect_bit_op::<T>(BitOperation::SignedGreaterThanOrEquals(lhs, rhs), expected)?;
        }

        Ok(())
    }

    fn signed_less_than_or_equals() -> Result {
        let test_values = [
            (-1, 0, true),
            (0, -1, false),
            (0, 0, true),
            (1, 0, false),
            (0, 1, true),
        ];

        for (lhs, rhs, expected) in test_values {
            expect_bit_op::<T>(BitOperation::SignedLessThanOrEquals(lhs, rhs), expected)?;
        }

        Ok(())
    }

    fn shift_left() -> Result {
        let test_values = [
            (0x00, 0x00, 0x00),
            (0x01, 0x00, 0x01),
            (0x01, 0x01, 0x02),
            (0x01, 0x02, 0x04),
            (0x01, 0x03, 0x08),
            (0x01, 0x04, 0x10),
            (0x01, 0x05, 0x20),
            (0x01, 0x06, 0x40),
            (0x01, 0x07, 0x80),
            (0x01, 0x08, 0x00),
            // Amounts beyond the width always produce 0
            (0x01, 0x09, 0x00),
            (0xFF, 0xFF, 0x00),
        ];

        for (lhs, rhs, expected) in test_values {
            expect_op::<T>(Operation::ShiftLeft(lhs, rhs), expected)?;
        }

        Ok(())
    }

    fn arithmetic_shift_right() -> Result {
        let test_values = [
            (0x00, 0x00, 0x00),
            // Positive tests
            (0x7F, 0x00, 0x7F),
            (0x7F, 0x01, 0x3F),
            (0x7F, 0x02, 0x1F),
            (0x7F, 0x03, 0x0F),
            (0x7F, 0x04, 0x07),
            (0x7F, 0x05, 0x03),
            (0x7F, 0x06, 0x01),
            (0x7F, 0x07, 0x00),
            (0x7F, 0x08, 0x00),
            // Amounts beyond the width produce 0 when positive
            (0x7F, 0x09, 0x00),
            // Negative tests
            (0x80, 0x00, 0x80),
            (0x80, 0x01, 0xC0),
            (0x80, 0x02, 0xE0),
            (0x80, 0x03, 0xF0),
            (0x80, 0x04, 0xF8),
            (0x80, 0x05, 0xFC),
            (0x80, 0x06, 0xFE),
            (0x80, 0x07, 0xFF),
            (0x80, 0x08, 0xFF),
            // Amounts beyond the width produce -1 when negative
            (0x80, 0x09, 0xFF),
            (0x80, 0xFF, 0xFF),
        ];
        for (lhs, rhs, expected) in test_values {
            expect_op::<T>(Operation::ArithmeticShiftRight(lhs, rhs), expected)?;
        }
        Ok(())
    }

    fn logical_shift_right() -> Result {
        let test_values = [
            (0x00, 0x00, 0x00),
            (0xFF, 0x00, 0xFF),
            (0xFF, 0x01, 0x7F),
            (0xFF, 0x02, 0x3F),
            (0xFF, 0x03, 0x1F),
            (0xFF, 0x04, 0x0F),
            (0xFF, 0x05, 0x07),
            (0xFF, 0x06, 0x03),
            (0xFF, 0x07, 0x01),
            (0xFF, 0x08, 0x00),
            (0xFF, 0x09, 0x00),
        ];
        for (lhs, rhs, expected) in test_values {
            expect_op::<T>(Operation::LogicalShiftRight(lhs, rhs), expected)?;
        }
        Ok(())
    }

    fn zero_extend() -> Result {
        let test_values = [(0x00, 0, 0x00), (0xFF, 8, 0xFF), (0x80, 3, 0x80)];
        for (lhs, extra, expected) in test_values {
            expect_op::<T>(Operation::ZeroExtend(lhs, extra), expected)?;
        }
        Ok(())
    }

    fn sign_extend() -> Result {
        let test_values = [
            (0x00, 8, 0x00),
            (0xFF, 8, 0xFFFF),
            (0x7F, 8, 0x7F),
            (0x80, 3, 0x780),
            (0x80, 0, 0x80),
        ];
        for (lhs, extra, expected) in test_values {
            expect_op::<T>(Operation::SignExtend(lhs, extra), expected)?;
        }
        Ok(())
    }

    fn concat() -> Result {
        // The first operand occupies the least significant bits
        let test_values = [(0xCD, 0xAB, 0xABCD), (0x0F, 0xF0, 0xF00F)];

        for (lhs, rhs, expected) in test_values {
            expect_op::<T>(Operation::Concat(lhs, rhs), expected)?;
        }

        Ok(())
    }

    fn slice() -> Result {
        let test_values = [
            (0xABCD, 0, 8, 0xCD),
            (0xABCD, 8, 16, 0xAB),
            (0xABCD, 4, 12, 0xBC),
            (0xABCD, 0, 16, 0xABCD),
            (0xABCD, 15, 16, 0x1),
        ];

        for (value, start, end, expected) in test_values {
            expect_op::<T>(Operation::Slice(value, start, end), expected)?;
        }

        Ok(())
    }

    fn add() -> Result {
        let test_values = [
            (64, 0, 0, 0),
            (64, 0, 1, 1),
            (64, 1, 1, 2),
            (64, 0xFEDCBA9876543210, 0x0123456789ABCDEF, u64::MAX),
            (64, u64::MAX, 1, 0),
            (33, 10, 23, 33),
            (8, 0xFF, 0x02, 0x01),
            (5, 0b10110, 0b01011, 0b00001),
        ];
        for (width, lhs, rhs, expected) in test_values {
            expect_op::<T>(Operation::Add(width, lhs, rhs), expected)?;
        }
        Ok(())
    }

    fn negate() -> Result {
        let test_values = [
            (64, -0x0123456789ABCDEFi64 as u64, 0x0123456789ABCDEF),
            (64, 0x0123456789ABCDEF, -0x0123456789ABCDEFi64 as u64),
            (64, i64::MIN as u64, i64::MIN as u64),
            (32, 347, (-347i32) as u32 as u64),
            (8, 0, 0),
            (3, 0b001, 0b111),
        ];

        for (width, lhs, expected) in test_values {
            expect_op::<T>(Operation::Negate(width, lhs), expected)?;
        }

        Ok(())
    }

    fn subtract() -> Result {
        let test_values = [
            (64, 0, 0, 0),
            (64, 0, 1, u64::MAX),
            (64, 1, 0, 1),
            (64, 0, i64::MIN as u64, i64::MIN as u64),
            // Wraps around silently
            (8, 128, 129, 0xFF),
            (4, 0b1001, 0b1100, 0b1101),
            (17, 0x1FFFF, 0x1FFFF, 0),
        ];

        for (width, lhs, rhs, expected) in test_values {
            expect_op::<T>(Operation::Subtract(width, lhs, rhs), expected)?;
        }

        Ok(())
    }

    fn multiply() -> Result {
        let test_values = [
            (0, 0, 0),
            (1, 1, 1),
            (-1, -1, 1),
            (-1, 1, -1),
            (2, 0, 0),
            (2, 2, 4),
            (i64::MIN, -1, i64::MIN),
            (0x11934891, 0x1234567, 0x11934891 * 0x1234567),
        ];

        for (lhs, rhs, expected) in test_values {
            expect_op::<T>(Operation::Multiply(lhs, rhs), expected as u64)?;
        }

        Ok(())
    }
}

fn expect_op<T: BitVectorOps + Debug>(op: Operation, expected: u64) -> Result
where
    T: TryInto<u64>,
    <T as TryInto<u64>>::Error: Debug,
{
    log::debug!("validating {op:?}");
    let actual = op.evaluate::<T>();

    let expected_width = op.expected_width();
    if actual.width() != expected_width {
        return Err(ValidationError::IncorrectWidth {
            op,
            expected: expected_width,
            actual: actual.width(),
        });
    }

    let actual_str = format!("{actual:?}");
    let actual = actual
        .try_into()
        .map_err(|err| ValidationError::ValueConversionFailure {
            op,
            err: format!("Failed to convert {actual_str}: {err:?}"),
        })?;
    if actual == expected {
        Ok(())
    } else {
        Err(ValidationError::IncorrectValue {
            op,
            actual,
            expected,
        })
    }
}

fn expect_bit_op<T: BitVectorOps>(op: BitOperation, expected: bool) -> Result
where
    <<T as BitVectorOps>::Bit as TryInto<bool>>::Error: Debug,
{
    log::debug!("validating {op:?}");
    let actual = op.evaluate::<T>();
    let actual_str = format!("{actual:?}");
    let actual = actual
        .try_into()
        .map_err(|err| ValidationError::BitConversionFailure {
            op,
            err: format!("Failed to convert {actual_str}: {err:?}"),
        })?;
    if actual == expected {
        Ok(())
    } else {
        Err(ValidationError::IncorrectBit {
            op,
            actual,
            expected,
        })
    }
}
