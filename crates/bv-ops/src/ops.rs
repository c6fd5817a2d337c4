/// This trait is implemented by every bit-vector representation. The width of a value is a
/// run-time property and is fixed for the lifetime of the value; operations that change the width
/// always produce a new value. Bit 0 is the least significant bit and bit `width - 1` is the most
/// significant (sign) bit.
///
/// Operations taking two operands require both operands to have the same width. Supplying
/// operands of different widths is a contract violation and implementations panic.
pub trait BitVectorOps: BitwiseOps + Sized {
    /// A representation of a single bit. Comparisons and reductions produce a bit rather than a
    /// `bool` so that representations with unknown states can report an unknown result.
    type Bit: BitwiseOps + From<bool> + TryInto<bool> + std::fmt::Debug + Clone;

    /// Create a value of the given width from the native bit pattern of `value`. Bits of `value`
    /// beyond `width` are discarded. Positions at or beyond 64 are zero.
    fn from_u64(width: usize, value: u64) -> Self;

    /// Returns the number of bits in this value.
    fn width(&self) -> usize;

    /// This is standard integer addition. It works for either unsigned or signed interpretations
    /// of the integer encoding (twos complement). The addition is performed modulo the width and
    /// the final carry is discarded.
    fn add(self, rhs: Self) -> Self;

    /// This is standard integer subtraction. It works for either unsigned or signed
    /// interpretations of the integer encoding (twos complement). Underflow wraps around silently.
    fn subtract(self, rhs: Self) -> Self;

    /// This is an integer multiplication operation. The product is truncated to the width of the
    /// operands, so the result is correct for either a signed or unsigned interpretation of the
    /// inputs and output.
    fn multiply(self, rhs: Self) -> Self;

    /// This is the twos complement or arithmetic negation operation. It is equivalent to
    /// subtracting the value from zero, or to inverting every bit and adding one.
    fn negate(self) -> Self;

    /// Shifts left by the amount given by `amount`, interpreted as an unsigned integer of any
    /// width. The vacated (least significant) bits are filled with zero. Shifting by the width or
    /// more produces zero.
    fn shift_left(self, amount: Self) -> Self;

    /// Performs an unsigned (logical) right shift by the amount given by `amount`, interpreted as
    /// an unsigned integer of any width. The vacated (most significant) bits are filled with zero.
    /// Shifting by the width or more produces zero.
    fn logical_shift_right(self, amount: Self) -> Self;

    /// Performs a signed (arithmetic) right shift by the amount given by `amount`, interpreted as
    /// an unsigned integer of any width. The vacated bits are filled with the original value of
    /// the most significant bit. Shifting by the width or more fills every bit with the original
    /// sign bit.
    fn arithmetic_shift_right(self, amount: Self) -> Self;

    /// Concatenates two values. `self` occupies the least significant bits of the result and
    /// `high` the most significant bits. The result width is the sum of both widths.
    fn concat(self, high: Self) -> Self;

    /// Extracts the half-open bit range `[start, end)`. Bit `i` of the result is bit `start + i`
    /// of `self`.
    fn slice(self, start: usize, end: usize) -> Self;

    /// Adds `extra_bits` zero bits above the most significant bit.
    fn zero_extend(self, extra_bits: usize) -> Self;

    /// Adds `extra_bits` copies of the most significant bit above the most significant bit.
    fn sign_extend(self, extra_bits: usize) -> Self;

    /// Folds every bit with a logical-and. The reduction of a zero-width value is one.
    fn and_reduce(self) -> Self::Bit;

    /// Folds every bit with a logical-or. The reduction of a zero-width value is zero.
    fn or_reduce(self) -> Self::Bit;

    /// Folds every bit with an exclusive-or, which is the parity of the set bits. The reduction of
    /// a zero-width value is zero.
    fn xor_reduce(self) -> Self::Bit;

    /// This is the integer equality operator. The match must be down to the bit.
    fn equals(self, rhs: Self) -> Self::Bit;

    /// This is the integer inequality operator. The match must be down to the bit.
    fn not_equals(self, rhs: Self) -> Self::Bit;

    /// This is an unsigned integer comparison operator. The result is true if `self` is strictly
    /// greater than `rhs` when both are treated as unsigned integers.
    fn unsigned_greater_than(self, rhs: Self) -> Self::Bit;

    /// This is an unsigned integer comparison operator. The result is true if `self` is greater
    /// than or equal to `rhs` when both are treated as unsigned integers.
    fn unsigned_greater_than_or_equals(self, rhs: Self) -> Self::Bit;

    /// This is an unsigned integer comparison operator. The result is true if `self` is strictly
    /// less than `rhs` when both are treated as unsigned integers.
    fn unsigned_less_than(self, rhs: Self) -> Self::Bit;

    /// This is an unsigned integer comparison operator. The result is true if `self` is less than
    /// or equal to `rhs` when both are treated as unsigned integers.
    fn unsigned_less_than_or_equals(self, rhs: Self) -> Self::Bit;

    /// This is a signed integer comparison operator. The most significant bit is the twos
    /// complement sign bit. The result is true if `self` is strictly greater than `rhs`.
    fn signed_greater_than(self, rhs: Self) -> Self::Bit;

    /// This is a signed integer comparison operator. The result is true if `self` is greater than
    /// or equal to `rhs`.
    fn signed_greater_than_or_equals(self, rhs: Self) -> Self::Bit;

    /// This is a signed integer comparison operator. The result is true if `self` is strictly less
    /// than `rhs`.
    fn signed_less_than(self, rhs: Self) -> Self::Bit;

    /// This is a signed integer comparison operator. The result is true if `self` is less than or
    /// equal to `rhs`.
    fn signed_less_than_or_equals(self, rhs: Self) -> Self::Bit;
}

/// Bitwise operations supported by bit-vector values.
pub trait BitwiseOps {
    /// Performs a logical-and on each pair of bits. Both inputs and the output have the same
    /// width.
    fn and(self, rhs: Self) -> Self;

    /// Flips every bit. The input and output have the same width.
    fn not(self) -> Self;

    /// Performs a logical-or on each pair of bits. Both inputs and the output have the same width.
    fn or(self, rhs: Self) -> Self;

    /// Performs an exclusive-or on each pair of bits. Both inputs and the output have the same
    /// width.
    fn xor(self, rhs: Self) -> Self;
}

impl<T> BitwiseOps for T
where
    T: std::ops::BitAnd<Output = T>
        + std::ops::BitOr<Output = T>
        + std::ops::BitXor<Output = T>
        + std::ops::Not<Output = T>,
{
    fn and(self, other: Self) -> Self {
        self & other
    }

    fn not(self) -> Self {
        !self
    }

    fn or(self, other: Self) -> Self {
        self | other
    }

    fn xor(self, other: Self) -> Self {
        self ^ other
    }
}
