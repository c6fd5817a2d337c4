use crate::BitVectorOps;

/// Representation of a value with a bit width no greater than 64, backed by a machine word. Bits
/// beyond the width are always zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NativeBits {
    value: u64,
    valid_bits: u32,
}

/// Default value is a 0 byte (8 bits).
impl Default for NativeBits {
    fn default() -> Self {
        Self {
            value: 0,
            valid_bits: 8,
        }
    }
}

impl NativeBits {
    pub const MAX_BITS: u32 = u64::BITS;

    pub fn new(value: u64, valid_bits: u32) -> Self {
        assert!(
            valid_bits <= Self::MAX_BITS && valid_bits > 0,
            "native width must be within 1..=64, got {valid_bits}"
        );

        Self {
            value: value & Self::bitmask(valid_bits),
            valid_bits,
        }
    }

    /// Returns true if `width` is a width with a native integer type (8, 16, 32 or 64 bits).
    pub fn is_native_width(width: usize) -> bool {
        matches!(width, 8 | 16 | 32 | 64)
    }

    fn bitmask(valid_bits: u32) -> u64 {
        u64::MAX >> (u64::BITS - valid_bits)
    }

    fn map(&self, f: impl Fn(u64) -> u64) -> Self {
        Self::new(f(self.value), self.valid_bits)
    }

    fn signed_map(&self, f: impl Fn(i64) -> i64) -> Self {
        Self::new(f(self.signed_value()) as u64, self.valid_bits)
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn valid_bits(&self) -> u32 {
        self.valid_bits
    }

    pub fn signed_value(&self) -> i64 {
        if self.valid_bits == u64::BITS {
            return self.value as i64;
        }

        let value = if self.sign_bit() {
            self.value | (u64::MAX << self.valid_bits)
        } else {
            self.value
        };

        value as i64
    }

    fn sign_bit(&self) -> bool {
        self.value & (1 << (self.valid_bits - 1)) > 0
    }

    /// Shift amounts at or beyond the width are clamped to the width.
    fn shift_amount(&self, amount: &Self) -> u32 {
        u32::try_from(amount.value())
            .unwrap_or(u32::MAX)
            .min(self.valid_bits)
    }

    fn assert_same_width(&self, rhs: &Self) {
        assert_eq!(
            self.valid_bits, rhs.valid_bits,
            "operands must have the same width"
        );
    }
}

macro_rules! impl_from_value {
    ($type:ty) => {
        impl From<$type> for NativeBits {
            fn from(value: $type) -> Self {
                NativeBits::new(value.into(), <$type>::BITS)
            }
        }

        impl TryFrom<NativeBits> for $type {
            type Error = std::num::TryFromIntError;
            fn try_from(value: NativeBits) -> Result<Self, Self::Error> {
                <$type>::try_from(value.value())
            }
        }
    };
}

impl_from_value!(u32);
impl_from_value!(u16);
impl_from_value!(u8);

impl From<u64> for NativeBits {
    fn from(value: u64) -> Self {
        NativeBits::new(value, u64::BITS)
    }
}

impl From<NativeBits> for u64 {
    fn from(native: NativeBits) -> Self {
        native.value()
    }
}

impl std::ops::Not for NativeBits {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.map(|value| !value)
    }
}

impl std::ops::BitAnd for NativeBits {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.assert_same_width(&rhs);
        self.map(|value| value & rhs.value())
    }
}

impl std::ops::BitOr for NativeBits {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.assert_same_width(&rhs);
        self.map(|value| value | rhs.value())
    }
}

impl std::ops::BitXor for NativeBits {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.assert_same_width(&rhs);
        self.map(|value| value ^ rhs.value())
    }
}

impl BitVectorOps for NativeBits {
    type Bit = bool;

    fn from_u64(width: usize, value: u64) -> Self {
        let valid_bits = u32::try_from(width).unwrap_or(u32::MAX);
        NativeBits::new(value, valid_bits)
    }

    fn width(&self) -> usize {
        self.valid_bits as usize
    }

    fn add(self, rhs: Self) -> Self {
        self.assert_same_width(&rhs);
        self.map(|value| value.wrapping_add(rhs.value()))
    }

    fn subtract(self, rhs: Self) -> Self {
        self.assert_same_width(&rhs);
        self.map(|value| value.wrapping_sub(rhs.value()))
    }

    fn multiply(self, rhs: Self) -> Self {
        self.assert_same_width(&rhs);
        self.map(|value| value.wrapping_mul(rhs.value()))
    }

    fn negate(self) -> Self {
        self.map(|value| value.wrapping_neg())
    }

    fn shift_left(self, amount: Self) -> Self {
        let amount = self.shift_amount(&amount);
        self.map(|value| value.checked_shl(amount).unwrap_or(0))
    }

    fn logical_shift_right(self, amount: Self) -> Self {
        let amount = self.shift_amount(&amount);
        self.map(|value| value.checked_shr(amount).unwrap_or(0))
    }

    fn arithmetic_shift_right(self, amount: Self) -> Self {
        // The signed value is sign-extended to 64 bits, so shifting by 63 already fills every
        // bit with the sign
        let amount = self.shift_amount(&amount).min(u64::BITS - 1);
        self.signed_map(|value| value >> amount)
    }

    fn concat(self, high: Self) -> Self {
        NativeBits::new(
            self.value() | (high.value() << self.valid_bits % u64::BITS),
            self.valid_bits + high.valid_bits,
        )
    }

    fn slice(self, start: usize, end: usize) -> Self {
        assert!(
            start < end && end <= self.width(),
            "invalid slice [{start}, {end}) of {width} bits",
            width = self.width()
        );
        NativeBits::new(self.value() >> start, (end - start) as u32)
    }

    fn zero_extend(self, extra_bits: usize) -> Self {
        NativeBits::from_u64(self.width() + extra_bits, self.value())
    }

    fn sign_extend(self, extra_bits: usize) -> Self {
        NativeBits::from_u64(self.width() + extra_bits, self.signed_value() as u64)
    }

    fn and_reduce(self) -> Self::Bit {
        self.value() == Self::bitmask(self.valid_bits)
    }

    fn or_reduce(self) -> Self::Bit {
        self.value() != 0
    }

    fn xor_reduce(self) -> Self::Bit {
        self.value().count_ones() % 2 == 1
    }

    fn equals(self, rhs: Self) -> Self::Bit {
        self.assert_same_width(&rhs);
        self.value() == rhs.value()
    }

    fn not_equals(self, rhs: Self) -> Self::Bit {
        self.assert_same_width(&rhs);
        self.value() != rhs.value()
    }

    fn unsigned_greater_than(self, rhs: Self) -> Self::Bit {
        self.assert_same_width(&rhs);
        self.value() > rhs.value()
    }

    fn unsigned_greater_than_or_equals(self, rhs: Self) -> Self::Bit {
        self.assert_same_width(&rhs);
        self.value() >= rhs.value()
    }

    fn unsigned_less_than(self, rhs: Self) -> Self::Bit {
        self.assert_same_width(&rhs);
        self.value() < rhs.value()
    }

    fn unsigned_less_than_or_equals(self, rhs: Self) -> Self::Bit {
        self.assert_same_width(&rhs);
        self.value() <= rhs.value()
    }

    fn signed_greater_than(self, rhs: Self) -> Self::Bit {
        self.assert_same_width(&rhs);
        self.signed_value() > rhs.signed_value()
    }

    fn signed_greater_than_or_equals(self, rhs: Self) -> Self::Bit {
        self.assert_same_width(&rhs);
        self.signed_value() >= rhs.signed_value()
    }

    fn signed_less_than(self, rhs: Self) -> Self::Bit {
        self.assert_same_width(&rhs);
        self.signed_value() < rhs.signed_value()
    }

    fn signed_less_than_or_equals(self, rhs: Self) -> Self::Bit {
        self.assert_same_width(&rhs);
        self.signed_value() <= rhs.signed_value()
    }
}
