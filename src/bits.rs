use std::cmp::Ordering;

use bv_ops::BitVectorOps;
use quadvec::{QuadBitVector, QuadValue};

/// Bit vector result type
pub type Result<T> = std::result::Result<T, BitVectorError>;

/// Possible bit vector errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BitVectorError {
    /// A character other than `0`, `1` or `_` in a binary string
    #[error("invalid binary digit {0:?}")]
    InvalidDigit(char),

    /// A binary string with more digits than the requested width
    #[error("{digits} digits do not fit in {width} bits")]
    TooManyDigits { digits: usize, width: usize },

    /// An `X` or `Z` digit where only known digits are allowed
    #[error("unknown digit at index {index}")]
    UnknownDigit { index: usize },

    /// The value does not fit in the requested native type
    #[error("value exceeded maximum number of bits ({max_bits})")]
    Overflow { max_bits: u32 },
}

/// A two-valued bit vector of run-time width. Bits are packed least significant first into 64-bit
/// words, and bits of the last word beyond the width are always zero.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BitVector {
    words: Vec<u64>,
    width: usize,
}

const WORD_BITS: usize = u64::BITS as usize;

impl BitVector {
    pub fn new(width: usize) -> Self {
        Self {
            words: vec![0; width.div_ceil(WORD_BITS)],
            width,
        }
    }

    pub fn ones(width: usize) -> Self {
        let mut result = Self {
            words: vec![u64::MAX; width.div_ceil(WORD_BITS)],
            width,
        };
        result.normalize();
        result
    }

    /// Creates a vector from the bit pattern of `value`, truncated to `width`. Positions at or
    /// beyond 64 are zero.
    pub fn from_u64(width: usize, value: u64) -> Self {
        let mut result = Self::new(width);
        if let Some(word) = result.words.first_mut() {
            *word = value;
        }
        result.normalize();
        result
    }

    /// Creates a vector from the twos complement bit pattern of `value`, truncated to `width`.
    /// Positions at or beyond 64 are copies of the sign.
    pub fn from_i64(width: usize, value: i64) -> Self {
        let fill = if value < 0 { u64::MAX } else { 0 };
        let mut result = Self {
            words: vec![fill; width.div_ceil(WORD_BITS)],
            width,
        };
        if let Some(word) = result.words.first_mut() {
            *word = value as u64;
        }
        result.normalize();
        result
    }

    /// Creates a vector of the given width from a binary string printed most significant bit
    /// first. Missing high bits are zero. Underscores are separators and are ignored.
    pub fn from_binary(width: usize, digits: &str) -> Result<Self> {
        let bits = Self::binary_bits(digits)?;
        if bits.len() > width {
            return Err(BitVectorError::TooManyDigits {
                digits: bits.len(),
                width,
            });
        }

        let mut result = Self::new(width);
        for (i, bit) in bits.into_iter().rev().enumerate() {
            result.set(i, bit);
        }

        Ok(result)
    }

    /// Creates a vector whose width is the number of digits in the binary string.
    pub fn parse_binary(digits: &str) -> Result<Self> {
        let bits = Self::binary_bits(digits)?;
        Self::from_binary(bits.len(), digits)
    }

    fn binary_bits(digits: &str) -> Result<Vec<bool>> {
        digits
            .chars()
            .filter(|&c| c != '_')
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(BitVectorError::InvalidDigit(c)),
            })
            .collect()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0
    }

    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Returns the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than the width.
    pub fn get(&self, index: usize) -> bool {
        self.assert_index(index);
        (self.words[index / WORD_BITS] >> (index % WORD_BITS)) & 1 == 1
    }

    pub fn set(&mut self, index: usize, bit: bool) {
        self.assert_index(index);
        let mask = 1 << (index % WORD_BITS);
        let word = &mut self.words[index / WORD_BITS];
        if bit {
            *word |= mask;
        } else {
            *word &= !mask;
        }
    }

    pub fn msb(&self) -> Option<bool> {
        self.width.checked_sub(1).map(|index| self.get(index))
    }

    pub fn lsb(&self) -> Option<bool> {
        (!self.is_empty()).then(|| self.get(0))
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.width).map(|i| self.get(i))
    }

    fn assert_index(&self, index: usize) {
        assert!(
            index < self.width,
            "index {index} out of range for width {width}",
            width = self.width
        );
    }

    fn assert_same_width(&self, rhs: &Self) {
        assert_eq!(self.width, rhs.width, "operands must have the same width");
    }

    /// Clears the bits of the last word beyond the width.
    fn normalize(&mut self) {
        let used = self.width % WORD_BITS;
        if used != 0
            && let Some(word) = self.words.last_mut()
        {
            *word &= u64::MAX >> (WORD_BITS - used);
        }
    }

    fn zip_words(&self, rhs: &Self, f: impl Fn(u64, u64) -> u64) -> Self {
        self.assert_same_width(rhs);
        let mut result = Self {
            words: self
                .words
                .iter()
                .zip(rhs.words.iter())
                .map(|(&x, &y)| f(x, y))
                .collect(),
            width: self.width,
        };
        result.normalize();
        result
    }

    /// Addition modulo the width.
    pub fn wrapping_add(&self, rhs: &Self) -> Self {
        self.assert_same_width(rhs);
        let mut carry = false;
        let mut result = Self {
            words: self
                .words
                .iter()
                .zip(rhs.words.iter())
                .map(|(&x, &y)| {
                    let (sum, overflow_x) = x.overflowing_add(y);
                    let (sum, overflow_carry) = sum.overflowing_add(u64::from(carry));
                    carry = overflow_x || overflow_carry;
                    sum
                })
                .collect(),
            width: self.width,
        };
        result.normalize();
        result
    }

    /// Subtraction modulo the width.
    pub fn wrapping_sub(&self, rhs: &Self) -> Self {
        self.assert_same_width(rhs);
        let mut borrow = false;
        let mut result = Self {
            words: self
                .words
                .iter()
                .zip(rhs.words.iter())
                .map(|(&x, &y)| {
                    let (difference, borrow_x) = x.overflowing_sub(y);
                    let (difference, borrow_carry) = difference.overflowing_sub(u64::from(borrow));
                    borrow = borrow_x || borrow_carry;
                    difference
                })
                .collect(),
            width: self.width,
        };
        result.normalize();
        result
    }

    /// Schoolbook multiplication truncated to the width.
    pub fn wrapping_mul(&self, rhs: &Self) -> Self {
        self.assert_same_width(rhs);
        let len = self.words.len();
        let mut words = vec![0u64; len];
        for i in 0..len {
            let mut carry = 0u128;
            for j in 0..len - i {
                let total = u128::from(words[i + j])
                    + u128::from(self.words[i]) * u128::from(rhs.words[j])
                    + carry;
                words[i + j] = total as u64;
                carry = total >> 64;
            }
        }

        let mut result = Self {
            words,
            width: self.width,
        };
        result.normalize();
        result
    }

    pub fn wrapping_neg(&self) -> Self {
        Self::new(self.width).wrapping_sub(self)
    }

    /// Logical left shift. Shifting by the width or more produces zero.
    pub fn shl_by(&self, amount: usize) -> Self {
        if amount >= self.width {
            return Self::new(self.width);
        }

        let (word_shift, bit_shift) = (amount / WORD_BITS, amount % WORD_BITS);
        let mut words = vec![0u64; self.words.len()];
        for i in word_shift..words.len() {
            let source = i - word_shift;
            words[i] = self.words[source] << bit_shift;
            if bit_shift > 0 && source > 0 {
                words[i] |= self.words[source - 1] >> (WORD_BITS - bit_shift);
            }
        }

        let mut result = Self {
            words,
            width: self.width,
        };
        result.normalize();
        result
    }

    /// Logical right shift. Shifting by the width or more produces zero.
    pub fn lshr_by(&self, amount: usize) -> Self {
        if amount >= self.width {
            return Self::new(self.width);
        }

        let (word_shift, bit_shift) = (amount / WORD_BITS, amount % WORD_BITS);
        let len = self.words.len();
        let mut words = vec![0u64; len];
        for (i, word) in words.iter_mut().enumerate().take(len - word_shift) {
            let source = i + word_shift;
            *word = self.words[source] >> bit_shift;
            if bit_shift > 0 && source + 1 < len {
                *word |= self.words[source + 1] << (WORD_BITS - bit_shift);
            }
        }

        Self {
            words,
            width: self.width,
        }
    }

    /// Arithmetic right shift. Shifting by the width or more fills every bit with the sign.
    pub fn ashr_by(&self, amount: usize) -> Self {
        if self.msb() != Some(true) {
            return self.lshr_by(amount);
        }

        let amount = amount.min(self.width);
        let fill = Self::ones(self.width).shl_by(self.width - amount);
        &self.lshr_by(amount) | &fill
    }

    /// Interprets a shift amount as an unsigned integer.
    ///
    /// # Panics
    ///
    /// Panics if the amount does not fit in 64 bits.
    fn shift_amount(&self, amount: &Self) -> usize {
        if amount.words.iter().skip(1).any(|&word| word != 0) {
            panic!("shift amount {amount} does not fit in 64 bits");
        }

        let amount = amount.words.first().copied().unwrap_or(0);
        usize::try_from(amount).unwrap_or(usize::MAX).min(self.width)
    }

    pub fn shl(&self, amount: &Self) -> Self {
        self.shl_by(self.shift_amount(amount))
    }

    pub fn lshr(&self, amount: &Self) -> Self {
        self.lshr_by(self.shift_amount(amount))
    }

    pub fn ashr(&self, amount: &Self) -> Self {
        self.ashr_by(self.shift_amount(amount))
    }

    /// Concatenates two vectors. `self` occupies the least significant bits of the result.
    pub fn concat(&self, high: &Self) -> Self {
        let low = self.zero_extend(high.width);
        let high = high.zero_extend(self.width).shl_by(self.width);
        &low | &high
    }

    /// The half-open bit range `[start, end)`.
    pub fn slice(&self, start: usize, end: usize) -> Self {
        assert!(
            start <= end && end <= self.width,
            "invalid slice [{start}, {end}) of {width} bits",
            width = self.width
        );

        let mut result = self.lshr_by(start);
        result.width = end - start;
        result.words.truncate(result.width.div_ceil(WORD_BITS));
        result.normalize();
        result
    }

    pub fn zero_extend(&self, extra_bits: usize) -> Self {
        let width = self.width + extra_bits;
        let mut words = self.words.clone();
        words.resize(width.div_ceil(WORD_BITS), 0);
        Self { words, width }
    }

    pub fn sign_extend(&self, extra_bits: usize) -> Self {
        let extended = self.zero_extend(extra_bits);
        if self.msb() == Some(true) {
            let fill = Self::ones(extended.width).shl_by(self.width);
            &extended | &fill
        } else {
            extended
        }
    }

    pub fn and_reduce(&self) -> bool {
        *self == Self::ones(self.width)
    }

    pub fn or_reduce(&self) -> bool {
        self.words.iter().any(|&word| word != 0)
    }

    pub fn xor_reduce(&self) -> bool {
        self.words.iter().map(|word| word.count_ones()).sum::<u32>() % 2 == 1
    }

    /// Signed (twos complement) comparison of vectors of the same width.
    pub fn signed_cmp(&self, rhs: &Self) -> Ordering {
        self.assert_same_width(rhs);
        match (self.msb(), rhs.msb()) {
            (Some(true), Some(false)) => Ordering::Less,
            (Some(false), Some(true)) => Ordering::Greater,
            _ => self.cmp(rhs),
        }
    }

    /// The bits of the vector, most significant first.
    pub fn binary_string(&self) -> String {
        (0..self.width)
            .rev()
            .map(|i| if self.get(i) { '1' } else { '0' })
            .collect()
    }

    /// The sized hex literal of the vector.
    pub fn hex_string(&self) -> String {
        let nibbles = self.width.div_ceil(4).max(1);
        let digits: String = (0..nibbles)
            .rev()
            .map(|nibble| {
                let word = self.words.get(nibble / 16).copied().unwrap_or(0);
                let value = (word >> (4 * (nibble % 16))) & 0xF;
                char::from_digit(value as u32, 16).unwrap_or('0')
            })
            .collect();

        format!("{width}'h{digits}", width = self.width)
    }
}

/// Vectors are ordered by width first, then by unsigned value.
impl Ord for BitVector {
    fn cmp(&self, other: &Self) -> Ordering {
        self.width
            .cmp(&other.width)
            .then_with(|| self.words.iter().rev().cmp(other.words.iter().rev()))
    }
}

impl PartialOrd for BitVector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for BitVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.binary_string())
    }
}

impl std::fmt::Debug for BitVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitVector")
            .field("width", &self.width)
            .field("bits", &self.binary_string())
            .finish()
    }
}

impl std::ops::Not for &BitVector {
    type Output = BitVector;

    fn not(self) -> Self::Output {
        let mut result = BitVector {
            words: self.words.iter().map(|word| !word).collect(),
            width: self.width,
        };
        result.normalize();
        result
    }
}

impl std::ops::BitAnd for &BitVector {
    type Output = BitVector;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.zip_words(rhs, |x, y| x & y)
    }
}

impl std::ops::BitOr for &BitVector {
    type Output = BitVector;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.zip_words(rhs, |x, y| x | y)
    }
}

impl std::ops::BitXor for &BitVector {
    type Output = BitVector;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.zip_words(rhs, |x, y| x ^ y)
    }
}

impl std::ops::Not for BitVector {
    type Output = Self;

    fn not(self) -> Self::Output {
        !&self
    }
}

impl std::ops::BitAnd for BitVector {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        &self & &rhs
    }
}

impl std::ops::BitOr for BitVector {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        &self | &rhs
    }
}

impl std::ops::BitXor for BitVector {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        &self ^ &rhs
    }
}

impl From<&BitVector> for QuadBitVector {
    fn from(value: &BitVector) -> Self {
        value.iter().map(QuadValue::from).collect()
    }
}

impl From<BitVector> for QuadBitVector {
    fn from(value: BitVector) -> Self {
        QuadBitVector::from(&value)
    }
}

impl TryFrom<&QuadBitVector> for BitVector {
    type Error = BitVectorError;

    fn try_from(value: &QuadBitVector) -> Result<Self> {
        let mut result = BitVector::new(value.width());
        for (index, digit) in value.iter().enumerate() {
            let bit = digit
                .to_bool()
                .ok_or(BitVectorError::UnknownDigit { index })?;
            result.set(index, bit);
        }

        Ok(result)
    }
}

impl TryFrom<BitVector> for u64 {
    type Error = BitVectorError;

    fn try_from(value: BitVector) -> Result<Self> {
        if value.words.iter().skip(1).any(|&word| word != 0) {
            return Err(BitVectorError::Overflow { max_bits: u64::BITS });
        }

        Ok(value.words.first().copied().unwrap_or(0))
    }
}

impl BitVectorOps for BitVector {
    type Bit = bool;

    fn from_u64(width: usize, value: u64) -> Self {
        BitVector::from_u64(width, value)
    }

    fn width(&self) -> usize {
        self.width
    }

    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(&rhs)
    }

    fn subtract(self, rhs: Self) -> Self {
        self.wrapping_sub(&rhs)
    }

    fn multiply(self, rhs: Self) -> Self {
        self.wrapping_mul(&rhs)
    }

    fn negate(self) -> Self {
        self.wrapping_neg()
    }

    fn shift_left(self, amount: Self) -> Self {
        self.shl(&amount)
    }

    fn logical_shift_right(self, amount: Self) -> Self {
        self.lshr(&amount)
    }

    fn arithmetic_shift_right(self, amount: Self) -> Self {
        self.ashr(&amount)
    }

    fn concat(self, high: Self) -> Self {
        BitVector::concat(&self, &high)
    }

    fn slice(self, start: usize, end: usize) -> Self {
        BitVector::slice(&self, start, end)
    }

    fn zero_extend(self, extra_bits: usize) -> Self {
        BitVector::zero_extend(&self, extra_bits)
    }

    fn sign_extend(self, extra_bits: usize) -> Self {
        BitVector::sign_extend(&self, extra_bits)
    }

    fn and_reduce(self) -> Self::Bit {
        BitVector::and_reduce(&self)
    }

    fn or_reduce(self) -> Self::Bit {
        BitVector::or_reduce(&self)
    }

    fn xor_reduce(self) -> Self::Bit {
        BitVector::xor_reduce(&self)
    }

    fn equals(self, rhs: Self) -> Self::Bit {
        self.assert_same_width(&rhs);
        self == rhs
    }

    fn not_equals(self, rhs: Self) -> Self::Bit {
        self.assert_same_width(&rhs);
        self != rhs
    }

    fn unsigned_greater_than(self, rhs: Self) -> Self::Bit {
        self.assert_same_width(&rhs);
        self > rhs
    }

    fn unsigned_greater_than_or_equals(self, rhs: Self) -> Self::Bit {
        self.assert_same_width(&rhs);
        self >= rhs
    }

    fn unsigned_less_than(self, rhs: Self) -> Self::Bit {
        self.assert_same_width(&rhs);
        self < rhs
    }

    fn unsigned_less_than_or_equals(self, rhs: Self) -> Self::Bit {
        self.assert_same_width(&rhs);
        self <= rhs
    }

    fn signed_greater_than(self, rhs: Self) -> Self::Bit {
        self.signed_cmp(&rhs).is_gt()
    }

    fn signed_greater_than_or_equals(self, rhs: Self) -> Self::Bit {
        self.signed_cmp(&rhs).is_ge()
    }

    fn signed_less_than(self, rhs: Self) -> Self::Bit {
        self.signed_cmp(&rhs).is_lt()
    }

    fn signed_less_than_or_equals(self, rhs: Self) -> Self::Bit {
        self.signed_cmp(&rhs).is_le()
    }
}
