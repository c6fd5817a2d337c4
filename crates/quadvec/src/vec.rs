use crate::digit::QuadValue;
use crate::literal::ParseLiteralError;

mod iter;
mod ops;

/// An ordered sequence of four-valued digits. Index 0 is the least significant digit and index
/// `width - 1` the most significant (sign) digit. The width is fixed for the lifetime of the value.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct QuadBitVector {
    digits: Vec<QuadValue>,
}

impl QuadBitVector {
    /// A vector of `width` zero digits.
    pub fn new(width: usize) -> Self {
        Self::zeros(width)
    }

    pub fn zeros(width: usize) -> Self {
        Self::filled(width, QuadValue::Zero)
    }

    pub fn ones(width: usize) -> Self {
        Self::filled(width, QuadValue::One)
    }

    /// A vector of `width` `X` digits.
    pub fn unknown(width: usize) -> Self {
        Self::filled(width, QuadValue::X)
    }

    pub fn filled(width: usize, digit: QuadValue) -> Self {
        Self {
            digits: vec![digit; width],
        }
    }

    pub fn from_digits(digits: Vec<QuadValue>) -> Self {
        Self { digits }
    }

    /// Creates a vector from the bit pattern of `value`, truncated to `width`. Positions at or
    /// beyond 64 are zero.
    pub fn from_u64(width: usize, value: u64) -> Self {
        (0..width)
            .map(|i| QuadValue::from(i < 64 && (value >> i) & 1 == 1))
            .collect()
    }

    /// Creates a vector from the twos complement bit pattern of `value`, truncated to `width`.
    /// Positions at or beyond 64 are copies of the sign.
    pub fn from_i64(width: usize, value: i64) -> Self {
        (0..width)
            .map(|i| QuadValue::from((value >> i.min(63)) & 1 == 1))
            .collect()
    }

    /// Creates a vector of the given width from a binary string printed most significant digit
    /// first. The digits are right-aligned and missing high digits are zero. Underscores are
    /// separators and are ignored.
    pub fn from_binary(width: usize, digits: &str) -> Result<Self, ParseLiteralError> {
        let digits = Self::binary_digits(digits)?;
        if digits.len() > width {
            return Err(ParseLiteralError::TooManyDigits {
                digits: digits.len(),
                width,
            });
        }

        let mut result = Self::zeros(width);
        for (i, digit) in digits.into_iter().rev().enumerate() {
            result.digits[i] = digit;
        }

        Ok(result)
    }

    /// Creates a vector whose width is the number of digits in the binary string.
    pub fn parse_binary(digits: &str) -> Result<Self, ParseLiteralError> {
        let mut digits = Self::binary_digits(digits)?;
        digits.reverse();
        Ok(Self { digits })
    }

    fn binary_digits(digits: &str) -> Result<Vec<QuadValue>, ParseLiteralError> {
        digits
            .chars()
            .filter(|&c| c != '_')
            .map(|c| {
                QuadValue::from_char(c).map_err(|_| ParseLiteralError::InvalidDigit {
                    digit: c,
                    format: 'b',
                })
            })
            .collect()
    }

    pub fn width(&self) -> usize {
        self.digits.len()
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns the digit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than the width.
    pub fn get(&self, index: usize) -> QuadValue {
        self.digits[index]
    }

    pub fn set(&mut self, index: usize, digit: QuadValue) {
        self.digits[index] = digit;
    }

    pub fn msb(&self) -> Option<QuadValue> {
        self.digits.last().copied()
    }

    pub fn lsb(&self) -> Option<QuadValue> {
        self.digits.first().copied()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &QuadValue> + ExactSizeIterator {
        self.digits.iter()
    }

    pub fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut QuadValue> {
        self.digits.iter_mut()
    }

    pub fn digits(&self) -> &[QuadValue] {
        &self.digits
    }

    pub fn is_fully_known(&self) -> bool {
        self.digits.iter().all(|digit| digit.is_known())
    }

    pub fn has_unknown(&self) -> bool {
        !self.is_fully_known()
    }

    /// Digit-for-digit equality, including the positions of `X` and `Z` digits. Vectors of
    /// different widths never have the same representation.
    pub fn same_representation(&self, other: &Self) -> bool {
        self.digits == other.digits
    }

    /// The value of a fully known vector of at most 64 digits.
    pub(crate) fn known_word(&self) -> Option<u64> {
        if self.width() > 64 {
            return None;
        }

        self.digits
            .iter()
            .rev()
            .try_fold(0u64, |word, digit| Some((word << 1) | u64::from(digit.to_bool()?)))
    }
}

impl std::fmt::Debug for QuadBitVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuadBitVector")
            .field("width", &self.width())
            .field("digits", &self.binary_string())
            .finish()
    }
}
