use crate::digit::QuadValue;
use crate::vec::QuadBitVector;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("unknown digit at index {index}")]
    UnknownDigit { index: usize },

    #[error("value exceeded maximum number of bits ({max_bits})")]
    Overflow { max_bits: u32 },
}

fn check_known(value: &QuadBitVector, bits: usize) -> Result<(), ConversionError> {
    match value.iter().take(bits).position(|digit| digit.is_unknown()) {
        Some(index) => Err(ConversionError::UnknownDigit { index }),
        None => Ok(()),
    }
}

/// Folds the low `bits` digits into an integer. Unknown digits beyond `bits` are reported as
/// overflow rather than unknown.
fn concretize(value: &QuadBitVector, bits: u32) -> Result<u128, ConversionError> {
    check_known(value, bits as usize)?;

    if value
        .iter()
        .skip(bits as usize)
        .any(|&digit| digit != QuadValue::Zero)
    {
        return Err(ConversionError::Overflow { max_bits: bits });
    }

    Ok(value
        .iter()
        .take(bits as usize)
        .rev()
        .fold(0u128, |word, &digit| (word << 1) | u128::from(digit == QuadValue::One)))
}

macro_rules! native_type {
    ($type:ty) => {
        impl TryFrom<&QuadBitVector> for $type {
            type Error = ConversionError;

            fn try_from(value: &QuadBitVector) -> Result<Self, Self::Error> {
                concretize(value, <$type>::BITS).map(|word| word as $type)
            }
        }

        impl TryFrom<QuadBitVector> for $type {
            type Error = ConversionError;

            fn try_from(value: QuadBitVector) -> Result<Self, Self::Error> {
                <$type>::try_from(&value)
            }
        }

        impl From<$type> for QuadBitVector {
            fn from(value: $type) -> Self {
                (0..<$type>::BITS)
                    .map(|i| QuadValue::from((value >> i) & 1 == 1))
                    .collect()
            }
        }
    };
}

native_type!(u8);
native_type!(u16);
native_type!(u32);
native_type!(u64);
native_type!(u128);

impl QuadBitVector {
    /// The low `bits` digits as an integer. Positions beyond the width read as zero.
    ///
    /// # Panics
    ///
    /// Panics if any of the low `bits` digits is unknown.
    fn native_word(&self, bits: u32) -> u64 {
        if let Err(err) = check_known(self, bits as usize) {
            panic!("native extraction of {self}: {err}");
        }

        self.iter()
            .take(bits as usize)
            .rev()
            .fold(0u64, |word, &digit| (word << 1) | u64::from(digit == QuadValue::One))
    }

    pub fn as_native_uint8(&self) -> u8 {
        self.native_word(u8::BITS) as u8
    }

    pub fn as_native_uint16(&self) -> u16 {
        self.native_word(u16::BITS) as u16
    }

    pub fn as_native_uint32(&self) -> u32 {
        self.native_word(u32::BITS) as u32
    }

    pub fn as_native_uint64(&self) -> u64 {
        self.native_word(u64::BITS)
    }

    pub fn as_native_int32(&self) -> i32 {
        self.as_native_uint32() as i32
    }

    pub fn as_native_int64(&self) -> i64 {
        self.as_native_uint64() as i64
    }
}
