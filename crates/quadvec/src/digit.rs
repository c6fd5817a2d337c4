use std::cmp::Ordering;

use thiserror::Error;

/// A single four-valued logic digit.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum QuadValue {
    /// Logic low.
    #[default]
    Zero,

    /// Logic high.
    One,

    /// An unknown value.
    X,

    /// High impedance. An undriven signal behaves as an unknown value in logic operations.
    Z,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigitError {
    #[error("invalid digit code {0}")]
    InvalidCode(u8),

    #[error("invalid digit character {0:?}")]
    InvalidChar(char),

    #[error("digit {0} has no boolean value")]
    Unknown(QuadValue),
}

impl QuadValue {
    /// Creates a digit from its 2-bit code: 0 and 1 are the known values, 2 is `X` and 3 is `Z`.
    pub fn from_code(code: u8) -> Result<Self, DigitError> {
        match code {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            2 => Ok(Self::X),
            3 => Ok(Self::Z),
            _ => Err(DigitError::InvalidCode(code)),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::X => 2,
            Self::Z => 3,
        }
    }

    /// Creates a digit from one of the characters `0`, `1`, `x` or `z`. Upper-case `X` and `Z` are
    /// accepted as well.
    pub fn from_char(c: char) -> Result<Self, DigitError> {
        match c {
            '0' => Ok(Self::Zero),
            '1' => Ok(Self::One),
            'x' | 'X' => Ok(Self::X),
            'z' | 'Z' => Ok(Self::Z),
            _ => Err(DigitError::InvalidChar(c)),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
            Self::X => 'x',
            Self::Z => 'z',
        }
    }

    pub fn is_known(self) -> bool {
        matches!(self, Self::Zero | Self::One)
    }

    pub fn is_unknown(self) -> bool {
        !self.is_known()
    }

    pub fn to_bool(self) -> Option<bool> {
        match self {
            Self::Zero => Some(false),
            Self::One => Some(true),
            Self::X | Self::Z => None,
        }
    }

    /// Full adder over known digits. Returns `(sum, carry_out)`.
    ///
    /// # Panics
    ///
    /// Panics if any input is `X` or `Z`. Unknown digits in arithmetic are handled by the kernel.
    pub fn plus(self, rhs: Self, carry: Self) -> (Self, Self) {
        let (Some(lhs_bit), Some(rhs_bit), Some(carry_bit)) =
            (self.to_bool(), rhs.to_bool(), carry.to_bool())
        else {
            panic!("arithmetic on unknown digits: {self} + {rhs} + {carry}");
        };

        let total = u8::from(lhs_bit) + u8::from(rhs_bit) + u8::from(carry_bit);
        ((total & 1 == 1).into(), (total >= 2).into())
    }
}

impl std::fmt::Display for QuadValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl From<bool> for QuadValue {
    fn from(value: bool) -> Self {
        if value { Self::One } else { Self::Zero }
    }
}

impl TryFrom<QuadValue> for bool {
    type Error = DigitError;

    fn try_from(value: QuadValue) -> Result<Self, Self::Error> {
        value.to_bool().ok_or(DigitError::Unknown(value))
    }
}

impl TryFrom<char> for QuadValue {
    type Error = DigitError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::from_char(value)
    }
}

/// Known digits are ordered `0 < 1`. An unknown digit is only comparable with an identical digit.
impl PartialOrd for QuadValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (lhs, rhs) if lhs == rhs => Some(Ordering::Equal),
            (Self::Zero, Self::One) => Some(Ordering::Less),
            (Self::One, Self::Zero) => Some(Ordering::Greater),
            _ => None,
        }
    }
}

impl std::ops::Not for QuadValue {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::Zero => Self::One,
            Self::One => Self::Zero,
            Self::X | Self::Z => Self::X,
        }
    }
}

impl std::ops::BitAnd for QuadValue {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Zero, _) | (_, Self::Zero) => Self::Zero,
            (Self::One, Self::One) => Self::One,
            _ => Self::X,
        }
    }
}

impl std::ops::BitOr for QuadValue {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::One, _) | (_, Self::One) => Self::One,
            (Self::Zero, Self::Zero) => Self::Zero,
            _ => Self::X,
        }
    }
}

impl std::ops::BitXor for QuadValue {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        match (self.to_bool(), rhs.to_bool()) {
            (Some(lhs), Some(rhs)) => (lhs ^ rhs).into(),
            _ => Self::X,
        }
    }
}

impl std::ops::BitAndAssign for QuadValue {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl std::ops::BitOrAssign for QuadValue {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl std::ops::BitXorAssign for QuadValue {
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}
