use super::QuadBitVector;
use crate::digit::QuadValue;

impl IntoIterator for QuadBitVector {
    type Item = QuadValue;
    type IntoIter = std::vec::IntoIter<QuadValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.digits.into_iter()
    }
}

impl<'a> IntoIterator for &'a QuadBitVector {
    type Item = &'a QuadValue;
    type IntoIter = std::slice::Iter<'a, QuadValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.digits.iter()
    }
}

impl FromIterator<QuadValue> for QuadBitVector {
    fn from_iter<T: IntoIterator<Item = QuadValue>>(iter: T) -> Self {
        Self {
            digits: iter.into_iter().collect(),
        }
    }
}

impl From<QuadValue> for QuadBitVector {
    fn from(value: QuadValue) -> Self {
        std::iter::once(value).collect()
    }
}

impl From<Vec<QuadValue>> for QuadBitVector {
    fn from(digits: Vec<QuadValue>) -> Self {
        Self { digits }
    }
}
