use super::QuadBitVector;
use crate::digit::QuadValue;
use crate::kernel;

impl std::ops::Index<usize> for QuadBitVector {
    type Output = QuadValue;

    fn index(&self, index: usize) -> &Self::Output {
        &self.digits[index]
    }
}

impl std::ops::IndexMut<usize> for QuadBitVector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.digits[index]
    }
}

/// Implements a binary operator for every combination of owned and borrowed operands in terms of a
/// kernel function over borrowed vectors.
macro_rules! binary_op {
    ($trait:ident, $method:ident, $kernel:path) => {
        impl std::ops::$trait for QuadBitVector {
            type Output = QuadBitVector;

            fn $method(self, rhs: Self) -> Self::Output {
                $kernel(&self, &rhs)
            }
        }

        impl std::ops::$trait<&QuadBitVector> for QuadBitVector {
            type Output = QuadBitVector;

            fn $method(self, rhs: &QuadBitVector) -> Self::Output {
                $kernel(&self, rhs)
            }
        }

        impl std::ops::$trait for &QuadBitVector {
            type Output = QuadBitVector;

            fn $method(self, rhs: Self) -> Self::Output {
                $kernel(self, rhs)
            }
        }
    };
}

binary_op!(BitAnd, bitand, kernel::land);
binary_op!(BitOr, bitor, kernel::lor);
binary_op!(BitXor, bitxor, kernel::lxor);
binary_op!(Add, add, kernel::add_general_width_bv);
binary_op!(Sub, sub, kernel::sub_general_width_bv);
binary_op!(Mul, mul, kernel::mul_general_width_bv);

impl std::ops::Not for QuadBitVector {
    type Output = Self;

    fn not(self) -> Self::Output {
        kernel::lnot(&self)
    }
}

impl std::ops::Not for &QuadBitVector {
    type Output = QuadBitVector;

    fn not(self) -> Self::Output {
        kernel::lnot(self)
    }
}

impl std::ops::Neg for QuadBitVector {
    type Output = Self;

    fn neg(self) -> Self::Output {
        kernel::negate_general_width_bv(&self)
    }
}

impl std::ops::Neg for &QuadBitVector {
    type Output = QuadBitVector;

    fn neg(self) -> Self::Output {
        kernel::negate_general_width_bv(self)
    }
}

impl std::ops::Shl<usize> for QuadBitVector {
    type Output = Self;

    fn shl(self, rhs: usize) -> Self::Output {
        kernel::shl_by(&self, rhs)
    }
}

impl std::ops::Shl for QuadBitVector {
    type Output = Self;

    fn shl(self, rhs: Self) -> Self::Output {
        kernel::shl(&self, &rhs)
    }
}

/// Performs a _logical_ right shift.
impl std::ops::Shr<usize> for QuadBitVector {
    type Output = Self;

    fn shr(self, rhs: usize) -> Self::Output {
        kernel::lshr_by(&self, rhs)
    }
}

/// Performs a _logical_ right shift.
impl std::ops::Shr for QuadBitVector {
    type Output = Self;

    fn shr(self, rhs: Self) -> Self::Output {
        kernel::lshr(&self, &rhs)
    }
}

impl std::ops::ShlAssign<usize> for QuadBitVector {
    fn shl_assign(&mut self, rhs: usize) {
        *self = kernel::shl_by(self, rhs);
    }
}

impl std::ops::ShrAssign<usize> for QuadBitVector {
    fn shr_assign(&mut self, rhs: usize) {
        *self = kernel::lshr_by(self, rhs);
    }
}
