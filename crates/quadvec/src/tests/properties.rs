use proptest::prelude::*;

use crate::kernel::*;
use crate::{QuadBitVector, QuadValue};

fn mask(width: usize) -> u64 {
    u64::MAX >> (64 - width)
}

fn known_digit() -> impl Strategy<Value = QuadValue> {
    prop_oneof![Just(QuadValue::Zero), Just(QuadValue::One)]
}

fn any_digit() -> impl Strategy<Value = QuadValue> {
    prop_oneof![
        Just(QuadValue::Zero),
        Just(QuadValue::One),
        Just(QuadValue::X),
        Just(QuadValue::Z)
    ]
}

/// Vectors whose nibbles are either fully known or uniformly `X` or `Z`.
fn uniform_nibble_vector() -> impl Strategy<Value = QuadBitVector> {
    let nibble = prop_oneof![
        4 => proptest::collection::vec(known_digit(), 4),
        1 => Just(vec![QuadValue::X; 4]),
        1 => Just(vec![QuadValue::Z; 4]),
    ];

    (proptest::collection::vec(nibble, 1..20), 0usize..4).prop_map(|(nibbles, trim)| {
        let mut digits: Vec<QuadValue> = nibbles.into_iter().flatten().collect();
        let width = digits.len() - trim;
        digits.truncate(width);
        QuadBitVector::from_digits(digits)
    })
}

proptest! {
    #[test]
    fn add_matches_native(width in 1usize..=64, x in any::<u64>(), y in any::<u64>()) {
        let sum = add_general_width_bv(
            &QuadBitVector::from_u64(width, x),
            &QuadBitVector::from_u64(width, y),
        );
        prop_assert_eq!(sum.as_native_uint64(), x.wrapping_add(y) & mask(width));
    }

    #[test]
    fn sub_matches_native(width in 1usize..=64, x in any::<u64>(), y in any::<u64>()) {
        let difference = sub_general_width_bv(
            &QuadBitVector::from_u64(width, x),
            &QuadBitVector::from_u64(width, y),
        );
        prop_assert_eq!(difference.as_native_uint64(), x.wrapping_sub(y) & mask(width));
    }

    #[test]
    fn mul_matches_native(width in 1usize..=64, x in any::<u64>(), y in any::<u64>()) {
        let product = mul_general_width_bv(
            &QuadBitVector::from_u64(width, x),
            &QuadBitVector::from_u64(width, y),
        );
        prop_assert_eq!(product.as_native_uint64(), x.wrapping_mul(y) & mask(width));
    }

    #[test]
    fn self_subtraction_is_zero(digits in proptest::collection::vec(known_digit(), 0..200)) {
        let value = QuadBitVector::from_digits(digits);
        prop_assert_eq!(
            sub_general_width_bv(&value, &value),
            QuadBitVector::zeros(value.width())
        );
    }

    #[test]
    fn negate_is_invert_plus_one(digits in proptest::collection::vec(known_digit(), 1..200)) {
        let value = QuadBitVector::from_digits(digits);
        let one = QuadBitVector::from_u64(value.width(), 1);
        prop_assert_eq!(
            negate_general_width_bv(&value),
            add_general_width_bv(&lnot(&value), &one)
        );
    }

    #[test]
    fn hex_round_trip(value in uniform_nibble_vector()) {
        let text = value.hex_string();
        let parsed: QuadBitVector = text.parse().expect("hex string should parse");
        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn binary_round_trip(digits in proptest::collection::vec(any_digit(), 0..100)) {
        let value = QuadBitVector::from_digits(digits);
        let parsed = QuadBitVector::parse_binary(&value.binary_string());
        prop_assert_eq!(parsed, Ok(value));
    }

    #[test]
    fn unknown_operand_digit_yields_unknown_result(
        digits in proptest::collection::vec(known_digit(), 1..64),
        index in any::<prop::sample::Index>(),
    ) {
        let known = QuadBitVector::from_digits(digits);
        let position = index.index(known.width());
        let mut unknown = known.clone();
        unknown.set(position, QuadValue::X);

        prop_assert_eq!(lxor(&known, &unknown).get(position), QuadValue::X);
        prop_assert_eq!(lnot(&unknown).get(position), QuadValue::X);
        prop_assert_eq!(add_general_width_bv(&known, &unknown).get(position), QuadValue::X);
        prop_assert_eq!(sub_general_width_bv(&known, &unknown).get(position), QuadValue::X);
        prop_assert_eq!(mul_general_width_bv(&known, &unknown).get(position), QuadValue::X);

        // Dominance of 0 over AND and 1 over OR
        let zeros = QuadBitVector::zeros(known.width());
        let ones = QuadBitVector::ones(known.width());
        prop_assert_eq!(land(&zeros, &unknown).get(position), QuadValue::Zero);
        prop_assert_eq!(lor(&ones, &unknown).get(position), QuadValue::One);
        prop_assert_eq!(land(&ones, &unknown).get(position), QuadValue::X);
        prop_assert_eq!(lor(&zeros, &unknown).get(position), QuadValue::X);
    }

    #[test]
    fn shift_boundaries(
        digits in proptest::collection::vec(known_digit(), 1..100),
        extra in 0u64..100,
    ) {
        let value = QuadBitVector::from_digits(digits);
        let width = value.width();
        let amount = QuadBitVector::from_u64(64, width as u64 + extra);
        let sign = value.msb().unwrap_or_default();

        prop_assert_eq!(lshr(&value, &amount), QuadBitVector::zeros(width));
        prop_assert_eq!(shl(&value, &amount), QuadBitVector::zeros(width));
        prop_assert_eq!(ashr(&value, &amount), QuadBitVector::filled(width, sign));
    }

    #[test]
    fn unsigned_order_matches_native(width in 1usize..=64, x in any::<u64>(), y in any::<u64>()) {
        let (x, y) = (x & mask(width), y & mask(width));
        let lhs = QuadBitVector::from_u64(width, x);
        let rhs = QuadBitVector::from_u64(width, y);
        prop_assert_eq!(crate::gt(&lhs, &rhs), x > y);
        prop_assert_eq!(crate::lt(&lhs, &rhs), x < y);
        prop_assert_eq!(crate::gte(&lhs, &rhs), x >= y);
    }

    #[test]
    fn self_comparison_is_decided_only_when_known(digits in proptest::collection::vec(any_digit(), 0..64)) {
        let value = QuadBitVector::from_digits(digits);
        let expected = value.is_fully_known().then_some(std::cmp::Ordering::Equal);
        prop_assert_eq!(crate::compare_unsigned(&value, &value), expected);
        prop_assert_eq!(crate::compare_signed(&value, &value), expected);
    }

    #[test]
    fn signed_order_matches_native(x in any::<i64>(), y in any::<i64>()) {
        let lhs = QuadBitVector::from_i64(64, x);
        let rhs = QuadBitVector::from_i64(64, y);
        prop_assert_eq!(crate::signed_gt(&lhs, &rhs), x > y);
        prop_assert_eq!(crate::signed_gte(&lhs, &rhs), x >= y);
        prop_assert_eq!(crate::signed_lt(&lhs, &rhs), x < y);
    }
}
