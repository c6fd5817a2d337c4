mod common;

use bitsim::kernel::*;
use bitsim::{QuadBitVector, QuadValue, SignedInt, signed_gt};
use common::{bv, dbv, literal};

#[test]
fn add_odd_width() {
    assert_eq!(add_general_width_bv(&dbv(33, 10), &dbv(33, 23)), dbv(33, 33));
}

#[test]
fn shift_left_by_vector() {
    assert_eq!(
        shl(&bv(9, "001010110"), &bv(3, "101")),
        bv(9, "011000000")
    );
}

#[test]
fn negate_matches_native() {
    let negated = negate_general_width_bv(&dbv(32, 347));
    assert_eq!(negated, QuadBitVector::from_i64(32, -347));
    assert_eq!(negated.as_native_int32(), -347);
}

#[test]
fn signed_greater_than() {
    assert!(signed_gt(&bv(6, "100100"), &bv(6, "100000")));
    assert!(signed_gt(&bv(11, "00000000000"), &bv(11, "10001010101")));
    assert!(!signed_gt(&bv(11, "10001010101"), &bv(11, "00000000000")));
}

#[test]
fn unknown_subtraction() {
    assert_eq!(
        sub_general_width_bv(&bv(4, "1xx1"), &bv(4, "1100")),
        QuadBitVector::unknown(4)
    );
}

#[test]
fn unknown_multiplication() {
    let product = mul_general_width_bv(&literal("32'hxx0fx1b3"), &literal("32'h11934891"));
    assert_eq!(product.hex_string(), "32'hxxxxxxxx");
}

#[test]
fn literal_round_trip_through_typed_int() {
    let value: SignedInt = "16'hfffb".parse().expect("invalid literal");
    assert_eq!(value.to_i64(), Ok(-5));
    assert_eq!(value.bits().hex_string(), "16'hfffb");
}

#[test]
fn reductions_with_unknowns() {
    assert_eq!(andr(&bv(4, "10x1")), QuadValue::Zero);
    assert_eq!(andr(&bv(4, "11x1")), QuadValue::X);
    assert_eq!(orr(&bv(4, "00z1")), QuadValue::One);
    assert_eq!(orr(&bv(4, "00z0")), QuadValue::X);
    assert_eq!(xorr(&bv(4, "0111")), QuadValue::One);
    assert_eq!(xorr(&bv(4, "0x11")), QuadValue::X);
}
