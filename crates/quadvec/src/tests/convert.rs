use super::{bv, dbv};
use crate::{ConversionError, QuadBitVector, QuadValue};

#[test]
fn native_extraction_truncates() {
    let value = dbv(65, 3);
    assert_eq!(value.as_native_uint8(), 3);
    assert_eq!(value.as_native_uint16(), 3);
    assert_eq!(value.as_native_uint32(), 3);
    assert_eq!(value.as_native_uint64(), 3);

    let value = dbv(16, 0xABCD);
    assert_eq!(value.as_native_uint8(), 0xCD);
    assert_eq!(value.as_native_uint64(), 0xABCD);
}

#[test]
fn signed_native_extraction() {
    assert_eq!(QuadBitVector::from_i64(32, -347).as_native_int32(), -347);
    assert_eq!(QuadBitVector::from_i64(64, i64::MIN).as_native_int64(), i64::MIN);
}

#[test]
fn unknown_beyond_native_width_is_ignored() {
    let mut value = dbv(16, 0x42);
    value.set(12, QuadValue::X);
    assert_eq!(value.as_native_uint8(), 0x42);
}

#[test]
#[should_panic(expected = "unknown digit at index 2")]
fn native_extraction_of_unknown() {
    bv(8, "0000_0x00").as_native_uint8();
}

#[test]
fn try_from_unknown() {
    let value = bv(8, "1x00_0000");
    assert_eq!(
        u8::try_from(&value),
        Err(ConversionError::UnknownDigit { index: 6 })
    );
}

#[test]
fn try_from_overflow() {
    assert_eq!(
        u8::try_from(dbv(9, 256)),
        Err(ConversionError::Overflow { max_bits: 8 })
    );

    // Leading zeros do not overflow
    assert_eq!(u8::try_from(dbv(70, 255)), Ok(255));
}

#[test]
fn native_round_trip() {
    let value = QuadBitVector::from(0xDEADBEEFu32);
    assert_eq!(value.width(), 32);
    assert_eq!(u32::try_from(&value), Ok(0xDEADBEEF));

    let value = QuadBitVector::from(u128::MAX);
    assert_eq!(value.width(), 128);
    assert_eq!(u128::try_from(value), Ok(u128::MAX));
}

#[test]
fn from_integer_beyond_64_bits() {
    let value = QuadBitVector::from_u64(70, u64::MAX);
    assert!(value.iter().take(64).all(|&digit| digit == QuadValue::One));
    assert!(value.iter().skip(64).all(|&digit| digit == QuadValue::Zero));

    assert_eq!(QuadBitVector::from_i64(70, -1), QuadBitVector::ones(70));
    assert_eq!(QuadBitVector::from_i64(70, 5), dbv(70, 5));
}

#[test]
fn accessors() {
    let mut value = bv(4, "z010");
    assert_eq!(value.msb(), Some(QuadValue::Z));
    assert_eq!(value.lsb(), Some(QuadValue::Zero));
    assert!(value.has_unknown());

    value.set(3, QuadValue::One);
    assert!(value.is_fully_known());
    assert_eq!(value[3], QuadValue::One);

    for digit in value.iter_mut() {
        *digit = !*digit;
    }
    assert_eq!(value, bv(4, "0101"));
    assert_eq!(QuadBitVector::new(0).msb(), None);
}
