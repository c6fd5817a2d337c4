use crate::kernel::add_general_width_bv;
use crate::{ConversionError, QuadBitVector, SignedInt, UnsignedInt};

fn unsigned(literal: &str) -> UnsignedInt {
    literal.parse().expect("invalid literal")
}

#[test]
fn native_width_arithmetic() {
    let x = UnsignedInt::from_u64(32, 347);
    let y = UnsignedInt::from_u64(32, 10);
    assert_eq!((&x + &y).to_u64(), Ok(357));
    assert_eq!((&x - &y).to_u64(), Ok(337));
    assert_eq!((&x * &y).to_u64(), Ok(3470));
    assert_eq!((&y - &x).to_u64(), Ok(10u32.wrapping_sub(347) as u64));
}

#[test]
fn general_width_arithmetic() {
    let x = SignedInt::from_i64(20, -7);
    let y = SignedInt::from_i64(20, 3);
    assert_eq!((&x * &y).to_i64(), Ok(-21));
    assert_eq!((&x + &y).to_i64(), Ok(-4));
    assert_eq!((x - y).to_i64(), Ok(-10));
}

#[test]
fn unknown_operands_use_kernel() {
    let x = unsigned("8'hx1");
    let y = UnsignedInt::from_u64(8, 1);
    let sum = &x + &y;
    assert_eq!(sum.bits().hex_string(), "8'hx2");
    assert_eq!(sum.into_bits(), add_general_width_bv(x.bits(), y.bits()));
}

#[test]
fn negation() {
    let value = -SignedInt::from_i64(32, 347);
    assert_eq!(value, SignedInt::from_i64(32, -347));
    assert_eq!(value.bits().as_native_int32(), -347);
    assert_eq!((-SignedInt::from_i64(12, 5)).to_i64(), Ok(-5));
}

#[test]
fn bitwise() {
    let x = UnsignedInt::from_u64(16, 0x00ff);
    let y = UnsignedInt::from_u64(16, 0x0ff0);
    assert_eq!((&x & &y).to_u64(), Ok(0x00f0));
    assert_eq!((&x | &y).to_u64(), Ok(0x0fff));
    assert_eq!((&x ^ &y).to_u64(), Ok(0x0f0f));
    assert_eq!((!x).to_u64(), Ok(0xff00));

    assert_eq!((!unsigned("4'b1x0z")).to_string(), "0x1x");
}

#[test]
fn shifts() {
    assert_eq!((UnsignedInt::from_u64(8, 0x80) >> 7).to_u64(), Ok(1));
    assert_eq!((SignedInt::from_i64(8, -128) >> 7).to_i64(), Ok(-1));
    assert_eq!((SignedInt::from_i64(12, -8) >> 2).to_i64(), Ok(-2));
    assert_eq!((UnsignedInt::from_u64(12, 0x800) >> 2).to_u64(), Ok(0x200));
    assert_eq!((UnsignedInt::from_u64(8, 0x81) << 1).to_u64(), Ok(0x02));
    assert_eq!((UnsignedInt::from_u64(8, 0xff) << 8).to_u64(), Ok(0));
    assert_eq!((SignedInt::from_i64(8, -2) >> 100).to_i64(), Ok(-1));
}

#[test]
fn ordering() {
    assert!(UnsignedInt::from_u64(8, 0x80) > UnsignedInt::from_u64(8, 1));
    assert!(SignedInt::from_i64(8, -128) < SignedInt::from_i64(8, 1));
    assert!(SignedInt::from_i64(70, -2) < SignedInt::from_i64(70, -1));

    let unknown = unsigned("8'hx0");
    assert_eq!(
        unknown.partial_cmp(&UnsignedInt::from_u64(8, 0x10)),
        None
    );
}

#[test]
fn ordering_with_unknown_digits() {
    let x = unsigned("4'bx000");
    assert_eq!(x.partial_cmp(&x), None);
    assert_eq!(unsigned("2'bx1").partial_cmp(&unsigned("2'bx0")), None);
    assert!(unsigned("2'b1x") > unsigned("2'b0x"));

    let signed = |literal: &str| literal.parse::<SignedInt>().expect("invalid literal");
    assert_eq!(signed("3'bx01").partial_cmp(&signed("3'bx00")), None);
    assert_eq!(signed("3'b0x1").partial_cmp(&signed("3'b0x0")), None);
    assert!(signed("3'b0xx") > signed("3'b1xx"));
}

#[test]
fn literals() {
    let value = unsigned("16'hcdef");
    assert_eq!(value.width(), 16);
    assert_eq!(value.to_u64(), Ok(0xcdef));
    assert_eq!(unsigned("4'b1x0z").to_string(), "1x0z");
    assert!("16hcdef".parse::<UnsignedInt>().is_err());
}

#[test]
fn native_readback() {
    assert_eq!(
        unsigned("8'hx0").to_u64(),
        Err(ConversionError::UnknownDigit { index: 4 })
    );
    assert_eq!(SignedInt::from_i64(100, -5).to_i64(), Ok(-5));
    assert_eq!(SignedInt::from_i64(100, i64::MIN).to_i64(), Ok(i64::MIN));

    let wide = SignedInt::from_bits(QuadBitVector::from_u64(100, 5) << 70usize);
    assert_eq!(
        wide.to_i64(),
        Err(ConversionError::Overflow { max_bits: 64 })
    );
    assert_eq!(SignedInt::new(0).to_i64(), Ok(0));
}
