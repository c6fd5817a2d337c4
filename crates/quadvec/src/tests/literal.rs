use super::{bv, dbv, literal};
use crate::{ParseLiteralError, QuadBitVector, QuadValue};

fn parse_err(literal: &str) -> ParseLiteralError {
    literal
        .parse::<QuadBitVector>()
        .expect_err("literal should be rejected")
}

#[test]
fn hex_literals() {
    assert_eq!(literal("5'h3"), bv(5, "00011"));
    assert_eq!(literal("8'hab"), dbv(8, 0xab));
    assert_eq!(literal("16'hcdef"), bv(16, "1100_1101_1110_1111"));
    assert_eq!(literal("5'h18"), bv(5, "1_1000"));
    assert_eq!(literal("8'hAB"), literal("8'hab"));
    assert_eq!(literal("32'hdead_beef"), dbv(32, 0xdead_beef));
}

#[test]
fn hex_literal_sets_width() {
    let value = literal("37'h14a936d4c0");
    assert_eq!(value.width(), 37);
    assert_eq!(value, dbv(37, 0x14a936d4c0));
}

#[test]
fn hex_unknown_nibbles() {
    assert_eq!(literal("4'hX"), QuadBitVector::unknown(4));
    assert_eq!(literal("8'hz3"), bv(8, "zzzz_0011"));
    assert_eq!(literal("8'hZx"), bv(8, "zzzz_xxxx"));

    // An unknown nibble overhanging the width is truncated
    assert_eq!(literal("6'hxf"), bv(6, "xx1111"));
}

#[test]
fn hex_round_trip() {
    for text in ["5'h08", "32'ha936d4c0", "32'ha9x6dzc0", "37'h14a936d4c0"] {
        assert_eq!(literal(text).hex_string(), text);
    }
}

#[test]
fn hex_reparse() {
    let value = literal("39'h1ca236f4c0");
    assert_eq!(literal(&value.hex_string()), value);
    assert_eq!(value.hex_string(), "39'h1ca236f4c0");
}

#[test]
fn hex_string_of_uniform_unknown_nibble() {
    assert_eq!(bv(5, "1zzzz").hex_string(), "5'h1z");
    assert_eq!(bv(8, "xxxx_0001").hex_string(), "8'hx1");
}

#[test]
fn hex_string_of_mixed_nibble() {
    assert_eq!(bv(8, "10x1_0z01").hex_string(), "8'hxz");
    assert_eq!(bv(4, "zx00").hex_string(), "4'hx");
}

#[test]
fn zero_width_literal() {
    let empty = QuadBitVector::new(0);
    assert_eq!(empty.hex_string(), "0'h0");
    assert_eq!(literal(&empty.hex_string()), empty);
    assert_eq!(literal("0'b0"), empty);
    assert_eq!(literal("0'hx"), empty);
    assert_eq!(parse_err("0'h1"), ParseLiteralError::Overflow { width: 0 });
}

#[test]
fn hex_string_pads_with_zeros() {
    assert_eq!(dbv(12, 0x3).hex_string(), "12'h003");
    assert_eq!(literal("5'h3").hex_string(), "5'h03");
}

#[test]
fn binary_literals() {
    assert_eq!(literal("6'b11_zx00"), bv(6, "11zx00"));
    assert_eq!(literal("4'b001"), bv(4, "0001"));
    assert_eq!(literal("4'B1X0Z"), bv(4, "1x0z"));
}

#[test]
fn decimal_literals() {
    assert_eq!(literal("8'd200"), dbv(8, 200));
    assert_eq!(literal("33'd33"), dbv(33, 33));
    assert_eq!(literal("64'd18446744073709551615"), dbv(64, u64::MAX));

    let value = literal("71'd1180591620717411303424");
    assert_eq!(value.get(70), QuadValue::One);
    assert!(value.iter().take(70).all(|&digit| digit == QuadValue::Zero));
}

#[test]
fn binary_string() {
    assert_eq!(bv(6, "11zxx0").binary_string(), "11zxx0");
    assert_eq!(bv(6, "11zxx0").to_string(), "11zxx0");
    assert_eq!(dbv(4, 0b0101).binary_string(), "0101");
}

#[test]
fn binary_string_construction() {
    assert_eq!(QuadBitVector::parse_binary("1_0x"), Ok(bv(3, "10x")));
    assert_eq!(
        QuadBitVector::from_binary(4, "10101"),
        Err(ParseLiteralError::TooManyDigits {
            digits: 5,
            width: 4
        })
    );
    assert_eq!(
        QuadBitVector::from_binary(4, "102"),
        Err(ParseLiteralError::InvalidDigit {
            digit: '2',
            format: 'b'
        })
    );
}

#[test]
fn overflow() {
    assert_eq!(parse_err("5'h28"), ParseLiteralError::Overflow { width: 5 });
    assert_eq!(parse_err("3'b1010"), ParseLiteralError::Overflow { width: 3 });
    assert_eq!(parse_err("8'd256"), ParseLiteralError::Overflow { width: 8 });
    assert_eq!(
        parse_err("70'd1180591620717411303424"),
        ParseLiteralError::Overflow { width: 70 }
    );
}

#[test]
fn malformed_literals() {
    assert_eq!(parse_err("16hcdef"), ParseLiteralError::MissingSeparator);
    assert_eq!(
        parse_err("'h0"),
        ParseLiteralError::InvalidWidth(String::new())
    );
    assert_eq!(
        parse_err("x'h0"),
        ParseLiteralError::InvalidWidth("x".to_string())
    );
    assert_eq!(parse_err("8'"), ParseLiteralError::MissingFormat);
    assert_eq!(parse_err("8'h"), ParseLiteralError::EmptyDigits);
    assert_eq!(parse_err("8'h__"), ParseLiteralError::EmptyDigits);
    assert_eq!(parse_err("8'q12"), ParseLiteralError::UnsupportedFormat('q'));
    assert_eq!(
        parse_err("8'hg1"),
        ParseLiteralError::InvalidDigit {
            digit: 'g',
            format: 'h'
        }
    );
    assert_eq!(
        parse_err("8'd1x"),
        ParseLiteralError::InvalidDigit {
            digit: 'x',
            format: 'd'
        }
    );
}
