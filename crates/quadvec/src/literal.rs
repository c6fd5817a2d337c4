//! Sized literals of the form `<width>'<format><digits>`, e.g. `16'hcdef`, `6'b11_zx00` or
//! `8'd200`, and the binary and hexadecimal string forms of a vector.

use std::str::FromStr;

use thiserror::Error;

use crate::digit::QuadValue;
use crate::vec::QuadBitVector;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseLiteralError {
    #[error("literal is missing the ' separating width and format")]
    MissingSeparator,

    #[error("invalid literal width {0:?}")]
    InvalidWidth(String),

    #[error("literal is missing a format character")]
    MissingFormat,

    #[error("unsupported literal format {0:?}")]
    UnsupportedFormat(char),

    #[error("literal has no digits")]
    EmptyDigits,

    #[error("invalid digit {digit:?} for format {format:?}")]
    InvalidDigit { digit: char, format: char },

    #[error("literal value does not fit in {width} bits")]
    Overflow { width: usize },

    #[error("{digits} digits do not fit in {width} bits")]
    TooManyDigits { digits: usize, width: usize },
}

impl FromStr for QuadBitVector {
    type Err = ParseLiteralError;

    fn from_str(literal: &str) -> Result<Self, Self::Err> {
        parse_sized_literal(literal).inspect_err(|err| {
            log::debug!("rejected literal {literal:?}: {err}");
        })
    }
}

fn parse_sized_literal(literal: &str) -> Result<QuadBitVector, ParseLiteralError> {
    let (width, rest) = literal
        .trim()
        .split_once('\'')
        .ok_or(ParseLiteralError::MissingSeparator)?;

    let width = width
        .trim()
        .parse::<usize>()
        .map_err(|_| ParseLiteralError::InvalidWidth(width.to_string()))?;

    let mut chars = rest.chars();
    let format = chars
        .next()
        .ok_or(ParseLiteralError::MissingFormat)?
        .to_ascii_lowercase();
    let digits: Vec<char> = chars.filter(|&c| c != '_').collect();
    if digits.is_empty() {
        return Err(ParseLiteralError::EmptyDigits);
    }

    match format {
        'h' => parse_hex(width, &digits),
        'b' => parse_binary(width, &digits),
        'd' => parse_decimal(width, &digits),
        _ => Err(ParseLiteralError::UnsupportedFormat(format)),
    }
}

/// Each hex digit expands to a nibble, least significant digit first. An `x` or `z` nibble that
/// overhangs the width is truncated; a known nibble must not set bits beyond the width.
fn parse_hex(width: usize, digits: &[char]) -> Result<QuadBitVector, ParseLiteralError> {
    let mut result = QuadBitVector::zeros(width);

    for (nibble, &c) in digits.iter().rev().enumerate() {
        let base = 4 * nibble;
        match c {
            'x' | 'X' | 'z' | 'Z' => {
                let digit = match c {
                    'z' | 'Z' => QuadValue::Z,
                    _ => QuadValue::X,
                };
                for position in (base..base + 4).take_while(|&p| p < width) {
                    result.set(position, digit);
                }
            }
            _ => {
                let value = c
                    .to_digit(16)
                    .ok_or(ParseLiteralError::InvalidDigit { digit: c, format: 'h' })?;
                for bit in 0..4 {
                    let set = (value >> bit) & 1 == 1;
                    let position = base + bit;
                    if position < width {
                        result.set(position, set.into());
                    } else if set {
                        return Err(ParseLiteralError::Overflow { width });
                    }
                }
            }
        }
    }

    Ok(result)
}

fn parse_binary(width: usize, digits: &[char]) -> Result<QuadBitVector, ParseLiteralError> {
    let mut result = QuadBitVector::zeros(width);

    for (position, &c) in digits.iter().rev().enumerate() {
        let digit = QuadValue::from_char(c)
            .map_err(|_| ParseLiteralError::InvalidDigit { digit: c, format: 'b' })?;
        if position < width {
            result.set(position, digit);
        } else if digit != QuadValue::Zero {
            return Err(ParseLiteralError::Overflow { width });
        }
    }

    Ok(result)
}

/// Accumulates `value * 10 + digit` over the bits of the vector, least significant bit first.
fn parse_decimal(width: usize, digits: &[char]) -> Result<QuadBitVector, ParseLiteralError> {
    let mut bits = vec![false; width];

    for &c in digits {
        let mut carry = c
            .to_digit(10)
            .ok_or(ParseLiteralError::InvalidDigit { digit: c, format: 'd' })?;
        for bit in bits.iter_mut() {
            let total = 10 * u32::from(*bit) + carry;
            *bit = total & 1 == 1;
            carry = total >> 1;
        }

        if carry != 0 {
            return Err(ParseLiteralError::Overflow { width });
        }
    }

    Ok(bits.into_iter().map(QuadValue::from).collect())
}

impl QuadBitVector {
    /// The digits of the vector, most significant first.
    pub fn binary_string(&self) -> String {
        self.iter().rev().map(|digit| digit.to_char()).collect()
    }

    /// The sized hex literal of the vector. A nibble holding any `X` digit prints as `x`, else a
    /// nibble holding any `Z` digit prints as `z`.
    pub fn hex_string(&self) -> String {
        let nibbles = self.width().div_ceil(4).max(1);
        let digits: String = (0..nibbles)
            .rev()
            .map(|nibble| {
                let start = 4 * nibble;
                let end = usize::min(start + 4, self.width());
                nibble_char(&self.digits()[start.min(end)..end])
            })
            .collect();

        format!("{width}'h{digits}", width = self.width())
    }
}

fn nibble_char(digits: &[QuadValue]) -> char {
    if digits.contains(&QuadValue::X) {
        return 'x';
    }

    if digits.contains(&QuadValue::Z) {
        return 'z';
    }

    let value = digits
        .iter()
        .enumerate()
        .filter(|(_, digit)| **digit == QuadValue::One)
        .fold(0u32, |value, (i, _)| value | (1 << i));

    char::from_digit(value, 16).unwrap_or('0')
}

impl std::fmt::Display for QuadBitVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.binary_string())
    }
}
