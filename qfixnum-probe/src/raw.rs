use qfixnum::{Q15, Q16, Q32, Q1516, Q1616, QFormat};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RawError {
    #[error("{0:?} is not a number, expected decimal or a 0x / 0b prefix")]
    InvalidNumber(String),
    #[error("{value} does not fit in the {bits} bits of {format}")]
    OutOfRange {
        value: i64,
        bits: u32,
        format: &'static str,
    },
}

/// Parses a raw integer written in decimal, hexadecimal (`0x`) or binary
/// (`0b`), with an optional leading minus sign and `_` separators.
pub fn parse_raw(input: &str) -> Result<i64, RawError> {
    let invalid = || RawError::InvalidNumber(input.to_owned());

    let cleaned = input.trim().replace('_', "");
    let (negative, digits) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };

    let (radix, digits) = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        (16, hex)
    } else if let Some(bin) = digits
        .strip_prefix("0b")
        .or_else(|| digits.strip_prefix("0B"))
    {
        (2, bin)
    } else {
        (10, digits)
    };

    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(invalid());
    }

    let magnitude = i64::from_str_radix(digits, radix).map_err(|_| invalid())?;

    Ok(if negative { -magnitude } else { magnitude })
}

/// A value that can be built from a raw command line operand.
pub trait Operand: Sized {
    const FORMAT: &'static str;
    const BITS: u32;

    /// Accepts both the signed and unsigned reading of the bit pattern, so
    /// `-1` and `0xFFFF` are the same 16 bit operand.
    fn from_operand(value: i64) -> Result<Self, RawError> {
        let lowest = -(1_i64 << (Self::BITS - 1));
        let highest = (1_i64 << Self::BITS) - 1;

        if value < lowest || value > highest {
            return Err(RawError::OutOfRange {
                value,
                bits: Self::BITS,
                format: Self::FORMAT,
            });
        }

        Ok(Self::from_bits(value))
    }

    fn from_bits(value: i64) -> Self;
}

macro_rules! q_operand {
    ($name:ident, $bits:literal) => {
        impl Operand for $name {
            const FORMAT: &'static str = <$name as QFormat>::NAME;
            const BITS: u32 = $bits;

            fn from_bits(value: i64) -> Self {
                <$name as QFormat>::from_wide_wrapping(value)
            }
        }
    };
}

q_operand!(Q15, 16);
q_operand!(Q16, 16);
q_operand!(Q32, 32);
q_operand!(Q1616, 32);
q_operand!(Q1516, 32);

impl Operand for u16 {
    const FORMAT: &'static str = "u16";
    const BITS: u32 = 16;

    fn from_bits(value: i64) -> Self {
        value as u16
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn should_parse_all_radixes() -> Result<(), RawError> {
        assert_eq!(parse_raw("1234")?, 1234);
        assert_eq!(parse_raw("-1234")?, -1234);
        assert_eq!(parse_raw("0x7fff")?, 0x7FFF);
        assert_eq!(parse_raw("0XFFFF")?, 0xFFFF);
        assert_eq!(parse_raw("-0x8000")?, -0x8000);
        assert_eq!(parse_raw("0b1010")?, 10);
        assert_eq!(parse_raw("0x0001_8000")?, 0x0001_8000);
        assert_eq!(parse_raw(" 42 ")?, 42);

        Ok(())
    }

    #[test]
    fn should_reject_garbage() {
        for input in ["", "-", "0x", "12ab", "0xfg", "--1", "-+1", "0x-1", "1.5"] {
            assert_eq!(
                parse_raw(input),
                Err(RawError::InvalidNumber(input.to_owned())),
                "{input:?}"
            );
        }
    }

    #[test]
    fn should_accept_signed_and_unsigned_bit_patterns() -> Result<(), RawError> {
        assert_eq!(Q15::from_operand(-1)?, Q15::from_raw(-1));
        assert_eq!(Q15::from_operand(0xFFFF)?, Q15::from_raw(-1));
        assert_eq!(Q15::from_operand(0x8000)?, Q15::MIN);
        assert_eq!(Q16::from_operand(-1)?, Q16::MAX);
        assert_eq!(Q1516::from_operand(0xFFFF_0000)?, Q1516::from_raw(-0x1_0000));
        assert_eq!(Q32::from_operand(0xFFFF_FFFF)?, Q32::MAX);
        assert_eq!(u16::from_operand(0xFFFF)?, u16::MAX);

        Ok(())
    }

    #[test]
    fn should_reject_operands_wider_than_the_format() {
        assert_eq!(
            Q15::from_operand(0x1_0000),
            Err(RawError::OutOfRange {
                value: 0x1_0000,
                bits: 16,
                format: "Q0.15"
            })
        );
        assert!(Q15::from_operand(-0x8001).is_err());
        assert!(Q1616::from_operand(0x1_0000_0000).is_err());
        assert!(u16::from_operand(70000).is_err());
    }
}
