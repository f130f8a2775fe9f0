//! Integer parsing over digits from any script.
//!
//! Each function folds its input to ASCII with [`fold_digits`] and hands the result to
//! the standard library parser. Errors come back exactly as that parser reports them:
//! `Empty` / `InvalidDigit` for malformed numerals, `PosOverflow` / `NegOverflow` when
//! the value does not fit the requested width.

use std::num::ParseIntError;

use serde::Deserialize;
use thiserror::Error;

use crate::transform::fold_digits;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("radix must be between 2 and 36, got {0}")]
pub struct InvalidRadix(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("bit width must be 0, 8, 16, 32, or 64, got {0}")]
pub struct InvalidBitWidth(pub u32);

/// Numeric base accepted by the standard parser (2 through 36).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "u32")]
pub struct Radix(u32);

impl Radix {
    pub const BINARY: Self = Self(2);
    pub const OCTAL: Self = Self(8);
    pub const DECIMAL: Self = Self(10);
    pub const HEXADECIMAL: Self = Self(16);

    pub const fn new(radix: u32) -> Result<Self, InvalidRadix> {
        if radix >= 2 && radix <= 36 {
            Ok(Self(radix))
        } else {
            Err(InvalidRadix(radix))
        }
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for Radix {
    fn default() -> Self {
        Self::DECIMAL
    }
}

impl TryFrom<u32> for Radix {
    type Error = InvalidRadix;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Width of the integer type a parsed value must fit in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "u32")]
pub enum BitWidth {
    Bits8,
    Bits16,
    Bits32,
    #[default]
    Bits64,
}

impl BitWidth {
    /// Width from a bit count. `0` selects the platform's pointer width.
    pub const fn new(bits: u32) -> Result<Self, InvalidBitWidth> {
        match bits {
            8 => Ok(Self::Bits8),
            16 => Ok(Self::Bits16),
            32 => Ok(Self::Bits32),
            64 => Ok(Self::Bits64),
            0 if usize::BITS == 32 => Ok(Self::Bits32),
            0 => Ok(Self::Bits64),
            other => Err(InvalidBitWidth(other)),
        }
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Bits8 => 8,
            Self::Bits16 => 16,
            Self::Bits32 => 32,
            Self::Bits64 => 64,
        }
    }
}

impl TryFrom<u32> for BitWidth {
    type Error = InvalidBitWidth;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Parse a base-10 `isize`, accepting digits from any script.
///
/// # Examples
///
/// ```
/// use udigit_types::atoi;
///
/// assert_eq!(atoi("-௦௧௨௩௪௫௬௭௮௯"), Ok(-123_456_789));
/// assert!(atoi("12a").is_err());
/// ```
pub fn atoi(input: &str) -> Result<isize, ParseIntError> {
    fold_digits(input).parse()
}

/// Parse a signed integer that must fit in `width` bits.
pub fn parse_int(input: &str, radix: Radix, width: BitWidth) -> Result<i64, ParseIntError> {
    let folded = fold_digits(input);
    let radix = radix.get();
    match width {
        BitWidth::Bits8 => i8::from_str_radix(&folded, radix).map(i64::from),
        BitWidth::Bits16 => i16::from_str_radix(&folded, radix).map(i64::from),
        BitWidth::Bits32 => i32::from_str_radix(&folded, radix).map(i64::from),
        BitWidth::Bits64 => i64::from_str_radix(&folded, radix),
    }
}

/// Parse an unsigned integer that must fit in `width` bits.
pub fn parse_uint(input: &str, radix: Radix, width: BitWidth) -> Result<u64, ParseIntError> {
    let folded = fold_digits(input);
    let radix = radix.get();
    match width {
        BitWidth::Bits8 => u8::from_str_radix(&folded, radix).map(u64::from),
        BitWidth::Bits16 => u16::from_str_radix(&folded, radix).map(u64::from),
        BitWidth::Bits32 => u32::from_str_radix(&folded, radix).map(u64::from),
        BitWidth::Bits64 => u64::from_str_radix(&folded, radix),
    }
}
