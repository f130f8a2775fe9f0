//! Constant-time decimal digit classification.
//!
//! Every decimal digit decade (`Nd`, ten consecutive codepoints valued 0 through 9) in
//! Unicode starts at a codepoint whose low nibble is either `0x0` or `0x6`. The only
//! exception is the mathematical alphanumeric family, five back-to-back decades at
//! `U+1D7CE..=U+1D7FF`. Classification therefore checks the high bits of a codepoint
//! (and of the codepoint shifted down by six) against two fixed identifier sets and
//! falls back to a single range test for the mathematical block.
//!
//! The identifier sets are pinned to [`UNICODE_VERSION`]. They must be regenerated
//! whenever a new Unicode release adds digit decades; `tests/oracle.rs` compares them
//! against the `Nd` general category for every scalar value.

/// Unicode version the identifier sets below were built for.
pub const UNICODE_VERSION: (u8, u8, u8) = (15, 1, 0);

/// First codepoint of the mathematical digit block (MATHEMATICAL BOLD DIGIT ZERO).
pub(crate) const MATH_LO: u32 = 0x1D7CE;
/// Last codepoint of the mathematical digit block (MATHEMATICAL MONOSPACE DIGIT NINE).
pub(crate) const MATH_HI: u32 = 0x1D7FF;

const MAX_CODEPOINT: u32 = 0x10FFFF;

/// Zero of every decimal digit decade, ascending.
///
/// Listing order only; classification goes through [`codepoint_digit_value`].
pub(crate) const DECADE_ZEROS: [u32; 68] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50,
    0x11D50, 0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2,
    0x1D7EC, 0x1D7F6, 0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Decimal value (0-9) of `cp`, or `None` when `cp` is not a decimal digit.
///
/// Codepoints above `U+10FFFF` and surrogates are never digits.
#[must_use]
pub const fn codepoint_digit_value(cp: u32) -> Option<u8> {
    if cp > MAX_CODEPOINT {
        return None;
    }

    // Decades whose zero ends in 0x0. The nibble bound matters: the other six slots
    // sharing these high bits are letters, signs, or unassigned.
    match cp >> 4 {
        0x0003 | 0x0066 | 0x006F | 0x007C | 0x00E5 | 0x00ED | 0x00F2 | 0x0104 | 0x0109
        | 0x017E | 0x0181 | 0x019D | 0x01A8 | 0x01A9 | 0x01B5 | 0x01BB | 0x01C4 | 0x01C5
        | 0x0A62 | 0x0A8D | 0x0A90 | 0x0A9D | 0x0A9F | 0x0AA5 | 0x0ABF | 0x0FF1 | 0x104A
        | 0x10D3 | 0x110F | 0x111D | 0x112F | 0x1145 | 0x114D | 0x1165 | 0x116C | 0x1173
        | 0x118E | 0x1195 | 0x11C5 | 0x11D5 | 0x11DA | 0x11F5 | 0x16A6 | 0x16AC | 0x16B5
        | 0x1E14 | 0x1E2F | 0x1E4F | 0x1E95 | 0x1FBF => {
            if cp & 0xF <= 9 {
                return Some((cp & 0xF) as u8);
            }
        }
        _ => {}
    }

    // Decades whose zero ends in 0x6.
    if cp >= 6 {
        let shifted = cp - 6;
        match shifted >> 4 {
            0x0096 | 0x009E | 0x00A6 | 0x00AE | 0x00B6 | 0x00BE | 0x00C6 | 0x00CE | 0x00D6
            | 0x00DE | 0x0194 | 0x1106 | 0x1113 => {
                if shifted & 0xF <= 9 {
                    return Some((shifted & 0xF) as u8);
                }
            }
            _ => {}
        }
    }

    if MATH_LO <= cp && cp <= MATH_HI {
        return Some(((cp - MATH_LO) % 10) as u8);
    }

    None
}

/// Decimal value (0-9) of `c`, or `None` when `c` is not a decimal digit.
///
/// # Examples
///
/// ```
/// use udigit_types::digit_value;
///
/// assert_eq!(digit_value('7'), Some(7));
/// assert_eq!(digit_value('\u{0665}'), Some(5)); // ARABIC-INDIC DIGIT FIVE
/// assert_eq!(digit_value('A'), None);
/// ```
#[must_use]
pub const fn digit_value(c: char) -> Option<u8> {
    codepoint_digit_value(c as u32)
}

/// Whether `cp` is a decimal digit in any script. Invalid codepoints are not.
#[must_use]
pub const fn is_codepoint_digit(cp: u32) -> bool {
    codepoint_digit_value(cp).is_some()
}

/// Whether `c` is a decimal digit in any script.
#[must_use]
pub const fn is_digit(c: char) -> bool {
    digit_value(c).is_some()
}

/// Zero of the decade containing `c`, or `None` when `c` is not a decimal digit.
#[must_use]
pub fn decade_start(c: char) -> Option<char> {
    let value = digit_value(c)?;
    char::from_u32(c as u32 - u32::from(value))
}
