//! Integer parsing over folded digits

use std::num::IntErrorKind;

use udigit_types::{BitWidth, Radix, atoi, parse_int, parse_uint};

use crate::common::{ARABIC_INDIC, BRAHMI, TAMIL};

#[test]
fn atoi_negative_tamil() {
    assert_eq!(atoi(&format!("-{TAMIL}")), Ok(-123_456_789));
}

#[test]
fn atoi_positive_arabic_indic() {
    assert_eq!(atoi(&format!("+{ARABIC_INDIC}")), Ok(123_456_789));
}

#[test]
fn atoi_mixed_scripts_in_one_numeral() {
    // Digits from different scripts still form one number once folded.
    assert_eq!(atoi("١2௩"), Ok(123));
}

#[test]
fn parse_int_brahmi_fits_i32() {
    assert_eq!(
        parse_int(BRAHMI, Radix::DECIMAL, BitWidth::Bits32),
        Ok(123_456_789)
    );
}

#[test]
fn parse_int_overflow_passes_through() {
    let err = parse_int(TAMIL, Radix::DECIMAL, BitWidth::Bits16).unwrap_err();
    assert_eq!(err.kind(), &IntErrorKind::PosOverflow);
}

#[test]
fn parse_uint_malformed_passes_through() {
    let err = parse_uint("١٢x", Radix::DECIMAL, BitWidth::Bits64).unwrap_err();
    assert_eq!(err, "12x".parse::<u64>().unwrap_err());
}
