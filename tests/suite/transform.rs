//! Fold and map behavior through the public API

use std::borrow::Cow;

use udigit_types::{Decade, decades, digit_value, fold_digits, is_digit, map_digits};

use crate::common::{ARABIC_INDIC, ASCII, BRAHMI, FULLWIDTH, TAMIL, mixed_sample};

#[test]
fn fold_every_decade_to_ascii() {
    for decade in decades() {
        let digits = decade.to_string();
        assert_eq!(fold_digits(&digits), ASCII, "decade U+{:04X}", decade.zero() as u32);
    }
}

#[test]
fn map_ascii_to_every_decade() {
    for decade in decades() {
        assert_eq!(map_digits(ASCII, decade.zero()), decade.to_string());
        assert_eq!(map_digits(ASCII, decade.digit(7)), decade.to_string());
    }
}

#[test]
fn fold_mixed_sample() {
    assert_eq!(fold_digits(&mixed_sample()), ASCII.repeat(5));
}

#[test]
fn map_between_non_ascii_decades() {
    assert_eq!(map_digits(TAMIL, '٣'), ARABIC_INDIC);
    assert_eq!(map_digits(ARABIC_INDIC, '𑁩'), BRAHMI);
    assert_eq!(map_digits(BRAHMI, '５'), FULLWIDTH);
}

#[test]
fn map_then_fold_is_fold() {
    let sample = format!("total: {} / {}", mixed_sample(), "no digits");
    for decade in decades() {
        let mapped = map_digits(&sample, decade.digit(4));
        assert_eq!(fold_digits(&mapped), fold_digits(&sample));
    }
}

#[test]
fn map_is_a_no_op_inside_target_decade() {
    let input = format!("Chapter {TAMIL}");
    let result = map_digits(&input, '௦');
    assert!(matches!(result, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
}

#[test]
fn fold_is_a_no_op_without_foreign_digits() {
    let input = String::from("façade 42 naïve");
    let result = fold_digits(&input);
    assert!(matches!(result, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
}

#[test]
fn decades_classify_consistently() {
    for decade in decades() {
        for (value, c) in decade.digits().enumerate() {
            assert!(is_digit(c));
            assert_eq!(digit_value(c), Some(value as u8));
            assert_eq!(Decade::containing(c), Some(decade));
        }
    }
}
