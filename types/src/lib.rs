//! Decimal digit classification and transliteration for every Unicode script.
//!
//! This crate contains pure functions and constant tables only: no IO, no logging, no
//! global state. It answers three questions:
//!
//! - **[`digit_value`] / [`is_digit`]**: is a character a decimal digit, and which one
//! - **[`fold_digits`] / [`map_digits`]**: rewrite the digits of a string into ASCII or
//!   into the decade of another script
//! - **[`atoi`] / [`parse_int`] / [`parse_uint`]**: parse integers written in any script

mod decade;
mod parse;
mod table;
mod transform;

pub use decade::{Decade, decade_for_script, decade_for_script_name, decades, resolve_anchor};
pub use parse::{BitWidth, InvalidBitWidth, InvalidRadix, Radix, atoi, parse_int, parse_uint};
pub use table::{
    UNICODE_VERSION, codepoint_digit_value, decade_start, digit_value, is_codepoint_digit,
    is_digit,
};
pub use transform::{fold_digits, map_digits};
pub use unicode_script::Script;
