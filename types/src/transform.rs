//! Rewriting decimal digits between scripts.

use std::borrow::Cow;

use crate::table::{decade_start, digit_value};

/// Replace every decimal digit in `input` with its ASCII equivalent.
///
/// Non-digit characters pass through untouched.
///
/// # Performance
///
/// Returns `Cow::Borrowed(input)` when no digit needs rewriting, including the common
/// all-ASCII case, without allocating.
///
/// # Examples
///
/// ```
/// use udigit_types::fold_digits;
///
/// assert_eq!(fold_digits("ABC٠١٢٣٤٥٦٧٨٩XYZ"), "ABC0123456789XYZ");
/// assert_eq!(fold_digits("no digits here"), "no digits here");
/// ```
#[must_use]
pub fn fold_digits(input: &str) -> Cow<'_, str> {
    if input.is_ascii() {
        return Cow::Borrowed(input);
    }
    rewrite(input, '0')
}

/// Replace every decimal digit in `input` with the digit of equal value from the decade
/// containing `anchor`.
///
/// When `anchor` is not a decimal digit there is no target decade and `input` is
/// returned unchanged. Digits already in the target decade are left alone.
///
/// # Performance
///
/// Nothing is allocated until the first digit that actually needs rewriting. If no
/// digit does, the result is `Cow::Borrowed(input)`.
///
/// # Examples
///
/// ```
/// use udigit_types::map_digits;
///
/// // TAMIL DIGIT FIVE selects the Tamil decade.
/// assert_eq!(map_digits("0123456789", '௫'), "௦௧௨௩௪௫௬௭௮௯");
/// assert_eq!(map_digits("v2", 'x'), "v2");
/// ```
#[must_use]
pub fn map_digits(input: &str, anchor: char) -> Cow<'_, str> {
    let Some(zero) = decade_start(anchor) else {
        return Cow::Borrowed(input);
    };
    rewrite(input, zero)
}

/// Single pass over `input`, materializing an owned copy on the first rewrite.
fn rewrite(input: &str, zero: char) -> Cow<'_, str> {
    let target = zero..=shift(zero, 9);
    let mut output: Option<String> = None;

    for (idx, c) in input.char_indices() {
        let replacement = match digit_value(c) {
            Some(value) if !target.contains(&c) => Some(shift(zero, value)),
            _ => None,
        };

        match (replacement, output.as_mut()) {
            (Some(r), Some(out)) => out.push(r),
            (Some(r), None) => {
                let mut out = String::with_capacity(input.len() + 4);
                out.push_str(&input[..idx]);
                out.push(r);
                output = Some(out);
            }
            (None, Some(out)) => out.push(c),
            (None, None) => {}
        }
    }

    match output {
        Some(out) => Cow::Owned(out),
        None => Cow::Borrowed(input),
    }
}

/// `zero + value`; callers pass a decade zero and a value in `0..=9`.
fn shift(zero: char, value: u8) -> char {
    char::from_u32(zero as u32 + u32::from(value)).unwrap_or(zero)
}
