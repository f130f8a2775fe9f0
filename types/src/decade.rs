//! Catalogue of decimal digit decades and the scripts they belong to.

use std::fmt;

use unicode_script::{Script, UnicodeScript};

use crate::table::{DECADE_ZEROS, digit_value};

/// Ten consecutive codepoints holding the digits 0 through 9 of one script or style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decade {
    zero: char,
}

impl Decade {
    /// The decade containing `c`, if `c` is a decimal digit.
    #[must_use]
    pub fn containing(c: char) -> Option<Self> {
        crate::table::decade_start(c).map(|zero| Self { zero })
    }

    #[must_use]
    pub const fn zero(self) -> char {
        self.zero
    }

    /// Digit `value` of this decade. `value` is taken modulo 10.
    #[must_use]
    pub fn digit(self, value: u8) -> char {
        let cp = self.zero as u32 + u32::from(value % 10);
        // Every decade is ten assigned scalar values.
        char::from_u32(cp).unwrap_or(self.zero)
    }

    /// The ten digits in value order.
    pub fn digits(self) -> impl Iterator<Item = char> {
        (0..10).map(move |value| self.digit(value))
    }

    #[must_use]
    pub fn contains(self, c: char) -> bool {
        (self.zero..=self.digit(9)).contains(&c)
    }

    /// Script of the decade's digits. ASCII, fullwidth, mathematical, and segmented
    /// digits report [`Script::Common`].
    #[must_use]
    pub fn script(self) -> Script {
        self.zero.script()
    }
}

impl fmt::Display for Decade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.digits() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// All decimal digit decades in ascending codepoint order.
pub fn decades() -> impl Iterator<Item = Decade> {
    DECADE_ZEROS
        .into_iter()
        .filter_map(char::from_u32)
        .map(|zero| Decade { zero })
}

/// First decade (lowest codepoint) written in `script`.
#[must_use]
pub fn decade_for_script(script: Script) -> Option<Decade> {
    decades().find(|decade| decade.script() == script)
}

/// First decade whose script matches `name`.
///
/// Accepts full Unicode script names (`"Tamil"`, `"Meetei_Mayek"`) and ISO 15924 codes
/// (`"Taml"`), ignoring case; spaces and hyphens match underscores.
#[must_use]
pub fn decade_for_script_name(name: &str) -> Option<Decade> {
    let wanted = normalize_script_name(name);
    if wanted.is_empty() {
        return None;
    }
    decades().find(|decade| {
        let script = decade.script();
        normalize_script_name(script.full_name()) == wanted
            || normalize_script_name(script.short_name()) == wanted
    })
}

fn normalize_script_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Resolve a user-supplied target into a decade anchor.
///
/// A single character is used as is when it is a digit. Anything else is looked up as a
/// script name.
#[must_use]
pub fn resolve_anchor(target: &str) -> Option<char> {
    let mut chars = target.chars();
    if let (Some(c), None) = (chars.next(), chars.next())
        && digit_value(c).is_some()
    {
        return Some(c);
    }
    decade_for_script_name(target).map(Decade::zero)
}
