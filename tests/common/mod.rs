//! Shared test fixtures
//!
//! Digit samples used across the integration suites.

#![allow(dead_code)]

/// ASCII digits 0-9.
pub const ASCII: &str = "0123456789";
/// ARABIC-INDIC DIGIT ZERO..NINE (2-byte UTF-8).
pub const ARABIC_INDIC: &str = "٠١٢٣٤٥٦٧٨٩";
/// TAMIL DIGIT ZERO..NINE (3-byte UTF-8).
pub const TAMIL: &str = "௦௧௨௩௪௫௬௭௮௯";
/// BRAHMI DIGIT ZERO..NINE (4-byte UTF-8).
pub const BRAHMI: &str = "𑁦𑁧𑁨𑁩𑁪𑁫𑁬𑁭𑁮𑁯";
/// FULLWIDTH DIGIT ZERO..NINE.
pub const FULLWIDTH: &str = "０１２３４５６７８９";

/// One decade from each UTF-8 encoding length, concatenated.
pub fn mixed_sample() -> String {
    [ASCII, ARABIC_INDIC, TAMIL, BRAHMI, FULLWIDTH].concat()
}
