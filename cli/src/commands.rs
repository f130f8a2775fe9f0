//! Subcommand implementations, written against generic readers and writers.

use std::{
    borrow::Cow,
    io::{BufRead, Write},
};

use anyhow::{Context, Result, anyhow};
use udigit_config::UdigitConfig;
use udigit_types::{
    BitWidth, Radix, decades, digit_value, fold_digits, map_digits, parse_int, parse_uint,
    resolve_anchor,
};

/// Options for `udigit parse`. Unset values fall back to the config file.
#[derive(Debug, Default, Clone, Copy)]
pub struct ParseOptions {
    pub radix: Option<u32>,
    pub bits: Option<u32>,
    /// `Some(true)` for `--unsigned`, `Some(false)` for `--signed`.
    pub unsigned: Option<bool>,
}

/// Apply `f` to each of `texts`, or to each line of `input` when `texts` is empty.
fn transform_each<F>(
    texts: &[String],
    input: impl BufRead,
    out: &mut impl Write,
    f: F,
) -> Result<()>
where
    F: Fn(&str) -> Cow<'_, str>,
{
    if !texts.is_empty() {
        for text in texts {
            writeln!(out, "{}", f(text.as_str()))?;
        }
        return Ok(());
    }

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        writeln!(out, "{}", f(line.as_str()))?;
    }
    Ok(())
}

pub fn fold(texts: &[String], input: impl BufRead, out: &mut impl Write) -> Result<()> {
    transform_each(texts, input, out, fold_digits)
}

/// Map digits to the decade named by `target` (flag) or the configured anchor.
pub fn map(
    target: Option<&str>,
    config: &UdigitConfig,
    texts: &[String],
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let target = target.or(config.anchor()).unwrap_or("0");
    let anchor = resolve_anchor(target)
        .ok_or_else(|| anyhow!("{target:?} is neither a decimal digit nor a script with digits"))?;
    tracing::debug!(anchor = %anchor, "Mapping digits");
    transform_each(texts, input, out, |text| map_digits(text, anchor))
}

/// One line per character: codepoint, character, and digit value or `-`.
pub fn value(text: &str, out: &mut impl Write) -> Result<()> {
    for c in text.chars() {
        let value = digit_value(c).map_or_else(|| "-".to_string(), |v| v.to_string());
        writeln!(out, "U+{:04X}  {}  {value}", c as u32, c.escape_debug())?;
    }
    Ok(())
}

pub fn parse(
    text: &str,
    options: ParseOptions,
    config: &UdigitConfig,
    out: &mut impl Write,
) -> Result<()> {
    let radix = match options.radix {
        Some(radix) => Radix::new(radix)?,
        None => config.radix(),
    };
    let width = match options.bits {
        Some(bits) => BitWidth::new(bits)?,
        None => config.bit_width(),
    };
    let unsigned = options.unsigned.unwrap_or_else(|| config.unsigned());
    tracing::debug!(radix = radix.get(), bits = width.bits(), unsigned, "Parsing");

    if unsigned {
        let value = parse_uint(text, radix, width)
            .with_context(|| format!("failed to parse {text:?} as u{}", width.bits()))?;
        writeln!(out, "{value}")?;
    } else {
        let value = parse_int(text, radix, width)
            .with_context(|| format!("failed to parse {text:?} as i{}", width.bits()))?;
        writeln!(out, "{value}")?;
    }
    Ok(())
}

/// Every decade: zero codepoint, its ten digits, and the script name.
pub fn list_decades(out: &mut impl Write) -> Result<()> {
    for decade in decades() {
        writeln!(
            out,
            "U+{:04X}  {decade}  {}",
            decade.zero() as u32,
            decade.script().full_name()
        )?;
    }
    Ok(())
}
