use std::io::Write;

use serde::Serialize;

/// Compute the max display width for keys, with a minimum of `min`.
pub fn key_width<'a>(keys: impl Iterator<Item = &'a str>, min: usize) -> usize {
    keys.map(|k| k.chars().count()).max().unwrap_or(min).max(min)
}

/// Print a horizontal separator of box-drawing chars.
pub fn separator(width: usize) -> String {
    "\u{2500}".repeat(width)
}

/// Two-decimal percentage with a trailing `%`.
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.2}%")
}

/// Serialize to pretty JSON followed by a newline.
pub fn write_json(
    out: &mut impl Write,
    value: &impl Serialize,
) -> Result<(), Box<dyn std::error::Error>> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
#[path = "report_helpers_test.rs"]
mod tests;
