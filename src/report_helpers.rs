use serde::Serialize;

use crate::status::Tone;

/// Print a horizontal separator of box-drawing chars.
pub fn separator(width: usize) -> String {
    "\u{2500}".repeat(width)
}

/// Serialize to pretty JSON and print to stdout.
pub fn print_json_stdout(value: &impl Serialize) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Single-character marker for a tone in plain-text tables.
pub fn tone_marker(tone: Tone) -> char {
    match tone {
        Tone::Positive => '+',
        Tone::Attention => '!',
    }
}

/// Truncate `s` to at most `max` chars, marking the cut with "...".
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let keep = max.saturating_sub(3);
    let head: String = s.chars().take(keep).collect();
    format!("{head}...")
}

#[cfg(test)]
#[path = "report_helpers_test.rs"]
mod tests;
