// src/core/sanitize.rs

/// Turn a scraped numeric cell (`" +1,234 "`) into something `str::parse` accepts (`"1234"`).
/// Empty cells become `"0"`; the site leaves "no new cases" blank.
/// Only `+`, `,` and whitespace are touched.
pub fn strip_unneeded(text: &str) -> String {
    let out: String = text
        .trim()
        .chars()
        .filter(|&ch| ch != '+' && ch != ',' && !ch.is_whitespace())
        .collect();

    if out.is_empty() { s!("0") } else { out }
}
