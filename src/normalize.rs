//! Script normalization for region names.
//!
//! This is the first stage of the matching pipeline. It turns arbitrary
//! user-entered text into a comparison-ready form:
//!
//! - Latin letters that visually resemble Cyrillic ones are mapped to their
//!   Cyrillic counterparts (both cases), so `"Mосква"` typed with a Latin `M`
//!   compares equal to `"москва"`
//! - Runs of hyphens, en-dashes, and em-dashes collapse to a single space
//! - Runs of whitespace collapse to a single space; edges are trimmed
//! - The whole string is lowercased (Unicode lowercasing, not ASCII-only)
//! - Known trailing qualifier phrases (`"в границах"`, `"(по 2009 год)"`, …)
//!   truncate the string at their first occurrence
//!
//! No I/O, no locale dependence. Same input, same output, on any machine.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Latin characters that render identically (or near-identically) to Cyrillic
/// glyphs in common fonts, mapped to the Cyrillic letter they are usually
/// standing in for. Applied per character, left to right, in a single pass.
static LATIN_TO_CYRILLIC: Lazy<HashMap<char, char>> = Lazy::new(|| {
    let pairs = [
        ('A', 'А'),
        ('B', 'В'),
        ('C', 'С'),
        ('E', 'Е'),
        ('H', 'Н'),
        ('I', 'І'),
        ('J', 'Ј'),
        ('K', 'К'),
        ('M', 'М'),
        ('O', 'О'),
        ('P', 'Р'),
        ('S', 'С'),
        ('T', 'Т'),
        ('X', 'Х'),
        ('Y', 'У'),
        ('a', 'а'),
        ('b', 'в'),
        ('c', 'с'),
        ('e', 'е'),
        ('i', 'і'),
        ('j', 'ј'),
        ('k', 'к'),
        ('m', 'м'),
        ('o', 'о'),
        ('p', 'р'),
        ('s', 'с'),
        ('t', 'т'),
        ('x', 'х'),
        ('y', 'у'),
    ];
    pairs.into_iter().collect()
});

/// Qualifier phrases that carry dataset bookkeeping rather than the region
/// name itself. Checked in order; each phrase found truncates the string to
/// everything strictly before it, and the remaining phrases are checked
/// against the truncated string.
const QUALIFIER_PHRASES: [&str; 8] = [
    "в границах",
    "после",
    "без учета новых субъектов (с 01.01.2023)",
    "(по 2009 год)",
    "(с 2010 года)",
    "(с 29.07.2016)",
    "(без АО)",
    "(с 03.11.2018)",
];

/// Normalizes a raw region name into its comparison form.
///
/// The result is lowercase, single-spaced, Cyrillic-unified, and stripped of
/// known qualifier phrases. Empty and whitespace-only input yields an empty
/// string.
///
/// # Examples
///
/// ```
/// use reg_normalizer::normalize;
///
/// assert_eq!(normalize("Mосковская  Область"), "московская область");
/// assert_eq!(normalize("Ханты-Мансийский АО"), "ханты мансийский ао");
/// assert_eq!(normalize("Тюменская область в границах 2022"), "тюменская область");
/// ```
pub fn normalize(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    // Delimiters never emit a space until the next real character shows up,
    // which trims the edges and collapses runs in the same pass.
    let mut pending_space = false;

    for ch in raw.chars() {
        let ch = LATIN_TO_CYRILLIC.get(&ch).copied().unwrap_or(ch);
        if ch.is_whitespace() || matches!(ch, '-' | '\u{2013}' | '\u{2014}') {
            if !cleaned.is_empty() {
                pending_space = true;
            }
            continue;
        }
        if pending_space {
            cleaned.push(' ');
            pending_space = false;
        }
        // Lowercasing can expand a single character into several.
        for lower in ch.to_lowercase() {
            cleaned.push(lower);
        }
    }

    strip_qualifiers(&cleaned).to_string()
}

/// Truncates `name` before each qualifier phrase found, in list order.
///
/// A truncation removes the phrase entirely, so running the result through
/// this function again changes nothing.
fn strip_qualifiers(mut name: &str) -> &str {
    for phrase in QUALIFIER_PHRASES {
        if let Some(pos) = name.find(phrase) {
            name = name[..pos].trim_end();
        }
    }
    name
}

/// Extracts the query text from an arbitrary JSON cell.
///
/// Only strings carry matchable text; nulls, numbers, booleans, arrays, and
/// objects coerce to the empty string rather than erroring. Garbage cells in
/// a batch column therefore produce an absent match, never a failure.
pub(crate) fn cell_text(value: &serde_json::Value) -> &str {
    value.as_str().unwrap_or("")
}
