//! Canonical forms for the identity fields stored on candidates, consultants and jobs.
//!
//! Every function here is total over its input and idempotent: feeding a normalized value back
//! in returns it unchanged. The quality analyzer relies on that to decide whether a stored value
//! differs from its canonical form.

use regex::Regex;
use std::sync::OnceLock;

const DEFAULT_COUNTRY_CODE: &str = "33";

/// Lowercases and trims an e-mail address.
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Title-cases each word of a person name and collapses whitespace.
pub fn normalize_name(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned
        .split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strips separators and rewrites national numbers to their international form.
pub fn normalize_phone(value: &str) -> String {
    let stripped = strip_phone_separators(value);

    if let Some(rest) = stripped.strip_prefix("00") {
        return format!("+{rest}");
    }

    if stripped.len() == 10
        && stripped.starts_with('0')
        && stripped.chars().all(|ch| ch.is_ascii_digit())
    {
        return format!("+{DEFAULT_COUNTRY_CODE}{}", &stripped[1..]);
    }

    stripped
}

/// Permissive e-mail check: `local@domain.tld` with no whitespace and a single `@`.
///
/// This is not RFC 5322. Quoted local parts, IP literals and similar forms are rejected or
/// accepted purely on the shape above.
pub fn is_valid_email(value: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"))
        .is_match(value)
}

/// Accepts an optional leading `+` followed by 9 to 15 ASCII digits once separators are removed.
pub fn is_valid_phone(value: &str) -> bool {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE
        .get_or_init(|| Regex::new(r"^\+?[0-9]{9,15}$").expect("phone pattern compiles"))
        .is_match(&strip_phone_separators(value))
}

fn strip_phone_separators(value: &str) -> String {
    value
        .chars()
        .filter(|ch| !ch.is_whitespace() && !matches!(ch, '.' | '-' | '/' | '(' | ')'))
        .collect()
}

fn capitalize_word(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut segment_start = true;

    for ch in word.chars() {
        if segment_start {
            let mut upper = ch.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => out.push(single),
                // Multi-char expansions (e.g. `ß`) would not survive a second pass.
                _ => out.push(ch),
            }
        } else {
            out.extend(ch.to_lowercase());
        }
        segment_start = matches!(ch, '-' | '\'' | '’');
    }

    out
}
