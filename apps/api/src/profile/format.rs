//! Pure formatting helpers used by the projector and the Markdown renderer.
//!
//! None of these fail: unknown or malformed input degrades to `None`, `0`,
//! or a generic marker.

use chrono::{DateTime, NaiveDate};
use url::Url;

use crate::models::record::YearMonth;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const PRESENT: &str = "Present";

/// Closed set of proficiency labels, strongest first.
pub const PROFICIENCY_SCORES: &[(&str, u8)] = &[
    ("Native or bilingual proficiency", 100),
    ("Professional working proficiency", 80),
    ("Limited working proficiency", 60),
    ("Elementary proficiency", 40),
    ("Beginner", 20),
];

pub const UNKNOWN_LANGUAGE_FLAG: &str = "🌐";

const LANGUAGE_FLAGS: &[(&str, &str)] = &[
    ("English", "🇬🇧"),
    ("Spanish", "🇪🇸"),
    ("French", "🇫🇷"),
    ("German", "🇩🇪"),
    ("Italian", "🇮🇹"),
    ("Portuguese", "🇵🇹"),
    ("Russian", "🇷🇺"),
    ("Chinese", "🇨🇳"),
    ("Japanese", "🇯🇵"),
    ("Korean", "🇰🇷"),
    ("Arabic", "🇸🇦"),
    ("Hindi", "🇮🇳"),
    ("Bengali", "🇧🇩"),
    ("Dutch", "🇳🇱"),
    ("Greek", "🇬🇷"),
    ("Turkish", "🇹🇷"),
    ("Vietnamese", "🇻🇳"),
    ("Thai", "🇹🇭"),
    ("Indonesian", "🇮🇩"),
    ("Malay", "🇲🇾"),
    ("Mandarin", "🇨🇳"),
];

/// 1-indexed month to its English abbreviation.
pub fn month_abbrev(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_ABBREVIATIONS.get(index).copied()
}

/// "Mar 2020"; the year alone when the month is missing or out of range.
pub fn format_month_year(date: &YearMonth) -> Option<String> {
    let year = date.year?;
    match date.month.and_then(month_abbrev) {
        Some(month) => Some(format!("{month} {year}")),
        None => Some(year.to_string()),
    }
}

/// "Mar 2020 - Jun 2022", or "Mar 2020 - Present" for an ongoing range.
pub fn format_date_range(start: &YearMonth, end: Option<&YearMonth>) -> String {
    let start = format_month_year(start).unwrap_or_default();
    let end = end
        .and_then(format_month_year)
        .unwrap_or_else(|| PRESENT.to_string());
    format!("{start} - {end}")
}

/// Lookup into [`PROFICIENCY_SCORES`]; unrecognized labels score 0.
pub fn proficiency_score(label: &str) -> u8 {
    PROFICIENCY_SCORES
        .iter()
        .find(|(known, _)| *known == label)
        .map(|(_, score)| *score)
        .unwrap_or(0)
}

pub fn is_known_proficiency(label: &str) -> bool {
    PROFICIENCY_SCORES.iter().any(|(known, _)| *known == label)
}

pub fn language_flag(language: &str) -> &'static str {
    LANGUAGE_FLAGS
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, flag)| *flag)
        .unwrap_or(UNKNOWN_LANGUAGE_FLAG)
}

/// Abbreviates a decimal amount string to `$xB`, `$xM` or `$xK` with one
/// decimal place. Amounts under 1000 still use the `K` form ("$0.5K").
pub fn abbreviate_money(amount: &str) -> Option<String> {
    let value: f64 = amount.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    let (scaled, suffix) = if value >= 1_000_000_000.0 {
        (value / 1_000_000_000.0, 'B')
    } else if value >= 1_000_000.0 {
        (value / 1_000_000.0, 'M')
    } else {
        (value / 1_000.0, 'K')
    };
    Some(format!("${:.1}{suffix}", round_tenths(scaled)))
}

/// Halves round away from zero (0.25 -> 0.3), unlike `{:.1}` which rounds them to even.
fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// en-US digit grouping: 1234567 -> "1,234,567".
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// "2023-05-10" (or an RFC 3339 timestamp) -> "May 2023".
pub fn format_month_year_long(date: &str) -> Option<String> {
    let date = date.trim();
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(date).ok().map(|d| d.date_naive()))?;
    Some(parsed.format("%B %Y").to_string())
}

pub fn website_host(website: &str) -> Option<String> {
    let url = Url::parse(website.trim()).ok()?;
    url.host_str().map(str::to_string)
}

pub fn initials(first_name: &str, last_name: &str) -> String {
    [first_name, last_name]
        .iter()
        .filter_map(|name| name.trim().chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Case-insensitive substring filter. Order is preserved; an empty term keeps everything.
pub fn filter_skills(skills: &[String], term: &str) -> Vec<String> {
    let needle = term.to_lowercase();
    skills
        .iter()
        .filter(|skill| skill.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Trimmed text, or `None` when absent or blank.
pub fn present_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Joins the non-blank parts with ", ".
pub fn join_place(parts: &[Option<&str>]) -> Option<String> {
    let parts: Vec<&str> = parts
        .iter()
        .flatten()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}
