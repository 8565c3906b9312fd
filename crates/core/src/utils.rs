use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use std::sync::LazyLock;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit run pattern is valid"));

/// Current calendar date in UTC
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parses a listing day given on the command line
/// Supports plain dates, RFC 3339 timestamps and whatever dateparser accepts
pub fn parse_day(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    // Plain calendar date (e.g., "2024-04-30")
    if let Ok(day) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(day);
    }

    // Full timestamp (e.g., "2024-04-30T10:30:00Z"), the day is taken in UTC
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    // Fall back to dateparser for human formats, interpreted in UTC
    dateparser::parse_with_timezone(input, &Utc)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Builds the date-scoped front page URL, e.g. `https://news.ycombinator.com/front?day=2024-04-30`
pub fn front_page_url(domain: &str, day: NaiveDate) -> String {
    format!("https://{}/front?day={}", domain, day.format("%Y-%m-%d"))
}

/// Removes every non-breaking space (U+00A0) and trims surrounding whitespace
pub fn strip_nbsp(text: &str) -> String {
    text.replace('\u{a0}', "").trim().to_string()
}

/// First run of ASCII digits in `text`
pub fn first_digit_run(text: &str) -> Option<&str> {
    DIGIT_RUN.find(text).map(|m| m.as_str())
}

/// Sanitizes a string for use in a filename
/// Replaces invalid filename characters with hyphens
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect::<String>()
        .trim()
        .to_string()
}
