//! Calendar date resolution
//!
//! Resolves a normalized date fragment against the active language profile:
//! today/tomorrow words, fixed relative phrases, "in N days/weeks", weekday
//! names, day + month name combinations and plain numeric dates. Dates that
//! already lie in the past roll forward to the next occurrence.

use crate::error::ParseError;
use crate::language::LanguageProfile;
use chrono::{Datelike, Duration, NaiveDate};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// "<day> <month name>", tolerating an ordinal suffix or trailing dot ("5th", "24.")
static RE_DAY_MONTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})(?:st|nd|rd|th)?\.?\s+([\p{L}'-]+)$").unwrap());

/// "<month name> <day>"
static RE_MONTH_DAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([\p{L}'-]+)\s+(\d{1,2})(?:st|nd|rd|th)?\.?$").unwrap());

/// Numeric day-month-year, year optional: "5-1", "24.12.2025", "5/1/24"
static RE_NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})[-/.\s](\d{1,2})(?:[-/.\s](\d{2,4}))?\.?$").unwrap());

/// Resolve a date fragment to a calendar date.
///
/// Fails with `InvalidDateFormat` when nothing matches, or `EmptyInput` for
/// an empty fragment. The `reference` date is the "today" all relative
/// expressions are computed from.
pub fn resolve_date(
    fragment: &str,
    profile: &LanguageProfile,
    reference: NaiveDate,
) -> Result<NaiveDate, ParseError> {
    let fragment = fragment.trim();
    if fragment.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let invalid = || ParseError::InvalidDateFormat(fragment.to_string());

    if profile.relative.today.matches(fragment) {
        return Ok(reference);
    }
    if profile.relative.tomorrow.matches(fragment) {
        return Ok(reference + Duration::days(1));
    }

    for (phrase, offset) in profile.relative.fixed_phrases {
        if fragment.contains(phrase) {
            debug!("Matched fixed phrase '{}' with offset {}", phrase, offset);
            return Ok(reference + Duration::days(*offset));
        }
    }

    if let Some(days) = match_relative_offset(fragment, profile) {
        return Ok(reference + Duration::days(days));
    }

    if let Some(weekday_index) = match_weekday(fragment, profile) {
        let current = reference.weekday().num_days_from_monday() as i64;
        let mut offset = (weekday_index as i64 - current).rem_euclid(7);
        // A bare weekday name always means the next occurrence, never today.
        if offset == 0 {
            offset = 7;
        }
        return Ok(reference + Duration::days(offset));
    }

    if let Some((day, month)) = match_day_and_month(fragment, profile) {
        let candidate =
            NaiveDate::from_ymd_opt(reference.year(), month, day).ok_or_else(invalid)?;
        if candidate < reference {
            return NaiveDate::from_ymd_opt(reference.year() + 1, month, day).ok_or_else(invalid);
        }
        return Ok(candidate);
    }

    if let Some(caps) = RE_NUMERIC.captures(fragment) {
        let day: u32 = caps[1].parse().map_err(|_| invalid())?;
        let month: u32 = caps[2].parse().map_err(|_| invalid())?;
        match caps.get(3) {
            Some(year_match) => {
                let mut year: i32 = year_match.as_str().parse().map_err(|_| invalid())?;
                if year < 100 {
                    year += 2000;
                }
                // An impossible calendar date is skipped silently; the final
                // error below fires only when no candidate at all succeeded.
                if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                    return Ok(date);
                }
            }
            None => {
                if let Some(date) = NaiveDate::from_ymd_opt(reference.year(), month, day) {
                    if date < reference {
                        if let Some(next) = NaiveDate::from_ymd_opt(reference.year() + 1, month, day)
                        {
                            return Ok(next);
                        }
                    } else {
                        return Ok(date);
                    }
                }
            }
        }
    }

    debug!("No date pattern matched '{}'", fragment);
    Err(invalid())
}

/// Match "<in-word> <count> <day/week unit>" where the count is digits or a
/// spelled-out number word. Returns the offset in days.
fn match_relative_offset(fragment: &str, profile: &LanguageProfile) -> Option<i64> {
    let in_alt = alternation(profile.relative.in_word.iter());
    let day_alt = alternation(profile.relative.day.iter());
    let week_alt = alternation(profile.relative.week.iter());
    let pattern = format!(r"^(?:{})\s+(\S+)\s+(?:({})|({}))$", in_alt, day_alt, week_alt);
    let re = Regex::new(&pattern).expect("escaped vocabulary forms a valid pattern");

    let caps = re.captures(fragment)?;
    let count_token = &caps[1];
    let count: i64 = match count_token.parse() {
        Ok(n) => n,
        Err(_) => {
            let (_, value) = profile
                .relative
                .number_words
                .iter()
                .find(|(word, _)| *word == count_token)?;
            *value
        }
    };

    let days = if caps.get(2).is_some() { count } else { count * 7 };
    debug!("Matched relative offset '{}' -> {} days", fragment, days);
    Some(days)
}

/// Match a bare weekday name or "<next-word> <weekday name>".
fn match_weekday(fragment: &str, profile: &LanguageProfile) -> Option<usize> {
    let mut target = fragment;
    for next_word in profile.relative.next.iter() {
        if let Some(rest) = fragment.strip_prefix(next_word) {
            if rest.starts_with(' ') {
                target = rest.trim_start();
                break;
            }
        }
    }
    profile.weekday_index(target)
}

/// Match "<day> <month name>" or "<month name> <day>".
fn match_day_and_month(fragment: &str, profile: &LanguageProfile) -> Option<(u32, u32)> {
    if let Some(caps) = RE_DAY_MONTH.captures(fragment) {
        if let Some(month) = profile.month_number(&caps[2]) {
            let day: u32 = caps[1].parse().ok()?;
            return Some((day, month));
        }
    }
    if let Some(caps) = RE_MONTH_DAY.captures(fragment) {
        if let Some(month) = profile.month_number(&caps[1]) {
            let day: u32 = caps[2].parse().ok()?;
            return Some((day, month));
        }
    }
    None
}

fn alternation<'a>(words: impl Iterator<Item = &'a str>) -> String {
    let mut variants: Vec<&str> = words.collect();
    variants.sort_by_key(|word| std::cmp::Reverse(word.len()));
    variants.iter().map(|word| regex::escape(word)).collect::<Vec<_>>().join("|")
}
