//! Time-of-day resolution
//!
//! Parses a time fragment against an ordered cascade of patterns, from the
//! strictest (bare hour) to the most permissive (12-hour clock with am/pm
//! marker). The first matching pattern wins; values out of range fail even
//! when the pattern matched syntactically ("25:00").

use crate::error::ParseError;
use crate::language::LanguageProfile;
use crate::parser::normalizer;
use chrono::NaiveTime;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// 1. Bare 1-2 digit hour: "7", "19"
static RE_BARE_HOUR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{1,2})$").unwrap());

/// 2. Colon-separated "H:MM" / "HH:MM", with optional seconds: "7:30", "07:15:30"
static RE_COLON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{2})(?::(\d{2}))?$").unwrap());

/// 3. Compact 3-4 digits, minutes split from the right: "730" -> 7:30
static RE_COMPACT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{3,4})$").unwrap());

/// 4. 12-hour bare hour with am/pm marker: "7pm", "7 p", "12 a.m."
static RE_HOUR_AMPM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})\s*([ap])\.?m?\.?$").unwrap());

/// 5. 12-hour "H:MM" with am/pm marker: "7:30pm", "10:00 am"
static RE_COLON_AMPM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{2})\s*([ap])\.?m?\.?$").unwrap());

/// Convert a 12-hour clock value to 24-hour format.
fn to_24_hour(hour: u32, is_pm: bool) -> u32 {
    (hour % 12) + if is_pm { 12 } else { 0 }
}

/// Parse a cleaned time fragment with the pattern cascade.
///
/// Fails with `InvalidTimeFormat` when no pattern matches or when the
/// matched values fall outside hour 0-23 / minute 0-59 / second 0-59.
pub fn resolve_time(fragment: &str) -> Result<NaiveTime, ParseError> {
    let fragment = fragment.trim();
    let invalid = || ParseError::InvalidTimeFormat(fragment.to_string());

    if let Some(caps) = RE_BARE_HOUR.captures(fragment) {
        let hour: u32 = caps[1].parse().map_err(|_| invalid())?;
        return NaiveTime::from_hms_opt(hour, 0, 0).ok_or_else(invalid);
    }

    if let Some(caps) = RE_COLON.captures(fragment) {
        let hour: u32 = caps[1].parse().map_err(|_| invalid())?;
        let minute: u32 = caps[2].parse().map_err(|_| invalid())?;
        let second: u32 = caps.get(3).map_or(Ok(0), |m| m.as_str().parse()).map_err(|_| invalid())?;
        return NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(invalid);
    }

    if let Some(caps) = RE_COMPACT.captures(fragment) {
        let digits = &caps[1];
        let split = digits.len() - 2;
        let hour: u32 = digits[..split].parse().map_err(|_| invalid())?;
        let minute: u32 = digits[split..].parse().map_err(|_| invalid())?;
        return NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid);
    }

    if let Some(caps) = RE_HOUR_AMPM.captures(fragment) {
        let hour: u32 = caps[1].parse().map_err(|_| invalid())?;
        let hour = to_24_hour(hour, &caps[2] == "p");
        return NaiveTime::from_hms_opt(hour, 0, 0).ok_or_else(invalid);
    }

    if let Some(caps) = RE_COLON_AMPM.captures(fragment) {
        let hour: u32 = caps[1].parse().map_err(|_| invalid())?;
        let minute: u32 = caps[2].parse().map_err(|_| invalid())?;
        let hour = to_24_hour(hour, &caps[3] == "p");
        return NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid);
    }

    debug!("No time pattern matched '{}'", fragment);
    Err(invalid())
}

/// Resolve a named time word: noon, midnight or a day-part word with a
/// default alarm time. The text is compared as a whole after any leading
/// "at"-equivalent word is stripped, so "at noon" resolves but a date
/// expression merely containing a day-part word does not.
pub fn resolve_named_time(text: &str, profile: &LanguageProfile) -> Option<NaiveTime> {
    let mut candidate = text.trim();
    for at_word in profile.time.at.iter() {
        if let Some(rest) = candidate.strip_prefix(at_word) {
            if rest.is_empty() || rest.starts_with(' ') {
                candidate = rest.trim_start();
                break;
            }
        }
    }

    if profile.time.noon.matches(candidate) {
        return NaiveTime::from_hms_opt(12, 0, 0);
    }
    if profile.time.midnight.matches(candidate) {
        return NaiveTime::from_hms_opt(0, 0, 0);
    }
    if let Some((hour, minute)) = profile.day_part_time(candidate) {
        debug!("Resolved day part '{}' to {:02}:{:02}", candidate, hour, minute);
        return NaiveTime::from_hms_opt(hour, minute, 0);
    }
    None
}

/// Resolve a time expression: named times first, then the pattern cascade
/// over the normalized text.
///
/// After the known time words are stripped, anything left over that the
/// character filter would discard (letters other than a/p/m, punctuation)
/// means the text carries non-time meaning, and the whole resolution is
/// rejected: "in 2 days" must not collapse to "2a" and parse as 02:00.
pub fn resolve_time_fragment(
    fragment: &str,
    profile: &LanguageProfile,
) -> Result<NaiveTime, ParseError> {
    let text = fragment.trim().to_lowercase();
    if text.is_empty() {
        return Err(ParseError::InvalidTimeFormat(fragment.to_string()));
    }

    if let Some(time) = resolve_named_time(&text, profile) {
        return Ok(time);
    }

    let invalid = || ParseError::InvalidTimeFormat(fragment.to_string());
    let stripped = normalizer::strip_time_words(&text, profile);
    let recognized = stripped.chars().all(|c| {
        c.is_ascii_digit() || c.is_whitespace() || matches!(c, ':' | 'a' | 'p' | 'm' | '\'')
    });
    if !recognized {
        return Err(invalid());
    }

    let cleaned = normalizer::normalize_time_fragment(&stripped, profile);
    if cleaned.is_empty() {
        return Err(invalid());
    }
    resolve_time(&cleaned).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::profile_for;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_bare_hour() {
        assert_eq!(resolve_time("7"), Ok(time(7, 0)));
        assert_eq!(resolve_time("0"), Ok(time(0, 0)));
        assert_eq!(resolve_time("23"), Ok(time(23, 0)));
        assert!(resolve_time("24").is_err());
        assert!(resolve_time("99").is_err());
    }

    #[test]
    fn test_colon_separated() {
        assert_eq!(resolve_time("7:30"), Ok(time(7, 30)));
        assert_eq!(resolve_time("07:05"), Ok(time(7, 5)));
        assert_eq!(resolve_time("23:59"), Ok(time(23, 59)));
        assert_eq!(
            resolve_time("07:15:30"),
            Ok(NaiveTime::from_hms_opt(7, 15, 30).unwrap())
        );
    }

    #[test]
    fn test_out_of_range_rejected_after_syntactic_match() {
        assert_eq!(
            resolve_time("25:00"),
            Err(ParseError::InvalidTimeFormat("25:00".to_string()))
        );
        assert!(resolve_time("12:60").is_err());
        assert!(resolve_time("07:15:61").is_err());
    }

    #[test]
    fn test_compact_digits_split_from_right() {
        assert_eq!(resolve_time("730"), Ok(time(7, 30)));
        assert_eq!(resolve_time("0930"), Ok(time(9, 30)));
        assert_eq!(resolve_time("1200"), Ok(time(12, 0)));
        assert!(resolve_time("2575").is_err());
    }

    #[test]
    fn test_twelve_hour_clock() {
        let test_cases = vec![
            ("7pm", time(19, 0)),
            ("7 pm", time(19, 0)),
            ("7p", time(19, 0)),
            ("12am", time(0, 0)),
            ("12pm", time(12, 0)),
            ("8am", time(8, 0)),
            ("7:30pm", time(19, 30)),
            ("10:00 am", time(10, 0)),
            ("12:15am", time(0, 15)),
        ];
        for (input, expected) in test_cases {
            assert_eq!(resolve_time(input), Ok(expected), "Failed for input: {}", input);
        }
    }

    #[test]
    fn test_no_pattern_match() {
        assert!(resolve_time("").is_err());
        assert!(resolve_time("tomorrow").is_err());
        assert!(resolve_time("in 2 days").is_err());
    }

    #[test]
    fn test_all_valid_hhmm_round_trip() {
        for hour in 0..24 {
            for minute in [0, 1, 15, 30, 59] {
                let input = format!("{}:{:02}", hour, minute);
                assert_eq!(resolve_time(&input), Ok(time(hour, minute)), "{}", input);
            }
        }
    }

    #[test]
    fn test_named_times() {
        let en = profile_for("en");
        assert_eq!(resolve_named_time("noon", en), Some(time(12, 0)));
        assert_eq!(resolve_named_time("at noon", en), Some(time(12, 0)));
        assert_eq!(resolve_named_time("midnight", en), Some(time(0, 0)));
        assert_eq!(resolve_named_time("morning", en), Some(time(9, 0)));
        assert_eq!(resolve_named_time("tomorrow morning", en), None);

        let nl = profile_for("nl");
        assert_eq!(resolve_named_time("middag", nl), Some(time(12, 0)));
        assert_eq!(resolve_named_time("middernacht", nl), Some(time(0, 0)));
    }

    #[test]
    fn test_resolve_time_fragment_with_language_words() {
        let nl = profile_for("nl");
        assert_eq!(resolve_time_fragment("9 uur", nl), Ok(time(9, 0)));
        let fr = profile_for("fr");
        assert_eq!(resolve_time_fragment("14h30", fr), Ok(time(14, 30)));
        let en = profile_for("en");
        assert_eq!(resolve_time_fragment("7 o'clock", en), Ok(time(7, 0)));
        assert_eq!(resolve_time_fragment("7:30 pm", en), Ok(time(19, 30)));
        assert!(resolve_time_fragment("whenever", en).is_err());
    }
}
