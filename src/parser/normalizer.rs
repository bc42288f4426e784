//! Input normalization for natural language date/time expressions
//!
//! This module cleans raw user input (case, noise words, whitespace) and
//! splits a combined date+time expression into a date fragment and an
//! optional time fragment using the active language's "at"-equivalent word
//! as the separator.

use crate::language::LanguageProfile;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Dotted meridiem markers: "a.m." -> "am"
static RE_DOTTED_MERIDIEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([ap])\.m\.?").unwrap());

/// French compact hour form: "14h30" -> "14:30"
static RE_HOUR_INFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{1,2})h(\d{2})").unwrap());

/// Lower-case and trim input, strip configured prepositions as whole words
/// and collapse repeated whitespace. Normalizing already-normalized text is
/// a no-op.
pub fn normalize(text: &str, profile: &LanguageProfile) -> String {
    let mut out = text.trim().to_lowercase();

    for prep in profile.prepositions {
        let re = whole_word_regex(prep);
        out = re.replace_all(&out, " ").into_owned();
    }

    RE_WHITESPACE.replace_all(out.trim(), " ").into_owned()
}

/// Normalize input and split it into a date fragment and an optional time
/// fragment.
///
/// The first occurrence of an "at"-equivalent word separates the two; with
/// no separator the whole text is the date fragment, unless it ends in a
/// named time word ("tomorrow morning"), which is then split off as the
/// time fragment. A leading "on"-equivalent word is stripped from the date
/// fragment.
pub fn normalize_and_split(text: &str, profile: &LanguageProfile) -> (String, Option<String>) {
    let normalized = normalize(text, profile);
    if normalized.is_empty() {
        return (normalized, None);
    }

    let (mut date_fragment, mut time_fragment) = match find_at_separator(&normalized, profile) {
        Some((start, end)) => {
            let date = normalized[..start].trim().to_string();
            let time = normalized[end..].trim().to_string();
            let time = if time.is_empty() { None } else { Some(time) };
            (date, time)
        }
        None => (normalized, None),
    };

    if time_fragment.is_none() {
        if let Some((date, time)) = split_trailing_named_time(&date_fragment, profile) {
            date_fragment = date;
            time_fragment = Some(time);
        }
    }

    for on_word in profile.relative.on.iter() {
        if let Some(rest) = date_fragment.strip_prefix(on_word) {
            if rest.is_empty() || rest.starts_with(' ') {
                date_fragment = rest.trim_start().to_string();
                break;
            }
        }
    }

    debug!(
        "Split input into date fragment '{}' and time fragment {:?}",
        date_fragment, time_fragment
    );
    (date_fragment, time_fragment)
}

/// Remove every known time word from a fragment: "at"-equivalents, hour
/// markers, noon/midnight and day-part words, as whole-word matches. The
/// am/pm markers survive the character filter in
/// [`normalize_time_fragment`], so they are deliberately not in the removal
/// set. Dotted meridiems and the compact "14h30" form are rewritten to
/// their plain equivalents first.
pub fn strip_time_words(text: &str, profile: &LanguageProfile) -> String {
    let out = text.trim().to_lowercase();
    let out = RE_DOTTED_MERIDIEM.replace_all(&out, "${1}m");
    let mut out = RE_HOUR_INFIX.replace_all(&out, "$1:$2").into_owned();

    let mut removable: Vec<&str> = profile
        .time
        .at
        .iter()
        .chain(profile.time.hour.iter())
        .chain(profile.time.noon.iter())
        .chain(profile.time.midnight.iter())
        .collect();
    removable.extend(profile.time.day_parts.iter().map(|(word, _)| *word));
    // Longer variants first so "a las" is consumed before a bare "a".
    removable.sort_by_key(|word| std::cmp::Reverse(word.len()));

    for word in removable {
        let re = whole_word_regex(word);
        out = re.replace_all(&out, " ").into_owned();
    }

    out
}

/// Reduce a time fragment to the characters the time patterns operate on:
/// known time words are removed as whole words, then everything except
/// digits, ':' and the letters a/p/m is dropped.
pub fn normalize_time_fragment(text: &str, profile: &LanguageProfile) -> String {
    strip_time_words(text, profile)
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ':' | 'a' | 'p' | 'm'))
        .collect()
}

fn whole_word_regex(word: &str) -> Regex {
    Regex::new(&format!(r"\b{}\b", regex::escape(word))).expect("escaped word is a valid pattern")
}

/// Find the earliest whole-word occurrence of any "at"-equivalent word,
/// preferring longer variants at the same position ("a las" over "a").
fn find_at_separator(text: &str, profile: &LanguageProfile) -> Option<(usize, usize)> {
    let mut variants: Vec<&str> = profile.time.at.iter().collect();
    variants.sort_by_key(|word| std::cmp::Reverse(word.len()));
    let alternation =
        variants.iter().map(|word| regex::escape(word)).collect::<Vec<_>>().join("|");
    let re = Regex::new(&format!(r"\b(?:{})\b", alternation))
        .expect("escaped alternation is a valid pattern");
    re.find(text).map(|m| (m.start(), m.end()))
}

/// With no explicit separator, a trailing named time word still carries
/// time meaning: "tomorrow morning" splits into ("tomorrow", "morning").
fn split_trailing_named_time(text: &str, profile: &LanguageProfile) -> Option<(String, String)> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() < 2 {
        return None;
    }
    let last = tokens[tokens.len() - 1];
    let named = profile.time.noon.matches(last)
        || profile.time.midnight.matches(last)
        || profile.day_part_time(last).is_some();
    if !named {
        return None;
    }
    Some((tokens[..tokens.len() - 1].join(" "), last.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::profile_for;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_lowercases_and_trims() {
        let en = profile_for("en");
        assert_eq!(normalize("  Tomorrow  ", en), "tomorrow");
        assert_eq!(normalize("5 JANUARY", en), "5 january");
    }

    #[test]
    fn test_normalize_strips_prepositions_whole_word_only() {
        let en = profile_for("en");
        assert_eq!(normalize("the 5 of january", en), "5 january");
        // "the" inside another word is untouched
        assert_eq!(normalize("theater day", en), "theater day");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let en = profile_for("en");
        let once = normalize("  The 5 of  January ", en);
        assert_eq!(normalize(&once, en), once);
    }

    #[test]
    fn test_split_on_at_word() {
        let en = profile_for("en");
        assert_eq!(
            normalize_and_split("5 january at 14:30", en),
            ("5 january".to_string(), Some("14:30".to_string()))
        );
        assert_eq!(
            normalize_and_split("tomorrow", en),
            ("tomorrow".to_string(), None)
        );
    }

    #[test]
    fn test_split_dutch_om() {
        let nl = profile_for("nl");
        assert_eq!(
            normalize_and_split("overmorgen om 9", nl),
            ("overmorgen".to_string(), Some("9".to_string()))
        );
    }

    #[test]
    fn test_split_spanish_prefers_longer_at_variant() {
        let es = profile_for("es");
        assert_eq!(
            normalize_and_split("pasado mañana a las 8", es),
            ("pasado mañana".to_string(), Some("8".to_string()))
        );
    }

    #[test]
    fn test_leading_on_word_is_stripped() {
        let en = profile_for("en");
        assert_eq!(
            normalize_and_split("on monday at 7", en),
            ("monday".to_string(), Some("7".to_string()))
        );
        let de = profile_for("de");
        assert_eq!(
            normalize_and_split("am montag um 7", de),
            ("montag".to_string(), Some("7".to_string()))
        );
    }

    #[test]
    fn test_at_inside_word_does_not_split() {
        let en = profile_for("en");
        assert_eq!(
            normalize_and_split("saturday", en),
            ("saturday".to_string(), None)
        );
    }

    #[test]
    fn test_trailing_day_part_becomes_time_fragment() {
        let en = profile_for("en");
        assert_eq!(
            normalize_and_split("tomorrow morning", en),
            ("tomorrow".to_string(), Some("morning".to_string()))
        );
        let nl = profile_for("nl");
        assert_eq!(
            normalize_and_split("morgen avond", nl),
            ("morgen".to_string(), Some("avond".to_string()))
        );
    }

    #[test]
    fn test_empty_input_yields_empty_date_fragment() {
        let en = profile_for("en");
        assert_eq!(normalize_and_split("   ", en), (String::new(), None));
    }

    #[test]
    fn test_normalize_time_fragment() {
        let en = profile_for("en");
        assert_eq!(normalize_time_fragment("7 o'clock", en), "7");
        assert_eq!(normalize_time_fragment("7:30 pm", en), "7:30pm");
        let nl = profile_for("nl");
        assert_eq!(normalize_time_fragment("9 uur", nl), "9");
        assert_eq!(normalize_time_fragment("8 a.m.", en), "8am");
        let fr = profile_for("fr");
        assert_eq!(normalize_time_fragment("14h30", fr), "14:30");
        assert_eq!(normalize_time_fragment("14 h 30", fr), "1430");
    }
}
