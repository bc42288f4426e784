//! Language profile module for waketime
//!
//! Each supported language ships a static vocabulary bundle (weekday and
//! month names, relative-date words, time-of-day words and noise
//! prepositions) that drives all locale-specific matching in the parser.
//! English is the mandatory fallback profile.

use log::warn;
use once_cell::sync::Lazy;
use std::collections::HashMap;

mod de;
mod en;
mod es;
mod fr;
mod nl;

/// A vocabulary entry that is either a single word or a set of equivalent words.
///
/// Lookup is uniform: callers iterate or match against every variant, so the
/// resolvers never need to branch on which shape a profile chose.
#[derive(Debug, Clone, Copy)]
pub enum WordSet {
    One(&'static str),
    Many(&'static [&'static str]),
}

impl WordSet {
    /// Iterate over all variants in this set.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        match self {
            WordSet::One(w) => std::slice::from_ref(w).iter().copied(),
            WordSet::Many(ws) => ws.iter().copied(),
        }
    }

    /// Whether `word` equals any variant (case is the caller's problem;
    /// profiles store lowercase and input is lowercased before lookup).
    pub fn matches(&self, word: &str) -> bool {
        self.iter().any(|w| w == word)
    }

    /// The canonical (first) variant.
    pub fn primary(&self) -> &'static str {
        match self {
            WordSet::One(w) => w,
            WordSet::Many(ws) => ws[0],
        }
    }
}

/// Relative-date vocabulary: "today", "tomorrow", "in N days" and friends.
#[derive(Debug, Clone, Copy)]
pub struct RelativeWords {
    pub today: WordSet,
    pub tomorrow: WordSet,
    /// The "in" of "in 2 days".
    pub in_word: WordSet,
    /// Day unit, singular and plural variants.
    pub day: WordSet,
    /// Week unit, singular and plural variants.
    pub week: WordSet,
    /// The "next" of "next monday".
    pub next: WordSet,
    /// The "on" of "on monday"; stripped when leading a date fragment.
    pub on: WordSet,
    /// Fixed phrases mapping directly to a day offset, e.g. "overmorgen" -> 2.
    pub fixed_phrases: &'static [(&'static str, i64)],
    /// Spelled-out number words usable in place of digits.
    pub number_words: &'static [(&'static str, i64)],
}

/// Time-of-day vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct TimeWords {
    /// The "at" separator between a date part and a time part.
    pub at: WordSet,
    pub am: WordSet,
    pub pm: WordSet,
    pub noon: WordSet,
    pub midnight: WordSet,
    /// "o'clock" / "uur" / "uhr" style hour markers, removed before
    /// numeric matching.
    pub hour: WordSet,
    /// Day-part words with their default alarm times, e.g. "morning" -> 09:00.
    pub day_parts: &'static [(&'static str, (u32, u32))],
}

/// Immutable per-language vocabulary bundle.
///
/// Weekdays are Monday-first and months January-first, matching chrono's
/// `num_days_from_monday` and one-based month numbering.
#[derive(Debug, Clone, Copy)]
pub struct LanguageProfile {
    pub code: &'static str,
    pub weekdays: [&'static str; 7],
    pub months: [&'static str; 12],
    pub relative: RelativeWords,
    pub time: TimeWords,
    /// Noise words removed from input before any other processing.
    pub prepositions: &'static [&'static str],
}

impl LanguageProfile {
    /// Resolve a weekday name to its Monday-first index.
    ///
    /// Accepts the exact profile word or an unambiguous prefix of at least
    /// three letters ("mon", "din"), mirroring how people abbreviate day
    /// names when talking to an alarm clock.
    pub fn weekday_index(&self, word: &str) -> Option<usize> {
        lookup_name(&self.weekdays, word)
    }

    /// Resolve a month name to its one-based month number.
    pub fn month_number(&self, word: &str) -> Option<u32> {
        lookup_name(&self.months, word).map(|i| i as u32 + 1)
    }

    /// Default time for a day-part word such as "morning" or "avond".
    pub fn day_part_time(&self, word: &str) -> Option<(u32, u32)> {
        self.time
            .day_parts
            .iter()
            .find(|(w, _)| *w == word)
            .map(|(_, t)| *t)
    }
}

fn lookup_name(names: &[&'static str], word: &str) -> Option<usize> {
    if let Some(pos) = names.iter().position(|n| *n == word) {
        return Some(pos);
    }
    // Unambiguous prefix match, minimum three letters so "ma" never has to
    // choose between "maandag" and "maart"-style near misses.
    if word.chars().count() < 3 {
        return None;
    }
    let mut found = None;
    for (pos, name) in names.iter().enumerate() {
        if name.starts_with(word) {
            if found.is_some() {
                return None;
            }
            found = Some(pos);
        }
    }
    found
}

static PROFILES: Lazy<HashMap<&'static str, LanguageProfile>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for profile in [
        en::profile(),
        nl::profile(),
        de::profile(),
        fr::profile(),
        es::profile(),
    ] {
        map.insert(profile.code, profile);
    }
    map
});

/// Look up the profile for a language code, falling back to English.
///
/// Accepts bare codes ("nl") as well as full locales ("nl-NL", "nl_NL").
/// Never fails: an unrecognized code logs a warning and returns the English
/// profile.
pub fn profile_for(code: &str) -> &'static LanguageProfile {
    let lower = code.to_lowercase();
    let bare = lower.split(['-', '_']).next().unwrap_or(lower.as_str());
    if let Some(profile) = PROFILES.get(bare) {
        return profile;
    }
    warn!("No language profile for '{}', falling back to English", code);
    PROFILES
        .get("en")
        .expect("English profile is always registered")
}

/// Codes of all registered language profiles.
pub fn supported_languages() -> Vec<&'static str> {
    let mut codes: Vec<_> = PROFILES.keys().copied().collect();
    codes.sort_unstable();
    codes
}
