//! English vocabulary, also the fallback for unknown language codes.

use super::{LanguageProfile, RelativeWords, TimeWords, WordSet};

pub(super) fn profile() -> LanguageProfile {
    LanguageProfile {
        code: "en",
        weekdays: [
            "monday",
            "tuesday",
            "wednesday",
            "thursday",
            "friday",
            "saturday",
            "sunday",
        ],
        months: [
            "january",
            "february",
            "march",
            "april",
            "may",
            "june",
            "july",
            "august",
            "september",
            "october",
            "november",
            "december",
        ],
        relative: RelativeWords {
            today: WordSet::One("today"),
            tomorrow: WordSet::One("tomorrow"),
            in_word: WordSet::One("in"),
            day: WordSet::Many(&["days", "day"]),
            week: WordSet::Many(&["weeks", "week"]),
            next: WordSet::One("next"),
            on: WordSet::One("on"),
            fixed_phrases: &[("day after tomorrow", 2)],
            number_words: &[
                ("one", 1),
                ("two", 2),
                ("three", 3),
                ("four", 4),
                ("five", 5),
                ("six", 6),
                ("seven", 7),
                ("eight", 8),
                ("nine", 9),
                ("ten", 10),
                ("eleven", 11),
                ("twelve", 12),
            ],
        },
        time: TimeWords {
            at: WordSet::One("at"),
            am: WordSet::One("am"),
            pm: WordSet::One("pm"),
            noon: WordSet::Many(&["noon", "midday"]),
            midnight: WordSet::One("midnight"),
            hour: WordSet::Many(&["o'clock", "oclock", "hours", "hour"]),
            day_parts: &[
                ("morning", (9, 0)),
                ("afternoon", (14, 0)),
                ("evening", (19, 0)),
                ("night", (21, 0)),
                ("tonight", (21, 0)),
            ],
        },
        prepositions: &["the", "of"],
    }
}
