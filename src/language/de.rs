//! German vocabulary.

use super::{LanguageProfile, RelativeWords, TimeWords, WordSet};

pub(super) fn profile() -> LanguageProfile {
    LanguageProfile {
        code: "de",
        weekdays: [
            "montag",
            "dienstag",
            "mittwoch",
            "donnerstag",
            "freitag",
            "samstag",
            "sonntag",
        ],
        months: [
            "januar",
            "februar",
            "märz",
            "april",
            "mai",
            "juni",
            "juli",
            "august",
            "september",
            "oktober",
            "november",
            "dezember",
        ],
        relative: RelativeWords {
            today: WordSet::One("heute"),
            tomorrow: WordSet::One("morgen"),
            in_word: WordSet::One("in"),
            day: WordSet::Many(&["tagen", "tage", "tag"]),
            week: WordSet::Many(&["wochen", "woche"]),
            next: WordSet::Many(&["nächsten", "naechsten"]),
            on: WordSet::One("am"),
            fixed_phrases: &[("übermorgen", 2), ("uebermorgen", 2)],
            number_words: &[
                ("einem", 1),
                ("einer", 1),
                ("zwei", 2),
                ("drei", 3),
                ("vier", 4),
                ("fünf", 5),
                ("fuenf", 5),
                ("sechs", 6),
                ("sieben", 7),
                ("acht", 8),
                ("neun", 9),
                ("zehn", 10),
            ],
        },
        time: TimeWords {
            at: WordSet::One("um"),
            am: WordSet::One("am"),
            pm: WordSet::One("pm"),
            noon: WordSet::One("mittag"),
            midnight: WordSet::One("mitternacht"),
            hour: WordSet::One("uhr"),
            // "morgen" alone means tomorrow; the morning day-part uses
            // "morgens"/"früh" so the two never collide.
            day_parts: &[
                ("morgens", (9, 0)),
                ("früh", (9, 0)),
                ("nachmittag", (14, 0)),
                ("nachmittags", (14, 0)),
                ("abend", (19, 0)),
                ("abends", (19, 0)),
                ("nachts", (21, 0)),
            ],
        },
        prepositions: &["der", "die", "das", "den"],
    }
}
