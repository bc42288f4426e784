//! Dutch vocabulary.

use super::{LanguageProfile, RelativeWords, TimeWords, WordSet};

pub(super) fn profile() -> LanguageProfile {
    LanguageProfile {
        code: "nl",
        weekdays: [
            "maandag",
            "dinsdag",
            "woensdag",
            "donderdag",
            "vrijdag",
            "zaterdag",
            "zondag",
        ],
        months: [
            "januari",
            "februari",
            "maart",
            "april",
            "mei",
            "juni",
            "juli",
            "augustus",
            "september",
            "oktober",
            "november",
            "december",
        ],
        relative: RelativeWords {
            today: WordSet::One("vandaag"),
            tomorrow: WordSet::One("morgen"),
            in_word: WordSet::One("over"),
            day: WordSet::Many(&["dagen", "dag"]),
            week: WordSet::Many(&["weken", "week"]),
            next: WordSet::One("volgende"),
            on: WordSet::One("op"),
            // "overmorgen" must match before the "over N dagen" pattern runs.
            fixed_phrases: &[("overmorgen", 2)],
            number_words: &[
                ("een", 1),
                ("twee", 2),
                ("drie", 3),
                ("vier", 4),
                ("vijf", 5),
                ("zes", 6),
                ("zeven", 7),
                ("acht", 8),
                ("negen", 9),
                ("tien", 10),
            ],
        },
        time: TimeWords {
            at: WordSet::One("om"),
            am: WordSet::One("am"),
            pm: WordSet::One("pm"),
            noon: WordSet::One("middag"),
            midnight: WordSet::One("middernacht"),
            hour: WordSet::One("uur"),
            day_parts: &[
                ("ochtend", (9, 0)),
                ("namiddag", (14, 0)),
                ("avond", (19, 0)),
                ("nacht", (21, 0)),
            ],
        },
        prepositions: &["de", "het"],
    }
}
