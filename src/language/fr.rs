//! French vocabulary.

use super::{LanguageProfile, RelativeWords, TimeWords, WordSet};

pub(super) fn profile() -> LanguageProfile {
    LanguageProfile {
        code: "fr",
        weekdays: [
            "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
        ],
        months: [
            "janvier",
            "février",
            "mars",
            "avril",
            "mai",
            "juin",
            "juillet",
            "août",
            "septembre",
            "octobre",
            "novembre",
            "décembre",
        ],
        relative: RelativeWords {
            today: WordSet::One("aujourd'hui"),
            tomorrow: WordSet::One("demain"),
            in_word: WordSet::One("dans"),
            day: WordSet::Many(&["jours", "jour"]),
            week: WordSet::Many(&["semaines", "semaine"]),
            next: WordSet::Many(&["prochain", "prochaine"]),
            on: WordSet::One("le"),
            fixed_phrases: &[("après-demain", 2), ("apres-demain", 2), ("après demain", 2)],
            number_words: &[
                ("un", 1),
                ("une", 1),
                ("deux", 2),
                ("trois", 3),
                ("quatre", 4),
                ("cinq", 5),
                ("six", 6),
                ("sept", 7),
                ("huit", 8),
                ("neuf", 9),
                ("dix", 10),
            ],
        },
        time: TimeWords {
            at: WordSet::Many(&["à", "a"]),
            am: WordSet::One("am"),
            pm: WordSet::One("pm"),
            noon: WordSet::One("midi"),
            midnight: WordSet::One("minuit"),
            // "14h30" survives as digits once the standalone "h" is removed.
            hour: WordSet::Many(&["heures", "heure", "h"]),
            day_parts: &[
                ("matin", (9, 0)),
                ("après-midi", (14, 0)),
                ("apres-midi", (14, 0)),
                ("soir", (19, 0)),
                ("nuit", (21, 0)),
            ],
        },
        prepositions: &["les"],
    }
}
