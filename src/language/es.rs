//! Spanish vocabulary.

use super::{LanguageProfile, RelativeWords, TimeWords, WordSet};

pub(super) fn profile() -> LanguageProfile {
    LanguageProfile {
        code: "es",
        weekdays: [
            "lunes",
            "martes",
            "miércoles",
            "jueves",
            "viernes",
            "sábado",
            "domingo",
        ],
        months: [
            "enero",
            "febrero",
            "marzo",
            "abril",
            "mayo",
            "junio",
            "julio",
            "agosto",
            "septiembre",
            "octubre",
            "noviembre",
            "diciembre",
        ],
        relative: RelativeWords {
            today: WordSet::One("hoy"),
            tomorrow: WordSet::One("mañana"),
            in_word: WordSet::One("en"),
            day: WordSet::Many(&["días", "dias", "día", "dia"]),
            week: WordSet::Many(&["semanas", "semana"]),
            next: WordSet::Many(&["próximo", "proximo"]),
            on: WordSet::One("el"),
            fixed_phrases: &[("pasado mañana", 2), ("pasado manana", 2)],
            number_words: &[
                ("un", 1),
                ("uno", 1),
                ("una", 1),
                ("dos", 2),
                ("tres", 3),
                ("cuatro", 4),
                ("cinco", 5),
                ("seis", 6),
                ("siete", 7),
                ("ocho", 8),
                ("nueve", 9),
                ("diez", 10),
            ],
        },
        time: TimeWords {
            at: WordSet::Many(&["a las", "a la", "a"]),
            am: WordSet::One("am"),
            pm: WordSet::One("pm"),
            noon: WordSet::Many(&["mediodía", "mediodia"]),
            midnight: WordSet::One("medianoche"),
            hour: WordSet::Many(&["horas", "hora"]),
            day_parts: &[("tarde", (14, 0)), ("noche", (21, 0))],
        },
        prepositions: &[],
    }
}
