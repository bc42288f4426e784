use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use test_case::test_case;
use waketime::{parse_time, parse_with_reference, profile_for};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

// 2024-06-01 is a Saturday.
fn reference() -> NaiveDateTime {
    date(2024, 6, 1).and_hms_opt(10, 0, 0).unwrap()
}

#[test_case("overmorgen om 9", "nl", date(2024, 6, 3), time(9, 0); "dutch overmorgen")]
#[test_case("morgen om 7:30", "nl", date(2024, 6, 2), time(7, 30); "dutch tomorrow")]
#[test_case("vandaag om 21:00", "nl", date(2024, 6, 1), time(21, 0); "dutch today")]
#[test_case("over 2 dagen om 8", "nl", date(2024, 6, 3), time(8, 0); "dutch in two days")]
#[test_case("volgende maandag om 6", "nl", date(2024, 6, 3), time(6, 0); "dutch next monday")]
#[test_case("op vrijdag om 12", "nl", date(2024, 6, 7), time(12, 0); "dutch on friday")]
#[test_case("5 januari om 14:30", "nl", date(2025, 1, 5), time(14, 30); "dutch january fifth")]
#[test_case("übermorgen um 9", "de", date(2024, 6, 3), time(9, 0); "german uebermorgen")]
#[test_case("morgen um 7", "de", date(2024, 6, 2), time(7, 0); "german tomorrow")]
#[test_case("am montag um 8", "de", date(2024, 6, 3), time(8, 0); "german on monday")]
#[test_case("in drei tagen um 9", "de", date(2024, 6, 4), time(9, 0); "german in three days")]
#[test_case("24. dezember um 18:00", "de", date(2024, 12, 24), time(18, 0); "german christmas eve")]
#[test_case("demain à 9", "fr", date(2024, 6, 2), time(9, 0); "french tomorrow")]
#[test_case("après-demain à 14h30", "fr", date(2024, 6, 3), time(14, 30); "french after tomorrow")]
#[test_case("lundi à 8", "fr", date(2024, 6, 3), time(8, 0); "french monday")]
#[test_case("dans 2 jours à 7", "fr", date(2024, 6, 3), time(7, 0); "french in two days")]
#[test_case("mañana a las 8", "es", date(2024, 6, 2), time(8, 0); "spanish tomorrow")]
#[test_case("pasado mañana a las 9:15", "es", date(2024, 6, 3), time(9, 15); "spanish after tomorrow")]
#[test_case("el lunes a las 7", "es", date(2024, 6, 3), time(7, 0); "spanish on monday")]
#[test_case("en 2 días a las 10", "es", date(2024, 6, 3), time(10, 0); "spanish in two days")]
fn test_multilingual_expressions(input: &str, lang: &str, expected_date: NaiveDate, expected_time: NaiveTime) {
    let profile = profile_for(lang);
    let outcome = parse_with_reference(input, profile, reference()).unwrap();
    assert_eq!(outcome.date, expected_date, "Failed for input: {}", input);
    assert_eq!(outcome.time, expected_time, "Failed for input: {}", input);
}

#[test_case("morgen", "nl", date(2024, 6, 2); "dutch bare tomorrow")]
#[test_case("overmorgen", "nl", date(2024, 6, 3); "dutch bare overmorgen")]
#[test_case("heute", "de", date(2024, 6, 1); "german today")]
#[test_case("aujourd'hui", "fr", date(2024, 6, 1); "french today")]
#[test_case("hoy", "es", date(2024, 6, 1); "spanish today")]
#[test_case("zondag", "nl", date(2024, 6, 2); "dutch sunday")]
#[test_case("dimanche", "fr", date(2024, 6, 2); "french sunday")]
fn test_multilingual_date_only(input: &str, lang: &str, expected_date: NaiveDate) {
    let profile = profile_for(lang);
    let outcome = parse_with_reference(input, profile, reference()).unwrap();
    assert_eq!(outcome.date, expected_date, "Failed for input: {}", input);
}

#[test]
fn test_time_only_entry_point() {
    assert_eq!(parse_time("19:30", "en"), Ok(time(19, 30)));
    assert_eq!(parse_time("19:30:45", "en"), Ok(NaiveTime::from_hms_opt(19, 30, 45).unwrap()));
    assert_eq!(parse_time("7pm", "en"), Ok(time(19, 0)));
    assert_eq!(parse_time("9 uur", "nl"), Ok(time(9, 0)));
    assert_eq!(parse_time("middernacht", "nl"), Ok(time(0, 0)));
    assert_eq!(parse_time("14h30", "fr"), Ok(time(14, 30)));
    assert_eq!(parse_time("midi", "fr"), Ok(time(12, 0)));
    assert!(parse_time("25:00", "en").is_err());
    assert!(parse_time("", "en").is_err());
}

#[test]
fn test_named_times_per_language() {
    let cases = vec![
        ("middag", "nl", time(12, 0)),
        ("mittag", "de", time(12, 0)),
        ("mitternacht", "de", time(0, 0)),
        ("mediodia", "es", time(12, 0)),
        ("medianoche", "es", time(0, 0)),
        ("minuit", "fr", time(0, 0)),
    ];
    for (input, lang, expected) in cases {
        assert_eq!(parse_time(input, lang), Ok(expected), "Failed for input: {}", input);
    }
}
