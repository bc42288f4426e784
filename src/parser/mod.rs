//! Natural language date/time parsing
//!
//! The entry points here take a free-form user string plus a language code
//! and resolve a concrete (date, time) pair. A pure time expression ("7pm")
//! is tried against the whole input first; anything else is split into a
//! date fragment and an optional time fragment which the resolvers handle
//! separately. Recovery is local wherever a sensible default exists: a
//! missing or unparseable time never fails a recognized date, and a
//! time-only clause with leading noise still resolves against today.

pub mod date_resolver;
pub mod normalizer;
pub mod time_resolver;

use crate::error::ParseError;
use crate::language::{self, LanguageProfile};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use log::debug;
use serde::Serialize;

/// A resolved (date, time) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParseOutcome {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl ParseOutcome {
    pub fn datetime(&self) -> NaiveDateTime {
        NaiveDateTime::new(self.date, self.time)
    }
}

/// Parse a free-form date/time expression in the given language.
///
/// The language code may be a bare code ("nl") or a full locale ("nl-NL");
/// unknown codes fall back to English. The reference "now" is read once at
/// the start of the call.
pub fn parse(raw_text: &str, language_code: &str) -> Result<ParseOutcome, ParseError> {
    let profile = language::profile_for(language_code);
    parse_with_reference(raw_text, profile, Local::now().naive_local())
}

/// Parse a time-only expression ("19:30", "7pm", "9 uur") to a time of day.
pub fn parse_time(raw_text: &str, language_code: &str) -> Result<NaiveTime, ParseError> {
    let profile = language::profile_for(language_code);
    let trimmed = raw_text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    time_resolver::resolve_time_fragment(trimmed, profile)
}

/// Parse a date/time expression and combine the pair into a `NaiveDateTime`.
pub fn parse_datetime(raw_text: &str, language_code: &str) -> Result<NaiveDateTime, ParseError> {
    parse(raw_text, language_code).map(|outcome| outcome.datetime())
}

/// Parse against an explicit reference point instead of the wall clock.
///
/// All relative computations within the call use this single snapshot, so
/// results are reproducible in tests and stable across midnight.
pub fn parse_with_reference(
    raw_text: &str,
    profile: &LanguageProfile,
    reference: NaiveDateTime,
) -> Result<ParseOutcome, ParseError> {
    let trimmed = raw_text.trim().to_lowercase();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let reference_date = reference.date();

    // A pure time expression needs no date arithmetic at all.
    if let Ok(time) = time_resolver::resolve_time_fragment(&trimmed, profile) {
        debug!("Whole input '{}' parsed as a time expression", raw_text);
        return Ok(ParseOutcome { date: reference_date, time });
    }

    let (date_fragment, time_fragment) = normalizer::normalize_and_split(raw_text, profile);
    if date_fragment.is_empty() && time_fragment.is_none() {
        return Err(ParseError::EmptyInput);
    }

    let date = match date_resolver::resolve_date(&date_fragment, profile, reference_date) {
        Ok(date) => date,
        Err(err) => {
            // A recognized time clause with an unparseable date part means
            // the user gave only a time with leading noise: assume today.
            if time_fragment.is_some() {
                debug!(
                    "Date fragment '{}' did not parse ({}), assuming today",
                    date_fragment, err
                );
                reference_date
            } else {
                return Err(err);
            }
        }
    };

    let time = match &time_fragment {
        Some(fragment) => time_resolver::resolve_time_fragment(fragment, profile)
            .unwrap_or_else(|_| default_time(date, reference)),
        // No separator was found; the date fragment itself may still be a
        // time-looking string, otherwise apply the default.
        None => time_resolver::resolve_time_fragment(&date_fragment, profile)
            .unwrap_or_else(|_| default_time(date, reference)),
    };

    Ok(ParseOutcome { date, time })
}

/// Default time for a date without a usable time component: midnight for a
/// future date, the current time when the date is today (a midnight alarm
/// for today would already lie in the past).
fn default_time(date: NaiveDate, reference: NaiveDateTime) -> NaiveTime {
    if date == reference.date() {
        reference.time()
    } else {
        NaiveTime::MIN
    }
}
