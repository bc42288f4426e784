//! waketime: multilingual natural language date/time parsing for alarm
//! clock style expressions.
//!
//! Given a free-form string like "7pm", "overmorgen om 9" or
//! "5 january at 14:30" and a language code, the parser resolves a concrete
//! (date, time) pair. Vocabularies are per-language [`LanguageProfile`]
//! bundles; unknown language codes fall back to English.

pub mod config;
pub mod error;
pub mod language;
pub mod parser;

pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

// Re-export commonly used types
pub use config::Config;
pub use error::ParseError;
pub use language::{profile_for, supported_languages, LanguageProfile, WordSet};
pub use parser::{parse, parse_datetime, parse_time, parse_with_reference, ParseOutcome};
