//! Parsing of host-issued command text.
//!
//! The host drives the resolver with a single textual command of the form
//! `Execute <CityName>`. The prefix match is case-insensitive; anything
//! else is rejected so the caller can log it and leave all state untouched.

use crate::constants::EXECUTE_PREFIX;

/// A validated host command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Resolve the named city and persist the result.
    Execute(String),
}

/// Why a piece of command text was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// No command text was supplied at all.
    Empty,
    /// Text did not match the `Execute <CityName>` shape.
    BadFormat,
}

impl CommandError {
    /// Message for the host's error log.
    pub fn message(&self) -> &'static str {
        match self {
            CommandError::Empty => "No arguments provided.",
            CommandError::BadFormat => "Invalid command format. Use 'Execute <CityName>'.",
        }
    }
}

/// Parse raw command text from the host.
///
/// Leading/trailing whitespace is trimmed before matching, and the city
/// name is trimmed after the prefix is stripped. A prefix with nothing
/// after it is a format error, not an empty-name execution.
pub fn parse(text: &str) -> Result<Command, CommandError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CommandError::Empty);
    }

    // get() avoids panicking on a non-char-boundary slice of multibyte input
    match text.get(..EXECUTE_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(EXECUTE_PREFIX) => {
            let city = text[EXECUTE_PREFIX.len()..].trim();
            if city.is_empty() {
                return Err(CommandError::BadFormat);
            }
            Ok(Command::Execute(city.to_string()))
        }
        _ => Err(CommandError::BadFormat),
    }
}
