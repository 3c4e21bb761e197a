//! Turning typed text into calculator events.
//!
//! Lets text-driven hosts feed key sequences such as `12+3=` or `7 × 8 =`
//! to the engine.

use super::event::Event;
use super::input::Digit;
use super::operation::Operation;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// Matches the first character that is neither a calculator key nor
    /// whitespace.
    static ref UNKNOWN_KEY: Regex = Regex::new(
        r"[^0-9\s\.\+\-\*/xX×÷=cC]"
    ).unwrap();
}

/// A key sequence that could not be turned into events.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("no keys given")]
    Empty,
    #[error("unknown key '{key}' at position {position}")]
    UnknownKey { key: char, position: usize },
}

/// Map one key to its event.
pub fn parse_key(key: char) -> Option<Event> {
    if let Some(digit) = Digit::from_char(key) {
        return Some(Event::Digit(digit));
    }

    match key {
        '.' => Some(Event::DecimalPoint),
        '=' => Some(Event::Equals),
        'c' | 'C' => Some(Event::Clear),
        _ => Operation::from_key(key).map(Event::Operation),
    }
}

/// Parse a whole key sequence. Whitespace is ignored.
///
/// Fails on the first unknown key; `position` counts characters from zero.
pub fn parse_keys(input: &str) -> Result<Vec<Event>, KeyError> {
    if let Some(found) = UNKNOWN_KEY.find(input) {
        let key = found.as_str().chars().next().unwrap_or_default();
        let position = input[..found.start()].chars().count();
        return Err(KeyError::UnknownKey { key, position });
    }

    let events: Vec<Event> = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .filter_map(parse_key)
        .collect();

    if events.is_empty() {
        return Err(KeyError::Empty);
    }

    Ok(events)
}
