//! Four-function calculator engine.
//!
//! This module provides:
//! - The calculator state and its transitions (digits, decimal point,
//!   operators, equals, clear)
//! - Formatting of the display text for a fixed-width readout
//! - Parsing typed key sequences into events
//! - Copying results to the clipboard

mod clipboard;
mod display;
mod engine;
mod event;
mod input;
mod keys;
mod number;
mod operation;
mod readout;
mod state;

pub use clipboard::{ClipboardError, copy_result};
pub use display::{DisplayFormat, format_for_display};
pub use event::{Calculator, Event, transition};
pub use input::Digit;
pub use keys::{KeyError, parse_key, parse_keys};
pub use number::{parse_number, stringify};
pub use operation::Operation;
pub use readout::Readout;
pub use state::{CalculatorState, Pending, Phase};
