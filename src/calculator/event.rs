//! Input events and the transition function that drives the engine.

use super::display::DisplayFormat;
use super::input::Digit;
use super::operation::Operation;
use super::readout::Readout;
use super::state::CalculatorState;
use std::fmt;
use tracing::debug;

/// A single key press from the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Digit(Digit),
    DecimalPoint,
    Operation(Operation),
    Equals,
    Clear,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{}", d),
            Self::DecimalPoint => write!(f, "."),
            Self::Operation(op) => write!(f, "{}", op),
            Self::Equals => write!(f, "="),
            Self::Clear => write!(f, "C"),
        }
    }
}

impl CalculatorState {
    /// Handle `event` in place.
    pub fn press(&mut self, event: Event) {
        match event {
            Event::Digit(d) => self.input_digit(d),
            Event::DecimalPoint => self.input_decimal_point(),
            Event::Operation(op) => self.perform_operation(op),
            Event::Equals => self.calculate(),
            Event::Clear => self.clear(),
        }
    }
}

/// Compute the state that follows `state` after `event`.
pub fn transition(state: &CalculatorState, event: Event) -> CalculatorState {
    let mut next = state.clone();
    next.press(event);
    next
}

/// Owns one calculator session and feeds it events one at a time.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    state: CalculatorState,
    format: DisplayFormat,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session rendering with a custom display format.
    pub fn with_format(format: DisplayFormat) -> Self {
        Self {
            state: CalculatorState::default(),
            format,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Apply a single event.
    pub fn press(&mut self, event: Event) {
        self.state = transition(&self.state, event);
        debug!(
            event = %event,
            display = %self.state.display(),
            phase = ?self.state.phase(),
            "Applied calculator event"
        );
    }

    /// Apply events in order.
    pub fn press_all(&mut self, events: impl IntoIterator<Item = Event>) {
        for event in events {
            self.press(event);
        }
    }

    /// Display text ready for rendering.
    pub fn formatted_display(&self) -> String {
        self.format.format(self.state.display())
    }

    pub fn readout(&self) -> Readout {
        Readout::new(&self.state, &self.format)
    }
}
