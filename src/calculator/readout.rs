//! Render-ready snapshot of a calculator session.

use super::display::DisplayFormat;
use super::number::stringify;
use super::state::{CalculatorState, Phase};
use serde::Serialize;

/// What a host shows for the current state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Readout {
    /// Display text shortened to the readout width.
    pub display: String,
    /// Display text exactly as the engine holds it.
    pub raw: String,
    /// The left operand and operator still waiting, e.g. `"5 +"`.
    pub pending: Option<String>,
    pub phase: Phase,
}

impl Readout {
    pub fn new(state: &CalculatorState, format: &DisplayFormat) -> Self {
        Self {
            display: format.format(state.display()),
            raw: state.display().to_string(),
            pending: state
                .pending()
                .map(|p| format!("{} {}", stringify(p.value), p.operation)),
            phase: state.phase(),
        }
    }

    /// Text to put on the clipboard: the full-precision value, not the
    /// shortened readout.
    pub fn text_for_clipboard(&self) -> &str {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Digit, Operation};

    #[test]
    fn test_idle_readout() {
        let readout = Readout::new(&CalculatorState::new(), &DisplayFormat::default());
        assert_eq!(readout.display, "0");
        assert_eq!(readout.pending, None);
        assert_eq!(readout.phase, Phase::Idle);
    }

    #[test]
    fn test_pending_hint() {
        let mut state = CalculatorState::new();
        state.input_digit(Digit::new(5).unwrap());
        state.perform_operation(Operation::Add);
        let readout = Readout::new(&state, &DisplayFormat::default());
        assert_eq!(readout.pending.as_deref(), Some("5 +"));
        assert_eq!(readout.phase, Phase::PendingOperator);
    }

    #[test]
    fn test_clipboard_keeps_full_precision() {
        let mut state = CalculatorState::new();
        state.input_decimal_point();
        state.input_digit(Digit::new(1).unwrap());
        state.perform_operation(Operation::Add);
        state.input_decimal_point();
        state.input_digit(Digit::new(2).unwrap());
        state.calculate();

        let readout = Readout::new(&state, &DisplayFormat::default());
        assert_eq!(readout.display, "0.3000000000");
        assert_eq!(readout.text_for_clipboard(), "0.30000000000000004");
    }

    #[test]
    fn test_serializes_to_json() {
        let readout = Readout::new(&CalculatorState::new(), &DisplayFormat::default());
        let json = serde_json::to_value(&readout).unwrap();
        assert_eq!(json["display"], "0");
        assert_eq!(json["phase"], "idle");
        assert!(json["pending"].is_null());
    }
}
