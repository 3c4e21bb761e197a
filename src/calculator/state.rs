//! The calculator's single state record.

use super::operation::Operation;
use serde::Serialize;

/// A left operand together with the operator waiting to be applied to it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Pending {
    /// Accumulated result of the chain so far.
    pub value: f64,
    /// Operator to apply once the next operand is known.
    pub operation: Operation,
}

/// Which of the engine's states a [`CalculatorState`] is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Nothing pending.
    Idle,
    /// An operator was just chosen; the next digit starts a new operand.
    PendingOperator,
    /// Digits are being entered for the right-hand operand.
    Accumulating,
}

/// Display text, pending operation and the "fresh operand" flag.
///
/// The previous value and the operator only ever exist together, so they
/// are stored as one optional [`Pending`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalculatorState {
    pub(crate) display: String,
    pub(crate) pending: Option<Pending>,
    pub(crate) waiting_for_new_value: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            pending: None,
            waiting_for_new_value: false,
        }
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw text of the operand being entered or the last result.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    /// Accumulated value of the chain, if an operation is pending.
    pub fn previous_value(&self) -> Option<f64> {
        self.pending.map(|p| p.value)
    }

    /// The operator awaiting its second operand.
    pub fn operation(&self) -> Option<Operation> {
        self.pending.map(|p| p.operation)
    }

    /// True right after an operator or equals press.
    pub fn is_waiting_for_new_value(&self) -> bool {
        self.waiting_for_new_value
    }

    pub fn phase(&self) -> Phase {
        match (self.pending, self.waiting_for_new_value) {
            (None, _) => Phase::Idle,
            (Some(_), true) => Phase::PendingOperator,
            (Some(_), false) => Phase::Accumulating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = CalculatorState::new();
        assert_eq!(state.display(), "0");
        assert_eq!(state.previous_value(), None);
        assert_eq!(state.operation(), None);
        assert!(!state.is_waiting_for_new_value());
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_phase_from_fields() {
        let mut state = CalculatorState::new();
        state.pending = Some(Pending {
            value: 5.0,
            operation: Operation::Add,
        });
        state.waiting_for_new_value = true;
        assert_eq!(state.phase(), Phase::PendingOperator);

        state.waiting_for_new_value = false;
        assert_eq!(state.phase(), Phase::Accumulating);
    }
}
