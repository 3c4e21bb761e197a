//! Operator chaining and evaluation.

use super::number::{parse_number, stringify};
use super::operation::Operation;
use super::state::{CalculatorState, Pending};

impl CalculatorState {
    /// Select an operator.
    ///
    /// From idle the display becomes the left operand. Right after another
    /// operator the pending one is replaced without computing anything.
    /// Otherwise the pending operation is applied first and its result
    /// becomes the new left operand.
    pub fn perform_operation(&mut self, operation: Operation) {
        let operand = parse_number(&self.display);

        match self.pending {
            None => {
                self.pending = Some(Pending {
                    value: operand,
                    operation,
                });
            }
            Some(pending) if self.waiting_for_new_value => {
                self.pending = Some(Pending {
                    operation,
                    ..pending
                });
            }
            Some(pending) => {
                let result = pending.operation.apply(pending.value, operand);
                self.display = stringify(result);
                self.pending = Some(Pending {
                    value: result,
                    operation,
                });
            }
        }

        self.waiting_for_new_value = true;
    }

    /// Resolve the pending operation ("equals").
    ///
    /// Does nothing when no operation is pending.
    pub fn calculate(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        let operand = parse_number(&self.display);
        let result = pending.operation.apply(pending.value, operand);
        self.display = stringify(result);
        self.waiting_for_new_value = true;
    }

    /// Reset to the initial state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
