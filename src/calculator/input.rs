//! Building the current operand from digit and decimal-point keys.

use super::state::CalculatorState;
use std::fmt;

/// A single decimal digit, `0` through `9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    /// Create a digit from its numeric value. Returns `None` above 9.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl CalculatorState {
    /// Append a digit to the operand, or start a new one.
    ///
    /// A lone `0` is replaced rather than extended.
    pub fn input_digit(&mut self, digit: Digit) {
        if self.waiting_for_new_value {
            self.display = digit.to_string();
            self.waiting_for_new_value = false;
        } else if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(digit.as_char());
        }
    }

    /// Add a decimal point. At most one is ever present.
    pub fn input_decimal_point(&mut self) {
        if self.waiting_for_new_value {
            self.display = "0.".to_string();
            self.waiting_for_new_value = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }
}
