//! Fitting display text into a fixed-width readout.

use super::number::{parse_number, stringify, to_exponential};

/// Width and exponent settings for [`DisplayFormat::format`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayFormat {
    /// Longest text shown unchanged.
    pub max_width: usize,
    /// Fraction digits used when switching to exponent notation.
    pub exponent_digits: usize,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            max_width: 12,
            exponent_digits: 6,
        }
    }
}

impl DisplayFormat {
    /// Largest magnitude that still fits as plain digits (`999,999,999,999`
    /// for a width of 12).
    pub fn overflow_threshold(&self) -> f64 {
        10f64.powi(self.max_width.min(i32::MAX as usize) as i32) - 1.0
    }

    /// Shorten `raw` to fit the readout. Never touches calculator state.
    pub fn format(&self, raw: &str) -> String {
        if raw.chars().count() <= self.max_width {
            return raw.to_string();
        }

        let value = parse_number(raw);
        if value.abs() > self.overflow_threshold() {
            to_exponential(value, self.exponent_digits)
        } else {
            stringify(value).chars().take(self.max_width).collect()
        }
    }
}

/// Format `raw` with the default 12-character readout.
pub fn format_for_display(raw: &str) -> String {
    DisplayFormat::default().format(raw)
}
