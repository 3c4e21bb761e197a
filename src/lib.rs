pub mod calculator;
pub mod config;

pub use calculator::{Calculator, CalculatorState, Event, Operation, format_for_display};
pub use config::Config;
