//! Core calculator logic, independent of any front end
//!
//! Every button press is a pure transition over [`CalculatorState`]:
//! the state goes in by reference and a new state comes out.

pub mod action;
pub mod format;
mod operations;
pub mod sqrt;
pub mod state;

pub use action::ButtonAction;
pub use format::{format_plain, parse_display};
pub use operations::Operation;
pub use sqrt::newton_sqrt;
pub use state::{Calculator, CalculatorState, PendingOperation};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types - exhaustive enum ensures all cases handled
///
/// None of these ever leave a button handler: they are logged and shown
/// as the configured error marker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by exact zero
    #[error("Division by zero")]
    DivisionByZero,
    /// Display text is not a decimal number
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),
    /// Display was empty where an operand was required
    #[error("Empty operand")]
    EmptyOperand,
    /// Intermediate value could not be represented (NaN seed and the like)
    #[error("Invalid result: {0}")]
    InvalidResult(String),
}
