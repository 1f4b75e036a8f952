//! Simple Calculator - keypad arithmetic on exact decimals
//!
//! A numeric keypad, four operators, square root and a single-line
//! display. Every press is a pure transition over [`core::CalculatorState`],
//! so the whole behaviour is testable without a terminal; the optional
//! `tui` feature adds a `ratatui` front end on top.
//!
//! # Example
//!
//! ```rust
//! use simple_calculator::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for label in ["1", "0", "/", "4", "="] {
//!     calc.press_label(label);
//! }
//! assert_eq!(calc.display(), "2.5");
//!
//! calc.press(ButtonAction::Clear);
//! calc.press(ButtonAction::Digit(2));
//! assert_eq!(calc.press(ButtonAction::SquareRoot), "1.414213562373");
//! ```

#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod logging;
#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalculatorConfig, ConfigError};
    pub use crate::core::{
        ButtonAction, CalcError, CalcResult, Calculator, CalculatorState, Operation,
        PendingOperation,
    };
    pub use crate::driver::{CalculatorDriver, DriverError};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
