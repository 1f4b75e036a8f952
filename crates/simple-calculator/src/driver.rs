//! Unified calculator driver
//!
//! Write the key sequence once, run it against any front end. The
//! `verify_*` routines below are the behavioural contract every driver
//! must satisfy; they panic on the first mismatch.

use thiserror::Error;

use crate::core::{ButtonAction, Calculator, Operation, PendingOperation};

/// Driver errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    /// A key in the sequence is not a keypad label
    #[error("no button labelled {0:?}")]
    UnknownButton(char),
}

/// Abstract driver trait for calculator interactions
pub trait CalculatorDriver {
    /// Presses one button
    fn press(&mut self, action: ButtonAction);

    /// Gets the display text
    fn display(&self) -> String;

    /// Gets the pending operation
    fn pending(&self) -> Option<PendingOperation>;

    /// Gets the text shown on failure
    fn error_marker(&self) -> String;

    /// Presses the button for each character of `keys`, skipping
    /// whitespace, so `"10 / 4 ="` is five presses
    fn press_keys(&mut self, keys: &str) -> Result<(), DriverError> {
        for c in keys.chars().filter(|c| !c.is_whitespace()) {
            let label = c.to_string();
            let action = ButtonAction::from_label(&label).ok_or(DriverError::UnknownButton(c))?;
            self.press(action);
        }
        Ok(())
    }

    /// Clears the calculator state
    fn clear(&mut self) {
        self.press(ButtonAction::Clear);
    }
}

impl CalculatorDriver for Calculator {
    fn press(&mut self, action: ButtonAction) {
        Calculator::press(self, action);
    }

    fn display(&self) -> String {
        Calculator::display(self).to_string()
    }

    fn pending(&self) -> Option<PendingOperation> {
        self.state().pending().cloned()
    }

    fn error_marker(&self) -> String {
        self.config().error_marker.clone()
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{ButtonAction, CalculatorDriver, PendingOperation};
    use crate::tui::CalculatorApp;

    /// TUI-specific driver wrapping the calculator app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, action: ButtonAction) {
            self.app.press(action);
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn pending(&self) -> Option<PendingOperation> {
            self.app.calculator().state().pending().cloned()
        }

        fn error_marker(&self) -> String {
            self.app.calculator().config().error_marker.clone()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified Test Specifications =====

#[allow(clippy::panic)]
fn enter<D: CalculatorDriver>(driver: &mut D, keys: &str) -> String {
    driver.clear();
    if let Err(err) = driver.press_keys(keys) {
        panic!("cannot enter {keys:?}: {err}");
    }
    driver.display()
}

/// Verifies digit and decimal point entry
pub fn verify_entry<D: CalculatorDriver>(driver: &mut D) {
    assert_eq!(enter(driver, "1 2 3"), "123");
    assert_eq!(enter(driver, "0 0 1"), "001");
    assert_eq!(enter(driver, "3 . 1 . 4"), "3.14");
    assert_eq!(enter(driver, ". . 5"), ".5");
}

/// Verifies the four binary operations
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    assert_eq!(enter(driver, "1 + 2 ="), "3");
    assert_eq!(enter(driver, "4 - 4 ="), "0");
    assert_eq!(enter(driver, "2 * 2.5 ="), "5");
    assert_eq!(enter(driver, "10 / 4 ="), "2.5");
    assert_eq!(enter(driver, "1 / 3 ="), "0.333333333333333");
    assert!(driver.pending().is_none());
}

/// Verifies division by zero leaves the pending operation in place
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    let marker = driver.error_marker();
    assert_eq!(enter(driver, "10 / 0 ="), marker);
    assert!(driver.pending().is_some());

    driver.press(ButtonAction::Equals);
    assert_eq!(driver.display(), marker);
    assert!(driver.pending().is_some());
}

/// Verifies square root results and failures
pub fn verify_square_root<D: CalculatorDriver>(driver: &mut D) {
    let marker = driver.error_marker();
    assert_eq!(enter(driver, "9 √"), "3");
    assert_eq!(enter(driver, "2 √"), "1.414213562373");
    assert_eq!(enter(driver, "0 √"), "0");
    assert_eq!(enter(driver, "√"), marker);
    assert_eq!(enter(driver, "0 - 4 = √"), marker);
}

/// Verifies operators on an empty display change nothing
pub fn verify_operator_on_empty_display<D: CalculatorDriver>(driver: &mut D) {
    enter(driver, "");
    driver.press(ButtonAction::Operator(Operation::Add));
    assert!(driver.pending().is_none());

    enter(driver, "8 *");
    let before = driver.pending();
    driver.press(ButtonAction::Operator(Operation::Subtract));
    assert_eq!(driver.pending(), before);
}

/// Verifies "C" resets everything
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    enter(driver, "5 / 0 =");
    driver.clear();
    assert_eq!(driver.display(), "");
    assert!(driver.pending().is_none());

    enter(driver, "1 2 +");
    driver.clear();
    assert_eq!(driver.display(), "");
    assert!(driver.pending().is_none());
}

/// Complete verification suite - runs all specifications
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) {
    verify_entry(driver);
    verify_basic_arithmetic(driver);
    verify_division_by_zero(driver);
    verify_square_root(driver);
    verify_operator_on_empty_display(driver);
    verify_clear(driver);
}
