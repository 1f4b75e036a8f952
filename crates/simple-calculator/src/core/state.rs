//! Calculator state machine
//!
//! [`CalculatorState`] is a plain value. Each handler borrows the current
//! state and returns the next one, so any sequence of presses can be
//! replayed deterministically without a front end.

use bigdecimal::BigDecimal;
use tracing::{debug, warn};

use crate::config::{CalculatorConfig, ConfigError};
use crate::core::{
    format_plain, newton_sqrt, parse_display, ButtonAction, CalcError, CalcResult, Operation,
};

/// Left operand and operator stored between an operator press and "="
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOperation {
    /// Value of the display when the operator was pressed
    pub operand: BigDecimal,
    /// Operator to apply on "="
    pub operator: Operation,
}

/// Display text plus the optional pending operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorState {
    display: String,
    pending: Option<PendingOperation>,
}

impl CalculatorState {
    /// Creates an idle state with an empty display
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state from its parts
    #[must_use]
    pub fn from_parts(display: impl Into<String>, pending: Option<PendingOperation>) -> Self {
        Self {
            display: display.into(),
            pending,
        }
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the pending operation, if any
    #[must_use]
    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    /// Returns true when nothing is typed and nothing is pending
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.display.is_empty() && self.pending.is_none()
    }

    /// Dispatches a button press to its handler
    #[must_use]
    pub fn apply(&self, action: ButtonAction, config: &CalculatorConfig) -> Self {
        match action {
            ButtonAction::Digit(d) => self.append_digit(d),
            ButtonAction::Decimal => self.append_decimal(),
            ButtonAction::Operator(op) => self.set_operator(op),
            ButtonAction::Equals => self.evaluate(config),
            ButtonAction::SquareRoot => self.square_root(config),
            ButtonAction::Clear => Self::new(),
        }
    }

    /// Appends a digit, unconditionally
    #[must_use]
    pub fn append_digit(&self, digit: u8) -> Self {
        let mut next = self.clone();
        if let Some(c) = char::from_digit(u32::from(digit), 10) {
            next.display.push(c);
        }
        next
    }

    /// Appends "." unless the display already holds one
    #[must_use]
    pub fn append_decimal(&self) -> Self {
        let mut next = self.clone();
        if !next.display.contains('.') {
            next.display.push('.');
        }
        next
    }

    /// Stores the display as the left operand of `operator`.
    ///
    /// An empty display leaves the state untouched, as does a display
    /// that does not read as a number.
    #[must_use]
    pub fn set_operator(&self, operator: Operation) -> Self {
        if self.display.is_empty() {
            return self.clone();
        }
        match parse_display(&self.display) {
            Ok(operand) => Self {
                display: String::new(),
                pending: Some(PendingOperation { operand, operator }),
            },
            Err(err) => {
                debug!(%err, %operator, "operator ignored");
                self.clone()
            }
        }
    }

    /// Resolves the pending operation against the display.
    ///
    /// Without a pending operation this is a no-op. On success the
    /// result replaces the display and the pending operation is
    /// consumed; on failure the error marker is shown and the pending
    /// operation stays.
    #[must_use]
    pub fn evaluate(&self, config: &CalculatorConfig) -> Self {
        let Some(pending) = &self.pending else {
            return self.clone();
        };
        match self.resolve(pending, config) {
            Ok(result) => Self {
                display: format_plain(&result),
                pending: None,
            },
            Err(err) => self.failed(&err, config),
        }
    }

    /// Replaces the display with its square root.
    ///
    /// The pending operation, if any, is kept either way.
    #[must_use]
    pub fn square_root(&self, config: &CalculatorConfig) -> Self {
        let root = parse_display(&self.display).and_then(|v| newton_sqrt(&v, config.sqrt_scale));
        match root {
            Ok(root) => Self {
                display: format_plain(&root),
                pending: self.pending.clone(),
            },
            Err(err) => self.failed(&err, config),
        }
    }

    fn resolve(
        &self,
        pending: &PendingOperation,
        config: &CalculatorConfig,
    ) -> CalcResult<BigDecimal> {
        let rhs = parse_display(&self.display)?;
        pending
            .operator
            .apply(&pending.operand, &rhs, config.division_scale)
    }

    fn failed(&self, err: &CalcError, config: &CalculatorConfig) -> Self {
        warn!(%err, display = %self.display, "evaluation failed");
        Self {
            display: config.error_marker.clone(),
            pending: self.pending.clone(),
        }
    }
}

/// Calculator owning its configuration and current state
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: CalculatorConfig,
    state: CalculatorState,
}

impl Calculator {
    /// Creates a calculator with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with a validated configuration
    pub fn with_config(config: CalculatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: CalculatorState::new(),
        })
    }

    /// Returns the configuration
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Returns true if the display shows the error marker
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.state.display() == self.config.error_marker
    }

    /// Handles one button press and returns the new display
    pub fn press(&mut self, action: ButtonAction) -> &str {
        self.state = self.state.apply(action, &self.config);
        debug!(%action, display = %self.state.display(), "button pressed");
        self.state.display()
    }

    /// Presses the button with the given label; unknown labels are ignored
    pub fn press_label(&mut self, label: &str) -> Option<&str> {
        let action = ButtonAction::from_label(label)?;
        Some(self.press(action))
    }

    /// Resets display and pending operation
    pub fn clear(&mut self) {
        self.press(ButtonAction::Clear);
    }
}
