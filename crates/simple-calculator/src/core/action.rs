//! Button actions - the closed set of inputs the calculator accepts

use crate::core::Operation;

/// Square root button label
pub const SQRT_LABEL: &str = "√";

/// Actions that keypad buttons can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Append a digit (0-9)
    Digit(u8),
    /// Append a decimal point
    Decimal,
    /// Store the display as the left operand of an operation
    Operator(Operation),
    /// Resolve the pending operation
    Equals,
    /// Replace the display with its square root
    SquareRoot,
    /// Reset display and pending operation
    Clear,
}

impl ButtonAction {
    /// Returns the label shown on the button
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".into(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".into(),
            Self::SquareRoot => SQRT_LABEL.into(),
            Self::Clear => "C".into(),
        }
    }

    /// Maps a button label back to its action
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let mut chars = label.chars();
        let first = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match first {
            '0'..='9' => Some(Self::Digit(first as u8 - b'0')),
            '.' => Some(Self::Decimal),
            '=' => Some(Self::Equals),
            '√' => Some(Self::SquareRoot),
            'C' => Some(Self::Clear),
            other => Operation::from_symbol(other).map(Self::Operator),
        }
    }

    /// Returns true if this action only edits the display text
    #[must_use]
    pub const fn is_entry(&self) -> bool {
        matches!(self, Self::Digit(_) | Self::Decimal)
    }
}

impl std::fmt::Display for ButtonAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}
