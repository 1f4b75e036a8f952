//! Calculator configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::parse_display;

/// Default window title
pub const DEFAULT_TITLE: &str = "電卓";

/// Default text shown in place of a failed result
pub const DEFAULT_ERROR_MARKER: &str = "エラー";

/// Fractional digits kept by division
pub const DEFAULT_DIVISION_SCALE: u32 = 15;

/// Fractional digits computed by square root
pub const DEFAULT_SQRT_SCALE: u32 = 12;

/// Largest scale accepted for division and square root
pub const MAX_SCALE: u32 = 1000;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A scale is beyond [`MAX_SCALE`]
    #[error("{field} must be at most {max}, got {scale}", max = MAX_SCALE)]
    ScaleTooLarge {
        /// Offending field
        field: &'static str,
        /// Requested scale
        scale: u32,
    },

    /// The error marker is empty
    #[error("error marker must not be empty")]
    EmptyErrorMarker,

    /// The error marker would read back as a number
    #[error("error marker {0:?} parses as a number")]
    NumericErrorMarker(String),
}

/// Calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Title shown around the calculator
    pub title: String,
    /// Text displayed when an evaluation fails
    pub error_marker: String,
    /// Fractional digits kept by division
    pub division_scale: u32,
    /// Fractional digits computed by square root
    pub sqrt_scale: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            error_marker: DEFAULT_ERROR_MARKER.to_string(),
            division_scale: DEFAULT_DIVISION_SCALE,
            sqrt_scale: DEFAULT_SQRT_SCALE,
        }
    }
}

impl CalculatorConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the error marker
    #[must_use]
    pub fn with_error_marker(mut self, marker: impl Into<String>) -> Self {
        self.error_marker = marker.into();
        self
    }

    /// Set the division scale
    #[must_use]
    pub const fn with_division_scale(mut self, scale: u32) -> Self {
        self.division_scale = scale;
        self
    }

    /// Set the square root scale
    #[must_use]
    pub const fn with_sqrt_scale(mut self, scale: u32) -> Self {
        self.sqrt_scale = scale;
        self
    }

    /// Checks the configuration can drive a calculator
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, scale) in [
            ("division_scale", self.division_scale),
            ("sqrt_scale", self.sqrt_scale),
        ] {
            if scale > MAX_SCALE {
                return Err(ConfigError::ScaleTooLarge { field, scale });
            }
        }
        if self.error_marker.is_empty() {
            return Err(ConfigError::EmptyErrorMarker);
        }
        if parse_display(&self.error_marker).is_ok() {
            return Err(ConfigError::NumericErrorMarker(self.error_marker.clone()));
        }
        Ok(())
    }
}
