//! TUI application state

use ratatui::layout::Rect;
use tracing::debug;

use super::input::KeyAction;
use super::keypad::Keypad;
use super::ui::CalculatorLayout;
use crate::config::{CalculatorConfig, ConfigError};
use crate::core::{format_plain, ButtonAction, Calculator};

/// Calculator application state
#[derive(Debug, Clone, Default)]
pub struct CalculatorApp {
    calculator: Calculator,
    keypad: Keypad,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator app with a custom configuration
    pub fn with_config(config: CalculatorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            calculator: Calculator::with_config(config)?,
            keypad: Keypad::new(),
            should_quit: false,
        })
    }

    /// Returns the underlying calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the keypad with its highlight state
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.calculator.display()
    }

    /// Returns the window title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.calculator.config().title
    }

    /// Returns true if the display shows the error marker
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.calculator.is_error()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses a button and highlights it on the keypad
    pub fn press(&mut self, action: ButtonAction) {
        self.keypad.highlight(action);
        self.calculator.press(action);
    }

    /// Resets the calculator and the keypad highlight
    pub fn clear(&mut self) {
        self.press(ButtonAction::Clear);
        self.keypad.release_all();
    }

    /// Applies an input action; `area` is the full terminal area, used
    /// to locate the keypad for mouse clicks
    pub fn handle(&mut self, action: KeyAction, area: Rect) {
        match action {
            KeyAction::Press(button) => self.press(button),
            KeyAction::Click { x, y } => self.click(x, y, area),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Presses the keypad button under a click, if any
    pub fn click(&mut self, x: u16, y: u16, area: Rect) {
        let keypad_area = CalculatorLayout::new(area).keypad;
        let action = self
            .keypad
            .hit_test(keypad_area, x, y)
            .and_then(|idx| self.keypad.get_button(idx))
            .map(|btn| btn.action);
        match action {
            Some(action) => self.press(action),
            None => debug!(x, y, "click outside keypad"),
        }
    }

    /// Describes the pending operation for the status line
    #[must_use]
    pub fn status(&self) -> String {
        match self.calculator.state().pending() {
            Some(pending) => format!("{} {}", format_plain(&pending.operand), pending.operator),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;

    fn press_all(app: &mut CalculatorApp, actions: &[ButtonAction]) {
        for action in actions {
            app.press(*action);
        }
    }

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::new();
        assert!(app.display().is_empty());
        assert!(!app.should_quit());
        assert!(app.keypad().pressed().is_none());
        assert_eq!(app.title(), "電卓");
    }

    #[test]
    fn test_app_with_config() {
        let config = CalculatorConfig::new().with_title("Calc");
        let app = CalculatorApp::with_config(config).unwrap();
        assert_eq!(app.title(), "Calc");
    }

    #[test]
    fn test_app_with_invalid_config() {
        let config = CalculatorConfig::new().with_error_marker("42");
        assert!(CalculatorApp::with_config(config).is_err());
    }

    #[test]
    fn test_press_updates_display_and_highlight() {
        let mut app = CalculatorApp::new();
        app.press(ButtonAction::Digit(8));
        assert_eq!(app.display(), "8");
        assert_eq!(app.keypad().pressed().unwrap().action, ButtonAction::Digit(8));
    }

    #[test]
    fn test_calculation() {
        let mut app = CalculatorApp::new();
        press_all(
            &mut app,
            &[
                ButtonAction::Digit(6),
                ButtonAction::Operator(Operation::Multiply),
                ButtonAction::Digit(7),
                ButtonAction::Equals,
            ],
        );
        assert_eq!(app.display(), "42");
        assert!(!app.is_error());
    }

    #[test]
    fn test_status_shows_pending() {
        let mut app = CalculatorApp::new();
        press_all(
            &mut app,
            &[
                ButtonAction::Digit(1),
                ButtonAction::Decimal,
                ButtonAction::Digit(5),
                ButtonAction::Operator(Operation::Subtract),
            ],
        );
        assert_eq!(app.status(), "1.5 -");
        app.press(ButtonAction::Clear);
        assert_eq!(app.status(), "");
    }

    #[test]
    fn test_error_state() {
        let mut app = CalculatorApp::new();
        press_all(
            &mut app,
            &[
                ButtonAction::Digit(1),
                ButtonAction::Operator(Operation::Divide),
                ButtonAction::Digit(0),
                ButtonAction::Equals,
            ],
        );
        assert!(app.is_error());
        assert_eq!(app.display(), "エラー");
    }

    #[test]
    fn test_clear_releases_keypad() {
        let mut app = CalculatorApp::new();
        app.press(ButtonAction::Digit(3));
        app.clear();
        assert!(app.display().is_empty());
        assert!(app.keypad().pressed().is_none());
    }

    #[test]
    fn test_handle_press_and_quit() {
        let mut app = CalculatorApp::new();
        let area = Rect::new(0, 0, 80, 24);
        app.handle(KeyAction::Press(ButtonAction::Digit(2)), area);
        app.handle(KeyAction::None, area);
        assert_eq!(app.display(), "2");
        app.handle(KeyAction::Quit, area);
        assert!(app.should_quit());
    }

    #[test]
    fn test_click_presses_keypad_button() {
        let mut app = CalculatorApp::new();
        let area = Rect::new(0, 0, 80, 24);
        let keypad_area = CalculatorLayout::new(area).keypad;
        // Top-left cell inside the keypad border is "7"
        app.handle(
            KeyAction::Click {
                x: keypad_area.x + 1,
                y: keypad_area.y + 1,
            },
            area,
        );
        assert_eq!(app.display(), "7");
    }

    #[test]
    fn test_click_outside_keypad_ignored() {
        let mut app = CalculatorApp::new();
        let area = Rect::new(0, 0, 80, 24);
        app.click(0, 0, area);
        assert!(app.display().is_empty());
        assert!(app.keypad().pressed().is_none());
    }
}
