//! Keyboard and mouse input handling
//!
//! Maps terminal events onto keypad buttons.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::core::{ButtonAction, Operation};

/// Actions that can be triggered by terminal input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a keypad button
    Press(ButtonAction),
    /// Left click at a terminal cell
    Click {
        /// Column
        x: u16,
        /// Row
        y: u16,
    },
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps terminal events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => Self::map_char(c),
            KeyCode::Enter => KeyAction::Press(ButtonAction::Equals),
            KeyCode::Esc => KeyAction::Press(ButtonAction::Clear),
            _ => KeyAction::None,
        }
    }

    /// Maps a mouse event to an action; only left-button presses count
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent) -> KeyAction {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => KeyAction::Click {
                x: event.column,
                y: event.row,
            },
            _ => KeyAction::None,
        }
    }

    fn map_char(c: char) -> KeyAction {
        let action = match c {
            '0'..='9' => ButtonAction::Digit(c as u8 - b'0'),
            '.' => ButtonAction::Decimal,
            '=' => ButtonAction::Equals,
            'r' | 's' | '√' => ButtonAction::SquareRoot,
            'c' | 'C' => ButtonAction::Clear,
            'q' => return KeyAction::Quit,
            other => match Operation::from_symbol(other) {
                Some(op) => ButtonAction::Operator(op),
                None => return KeyAction::None,
            },
        };
        KeyAction::Press(action)
    }
}
