//! Keypad grid for the TUI calculator
//!
//! Buttons can be clicked with the mouse, and the last pressed button
//! stays highlighted so keyboard input is visible on the grid.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{ButtonAction, Operation};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The action this button performs
    pub action: ButtonAction,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates an unpressed button
    #[must_use]
    pub const fn new(action: ButtonAction) -> Self {
        Self {
            action,
            pressed: false,
        }
    }

    /// Returns the label printed on the button
    #[must_use]
    pub fn label(&self) -> String {
        self.action.label()
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad layout - 18 buttons on a 5x4 grid
/// ```text
/// [ 7 ] [ 8 ] [ 9 ] [ / ]
/// [ 4 ] [ 5 ] [ 6 ] [ * ]
/// [ 1 ] [ 2 ] [ 3 ] [ - ]
/// [ 0 ] [ . ] [ = ] [ + ]
/// [ √ ] [ C ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order; the last row is partly empty
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        use ButtonAction::{Clear, Decimal, Digit, Equals, Operator, SquareRoot};

        let buttons = [
            // Row 1: 7 8 9 /
            Digit(7),
            Digit(8),
            Digit(9),
            Operator(Operation::Divide),
            // Row 2: 4 5 6 *
            Digit(4),
            Digit(5),
            Digit(6),
            Operator(Operation::Multiply),
            // Row 3: 1 2 3 -
            Digit(1),
            Digit(2),
            Digit(3),
            Operator(Operation::Subtract),
            // Row 4: 0 . = +
            Digit(0),
            Decimal,
            Equals,
            Operator(Operation::Add),
            // Row 5: √ C
            SquareRoot,
            Clear,
        ]
        .into_iter()
        .map(KeypadButton::new)
        .collect();

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds the button performing an action
    #[must_use]
    pub fn find_button(&self, action: ButtonAction) -> Option<usize> {
        self.buttons.iter().position(|b| b.action == action)
    }

    /// Highlights the button for `action`, releasing all others
    pub fn highlight(&mut self, action: ButtonAction) {
        self.release_all();
        if let Some(idx) = self.find_button(action) {
            self.buttons[idx].set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Returns the highlighted button, if any
    #[must_use]
    pub fn pressed(&self) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.pressed)
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Size of one grid cell inside `inner`, or `None` if the grid does not fit
    fn cell_size(&self, inner: Rect) -> Option<(u16, u16)> {
        let cols = u16::try_from(self.cols).ok()?;
        let rows = u16::try_from(self.rows).ok()?;
        let size = (inner.width / cols, inner.height / rows);
        (size.0 > 0 && size.1 > 0).then_some(size)
    }

    /// Converts a click position inside the bordered `area` to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        let inner = frame().inner(area);
        if !inner.contains(Position::new(x, y)) {
            return None;
        }
        let (width, height) = self.cell_size(inner)?;

        let col = usize::from((x - inner.x) / width);
        let row = usize::from((y - inner.y) / height);
        if row >= self.rows || col >= self.cols {
            return None;
        }

        // Trailing cells of the last row hold no button
        let index = row * self.cols + col;
        (index < self.buttons.len()).then_some(index)
    }
}

fn frame() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

fn button_style(btn: &KeypadButton) -> Style {
    if btn.pressed {
        return Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
    }
    let color = match btn.action {
        ButtonAction::Digit(_) | ButtonAction::Decimal => Color::White,
        ButtonAction::Operator(_) => Color::Yellow,
        ButtonAction::Equals => Color::Green,
        ButtonAction::SquareRoot => Color::Magenta,
        ButtonAction::Clear => Color::Red,
    };
    Style::default().fg(color)
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = frame();
        let inner = block.inner(area);
        block.render(area, buf);

        let Some((width, height)) = self.keypad.cell_size(inner) else {
            return;
        };
        if width < 3 {
            return;
        }

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let (Ok(row), Ok(col)) = (u16::try_from(row), u16::try_from(col)) else {
                continue;
            };
            let label = format!("[{}]", btn.label());
            let label_width = u16::try_from(label.chars().count()).unwrap_or(width);
            let x = inner.x + col * width + width.saturating_sub(label_width) / 2;
            let y = inner.y + row * height + height / 2;
            buf.set_span(x, y, &Span::styled(label, button_style(btn)), width);
        }
    }
}
