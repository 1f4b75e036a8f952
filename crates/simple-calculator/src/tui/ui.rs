//! TUI rendering
//!
//! The window is a single titled frame holding the right-aligned
//! display, a status line with the pending operation, the keypad and a
//! one-line key legend.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Key legend shown under the keypad
pub const HELP_LINE: &str = "0-9 . + - * /   = Enter   √ r   C Esc   q quit";

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Screen regions, derived from the terminal area alone so input
/// handling can locate the keypad without a rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorLayout {
    /// Bordered display
    pub display: Rect,
    /// Pending operation line
    pub status: Rect,
    /// Bordered keypad grid
    pub keypad: Rect,
    /// Key legend
    pub help: Rect,
}

impl CalculatorLayout {
    /// Splits the full terminal area
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Display
                Constraint::Length(1), // Status
                Constraint::Min(7),    // Keypad
                Constraint::Length(1), // Help
            ])
            .split(area);

        Self {
            display: chunks[0],
            status: chunks[1],
            keypad: chunks[2],
            help: chunks[3],
        }
    }
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.app.is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(self.app.display(), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            self.app.status(),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Right)
        .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(HELP_LINE, Style::default().fg(Color::Gray)))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(format!(" {} ", self.app.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let layout = CalculatorLayout::new(area);
        self.render_display(layout.display, buf);
        self.render_status(layout.status, buf);
        KeypadWidget::new(self.app.keypad()).render(layout.keypad, buf);
        self.render_help(layout.help, buf);
    }
}
