//! Terminal keypad calculator
//!
//! ```bash
//! simple-calculator                       # default title and error marker
//! simple-calculator --error-marker Error  # ASCII error marker
//! SIMPLE_CALCULATOR_LOG=calc.log RUST_LOG=debug simple-calculator
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use simple_calculator::config::{
    CalculatorConfig, DEFAULT_DIVISION_SCALE, DEFAULT_ERROR_MARKER, DEFAULT_SQRT_SCALE,
    DEFAULT_TITLE,
};
use simple_calculator::logging::init_tracing;
use simple_calculator::tui::{render, CalculatorApp, InputHandler, KeyAction};
use tracing::info;

/// Keypad calculator with exact decimal arithmetic
#[derive(Debug, Parser)]
#[command(name = "simple-calculator", version, about)]
struct Cli {
    /// Title shown on the window frame
    #[arg(long, env = "SIMPLE_CALCULATOR_TITLE", default_value = DEFAULT_TITLE)]
    title: String,

    /// Text displayed when a calculation fails
    #[arg(long, env = "SIMPLE_CALCULATOR_ERROR_MARKER", default_value = DEFAULT_ERROR_MARKER)]
    error_marker: String,

    /// Fractional digits kept by division
    #[arg(long, default_value_t = DEFAULT_DIVISION_SCALE)]
    division_scale: u32,

    /// Fractional digits computed by square root
    #[arg(long, default_value_t = DEFAULT_SQRT_SCALE)]
    sqrt_scale: u32,
}

impl Cli {
    fn config(&self) -> CalculatorConfig {
        CalculatorConfig::new()
            .with_title(self.title.clone())
            .with_error_marker(self.error_marker.clone())
            .with_division_scale(self.division_scale)
            .with_sqrt_scale(self.sqrt_scale)
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let app = CalculatorApp::with_config(cli.config())?;
    init_tracing()?;
    info!(title = %app.title(), "starting calculator");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: CalculatorApp,
) -> Result<(), Box<dyn std::error::Error>> {
    let input_handler = InputHandler::new();

    while !app.should_quit() {
        terminal.draw(|f| render(&app, f))?;

        let action = match event::read()? {
            Event::Key(key) => input_handler.handle_key(key),
            Event::Mouse(mouse) => input_handler.handle_mouse(mouse),
            _ => KeyAction::None,
        };
        let size = terminal.size()?;
        app.handle(action, Rect::new(0, 0, size.width, size.height));
    }

    info!("calculator closed");
    Ok(())
}
