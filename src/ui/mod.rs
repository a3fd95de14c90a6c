//! Interactive terminal calculator: edits re-run the pricing engine on every keystroke.

pub mod app;
pub mod components;

pub use app::CalculatorApp;

use crate::billing::PricingEngine;
use crate::config::Config;
use app::NotificationKind;
use components::{BreakdownComponent, ComparisonPopup, FormComponent, SummaryPopup};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io;

const HELP_TEXT: &str =
    "↑/↓: Navigate  0-9/Backspace: Edit  Space: Toggle model  c: Compare  e: Export  r: Reset  q: Quit";

/// Run the interactive calculator until the user quits
pub fn run_calculator(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = CalculatorApp::new(
        PricingEngine::new(config.rates),
        config.defaults,
        config.export.clone(),
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, &mut app);

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut CalculatorApp,
) -> Result<(), Box<dyn std::error::Error>> {
    while !app.should_quit {
        terminal.draw(|f| draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }
    Ok(())
}

fn draw(f: &mut Frame, app: &CalculatorApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Form and breakdown
            Constraint::Length(1), // Status
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    FormComponent::render(f, panels[0], app);
    BreakdownComponent::render(f, panels[1], app);

    if let Some(status) = &app.status {
        let color = match status.kind {
            NotificationKind::Success => Color::Green,
            NotificationKind::Info => Color::Yellow,
        };
        f.render_widget(
            Paragraph::new(status.message.clone()).style(Style::default().fg(color)),
            chunks[1],
        );
    }

    f.render_widget(
        Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );

    if let Some(comparison) = &app.comparison {
        ComparisonPopup::render(f, f.area(), app, comparison);
    }
    if let Some(summary) = &app.summary_popup {
        SummaryPopup::render(f, f.area(), summary);
    }
}
