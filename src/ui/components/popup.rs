use crate::billing::{format_currency, platform_detail, BillingModel, Cheaper, ComparisonResult};
use crate::ui::app::CalculatorApp;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub struct ComparisonPopup;

impl ComparisonPopup {
    pub fn render(f: &mut Frame, area: Rect, app: &CalculatorApp, comparison: &ComparisonResult) {
        let popup_area = centered_rect(60, 60, area);
        f.render_widget(Clear, popup_area);

        let popup_block = Block::default()
            .borders(Borders::ALL)
            .title("Compare Billing Models")
            .border_style(Style::default().fg(Color::Cyan));

        let inner = popup_block.inner(popup_area);
        f.render_widget(popup_block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Comparison
                Constraint::Length(3), // Help text
            ])
            .split(inner);

        let usage = app.usage();
        let mut lines = Vec::new();
        for model in BillingModel::ALL {
            let cheaper = matches!(
                (comparison.cheaper, model),
                (Cheaper::Hourly, BillingModel::Hourly)
                    | (Cheaper::NamedUser, BillingModel::NamedUser)
            );
            let style = if cheaper {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };

            lines.push(Line::styled(
                format!(
                    "{}: ${}",
                    model.display_name(),
                    format_currency(comparison.total_for(model))
                ),
                style,
            ));
            lines.push(Line::from(format!(
                "  Platform: ${}",
                format_currency(comparison.platform_for(model))
            )));
            lines.push(Line::from(format!(
                "  Network: ${}",
                format_currency(comparison.network_cost)
            )));
            lines.push(Line::styled(
                format!(
                    "  {}",
                    platform_detail(model, &usage, app.engine().rates())
                ),
                Style::default().fg(Color::DarkGray),
            ));
            lines.push(Line::from(""));
        }
        lines.push(Line::styled(
            comparison.savings_message(),
            Style::default().fg(Color::Yellow),
        ));

        f.render_widget(Paragraph::new(lines), chunks[0]);
        render_help(f, chunks[1], "Esc/Enter: Close");
    }
}

pub struct SummaryPopup;

impl SummaryPopup {
    pub fn render(f: &mut Frame, area: Rect, summary: &str) {
        let popup_area = centered_rect(80, 90, area);
        f.render_widget(Clear, popup_area);

        let popup_block = Block::default()
            .borders(Borders::ALL)
            .title("Summary (copy this text)")
            .border_style(Style::default().fg(Color::Yellow));

        let inner = popup_block.inner(popup_area);
        f.render_widget(popup_block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(inner);

        let text = Paragraph::new(summary.to_string()).wrap(Wrap { trim: false });
        f.render_widget(text, chunks[0]);
        render_help(f, chunks[1], "Esc/Enter: Close");
    }
}

fn render_help(f: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text.to_string())
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, area);
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 60, area);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 30);
        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 10);
    }
}
