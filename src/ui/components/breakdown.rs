use crate::billing::format_currency;
use crate::ui::app::CalculatorApp;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

pub struct BreakdownComponent;

impl BreakdownComponent {
    pub fn render(f: &mut Frame, area: Rect, app: &CalculatorApp) {
        let usage = app.usage();
        let costs = app.costs();
        let rates = app.engine().rates();

        let row = |label: &str, amount: Decimal| {
            Line::from(vec![
                Span::raw(format!("{:<18}", label)),
                Span::raw(format!("${:>12}", format_currency(amount))),
            ])
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("{:<18}", "Total / month"),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("${:>12}", format_currency(costs.total_cost)),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            row("Platform", costs.platform_cost),
            Line::from(Span::styled(
                format!("  {}", costs.platform_detail(&usage, rates)),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            row("  Inbound voice", costs.inbound_cost),
            row("  Outbound voice", costs.outbound_cost),
            row("  SMS", costs.sms_cost),
            row("  WhatsApp", costs.whatsapp_cost),
            row("  Email", costs.email_cost),
            row("Network", costs.network_cost),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Monthly cost · {}", app.model.display_name())),
        );
        f.render_widget(paragraph, area);
    }
}
