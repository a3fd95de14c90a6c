use super::{money_line, ReportInput, Section};
use crate::billing::{format_currency, platform_detail, BillingModel, Cheaper};
use ansi_term::{Colour, Style};

/// Both billing models side by side with the savings verdict
pub struct ComparisonSection {
    enabled: bool,
}

impl ComparisonSection {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Section for ComparisonSection {
    fn render(&self, input: &ReportInput) -> Option<String> {
        if !self.enabled {
            return None;
        }

        let engine = input.engine;
        let comparison = engine.compare_models(&input.usage);
        let winner = match comparison.cheaper {
            Cheaper::Hourly => Some(BillingModel::Hourly),
            Cheaper::NamedUser => Some(BillingModel::NamedUser),
            Cheaper::Tie => None,
        };

        let mut lines = vec![input
            .style(Style::new().bold())
            .paint("MODEL COMPARISON")
            .to_string()];

        for model in BillingModel::ALL {
            let style = if winner == Some(model) {
                input.style(Colour::Green.bold())
            } else {
                input.style(Style::new())
            };

            lines.push(
                style
                    .paint(money_line(
                        model.display_name(),
                        &format_currency(comparison.total_for(model)),
                    ))
                    .to_string(),
            );
            lines.push(format!(
                "  Platform ${} + Network ${}",
                format_currency(comparison.platform_for(model)),
                format_currency(comparison.network_cost)
            ));
            lines.push(format!(
                "  {}",
                platform_detail(model, &input.usage, engine.rates())
            ));
        }

        lines.push(String::new());
        lines.push(comparison.savings_message());

        if let Some(hours) = engine.break_even_hours() {
            lines.push(format!(
                "Break-even at {} hours per agent",
                hours.round_dp(2).normalize()
            ));
        }

        Some(lines.join("\n"))
    }

    fn enabled(&self) -> bool {
        self.enabled
    }
}
