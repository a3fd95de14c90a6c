use super::{money_line, ReportInput, Section};
use crate::billing::format_currency;
use ansi_term::{Colour, Style};

/// The live cost view: total, platform, per-channel network costs
pub struct BreakdownSection {
    enabled: bool,
}

impl BreakdownSection {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Section for BreakdownSection {
    fn render(&self, input: &ReportInput) -> Option<String> {
        if !self.enabled {
            return None;
        }

        let costs = input.engine.compute_costs(input.model, &input.usage);
        let bold = input.style(Style::new().bold());
        let dim = input.style(Colour::Fixed(244).normal());

        let mut lines = vec![
            format!("Billing model: {}", input.model.display_name()),
            bold.paint(money_line(
                "TOTAL MONTHLY COST",
                &format_currency(costs.total_cost),
            ))
            .to_string(),
            String::new(),
            money_line("Platform", &format_currency(costs.platform_cost)),
            dim.paint(format!(
                "  {}",
                costs.platform_detail(&input.usage, input.engine.rates())
            ))
            .to_string(),
            money_line("Network", &format_currency(costs.network_cost)),
        ];

        for (label, amount) in [
            ("  Inbound voice", costs.inbound_cost),
            ("  Outbound voice", costs.outbound_cost),
            ("  SMS", costs.sms_cost),
            ("  WhatsApp", costs.whatsapp_cost),
            ("  Email", costs.email_cost),
        ] {
            lines.push(money_line(label, &format_currency(amount)));
        }

        Some(lines.join("\n"))
    }

    fn enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::{BillingModel, DefaultValues, PricingEngine, UsageInput};

    #[test]
    fn test_breakdown_plain_output() {
        let engine = PricingEngine::default();
        let input = ReportInput {
            engine: &engine,
            model: BillingModel::Hourly,
            usage: UsageInput::from(&DefaultValues::default()),
            color: false,
        };

        let text = BreakdownSection::new(true).render(&input).unwrap();
        assert!(text.contains("Billing model: Per Active User Hour"));
        assert!(text.contains(&money_line("TOTAL MONTHLY COST", "1,715.25")));
        assert!(text.contains(&money_line("Platform", "1,600.00")));
        assert!(text.contains("10 agents × 160 hours × $1.00"));
        assert!(text.contains(&money_line("Network", "115.25")));
        assert!(text.contains(&money_line("  Inbound voice", "42.50")));
        assert!(text.contains(&money_line("  Email", "19.95")));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_breakdown_disabled() {
        let engine = PricingEngine::default();
        let input = ReportInput {
            engine: &engine,
            model: BillingModel::NamedUser,
            usage: UsageInput::default(),
            color: true,
        };

        let section = BreakdownSection::new(false);
        assert!(!section.enabled());
        assert!(section.render(&input).is_none());
    }
}
