use crate::billing::{BillingModel, CostBreakdown, PricingEngine, RateTable, UsageInput};
use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};

const SUMMARY_TITLE: &str = "CPAAS PLATFORM PRICING CALCULATOR SUMMARY";

/// Format an amount as en-US currency digits: two decimals, comma thousands separators.
///
/// Rounds half away from zero. The `$` sign is left to the caller.
pub fn format_currency(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    let text = rounded.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Explains a platform figure, e.g. "10 agents × 160 hours × $1.00"
pub fn platform_detail(model: BillingModel, usage: &UsageInput, rates: &RateTable) -> String {
    match model {
        BillingModel::Hourly => format!(
            "{} agents × {} hours × ${}",
            usage.agents,
            usage.hours,
            format_currency(rates.platform.hourly)
        ),
        BillingModel::NamedUser => format!(
            "{} agents × ${}/month",
            usage.agents,
            format_currency(rates.platform.named_user)
        ),
    }
}

impl CostBreakdown {
    pub fn platform_detail(&self, usage: &UsageInput, rates: &RateTable) -> String {
        platform_detail(self.model, usage, rates)
    }
}

impl PricingEngine {
    /// Plain-text report of the configuration, usage, costs and rates
    pub fn format_summary(&self, model: BillingModel, usage: &UsageInput) -> String {
        self.render_summary(model, usage, None)
    }

    /// Same report with a `Generated:` stamp under the title
    pub fn format_summary_at(
        &self,
        model: BillingModel,
        usage: &UsageInput,
        generated_at: NaiveDateTime,
    ) -> String {
        self.render_summary(model, usage, Some(generated_at))
    }

    fn render_summary(
        &self,
        model: BillingModel,
        usage: &UsageInput,
        generated_at: Option<NaiveDateTime>,
    ) -> String {
        let costs = self.compute_costs(model, usage);
        let mut lines: Vec<String> = Vec::with_capacity(32);

        lines.push(SUMMARY_TITLE.to_string());
        if let Some(at) = generated_at {
            lines.push(format!("Generated: {}", at.format("%Y-%m-%d %H:%M:%S")));
        }

        lines.push(String::new());
        lines.push("CONFIGURATION:".to_string());
        lines.push(format!("- Billing Model: {}", model.display_name()));
        lines.push(format!("- Number of Agents: {}", usage.agents));
        if model.uses_hours() {
            lines.push(format!("- Hours per Agent: {}", usage.hours));
        }

        lines.push(String::new());
        lines.push("MONTHLY USAGE:".to_string());
        lines.push(format!("- Inbound Voice Minutes: {}", usage.inbound_minutes));
        lines.push(format!(
            "- Outbound Voice Minutes: {}",
            usage.outbound_minutes
        ));
        lines.push(format!("- SMS Messages: {}", usage.sms_count));
        lines.push(format!("- WhatsApp Messages: {}", usage.whatsapp_count));
        lines.push(format!("- Email Packages: {}", usage.email_packages));

        lines.push(String::new());
        lines.push("COST BREAKDOWN:".to_string());
        lines.push(format!(
            "- Platform Cost: ${}",
            format_currency(costs.platform_cost)
        ));
        lines.push(format!(
            "- Network Cost: ${}",
            format_currency(costs.network_cost)
        ));
        lines.push(format!(
            "- TOTAL MONTHLY COST: ${}",
            format_currency(costs.total_cost)
        ));

        lines.push(String::new());
        lines.push("CURRENT RATES:".to_string());
        for (label, rate, unit) in self.rates().entries() {
            lines.push(format!("- {}: ${}/{}", label, rate.normalize(), unit));
        }

        lines.join("\n")
    }
}
