pub mod breakdown;
pub mod comparison;
pub mod summary;

use crate::billing::{BillingModel, PricingEngine, UsageInput};
use ansi_term::Style;

/// Everything a section needs to render
pub struct ReportInput<'a> {
    pub engine: &'a PricingEngine,
    pub model: BillingModel,
    pub usage: UsageInput,
    pub color: bool,
}

impl ReportInput<'_> {
    /// The given style, or a plain one when color is off
    pub fn style(&self, style: Style) -> Style {
        if self.color {
            style
        } else {
            Style::default()
        }
    }
}

pub trait Section {
    fn render(&self, input: &ReportInput) -> Option<String>;
    fn enabled(&self) -> bool;
}

/// Label padded to a fixed column followed by a dollar amount
pub(crate) fn money_line(label: &str, amount: &str) -> String {
    format!("{:<22}${:>12}", label, amount)
}

// Re-export all section types
pub use breakdown::BreakdownSection;
pub use comparison::ComparisonSection;
pub use summary::SummarySection;
