use super::sections::{BreakdownSection, ComparisonSection, ReportInput, Section, SummarySection};
use crate::billing::{BillingModel, ComparisonResult, CostBreakdown, UsageInput};
use serde::Serialize;

/// Which views a report contains
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub breakdown: bool,
    pub comparison: bool,
    pub summary: bool,
}

/// Collects the enabled sections into one text report
pub struct ReportGenerator {
    sections: Vec<Box<dyn Section>>,
}

impl ReportGenerator {
    pub fn new(options: ReportOptions) -> Self {
        Self {
            sections: vec![
                Box::new(BreakdownSection::new(options.breakdown)),
                Box::new(ComparisonSection::new(options.comparison)),
                Box::new(SummarySection::new(options.summary)),
            ],
        }
    }

    pub fn generate(&self, input: &ReportInput) -> String {
        self.sections
            .iter()
            .filter(|section| section.enabled())
            .filter_map(|section| section.render(input))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Machine-readable report for `--json`
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub model: BillingModel,
    pub usage: UsageInput,
    pub breakdown: CostBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ComparisonResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl JsonReport {
    pub fn build(input: &ReportInput, options: ReportOptions) -> Self {
        let engine = input.engine;
        Self {
            model: input.model,
            usage: input.usage,
            breakdown: engine.compute_costs(input.model, &input.usage),
            comparison: options
                .comparison
                .then(|| engine.compare_models(&input.usage)),
            summary: options
                .summary
                .then(|| engine.format_summary(input.model, &input.usage)),
        }
    }
}
