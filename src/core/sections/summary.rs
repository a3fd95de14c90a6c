use super::{ReportInput, Section};

/// The exportable plain-text summary, never colored
pub struct SummarySection {
    enabled: bool,
}

impl SummarySection {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Section for SummarySection {
    fn render(&self, input: &ReportInput) -> Option<String> {
        if !self.enabled {
            return None;
        }
        Some(input.engine.format_summary(input.model, &input.usage))
    }

    fn enabled(&self) -> bool {
        self.enabled
    }
}
