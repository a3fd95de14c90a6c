use super::{ExportError, ExportOutcome, ExportStrategy};
use chrono::NaiveDate;

/// Last resort: print the summary so the user can copy it by hand
pub struct DisplayExport;

impl ExportStrategy for DisplayExport {
    fn name(&self) -> &'static str {
        "display"
    }

    fn export(&self, summary: &str, _today: NaiveDate) -> Result<ExportOutcome, ExportError> {
        println!("Summary (copy this text):\n");
        println!("{}", summary);
        Ok(ExportOutcome::Displayed)
    }
}
