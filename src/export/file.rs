use super::{ExportError, ExportOutcome, ExportStrategy};
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

/// File name for a summary exported on the given day
pub fn export_file_name(date: NaiveDate) -> String {
    format!("cpaas-pricing-{}.txt", date.format("%Y-%m-%d"))
}

/// Writes the summary as a dated text file
pub struct FileExport {
    directory: PathBuf,
}

impl FileExport {
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }
}

impl ExportStrategy for FileExport {
    fn name(&self) -> &'static str {
        "file"
    }

    fn export(&self, summary: &str, today: NaiveDate) -> Result<ExportOutcome, ExportError> {
        if !self.directory.is_dir() {
            return Err(ExportError::FileAccess(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} is not a directory", self.directory.display()),
            )));
        }

        let path = self.directory.join(export_file_name(today));
        fs::write(&path, summary)?;
        Ok(ExportOutcome::Saved(path))
    }
}
