use super::{ExportError, ExportOutcome, ExportStrategy};
use crate::debug_println;
use chrono::NaiveDate;
use copypasta::{ClipboardContext, ClipboardProvider};

type ClipboardResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync + 'static>>;

/// Opens a clipboard handle for one export
pub type ClipboardConnector = Box<dyn Fn() -> ClipboardResult<Box<dyn ClipboardProvider>>>;

fn system_clipboard() -> ClipboardResult<Box<dyn ClipboardProvider>> {
    let ctx = ClipboardContext::new()?;
    Ok(Box::new(ctx))
}

/// Puts the summary on the system clipboard
pub struct ClipboardExport {
    connect: ClipboardConnector,
}

impl Default for ClipboardExport {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardExport {
    pub fn new() -> Self {
        Self::with_connector(Box::new(system_clipboard))
    }

    pub fn with_connector(connect: ClipboardConnector) -> Self {
        Self { connect }
    }
}

impl ExportStrategy for ClipboardExport {
    fn name(&self) -> &'static str {
        "clipboard"
    }

    fn export(&self, summary: &str, _today: NaiveDate) -> Result<ExportOutcome, ExportError> {
        let mut ctx = (self.connect)().map_err(|e| {
            debug_println!("Clipboard unavailable: {}", e);
            ExportError::ClipboardUnavailable
        })?;

        ctx.set_contents(summary.to_owned()).map_err(|e| {
            debug_println!("Clipboard rejected contents: {}", e);
            ExportError::ClipboardUnavailable
        })?;

        Ok(ExportOutcome::Copied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct RecordingClipboard {
        contents: Arc<Mutex<Option<String>>>,
        accept: bool,
    }

    impl ClipboardProvider for RecordingClipboard {
        fn get_contents(&mut self) -> ClipboardResult<String> {
            Ok(self.contents.lock().unwrap().clone().unwrap_or_default())
        }

        fn set_contents(&mut self, data: String) -> ClipboardResult<()> {
            if !self.accept {
                return Err("clipboard is read-only".into());
            }
            *self.contents.lock().unwrap() = Some(data);
            Ok(())
        }
    }

    fn recording(accept: bool, contents: &Arc<Mutex<Option<String>>>) -> ClipboardExport {
        let contents = contents.clone();
        ClipboardExport::with_connector(Box::new(
            move || -> ClipboardResult<Box<dyn ClipboardProvider>> {
                Ok(Box::new(RecordingClipboard {
                    contents: contents.clone(),
                    accept,
                }))
            },
        ))
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_copies_summary() {
        let contents = Arc::new(Mutex::new(None));
        let outcome = recording(true, &contents).export("TOTAL $1.00", date());

        assert_eq!(outcome.unwrap(), ExportOutcome::Copied);
        assert_eq!(contents.lock().unwrap().as_deref(), Some("TOTAL $1.00"));
    }

    #[test]
    fn test_no_clipboard_is_unavailable() {
        let export = ClipboardExport::with_connector(Box::new(
            || -> ClipboardResult<Box<dyn ClipboardProvider>> { Err("no display".into()) },
        ));
        assert!(matches!(
            export.export("summary", date()),
            Err(ExportError::ClipboardUnavailable)
        ));
    }

    #[test]
    fn test_rejected_contents_is_unavailable() {
        let contents = Arc::new(Mutex::new(None));
        assert!(matches!(
            recording(false, &contents).export("summary", date()),
            Err(ExportError::ClipboardUnavailable)
        ));
        assert!(contents.lock().unwrap().is_none());
    }
}
