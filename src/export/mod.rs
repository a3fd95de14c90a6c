//! Summary export transports.
//!
//! The pricing core only produces the summary text; this module hands it to the
//! first transport that accepts it.

pub mod clipboard;
pub mod display;
pub mod file;

pub use clipboard::ClipboardExport;
pub use display::DisplayExport;
pub use file::{export_file_name, FileExport};

use crate::config::ExportConfig;
use crate::debug_println;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Configurable transport identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportStrategyKind {
    File,
    Clipboard,
    Display,
}

impl ExportStrategyKind {
    /// Default fallback order
    pub const ALL: [ExportStrategyKind; 3] = [
        ExportStrategyKind::File,
        ExportStrategyKind::Clipboard,
        ExportStrategyKind::Display,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportStrategyKind::File => "file",
            ExportStrategyKind::Clipboard => "clipboard",
            ExportStrategyKind::Display => "display",
        }
    }
}

/// What a successful export did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Saved(PathBuf),
    Copied,
    Displayed,
}

impl fmt::Display for ExportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportOutcome::Saved(path) => write!(f, "Summary exported to {}", path.display()),
            ExportOutcome::Copied => write!(f, "Summary copied to clipboard"),
            ExportOutcome::Displayed => write!(f, "Summary shown on screen"),
        }
    }
}

/// Error types for export operations
#[derive(Debug)]
pub enum ExportError {
    FileAccess(std::io::Error),
    ClipboardUnavailable,
    /// Every configured transport failed; (transport, reason) pairs in order
    AllFailed(Vec<(String, String)>),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::FileAccess(e) => write!(f, "Failed to write summary file: {}", e),
            ExportError::ClipboardUnavailable => write!(f, "System clipboard unavailable"),
            ExportError::AllFailed(failures) => {
                write!(f, "Export failed")?;
                for (name, reason) in failures {
                    write!(f, "; {}: {}", name, reason)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(error: std::io::Error) -> Self {
        ExportError::FileAccess(error)
    }
}

/// A single way of getting the summary to the user
pub trait ExportStrategy {
    fn name(&self) -> &'static str;
    fn export(&self, summary: &str, today: NaiveDate) -> Result<ExportOutcome, ExportError>;
}

/// Result of a pipeline run, including the transports that failed before the winner
#[derive(Debug)]
pub struct ExportReport {
    pub outcome: ExportOutcome,
    pub failures: Vec<(String, String)>,
}

/// Ordered list of transports tried until one succeeds
pub struct ExportPipeline {
    strategies: Vec<Box<dyn ExportStrategy>>,
}

impl ExportPipeline {
    pub fn new(strategies: Vec<Box<dyn ExportStrategy>>) -> Self {
        Self { strategies }
    }

    /// Build the configured transports in order
    pub fn from_config(config: &ExportConfig) -> Self {
        Self::from_kinds(config, &config.strategies)
    }

    /// Same as `from_config` but without the on-screen fallback, for callers that
    /// display the summary themselves
    pub fn without_display(config: &ExportConfig) -> Self {
        let kinds: Vec<ExportStrategyKind> = config
            .strategies
            .iter()
            .copied()
            .filter(|kind| *kind != ExportStrategyKind::Display)
            .collect();
        Self::from_kinds(config, &kinds)
    }

    fn from_kinds(config: &ExportConfig, kinds: &[ExportStrategyKind]) -> Self {
        let strategies = kinds
            .iter()
            .map(|kind| -> Box<dyn ExportStrategy> {
                match kind {
                    ExportStrategyKind::File => Box::new(FileExport::new(
                        config
                            .directory
                            .clone()
                            .unwrap_or_else(|| PathBuf::from(".")),
                    )),
                    ExportStrategyKind::Clipboard => Box::new(ClipboardExport::new()),
                    ExportStrategyKind::Display => Box::new(DisplayExport),
                }
            })
            .collect();
        Self::new(strategies)
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Try each transport in order and stop at the first success
    pub fn run(&self, summary: &str, today: NaiveDate) -> Result<ExportReport, ExportError> {
        let mut failures = Vec::new();

        for strategy in &self.strategies {
            debug_println!("Trying {} export", strategy.name());
            match strategy.export(summary, today) {
                Ok(outcome) => {
                    debug_println!("{} export succeeded", strategy.name());
                    return Ok(ExportReport { outcome, failures });
                }
                Err(e) => {
                    debug_println!("{} export failed: {}", strategy.name(), e);
                    failures.push((strategy.name().to_string(), e.to_string()));
                }
            }
        }

        Err(ExportError::AllFailed(failures))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct StubStrategy {
        name: &'static str,
        succeed: bool,
        calls: Rc<Cell<u32>>,
    }

    impl ExportStrategy for StubStrategy {
        fn name(&self) -> &'static str {
            self.name
        }

        fn export(&self, _summary: &str, _today: NaiveDate) -> Result<ExportOutcome, ExportError> {
            self.calls.set(self.calls.get() + 1);
            if self.succeed {
                Ok(ExportOutcome::Displayed)
            } else {
                Err(ExportError::ClipboardUnavailable)
            }
        }
    }

    fn stub(name: &'static str, succeed: bool, calls: &Rc<Cell<u32>>) -> Box<dyn ExportStrategy> {
        Box::new(StubStrategy {
            name,
            succeed,
            calls: calls.clone(),
        })
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 14).unwrap()
    }

    #[test]
    fn test_pipeline_falls_through_in_order() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let third = Rc::new(Cell::new(0));

        let pipeline = ExportPipeline::new(vec![
            stub("first", false, &first),
            stub("second", true, &second),
            stub("third", true, &third),
        ]);

        let report = pipeline.run("summary", today()).unwrap();
        assert_eq!(report.outcome, ExportOutcome::Displayed);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].0, "first");
        assert_eq!((first.get(), second.get(), third.get()), (1, 1, 0));
    }

    #[test]
    fn test_pipeline_all_failed() {
        let calls = Rc::new(Cell::new(0));
        let pipeline = ExportPipeline::new(vec![stub("a", false, &calls), stub("b", false, &calls)]);

        match pipeline.run("summary", today()) {
            Err(ExportError::AllFailed(failures)) => {
                assert_eq!(failures.len(), 2);
                assert_eq!(failures[1].0, "b");
            }
            other => panic!("Unexpected result: {:?}", other.map(|r| r.outcome)),
        }
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_empty_pipeline_fails() {
        let pipeline = ExportPipeline::new(Vec::new());
        assert!(pipeline.is_empty());
        assert!(matches!(
            pipeline.run("summary", today()),
            Err(ExportError::AllFailed(f)) if f.is_empty()
        ));
    }

    #[test]
    fn test_pipeline_from_config() {
        let config = ExportConfig {
            directory: None,
            strategies: ExportStrategyKind::ALL.to_vec(),
        };
        assert_eq!(ExportPipeline::from_config(&config).len(), 3);
        assert_eq!(ExportPipeline::without_display(&config).len(), 2);
    }

    #[test]
    fn test_file_strategy_first_in_pipeline() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExportConfig {
            directory: Some(dir.path().to_path_buf()),
            strategies: vec![ExportStrategyKind::File, ExportStrategyKind::Display],
        };

        let report = ExportPipeline::from_config(&config)
            .run("TOTAL", today())
            .unwrap();
        let expected = dir.path().join("cpaas-pricing-2024-08-14.txt");
        assert_eq!(report.outcome, ExportOutcome::Saved(expected.clone()));
        assert!(report.failures.is_empty());
        assert_eq!(std::fs::read_to_string(expected).unwrap(), "TOTAL");
    }

    #[test]
    fn test_strategy_kind_serde() {
        let kinds: Vec<ExportStrategyKind> =
            serde_json::from_str(r#"["display", "file"]"#).unwrap();
        assert_eq!(
            kinds,
            vec![ExportStrategyKind::Display, ExportStrategyKind::File]
        );
        assert!(serde_json::from_str::<ExportStrategyKind>(r#""fax""#).is_err());
    }
}
