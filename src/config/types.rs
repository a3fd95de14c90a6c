use crate::billing::{DefaultValues, RateTable};
use crate::export::ExportStrategyKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main config structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rates: RateTable,
    pub defaults: DefaultValues,
    pub export: ExportConfig,
}

/// Where and how summaries are exported
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory for exported summary files; current directory when unset
    pub directory: Option<PathBuf>,
    /// Transports tried in order until one succeeds
    pub strategies: Vec<ExportStrategyKind>,
}
