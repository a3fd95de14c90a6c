use super::types::{Config, ExportConfig};
use crate::billing::{DefaultValues, RateTable};
use crate::export::ExportStrategyKind;
use std::path::PathBuf;

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            directory: std::env::var_os("CPAAS_EXPORT_DIR").map(PathBuf::from),
            strategies: ExportStrategyKind::ALL.to_vec(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rates: RateTable::default(),
            defaults: DefaultValues::default(),
            export: ExportConfig::default(),
        }
    }
}
