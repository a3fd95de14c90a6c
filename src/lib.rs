pub mod billing;
pub mod cli;
pub mod config;
pub mod core;
pub mod export;

#[cfg(feature = "tui")]
pub mod ui;
pub mod utils;
