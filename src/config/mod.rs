pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader};
pub use types::*;
