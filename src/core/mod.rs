pub mod report;
pub mod sections;

pub use report::{JsonReport, ReportGenerator, ReportOptions};
pub use sections::{ReportInput, Section};
