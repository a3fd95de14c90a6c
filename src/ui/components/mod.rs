pub mod breakdown;
pub mod form;
pub mod popup;

pub use breakdown::BreakdownComponent;
pub use form::FormComponent;
pub use popup::{ComparisonPopup, SummaryPopup};
