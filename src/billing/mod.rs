pub mod calculator;
pub mod input;
pub mod pricing;
pub mod summary;
pub mod types;

pub use calculator::PricingEngine;
pub use input::{parse_count, RawUsage};
pub use pricing::{DefaultValues, NetworkRates, PlatformRates, RateTable};
pub use summary::{format_currency, platform_detail};
pub use types::{
    BillingModel, ChannelCosts, Cheaper, ComparisonResult, CostBreakdown, UnknownBillingModel,
    UsageInput,
};
