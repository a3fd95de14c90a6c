use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Platform billing mode, exactly one is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingModel {
    /// Per active user hour
    #[default]
    Hourly,
    /// Flat monthly fee per named agent
    NamedUser,
}

impl BillingModel {
    pub const ALL: [BillingModel; 2] = [BillingModel::Hourly, BillingModel::NamedUser];

    /// Wire value used by forms and config files
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingModel::Hourly => "hourly",
            BillingModel::NamedUser => "named_user",
        }
    }

    /// Human readable name used in summaries
    pub fn display_name(&self) -> &'static str {
        match self {
            BillingModel::Hourly => "Per Active User Hour",
            BillingModel::NamedUser => "Per Named User",
        }
    }

    /// Whether the hours-per-agent figure takes part in the platform cost
    pub fn uses_hours(&self) -> bool {
        matches!(self, BillingModel::Hourly)
    }

    /// The other billing model
    pub fn toggled(&self) -> Self {
        match self {
            BillingModel::Hourly => BillingModel::NamedUser,
            BillingModel::NamedUser => BillingModel::Hourly,
        }
    }
}

impl fmt::Display for BillingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by the strict `FromStr` parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBillingModel(pub String);

impl fmt::Display for UnknownBillingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown billing model '{}'. Expected: hourly, named_user",
            self.0
        )
    }
}

impl std::error::Error for UnknownBillingModel {}

impl FromStr for BillingModel {
    type Err = UnknownBillingModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "hourly" => Ok(BillingModel::Hourly),
            "named_user" => Ok(BillingModel::NamedUser),
            _ => Err(UnknownBillingModel(s.to_string())),
        }
    }
}

/// Monthly usage figures, already normalized to non-negative integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UsageInput {
    pub agents: u64,
    /// Only relevant under hourly billing
    pub hours: u64,
    pub inbound_minutes: u64,
    pub outbound_minutes: u64,
    pub sms_count: u64,
    pub whatsapp_count: u64,
    pub email_packages: u64,
}

impl UsageInput {
    /// Largest count any field is taken at; larger figures are clamped
    pub const MAX_COUNT: u64 = 1_000_000_000;
}

/// Per-channel network charges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ChannelCosts {
    pub inbound: Decimal,
    pub outbound: Decimal,
    pub sms: Decimal,
    pub whatsapp: Decimal,
    pub email: Decimal,
}

impl ChannelCosts {
    pub fn total(&self) -> Decimal {
        self.inbound
            .saturating_add(self.outbound)
            .saturating_add(self.sms)
            .saturating_add(self.whatsapp)
            .saturating_add(self.email)
    }
}

/// Monthly cost breakdown for one billing model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CostBreakdown {
    pub model: BillingModel,
    pub platform_cost: Decimal,
    pub inbound_cost: Decimal,
    pub outbound_cost: Decimal,
    pub sms_cost: Decimal,
    pub whatsapp_cost: Decimal,
    pub email_cost: Decimal,
    pub network_cost: Decimal,
    pub total_cost: Decimal,
}

/// Which model comes out cheaper in a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cheaper {
    Hourly,
    NamedUser,
    Tie,
}

/// Side-by-side totals of both billing models over the same usage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    pub hourly_platform_cost: Decimal,
    pub named_platform_cost: Decimal,
    /// Shared by both totals
    pub network_cost: Decimal,
    pub hourly_total: Decimal,
    pub named_total: Decimal,
    pub cheaper: Cheaper,
    /// Absolute difference between the two totals
    pub delta: Decimal,
}
