//! Normalization of raw form input into typed usage.
//!
//! Nothing here fails: anything that is not a non-negative integer becomes zero.

use crate::billing::{BillingModel, DefaultValues, UsageInput};
use crate::debug_println;
use serde::{Deserialize, Serialize};

/// Parse a count the way a lenient numeric form field does.
///
/// Leading whitespace and a leading `+` are accepted, parsing stops at the first
/// non-digit (`"12abc"` is 12, `"3.9"` is 3). Empty, negative or non-numeric input
/// yields 0; values above `UsageInput::MAX_COUNT` are clamped, however many digits.
pub fn parse_count(raw: &str) -> u64 {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];

    if digits.is_empty() {
        if !raw.trim().is_empty() {
            debug_println!("Non-numeric input {:?} normalized to 0", raw);
        }
        return 0;
    }

    match digits.parse::<u64>() {
        Ok(value) => value.min(UsageInput::MAX_COUNT),
        // Only overflow is possible here, the run is all ASCII digits
        Err(_) => {
            debug_println!("Out-of-range input {:?} clamped", raw);
            UsageInput::MAX_COUNT
        }
    }
}

impl BillingModel {
    /// Lenient parse used at the form boundary; unknown values fall back to hourly
    pub fn from_raw(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|_| {
            debug_println!("Unknown billing model {:?}, using hourly", raw);
            BillingModel::Hourly
        })
    }
}

/// Raw text of every usage field, as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawUsage {
    pub agents: Option<String>,
    pub hours: Option<String>,
    pub inbound_minutes: Option<String>,
    pub outbound_minutes: Option<String>,
    pub sms_count: Option<String>,
    pub whatsapp_count: Option<String>,
    pub email_packages: Option<String>,
}

impl RawUsage {
    /// Form pre-filled with the configured defaults
    pub fn from_defaults(defaults: &DefaultValues) -> Self {
        Self {
            agents: Some(defaults.agents.to_string()),
            hours: Some(defaults.hours.to_string()),
            inbound_minutes: Some(defaults.inbound_minutes.to_string()),
            outbound_minutes: Some(defaults.outbound_minutes.to_string()),
            sms_count: Some(defaults.sms_count.to_string()),
            whatsapp_count: Some(defaults.whatsapp_count.to_string()),
            email_packages: Some(defaults.email_packages.to_string()),
        }
    }

    /// Coerce every field to a count; missing fields become zero
    pub fn normalize(&self) -> UsageInput {
        let count = |field: &Option<String>| field.as_deref().map(parse_count).unwrap_or(0);

        UsageInput {
            agents: count(&self.agents),
            hours: count(&self.hours),
            inbound_minutes: count(&self.inbound_minutes),
            outbound_minutes: count(&self.outbound_minutes),
            sms_count: count(&self.sms_count),
            whatsapp_count: count(&self.whatsapp_count),
            email_packages: count(&self.email_packages),
        }
    }
}
