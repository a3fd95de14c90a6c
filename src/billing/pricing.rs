use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::UsageInput;

/// Platform (seat) prices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformRates {
    /// USD per agent-hour
    pub hourly: Decimal,
    /// USD per named agent per month
    pub named_user: Decimal,
}

impl Default for PlatformRates {
    fn default() -> Self {
        Self {
            hourly: dec!(1.00),
            named_user: dec!(150.00),
        }
    }
}

/// Usage-based network prices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkRates {
    /// USD per inbound voice minute
    pub voice_inbound: Decimal,
    /// USD per outbound voice minute
    pub voice_outbound: Decimal,
    /// USD per SMS message
    pub sms: Decimal,
    /// USD per WhatsApp message
    pub whatsapp: Decimal,
    /// USD per email package (a flat bundle, not per message)
    pub email: Decimal,
}

impl Default for NetworkRates {
    fn default() -> Self {
        Self {
            voice_inbound: dec!(0.0085),
            voice_outbound: dec!(0.014),
            sms: dec!(0.0083),
            whatsapp: dec!(0.005),
            email: dec!(19.95),
        }
    }
}

/// Complete rate table. `RateTable::default()` is the standard price list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RateTable {
    pub platform: PlatformRates,
    pub network: NetworkRates,
}

impl RateTable {
    /// All rates with a label and unit, in summary order
    pub fn entries(&self) -> [(&'static str, Decimal, &'static str); 7] {
        [
            ("Platform (Hourly)", self.platform.hourly, "hour"),
            ("Platform (Named User)", self.platform.named_user, "month"),
            ("Inbound Voice", self.network.voice_inbound, "minute"),
            ("Outbound Voice", self.network.voice_outbound, "minute"),
            ("SMS", self.network.sms, "message"),
            ("WhatsApp", self.network.whatsapp, "message"),
            ("Email", self.network.email, "package"),
        ]
    }

    /// Names of rates that are below zero
    pub fn negative_rates(&self) -> Vec<&'static str> {
        self.entries()
            .iter()
            .filter(|(_, rate, _)| rate.is_sign_negative() && !rate.is_zero())
            .map(|(label, _, _)| *label)
            .collect()
    }
}

/// Usage figures a fresh or reset calculator starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultValues {
    pub agents: u64,
    pub hours: u64,
    pub inbound_minutes: u64,
    pub outbound_minutes: u64,
    pub sms_count: u64,
    pub whatsapp_count: u64,
    pub email_packages: u64,
}

impl Default for DefaultValues {
    fn default() -> Self {
        Self {
            agents: 10,
            hours: 160,
            inbound_minutes: 5000,
            outbound_minutes: 3000,
            sms_count: 1000,
            whatsapp_count: 500,
            email_packages: 1,
        }
    }
}

impl From<&DefaultValues> for UsageInput {
    fn from(defaults: &DefaultValues) -> Self {
        UsageInput {
            agents: defaults.agents,
            hours: defaults.hours,
            inbound_minutes: defaults.inbound_minutes,
            outbound_minutes: defaults.outbound_minutes,
            sms_count: defaults.sms_count,
            whatsapp_count: defaults.whatsapp_count,
            email_packages: defaults.email_packages,
        }
    }
}
