use crate::billing::{BillingModel, DefaultValues, RawUsage};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cpaas-pricing")]
#[command(version, about = "Monthly cost calculator for CPaaS platform and network usage")]
pub struct Cli {
    /// Billing model: hourly or named_user (anything else falls back to hourly)
    #[arg(short = 'm', long = "model", value_name = "MODEL")]
    pub model: Option<String>,

    /// Number of agents
    #[arg(short = 'a', long, value_name = "N", allow_negative_numbers = true)]
    pub agents: Option<String>,

    /// Hours per agent (hourly billing only)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub hours: Option<String>,

    /// Inbound voice minutes
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub inbound: Option<String>,

    /// Outbound voice minutes
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub outbound: Option<String>,

    /// SMS messages
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub sms: Option<String>,

    /// WhatsApp messages
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub whatsapp: Option<String>,

    /// Email packages
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub email: Option<String>,

    /// Start from empty fields instead of the default usage
    #[arg(long)]
    pub empty: bool,

    /// Show both billing models side by side
    #[arg(long)]
    pub compare: bool,

    /// Print the plain-text summary
    #[arg(long)]
    pub summary: bool,

    /// Export the summary (file, then clipboard, then screen)
    #[arg(short = 'e', long)]
    pub export: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Open the interactive calculator
    #[arg(short = 'i', long)]
    pub interactive: bool,

    /// Use a specific config file
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Initialize config file
    #[arg(long = "init")]
    pub init: bool,

    /// Print current configuration
    #[arg(long = "print")]
    pub print: bool,

    /// Check configuration
    #[arg(long = "check")]
    pub check: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Selected billing model, hourly unless a recognized value was given
    pub fn billing_model(&self) -> BillingModel {
        self.model
            .as_deref()
            .map(BillingModel::from_raw)
            .unwrap_or_default()
    }

    /// Form contents: defaults (or empty fields) overlaid with the given flags
    pub fn raw_usage(&self, defaults: &DefaultValues) -> RawUsage {
        let base = if self.empty {
            RawUsage::default()
        } else {
            RawUsage::from_defaults(defaults)
        };

        RawUsage {
            agents: self.agents.clone().or(base.agents),
            hours: self.hours.clone().or(base.hours),
            inbound_minutes: self.inbound.clone().or(base.inbound_minutes),
            outbound_minutes: self.outbound.clone().or(base.outbound_minutes),
            sms_count: self.sms.clone().or(base.sms_count),
            whatsapp_count: self.whatsapp.clone().or(base.whatsapp_count),
            email_packages: self.email.clone().or(base.email_packages),
        }
    }
}
