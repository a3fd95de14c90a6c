use crate::billing::{
    BillingModel, ChannelCosts, Cheaper, ComparisonResult, CostBreakdown, RateTable, UsageInput,
};
use rust_decimal::Decimal;

fn units(count: u64) -> Decimal {
    Decimal::from(count.min(UsageInput::MAX_COUNT))
}

/// Count times rate; negative rates charge nothing and results saturate at `Decimal::MAX`
fn charge(count: Decimal, rate: Decimal) -> Decimal {
    count.saturating_mul(rate.max(Decimal::ZERO))
}

/// Stateless cost calculator bound to one rate table
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    rates: RateTable,
}

impl PricingEngine {
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Platform (seat) cost for the given model; hours are ignored for named users
    pub fn platform_cost(&self, model: BillingModel, usage: &UsageInput) -> Decimal {
        let agents = units(usage.agents);
        match model {
            BillingModel::Hourly => charge(
                agents.saturating_mul(units(usage.hours)),
                self.rates.platform.hourly,
            ),
            BillingModel::NamedUser => charge(agents, self.rates.platform.named_user),
        }
    }

    /// Itemised network charges
    pub fn channel_costs(&self, usage: &UsageInput) -> ChannelCosts {
        let network = &self.rates.network;
        ChannelCosts {
            inbound: charge(units(usage.inbound_minutes), network.voice_inbound),
            outbound: charge(units(usage.outbound_minutes), network.voice_outbound),
            sms: charge(units(usage.sms_count), network.sms),
            whatsapp: charge(units(usage.whatsapp_count), network.whatsapp),
            email: charge(units(usage.email_packages), network.email),
        }
    }

    /// Network cost, independent of the billing model.
    ///
    /// Both the breakdown and the comparison go through here.
    pub fn compute_network_cost(&self, usage: &UsageInput) -> Decimal {
        self.channel_costs(usage).total()
    }

    /// Full monthly breakdown for one billing model
    pub fn compute_costs(&self, model: BillingModel, usage: &UsageInput) -> CostBreakdown {
        let platform_cost = self.platform_cost(model, usage);
        let channels = self.channel_costs(usage);
        let network_cost = self.compute_network_cost(usage);

        CostBreakdown {
            model,
            platform_cost,
            inbound_cost: channels.inbound,
            outbound_cost: channels.outbound,
            sms_cost: channels.sms,
            whatsapp_cost: channels.whatsapp,
            email_cost: channels.email,
            network_cost,
            total_cost: platform_cost.saturating_add(network_cost),
        }
    }

    /// Compare both billing models over the same usage and network cost
    pub fn compare_models(&self, usage: &UsageInput) -> ComparisonResult {
        let network_cost = self.compute_network_cost(usage);
        let hourly_platform_cost = self.platform_cost(BillingModel::Hourly, usage);
        let named_platform_cost = self.platform_cost(BillingModel::NamedUser, usage);

        let hourly_total = hourly_platform_cost.saturating_add(network_cost);
        let named_total = named_platform_cost.saturating_add(network_cost);

        let cheaper = if hourly_total < named_total {
            Cheaper::Hourly
        } else if named_total < hourly_total {
            Cheaper::NamedUser
        } else {
            Cheaper::Tie
        };

        ComparisonResult {
            hourly_platform_cost,
            named_platform_cost,
            network_cost,
            hourly_total,
            named_total,
            cheaper,
            delta: (hourly_total - named_total).abs(),
        }
    }

    /// Hours per agent at which both platform costs are equal.
    ///
    /// None when the hourly rate is not positive or the ratio is out of range.
    pub fn break_even_hours(&self) -> Option<Decimal> {
        let hourly = self.rates.platform.hourly;
        if hourly <= Decimal::ZERO {
            return None;
        }
        self.rates
            .platform
            .named_user
            .max(Decimal::ZERO)
            .checked_div(hourly)
    }
}

impl ComparisonResult {
    /// Total for one side of the comparison
    pub fn total_for(&self, model: BillingModel) -> Decimal {
        match model {
            BillingModel::Hourly => self.hourly_total,
            BillingModel::NamedUser => self.named_total,
        }
    }

    /// Platform cost for one side of the comparison
    pub fn platform_for(&self, model: BillingModel) -> Decimal {
        match model {
            BillingModel::Hourly => self.hourly_platform_cost,
            BillingModel::NamedUser => self.named_platform_cost,
        }
    }

    /// One-line savings verdict
    pub fn savings_message(&self) -> String {
        let delta = crate::billing::summary::format_currency(self.delta);
        match self.cheaper {
            Cheaper::Hourly => format!("Hourly model saves ${} per month", delta),
            Cheaper::NamedUser => format!("Named user model saves ${} per month", delta),
            Cheaper::Tie => "Both models cost the same".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::DefaultValues;
    use rust_decimal_macros::dec;

    fn scenario_usage() -> UsageInput {
        UsageInput::from(&DefaultValues::default())
    }

    #[test]
    fn test_scenario_hourly() {
        let engine = PricingEngine::default();
        let costs = engine.compute_costs(BillingModel::Hourly, &scenario_usage());

        assert_eq!(costs.platform_cost, dec!(1600.00));
        assert_eq!(costs.inbound_cost, dec!(42.50));
        assert_eq!(costs.outbound_cost, dec!(42.00));
        assert_eq!(costs.sms_cost, dec!(8.30));
        assert_eq!(costs.whatsapp_cost, dec!(2.50));
        assert_eq!(costs.email_cost, dec!(19.95));
        assert_eq!(costs.network_cost, dec!(115.25));
        assert_eq!(costs.total_cost, dec!(1715.25));
    }

    #[test]
    fn test_scenario_named_user() {
        let engine = PricingEngine::default();
        let costs = engine.compute_costs(BillingModel::NamedUser, &scenario_usage());

        assert_eq!(costs.platform_cost, dec!(1500.00));
        assert_eq!(costs.network_cost, dec!(115.25));
        assert_eq!(costs.total_cost, dec!(1615.25));
    }

    #[test]
    fn test_scenario_comparison() {
        let engine = PricingEngine::default();
        let comparison = engine.compare_models(&scenario_usage());

        assert_eq!(comparison.hourly_total, dec!(1715.25));
        assert_eq!(comparison.named_total, dec!(1615.25));
        assert_eq!(comparison.cheaper, Cheaper::NamedUser);
        assert_eq!(comparison.delta, dec!(100.00));
        assert_eq!(
            comparison.savings_message(),
            "Named user model saves $100.00 per month"
        );
    }

    #[test]
    fn test_all_zero_usage() {
        let engine = PricingEngine::default();
        let usage = UsageInput::default();

        for model in BillingModel::ALL {
            let costs = engine.compute_costs(model, &usage);
            assert!(costs.platform_cost.is_zero());
            assert!(costs.inbound_cost.is_zero());
            assert!(costs.outbound_cost.is_zero());
            assert!(costs.sms_cost.is_zero());
            assert!(costs.whatsapp_cost.is_zero());
            assert!(costs.email_cost.is_zero());
            assert!(costs.network_cost.is_zero());
            assert!(costs.total_cost.is_zero());
        }

        let comparison = engine.compare_models(&usage);
        assert_eq!(comparison.cheaper, Cheaper::Tie);
        assert!(comparison.delta.is_zero());
        assert_eq!(comparison.savings_message(), "Both models cost the same");
    }

    #[test]
    fn test_total_is_platform_plus_network() {
        let engine = PricingEngine::default();
        let samples = [
            UsageInput::default(),
            scenario_usage(),
            UsageInput {
                agents: 3,
                hours: 7,
                inbound_minutes: 1,
                outbound_minutes: 999_999,
                sms_count: 12_345,
                whatsapp_count: 3,
                email_packages: 42,
            },
            UsageInput {
                agents: 1_000_000,
                hours: 744,
                ..Default::default()
            },
        ];

        for usage in &samples {
            for model in BillingModel::ALL {
                let costs = engine.compute_costs(model, usage);
                assert_eq!(costs.total_cost, costs.platform_cost + costs.network_cost);
                assert_eq!(
                    costs.network_cost,
                    costs.inbound_cost
                        + costs.outbound_cost
                        + costs.sms_cost
                        + costs.whatsapp_cost
                        + costs.email_cost
                );
                // Same network figure whichever path computes it
                assert_eq!(costs.network_cost, engine.compute_network_cost(usage));
            }

            let comparison = engine.compare_models(usage);
            assert_eq!(comparison.network_cost, engine.compute_network_cost(usage));
            assert_eq!(
                comparison.delta,
                (comparison.hourly_total - comparison.named_total).abs()
            );
            assert_eq!(
                comparison.hourly_total,
                engine.compute_costs(BillingModel::Hourly, usage).total_cost
            );
            assert_eq!(
                comparison.named_total,
                engine.compute_costs(BillingModel::NamedUser, usage).total_cost
            );
        }
    }

    #[test]
    fn test_hourly_platform_cost_increases_with_agents_and_hours() {
        let engine = PricingEngine::default();
        let base = UsageInput {
            agents: 5,
            hours: 100,
            ..Default::default()
        };
        let more_agents = UsageInput { agents: 6, ..base };
        let more_hours = UsageInput { hours: 101, ..base };

        let base_cost = engine.platform_cost(BillingModel::Hourly, &base);
        assert!(engine.platform_cost(BillingModel::Hourly, &more_agents) > base_cost);
        assert!(engine.platform_cost(BillingModel::Hourly, &more_hours) > base_cost);
    }

    #[test]
    fn test_named_user_ignores_hours() {
        let engine = PricingEngine::default();
        let usage = UsageInput {
            agents: 4,
            hours: 10,
            ..Default::default()
        };
        let longer = UsageInput { hours: 700, ..usage };

        assert_eq!(
            engine.platform_cost(BillingModel::NamedUser, &usage),
            engine.platform_cost(BillingModel::NamedUser, &longer)
        );
        assert_eq!(
            engine.platform_cost(BillingModel::NamedUser, &usage),
            dec!(600)
        );
    }

    #[test]
    fn test_hourly_cheaper_and_exact_tie() {
        let engine = PricingEngine::default();

        let light = UsageInput {
            agents: 10,
            hours: 40,
            ..Default::default()
        };
        let comparison = engine.compare_models(&light);
        assert_eq!(comparison.cheaper, Cheaper::Hourly);
        assert_eq!(comparison.delta, dec!(1100));
        assert_eq!(
            comparison.savings_message(),
            "Hourly model saves $1,100.00 per month"
        );

        // 150 hours at $1.00 equals the $150.00 named seat
        let even = UsageInput {
            agents: 10,
            hours: 150,
            sms_count: 7,
            ..Default::default()
        };
        let comparison = engine.compare_models(&even);
        assert_eq!(comparison.cheaper, Cheaper::Tie);
        assert!(comparison.delta.is_zero());
    }

    #[test]
    fn test_custom_rates() {
        let mut rates = RateTable::default();
        rates.platform.hourly = dec!(2.50);
        rates.network.email = dec!(10);
        let engine = PricingEngine::new(rates);

        let usage = UsageInput {
            agents: 2,
            hours: 10,
            email_packages: 3,
            ..Default::default()
        };
        let costs = engine.compute_costs(BillingModel::Hourly, &usage);
        assert_eq!(costs.platform_cost, dec!(50));
        assert_eq!(costs.email_cost, dec!(30));
        assert_eq!(costs.total_cost, dec!(80));
        assert_eq!(engine.rates().platform.hourly, dec!(2.50));
    }

    #[test]
    fn test_counts_are_clamped() {
        let engine = PricingEngine::default();
        let huge = UsageInput {
            agents: u64::MAX,
            hours: u64::MAX,
            inbound_minutes: u64::MAX,
            outbound_minutes: u64::MAX,
            sms_count: u64::MAX,
            whatsapp_count: u64::MAX,
            email_packages: u64::MAX,
        };
        let capped = UsageInput {
            agents: UsageInput::MAX_COUNT,
            hours: UsageInput::MAX_COUNT,
            inbound_minutes: UsageInput::MAX_COUNT,
            outbound_minutes: UsageInput::MAX_COUNT,
            sms_count: UsageInput::MAX_COUNT,
            whatsapp_count: UsageInput::MAX_COUNT,
            email_packages: UsageInput::MAX_COUNT,
        };

        let costs = engine.compute_costs(BillingModel::Hourly, &huge);
        assert_eq!(costs, engine.compute_costs(BillingModel::Hourly, &capped));
        assert_eq!(costs.total_cost, costs.platform_cost + costs.network_cost);
    }

    #[test]
    fn test_oversized_rates_saturate() {
        let mut rates = RateTable::default();
        rates.platform.hourly = Decimal::from_i128_with_scale(10i128.pow(26), 0);
        rates.network.email = Decimal::MAX;
        let engine = PricingEngine::new(rates);
        let usage = scenario_usage();

        let costs = engine.compute_costs(BillingModel::Hourly, &usage);
        assert_eq!(costs.platform_cost, Decimal::MAX);
        assert_eq!(costs.network_cost, Decimal::MAX);
        assert_eq!(costs.total_cost, Decimal::MAX);

        let comparison = engine.compare_models(&usage);
        assert_eq!(comparison.hourly_total, Decimal::MAX);
        assert_eq!(comparison.cheaper, Cheaper::Tie);
    }

    #[test]
    fn test_negative_rates_charge_nothing() {
        let mut rates = RateTable::default();
        rates.network.email = dec!(-500);
        rates.platform.named_user = dec!(-1);
        let engine = PricingEngine::new(rates);
        let usage = scenario_usage();

        let costs = engine.compute_costs(BillingModel::NamedUser, &usage);
        assert!(costs.email_cost.is_zero());
        assert!(costs.platform_cost.is_zero());
        assert_eq!(costs.network_cost, dec!(95.30));
        assert_eq!(costs.total_cost, dec!(95.30));
        assert_eq!(engine.break_even_hours(), Some(Decimal::ZERO));
    }

    #[test]
    fn test_break_even_hours() {
        let engine = PricingEngine::default();
        assert_eq!(engine.break_even_hours(), Some(dec!(150)));

        let mut rates = RateTable::default();
        rates.platform.hourly = Decimal::ZERO;
        assert_eq!(PricingEngine::new(rates).break_even_hours(), None);

        rates.platform.hourly = dec!(-2);
        assert_eq!(PricingEngine::new(rates).break_even_hours(), None);
    }

    #[test]
    fn test_comparison_accessors() {
        let engine = PricingEngine::default();
        let comparison = engine.compare_models(&scenario_usage());
        assert_eq!(comparison.total_for(BillingModel::Hourly), dec!(1715.25));
        assert_eq!(comparison.platform_for(BillingModel::NamedUser), dec!(1500));
    }
}
