use tracing::debug;

use crate::config::CalculatorConfig;
use crate::decimal::{Money, Rate};
use crate::types::HouseCategory;

/// maps a house price and category to the regulatory loan-to-value ratio
pub struct LoanPercentageResolver<'a> {
    config: &'a CalculatorConfig,
}

impl<'a> LoanPercentageResolver<'a> {
    pub fn new(config: &'a CalculatorConfig) -> Self {
        Self { config }
    }

    /// ratio of the tier containing `price` in the category's schedule.
    /// Ignores caps and the no-loan threshold; those belong to the composer.
    pub fn resolve_percentage(&self, price: Money, category: HouseCategory) -> Rate {
        let ratio = self.config.policy(category).tiers.ratio_for(price);
        debug!(%price, %category, %ratio, "resolved loan percentage");
        ratio
    }
}
