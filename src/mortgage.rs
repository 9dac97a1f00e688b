use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::CalculatorConfig;
use crate::decimal::{Money, Rate};
use crate::ltv::LoanPercentageResolver;
use crate::types::HouseCategory;

/// split of a house price into loan and down payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MortgageResult {
    pub loan_amount: Money,
    pub down_payment: Money,
    /// tier ratio applied, zero when no loan is available
    pub loan_percentage: Rate,
}

impl MortgageResult {
    /// full purchase price
    pub fn house_price(&self) -> Money {
        self.loan_amount + self.down_payment
    }

    pub fn has_loan(&self) -> bool {
        self.loan_amount.is_positive()
    }

    fn no_loan(price: Money) -> Self {
        Self {
            loan_amount: Money::ZERO,
            down_payment: price,
            loan_percentage: Rate::ZERO,
        }
    }
}

/// combines the tier ratio with category caps into a loan and down payment
pub struct MortgageComposer<'a> {
    config: &'a CalculatorConfig,
}

impl<'a> MortgageComposer<'a> {
    pub fn new(config: &'a CalculatorConfig) -> Self {
        Self { config }
    }

    /// compose the mortgage for a positive price; callers validate the price
    pub fn compose(&self, price: Money, category: HouseCategory) -> MortgageResult {
        let policy = self.config.policy(category);

        if let Some(threshold) = policy.no_loan_from {
            if price >= threshold {
                debug!(%price, %category, %threshold, "price at or above no-loan threshold");
                return MortgageResult::no_loan(price);
            }
        }

        let loan_percentage =
            LoanPercentageResolver::new(self.config).resolve_percentage(price, category);
        let raw_loan = price.apply(loan_percentage);

        let loan_amount = match policy.loan_cap {
            Some(cap) => raw_loan.min(cap),
            None => raw_loan,
        };
        let down_payment = price - loan_amount;

        debug!(
            %price,
            %category,
            %loan_percentage,
            %raw_loan,
            %loan_amount,
            %down_payment,
            "composed mortgage"
        );

        MortgageResult {
            loan_amount,
            down_payment,
            loan_percentage,
        }
    }
}

/// compose a mortgage under the given configuration
pub fn compose_mortgage(
    price: Money,
    category: HouseCategory,
    config: &CalculatorConfig,
) -> MortgageResult {
    MortgageComposer::new(config).compose(price, category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn compose(price: i64, category: HouseCategory) -> MortgageResult {
        compose_mortgage(Money::from_major(price), category, &CalculatorConfig::bddk())
    }

    #[test]
    fn test_secondhand_under_one_million() {
        let result = compose(800_000, HouseCategory::Secondhand);
        assert_eq!(result.loan_amount, Money::from_major(720_000));
        assert_eq!(result.down_payment, Money::from_major(80_000));
        assert_eq!(result.loan_percentage.as_decimal(), dec!(0.90));
    }

    #[test]
    fn test_secondhand_cap_applies() {
        // raw loan 3,000,000 clamped to 2,500,000
        let result = compose(6_000_000, HouseCategory::Secondhand);
        assert_eq!(result.loan_amount, Money::from_major(2_500_000));
        assert_eq!(result.down_payment, Money::from_major(3_500_000));
        assert_eq!(result.loan_percentage.as_decimal(), dec!(0.50));
    }

    #[test]
    fn test_secondhand_cap_boundary() {
        // 5,000,000 * 0.5 sits exactly on the cap
        let result = compose(5_000_000, HouseCategory::Secondhand);
        assert_eq!(result.loan_amount, Money::from_major(2_500_000));
    }

    #[test]
    fn test_new_house_is_uncapped() {
        let result = compose(10_000_000, HouseCategory::New);
        assert_eq!(result.loan_amount, Money::from_major(6_000_000));
        assert_eq!(result.down_payment, Money::from_major(4_000_000));

        let result = compose(30_000_000, HouseCategory::New);
        assert_eq!(result.loan_amount, Money::from_major(15_000_000));
    }

    #[test]
    fn test_secondhand_no_loan_from_ten_million() {
        for price in [10_000_000, 10_000_001, 250_000_000] {
            let result = compose(price, HouseCategory::Secondhand);
            assert_eq!(result.loan_amount, Money::ZERO);
            assert_eq!(result.down_payment, Money::from_major(price));
            assert_eq!(result.loan_percentage, Rate::ZERO);
            assert!(!result.has_loan());
        }

        let just_below = compose(9_999_999, HouseCategory::Secondhand);
        assert_eq!(just_below.loan_amount, Money::from_major(2_500_000));
    }

    #[test]
    fn test_new_house_has_no_zero_loan_rule() {
        let result = compose(10_000_000, HouseCategory::New);
        assert!(result.has_loan());
    }

    #[test]
    fn test_fractional_price() {
        let price = Money::from_decimal(dec!(123456.789));
        let result = compose_mortgage(price, HouseCategory::New, &CalculatorConfig::bddk());
        assert_eq!(result.loan_amount.as_decimal(), dec!(98765.4312));
        assert_eq!(result.house_price(), price);
    }

    #[test]
    fn test_compose_is_idempotent() {
        let first = compose(1_750_000, HouseCategory::Secondhand);
        let second = compose(1_750_000, HouseCategory::Secondhand);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_policy_on_new_houses() {
        let mut config = CalculatorConfig::bddk();
        config.new.loan_cap = Some(Money::from_major(3_000_000));
        config.new.no_loan_from = Some(Money::from_major(50_000_000));

        let capped = compose_mortgage(Money::from_major(8_000_000), HouseCategory::New, &config);
        assert_eq!(capped.loan_amount, Money::from_major(3_000_000));

        let blocked = compose_mortgage(Money::from_major(50_000_000), HouseCategory::New, &config);
        assert_eq!(blocked.loan_amount, Money::ZERO);
    }

    fn price_strategy() -> impl Strategy<Value = Money> {
        (1i64..=10_000_000_000).prop_map(|kurus| Money::from_decimal(Decimal::new(kurus, 2)))
    }

    fn category_strategy() -> impl Strategy<Value = HouseCategory> {
        prop_oneof![Just(HouseCategory::Secondhand), Just(HouseCategory::New)]
    }

    proptest! {
        #[test]
        fn loan_plus_down_payment_equals_price(
            price in price_strategy(),
            category in category_strategy(),
        ) {
            let result = compose_mortgage(price, category, &CalculatorConfig::bddk());
            prop_assert_eq!(result.loan_amount + result.down_payment, price);
            prop_assert!(!result.loan_amount.is_negative());
            prop_assert!(!result.down_payment.is_negative());
        }

        #[test]
        fn secondhand_loan_never_exceeds_cap(price in price_strategy()) {
            let result = compose_mortgage(price, HouseCategory::Secondhand, &CalculatorConfig::bddk());
            prop_assert!(result.loan_amount <= Money::from_major(2_500_000));
        }

        #[test]
        fn loan_never_exceeds_tier_ratio(
            price in price_strategy(),
            category in category_strategy(),
        ) {
            let result = compose_mortgage(price, category, &CalculatorConfig::bddk());
            prop_assert!(result.loan_amount <= price.apply(result.loan_percentage));
        }
    }
}
