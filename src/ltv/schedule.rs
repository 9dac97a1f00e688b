use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{MortgageError, Result};

/// one band of a loan-to-value schedule, applying from `from` (inclusive)
/// up to the next tier's lower bound (exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTier {
    pub from: Money,
    pub ratio: Rate,
}

impl LoanTier {
    pub fn new(from: Money, ratio: Rate) -> Self {
        Self { from, ratio }
    }
}

/// a tier together with its exclusive upper bound, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierBracket {
    pub from: Money,
    pub until: Option<Money>,
    pub ratio: Rate,
}

/// ordered loan-to-value schedule with half-open tiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierSchedule {
    tiers: Vec<LoanTier>,
}

impl TierSchedule {
    /// create a validated schedule
    pub fn new(tiers: Vec<LoanTier>) -> Result<Self> {
        let schedule = Self { tiers };
        schedule.validate()?;
        Ok(schedule)
    }

    /// BDDK schedule for secondhand houses
    pub fn bddk_secondhand() -> Self {
        Self {
            tiers: vec![
                LoanTier::new(Money::ZERO, Rate::from_decimal(dec!(0.90))),
                LoanTier::new(Money::from_major(1_000_000), Rate::from_decimal(dec!(0.60))),
                LoanTier::new(Money::from_major(2_000_000), Rate::from_decimal(dec!(0.50))),
            ],
        }
    }

    /// BDDK schedule for new houses
    pub fn bddk_new() -> Self {
        Self {
            tiers: vec![
                LoanTier::new(Money::ZERO, Rate::from_decimal(dec!(0.80))),
                LoanTier::new(Money::from_major(5_000_000), Rate::from_decimal(dec!(0.70))),
                LoanTier::new(Money::from_major(10_000_000), Rate::from_decimal(dec!(0.60))),
                LoanTier::new(Money::from_major(20_000_000), Rate::from_decimal(dec!(0.50))),
            ],
        }
    }

    pub fn tiers(&self) -> &[LoanTier] {
        &self.tiers
    }

    /// ratio of the tier containing `price`; a price on a boundary falls
    /// into the upper tier. An empty schedule lends nothing.
    pub fn ratio_for(&self, price: Money) -> Rate {
        self.tiers
            .iter()
            .rev()
            .find(|tier| price >= tier.from)
            .or_else(|| self.tiers.first())
            .map(|tier| tier.ratio)
            .unwrap_or(Rate::ZERO)
    }

    /// tiers paired with their upper bounds, in ascending order
    pub fn brackets(&self) -> impl Iterator<Item = TierBracket> + '_ {
        self.tiers.iter().enumerate().map(move |(i, tier)| TierBracket {
            from: tier.from,
            until: self.tiers.get(i + 1).map(|next| next.from),
            ratio: tier.ratio,
        })
    }

    /// check ordering and ratio bounds
    pub fn validate(&self) -> Result<()> {
        let first = self.tiers.first().ok_or_else(|| MortgageError::InvalidConfiguration {
            message: "tier schedule must contain at least one tier".to_string(),
        })?;

        if !first.from.is_zero() {
            return Err(MortgageError::InvalidConfiguration {
                message: format!("first tier must start at 0, found {}", first.from),
            });
        }

        for pair in self.tiers.windows(2) {
            if pair[1].from <= pair[0].from {
                return Err(MortgageError::InvalidConfiguration {
                    message: format!(
                        "tier bounds must strictly increase: {} follows {}",
                        pair[1].from, pair[0].from
                    ),
                });
            }
        }

        for tier in &self.tiers {
            if tier.ratio <= Rate::ZERO || tier.ratio > Rate::ONE {
                return Err(MortgageError::InvalidLoanRatio { ratio: tier.ratio });
            }
        }

        Ok(())
    }
}
