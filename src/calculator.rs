use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{AmortizationTerms, CalculatorConfig};
use crate::decimal::Money;
use crate::errors::{MortgageError, Result};
use crate::mortgage::{MortgageComposer, MortgageResult};
use crate::payments::{AmortizationCalculator, AmortizationSchedule};
use crate::types::HouseCategory;

/// largest house price accepted, in whole lira
pub const MAX_HOUSE_PRICE: i64 = 1_000_000_000_000_000;

fn in_price_range(price: Money) -> bool {
    price.is_positive() && price <= Money::from_major(MAX_HOUSE_PRICE)
}

/// parse a user-entered house price; empty, non-numeric, non-positive and
/// out-of-range input is rejected
pub fn parse_price(input: &str) -> Result<Money> {
    let invalid = || MortgageError::InvalidPrice {
        input: input.to_string(),
    };

    let price = Money::from_str_exact(input.trim()).map_err(|_| invalid())?;
    if !in_price_range(price) {
        return Err(invalid());
    }
    Ok(price)
}

/// full result for one valid price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageQuote {
    pub category: HouseCategory,
    pub house_price: Money,
    pub mortgage: MortgageResult,
    pub monthly_payment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    pub terms: AmortizationTerms,
}

impl MortgageQuote {
    /// get json representation of the quote
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("JSON error: {}", e))
    }
}

/// outcome of evaluating the current input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Evaluation {
    /// nothing entered yet
    NoInput,
    /// something entered that is not a positive number
    InvalidPrice { input: String },
    /// a valid price
    Quote(MortgageQuote),
}

impl Evaluation {
    pub fn quote(&self) -> Option<&MortgageQuote> {
        match self {
            Evaluation::Quote(quote) => Some(quote),
            _ => None,
        }
    }

    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("JSON error: {}", e))
    }
}

/// runs the whole pipeline from raw input to quote under one configuration
#[derive(Debug, Clone)]
pub struct MortgageCalculator {
    config: CalculatorConfig,
}

impl MortgageCalculator {
    /// create with a validated configuration
    pub fn new(config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// calculator under the published BDDK rules
    pub fn bddk() -> Self {
        Self {
            config: CalculatorConfig::bddk(),
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn amortization(&self) -> AmortizationCalculator {
        AmortizationCalculator::new(self.config.amortization)
    }

    /// evaluate raw price text for a category
    pub fn evaluate(&self, input: &str, category: HouseCategory) -> Evaluation {
        if input.trim().is_empty() {
            return Evaluation::NoInput;
        }

        match parse_price(input).and_then(|price| self.quote(price, category)) {
            Ok(quote) => Evaluation::Quote(quote),
            Err(err) => {
                debug!(%err, "no result for input");
                Evaluation::InvalidPrice {
                    input: input.to_string(),
                }
            }
        }
    }

    /// quote a validated price
    pub fn quote(&self, price: Money, category: HouseCategory) -> Result<MortgageQuote> {
        if !in_price_range(price) {
            return Err(MortgageError::InvalidPrice {
                input: price.to_string(),
            });
        }

        let mortgage = MortgageComposer::new(&self.config).compose(price, category);
        let amortization = self.amortization();

        Ok(MortgageQuote {
            category,
            house_price: mortgage.house_price(),
            mortgage,
            monthly_payment: amortization.monthly_payment(mortgage.loan_amount),
            total_payment: amortization.total_payment(mortgage.loan_amount),
            total_interest: amortization.total_interest(mortgage.loan_amount),
            terms: self.config.amortization,
        })
    }

    /// repayment schedule for a quote's loan
    pub fn schedule(&self, quote: &MortgageQuote) -> AmortizationSchedule {
        self.amortization().schedule(quote.mortgage.loan_amount)
    }
}

impl Default for MortgageCalculator {
    fn default() -> Self {
        Self::bddk()
    }
}
