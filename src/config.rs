use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decimal::{Money, Rate};
use crate::errors::{MortgageError, Result};
use crate::ltv::TierSchedule;
use crate::types::HouseCategory;

/// prefix for environment overrides, e.g. `TR_MORTGAGE__AMORTIZATION__TERM_YEARS=15`
pub const ENV_PREFIX: &str = "TR_MORTGAGE";

/// longest repayment term accepted from configuration
pub const MAX_TERM_YEARS: u32 = 50;

/// regulation document the default schedules follow
pub const BDDK_SOURCE_URL: &str = "https://www.bddk.org.tr/Mevzuat/DokumanGetir/1164";

/// calculator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub secondhand: CategoryPolicy,
    pub new: CategoryPolicy,
    pub amortization: AmortizationTerms,
}

/// lending rules for one house category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPolicy {
    pub tiers: TierSchedule,
    /// absolute ceiling on the loan amount
    #[serde(default)]
    pub loan_cap: Option<Money>,
    /// prices at or above this get no loan at all
    #[serde(default)]
    pub no_loan_from: Option<Money>,
}

/// fixed-rate repayment terms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmortizationTerms {
    pub term_years: u32,
    /// applied directly as the per-period rate, not derived from an annual rate
    pub monthly_rate: Rate,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::bddk()
    }
}

impl Default for AmortizationTerms {
    fn default() -> Self {
        Self {
            term_years: 10,
            monthly_rate: Rate::from_decimal(dec!(0.0265)),
        }
    }
}

impl AmortizationTerms {
    pub fn new(term_years: u32, monthly_rate: Rate) -> Self {
        Self {
            term_years,
            monthly_rate,
        }
    }

    /// total number of monthly installments
    pub fn number_of_payments(&self) -> u32 {
        self.term_years.saturating_mul(12)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_TERM_YEARS).contains(&self.term_years) {
            return Err(MortgageError::InvalidConfiguration {
                message: format!(
                    "term_years must be between 1 and {}, found {}",
                    MAX_TERM_YEARS, self.term_years
                ),
            });
        }
        let rate = self.monthly_rate.as_decimal();
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(MortgageError::InvalidConfiguration {
                message: format!("monthly_rate must be within 0% and 100%, found {}", self.monthly_rate),
            });
        }
        Ok(())
    }
}

impl CategoryPolicy {
    /// secondhand: 90/60/50 tiers, 2.5M cap, no loan from 10M
    pub fn bddk_secondhand() -> Self {
        Self {
            tiers: TierSchedule::bddk_secondhand(),
            loan_cap: Some(Money::from_major(2_500_000)),
            no_loan_from: Some(Money::from_major(10_000_000)),
        }
    }

    /// new: 80/70/60/50 tiers, uncapped
    pub fn bddk_new() -> Self {
        Self {
            tiers: TierSchedule::bddk_new(),
            loan_cap: None,
            no_loan_from: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.tiers.validate()?;
        if let Some(cap) = self.loan_cap {
            if !cap.is_positive() {
                return Err(MortgageError::InvalidLoanCap { cap });
            }
        }
        if let Some(threshold) = self.no_loan_from {
            if !threshold.is_positive() {
                return Err(MortgageError::InvalidConfiguration {
                    message: format!("no_loan_from must be positive, found {}", threshold),
                });
            }
        }
        Ok(())
    }
}

impl CalculatorConfig {
    /// the BDDK rules as currently published
    pub fn bddk() -> Self {
        Self {
            secondhand: CategoryPolicy::bddk_secondhand(),
            new: CategoryPolicy::bddk_new(),
            amortization: AmortizationTerms::default(),
        }
    }

    /// policy for a house category
    pub fn policy(&self, category: HouseCategory) -> &CategoryPolicy {
        match category {
            HouseCategory::Secondhand => &self.secondhand,
            HouseCategory::New => &self.new,
        }
    }

    /// replace the repayment terms
    pub fn with_amortization(mut self, terms: AmortizationTerms) -> Self {
        self.amortization = terms;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.secondhand.validate()?;
        self.new.validate()?;
        self.amortization.validate()?;
        Ok(())
    }

    /// load from an optional toml/json file layered with environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            debug!(path = %path.display(), "loading calculator config file");
            builder = builder.add_source(config::File::from(path).required(true));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// parse a toml document
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Self::from_source(config::File::from_str(s, config::FileFormat::Toml))
    }

    /// parse a json document
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| MortgageError::ConfigLoad {
            message: e.to_string(),
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn from_source<S>(source: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let cfg: Self = config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ltv::LoanTier;
    use std::sync::Mutex;

    // `load` reads the process environment, so tests touching it run one at a time
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_is_bddk() {
        let cfg = CalculatorConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.amortization.term_years, 10);
        assert_eq!(cfg.amortization.monthly_rate.as_decimal(), dec!(0.0265));
        assert_eq!(cfg.amortization.number_of_payments(), 120);
        assert_eq!(cfg.secondhand.loan_cap, Some(Money::from_major(2_500_000)));
        assert_eq!(cfg.secondhand.no_loan_from, Some(Money::from_major(10_000_000)));
        assert_eq!(cfg.new.loan_cap, None);
        assert_eq!(cfg.new.no_loan_from, None);
    }

    #[test]
    fn test_policy_lookup() {
        let cfg = CalculatorConfig::bddk();
        assert_eq!(cfg.policy(HouseCategory::New), &cfg.new);
        assert_eq!(cfg.policy(HouseCategory::Secondhand), &cfg.secondhand);
    }

    #[test]
    fn test_zero_term_rejected() {
        let cfg = CalculatorConfig::bddk().with_amortization(AmortizationTerms::new(0, Rate::ZERO));
        assert!(matches!(cfg.validate(), Err(MortgageError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_term_and_rate_bounds() {
        let too_long = AmortizationTerms::new(300, Rate::from_decimal(dec!(0.0265)));
        assert!(matches!(too_long.validate(), Err(MortgageError::InvalidConfiguration { .. })));
        assert!(CalculatorConfig::bddk().with_amortization(too_long).validate().is_err());

        assert!(AmortizationTerms::new(u32::MAX, Rate::ZERO).validate().is_err());
        assert_eq!(AmortizationTerms::new(u32::MAX, Rate::ZERO).number_of_payments(), u32::MAX);

        assert!(AmortizationTerms::new(MAX_TERM_YEARS, Rate::ONE).validate().is_ok());
        assert!(AmortizationTerms::new(10, Rate::from_decimal(dec!(1.01))).validate().is_err());
    }

    #[test]
    fn test_negative_rate_rejected() {
        let terms = AmortizationTerms::new(10, Rate::from_decimal(dec!(-0.01)));
        assert!(terms.validate().is_err());
    }

    #[test]
    fn test_non_positive_cap_rejected() {
        let mut cfg = CalculatorConfig::bddk();
        cfg.new.loan_cap = Some(Money::ZERO);
        assert!(matches!(cfg.validate(), Err(MortgageError::InvalidLoanCap { .. })));
    }

    #[test]
    fn test_toml_overrides_only_what_it_names() {
        let toml = r#"
            [amortization]
            term_years = 15
            monthly_rate = "0.02"
        "#;
        let cfg = CalculatorConfig::from_toml_str(toml).unwrap();
        assert_eq!(cfg.amortization.term_years, 15);
        assert_eq!(cfg.amortization.monthly_rate.as_decimal(), dec!(0.02));
        assert_eq!(cfg.secondhand, CategoryPolicy::bddk_secondhand());
        assert_eq!(cfg.new, CategoryPolicy::bddk_new());
    }

    #[test]
    fn test_toml_custom_schedule() {
        let toml = r#"
            [new]
            loan_cap = "4000000"

            [[new.tiers]]
            from = "0"
            ratio = "0.75"

            [[new.tiers]]
            from = "8000000"
            ratio = "0.5"
        "#;
        let cfg = CalculatorConfig::from_toml_str(toml).unwrap();
        assert_eq!(
            cfg.new.tiers.tiers(),
            &[
                LoanTier::new(Money::ZERO, Rate::from_percentage(75)),
                LoanTier::new(Money::from_major(8_000_000), Rate::from_percentage(50)),
            ]
        );
        assert_eq!(cfg.new.loan_cap, Some(Money::from_major(4_000_000)));
        assert_eq!(cfg.new.no_loan_from, None);
    }

    #[test]
    fn test_json_round_trip_of_defaults() {
        let json = serde_json::to_string(&CalculatorConfig::bddk()).unwrap();
        let cfg = CalculatorConfig::from_json_str(&json).unwrap();
        assert_eq!(cfg, CalculatorConfig::bddk());
    }

    #[test]
    fn test_invalid_file_contents_rejected() {
        let toml = r#"
            [[secondhand.tiers]]
            from = "0"
            ratio = "1.5"
        "#;
        assert!(matches!(
            CalculatorConfig::from_toml_str(toml),
            Err(MortgageError::InvalidLoanRatio { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mortgage.toml");
        std::fs::write(&path, "[amortization]\nterm_years = 20\n").unwrap();

        let cfg = CalculatorConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(cfg.amortization.term_years, 20);
        assert_eq!(cfg.amortization.monthly_rate.as_decimal(), dec!(0.0265));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            CalculatorConfig::load(Some(path.as_path())),
            Err(MortgageError::ConfigLoad { .. })
        ));
    }

    #[test]
    fn test_load_env_overrides() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("TR_MORTGAGE__AMORTIZATION__TERM_YEARS", "15");
        std::env::set_var("TR_MORTGAGE__AMORTIZATION__MONTHLY_RATE", "0.02");

        let loaded = CalculatorConfig::load(None);

        std::env::remove_var("TR_MORTGAGE__AMORTIZATION__TERM_YEARS");
        std::env::remove_var("TR_MORTGAGE__AMORTIZATION__MONTHLY_RATE");

        let cfg = loaded.unwrap();
        assert_eq!(cfg.amortization.term_years, 15);
        assert_eq!(cfg.amortization.monthly_rate.as_decimal(), dec!(0.02));
        assert_eq!(cfg.secondhand, CategoryPolicy::bddk_secondhand());
        assert_eq!(cfg.new, CategoryPolicy::bddk_new());
    }

    #[test]
    fn test_env_overrides_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mortgage.toml");
        std::fs::write(&path, "[amortization]\nterm_years = 20\nmonthly_rate = \"0.01\"\n").unwrap();
        std::env::set_var("TR_MORTGAGE__AMORTIZATION__TERM_YEARS", "25");

        let loaded = CalculatorConfig::load(Some(path.as_path()));

        std::env::remove_var("TR_MORTGAGE__AMORTIZATION__TERM_YEARS");

        let cfg = loaded.unwrap();
        assert_eq!(cfg.amortization.term_years, 25);
        assert_eq!(cfg.amortization.monthly_rate.as_decimal(), dec!(0.01));
    }
}
