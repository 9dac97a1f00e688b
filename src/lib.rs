pub mod calculator;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod format;
pub mod i18n;
pub mod ltv;
pub mod mortgage;
pub mod payments;
pub mod render;
pub mod types;

// re-export key types
pub use calculator::{parse_price, Evaluation, MortgageCalculator, MortgageQuote};
pub use config::{AmortizationTerms, CalculatorConfig, CategoryPolicy};
pub use decimal::{Money, Rate};
pub use errors::{MortgageError, Result};
pub use ltv::{LoanPercentageResolver, LoanTier, TierSchedule};
pub use mortgage::{compose_mortgage, MortgageComposer, MortgageResult};
pub use payments::{AmortizationCalculator, AmortizationSchedule, ScheduledPayment};
pub use types::{HouseCategory, Language};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
