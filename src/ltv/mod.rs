pub mod resolver;
pub mod schedule;

pub use resolver::LoanPercentageResolver;
pub use schedule::{LoanTier, TierBracket, TierSchedule};
