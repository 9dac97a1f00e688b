use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MortgageError {
    #[error("invalid house price: {input:?}")]
    InvalidPrice {
        input: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("invalid loan ratio: {ratio} must be in (0, 1]")]
    InvalidLoanRatio {
        ratio: Rate,
    },

    #[error("invalid loan cap: {cap}")]
    InvalidLoanCap {
        cap: Money,
    },

    #[error("failed to load configuration: {message}")]
    ConfigLoad {
        message: String,
    },
}

impl From<config::ConfigError> for MortgageError {
    fn from(err: config::ConfigError) -> Self {
        MortgageError::ConfigLoad {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MortgageError>;
