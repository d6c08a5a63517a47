//! Error types.
//!
//! Generation itself cannot fail once the configuration has been validated,
//! so almost every variant here is a configuration problem caught up front.

use thiserror::Error;

/// A configuration that cannot produce a consistent dataset
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error(
        "cannot draw {requested} distinct address labels per customer from a pool of {available}"
    )]
    AddressLabelPoolTooSmall { requested: usize, available: usize },

    #[error("cannot pick {requested} distinct products per basket from a catalog of {available}")]
    CatalogTooSmall { requested: usize, available: usize },

    #[error("invalid range for {name}: min {min} is greater than max {max}")]
    InvertedRange {
        name: &'static str,
        min: String,
        max: String,
    },

    #[error("{name} must be at least {min}")]
    BelowMinimum { name: &'static str, min: String },

    #[error("{name} must be at most {max}")]
    AboveMaximum { name: &'static str, max: String },

    #[error("{0} must lie in [0, 1)")]
    FractionOutOfRange(&'static str),

    #[error("{0} must lie in [0, 1]")]
    ProbabilityOutOfRange(&'static str),

    #[error("cannot generate baskets without customers")]
    NoCustomers,

    #[error("value pool '{0}' is empty")]
    EmptyPool(&'static str),

    #[error("value pool '{pool}' lists '{value}' more than once")]
    DuplicatePoolEntry { pool: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
