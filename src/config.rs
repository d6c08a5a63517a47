//! Generator configuration.
//!
//! Volumes, value ranges and behaviour switches for a generation run, with
//! YAML loading. Every field has a default, so a config file only needs the
//! keys it wants to change:
//!
//! ```yaml
//! customer_count: 10
//! basket_count: 20
//! delivery_tags: intended
//! pools:
//!   brands: [Acme]
//! ```

use crate::error::{ConfigError, Result};
use crate::pools::Pools;
use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Display;
use std::fs;
use std::path::Path;

/// Upper bound on how far back a transaction may be dated (about 270 years)
pub const MAX_TRANSACTION_AGE_DAYS: i64 = 100_000;

/// Upper bound on the card expiry horizon
pub const MAX_CARD_EXPIRY_YEARS: u32 = 100;

/// Inclusive `[min, max]` range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span<T> {
    pub min: T,
    pub max: T,
}

impl<T> Span<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: PartialOrd + Display> Span<T> {
    fn check(&self, name: &'static str) -> std::result::Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvertedRange {
                name,
                min: self.min.to_string(),
                max: self.max.to_string(),
            });
        }
        Ok(())
    }
}

/// How a transaction's delivery tag is drawn.
///
/// `Literal` first flips a fair coin between the two tags 90% of the time and
/// otherwise forces `not-delivered`, so roughly 45% of transactions end up
/// delivered. `Intended` marks 90% as delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryTagMode {
    #[default]
    Literal,
    Intended,
}

impl std::str::FromStr for DeliveryTagMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "literal" => Ok(DeliveryTagMode::Literal),
            "intended" => Ok(DeliveryTagMode::Intended),
            _ => Err(format!(
                "Unknown delivery tag mode: {}. Valid options: literal, intended",
                s
            )),
        }
    }
}

/// Which cards a transaction may be charged to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardSelection {
    /// Any card generated for any customer
    #[default]
    GlobalPool,
    /// Only cards stored by the basket's owner
    OwnerOnly,
}

impl std::str::FromStr for CardSelection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "global_pool" | "global" => Ok(CardSelection::GlobalPool),
            "owner_only" | "owner" => Ok(CardSelection::OwnerOnly),
            _ => Err(format!(
                "Unknown card selection: {}. Valid options: global-pool, owner-only",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Title written on the first line of the output
    pub title: String,

    pub customer_count: usize,
    pub product_count: usize,
    pub basket_count: usize,
    pub min_items_per_basket: usize,
    pub max_items_per_basket: usize,

    pub addresses_per_customer: Span<usize>,
    pub cards_per_customer: Span<usize>,
    pub credit_line: Span<f64>,
    pub price: Span<f64>,
    pub stock: Span<i64>,
    pub model_number: Span<u32>,
    pub laptop_weight: Span<f64>,
    /// One product in this many gets an offer
    pub products_per_offer: usize,
    pub offer_discount: Span<f64>,
    pub price_jitter: Span<f64>,
    pub item_quantity: Span<i64>,
    pub transaction_probability: f64,
    pub transaction_age_days: Span<i64>,
    pub card_expiry_years: u32,

    pub delivery_tags: DeliveryTagMode,
    pub card_selection: CardSelection,

    /// RNG seed; the CLI fills this in when absent so every run is reproducible
    pub seed: Option<u64>,
    /// "Now" for card expiry and transaction dates (local time when absent)
    pub reference_time: Option<NaiveDateTime>,

    pub pools: Pools,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            title: "Retail Sample Data".to_string(),
            customer_count: 50,
            product_count: 100,
            basket_count: 70,
            min_items_per_basket: 1,
            max_items_per_basket: 5,
            addresses_per_customer: Span::new(1, 3),
            cards_per_customer: Span::new(1, 2),
            credit_line: Span::new(500.0, 5000.0),
            price: Span::new(100.0, 3000.0),
            stock: Span::new(5, 100),
            model_number: Span::new(10, 9999),
            laptop_weight: Span::new(0.8, 3.5),
            products_per_offer: 5,
            offer_discount: Span::new(0.10, 0.30),
            price_jitter: Span::new(0.9, 1.1),
            item_quantity: Span::new(1, 3),
            transaction_probability: 0.8,
            transaction_age_days: Span::new(1, 365),
            card_expiry_years: 3,
            delivery_tags: DeliveryTagMode::default(),
            card_selection: CardSelection::default(),
            seed: None,
            reference_time: None,
            pools: Pools::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: GeneratorConfig = serde_yaml_ng::from_str(content)?;
        Ok(config)
    }

    /// Reference time truncated to whole seconds
    pub fn reference_time(&self) -> NaiveDateTime {
        self.reference_time
            .unwrap_or_else(|| Local::now().naive_local())
            .trunc_subsecs(0)
    }

    /// Check that the configuration can produce a consistent dataset.
    ///
    /// Requests that would force a "distinct" draw to silently truncate are
    /// rejected here rather than during generation.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.addresses_per_customer.check("addresses_per_customer")?;
        self.cards_per_customer.check("cards_per_customer")?;
        self.credit_line.check("credit_line")?;
        self.price.check("price")?;
        self.stock.check("stock")?;
        self.model_number.check("model_number")?;
        self.laptop_weight.check("laptop_weight")?;
        self.offer_discount.check("offer_discount")?;
        self.price_jitter.check("price_jitter")?;
        self.item_quantity.check("item_quantity")?;
        self.transaction_age_days.check("transaction_age_days")?;
        Span::new(self.min_items_per_basket, self.max_items_per_basket)
            .check("items_per_basket")?;

        let mut seen = HashSet::new();
        for label in &self.pools.address_labels {
            if !seen.insert(label.as_str()) {
                return Err(ConfigError::DuplicatePoolEntry {
                    pool: "address_labels",
                    value: label.clone(),
                });
            }
        }
        let labels = self.pools.address_labels.len();
        if self.addresses_per_customer.max > labels {
            return Err(ConfigError::AddressLabelPoolTooSmall {
                requested: self.addresses_per_customer.max,
                available: labels,
            });
        }

        if self.basket_count > 0 {
            if self.customer_count == 0 {
                return Err(ConfigError::NoCustomers);
            }
            if self.min_items_per_basket == 0 {
                return Err(ConfigError::BelowMinimum {
                    name: "min_items_per_basket",
                    min: "1".to_string(),
                });
            }
            if self.max_items_per_basket > self.product_count {
                return Err(ConfigError::CatalogTooSmall {
                    requested: self.max_items_per_basket,
                    available: self.product_count,
                });
            }
        }

        if self.cards_per_customer.min == 0 {
            return Err(ConfigError::BelowMinimum {
                name: "cards_per_customer.min",
                min: "1".to_string(),
            });
        }
        if (self.price.min * 100.0).round() < 1.0 {
            return Err(ConfigError::BelowMinimum {
                name: "price.min",
                min: "0.01".to_string(),
            });
        }
        if self.products_per_offer == 0 {
            return Err(ConfigError::BelowMinimum {
                name: "products_per_offer",
                min: "1".to_string(),
            });
        }
        if self.item_quantity.min < 1 {
            return Err(ConfigError::BelowMinimum {
                name: "item_quantity.min",
                min: "1".to_string(),
            });
        }
        if self.stock.min < 0 {
            return Err(ConfigError::BelowMinimum {
                name: "stock.min",
                min: "0".to_string(),
            });
        }
        if self.transaction_age_days.min < 0 {
            return Err(ConfigError::BelowMinimum {
                name: "transaction_age_days.min",
                min: "0".to_string(),
            });
        }
        if self.transaction_age_days.max > MAX_TRANSACTION_AGE_DAYS {
            return Err(ConfigError::AboveMaximum {
                name: "transaction_age_days.max",
                max: MAX_TRANSACTION_AGE_DAYS.to_string(),
            });
        }
        if self.card_expiry_years > MAX_CARD_EXPIRY_YEARS {
            return Err(ConfigError::AboveMaximum {
                name: "card_expiry_years",
                max: MAX_CARD_EXPIRY_YEARS.to_string(),
            });
        }
        if self.price_jitter.min < 0.0 {
            return Err(ConfigError::BelowMinimum {
                name: "price_jitter.min",
                min: "0".to_string(),
            });
        }
        if !(0.0..1.0).contains(&self.offer_discount.min)
            || !(0.0..1.0).contains(&self.offer_discount.max)
        {
            return Err(ConfigError::FractionOutOfRange("offer_discount"));
        }
        if !(0.0..=1.0).contains(&self.transaction_probability) {
            return Err(ConfigError::ProbabilityOutOfRange("transaction_probability"));
        }

        for (name, pool) in self.pools.required() {
            if pool.is_empty() {
                return Err(ConfigError::EmptyPool(name));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = GeneratorConfig::default();
        assert_eq!(config.customer_count, 50);
        assert_eq!(config.product_count, 100);
        assert_eq!(config.basket_count, 70);
        assert_eq!(config.min_items_per_basket, 1);
        assert_eq!(config.max_items_per_basket, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_label_pool_too_small() {
        let mut config = GeneratorConfig::default();
        config.pools.address_labels = vec!["Home".to_string(), "Work".to_string()];
        assert_eq!(
            config.validate(),
            Err(ConfigError::AddressLabelPoolTooSmall {
                requested: 3,
                available: 2
            })
        );
    }

    #[test]
    fn test_catalog_too_small() {
        let config = GeneratorConfig {
            product_count: 3,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::CatalogTooSmall {
                requested: 5,
                available: 3
            })
        );
    }

    #[test]
    fn test_small_catalog_without_baskets_is_fine() {
        let config = GeneratorConfig {
            product_count: 3,
            basket_count: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_inverted_range() {
        let config = GeneratorConfig {
            min_items_per_basket: 4,
            max_items_per_basket: 2,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedRange {
                name: "items_per_basket",
                ..
            })
        ));
    }

    #[test]
    fn test_baskets_need_customers() {
        let config = GeneratorConfig {
            customer_count: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoCustomers));
    }

    #[test]
    fn test_empty_pool_rejected() {
        let mut config = GeneratorConfig::default();
        config.pools.categories.printer.clear();
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyPool("categories.printer"))
        );
    }

    #[test]
    fn test_discount_must_be_a_fraction() {
        let config = GeneratorConfig {
            offer_discount: Span::new(0.5, 1.0),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::FractionOutOfRange("offer_discount"))
        );
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
customer_count: 7
delivery_tags: intended
card_selection: owner_only
addresses_per_customer: { min: 0, max: 1 }
pools:
  brands: [Acme]
"#;
        let config = GeneratorConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.customer_count, 7);
        assert_eq!(config.product_count, 100);
        assert_eq!(config.delivery_tags, DeliveryTagMode::Intended);
        assert_eq!(config.card_selection, CardSelection::OwnerOnly);
        assert_eq!(config.addresses_per_customer, Span::new(0, 1));
        assert_eq!(config.pools.brands, vec!["Acme".to_string()]);
        assert_eq!(config.pools.cpus, Pools::default().cpus);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_duplicate_address_labels_rejected() {
        let mut config = GeneratorConfig::default();
        config.pools.address_labels = vec!["Home".to_string(); 3];
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicatePoolEntry {
                pool: "address_labels",
                value: "Home".to_string(),
            })
        );
    }

    #[test]
    fn test_date_horizons_are_bounded() {
        let config = GeneratorConfig {
            transaction_age_days: Span::new(1, i64::MAX / 2),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::AboveMaximum {
                name: "transaction_age_days.max",
                ..
            })
        ));

        let config = GeneratorConfig {
            card_expiry_years: u32::MAX,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::AboveMaximum {
                name: "card_expiry_years",
                ..
            })
        ));

        let config = GeneratorConfig {
            transaction_age_days: Span::new(0, MAX_TRANSACTION_AGE_DAYS),
            card_expiry_years: MAX_CARD_EXPIRY_YEARS,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reference_time_yaml() {
        let yaml = "reference_time: 2024-06-01T12:30:45\n";
        let config = GeneratorConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(
            config.reference_time().to_string(),
            "2024-06-01 12:30:45".to_string()
        );
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(
            "Intended".parse::<DeliveryTagMode>().unwrap(),
            DeliveryTagMode::Intended
        );
        assert_eq!(
            "owner-only".parse::<CardSelection>().unwrap(),
            CardSelection::OwnerOnly
        );
        assert!("sometimes".parse::<DeliveryTagMode>().is_err());
    }
}
