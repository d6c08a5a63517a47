//! Integration tests for the generation stages and their cross-table
//! invariants.

use chrono::NaiveDateTime;
use retail_seed::generator::Dataset;
use retail_seed::model::{CustomerStatus, ProductType};
use retail_seed::{
    CardSelection, ConfigError, Error, Generator, GeneratorConfig, Renderer, Span,
};
use std::collections::{HashMap, HashSet};

fn reference_time() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2025-03-15 14:20:05", "%Y-%m-%d %H:%M:%S").unwrap()
}

fn config(seed: u64) -> GeneratorConfig {
    GeneratorConfig {
        seed: Some(seed),
        reference_time: Some(reference_time()),
        ..Default::default()
    }
}

fn generate(config: GeneratorConfig) -> Dataset {
    Generator::new(config).unwrap().generate().unwrap()
}

fn render(config: GeneratorConfig) -> String {
    let mut generator = Generator::new(config).unwrap();
    let data = generator.generate().unwrap();
    Renderer::new()
        .render_to_string(&generator.config().title, &data)
        .unwrap()
}

#[test]
fn test_default_volumes() {
    let data = generate(config(1));
    assert_eq!(data.customers.len(), 50);
    assert_eq!(data.products.len(), 100);
    assert_eq!(data.offers.len(), 20);
    assert_eq!(data.baskets.len() + data.skipped_baskets.len(), 70);
    assert_eq!(data.seed, Some(1));
}

#[test]
fn test_customer_ids_contiguous_and_statuses_valid() {
    let data = generate(config(2));
    let ids: Vec<i64> = data.customers.iter().map(|c| c.id).collect();
    assert_eq!(ids, (1..=50).collect::<Vec<_>>());
    for customer in &data.customers {
        assert!(CustomerStatus::ALL.contains(&customer.status));
        assert!(customer.phone.starts_with('+'));
        assert!(customer.email.contains('@'));
    }
}

#[test]
fn test_tier_benefits_only_for_silver_and_above() {
    let data = generate(config(3));
    let benefits: HashMap<i64, i64> = data
        .tier_benefits
        .iter()
        .map(|b| (b.customer_id, b.credit_line.hundredths()))
        .collect();
    assert_eq!(benefits.len(), data.tier_benefits.len());

    for customer in &data.customers {
        match customer.status {
            CustomerStatus::Regular => assert!(!benefits.contains_key(&customer.id)),
            _ => {
                let credit = benefits[&customer.id];
                assert!((50_000..=500_000).contains(&credit));
            }
        }
    }
}

#[test]
fn test_shipping_addresses_per_customer() {
    let data = generate(config(4));
    for customer in &data.customers {
        let labels: Vec<&str> = data
            .shipping_addresses
            .iter()
            .filter(|a| a.customer_id == customer.id)
            .map(|a| a.label.as_str())
            .collect();
        assert!((1..=3).contains(&labels.len()));
        let unique: HashSet<&str> = labels.iter().copied().collect();
        assert_eq!(unique.len(), labels.len());
    }
    assert_eq!(data.address_keys.len(), data.shipping_addresses.len());
}

#[test]
fn test_specialization_rows_match_product_types() {
    let data = generate(config(5));
    let computers: HashSet<i64> = data.computers.iter().map(|c| c.product_id).collect();
    let printers: HashSet<i64> = data.printers.iter().map(|p| p.product_id).collect();
    let laptops: HashSet<i64> = data.laptops.iter().map(|l| l.product_id).collect();
    assert_eq!(computers.len(), data.computers.len());
    assert_eq!(printers.len(), data.printers.len());
    assert_eq!(laptops.len(), data.laptops.len());

    for product in &data.products {
        let ty = product.product_type;
        assert_eq!(computers.contains(&product.id), ty.is_computer());
        assert_eq!(printers.contains(&product.id), ty == ProductType::Printer);
        assert_eq!(laptops.contains(&product.id), ty == ProductType::Laptop);
    }
}

#[test]
fn test_offer_prices_below_original() {
    let data = generate(config(6));
    let prices: HashMap<i64, i64> = data
        .products
        .iter()
        .map(|p| (p.id, p.price.hundredths()))
        .collect();
    let offered: HashSet<i64> = data.offers.iter().map(|o| o.product_id).collect();
    assert_eq!(offered.len(), data.offers.len());

    for offer in &data.offers {
        let price = prices[&offer.product_id];
        assert!(offer.offer_price.hundredths() < price);
        // 10-30% off
        assert!(offer.offer_price.hundredths() >= price * 69 / 100);
        assert!(offer.offer_price.hundredths() <= price * 91 / 100);
    }
}

#[test]
fn test_offer_prices_below_original_with_zero_discount() {
    for seed in 0..10 {
        let cfg = GeneratorConfig {
            offer_discount: Span::new(0.0, 0.004),
            ..config(seed)
        };
        let data = generate(cfg);
        let prices: HashMap<i64, i64> = data
            .products
            .iter()
            .map(|p| (p.id, p.price.hundredths()))
            .collect();
        for offer in &data.offers {
            assert!(offer.offer_price.hundredths() < prices[&offer.product_id]);
        }
    }
}

#[test]
fn test_five_products_yield_one_offer() {
    let data = generate(GeneratorConfig {
        product_count: 5,
        ..config(7)
    });
    assert_eq!(data.offers.len(), 1);
}

#[test]
fn test_line_items_reference_existing_rows() {
    let data = generate(config(8));
    let baskets: HashSet<i64> = data.baskets.iter().map(|b| b.id).collect();
    let products: HashSet<i64> = data.products.iter().map(|p| p.id).collect();

    let mut seen = HashSet::new();
    for item in &data.line_items {
        assert!(baskets.contains(&item.basket_id));
        assert!(products.contains(&item.product_id));
        assert!(seen.insert((item.basket_id, item.product_id)));
        assert!((1..=3).contains(&item.quantity));
    }

    for basket in &data.baskets {
        let count = data
            .line_items
            .iter()
            .filter(|i| i.basket_id == basket.id)
            .count();
        assert!((1..=5).contains(&count));
    }
}

#[test]
fn test_transactions_use_owner_addresses() {
    let data = generate(config(9));
    let owners: HashMap<i64, i64> = data.baskets.iter().map(|b| (b.id, b.customer_id)).collect();
    let addresses: HashSet<(i64, &str)> = data
        .shipping_addresses
        .iter()
        .map(|a| (a.customer_id, a.label.as_str()))
        .collect();
    let cards: HashSet<&str> = data
        .payment_instruments
        .iter()
        .map(|c| c.card_number.as_str())
        .collect();

    assert!(!data.transactions.is_empty());
    let mut seen = HashSet::new();
    for tx in &data.transactions {
        assert!(seen.insert(tx.basket_id), "one transaction per basket");
        assert_eq!(owners[&tx.basket_id], tx.address_customer_id);
        assert!(addresses.contains(&(tx.address_customer_id, tx.address_label.as_str())));
        assert!(cards.contains(tx.card_number.as_str()));

        let age = reference_time() - tx.date;
        assert!((1..=365).contains(&age.num_days()));
    }
}

#[test]
fn test_owner_only_card_selection() {
    let data = generate(GeneratorConfig {
        card_selection: CardSelection::OwnerOnly,
        ..config(10)
    });
    let card_owner: HashMap<&str, i64> = data
        .payment_instruments
        .iter()
        .map(|c| (c.card_number.as_str(), c.owner_id))
        .collect();
    for tx in &data.transactions {
        assert_eq!(card_owner[tx.card_number.as_str()], tx.address_customer_id);
    }
}

#[test]
fn test_same_seed_is_byte_identical() {
    let first = render(config(42));
    let second = render(config(42));
    assert_eq!(first, second);
}

#[test]
fn test_different_seeds_differ() {
    assert_ne!(render(config(42)), render(config(43)));
}

#[test]
fn test_single_row_scenario() {
    let mut cfg = GeneratorConfig {
        customer_count: 1,
        product_count: 1,
        basket_count: 1,
        min_items_per_basket: 1,
        max_items_per_basket: 1,
        addresses_per_customer: Span::new(1, 1),
        ..config(11)
    };
    cfg.pools.address_labels = vec!["Home".to_string()];

    let data = generate(cfg);
    assert_eq!(data.customers.len(), 1);
    assert_eq!(data.shipping_addresses.len(), 1);
    assert_eq!(data.products.len(), 1);
    assert!(data.baskets.len() <= 1);
    if let Some(basket) = data.baskets.first() {
        assert_eq!(basket.customer_id, 1);
        assert_eq!(data.line_items.len(), 1);
        assert_eq!(data.line_items[0].product_id, 1);
    }
}

#[test]
fn test_customers_without_addresses_skip_their_baskets() {
    let mut cfg = GeneratorConfig {
        addresses_per_customer: Span::new(0, 0),
        ..config(12)
    };
    cfg.pools.address_labels.clear();

    let data = generate(cfg);
    assert!(data.shipping_addresses.is_empty());
    assert!(data.baskets.is_empty());
    assert!(data.line_items.is_empty());
    assert!(data.transactions.is_empty());

    let skipped: Vec<i64> = data.skipped_baskets.iter().map(|s| s.basket_id).collect();
    assert_eq!(skipped, (1..=70).collect::<Vec<_>>());
    assert_eq!(data.stats().skipped_baskets, skipped);
}

#[test]
fn test_skipped_baskets_leave_id_gaps() {
    // Roughly half the customers get no address
    let cfg = GeneratorConfig {
        addresses_per_customer: Span::new(0, 1),
        ..config(13)
    };
    let data = generate(cfg);
    assert!(!data.skipped_baskets.is_empty());

    let emitted: HashSet<i64> = data.baskets.iter().map(|b| b.id).collect();
    for skipped in &data.skipped_baskets {
        assert!(!emitted.contains(&skipped.basket_id));
        assert!(!data
            .shipping_addresses
            .iter()
            .any(|a| a.customer_id == skipped.customer_id));
    }
    let mut all: Vec<i64> = emitted
        .iter()
        .copied()
        .chain(data.skipped_baskets.iter().map(|s| s.basket_id))
        .collect();
    all.sort();
    assert_eq!(all, (1..=70).collect::<Vec<_>>());
}

#[test]
fn test_label_pool_too_small_fails_fast() {
    let mut cfg = config(14);
    cfg.pools.address_labels = vec!["Home".to_string()];

    match Generator::new(cfg) {
        Err(Error::Config(ConfigError::AddressLabelPoolTooSmall {
            requested,
            available,
        })) => {
            assert_eq!(requested, 3);
            assert_eq!(available, 1);
        }
        other => panic!("expected label pool error, got {:?}", other.err()),
    }
}

#[test]
fn test_catalog_too_small_fails_fast() {
    let cfg = GeneratorConfig {
        product_count: 2,
        ..config(15)
    };
    assert!(matches!(
        Generator::new(cfg),
        Err(Error::Config(ConfigError::CatalogTooSmall {
            requested: 5,
            available: 2
        }))
    ));
}

#[test]
fn test_stats_row_counts() {
    let data = generate(config(16));
    let stats = data.stats();
    assert_eq!(stats.tables.len(), 12);
    assert_eq!(stats.tables[0].table, "CUSTOMER");
    assert_eq!(stats.tables[0].rows, 50);
    assert_eq!(stats.tables[11].table, "TRANSACTION");
    assert_eq!(stats.tables[11].rows, data.transactions.len());
    assert_eq!(
        stats.total_rows,
        stats.tables.iter().map(|t| t.rows).sum::<usize>()
    );
    assert_eq!(stats.reference_time, "2025-03-15 14:20:05");
}

#[test]
fn test_duplicate_address_labels_fail_fast() {
    let mut cfg = config(7);
    cfg.pools.address_labels = vec!["Home".to_string(); 3];

    assert!(matches!(
        Generator::new(cfg),
        Err(Error::Config(ConfigError::DuplicatePoolEntry {
            pool: "address_labels",
            ..
        }))
    ));
}

#[test]
fn test_out_of_range_date_horizons_fail_fast() {
    let cfg = GeneratorConfig {
        transaction_age_days: Span::new(1, i64::MAX / 2),
        ..config(17)
    };
    assert!(matches!(
        Generator::new(cfg),
        Err(Error::Config(ConfigError::AboveMaximum { .. }))
    ));

    let cfg = GeneratorConfig {
        card_expiry_years: u32::MAX,
        ..config(18)
    };
    assert!(matches!(
        Generator::new(cfg),
        Err(Error::Config(ConfigError::AboveMaximum { .. }))
    ));
}

#[test]
fn test_widest_accepted_date_horizons_generate() {
    let cfg = GeneratorConfig {
        transaction_age_days: Span::new(0, retail_seed::config::MAX_TRANSACTION_AGE_DAYS),
        card_expiry_years: retail_seed::config::MAX_CARD_EXPIRY_YEARS,
        transaction_probability: 1.0,
        ..config(19)
    };
    let data = generate(cfg);
    assert!(!data.transactions.is_empty());
    for tx in &data.transactions {
        assert!(tx.date <= reference_time());
    }
}
