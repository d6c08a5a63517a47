//! Data generator that produces rows for every table.
//!
//! Stages run in dependency order and hand each other side-lists (customer
//! keys, address keys, card keys, product partitions) so every foreign
//! reference points at a row generated earlier.

pub mod basket;
pub mod catalog;
pub mod customer;

use crate::config::GeneratorConfig;
use crate::error::{ConfigError, Result};
use crate::fake::FakeData;
use crate::model::{
    Basket, ComputerSpec, Customer, LaptopSpec, LineItem, PaymentInstrument, PrinterSpec, Product,
    PromotionalOffer, ShippingAddress, SkippedBasket, TierBenefit, Transaction,
};
use crate::schema;
use basket::BasketInputs;
use catalog::ProductPartitions;
use chrono::NaiveDateTime;
use customer::{AddressKey, CardKey, CustomerKey};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::debug;

/// Everything one run produced, in stage order
#[derive(Debug, Clone)]
pub struct Dataset {
    pub seed: Option<u64>,
    pub reference_time: NaiveDateTime,

    pub customers: Vec<Customer>,
    pub tier_benefits: Vec<TierBenefit>,
    pub shipping_addresses: Vec<ShippingAddress>,
    pub payment_instruments: Vec<PaymentInstrument>,
    pub products: Vec<Product>,
    pub computers: Vec<ComputerSpec>,
    pub printers: Vec<PrinterSpec>,
    pub laptops: Vec<LaptopSpec>,
    pub offers: Vec<PromotionalOffer>,
    pub baskets: Vec<Basket>,
    pub line_items: Vec<LineItem>,
    pub transactions: Vec<Transaction>,

    pub customer_keys: Vec<CustomerKey>,
    pub address_keys: Vec<AddressKey>,
    pub card_keys: Vec<CardKey>,
    pub partitions: ProductPartitions,
    pub skipped_baskets: Vec<SkippedBasket>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCount {
    pub table: &'static str,
    pub rows: usize,
}

/// Summary of a run, printable as text or JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationStats {
    pub seed: Option<u64>,
    pub reference_time: String,
    pub tables: Vec<TableCount>,
    pub total_rows: usize,
    pub skipped_baskets: Vec<i64>,
}

impl Dataset {
    /// Row counts per table, in emission order
    pub fn row_counts(&self) -> Vec<TableCount> {
        [
            (schema::CUSTOMER, self.customers.len()),
            (schema::SILVER_AND_ABOVE, self.tier_benefits.len()),
            (schema::SHIPPING_ADDRESS, self.shipping_addresses.len()),
            (schema::CREDIT_CARD, self.payment_instruments.len()),
            (schema::PRODUCT, self.products.len()),
            (schema::COMPUTER, self.computers.len()),
            (schema::PRINTER, self.printers.len()),
            (schema::LAPTOP, self.laptops.len()),
            (schema::OFFER_PRODUCT, self.offers.len()),
            (schema::BASKET, self.baskets.len()),
            (schema::APPEARS_IN, self.line_items.len()),
            (schema::TRANSACTION, self.transactions.len()),
        ]
        .into_iter()
        .map(|(table, rows)| TableCount { table, rows })
        .collect()
    }

    pub fn stats(&self) -> GenerationStats {
        let tables = self.row_counts();
        GenerationStats {
            seed: self.seed,
            reference_time: self.reference_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            total_rows: tables.iter().map(|t| t.rows).sum(),
            tables,
            skipped_baskets: self.skipped_baskets.iter().map(|s| s.basket_id).collect(),
        }
    }
}

/// Main data generator
pub struct Generator<R: Rng = ChaCha8Rng> {
    config: GeneratorConfig,
    fake: FakeData<R>,
    reference_time: NaiveDateTime,
}

impl Generator<ChaCha8Rng> {
    /// Build a generator seeded from `config.seed`, drawing a fresh seed
    /// when none is configured. Fails if the configuration is invalid.
    pub fn new(mut config: GeneratorConfig) -> Result<Self> {
        let seed = *config.seed.get_or_insert_with(rand::random);
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Generator<R> {
    /// Build a generator around a caller-supplied RNG
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let reference_time = config.reference_time();
        Ok(Self {
            config,
            fake: FakeData::new(rng),
            reference_time,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run every stage in dependency order
    pub fn generate(&mut self) -> std::result::Result<Dataset, ConfigError> {
        let config = &self.config;
        let fake = &mut self.fake;
        let now = self.reference_time;

        let (customers, customer_keys) = customer::generate_customers(fake, config.customer_count);
        debug!(stage = "customers", rows = customers.len());

        let tier_benefits = customer::generate_tier_benefits(fake, config, &customer_keys);
        debug!(stage = "tier_benefits", rows = tier_benefits.len());

        let (shipping_addresses, address_keys) =
            customer::generate_shipping_addresses(fake, config, &customer_keys)?;
        debug!(stage = "shipping_addresses", rows = shipping_addresses.len());

        let (payment_instruments, card_keys) =
            customer::generate_payment_instruments(fake, config, &customer_keys, now.date())?;
        debug!(stage = "payment_instruments", rows = payment_instruments.len());

        let (products, partitions) = catalog::generate_products(fake, config)?;
        debug!(stage = "products", rows = products.len());

        let computers = catalog::generate_computers(fake, config, &partitions.computers)?;
        let printers = catalog::generate_printers(fake, config, &partitions.printers)?;
        let laptops = catalog::generate_laptops(fake, config, &partitions.laptops)?;
        debug!(
            stage = "specializations",
            computers = computers.len(),
            printers = printers.len(),
            laptops = laptops.len()
        );

        let offers = catalog::generate_offers(fake, config, &products);
        debug!(stage = "offers", rows = offers.len());

        let baskets = basket::generate_baskets(
            fake,
            config,
            &BasketInputs {
                customers: &customer_keys,
                products: &products,
                addresses: &address_keys,
                cards: &card_keys,
                now,
            },
        )?;
        debug!(
            stage = "baskets",
            rows = baskets.baskets.len(),
            line_items = baskets.line_items.len(),
            transactions = baskets.transactions.len(),
            skipped = baskets.skipped.len()
        );

        Ok(Dataset {
            seed: config.seed,
            reference_time: now,
            customers,
            tier_benefits,
            shipping_addresses,
            payment_instruments,
            products,
            computers,
            printers,
            laptops,
            offers,
            baskets: baskets.baskets,
            line_items: baskets.line_items,
            transactions: baskets.transactions,
            customer_keys,
            address_keys,
            card_keys,
            partitions,
            skipped_baskets: baskets.skipped,
        })
    }
}
