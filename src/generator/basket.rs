//! Basket stage: baskets, their line items, and the transactions that
//! check them out.

use super::customer::{AddressKey, CardKey, CustomerKey};
use crate::config::{CardSelection, DeliveryTagMode, GeneratorConfig, MAX_TRANSACTION_AGE_DAYS};
use crate::error::ConfigError;
use crate::fake::FakeData;
use crate::model::{
    Basket, Decimal2, DeliveryTag, LineItem, Product, SkippedBasket, Transaction,
};
use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use std::collections::HashMap;
use tracing::info;

/// Rows produced by the basket stage
#[derive(Debug, Clone, Default)]
pub struct BasketOutput {
    pub baskets: Vec<Basket>,
    pub line_items: Vec<LineItem>,
    pub transactions: Vec<Transaction>,
    /// Basket ids consumed without emitting any row
    pub skipped: Vec<SkippedBasket>,
}

/// Inputs the basket stage reads from earlier stages
pub struct BasketInputs<'a> {
    pub customers: &'a [CustomerKey],
    pub products: &'a [Product],
    pub addresses: &'a [AddressKey],
    pub cards: &'a [CardKey],
    pub now: NaiveDateTime,
}

pub fn generate_baskets<R: Rng>(
    fake: &mut FakeData<R>,
    config: &GeneratorConfig,
    inputs: &BasketInputs<'_>,
) -> Result<BasketOutput, ConfigError> {
    let mut addresses_by_owner: HashMap<i64, Vec<&AddressKey>> = HashMap::new();
    for address in inputs.addresses {
        addresses_by_owner
            .entry(address.customer_id)
            .or_default()
            .push(address);
    }

    let mut out = BasketOutput::default();

    for basket_id in 1..=config.basket_count as i64 {
        let customer = match fake.choose(inputs.customers) {
            Some(customer) => customer,
            None => return Err(ConfigError::NoCustomers),
        };

        let owner_addresses = match addresses_by_owner.get(&customer.id) {
            Some(addresses) if !addresses.is_empty() => addresses,
            _ => {
                info!(
                    basket_id,
                    customer_id = customer.id,
                    "skipping basket: customer has no shipping address"
                );
                out.skipped.push(SkippedBasket {
                    basket_id,
                    customer_id: customer.id,
                });
                continue;
            }
        };

        out.baskets.push(Basket {
            id: basket_id,
            customer_id: customer.id,
        });

        let count = fake
            .rng()
            .random_range(config.min_items_per_basket..=config.max_items_per_basket);
        let picked = fake
            .sample_distinct(inputs.products, count)
            .ok_or(ConfigError::CatalogTooSmall {
                requested: count,
                available: inputs.products.len(),
            })?;

        for product in picked {
            let quantity = fake.int_in(config.item_quantity);
            let jitter = fake.float_in(config.price_jitter);
            out.line_items.push(LineItem {
                basket_id,
                product_id: product.id,
                quantity,
                sold_price: Decimal2::from_f64(product.price.to_f64() * jitter),
            });
        }

        if !fake.bool_with_probability(config.transaction_probability) {
            continue;
        }

        let card = match config.card_selection {
            CardSelection::GlobalPool => fake.choose(inputs.cards),
            CardSelection::OwnerOnly => {
                let owned: Vec<&CardKey> = inputs
                    .cards
                    .iter()
                    .filter(|c| c.owner_id == customer.id)
                    .collect();
                fake.choose(&owned).copied()
            }
        };
        let Some(card) = card else {
            continue;
        };
        let Some(address) = fake.choose(owner_addresses) else {
            continue;
        };
        let days_ago = fake.int_in(config.transaction_age_days);
        let date = Duration::try_days(days_ago)
            .and_then(|age| inputs.now.checked_sub_signed(age))
            .ok_or_else(|| ConfigError::AboveMaximum {
                name: "transaction_age_days.max",
                max: MAX_TRANSACTION_AGE_DAYS.to_string(),
            })?;
        let tag = delivery_tag(fake, config.delivery_tags);

        out.transactions.push(Transaction {
            basket_id,
            card_number: card.number.clone(),
            address_customer_id: address.customer_id,
            address_label: address.label.clone(),
            date,
            tag,
        });
    }

    Ok(out)
}

fn delivery_tag<R: Rng>(fake: &mut FakeData<R>, mode: DeliveryTagMode) -> DeliveryTag {
    match mode {
        DeliveryTagMode::Literal => {
            if fake.bool_with_probability(0.9) && fake.bool_with_probability(0.5) {
                DeliveryTag::Delivered
            } else {
                DeliveryTag::NotDelivered
            }
        }
        DeliveryTagMode::Intended => {
            if fake.bool_with_probability(0.9) {
                DeliveryTag::Delivered
            } else {
                DeliveryTag::NotDelivered
            }
        }
    }
}
