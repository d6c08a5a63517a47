//! Customer-side stages: customers, tier benefits, shipping addresses and
//! stored payment cards.

use crate::config::{GeneratorConfig, MAX_CARD_EXPIRY_YEARS};
use crate::error::ConfigError;
use crate::fake::FakeData;
use crate::model::{Customer, CustomerStatus, PaymentInstrument, ShippingAddress, TierBenefit};
use chrono::{Months, NaiveDate};
use rand::Rng;

/// Side-list entry handed from the customer stage to later stages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerKey {
    pub id: i64,
    pub status: CustomerStatus,
}

/// Side-list entry identifying one shipping address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressKey {
    pub customer_id: i64,
    pub label: String,
}

/// A stored card number and the customer it was stored for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardKey {
    pub number: String,
    pub owner_id: i64,
}

pub fn generate_customers<R: Rng>(
    fake: &mut FakeData<R>,
    count: usize,
) -> (Vec<Customer>, Vec<CustomerKey>) {
    let mut customers = Vec::with_capacity(count);
    let mut keys = Vec::with_capacity(count);

    for id in 1..=count as i64 {
        let first_name = fake.first_name();
        let last_name = fake.last_name();
        let email = fake.email();
        let address = fake.postal_address();
        let phone = fake.phone();
        let status = CustomerStatus::ALL[fake.rng().random_range(0..CustomerStatus::ALL.len())];

        customers.push(Customer {
            id,
            first_name,
            last_name,
            email,
            address,
            phone,
            status,
        });
        keys.push(CustomerKey { id, status });
    }

    (customers, keys)
}

/// One credit line per silver, gold or platinum customer
pub fn generate_tier_benefits<R: Rng>(
    fake: &mut FakeData<R>,
    config: &GeneratorConfig,
    customers: &[CustomerKey],
) -> Vec<TierBenefit> {
    customers
        .iter()
        .filter(|c| c.status.has_tier_benefit())
        .map(|c| TierBenefit {
            customer_id: c.id,
            credit_line: fake.decimal_in(config.credit_line),
        })
        .collect()
}

pub fn generate_shipping_addresses<R: Rng>(
    fake: &mut FakeData<R>,
    config: &GeneratorConfig,
    customers: &[CustomerKey],
) -> Result<(Vec<ShippingAddress>, Vec<AddressKey>), ConfigError> {
    let pool = &config.pools.address_labels;
    let mut addresses = Vec::new();
    let mut keys = Vec::new();

    for customer in customers {
        let count = fake.count_in(config.addresses_per_customer);
        let labels: Vec<String> = fake
            .sample_distinct(pool, count)
            .ok_or(ConfigError::AddressLabelPoolTooSmall {
                requested: count,
                available: pool.len(),
            })?
            .into_iter()
            .cloned()
            .collect();

        for label in labels {
            addresses.push(ShippingAddress {
                customer_id: customer.id,
                label: label.clone(),
                recipient_name: fake.full_name(),
                street: fake.street_name(),
                street_number: fake.building_number(),
                city: fake.city(),
                zip: fake.zip_code(),
                state: fake.state(),
                country: fake.country(),
            });
            keys.push(AddressKey {
                customer_id: customer.id,
                label,
            });
        }
    }

    Ok((addresses, keys))
}

/// Stored cards, expiring within `card_expiry_years` of `today`
pub fn generate_payment_instruments<R: Rng>(
    fake: &mut FakeData<R>,
    config: &GeneratorConfig,
    customers: &[CustomerKey],
    today: NaiveDate,
) -> Result<(Vec<PaymentInstrument>, Vec<CardKey>), ConfigError> {
    let horizon = config
        .card_expiry_years
        .checked_mul(12)
        .and_then(|months| today.checked_add_months(Months::new(months)))
        .ok_or_else(|| ConfigError::AboveMaximum {
            name: "card_expiry_years",
            max: MAX_CARD_EXPIRY_YEARS.to_string(),
        })?;
    let mut cards = Vec::new();
    let mut keys = Vec::new();

    for customer in customers {
        let count = fake.count_in(config.cards_per_customer);
        for _ in 0..count {
            let card_number = fake.card_number();
            let security_code = fake.security_code();
            let holder_name = fake.full_name();
            let network = fake
                .pick(&config.pools.card_networks, "card_networks")?
                .to_string();
            let billing_address = fake.postal_address();
            let expires_on = fake.date_between(today, horizon);

            keys.push(CardKey {
                number: card_number.clone(),
                owner_id: customer.id,
            });
            cards.push(PaymentInstrument {
                card_number,
                security_code,
                holder_name,
                network,
                billing_address,
                expires_on,
                owner_id: customer.id,
            });
        }
    }

    Ok((cards, keys))
}
