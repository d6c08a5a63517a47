//! Catalog stages: products, their type specializations, and promotional
//! offers.

use crate::config::GeneratorConfig;
use crate::error::ConfigError;
use crate::fake::FakeData;
use crate::model::{
    ComputerSpec, Decimal2, LaptopSpec, PrinterSpec, Product, ProductType, PromotionalOffer,
};
use crate::pools::NAME_PLACEHOLDER;
use rand::Rng;

/// Product ids split by the specialization rows they need.
///
/// A laptop id appears in both `computers` and `laptops`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPartitions {
    pub computers: Vec<i64>,
    pub printers: Vec<i64>,
    pub laptops: Vec<i64>,
}

pub fn generate_products<R: Rng>(
    fake: &mut FakeData<R>,
    config: &GeneratorConfig,
) -> Result<(Vec<Product>, ProductPartitions), ConfigError> {
    let mut products = Vec::with_capacity(config.product_count);
    let mut partitions = ProductPartitions::default();

    for id in 1..=config.product_count as i64 {
        let product_type = ProductType::ALL[fake.rng().random_range(0..ProductType::ALL.len())];
        let name = product_name(fake, config, product_type)?;
        let price = fake.decimal_in(config.price);
        let description = product_description(fake, config, product_type, &name)?;
        let stock = fake.int_in(config.stock);

        if product_type.is_computer() {
            partitions.computers.push(id);
        }
        match product_type {
            ProductType::Printer => partitions.printers.push(id),
            ProductType::Laptop => partitions.laptops.push(id),
            _ => {}
        }

        products.push(Product {
            id,
            product_type,
            name,
            price,
            description: Some(description),
            stock,
        });
    }

    Ok((products, partitions))
}

/// `{brand} {category} {prefix}{number}`, e.g. "NexGen Ultrabook Slim4821"
fn product_name<R: Rng>(
    fake: &mut FakeData<R>,
    config: &GeneratorConfig,
    product_type: ProductType,
) -> Result<String, ConfigError> {
    let pools = &config.pools;
    let brand = fake.pick(&pools.brands, "brands")?;
    let category = fake.pick(pools.categories.get(product_type), "categories")?;
    let prefix = fake.pick(&pools.model_prefixes, "model_prefixes")?;
    let number = fake
        .rng()
        .random_range(config.model_number.min..=config.model_number.max);
    Ok(format!("{} {} {}{}", brand, category, prefix, number))
}

fn product_description<R: Rng>(
    fake: &mut FakeData<R>,
    config: &GeneratorConfig,
    product_type: ProductType,
    name: &str,
) -> Result<String, ConfigError> {
    let pools = &config.pools;
    let template = fake.pick(pools.descriptions.get(product_type), "descriptions")?;
    let primary = fake.pick(&pools.primary_features, "primary_features")?;
    let secondary = fake.pick(&pools.secondary_features, "secondary_features")?;
    Ok(format!(
        "{} Features include {} and {}.",
        template.replace(NAME_PLACEHOLDER, name),
        primary,
        secondary
    ))
}

pub fn generate_computers<R: Rng>(
    fake: &mut FakeData<R>,
    config: &GeneratorConfig,
    ids: &[i64],
) -> Result<Vec<ComputerSpec>, ConfigError> {
    ids.iter()
        .map(|&product_id| {
            Ok(ComputerSpec {
                product_id,
                cpu: fake.pick(&config.pools.cpus, "cpus")?.to_string(),
            })
        })
        .collect()
}

pub fn generate_printers<R: Rng>(
    fake: &mut FakeData<R>,
    config: &GeneratorConfig,
    ids: &[i64],
) -> Result<Vec<PrinterSpec>, ConfigError> {
    let pools = &config.pools;
    ids.iter()
        .map(|&product_id| {
            let mechanism = fake.pick(&pools.printer_mechanisms, "printer_mechanisms")?;
            let resolution = fake.pick(&pools.printer_resolutions, "printer_resolutions")?;
            Ok(PrinterSpec {
                product_id,
                mechanism: mechanism.to_string(),
                resolution: format!("{} dpi", resolution),
            })
        })
        .collect()
}

pub fn generate_laptops<R: Rng>(
    fake: &mut FakeData<R>,
    config: &GeneratorConfig,
    ids: &[i64],
) -> Result<Vec<LaptopSpec>, ConfigError> {
    ids.iter()
        .map(|&product_id| {
            let battery = fake.pick(&config.pools.battery_chemistries, "battery_chemistries")?;
            Ok(LaptopSpec {
                product_id,
                battery: battery.to_string(),
                weight: fake.decimal_in(config.laptop_weight),
            })
        })
        .collect()
}

/// Discount one product in every `products_per_offer`, chosen without
/// replacement across the whole catalog.
pub fn generate_offers<R: Rng>(
    fake: &mut FakeData<R>,
    config: &GeneratorConfig,
    products: &[Product],
) -> Vec<PromotionalOffer> {
    let count = products.len() / config.products_per_offer.max(1);
    let chosen = fake.sample_distinct(products, count).unwrap_or_default();

    chosen
        .into_iter()
        .map(|product| {
            let discount = fake.decimal_in(config.offer_discount);
            PromotionalOffer {
                product_id: product.id,
                offer_price: discounted_price(product.price, discount),
            }
        })
        .collect()
}

/// Apply a two-decimal discount fraction, keeping the result strictly below
/// the original price.
pub fn discounted_price(price: Decimal2, discount: Decimal2) -> Decimal2 {
    let raw = (price.hundredths() as f64 * (1.0 - discount.to_f64())).round() as i64;
    let capped = raw.min(price.hundredths() - 1).max(0);
    Decimal2::from_hundredths(capped)
}
