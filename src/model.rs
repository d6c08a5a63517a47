//! Typed rows for every generated entity.
//!
//! Rows are plain data. Rendering them to statements lives in `renderer`,
//! and the table/column layout they map onto lives in `schema`.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;

/// Fixed-point decimal with exactly two fraction digits, stored as hundredths.
///
/// Used for money and weights so rounding happens once, at generation time,
/// and rendering never has to reason about float formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Decimal2(i64);

impl Decimal2 {
    pub const fn from_hundredths(hundredths: i64) -> Self {
        Self(hundredths)
    }

    /// Round a float to the nearest hundredth
    pub fn from_f64(value: f64) -> Self {
        Self((value * 100.0).round() as i64)
    }

    pub const fn hundredths(self) -> i64 {
        self.0
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Decimal2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// Customer loyalty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Regular,
    Silver,
    Gold,
    Platinum,
}

impl CustomerStatus {
    pub const ALL: [CustomerStatus; 4] = [
        CustomerStatus::Regular,
        CustomerStatus::Silver,
        CustomerStatus::Gold,
        CustomerStatus::Platinum,
    ];

    /// Silver and above get a credit line
    pub fn has_tier_benefit(self) -> bool {
        !matches!(self, CustomerStatus::Regular)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CustomerStatus::Regular => "regular",
            CustomerStatus::Silver => "silver",
            CustomerStatus::Gold => "gold",
            CustomerStatus::Platinum => "platinum",
        }
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product type, which decides the specialization rows a product gets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProductType {
    Desktop,
    Laptop,
    Printer,
    Accessory,
}

impl ProductType {
    pub const ALL: [ProductType; 4] = [
        ProductType::Desktop,
        ProductType::Laptop,
        ProductType::Printer,
        ProductType::Accessory,
    ];

    /// Desktops and laptops carry a COMPUTER row
    pub fn is_computer(self) -> bool {
        matches!(self, ProductType::Desktop | ProductType::Laptop)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProductType::Desktop => "Desktop",
            ProductType::Laptop => "Laptop",
            ProductType::Printer => "Printer",
            ProductType::Accessory => "Accessory",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delivery state recorded on a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DeliveryTag {
    #[serde(rename = "delivered")]
    Delivered,
    #[serde(rename = "not-delivered")]
    NotDelivered,
}

impl DeliveryTag {
    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryTag::Delivered => "delivered",
            DeliveryTag::NotDelivered => "not-delivered",
        }
    }
}

impl fmt::Display for DeliveryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
    pub status: CustomerStatus,
}

/// SILVER_AND_ABOVE row
#[derive(Debug, Clone, PartialEq)]
pub struct TierBenefit {
    pub customer_id: i64,
    pub credit_line: Decimal2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShippingAddress {
    pub customer_id: i64,
    /// Unique within the owning customer's address set
    pub label: String,
    pub recipient_name: String,
    pub street: String,
    pub street_number: String,
    pub city: String,
    pub zip: String,
    pub state: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentInstrument {
    pub card_number: String,
    pub security_code: String,
    pub holder_name: String,
    pub network: String,
    pub billing_address: String,
    pub expires_on: NaiveDate,
    pub owner_id: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub product_type: ProductType,
    pub name: String,
    pub price: Decimal2,
    pub description: Option<String>,
    pub stock: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComputerSpec {
    pub product_id: i64,
    pub cpu: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrinterSpec {
    pub product_id: i64,
    pub mechanism: String,
    pub resolution: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaptopSpec {
    pub product_id: i64,
    pub battery: String,
    pub weight: Decimal2,
}

/// OFFER_PRODUCT row. `offer_price` is always below the product's price.
#[derive(Debug, Clone, PartialEq)]
pub struct PromotionalOffer {
    pub product_id: i64,
    pub offer_price: Decimal2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Basket {
    pub id: i64,
    pub customer_id: i64,
}

/// APPEARS_IN row, identified by (basket, product)
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub basket_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub sold_price: Decimal2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub basket_id: i64,
    pub card_number: String,
    /// Owner of the shipping address; always the basket's owner
    pub address_customer_id: i64,
    pub address_label: String,
    pub date: NaiveDateTime,
    pub tag: DeliveryTag,
}

/// A basket id that was consumed but produced no rows, because its customer
/// has no shipping address to ship to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkippedBasket {
    pub basket_id: i64,
    pub customer_id: i64,
}
