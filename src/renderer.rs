//! Renders a generated `Dataset` as INSERT statements.
//!
//! Output is one statement per row, grouped into sections in stage order,
//! each introduced by a `-- Insert <TABLE> data` comment.

use crate::generator::Dataset;
use crate::model::{
    Basket, ComputerSpec, Customer, Decimal2, LaptopSpec, LineItem, PaymentInstrument,
    PrinterSpec, Product, PromotionalOffer, ShippingAddress, TierBenefit, Transaction,
};
use crate::schema::{self, Schema};
use chrono::{NaiveDate, NaiveDateTime};
use std::io::{self, Write};

/// SQL value representation
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Int(i64),
    Decimal(Decimal2),
    String(String),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
}

impl SqlValue {
    pub fn to_sql(&self) -> String {
        match self {
            SqlValue::Null => "NULL".to_string(),
            SqlValue::Int(n) => n.to_string(),
            SqlValue::Decimal(d) => d.to_string(),
            SqlValue::String(s) => format!("'{}'", escape_string(s)),
            SqlValue::Date(d) => format!("'{}'", d.format("%Y-%m-%d")),
            SqlValue::Timestamp(t) => format!("'{}'", t.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        SqlValue::String(s.to_string())
    }
}

impl From<Option<&str>> for SqlValue {
    fn from(s: Option<&str>) -> Self {
        s.map_or(SqlValue::Null, SqlValue::from)
    }
}

/// Double embedded quotes and flatten newlines to spaces
pub fn escape_string(s: &str) -> String {
    s.replace('\'', "''").replace('\n', " ")
}

/// A row of values in table column order
pub type Row = Vec<SqlValue>;

/// Rows that map onto one table of the retail schema
pub trait ToRow {
    const TABLE: &'static str;

    fn to_row(&self) -> Row;
}

impl ToRow for Customer {
    const TABLE: &'static str = schema::CUSTOMER;

    fn to_row(&self) -> Row {
        vec![
            SqlValue::Int(self.id),
            self.first_name.as_str().into(),
            self.last_name.as_str().into(),
            self.email.as_str().into(),
            self.address.as_str().into(),
            self.phone.as_str().into(),
            self.status.as_str().into(),
        ]
    }
}

impl ToRow for TierBenefit {
    const TABLE: &'static str = schema::SILVER_AND_ABOVE;

    fn to_row(&self) -> Row {
        vec![
            SqlValue::Int(self.customer_id),
            SqlValue::Decimal(self.credit_line),
        ]
    }
}

impl ToRow for ShippingAddress {
    const TABLE: &'static str = schema::SHIPPING_ADDRESS;

    fn to_row(&self) -> Row {
        vec![
            SqlValue::Int(self.customer_id),
            self.label.as_str().into(),
            self.recipient_name.as_str().into(),
            self.street.as_str().into(),
            self.street_number.as_str().into(),
            self.city.as_str().into(),
            self.zip.as_str().into(),
            self.state.as_str().into(),
            self.country.as_str().into(),
        ]
    }
}

impl ToRow for PaymentInstrument {
    const TABLE: &'static str = schema::CREDIT_CARD;

    fn to_row(&self) -> Row {
        vec![
            self.card_number.as_str().into(),
            self.security_code.as_str().into(),
            self.holder_name.as_str().into(),
            self.network.as_str().into(),
            self.billing_address.as_str().into(),
            SqlValue::Date(self.expires_on),
            SqlValue::Int(self.owner_id),
        ]
    }
}

impl ToRow for Product {
    const TABLE: &'static str = schema::PRODUCT;

    fn to_row(&self) -> Row {
        vec![
            SqlValue::Int(self.id),
            self.product_type.as_str().into(),
            self.name.as_str().into(),
            SqlValue::Decimal(self.price),
            self.description.as_deref().into(),
            SqlValue::Int(self.stock),
        ]
    }
}

impl ToRow for ComputerSpec {
    const TABLE: &'static str = schema::COMPUTER;

    fn to_row(&self) -> Row {
        vec![SqlValue::Int(self.product_id), self.cpu.as_str().into()]
    }
}

impl ToRow for PrinterSpec {
    const TABLE: &'static str = schema::PRINTER;

    fn to_row(&self) -> Row {
        vec![
            SqlValue::Int(self.product_id),
            self.mechanism.as_str().into(),
            self.resolution.as_str().into(),
        ]
    }
}

impl ToRow for LaptopSpec {
    const TABLE: &'static str = schema::LAPTOP;

    fn to_row(&self) -> Row {
        vec![
            SqlValue::Int(self.product_id),
            self.battery.as_str().into(),
            SqlValue::Decimal(self.weight),
        ]
    }
}

impl ToRow for PromotionalOffer {
    const TABLE: &'static str = schema::OFFER_PRODUCT;

    fn to_row(&self) -> Row {
        vec![
            SqlValue::Int(self.product_id),
            SqlValue::Decimal(self.offer_price),
        ]
    }
}

impl ToRow for Basket {
    const TABLE: &'static str = schema::BASKET;

    fn to_row(&self) -> Row {
        vec![SqlValue::Int(self.id), SqlValue::Int(self.customer_id)]
    }
}

impl ToRow for LineItem {
    const TABLE: &'static str = schema::APPEARS_IN;

    fn to_row(&self) -> Row {
        vec![
            SqlValue::Int(self.basket_id),
            SqlValue::Int(self.product_id),
            SqlValue::Int(self.quantity),
            SqlValue::Decimal(self.sold_price),
        ]
    }
}

impl ToRow for Transaction {
    const TABLE: &'static str = schema::TRANSACTION;

    fn to_row(&self) -> Row {
        vec![
            SqlValue::Int(self.basket_id),
            self.card_number.as_str().into(),
            SqlValue::Int(self.address_customer_id),
            self.address_label.as_str().into(),
            SqlValue::Timestamp(self.date),
            self.tag.as_str().into(),
        ]
    }
}

/// Renders datasets against the retail schema
pub struct Renderer {
    schema: Schema,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            schema: Schema::retail(),
        }
    }

    /// Render the full dataset: title line, then one section per table
    pub fn render<W: Write>(&self, title: &str, data: &Dataset, out: &mut W) -> io::Result<()> {
        writeln!(out, "-- {}", title)?;
        writeln!(out)?;

        self.section(out, &data.customers, true)?;
        self.section(out, &data.tier_benefits, false)?;
        self.section(out, &data.shipping_addresses, false)?;
        self.section(out, &data.payment_instruments, false)?;
        self.section(out, &data.products, false)?;
        self.section(out, &data.computers, false)?;
        self.section(out, &data.printers, false)?;
        self.section(out, &data.laptops, false)?;
        self.section(out, &data.offers, false)?;
        self.section(out, &data.baskets, false)?;
        self.section(out, &data.line_items, false)?;
        self.section(out, &data.transactions, false)?;
        Ok(())
    }

    pub fn render_to_string(&self, title: &str, data: &Dataset) -> io::Result<String> {
        let mut buf = Vec::new();
        self.render(title, data, &mut buf)?;
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn section<W: Write, T: ToRow>(&self, out: &mut W, rows: &[T], first: bool) -> io::Result<()> {
        if !first {
            writeln!(out)?;
        }
        writeln!(out, "-- Insert {} data", T::TABLE)?;

        let columns = self
            .schema
            .get_table(T::TABLE)
            .map(|t| t.column_names().join(", "))
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("table {} is not in the schema", T::TABLE),
                )
            })?;

        for row in rows {
            writeln!(out, "{}", insert_statement(T::TABLE, &columns, &row.to_row()))?;
        }
        Ok(())
    }
}

/// `INSERT INTO <table> (<columns>) VALUES (<values>);`
pub fn insert_statement(table: &str, columns: &str, row: &[SqlValue]) -> String {
    let values: Vec<String> = row.iter().map(SqlValue::to_sql).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({});",
        table,
        columns,
        values.join(", ")
    )
}
