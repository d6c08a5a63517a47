//! The fixed retail schema the generated statements target.
//!
//! Only table names, column order, types and foreign keys are modelled;
//! nothing here is ever executed against a database.

use std::collections::HashMap;

pub const CUSTOMER: &str = "CUSTOMER";
pub const SILVER_AND_ABOVE: &str = "SILVER_AND_ABOVE";
pub const SHIPPING_ADDRESS: &str = "SHIPPING_ADDRESS";
pub const CREDIT_CARD: &str = "CREDIT_CARD";
pub const PRODUCT: &str = "PRODUCT";
pub const COMPUTER: &str = "COMPUTER";
pub const PRINTER: &str = "PRINTER";
pub const LAPTOP: &str = "LAPTOP";
pub const OFFER_PRODUCT: &str = "OFFER_PRODUCT";
pub const BASKET: &str = "BASKET";
pub const APPEARS_IN: &str = "APPEARS_IN";
pub const TRANSACTION: &str = "TRANSACTION";

/// SQL data types
#[derive(Debug, Clone, PartialEq)]
pub enum SqlType {
    Integer,
    VarChar(u16),
    Text,
    /// Decimal with precision and scale
    Decimal(u8, u8),
    Date,
    /// Timestamp/datetime
    Timestamp,
}

impl SqlType {
    pub fn to_sql(&self) -> String {
        match self {
            SqlType::Integer => "INT".to_string(),
            SqlType::VarChar(n) => format!("VARCHAR({})", n),
            SqlType::Text => "TEXT".to_string(),
            SqlType::Decimal(p, s) => format!("DECIMAL({},{})", p, s),
            SqlType::Date => "DATE".to_string(),
            SqlType::Timestamp => "DATETIME".to_string(),
        }
    }
}

/// Foreign key constraint
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKey {
    pub to_table: String,
    pub to_column: String,
}

/// Column definition
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub sql_type: SqlType,
    pub primary_key: bool,
    pub foreign_key: Option<ForeignKey>,
}

impl Column {
    pub fn new(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            sql_type,
            primary_key: false,
            foreign_key: None,
        }
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn references(mut self, table: impl Into<String>, column: impl Into<String>) -> Self {
        self.foreign_key = Some(ForeignKey {
            to_table: table.into(),
            to_column: column.into(),
        });
        self
    }
}

/// Table definition
#[derive(Debug, Clone)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    pub fn column(mut self, col: Column) -> Self {
        self.columns.push(col);
        self
    }

    /// Primary key columns in declaration order
    pub fn primary_key_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.primary_key)
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Get all foreign key relationships
    pub fn foreign_keys(&self) -> Vec<(&str, &ForeignKey)> {
        self.columns
            .iter()
            .filter_map(|c| c.foreign_key.as_ref().map(|fk| (c.name.as_str(), fk)))
            .collect()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Complete schema definition
#[derive(Debug, Clone, Default)]
pub struct Schema {
    pub tables: Vec<Table>,
    table_index: HashMap<String, usize>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(mut self, table: Table) -> Self {
        let idx = self.tables.len();
        self.table_index.insert(table.name.clone(), idx);
        self.tables.push(table);
        self
    }

    pub fn get_table(&self, name: &str) -> Option<&Table> {
        self.table_index.get(name).map(|&idx| &self.tables[idx])
    }

    /// Get tables in topological order (dependencies first)
    pub fn tables_in_order(&self) -> Vec<&Table> {
        let mut visited = vec![false; self.tables.len()];
        let mut result = Vec::with_capacity(self.tables.len());

        fn visit<'a>(
            idx: usize,
            tables: &'a [Table],
            table_index: &HashMap<String, usize>,
            visited: &mut [bool],
            result: &mut Vec<&'a Table>,
        ) {
            if visited[idx] {
                return;
            }
            visited[idx] = true;

            // Visit dependencies first
            for (_, fk) in tables[idx].foreign_keys() {
                if let Some(&dep_idx) = table_index.get(&fk.to_table) {
                    visit(dep_idx, tables, table_index, visited, result);
                }
            }

            result.push(&tables[idx]);
        }

        for idx in 0..self.tables.len() {
            visit(
                idx,
                &self.tables,
                &self.table_index,
                &mut visited,
                &mut result,
            );
        }

        result
    }

    /// The retail schema, in the order sections are emitted
    pub fn retail() -> Self {
        Schema::new()
            .table(
                Table::new(CUSTOMER)
                    .column(Column::new("CID", SqlType::Integer).primary_key())
                    .column(Column::new("FName", SqlType::VarChar(50)))
                    .column(Column::new("LName", SqlType::VarChar(50)))
                    .column(Column::new("EMail", SqlType::VarChar(100)))
                    .column(Column::new("Address", SqlType::VarChar(255)))
                    .column(Column::new("Phone", SqlType::VarChar(20)))
                    .column(Column::new("Status", SqlType::VarChar(10))),
            )
            .table(
                Table::new(SILVER_AND_ABOVE)
                    .column(
                        Column::new("CID", SqlType::Integer)
                            .primary_key()
                            .references(CUSTOMER, "CID"),
                    )
                    .column(Column::new("CreditLine", SqlType::Decimal(10, 2))),
            )
            .table(
                Table::new(SHIPPING_ADDRESS)
                    .column(
                        Column::new("CID", SqlType::Integer)
                            .primary_key()
                            .references(CUSTOMER, "CID"),
                    )
                    .column(Column::new("SAName", SqlType::VarChar(50)).primary_key())
                    .column(Column::new("RecipientName", SqlType::VarChar(100)))
                    .column(Column::new("Street", SqlType::VarChar(100)))
                    .column(Column::new("SNumber", SqlType::VarChar(20)))
                    .column(Column::new("City", SqlType::VarChar(50)))
                    .column(Column::new("Zip", SqlType::VarChar(20)))
                    .column(Column::new("State", SqlType::VarChar(50)))
                    .column(Column::new("Country", SqlType::VarChar(50))),
            )
            .table(
                Table::new(CREDIT_CARD)
                    .column(Column::new("CCNumber", SqlType::VarChar(20)).primary_key())
                    .column(Column::new("SecNumber", SqlType::VarChar(4)))
                    .column(Column::new("OwnerName", SqlType::VarChar(100)))
                    .column(Column::new("CCType", SqlType::VarChar(20)))
                    .column(Column::new("BilAddress", SqlType::VarChar(255)))
                    .column(Column::new("ExpDate", SqlType::Date))
                    .column(Column::new("StoredCardCID", SqlType::Integer).references(CUSTOMER, "CID")),
            )
            .table(
                Table::new(PRODUCT)
                    .column(Column::new("PID", SqlType::Integer).primary_key())
                    .column(Column::new("PType", SqlType::VarChar(20)))
                    .column(Column::new("PName", SqlType::VarChar(100)))
                    .column(Column::new("PPrice", SqlType::Decimal(10, 2)))
                    .column(Column::new("PDescription", SqlType::Text))
                    .column(Column::new("PQuantity", SqlType::Integer)),
            )
            .table(
                Table::new(COMPUTER)
                    .column(
                        Column::new("PID", SqlType::Integer)
                            .primary_key()
                            .references(PRODUCT, "PID"),
                    )
                    .column(Column::new("CPUType", SqlType::VarChar(50))),
            )
            .table(
                Table::new(PRINTER)
                    .column(
                        Column::new("PID", SqlType::Integer)
                            .primary_key()
                            .references(PRODUCT, "PID"),
                    )
                    .column(Column::new("PrinterType", SqlType::VarChar(20)))
                    .column(Column::new("Resolution", SqlType::VarChar(20))),
            )
            .table(
                Table::new(LAPTOP)
                    .column(
                        Column::new("PID", SqlType::Integer)
                            .primary_key()
                            .references(COMPUTER, "PID"),
                    )
                    .column(Column::new("BType", SqlType::VarChar(20)))
                    .column(Column::new("Weight", SqlType::Decimal(4, 2))),
            )
            .table(
                Table::new(OFFER_PRODUCT)
                    .column(
                        Column::new("PID", SqlType::Integer)
                            .primary_key()
                            .references(PRODUCT, "PID"),
                    )
                    .column(Column::new("OfferPrice", SqlType::Decimal(10, 2))),
            )
            .table(
                Table::new(BASKET)
                    .column(Column::new("BID", SqlType::Integer).primary_key())
                    .column(Column::new("CID", SqlType::Integer).references(CUSTOMER, "CID")),
            )
            .table(
                Table::new(APPEARS_IN)
                    .column(
                        Column::new("BID", SqlType::Integer)
                            .primary_key()
                            .references(BASKET, "BID"),
                    )
                    .column(
                        Column::new("PID", SqlType::Integer)
                            .primary_key()
                            .references(PRODUCT, "PID"),
                    )
                    .column(Column::new("Quantity", SqlType::Integer))
                    .column(Column::new("PriceSold", SqlType::Decimal(10, 2))),
            )
            .table(
                Table::new(TRANSACTION)
                    .column(
                        Column::new("BID", SqlType::Integer)
                            .primary_key()
                            .references(BASKET, "BID"),
                    )
                    .column(
                        Column::new("CCNumber", SqlType::VarChar(20))
                            .references(CREDIT_CARD, "CCNumber"),
                    )
                    // (CID, SAName) together reference SHIPPING_ADDRESS
                    .column(Column::new("CID", SqlType::Integer).references(SHIPPING_ADDRESS, "CID"))
                    .column(
                        Column::new("SAName", SqlType::VarChar(50))
                            .references(SHIPPING_ADDRESS, "SAName"),
                    )
                    .column(Column::new("TDate", SqlType::Timestamp))
                    .column(Column::new("TTag", SqlType::VarChar(20))),
            )
    }
}
