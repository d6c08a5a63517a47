//! Synthetic sample data for a retail database.
//!
//! Generates customers, products, baskets and transactions whose foreign
//! keys all resolve, and renders them as INSERT statements.
//!
//! # Example
//!
//! ```rust
//! use retail_seed::{Generator, GeneratorConfig, Renderer};
//!
//! let config = GeneratorConfig {
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! let mut generator = Generator::new(config).unwrap();
//! let data = generator.generate().unwrap();
//!
//! let sql = Renderer::new()
//!     .render_to_string(&generator.config().title, &data)
//!     .unwrap();
//! assert!(sql.contains("INSERT INTO CUSTOMER"));
//! ```

pub mod config;
pub mod error;
pub mod fake;
pub mod generator;
pub mod model;
pub mod pools;
pub mod renderer;
pub mod schema;
pub mod writer;

pub use config::{CardSelection, DeliveryTagMode, GeneratorConfig, Span};
pub use error::{ConfigError, Error, Result};
pub use generator::{Dataset, GenerationStats, Generator, TableCount};
pub use pools::Pools;
pub use renderer::{Renderer, SqlValue};
pub use schema::Schema;
pub use writer::write_output;
