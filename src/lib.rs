//! Synthetic test data generator.
//!
//! Generates deterministic, FK-consistent users, products and orders, applies
//! optional PII masking or anonymization, and exports to JSON or SQL.
//!
//! # Example
//!
//! ```rust
//! use qa_datagen::{export, Format, Generator};
//!
//! // Seeded generators are reproducible, including timestamps
//! let mut gen = Generator::new(42);
//! gen.generate_users(5).unwrap();
//! gen.generate_products(3).unwrap();
//! gen.generate_orders(10).unwrap();
//!
//! let dataset = gen.dataset().masked().unwrap();
//! let sql = export::render(&dataset, Format::Sql, "2024-01-01T00:00:00").unwrap();
//!
//! println!("{}", sql);
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod fake;
pub mod generator;
pub mod model;
pub mod privacy;
pub mod progress;
pub mod unique;

pub use config::RunConfig;
pub use error::{GenError, Result};
pub use export::Format;
pub use generator::{Generator, GeneratorSettings};
pub use model::{
    Category, Dataset, Order, OrderItem, OrderStatus, Plan, PlanWeights, Product, Statistics, User,
};
pub use privacy::{anonymize, mask_pii, Pii, PiiField, Record, DEFAULT_SALT};
