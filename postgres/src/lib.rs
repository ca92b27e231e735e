//! PostgreSQL support for typeres
//!
//! This crate provides the PostgreSQL type strategy, user-defined type
//! discovery over `pg_type`, and the mapping from `pg_type` rows to standard
//! type codes.
//!
//! # Features
//!
//! - `postgres-sync` - [`PostgresSource`], a metadata source over the
//!   synchronous `postgres` driver

pub mod catalog;
#[cfg(feature = "postgres-sync")]
mod driver;
mod strategy;
pub mod udt;

pub use catalog::{BASE_TYPES_QUERY, base_type_code, entries_from_rows};
#[cfg(feature = "postgres-sync")]
pub use driver::PostgresSource;
pub use strategy::PostgresTypeStrategy;
pub use udt::{PostgresUdtDiscovery, UdtQuery};
