//! # typeres
//!
//! Dialect-pluggable SQL type resolution: turn a driver's type catalog into a
//! case-insensitive name → type code registry, corrected and extended per
//! dialect and enriched with the database's own user-defined types.
//!
//! ## Quick Start
//!
//! ```rust
//! use typeres::{CatalogConnection, CatalogEntry, Dialect, MetadataSource, TypeCode};
//!
//! struct Catalog(Vec<CatalogEntry>);
//!
//! impl MetadataSource for Catalog {
//!     fn type_catalog(&mut self) -> typeres::Result<Vec<CatalogEntry>> {
//!         Ok(self.0.clone())
//!     }
//!
//!     fn catalog_connection(&mut self) -> typeres::Result<Option<&mut dyn CatalogConnection>> {
//!         Ok(None)
//!     }
//! }
//!
//! # fn main() -> typeres::Result<()> {
//! # #[cfg(feature = "postgres")] {
//! let mut source = Catalog(vec![CatalogEntry::new("int4", TypeCode::INTEGER)]);
//! let registry = typeres::load(&mut source, Dialect::PostgreSQL, &Default::default())?;
//!
//! assert_eq!(registry.get("INT4"), Some(TypeCode::INTEGER));
//! assert_eq!(registry.get("bool"), Some(TypeCode::BOOLEAN));
//! # }
//! # Ok(())
//! # }
//! ```
//!
//! ## Dialect Support
//!
//! | Dialect    | Strategy               | Feature Flag | UDT discovery |
//! |------------|------------------------|--------------|---------------|
//! | SQLite     | `DefaultTypeStrategy`  | always       | no            |
//! | PostgreSQL | `PostgresTypeStrategy` | `postgres`   | yes           |
//! | MySQL      | `MySqlTypeStrategy`    | `mysql`      | no            |
//!
//! The `postgres-sync` feature adds `postgres::PostgresSource`, a metadata
//! source over the synchronous `postgres` driver.

#![cfg_attr(docsrs, feature(doc_cfg))]

use std::sync::OnceLock;

// =============================================================================
// Root-level exports
// =============================================================================

/// Result type for type resolution
pub use typeres_core::error::Result;

/// Error types
pub mod error {
    pub use typeres_core::error::TypeError;
}

pub use typeres_core::{
    CatalogConnection, CatalogEntry, CatalogRow, DEFAULT_SCHEMA, DefaultTypeStrategy,
    DialectTypeStrategy, DiscoveryConfig, DiscoveryStatus, LoadOutcome, MetadataSource,
    StrategyRegistry, TypeError, TypeLoader, TypeName, TypeRegistry, TypeRegistryBuilder,
    UdtDescriptor, UdtDiscovery, parse_schema_list,
};
pub use typeres_types::{Dialect, DialectParseError, NativeType, TypeCode, UdtKind, classify};

// =============================================================================
// Dialect modules
// =============================================================================

/// PostgreSQL strategy, UDT discovery and base catalog mapping.
#[cfg(feature = "postgres")]
#[cfg_attr(docsrs, doc(cfg(feature = "postgres")))]
pub mod postgres {
    pub use typeres_postgres::*;
}

/// MySQL strategy.
#[cfg(feature = "mysql")]
#[cfg_attr(docsrs, doc(cfg(feature = "mysql")))]
pub mod mysql {
    pub use typeres_mysql::*;
}

// =============================================================================
// Built-in strategies
// =============================================================================

/// A fresh registry holding one strategy per dialect enabled at compile time.
///
/// SQLite always resolves to [`DefaultTypeStrategy`].
#[must_use]
pub fn builtin_strategies() -> StrategyRegistry {
    let mut strategies = StrategyRegistry::new();
    strategies.register(Dialect::SQLite, DefaultTypeStrategy::new());
    #[cfg(feature = "postgres")]
    strategies.register(Dialect::PostgreSQL, typeres_postgres::PostgresTypeStrategy::new());
    #[cfg(feature = "mysql")]
    strategies.register(Dialect::MySQL, typeres_mysql::MySqlTypeStrategy::new());
    strategies
}

/// The process-wide built-in strategies, built on first use.
///
/// ```
/// use typeres::DialectTypeStrategy;
///
/// let strategy = typeres::strategies().lookup_name("libsql")?;
/// assert_eq!(strategy.dialect_name(), "default");
/// # Ok::<(), typeres::TypeError>(())
/// ```
pub fn strategies() -> &'static StrategyRegistry {
    static STRATEGIES: OnceLock<StrategyRegistry> = OnceLock::new();
    STRATEGIES.get_or_init(builtin_strategies)
}

/// Load a type registry with the built-in strategies.
///
/// Shorthand for `TypeLoader::new(strategies()).load(..)`.
pub fn load<S>(source: &mut S, dialect: Dialect, config: &DiscoveryConfig) -> Result<TypeRegistry>
where
    S: MetadataSource + ?Sized,
{
    TypeLoader::new(strategies()).load(source, dialect, config)
}

/// Like [`load`], also reporting what discovery did.
pub fn load_with_outcome<S>(
    source: &mut S,
    dialect: Dialect,
    config: &DiscoveryConfig,
) -> Result<LoadOutcome>
where
    S: MetadataSource + ?Sized,
{
    TypeLoader::new(strategies()).load_with_outcome(source, dialect, config)
}

/// Common imports.
pub mod prelude {
    pub use crate::{
        CatalogConnection, CatalogEntry, CatalogRow, Dialect, DialectTypeStrategy,
        DiscoveryConfig, MetadataSource, TypeCode, TypeError, TypeLoader, TypeRegistry,
    };
}
