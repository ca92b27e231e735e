//! Core of the typeres type resolution engine.
//!
//! A load turns a driver's [`MetadataSource`] and a [`Dialect`] into an
//! immutable, case-insensitive [`TypeRegistry`]:
//!
//! ```
//! use typeres_core::{
//!     CatalogConnection, CatalogEntry, DefaultTypeStrategy, DiscoveryConfig, MetadataSource,
//!     Result, StrategyRegistry, TypeLoader,
//! };
//! use typeres_types::{Dialect, TypeCode};
//!
//! struct Catalog(Vec<CatalogEntry>);
//!
//! impl MetadataSource for Catalog {
//!     fn type_catalog(&mut self) -> Result<Vec<CatalogEntry>> {
//!         Ok(self.0.clone())
//!     }
//!
//!     fn catalog_connection(&mut self) -> Result<Option<&mut dyn CatalogConnection>> {
//!         Ok(None)
//!     }
//! }
//!
//! let mut strategies = StrategyRegistry::new();
//! strategies.register(Dialect::SQLite, DefaultTypeStrategy::new());
//!
//! let mut source = Catalog(vec![CatalogEntry::new("INTEGER", TypeCode::INTEGER)]);
//! let registry = TypeLoader::new(&strategies)
//!     .load(&mut source, Dialect::SQLite, &DiscoveryConfig::default())?;
//!
//! assert_eq!(registry.get("integer"), Some(TypeCode::INTEGER));
//! # Ok::<(), typeres_core::TypeError>(())
//! ```
//!
//! # Features
//!
//! - `tracing` - emit load and discovery events through `tracing` (default)
//! - `serde` - serialize registries, configs and descriptors

mod tracing;

pub mod config;
pub mod error;
pub mod loader;
pub mod lookup;
mod name;
pub mod registry;
pub mod source;
pub mod strategy;

pub use config::{DEFAULT_SCHEMA, DiscoveryConfig, parse_schema_list};
pub use error::{Result, TypeError};
pub use loader::{DiscoveryStatus, LoadOutcome, TypeLoader};
pub use lookup::StrategyRegistry;
pub use name::TypeName;
pub use registry::{TypeRegistry, TypeRegistryBuilder};
pub use source::{CatalogConnection, CatalogEntry, CatalogRow, MetadataSource};
pub use strategy::{DefaultTypeStrategy, DialectTypeStrategy, UdtDescriptor, UdtDiscovery};

pub use typeres_types::{Dialect, NativeType, TypeCode, UdtKind};
