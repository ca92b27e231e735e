//! Per-dialect type strategies
//!
//! A strategy is built once and is read-only afterwards, so a single instance
//! can serve any number of concurrent loads.

use crate::{CatalogConnection, Result, TypeRegistry};
use core::fmt;
use typeres_types::{NativeType, TypeCode, UdtKind, classify};

/// A user-defined type found by catalog introspection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UdtDescriptor {
    pub name: String,
    pub kind: UdtKind,
    pub schema: String,
}

impl UdtDescriptor {
    pub fn new(name: impl Into<String>, kind: UdtKind, schema: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            schema: schema.into(),
        }
    }
}

/// The capability set a dialect plugs into the loader.
///
/// Only [`extra_types`](Self::extra_types) and [`dialect_name`](Self::dialect_name)
/// are required; every other method defaults to the baseline behavior.
/// Classification predicates must be total: unknown codes return `false`.
pub trait DialectTypeStrategy: fmt::Debug + Send + Sync {
    /// Short name used in logs and errors.
    fn dialect_name(&self) -> &'static str;

    /// Fixed overrides and extensions to the driver's catalog.
    fn extra_types(&self) -> &TypeRegistry;

    fn is_integer_type(&self, code: TypeCode) -> bool {
        classify::is_integer(code)
    }

    fn is_string_type(&self, code: TypeCode) -> bool {
        classify::is_string(code)
    }

    fn is_binary_type(&self, code: TypeCode) -> bool {
        classify::is_binary(code)
    }

    /// Narrow a generic code to the native width this dialect decodes it as.
    fn native_type(&self, code: TypeCode, unsigned: bool) -> Option<NativeType> {
        let _ = (code, unsigned);
        None
    }

    /// The dialect's UDT discovery, if it has one.
    fn udt_discovery(&self) -> Option<&dyn UdtDiscovery> {
        None
    }

    fn supports_udt_discovery(&self) -> bool {
        self.udt_discovery().is_some()
    }
}

/// Catalog introspection for user-defined types.
pub trait UdtDiscovery: Send + Sync {
    /// Discover the UDTs of `schemas` with a single query on `connection`.
    ///
    /// An empty `schemas` slice is valid and selects the default schema
    /// ([`DEFAULT_SCHEMA`](crate::DEFAULT_SCHEMA)) without binding anything.
    fn discover_udts(
        &self,
        connection: &mut dyn CatalogConnection,
        schemas: &[String],
    ) -> Result<Vec<UdtDescriptor>>;

    /// Code a discovered type is registered under.
    fn udt_type_code(&self, udt: &UdtDescriptor) -> TypeCode {
        let _ = udt;
        TypeCode::OTHER
    }
}

/// The universal fallback: no extra types, baseline classification, no
/// discovery.
#[derive(Debug, Default)]
pub struct DefaultTypeStrategy {
    extra_types: TypeRegistry,
}

impl DefaultTypeStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DialectTypeStrategy for DefaultTypeStrategy {
    fn dialect_name(&self) -> &'static str {
        "default"
    }

    fn extra_types(&self) -> &TypeRegistry {
        &self.extra_types
    }
}
