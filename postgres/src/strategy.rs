//! PostgreSQL type strategy

use crate::PostgresUdtDiscovery;
use typeres_core::{DialectTypeStrategy, TypeRegistry, UdtDiscovery};
use typeres_types::{NativeType, TypeCode};

/// Type strategy for PostgreSQL.
///
/// Adds the SQL-standard spellings the driver catalog only knows by their
/// internal names (`int4`, `bool`, ...), maps bit strings to the opaque code,
/// decodes `SMALLINT` as a 32-bit integer and discovers user-defined types.
///
/// ```
/// use typeres_core::DialectTypeStrategy;
/// use typeres_postgres::PostgresTypeStrategy;
/// use typeres_types::{NativeType, TypeCode};
///
/// let strategy = PostgresTypeStrategy::new();
/// assert_eq!(strategy.extra_types().get("bool"), Some(TypeCode::BOOLEAN));
/// assert_eq!(strategy.native_type(TypeCode::SMALLINT, false), Some(NativeType::I32));
/// assert!(strategy.supports_udt_discovery());
/// ```
#[derive(Debug)]
pub struct PostgresTypeStrategy {
    extra_types: TypeRegistry,
    discovery: PostgresUdtDiscovery,
}

impl PostgresTypeStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self {
            extra_types: TypeRegistry::from_entries([
                ("SMALLINT", TypeCode::SMALLINT),
                ("INT", TypeCode::INTEGER),
                ("INTEGER", TypeCode::INTEGER),
                ("BIGINT", TypeCode::BIGINT),
                ("DECIMAL", TypeCode::DECIMAL),
                ("NUMERIC", TypeCode::NUMERIC),
                ("REAL", TypeCode::REAL),
                ("BOOL", TypeCode::BOOLEAN),
                ("CHARACTER VARYING", TypeCode::VARCHAR),
                ("VARBIT", TypeCode::OTHER),
                ("BIT VARYING", TypeCode::OTHER),
            ]),
            discovery: PostgresUdtDiscovery,
        }
    }
}

impl Default for PostgresTypeStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl DialectTypeStrategy for PostgresTypeStrategy {
    fn dialect_name(&self) -> &'static str {
        "postgresql"
    }

    fn extra_types(&self) -> &TypeRegistry {
        &self.extra_types
    }

    // int2 values arrive as i32 from the wire decoders downstream
    fn native_type(&self, code: TypeCode, _unsigned: bool) -> Option<NativeType> {
        (code == TypeCode::SMALLINT).then_some(NativeType::I32)
    }

    fn udt_discovery(&self) -> Option<&dyn UdtDiscovery> {
        Some(&self.discovery)
    }
}
