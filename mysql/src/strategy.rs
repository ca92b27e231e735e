use typeres_core::{DialectTypeStrategy, TypeRegistry};
use typeres_types::{NativeType, TypeCode};

/// Type strategy for MySQL and MariaDB.
///
/// ```
/// use typeres_core::DialectTypeStrategy;
/// use typeres_mysql::MySqlTypeStrategy;
/// use typeres_types::{NativeType, TypeCode};
///
/// let strategy = MySqlTypeStrategy::new();
/// assert_eq!(strategy.extra_types().get("point"), Some(TypeCode::BINARY));
/// assert_eq!(strategy.native_type(TypeCode::INTEGER, true), Some(NativeType::I64));
/// assert_eq!(strategy.native_type(TypeCode::INTEGER, false), None);
/// ```
#[derive(Debug)]
pub struct MySqlTypeStrategy {
    extra_types: TypeRegistry,
}

/// Spatial types arrive as WKB blobs.
const SPATIAL_TYPES: [&str; 8] = [
    "GEOMETRY",
    "GEOMETRYCOLLECTION",
    "POINT",
    "MULTIPOINT",
    "POLYGON",
    "MULTIPOLYGON",
    "LINESTRING",
    "MULTILINESTRING",
];

impl MySqlTypeStrategy {
    #[must_use]
    pub fn new() -> Self {
        let mut builder = TypeRegistry::builder();
        builder.insert("JSON", TypeCode::LONGVARCHAR);
        for name in SPATIAL_TYPES {
            builder.insert(name, TypeCode::BINARY);
        }
        builder.insert("YEAR", TypeCode::DATE);
        Self {
            extra_types: builder.build(),
        }
    }
}

impl Default for MySqlTypeStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl DialectTypeStrategy for MySqlTypeStrategy {
    fn dialect_name(&self) -> &'static str {
        "mysql"
    }

    fn extra_types(&self) -> &TypeRegistry {
        &self.extra_types
    }

    // An unsigned column needs the next wider signed type; BIGINT has none.
    fn native_type(&self, code: TypeCode, unsigned: bool) -> Option<NativeType> {
        if !unsigned {
            return None;
        }
        match code {
            TypeCode::TINYINT | TypeCode::SMALLINT => Some(NativeType::I32),
            TypeCode::INTEGER => Some(NativeType::I64),
            TypeCode::BIGINT => Some(NativeType::U64),
            _ => None,
        }
    }
}
