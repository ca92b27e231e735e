//! PostgreSQL base type catalog
//!
//! Maps `pg_type` rows to standard type codes the way the PostgreSQL JDBC
//! driver reports them, so registries built from a live server line up with
//! what downstream encoders expect.

use typeres_core::{CatalogEntry, CatalogRow, Result, TypeError};
use typeres_types::TypeCode;

/// Every type in `pg_catalog` with its kind and category.
pub const BASE_TYPES_QUERY: &str = r#"
SELECT
    t.typname::text AS type_name,
    t.typtype::text AS type_kind,
    t.typcategory::text AS type_category
FROM pg_catalog.pg_type t
JOIN pg_catalog.pg_namespace n ON n.oid = t.typnamespace
WHERE n.nspname = 'pg_catalog'
ORDER BY t.typname
"#;

/// Fixed `typname` → code table.
const NAMED_TYPES: &[(&str, TypeCode)] = &[
    ("int2", TypeCode::SMALLINT),
    ("int4", TypeCode::INTEGER),
    ("oid", TypeCode::BIGINT),
    ("int8", TypeCode::BIGINT),
    ("money", TypeCode::DOUBLE),
    ("numeric", TypeCode::NUMERIC),
    ("float4", TypeCode::REAL),
    ("float8", TypeCode::DOUBLE),
    ("char", TypeCode::CHAR),
    ("bpchar", TypeCode::CHAR),
    ("varchar", TypeCode::VARCHAR),
    ("text", TypeCode::VARCHAR),
    ("name", TypeCode::VARCHAR),
    ("bytea", TypeCode::BINARY),
    ("bool", TypeCode::BIT),
    ("bit", TypeCode::BIT),
    ("date", TypeCode::DATE),
    ("time", TypeCode::TIME),
    ("timetz", TypeCode::TIME),
    ("timestamp", TypeCode::TIMESTAMP),
    ("timestamptz", TypeCode::TIMESTAMP),
    ("refcursor", TypeCode::REF_CURSOR),
];

/// Code for one `pg_type` row.
///
/// Named types come from a fixed table; otherwise arrays map to `ARRAY`,
/// composites to `STRUCT`, domains to `DISTINCT`, enums to `VARCHAR` and
/// everything else to the opaque code.
///
/// ```
/// use typeres_postgres::base_type_code;
/// use typeres_types::TypeCode;
///
/// assert_eq!(base_type_code("int4", Some("b"), Some("N")), TypeCode::INTEGER);
/// assert_eq!(base_type_code("_int4", Some("b"), Some("A")), TypeCode::ARRAY);
/// assert_eq!(base_type_code("jsonb", Some("b"), Some("U")), TypeCode::OTHER);
/// ```
#[must_use]
pub fn base_type_code(type_name: &str, kind: Option<&str>, category: Option<&str>) -> TypeCode {
    if let Some((_, code)) = NAMED_TYPES.iter().find(|(name, _)| *name == type_name) {
        return *code;
    }
    if category == Some("A") {
        return TypeCode::ARRAY;
    }
    match kind {
        Some("c") => TypeCode::STRUCT,
        Some("d") => TypeCode::DISTINCT,
        Some("e") => TypeCode::VARCHAR,
        _ => TypeCode::OTHER,
    }
}

/// Decode the rows of [`BASE_TYPES_QUERY`].
pub fn entries_from_rows(rows: &[CatalogRow]) -> Result<Vec<CatalogEntry>> {
    rows.iter()
        .map(|row| {
            let name = row.get(0).ok_or_else(|| {
                TypeError::CatalogFetch("pg_type row without a type name".to_string())
            })?;
            Ok(CatalogEntry::new(
                name,
                base_type_code(name, row.get(1), row.get(2)),
            ))
        })
        .collect()
}
