//! PostgreSQL user-defined type discovery
//!
//! Finds composite, enum and domain types in a set of schemas with a single
//! parameterised query over `pg_type`.

use typeres_core::{
    CatalogConnection, CatalogRow, DEFAULT_SCHEMA, Result, TypeError, UdtDescriptor, UdtDiscovery,
    UdtKind,
};
use typeres_types::Dialect;

const SELECT_PREFIX: &str = r#"SELECT
    t.typname::text AS udt_name,
    t.typtype::text AS udt_kind,
    n.nspname::text AS schema_name
FROM pg_type t
JOIN pg_namespace n ON n.oid = t.typnamespace
LEFT JOIN pg_class c ON c.oid = t.typrelid
WHERE "#;

// Composite types backed by a table, view or index are row types of those
// relations, not user-facing types; only stand-alone composites (relkind 'c')
// are kept.
const SELECT_SUFFIX: &str = r#"
  AND t.typtype IN ('c', 'e', 'd')
  AND (c.relkind IS NULL OR c.relkind = 'c')
ORDER BY udt_name"#;

/// The UDT discovery query for a list of schemas.
///
/// Schema names are always bound as parameters, one per schema and in the
/// given order. An empty list is an explicit case: it searches `public`
/// through a literal predicate and binds nothing.
///
/// ```
/// use typeres_postgres::UdtQuery;
///
/// let query = UdtQuery::new(&["sales", "audit"]);
/// assert!(query.sql().contains("n.nspname IN ($1, $2)"));
/// assert_eq!(query.params(), ["sales", "audit"]);
///
/// let query = UdtQuery::new::<&str>(&[]);
/// assert!(query.sql().contains("n.nspname = 'public'"));
/// assert!(query.params().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UdtQuery {
    sql: String,
    params: Vec<String>,
}

impl UdtQuery {
    pub fn new<S: AsRef<str>>(schemas: &[S]) -> Self {
        let mut sql = String::from(SELECT_PREFIX);
        write_schema_predicate(&mut sql, schemas.len());
        sql.push_str(SELECT_SUFFIX);
        Self {
            sql,
            params: schemas.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Bound parameters in placeholder order.
    #[must_use]
    pub fn params(&self) -> Vec<&str> {
        self.params.iter().map(String::as_str).collect()
    }

    /// Run the query and decode its rows.
    pub fn execute(&self, connection: &mut dyn CatalogConnection) -> Result<Vec<UdtDescriptor>> {
        connection
            .query(&self.sql, &self.params())?
            .iter()
            .map(decode_row)
            .collect()
    }
}

fn write_schema_predicate(sql: &mut String, schema_count: usize) {
    if schema_count == 0 {
        sql.push_str("n.nspname = '");
        sql.push_str(DEFAULT_SCHEMA);
        sql.push('\'');
        return;
    }
    let placeholders: Vec<String> = (1..=schema_count)
        .map(|index| Dialect::PostgreSQL.placeholder(index).to_string())
        .collect();
    sql.push_str("n.nspname IN (");
    sql.push_str(&placeholders.join(", "));
    sql.push(')');
}

fn decode_row(row: &CatalogRow) -> Result<UdtDescriptor> {
    let name = row
        .get(0)
        .ok_or_else(|| TypeError::Discovery("pg_type row without a type name".to_string()))?;
    let kind = row.get(1).unwrap_or_default();
    let kind = UdtKind::from_catalog_code(kind).ok_or_else(|| {
        TypeError::Discovery(format!("unexpected typtype {kind:?} for type {name}"))
    })?;
    let schema = row.get(2).unwrap_or(DEFAULT_SCHEMA);
    Ok(UdtDescriptor::new(name, kind, schema))
}

/// [`UdtDiscovery`] over the PostgreSQL system catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresUdtDiscovery;

impl UdtDiscovery for PostgresUdtDiscovery {
    fn discover_udts(
        &self,
        connection: &mut dyn CatalogConnection,
        schemas: &[String],
    ) -> Result<Vec<UdtDescriptor>> {
        UdtQuery::new(schemas).execute(connection)
    }
}
