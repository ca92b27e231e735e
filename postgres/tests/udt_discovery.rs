//! UDT discovery and loading with the PostgreSQL strategy, against a
//! recording catalog connection.

use typeres_core::{
    CatalogConnection, CatalogEntry, CatalogRow, DialectTypeStrategy, DiscoveryConfig,
    DiscoveryStatus, MetadataSource, Result, StrategyRegistry, TypeError, TypeLoader,
    UdtDescriptor, UdtDiscovery, UdtKind,
};
use typeres_postgres::{PostgresTypeStrategy, PostgresUdtDiscovery, entries_from_rows};
use typeres_types::{Dialect, TypeCode};

// =============================================================================
// Helpers
// =============================================================================

#[derive(Default)]
struct Recorder {
    rows: Vec<CatalogRow>,
    error: Option<String>,
    calls: Vec<(String, Vec<String>)>,
}

impl Recorder {
    fn with_rows(rows: &[[&str; 3]]) -> Self {
        Self {
            rows: rows.iter().map(|row| catalog_row(row)).collect(),
            ..Self::default()
        }
    }
}

impl CatalogConnection for Recorder {
    fn query(&mut self, sql: &str, params: &[&str]) -> Result<Vec<CatalogRow>> {
        self.calls
            .push((sql.to_string(), params.iter().map(|p| p.to_string()).collect()));
        match &self.error {
            Some(message) => Err(TypeError::Discovery(message.clone())),
            None => Ok(self.rows.clone()),
        }
    }
}

struct Source {
    catalog: Vec<CatalogEntry>,
    connection: Recorder,
}

impl MetadataSource for Source {
    fn type_catalog(&mut self) -> Result<Vec<CatalogEntry>> {
        Ok(self.catalog.clone())
    }

    fn catalog_connection(&mut self) -> Result<Option<&mut dyn CatalogConnection>> {
        Ok(Some(&mut self.connection))
    }
}

fn catalog_row(columns: &[&str; 3]) -> CatalogRow {
    columns.iter().map(|c| Some(*c)).collect()
}

fn schemas(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn postgres_strategies() -> StrategyRegistry {
    let mut strategies = StrategyRegistry::new();
    strategies.register(Dialect::PostgreSQL, PostgresTypeStrategy::new());
    strategies
}

// =============================================================================
// Query shape
// =============================================================================

#[test]
fn test_single_schema_binds_one_parameter() {
    let mut connection = Recorder::default();

    let udts = PostgresUdtDiscovery
        .discover_udts(&mut connection, &schemas(&["public"]))
        .unwrap();

    assert!(udts.is_empty());
    assert_eq!(connection.calls.len(), 1);
    assert_eq!(connection.calls[0].1, ["public"]);
    assert!(connection.calls[0].0.contains("n.nspname IN ($1)"));
}

#[test]
fn test_multiple_schemas_bind_in_order() {
    let mut connection = Recorder::default();

    PostgresUdtDiscovery
        .discover_udts(&mut connection, &schemas(&["schema1", "schema2", "schema3"]))
        .unwrap();

    assert_eq!(connection.calls.len(), 1);
    assert_eq!(connection.calls[0].1, ["schema1", "schema2", "schema3"]);
    assert!(connection.calls[0].0.contains("n.nspname IN ($1, $2, $3)"));
}

#[test]
fn test_empty_schemas_default_to_public_literal() {
    let mut connection = Recorder::default();

    PostgresUdtDiscovery.discover_udts(&mut connection, &[]).unwrap();

    assert_eq!(connection.calls.len(), 1);
    assert!(connection.calls[0].1.is_empty());
    assert!(connection.calls[0].0.contains("n.nspname = 'public'"));
}

#[test]
fn test_rows_decoded_to_descriptors() {
    let mut connection = Recorder::with_rows(&[
        ["address", "c", "crm"],
        ["mood", "e", "public"],
        ["us_postal_code", "d", "public"],
    ]);

    let udts = PostgresUdtDiscovery
        .discover_udts(&mut connection, &schemas(&["crm", "public"]))
        .unwrap();

    assert_eq!(
        udts,
        [
            UdtDescriptor::new("address", UdtKind::Composite, "crm"),
            UdtDescriptor::new("mood", UdtKind::Enum, "public"),
            UdtDescriptor::new("us_postal_code", UdtKind::Domain, "public"),
        ]
    );
    for udt in &udts {
        assert_eq!(PostgresUdtDiscovery.udt_type_code(udt), TypeCode::OTHER);
    }
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_load_merges_catalog_extra_and_udts() {
    let strategies = postgres_strategies();
    let catalog = entries_from_rows(&[
        catalog_row(&["int4", "b", "N"]),
        catalog_row(&["bool", "b", "B"]),
        catalog_row(&["varbit", "b", "V"]),
    ])
    .unwrap();
    let mut source = Source {
        catalog,
        connection: Recorder::with_rows(&[["my_enum_type", "e", "public"]]),
    };

    let outcome = TypeLoader::new(&strategies)
        .load_with_outcome(&mut source, Dialect::PostgreSQL, &DiscoveryConfig::default())
        .unwrap();
    let registry = &outcome.registry;

    assert_eq!(registry.get("INT4"), Some(TypeCode::INTEGER));
    assert_eq!(registry.get("int"), Some(TypeCode::INTEGER));
    // the driver reports bool as BIT; the strategy table wins
    assert_eq!(registry.get("bool"), Some(TypeCode::BOOLEAN));
    assert_eq!(registry.get("VARBIT"), Some(TypeCode::OTHER));
    assert_eq!(registry.get("bit varying"), Some(TypeCode::OTHER));
    assert_eq!(registry.get("My_Enum_Type"), Some(TypeCode::OTHER));
    // bool and varbit collide with extra entries
    assert_eq!(registry.len(), 3 + 11 - 2 + 1);

    assert_eq!(outcome.discovery, DiscoveryStatus::Completed { discovered: 1 });
    assert_eq!(outcome.discovered[0].kind, UdtKind::Enum);
    assert_eq!(source.connection.calls.len(), 1);
    assert_eq!(source.connection.calls[0].1, ["public"]);
}

#[test]
fn test_load_survives_permission_error() {
    let strategies = postgres_strategies();
    let mut source = Source {
        catalog: vec![CatalogEntry::new("int4", TypeCode::INTEGER)],
        connection: Recorder {
            error: Some("permission denied for table pg_type".into()),
            ..Recorder::default()
        },
    };

    let outcome = TypeLoader::new(&strategies)
        .load_with_outcome(
            &mut source,
            Dialect::PostgreSQL,
            &DiscoveryConfig::with_schemas(["audit"]),
        )
        .unwrap();

    assert_eq!(
        outcome.discovery,
        DiscoveryStatus::Failed("Discovery error: permission denied for table pg_type".into())
    );
    assert!(outcome.discovered.is_empty());
    assert_eq!(
        outcome.registry.len(),
        1 + PostgresTypeStrategy::new().extra_types().len()
    );
    assert_eq!(source.connection.calls[0].1, ["audit"]);
}

#[test]
fn test_load_skips_discovery_when_disabled() {
    let strategies = postgres_strategies();
    let mut source = Source {
        catalog: vec![CatalogEntry::new("int4", TypeCode::INTEGER)],
        connection: Recorder::with_rows(&[["mood", "e", "public"]]),
    };

    let registry = TypeLoader::new(&strategies)
        .load(&mut source, Dialect::PostgreSQL, &DiscoveryConfig::disabled())
        .unwrap();

    assert!(!registry.contains("mood"));
    assert!(source.connection.calls.is_empty());
}
