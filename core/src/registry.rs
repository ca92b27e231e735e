//! The resolved name → code mapping

use crate::TypeName;
use hashbrown::HashMap;
use typeres_types::TypeCode;

/// An immutable, case-insensitive mapping from SQL type name to [`TypeCode`].
///
/// Registries are produced by [`TypeRegistryBuilder::build`] and never change
/// afterwards. Strategies also use one to hold their fixed extra-type table.
///
/// ```
/// use typeres_core::TypeRegistry;
/// use typeres_types::TypeCode;
///
/// let registry = TypeRegistry::from_entries([("INTEGER", TypeCode::INTEGER)]);
/// assert_eq!(registry.get("integer"), Some(TypeCode::INTEGER));
/// assert_eq!(registry.get("Integer"), Some(TypeCode::INTEGER));
/// assert_eq!(registry.get("int"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeRegistry {
    entries: HashMap<TypeName, TypeCode>,
}

impl TypeRegistry {
    /// A registry with no entries.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> TypeRegistryBuilder {
        TypeRegistryBuilder::default()
    }

    /// Build a registry from `(name, code)` pairs. Later pairs win on
    /// case-insensitive collisions.
    pub fn from_entries<I, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, TypeCode)>,
        N: Into<TypeName>,
    {
        let mut builder = Self::builder();
        for (name, code) in entries {
            builder.insert(name, code);
        }
        builder.build()
    }

    /// Look up a type name, ignoring case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<TypeCode> {
        self.entries.get(&TypeName::new(name)).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&TypeName::new(name))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, code)` pairs in no particular order. Names carry the
    /// spelling of the stage that wrote them last.
    pub fn iter(&self) -> impl Iterator<Item = (&str, TypeCode)> + '_ {
        self.entries.iter().map(|(name, code)| (name.as_str(), *code))
    }

    /// Entries ordered case-insensitively by name.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, TypeCode)> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
            .into_iter()
            .map(|(name, code)| (name.as_str(), *code))
            .collect()
    }

    /// Start a new builder seeded with this registry's entries.
    #[must_use]
    pub fn to_builder(&self) -> TypeRegistryBuilder {
        TypeRegistryBuilder {
            entries: self.entries.clone(),
        }
    }
}

impl<N: Into<TypeName>> FromIterator<(N, TypeCode)> for TypeRegistry {
    fn from_iter<I: IntoIterator<Item = (N, TypeCode)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

/// Accumulates entries for a [`TypeRegistry`].
///
/// Every insert overwrites a colliding key, spelling included, which is what
/// gives later merge stages precedence over earlier ones.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistryBuilder {
    entries: HashMap<TypeName, TypeCode>,
}

impl TypeRegistryBuilder {
    pub fn insert(&mut self, name: impl Into<TypeName>, code: TypeCode) -> &mut Self {
        let name = name.into();
        // HashMap::insert keeps the old key, so drop it first to take the new spelling
        self.entries.remove(&name);
        self.entries.insert(name, code);
        self
    }

    /// Overlay every entry of `other`.
    pub fn merge(&mut self, other: &TypeRegistry) -> &mut Self {
        for (name, code) in &other.entries {
            self.insert(name.clone(), *code);
        }
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn build(self) -> TypeRegistry {
        TypeRegistry {
            entries: self.entries,
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TypeRegistry {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.sorted())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TypeRegistry {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = std::collections::BTreeMap::<String, TypeCode>::deserialize(deserializer)?;
        Ok(Self::from_entries(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case() {
        let registry = TypeRegistry::from_entries([("int", TypeCode::INTEGER)]);
        for spelling in ["int", "INT", "Int"] {
            assert_eq!(registry.get(spelling), Some(TypeCode::INTEGER));
            assert!(registry.contains(spelling));
        }
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_later_insert_wins_with_its_spelling() {
        let mut builder = TypeRegistry::builder();
        builder
            .insert("varbit", TypeCode::VARBINARY)
            .insert("VARBIT", TypeCode::OTHER);
        let registry = builder.build();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.iter().collect::<Vec<_>>(), [("VARBIT", TypeCode::OTHER)]);
    }

    #[test]
    fn test_merge_overlays() {
        let base = TypeRegistry::from_entries([
            ("INTEGER", TypeCode::INTEGER),
            ("bool", TypeCode::BIT),
        ]);
        let extra = TypeRegistry::from_entries([("BOOL", TypeCode::BOOLEAN)]);

        let mut builder = base.to_builder();
        builder.merge(&extra);
        let merged = builder.build();

        assert_eq!(merged.get("bool"), Some(TypeCode::BOOLEAN));
        assert_eq!(merged.get("integer"), Some(TypeCode::INTEGER));
        assert_eq!(merged.len(), 2);
        // the source registry is untouched
        assert_eq!(base.get("bool"), Some(TypeCode::BIT));
    }

    #[test]
    fn test_sorted_and_equality() {
        let a: TypeRegistry = [("b", TypeCode::CHAR), ("A", TypeCode::BIT)].into_iter().collect();
        let b: TypeRegistry = [("a", TypeCode::BIT), ("B", TypeCode::CHAR)].into_iter().collect();

        assert_eq!(a.sorted(), [("A", TypeCode::BIT), ("b", TypeCode::CHAR)]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty() {
        let registry = TypeRegistry::empty();
        assert!(registry.is_empty());
        assert_eq!(registry.get("anything"), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_json_map() {
        let registry = TypeRegistry::from_entries([
            ("INTEGER", TypeCode::INTEGER),
            ("my_enum_type", TypeCode::OTHER),
        ]);
        let json = serde_json::to_string(&registry).unwrap();
        assert_eq!(json, r#"{"INTEGER":4,"my_enum_type":1111}"#);

        let back: TypeRegistry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, registry);
    }
}
