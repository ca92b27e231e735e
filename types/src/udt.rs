//! User-defined type kinds

/// Kind of a user-defined type as recorded in a system catalog.
///
/// # Examples
///
/// ```
/// use typeres_types::UdtKind;
///
/// assert_eq!(UdtKind::from_catalog_code("e"), Some(UdtKind::Enum));
/// assert_eq!(UdtKind::Domain.catalog_code(), 'd');
/// assert_eq!(UdtKind::from_catalog_code("b"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UdtKind {
    /// Row type (`CREATE TYPE ... AS (...)`)
    Composite,
    /// Enumeration (`CREATE TYPE ... AS ENUM (...)`)
    Enum,
    /// Constrained alias (`CREATE DOMAIN ...`)
    Domain,
}

impl UdtKind {
    /// All kinds, in catalog-code order `c`, `e`, `d`.
    pub const ALL: [UdtKind; 3] = [UdtKind::Composite, UdtKind::Enum, UdtKind::Domain];

    /// Parse the one-letter catalog code (`c`, `e` or `d`).
    #[must_use]
    pub fn from_catalog_code(code: &str) -> Option<Self> {
        match code.trim() {
            "c" => Some(Self::Composite),
            "e" => Some(Self::Enum),
            "d" => Some(Self::Domain),
            _ => None,
        }
    }

    /// The one-letter catalog code.
    #[must_use]
    pub const fn catalog_code(&self) -> char {
        match self {
            Self::Composite => 'c',
            Self::Enum => 'e',
            Self::Domain => 'd',
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Composite => "composite",
            Self::Enum => "enum",
            Self::Domain => "domain",
        }
    }
}

impl core::fmt::Display for UdtKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
