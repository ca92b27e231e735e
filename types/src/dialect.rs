//! Unified database dialect enum
//!
//! The dialect is the key used to pick a type strategy, so every crate in the
//! workspace agrees on one closed set of identifiers.

/// SQL dialect for database-specific type behavior
///
/// # Examples
///
/// ```
/// use typeres_types::Dialect;
///
/// let dialect = Dialect::PostgreSQL;
/// assert!(dialect.uses_numbered_placeholders());
///
/// let sqlite = Dialect::SQLite;
/// assert!(!sqlite.uses_numbered_placeholders());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dialect {
    /// SQLite - uses `?` positional placeholders
    ///
    /// Has no catalog of its own to introspect, so it resolves with the
    /// baseline rules only.
    #[default]
    SQLite,

    /// PostgreSQL - uses `$1, $2, ...` numbered placeholders
    PostgreSQL,

    /// MySQL - uses `?` positional placeholders
    MySQL,
}

impl Dialect {
    /// Every supported dialect, in declaration order.
    pub const ALL: [Dialect; 3] = [Dialect::SQLite, Dialect::PostgreSQL, Dialect::MySQL];

    /// Returns `true` if this dialect uses numbered placeholders (`$1, $2, ...`)
    #[inline]
    #[must_use]
    pub const fn uses_numbered_placeholders(&self) -> bool {
        matches!(self, Dialect::PostgreSQL)
    }

    /// The bind placeholder for the 1-based parameter `index`.
    ///
    /// ```
    /// use typeres_types::Dialect;
    ///
    /// assert_eq!(Dialect::PostgreSQL.placeholder(2).to_string(), "$2");
    /// assert_eq!(Dialect::MySQL.placeholder(2).to_string(), "?");
    /// ```
    #[inline]
    #[must_use]
    pub const fn placeholder(self, index: usize) -> Placeholder {
        Placeholder {
            dialect: self,
            index,
        }
    }

    /// Write the bind placeholder for the 1-based parameter `index`.
    ///
    /// ```
    /// use typeres_types::Dialect;
    ///
    /// let mut sql = String::new();
    /// Dialect::PostgreSQL.write_placeholder(&mut sql, 2).unwrap();
    /// Dialect::MySQL.write_placeholder(&mut sql, 2).unwrap();
    /// assert_eq!(sql, "$2?");
    /// ```
    pub fn write_placeholder<W: core::fmt::Write>(&self, out: &mut W, index: usize) -> core::fmt::Result {
        write!(out, "{}", self.placeholder(index))
    }

    /// Parse a dialect from a string (case-insensitive)
    ///
    /// Supports various common aliases:
    /// - SQLite: `"sqlite"`, `"turso"`, `"libsql"`
    /// - PostgreSQL: `"postgresql"`, `"postgres"`, `"pg"`
    /// - MySQL: `"mysql"`, `"mariadb"`
    ///
    /// # Examples
    ///
    /// ```
    /// use typeres_types::Dialect;
    ///
    /// assert_eq!(Dialect::parse("sqlite"), Some(Dialect::SQLite));
    /// assert_eq!(Dialect::parse("postgres"), Some(Dialect::PostgreSQL));
    /// assert_eq!(Dialect::parse("pg"), Some(Dialect::PostgreSQL));
    /// assert_eq!(Dialect::parse("unknown"), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        // eq_ignore_ascii_case keeps this allocation-free for no_std
        if s.eq_ignore_ascii_case("sqlite")
            || s.eq_ignore_ascii_case("turso")
            || s.eq_ignore_ascii_case("libsql")
        {
            Some(Dialect::SQLite)
        } else if s.eq_ignore_ascii_case("postgresql")
            || s.eq_ignore_ascii_case("postgres")
            || s.eq_ignore_ascii_case("pg")
        {
            Some(Dialect::PostgreSQL)
        } else if s.eq_ignore_ascii_case("mysql") || s.eq_ignore_ascii_case("mariadb") {
            Some(Dialect::MySQL)
        } else {
            None
        }
    }

    /// Get the dialect name as a lowercase string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Dialect::SQLite => "sqlite",
            Dialect::PostgreSQL => "postgresql",
            Dialect::MySQL => "mysql",
        }
    }
}

impl core::fmt::Display for Dialect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Dialect {
    type Err = DialectParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::parse(s).ok_or(DialectParseError)
    }
}

/// A bind placeholder rendered in a dialect's style (`$1` or `?`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    dialect: Dialect,
    index: usize,
}

impl core::fmt::Display for Placeholder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.dialect.uses_numbered_placeholders() {
            write!(f, "${}", self.index)
        } else {
            f.write_str("?")
        }
    }
}

/// Error returned when parsing an unknown dialect string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectParseError;

impl core::fmt::Display for DialectParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown dialect")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DialectParseError {}
