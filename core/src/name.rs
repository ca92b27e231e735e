//! Case-insensitive SQL type names

use compact_str::CompactString;
use core::hash::{Hash, Hasher};

/// A SQL type name compared case-insensitively.
///
/// Equality and hashing fold every character to lower case, so `"int"`,
/// `"INT"` and `"Int"` are one key. The original spelling is kept for display.
///
/// ```
/// use typeres_core::TypeName;
///
/// assert_eq!(TypeName::new("Character Varying"), TypeName::new("CHARACTER VARYING"));
/// assert_eq!(TypeName::new("Int").as_str(), "Int");
/// ```
#[derive(Debug, Clone)]
pub struct TypeName(CompactString);

impl TypeName {
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self(name.into())
    }

    /// The name as it was spelled by whoever wrote it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn folded(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars().flat_map(char::to_lowercase)
    }
}

impl PartialEq for TypeName {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0) || self.folded().eq(other.folded())
    }
}

impl Eq for TypeName {}

impl Hash for TypeName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.folded() {
            state.write_u32(c as u32);
        }
        state.write_u8(0xff);
    }
}

impl PartialOrd for TypeName {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeName {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.folded().cmp(other.folded())
    }
}

impl core::fmt::Display for TypeName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
