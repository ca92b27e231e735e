//! SQL type codes
//!
//! Drivers report column and catalog types as integer codes drawn from the
//! standard SQL/JDBC enumeration. [`TypeCode`] keeps the raw integer so codes
//! outside the enumeration survive a round trip untouched.

/// An integer SQL type code.
///
/// Any `i32` is a valid code. The associated constants name the standard
/// values; [`TypeCode::OTHER`] is the opaque sentinel for types with no
/// precise standard equivalent.
///
/// # Examples
///
/// ```
/// use typeres_types::TypeCode;
///
/// assert_eq!(TypeCode::INTEGER.get(), 4);
/// assert_eq!(TypeCode::new(16), TypeCode::BOOLEAN);
/// assert_eq!(TypeCode::OTHER.name(), Some("OTHER"));
/// assert_eq!(TypeCode::new(424242).name(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct TypeCode(i32);

macro_rules! type_codes {
    ($($(#[$meta:meta])* $name:ident = $value:literal),+ $(,)?) => {
        impl TypeCode {
            $(
                $(#[$meta])*
                pub const $name: TypeCode = TypeCode($value);
            )+

            /// Every named code, in declaration order.
            pub const STANDARD: &'static [TypeCode] = &[$(TypeCode::$name),+];

            /// Standard name of this code, or `None` when the code is outside
            /// the enumeration.
            #[must_use]
            pub const fn name(self) -> Option<&'static str> {
                match self.0 {
                    $($value => Some(stringify!($name)),)+
                    _ => None,
                }
            }

            /// Resolve a standard code name (case-insensitive).
            ///
            /// ```
            /// use typeres_types::TypeCode;
            ///
            /// assert_eq!(TypeCode::from_name("varchar"), Some(TypeCode::VARCHAR));
            /// assert_eq!(TypeCode::from_name("VARBIT"), None);
            /// ```
            #[must_use]
            pub fn from_name(name: &str) -> Option<TypeCode> {
                $(
                    if name.eq_ignore_ascii_case(stringify!($name)) {
                        return Some(TypeCode::$name);
                    }
                )+
                None
            }
        }
    };
}

type_codes! {
    BIT = -7,
    TINYINT = -6,
    SMALLINT = 5,
    INTEGER = 4,
    BIGINT = -5,
    FLOAT = 6,
    REAL = 7,
    DOUBLE = 8,
    NUMERIC = 2,
    DECIMAL = 3,
    CHAR = 1,
    VARCHAR = 12,
    LONGVARCHAR = -1,
    DATE = 91,
    TIME = 92,
    TIMESTAMP = 93,
    BINARY = -2,
    VARBINARY = -3,
    LONGVARBINARY = -4,
    NULL = 0,
    /// Opaque sentinel for vendor and user-defined types
    OTHER = 1111,
    JAVA_OBJECT = 2000,
    DISTINCT = 2001,
    STRUCT = 2002,
    ARRAY = 2003,
    BLOB = 2004,
    CLOB = 2005,
    REF = 2006,
    DATALINK = 70,
    BOOLEAN = 16,
    ROWID = -8,
    NCHAR = -15,
    NVARCHAR = -9,
    LONGNVARCHAR = -16,
    NCLOB = 2011,
    SQLXML = 2009,
    REF_CURSOR = 2012,
    TIME_WITH_TIMEZONE = 2013,
    TIMESTAMP_WITH_TIMEZONE = 2014,
}

impl TypeCode {
    /// Wrap a raw code.
    #[inline]
    #[must_use]
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// The raw integer value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// `true` for the opaque sentinel.
    #[inline]
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.0 == Self::OTHER.0
    }
}

impl From<i32> for TypeCode {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl From<TypeCode> for i32 {
    fn from(code: TypeCode) -> Self {
        code.0
    }
}

impl core::fmt::Display for TypeCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}({})", self.0),
            None => write!(f, "{}", self.0),
        }
    }
}
