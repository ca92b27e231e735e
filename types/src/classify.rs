//! Dialect-independent type classification
//!
//! The baseline rule set that every dialect strategy starts from. All
//! predicates are total: any code outside the known sets classifies as
//! `false`.

use crate::TypeCode;

const INTEGER_TYPES: [TypeCode; 4] = [
    TypeCode::INTEGER,
    TypeCode::BIGINT,
    TypeCode::SMALLINT,
    TypeCode::TINYINT,
];

const STRING_TYPES: [TypeCode; 6] = [
    TypeCode::CHAR,
    TypeCode::VARCHAR,
    TypeCode::LONGVARCHAR,
    TypeCode::NCHAR,
    TypeCode::NVARCHAR,
    TypeCode::LONGNVARCHAR,
];

const BINARY_TYPES: [TypeCode; 3] = [TypeCode::BINARY, TypeCode::VARBINARY, TypeCode::LONGVARBINARY];

const fn contains(set: &[TypeCode], code: TypeCode) -> bool {
    let mut i = 0;
    while i < set.len() {
        if set[i].get() == code.get() {
            return true;
        }
        i += 1;
    }
    false
}

/// `true` for the integer family (`TINYINT` through `BIGINT`).
#[must_use]
pub const fn is_integer(code: TypeCode) -> bool {
    contains(&INTEGER_TYPES, code)
}

/// `true` for fixed, variable and long character types, national variants included.
#[must_use]
pub const fn is_string(code: TypeCode) -> bool {
    contains(&STRING_TYPES, code)
}

/// `true` for fixed, variable and long binary types.
#[must_use]
pub const fn is_binary(code: TypeCode) -> bool {
    contains(&BINARY_TYPES, code)
}

/// Native value width a dialect can narrow a generic code to.
///
/// Returned by a strategy when the driver's generic code would pick the wrong
/// in-memory representation, e.g. a vendor `SMALLINT` that is decoded as a
/// 32-bit integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NativeType {
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `u64`
    U64,
}

impl NativeType {
    /// Rust type name of the width.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            NativeType::I16 => "i16",
            NativeType::I32 => "i32",
            NativeType::I64 => "i64",
            NativeType::U64 => "u64",
        }
    }
}

impl core::fmt::Display for NativeType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
