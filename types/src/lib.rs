//! Shared type definitions for typeres
//!
//! This crate provides the vocabulary every other typeres crate speaks:
//!
//! - [`Dialect`] - Database dialect enum (SQLite, PostgreSQL, MySQL)
//! - [`TypeCode`] - Standard SQL type codes, including the opaque sentinel
//! - [`classify`] - The dialect-independent classification baseline
//! - [`NativeType`] - Native widths a dialect may narrow a code to
//! - [`UdtKind`] - Kinds of user-defined types found in system catalogs
//!
//! # Features
//!
//! - `std` - Standard library support (enabled by default)
//! - `alloc` - Allocator support for no_std environments
//! - `serde` - Enable serde serialization/deserialization

#![cfg_attr(not(feature = "std"), no_std)]

pub mod classify;
mod code;
mod dialect;
mod udt;

pub use classify::NativeType;
pub use code::TypeCode;
pub use dialect::{Dialect, DialectParseError, Placeholder};
pub use udt::UdtKind;

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::classify::{self, NativeType};
    pub use crate::{Dialect, TypeCode, UdtKind};
}
