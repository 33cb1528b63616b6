//! Three-way comparison results compatible with Qt and the C++ standard library.
//!
//! The crate provides four ordering types, from strongest to weakest:
//!
//! - `StrongOrdering`: a total order in which equivalent values are equal;
//! - `WeakOrdering`: a total order in which equivalent values may still differ;
//! - `PartialOrdering`: an order that may find its operands incomparable
//!   (`UNORDERED`), like the result of comparing floating-point numbers;
//! - `LegacyPartialOrdering`: the same four states as `PartialOrdering` with the
//!   unordered state stored as `-127` on every platform.
//!
//! Each value is a single byte. The modern types are bit-compatible with
//! `std::strong_ordering`, `std::weak_ordering` and `std::partial_ordering` of
//! the C++ standard library selected at build time (see `StdLib`), and convert
//! to and from `std::cmp::Ordering` and `Option<std::cmp::Ordering>`.
//!
//! Results are inspected by comparing them against zero:
//!
//! ```
//! use qt_compare::{is_lt, PartialOrdering, StrongOrdering};
//!
//! assert!(StrongOrdering::LESS.is_lt());
//! assert!(is_lt(StrongOrdering::LESS));
//! assert!(!PartialOrdering::UNORDERED.is_ge());
//! ```
//!
//! The `helpers` module derives the comparison operators of a type from two
//! primitives, `CompareEq` and `CompareThreeWay`.
//!
//! The API is not stable yet. Breaking changes may occur in new minor versions.

#![forbid(unused_must_use)]
#![deny(missing_docs)]

#[macro_use]
mod category;

pub mod abi;
mod builtin;
mod conversions;
pub mod errors;
pub mod helpers;
mod legacy;
pub mod native;
mod partial;
mod strong;
pub mod tag;
mod target;
mod weak;

pub use crate::abi::StdLib;
pub use crate::category::{is_eq, is_gt, is_gteq, is_lt, is_lteq, is_neq, OrderingCategory};
pub use crate::errors::InvalidOrderingTag;
pub use crate::helpers::{
    compare_three_way, CompareEq, CompareThreeWay, TryCompareEq, TryCompareThreeWay,
};
pub use crate::legacy::LegacyPartialOrdering;
pub use crate::partial::PartialOrdering;
pub use crate::strong::StrongOrdering;
pub use crate::weak::WeakOrdering;

#[cfg(test)]
mod tests;
