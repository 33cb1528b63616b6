//! Interface shared by all ordering categories and comparisons against zero.
//!
//! Comparing an ordering against zero is the way C++ code inspects the result
//! of `operator<=>`: `(a <=> b) < 0` means "`a` is less than `b`". Here the same
//! queries are available as `is_eq`, `is_ne`, `is_lt`, `is_le`, `is_gt`, `is_ge`
//! methods (named after the methods of `std::cmp::Ordering`) and as free functions
//! with the C++ names. All of them are derived from `cmp_zero`, which returns
//! `None` for an unordered value, so every query on an unordered value is `false`.

use crate::tag::CompareUnderlyingType;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}
}

pub(crate) use self::sealed::Sealed;

/// Common interface of `PartialOrdering`, `WeakOrdering`, `StrongOrdering` and
/// `LegacyPartialOrdering`.
///
/// The trait is sealed: the set of categories is closed.
pub trait OrderingCategory: Copy + Eq + Hash + fmt::Debug + Sealed {
    /// Name of the type, used in diagnostics.
    const NAME: &'static str;
    /// Whether the category has an unordered state.
    const HAS_UNORDERED: bool;

    /// Returns the stored tag.
    fn to_raw(self) -> CompareUnderlyingType;

    /// Result of comparing `self` against zero, or `None` if `self` is unordered.
    fn cmp_zero(self) -> Option<Ordering>;

    /// Swaps less and greater.
    fn reverse(self) -> Self;

    /// Returns `false` only for the unordered state.
    fn is_ordered(self) -> bool {
        self.cmp_zero().is_some()
    }
}

pub(crate) const fn zero_eq(c: Option<Ordering>) -> bool {
    matches!(c, Some(Ordering::Equal))
}

pub(crate) const fn zero_ne(c: Option<Ordering>) -> bool {
    matches!(c, Some(Ordering::Less) | Some(Ordering::Greater))
}

pub(crate) const fn zero_lt(c: Option<Ordering>) -> bool {
    matches!(c, Some(Ordering::Less))
}

pub(crate) const fn zero_le(c: Option<Ordering>) -> bool {
    matches!(c, Some(Ordering::Less) | Some(Ordering::Equal))
}

pub(crate) const fn zero_gt(c: Option<Ordering>) -> bool {
    matches!(c, Some(Ordering::Greater))
}

pub(crate) const fn zero_ge(c: Option<Ordering>) -> bool {
    matches!(c, Some(Ordering::Greater) | Some(Ordering::Equal))
}

/// `o == 0`
pub fn is_eq<O: OrderingCategory>(o: O) -> bool {
    zero_eq(o.cmp_zero())
}

/// `o != 0`. Unlike `!is_eq(o)`, this is `false` for an unordered value.
pub fn is_neq<O: OrderingCategory>(o: O) -> bool {
    zero_ne(o.cmp_zero())
}

/// `o < 0`
pub fn is_lt<O: OrderingCategory>(o: O) -> bool {
    zero_lt(o.cmp_zero())
}

/// `o <= 0`
pub fn is_lteq<O: OrderingCategory>(o: O) -> bool {
    zero_le(o.cmp_zero())
}

/// `o > 0`
pub fn is_gt<O: OrderingCategory>(o: O) -> bool {
    zero_gt(o.cmp_zero())
}

/// `o >= 0`
pub fn is_gteq<O: OrderingCategory>(o: O) -> bool {
    zero_ge(o.cmp_zero())
}

/// Implements the parts every ordering type has in common: the zero-comparison
/// methods, `to_raw`, `Debug` and the `OrderingCategory` impl.
///
/// The type must be a tuple struct over the tag and provide inherent
/// `const fn cmp_zero(self) -> Option<Ordering>`, `const fn reverse(self) -> Self`
/// and `fn constant_name(self) -> &'static str`.
macro_rules! ordering_category {
    ($ty:ident, has_unordered = $has_unordered:expr) => {
        impl $ty {
            /// Returns the stored tag.
            pub const fn to_raw(self) -> $crate::tag::CompareUnderlyingType {
                self.0
            }

            /// Returns `true` if `self` compares equal to zero.
            pub const fn is_eq(self) -> bool {
                $crate::category::zero_eq(self.cmp_zero())
            }

            /// Returns `true` if `self` is ordered and does not compare equal to zero.
            pub const fn is_ne(self) -> bool {
                $crate::category::zero_ne(self.cmp_zero())
            }

            /// Returns `true` if `self` compares less than zero.
            pub const fn is_lt(self) -> bool {
                $crate::category::zero_lt(self.cmp_zero())
            }

            /// Returns `true` if `self` compares less than or equal to zero.
            pub const fn is_le(self) -> bool {
                $crate::category::zero_le(self.cmp_zero())
            }

            /// Returns `true` if `self` compares greater than zero.
            pub const fn is_gt(self) -> bool {
                $crate::category::zero_gt(self.cmp_zero())
            }

            /// Returns `true` if `self` compares greater than or equal to zero.
            pub const fn is_ge(self) -> bool {
                $crate::category::zero_ge(self.cmp_zero())
            }
        }

        impl std::fmt::Debug for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}::{}", stringify!($ty), self.constant_name())
            }
        }

        impl $crate::category::Sealed for $ty {}

        impl $crate::category::OrderingCategory for $ty {
            const NAME: &'static str = stringify!($ty);
            const HAS_UNORDERED: bool = $has_unordered;

            fn to_raw(self) -> $crate::tag::CompareUnderlyingType {
                self.0
            }

            fn cmp_zero(self) -> Option<std::cmp::Ordering> {
                $ty::cmp_zero(self)
            }

            fn reverse(self) -> Self {
                $ty::reverse(self)
            }
        }
    };
}
