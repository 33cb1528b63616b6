//! Comparison operators derived from two primitive operations.
//!
//! A type takes part in comparisons by implementing two primitives:
//!
//! - `CompareEq::compares_equal`, answering "are the operands equal?";
//! - `CompareThreeWay::compare_three_way`, returning an ordering whose
//!   category (`PartialOrdering`, `WeakOrdering` or `StrongOrdering`) is fixed
//!   by the `Ordering` associated type.
//!
//! The functions in this module compute every comparison operator from these
//! primitives, and the `declare_*` macros implement `PartialEq`, `PartialOrd`
//! (and `Eq` and `Ord` for weakly and strongly ordered types) on top of them:
//!
//! - `declare_equality_comparable!` implements only `==` and `!=`;
//! - `declare_partially_ordered!`, `declare_weakly_ordered!` and
//!   `declare_strongly_ordered!` implement all six operators and verify that
//!   `compare_three_way` returns the declared category.
//!
//! Each macro accepts one type, or two types `T, U` for comparisons between
//! different types. In the second form only `T` implements the primitives (with
//! `Rhs = U`); `U op T` is answered by calling `T`'s primitives with swapped
//! arguments and reversing the result. `b < a` is not rewritten as `!(a <= b)`:
//! both directions go through `compare_three_way`, so both are `false` for
//! unordered operands.
//!
//! `compares_equal(a, b)` must be `true` exactly when `compare_three_way(a, b)`
//! is the equivalent state. This is not checked.
//!
//! The generated operators add no error handling of their own: a panic in a
//! primitive propagates to the caller. Primitives that report failures through
//! `Result` implement `TryCompareEq` and `TryCompareThreeWay` instead, and the
//! `try_*` functions forward their errors unchanged.
//!
//! ```
//! use qt_compare::{declare_strongly_ordered, CompareEq, CompareThreeWay, StrongOrdering};
//!
//! #[derive(Debug, Clone, Copy)]
//! struct Version(u32);
//!
//! impl CompareEq for Version {
//!     fn compares_equal(&self, other: &Version) -> bool {
//!         self.0 == other.0
//!     }
//! }
//!
//! impl CompareThreeWay for Version {
//!     type Ordering = StrongOrdering;
//!
//!     fn compare_three_way(&self, other: &Version) -> StrongOrdering {
//!         qt_compare::compare_three_way(&self.0, &other.0)
//!     }
//! }
//!
//! declare_strongly_ordered!(Version);
//!
//! assert!(Version(1) < Version(2));
//! assert_eq!(Version(3).max(Version(2)), Version(3));
//! ```

use crate::category::{is_gt, is_gteq, is_lt, is_lteq, OrderingCategory};
use std::cmp::Ordering;
use std::convert::Infallible;

/// Primitive equality test between `Self` and `Rhs`.
pub trait CompareEq<Rhs: ?Sized = Self> {
    /// Returns `true` if `self` and `other` are equal.
    fn compares_equal(&self, other: &Rhs) -> bool;
}

/// Primitive three-way comparison between `Self` and `Rhs`.
pub trait CompareThreeWay<Rhs: ?Sized = Self>: CompareEq<Rhs> {
    /// Category of the comparison result.
    type Ordering: OrderingCategory;

    /// Compares `self` with `other`.
    fn compare_three_way(&self, other: &Rhs) -> Self::Ordering;
}

/// Equality test that can fail.
pub trait TryCompareEq<Rhs: ?Sized = Self> {
    /// Error reported by the comparison.
    type Error;

    /// Returns `true` if `self` and `other` are equal.
    fn try_compares_equal(&self, other: &Rhs) -> Result<bool, Self::Error>;
}

/// Three-way comparison that can fail.
pub trait TryCompareThreeWay<Rhs: ?Sized = Self>: TryCompareEq<Rhs> {
    /// Category of the comparison result.
    type Ordering: OrderingCategory;

    /// Compares `self` with `other`.
    fn try_compare_three_way(&self, other: &Rhs) -> Result<Self::Ordering, Self::Error>;
}

/// Infallible primitives are fallible primitives that never fail.
impl<T: CompareEq<U> + ?Sized, U: ?Sized> TryCompareEq<U> for T {
    type Error = Infallible;

    fn try_compares_equal(&self, other: &U) -> Result<bool, Infallible> {
        Ok(self.compares_equal(other))
    }
}

impl<T: CompareThreeWay<U> + ?Sized, U: ?Sized> TryCompareThreeWay<U> for T {
    type Ordering = T::Ordering;

    fn try_compare_three_way(&self, other: &U) -> Result<T::Ordering, Infallible> {
        Ok(self.compare_three_way(other))
    }
}

/// Compares `lhs` with `rhs` using `lhs`'s primitive.
pub fn compare_three_way<T, U>(lhs: &T, rhs: &U) -> T::Ordering
where
    T: CompareThreeWay<U> + ?Sized,
    U: ?Sized,
{
    lhs.compare_three_way(rhs)
}

/// `lhs == rhs`
pub fn eq<T: CompareEq<U> + ?Sized, U: ?Sized>(lhs: &T, rhs: &U) -> bool {
    lhs.compares_equal(rhs)
}

/// `lhs != rhs`
pub fn ne<T: CompareEq<U> + ?Sized, U: ?Sized>(lhs: &T, rhs: &U) -> bool {
    !lhs.compares_equal(rhs)
}

/// `lhs < rhs`
pub fn lt<T: CompareThreeWay<U> + ?Sized, U: ?Sized>(lhs: &T, rhs: &U) -> bool {
    is_lt(lhs.compare_three_way(rhs))
}

/// `lhs <= rhs`
pub fn le<T: CompareThreeWay<U> + ?Sized, U: ?Sized>(lhs: &T, rhs: &U) -> bool {
    is_lteq(lhs.compare_three_way(rhs))
}

/// `lhs > rhs`
pub fn gt<T: CompareThreeWay<U> + ?Sized, U: ?Sized>(lhs: &T, rhs: &U) -> bool {
    is_gt(lhs.compare_three_way(rhs))
}

/// `lhs >= rhs`
pub fn ge<T: CompareThreeWay<U> + ?Sized, U: ?Sized>(lhs: &T, rhs: &U) -> bool {
    is_gteq(lhs.compare_three_way(rhs))
}

/// `lhs.partial_cmp(rhs)`: `None` if the operands are unordered.
pub fn partial_cmp<T: CompareThreeWay<U> + ?Sized, U: ?Sized>(lhs: &T, rhs: &U) -> Option<Ordering> {
    lhs.compare_three_way(rhs).cmp_zero()
}

/// `lhs.cmp(rhs)` for weakly and strongly ordered types.
pub fn cmp<T, U>(lhs: &T, rhs: &U) -> Ordering
where
    T: CompareThreeWay<U> + ?Sized,
    T::Ordering: Into<Ordering>,
    U: ?Sized,
{
    lhs.compare_three_way(rhs).into()
}

/// Compares `lhs` with `rhs` using `rhs`'s primitive.
pub fn reversed_compare_three_way<T, U>(lhs: &U, rhs: &T) -> T::Ordering
where
    T: CompareThreeWay<U> + ?Sized,
    U: ?Sized,
{
    rhs.compare_three_way(lhs).reverse()
}

/// `lhs == rhs` using `rhs`'s primitive.
pub fn reversed_eq<T: CompareEq<U> + ?Sized, U: ?Sized>(lhs: &U, rhs: &T) -> bool {
    rhs.compares_equal(lhs)
}

/// `lhs != rhs` using `rhs`'s primitive.
pub fn reversed_ne<T: CompareEq<U> + ?Sized, U: ?Sized>(lhs: &U, rhs: &T) -> bool {
    !rhs.compares_equal(lhs)
}

/// `lhs < rhs` using `rhs`'s primitive, i.e. `rhs > lhs`.
pub fn reversed_lt<T: CompareThreeWay<U> + ?Sized, U: ?Sized>(lhs: &U, rhs: &T) -> bool {
    is_gt(rhs.compare_three_way(lhs))
}

/// `lhs <= rhs` using `rhs`'s primitive, i.e. `rhs >= lhs`.
pub fn reversed_le<T: CompareThreeWay<U> + ?Sized, U: ?Sized>(lhs: &U, rhs: &T) -> bool {
    is_gteq(rhs.compare_three_way(lhs))
}

/// `lhs > rhs` using `rhs`'s primitive, i.e. `rhs < lhs`.
pub fn reversed_gt<T: CompareThreeWay<U> + ?Sized, U: ?Sized>(lhs: &U, rhs: &T) -> bool {
    is_lt(rhs.compare_three_way(lhs))
}

/// `lhs >= rhs` using `rhs`'s primitive, i.e. `rhs <= lhs`.
pub fn reversed_ge<T: CompareThreeWay<U> + ?Sized, U: ?Sized>(lhs: &U, rhs: &T) -> bool {
    is_lteq(rhs.compare_three_way(lhs))
}

/// `lhs.partial_cmp(rhs)` using `rhs`'s primitive.
pub fn reversed_partial_cmp<T, U>(lhs: &U, rhs: &T) -> Option<Ordering>
where
    T: CompareThreeWay<U> + ?Sized,
    U: ?Sized,
{
    reversed_compare_three_way(lhs, rhs).cmp_zero()
}

/// `lhs.cmp(rhs)` using `rhs`'s primitive, for weakly and strongly ordered types.
pub fn reversed_cmp<T, U>(lhs: &U, rhs: &T) -> Ordering
where
    T: CompareThreeWay<U> + ?Sized,
    T::Ordering: Into<Ordering>,
    U: ?Sized,
{
    reversed_compare_three_way(lhs, rhs).into()
}

/// `lhs == rhs`, forwarding errors of the primitive.
pub fn try_eq<T, U>(lhs: &T, rhs: &U) -> Result<bool, T::Error>
where
    T: TryCompareEq<U> + ?Sized,
    U: ?Sized,
{
    lhs.try_compares_equal(rhs)
}

/// `lhs != rhs`, forwarding errors of the primitive.
pub fn try_ne<T, U>(lhs: &T, rhs: &U) -> Result<bool, T::Error>
where
    T: TryCompareEq<U> + ?Sized,
    U: ?Sized,
{
    Ok(!lhs.try_compares_equal(rhs)?)
}

/// `lhs < rhs`, forwarding errors of the primitive.
pub fn try_lt<T, U>(lhs: &T, rhs: &U) -> Result<bool, T::Error>
where
    T: TryCompareThreeWay<U> + ?Sized,
    U: ?Sized,
{
    Ok(is_lt(lhs.try_compare_three_way(rhs)?))
}

/// `lhs <= rhs`, forwarding errors of the primitive.
pub fn try_le<T, U>(lhs: &T, rhs: &U) -> Result<bool, T::Error>
where
    T: TryCompareThreeWay<U> + ?Sized,
    U: ?Sized,
{
    Ok(is_lteq(lhs.try_compare_three_way(rhs)?))
}

/// `lhs > rhs`, forwarding errors of the primitive.
pub fn try_gt<T, U>(lhs: &T, rhs: &U) -> Result<bool, T::Error>
where
    T: TryCompareThreeWay<U> + ?Sized,
    U: ?Sized,
{
    Ok(is_gt(lhs.try_compare_three_way(rhs)?))
}

/// `lhs >= rhs`, forwarding errors of the primitive.
pub fn try_ge<T, U>(lhs: &T, rhs: &U) -> Result<bool, T::Error>
where
    T: TryCompareThreeWay<U> + ?Sized,
    U: ?Sized,
{
    Ok(is_gteq(lhs.try_compare_three_way(rhs)?))
}

#[doc(hidden)]
#[macro_export]
macro_rules! __declare_comparison_impls {
    (@eq [$($gen:tt)*] $t:ty, $u:ty) => {
        impl<$($gen)*> ::std::cmp::PartialEq<$u> for $t
        where
            $t: $crate::CompareEq<$u>,
        {
            fn eq(&self, other: &$u) -> bool {
                $crate::helpers::eq(self, other)
            }
        }
    };
    (@eq_reversed [$($gen:tt)*] $t:ty, $u:ty) => {
        impl<$($gen)*> ::std::cmp::PartialEq<$t> for $u
        where
            $t: $crate::CompareEq<$u>,
        {
            fn eq(&self, other: &$t) -> bool {
                $crate::helpers::reversed_eq(self, other)
            }
        }
    };
    (@ord [$($gen:tt)*] $t:ty, $u:ty, $ordering:ty) => {
        impl<$($gen)*> ::std::cmp::PartialOrd<$u> for $t
        where
            $t: $crate::CompareThreeWay<$u, Ordering = $ordering>,
        {
            fn partial_cmp(&self, other: &$u) -> Option<::std::cmp::Ordering> {
                $crate::helpers::partial_cmp(self, other)
            }
            fn lt(&self, other: &$u) -> bool {
                $crate::helpers::lt(self, other)
            }
            fn le(&self, other: &$u) -> bool {
                $crate::helpers::le(self, other)
            }
            fn gt(&self, other: &$u) -> bool {
                $crate::helpers::gt(self, other)
            }
            fn ge(&self, other: &$u) -> bool {
                $crate::helpers::ge(self, other)
            }
        }
    };
    (@ord_reversed [$($gen:tt)*] $t:ty, $u:ty, $ordering:ty) => {
        impl<$($gen)*> ::std::cmp::PartialOrd<$t> for $u
        where
            $t: $crate::CompareThreeWay<$u, Ordering = $ordering>,
        {
            fn partial_cmp(&self, other: &$t) -> Option<::std::cmp::Ordering> {
                $crate::helpers::reversed_partial_cmp(self, other)
            }
            fn lt(&self, other: &$t) -> bool {
                $crate::helpers::reversed_lt(self, other)
            }
            fn le(&self, other: &$t) -> bool {
                $crate::helpers::reversed_le(self, other)
            }
            fn gt(&self, other: &$t) -> bool {
                $crate::helpers::reversed_gt(self, other)
            }
            fn ge(&self, other: &$t) -> bool {
                $crate::helpers::reversed_ge(self, other)
            }
        }
    };
    (@total [$($gen:tt)*] $t:ty, $ordering:ty) => {
        impl<$($gen)*> ::std::cmp::Eq for $t where $t: $crate::CompareThreeWay<Ordering = $ordering> {}

        impl<$($gen)*> ::std::cmp::Ord for $t
        where
            $t: $crate::CompareThreeWay<Ordering = $ordering>,
        {
            fn cmp(&self, other: &$t) -> ::std::cmp::Ordering {
                $crate::helpers::cmp(self, other)
            }
        }
    };

    (@declare_eq [$($gen:tt)*] $t:ty) => {
        $crate::__declare_comparison_impls!(@eq [$($gen)*] $t, $t);
    };
    (@declare_eq [$($gen:tt)*] $t:ty, $u:ty) => {
        $crate::__declare_comparison_impls!(@eq [$($gen)*] $t, $u);
        $crate::__declare_comparison_impls!(@eq_reversed [$($gen)*] $t, $u);
    };
    (@declare_ord [$($gen:tt)*] $ordering:ty; $t:ty) => {
        $crate::__declare_comparison_impls!(@eq [$($gen)*] $t, $t);
        $crate::__declare_comparison_impls!(@ord [$($gen)*] $t, $t, $ordering);
    };
    (@declare_ord [$($gen:tt)*] $ordering:ty; $t:ty, $u:ty) => {
        $crate::__declare_comparison_impls!(@declare_eq [$($gen)*] $t, $u);
        $crate::__declare_comparison_impls!(@ord [$($gen)*] $t, $u, $ordering);
        $crate::__declare_comparison_impls!(@ord_reversed [$($gen)*] $t, $u, $ordering);
    };
    (@declare_total [$($gen:tt)*] $ordering:ty; $t:ty) => {
        $crate::__declare_comparison_impls!(@declare_ord [$($gen)*] $ordering; $t);
        $crate::__declare_comparison_impls!(@total [$($gen)*] $t, $ordering);
    };
    (@declare_total [$($gen:tt)*] $ordering:ty; $t:ty, $u:ty) => {
        $crate::__declare_comparison_impls!(@declare_ord [$($gen)*] $ordering; $t, $u);
    };
}

/// Implements `PartialEq` from `CompareEq`.
///
/// Accepts `T`, `T, U`, and a generic form with the parameters in front:
/// `<S> Wrapper<S>`.
#[macro_export]
macro_rules! declare_equality_comparable {
    (<$($g:ident),+> $($types:ty),+) => {
        $crate::__declare_comparison_impls!(@declare_eq [$($g),+] $($types),+);
    };
    ($($types:ty),+) => {
        $crate::__declare_comparison_impls!(@declare_eq [] $($types),+);
    };
}

/// Implements `PartialEq` and `PartialOrd` from `CompareEq` and a
/// `CompareThreeWay` returning `PartialOrdering`.
///
/// Accepts the same forms as `declare_equality_comparable!`.
#[macro_export]
macro_rules! declare_partially_ordered {
    (<$($g:ident),+> $($types:ty),+) => {
        $crate::__declare_comparison_impls!(
            @declare_ord [$($g),+] $crate::PartialOrdering; $($types),+
        );
    };
    ($($types:ty),+) => {
        $crate::__declare_comparison_impls!(@declare_ord [] $crate::PartialOrdering; $($types),+);
    };
}

/// Implements `PartialEq` and `PartialOrd` from `CompareEq` and a
/// `CompareThreeWay` returning `WeakOrdering`. The one-type form also
/// implements `Eq` and `Ord`.
///
/// Accepts the same forms as `declare_equality_comparable!`.
#[macro_export]
macro_rules! declare_weakly_ordered {
    (<$($g:ident),+> $($types:ty),+) => {
        $crate::__declare_comparison_impls!(
            @declare_total [$($g),+] $crate::WeakOrdering; $($types),+
        );
    };
    ($($types:ty),+) => {
        $crate::__declare_comparison_impls!(@declare_total [] $crate::WeakOrdering; $($types),+);
    };
}

/// Implements `PartialEq` and `PartialOrd` from `CompareEq` and a
/// `CompareThreeWay` returning `StrongOrdering`. The one-type form also
/// implements `Eq` and `Ord`.
///
/// Accepts the same forms as `declare_equality_comparable!`.
#[macro_export]
macro_rules! declare_strongly_ordered {
    (<$($g:ident),+> $($types:ty),+) => {
        $crate::__declare_comparison_impls!(
            @declare_total [$($g),+] $crate::StrongOrdering; $($types),+
        );
    };
    ($($types:ty),+) => {
        $crate::__declare_comparison_impls!(@declare_total [] $crate::StrongOrdering; $($types),+);
    };
}
