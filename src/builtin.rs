//! Comparison primitives for built-in types.
//!
//! Integers compare exactly with each other regardless of width and signedness
//! (`-1_i32` is less than `u64::MAX`), and produce `StrongOrdering`.
//! Floating-point numbers produce `PartialOrdering` (`NaN` is unordered with
//! everything, including itself). When an integer is compared with a
//! floating-point number, the integer is converted to the floating-point type
//! first. `char`, `bool` and raw pointers produce `StrongOrdering`; pointers
//! are compared by address.

use crate::helpers::{CompareEq, CompareThreeWay};
use crate::{PartialOrdering, StrongOrdering};

/// Sign and magnitude of an integer, which orders every built-in integer type.
trait WideInt: Copy {
    fn widen(self) -> (bool, u128);
}

macro_rules! wide_int {
    (signed: $($t:ty),*) => {
        $(
            impl WideInt for $t {
                fn widen(self) -> (bool, u128) {
                    (self < 0, (self as i128).unsigned_abs())
                }
            }
        )*
    };
    (unsigned: $($t:ty),*) => {
        $(
            impl WideInt for $t {
                fn widen(self) -> (bool, u128) {
                    (false, self as u128)
                }
            }
        )*
    };
}

wide_int!(signed: i8, i16, i32, i64, i128, isize);
wide_int!(unsigned: u8, u16, u32, u64, u128, usize);

fn compare_ints<L: WideInt, R: WideInt>(lhs: L, rhs: R) -> StrongOrdering {
    let ordering = match (lhs.widen(), rhs.widen()) {
        ((true, _), (false, _)) => std::cmp::Ordering::Less,
        ((false, _), (true, _)) => std::cmp::Ordering::Greater,
        ((false, l), (false, r)) => l.cmp(&r),
        ((true, l), (true, r)) => r.cmp(&l),
    };
    StrongOrdering::from(ordering)
}

macro_rules! int_pairs {
    (@lhs $lhs:ty; $($rhs:ty),*) => {
        $(
            impl CompareEq<$rhs> for $lhs {
                fn compares_equal(&self, other: &$rhs) -> bool {
                    compare_ints(*self, *other).is_eq()
                }
            }

            impl CompareThreeWay<$rhs> for $lhs {
                type Ordering = StrongOrdering;

                fn compare_three_way(&self, other: &$rhs) -> StrongOrdering {
                    compare_ints(*self, *other)
                }
            }
        )*
    };
    ($($lhs:ty),*) => {
        $(
            int_pairs!(@lhs $lhs; i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
        )*
    };
}

int_pairs!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

fn compare_floats(lhs: f64, rhs: f64) -> PartialOrdering {
    PartialOrdering::from(lhs.partial_cmp(&rhs))
}

macro_rules! float_pairs {
    ($(($lhs:ty, $rhs:ty)),*) => {
        $(
            impl CompareEq<$rhs> for $lhs {
                #[allow(clippy::float_cmp)]
                fn compares_equal(&self, other: &$rhs) -> bool {
                    f64::from(*self) == f64::from(*other)
                }
            }

            impl CompareThreeWay<$rhs> for $lhs {
                type Ordering = PartialOrdering;

                fn compare_three_way(&self, other: &$rhs) -> PartialOrdering {
                    compare_floats(f64::from(*self), f64::from(*other))
                }
            }
        )*
    };
}

float_pairs!((f32, f32), (f32, f64), (f64, f32), (f64, f64));

macro_rules! int_float_pairs {
    ($float:ty; $($int:ty),*) => {
        $(
            impl CompareEq<$float> for $int {
                #[allow(clippy::float_cmp)]
                fn compares_equal(&self, other: &$float) -> bool {
                    (*self as $float) == *other
                }
            }

            impl CompareThreeWay<$float> for $int {
                type Ordering = PartialOrdering;

                fn compare_three_way(&self, other: &$float) -> PartialOrdering {
                    PartialOrdering::from((*self as $float).partial_cmp(other))
                }
            }

            impl CompareEq<$int> for $float {
                #[allow(clippy::float_cmp)]
                fn compares_equal(&self, other: &$int) -> bool {
                    *self == (*other as $float)
                }
            }

            impl CompareThreeWay<$int> for $float {
                type Ordering = PartialOrdering;

                fn compare_three_way(&self, other: &$int) -> PartialOrdering {
                    PartialOrdering::from(self.partial_cmp(&(*other as $float)))
                }
            }
        )*
    };
}

int_float_pairs!(f32; i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
int_float_pairs!(f64; i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! total_order {
    ($($t:ty),*) => {
        $(
            impl CompareEq for $t {
                fn compares_equal(&self, other: &$t) -> bool {
                    self == other
                }
            }

            impl CompareThreeWay for $t {
                type Ordering = StrongOrdering;

                fn compare_three_way(&self, other: &$t) -> StrongOrdering {
                    StrongOrdering::from(self.cmp(other))
                }
            }
        )*
    };
}

total_order!(char, bool);

macro_rules! pointer_pairs {
    ($(($lhs:ident, $rhs:ident)),*) => {
        $(
            impl<T> CompareEq<*$rhs T> for *$lhs T {
                fn compares_equal(&self, other: &*$rhs T) -> bool {
                    (*self as *const T) == (*other as *const T)
                }
            }

            impl<T> CompareThreeWay<*$rhs T> for *$lhs T {
                type Ordering = StrongOrdering;

                fn compare_three_way(&self, other: &*$rhs T) -> StrongOrdering {
                    StrongOrdering::from((*self as *const T).cmp(&(*other as *const T)))
                }
            }
        )*
    };
}

pointer_pairs!((const, const), (const, mut), (mut, const), (mut, mut));
