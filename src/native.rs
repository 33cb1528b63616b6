//! Interoperability with Rust's own comparison results.
//!
//! `std::cmp::Ordering` plays the role of a native strong (and weak) ordering,
//! and `Option<std::cmp::Ordering>` (the result of `PartialOrd::partial_cmp`)
//! the role of a native partial ordering.
//!
//! `std::cmp::Ordering` is documented to use `-1`, `0` and `1`, so converting
//! `StrongOrdering` and `WeakOrdering` into it is a reinterpretation of the tag.
//! The representation of `Option<Ordering>` is chosen by the compiler: `None`
//! occupies a niche value that may or may not coincide with the unordered tag
//! of the C++ ABI selected at build time. The niche value is read at compile
//! time, and conversions reinterpret the tag only if it matches; otherwise
//! they map values one by one. Both checks are constants, so the unused branch
//! is removed by the compiler.

use crate::tag::{unreachable_tag, CompareUnderlyingType, Order, Uncomparable};
use crate::{LegacyPartialOrdering, PartialOrdering, StrongOrdering, WeakOrdering};
use std::cmp::Ordering;
use std::mem;

const _: () = assert!(mem::size_of::<PartialOrdering>() == 1);
const _: () = assert!(mem::size_of::<WeakOrdering>() == 1);
const _: () = assert!(mem::size_of::<StrongOrdering>() == 1);
const _: () = assert!(mem::size_of::<LegacyPartialOrdering>() == 1);
const _: () = assert!(mem::size_of::<Ordering>() == 1);
const _: () = assert!(mem::size_of::<Option<Ordering>>() == 1);

/// `true` if `std::cmp::Ordering` stores the same tags as `StrongOrdering`
/// and `WeakOrdering`.
pub const ORDERING_IS_BIT_COMPATIBLE: bool = Ordering::Less as i8 == Order::Less.to_underlying()
    && Ordering::Equal as i8 == Order::Equal.to_underlying()
    && Ordering::Greater as i8 == Order::Greater.to_underlying();

/// Bit pattern the compiler uses for `None::<Ordering>`.
pub const NATIVE_NONE_TAG: CompareUnderlyingType =
    unsafe { mem::transmute::<Option<Ordering>, CompareUnderlyingType>(None) };

const fn option_tag(value: Option<Ordering>) -> CompareUnderlyingType {
    unsafe { mem::transmute::<Option<Ordering>, CompareUnderlyingType>(value) }
}

/// Returns `true` if `Option<std::cmp::Ordering>` stores the same tags as a
/// partial ordering whose unordered state is `unordered_tag`.
pub const fn option_ordering_matches(unordered_tag: CompareUnderlyingType) -> bool {
    NATIVE_NONE_TAG == unordered_tag
        && option_tag(Some(Ordering::Less)) == Order::Less.to_underlying()
        && option_tag(Some(Ordering::Equal)) == Order::Equal.to_underlying()
        && option_tag(Some(Ordering::Greater)) == Order::Greater.to_underlying()
}

/// `true` if `Option<std::cmp::Ordering>` stores the same tags as `PartialOrdering`.
pub const OPTION_ORDERING_IS_BIT_COMPATIBLE: bool =
    option_ordering_matches(Uncomparable::UNORDERED);

fn order_to_std(order: Order) -> Ordering {
    match order {
        Order::Less => Ordering::Less,
        Order::Equal => Ordering::Equal,
        Order::Greater => Ordering::Greater,
    }
}

fn order_from_std(ordering: Ordering) -> Order {
    match ordering {
        Ordering::Less => Order::Less,
        Ordering::Equal => Order::Equal,
        Ordering::Greater => Order::Greater,
    }
}

fn tag_to_std(category: &'static str, tag: CompareUnderlyingType) -> Ordering {
    if ORDERING_IS_BIT_COMPATIBLE {
        debug_assert!(Order::from_underlying(tag).is_some());
        // The tag of a total ordering is always -1, 0 or 1.
        unsafe { mem::transmute::<CompareUnderlyingType, Ordering>(tag) }
    } else {
        match Order::from_underlying(tag) {
            Some(order) => order_to_std(order),
            None => unreachable_tag(category, tag),
        }
    }
}

impl From<Ordering> for StrongOrdering {
    fn from(ordering: Ordering) -> StrongOrdering {
        StrongOrdering::from_order(order_from_std(ordering))
    }
}

impl From<StrongOrdering> for Ordering {
    fn from(o: StrongOrdering) -> Ordering {
        tag_to_std("StrongOrdering", o.to_raw())
    }
}

impl From<Ordering> for WeakOrdering {
    fn from(ordering: Ordering) -> WeakOrdering {
        WeakOrdering::from_order(order_from_std(ordering))
    }
}

impl From<WeakOrdering> for Ordering {
    fn from(o: WeakOrdering) -> Ordering {
        tag_to_std("WeakOrdering", o.to_raw())
    }
}

impl From<Ordering> for PartialOrdering {
    fn from(ordering: Ordering) -> PartialOrdering {
        PartialOrdering::from_order(order_from_std(ordering))
    }
}

impl From<Option<Ordering>> for PartialOrdering {
    fn from(ordering: Option<Ordering>) -> PartialOrdering {
        match ordering {
            Some(ordering) => PartialOrdering::from(ordering),
            None => PartialOrdering::UNORDERED,
        }
    }
}

impl From<PartialOrdering> for Option<Ordering> {
    fn from(o: PartialOrdering) -> Option<Ordering> {
        if OPTION_ORDERING_IS_BIT_COMPATIBLE {
            debug_assert!(PartialOrdering::from_raw(o.to_raw()).is_ok());
            // Checked above: all four tags are valid `Option<Ordering>` values.
            unsafe { mem::transmute::<CompareUnderlyingType, Option<Ordering>>(o.to_raw()) }
        } else {
            o.order().map(order_to_std)
        }
    }
}

impl From<Option<Ordering>> for LegacyPartialOrdering {
    fn from(ordering: Option<Ordering>) -> LegacyPartialOrdering {
        match ordering {
            Some(ordering) => LegacyPartialOrdering::from_order(order_from_std(ordering)),
            None => LegacyPartialOrdering::UNORDERED,
        }
    }
}

impl From<LegacyPartialOrdering> for Option<Ordering> {
    fn from(o: LegacyPartialOrdering) -> Option<Ordering> {
        o.order().map(order_to_std)
    }
}

/// Implements `==` in both directions against a native type by converting
/// both operands into `$via`.
macro_rules! native_eq {
    ($ty:ty, $native:ty, via $via:ty) => {
        impl PartialEq<$native> for $ty {
            fn eq(&self, other: &$native) -> bool {
                <$via>::from(*self) == <$via>::from(*other)
            }
        }

        impl PartialEq<$ty> for $native {
            fn eq(&self, other: &$ty) -> bool {
                other == self
            }
        }
    };
}

native_eq!(StrongOrdering, Ordering, via StrongOrdering);
native_eq!(WeakOrdering, Ordering, via WeakOrdering);
native_eq!(PartialOrdering, Ordering, via PartialOrdering);
native_eq!(StrongOrdering, Option<Ordering>, via PartialOrdering);
native_eq!(WeakOrdering, Option<Ordering>, via PartialOrdering);
native_eq!(PartialOrdering, Option<Ordering>, via PartialOrdering);
native_eq!(LegacyPartialOrdering, Option<Ordering>, via LegacyPartialOrdering);
