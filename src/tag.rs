//! Underlying tag values shared by all ordering types.
//!
//! Every ordering type stores a single `i8`. `Less`, `Equal` and `Greater`
//! use the canonical values `-1`, `0` and `1`. The "unordered" state of the
//! partial orderings uses an out-of-band sentinel which differs between the
//! modern and the legacy partial ordering.

use crate::abi::StdLib;
use log::error;

/// Type of the stored tag.
pub type CompareUnderlyingType = i8;

/// Tag values of the ordered states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Order {
    /// Left operand is smaller.
    Less = -1,
    /// Operands are equal (or equivalent).
    Equal = 0,
    /// Left operand is bigger.
    Greater = 1,
}

impl Order {
    /// Alias of `Equal` used by weak and partial orderings.
    pub const EQUIVALENT: Order = Order::Equal;

    /// Returns the stored tag value.
    pub const fn to_underlying(self) -> CompareUnderlyingType {
        self as CompareUnderlyingType
    }

    /// Returns the order represented by `value`, or `None` if `value` is
    /// not one of `-1`, `0`, `1`.
    pub const fn from_underlying(value: CompareUnderlyingType) -> Option<Order> {
        match value {
            -1 => Some(Order::Less),
            0 => Some(Order::Equal),
            1 => Some(Order::Greater),
            _ => None,
        }
    }
}

/// Sentinel of the modern partial ordering.
///
/// The value matches `std::partial_ordering::unordered` of the C++ standard
/// library selected at build time (see `abi::StdLib::CURRENT`).
pub struct Uncomparable;

impl Uncomparable {
    /// Tag of the unordered state.
    pub const UNORDERED: CompareUnderlyingType = StdLib::CURRENT.unordered_tag();
}

/// Sentinel of `LegacyPartialOrdering`. Not tied to any C++ ABI.
pub struct LegacyUncomparable;

impl LegacyUncomparable {
    /// Tag of the unordered state.
    pub const UNORDERED: CompareUnderlyingType = -127;
}

/// Called when a value mapping meets a tag outside of the closed set of a
/// category. Such a tag can only come from an `unsafe` reinterpretation
/// that broke its contract.
#[cold]
#[inline(never)]
pub(crate) fn unreachable_tag(category: &'static str, value: CompareUnderlyingType) -> ! {
    error!("corrupted {} tag: {}", category, value);
    if cfg!(debug_assertions) {
        panic!("corrupted {} tag: {}", category, value);
    } else {
        // The tag domain is closed; only a violated `from_raw_unchecked`
        // contract can get here.
        unsafe { std::hint::unreachable_unchecked() }
    }
}
