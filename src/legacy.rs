use crate::errors::InvalidOrderingTag;
use crate::tag::{unreachable_tag, CompareUnderlyingType, LegacyUncomparable, Order};
use log::debug;
use std::cmp::Ordering;

/// Partial ordering with the representation used before the C++20-compatible
/// types were introduced.
///
/// Same as C++'s `QPartialOrdering`. It has the same four states as
/// `PartialOrdering`, but the unordered state is always stored as `-127`
/// regardless of the C++ standard library, so it is not bit-compatible with
/// `std::partial_ordering`. Use `PartialOrdering` in new code; the two types
/// convert into each other value by value and compare equal when they hold the
/// same state.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct LegacyPartialOrdering(CompareUnderlyingType);

impl LegacyPartialOrdering {
    /// The left operand is less than the right operand.
    pub const LESS: LegacyPartialOrdering = LegacyPartialOrdering(Order::Less.to_underlying());
    /// The operands are equivalent.
    pub const EQUIVALENT: LegacyPartialOrdering =
        LegacyPartialOrdering(Order::EQUIVALENT.to_underlying());
    /// The left operand is greater than the right operand.
    pub const GREATER: LegacyPartialOrdering =
        LegacyPartialOrdering(Order::Greater.to_underlying());
    /// The operands cannot be compared.
    pub const UNORDERED: LegacyPartialOrdering =
        LegacyPartialOrdering(LegacyUncomparable::UNORDERED);

    pub(crate) const fn from_order(order: Order) -> LegacyPartialOrdering {
        LegacyPartialOrdering(order.to_underlying())
    }

    /// Creates a value from its tag.
    pub fn from_raw(
        value: CompareUnderlyingType,
    ) -> Result<LegacyPartialOrdering, InvalidOrderingTag> {
        if value == LegacyUncomparable::UNORDERED || Order::from_underlying(value).is_some() {
            Ok(LegacyPartialOrdering(value))
        } else {
            debug!("rejected LegacyPartialOrdering tag {}", value);
            Err(InvalidOrderingTag {
                category: "LegacyPartialOrdering",
                value,
            })
        }
    }

    /// Creates a value from its tag without checking it.
    ///
    /// # Safety
    ///
    /// `value` must be `-1`, `0`, `1` or `-127`.
    pub unsafe fn from_raw_unchecked(value: CompareUnderlyingType) -> LegacyPartialOrdering {
        debug_assert!(
            LegacyPartialOrdering::from_raw(value).is_ok(),
            "invalid LegacyPartialOrdering tag: {}",
            value
        );
        LegacyPartialOrdering(value)
    }

    /// Returns the ordered state, or `None` for `UNORDERED`.
    pub(crate) fn order(self) -> Option<Order> {
        if self.0 == LegacyUncomparable::UNORDERED {
            return None;
        }
        match Order::from_underlying(self.0) {
            Some(order) => Some(order),
            None => unreachable_tag("LegacyPartialOrdering", self.0),
        }
    }

    /// Result of comparing `self` against zero, or `None` if `self` is unordered.
    pub const fn cmp_zero(self) -> Option<Ordering> {
        if self.0 == LegacyUncomparable::UNORDERED {
            None
        } else if self.0 < 0 {
            Some(Ordering::Less)
        } else if self.0 > 0 {
            Some(Ordering::Greater)
        } else {
            Some(Ordering::Equal)
        }
    }

    /// Returns `false` only for `UNORDERED`.
    pub const fn is_ordered(self) -> bool {
        self.0 != LegacyUncomparable::UNORDERED
    }

    /// Swaps `LESS` and `GREATER`. `EQUIVALENT` and `UNORDERED` are kept.
    pub const fn reverse(self) -> LegacyPartialOrdering {
        if self.0 == LegacyUncomparable::UNORDERED {
            self
        } else {
            LegacyPartialOrdering(-self.0)
        }
    }

    fn constant_name(self) -> &'static str {
        match self.order() {
            Some(Order::Less) => "LESS",
            Some(Order::Equal) => "EQUIVALENT",
            Some(Order::Greater) => "GREATER",
            None => "UNORDERED",
        }
    }
}

ordering_category!(LegacyPartialOrdering, has_unordered = true);
