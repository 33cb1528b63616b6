use crate::errors::InvalidOrderingTag;
use crate::tag::{unreachable_tag, CompareUnderlyingType, Order};
use log::debug;
use std::cmp::Ordering;

/// Result of a comparison in a total order where equal values are
/// substitutable.
///
/// Same as C++'s `Qt::strong_ordering`. `EQUAL` and `EQUIVALENT` are the same
/// value; both names exist so that code can state which property it relies on.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct StrongOrdering(CompareUnderlyingType);

impl StrongOrdering {
    /// The left operand is less than the right operand.
    pub const LESS: StrongOrdering = StrongOrdering(Order::Less.to_underlying());
    /// The operands are equivalent. Same as `EQUAL`.
    pub const EQUIVALENT: StrongOrdering = StrongOrdering(Order::EQUIVALENT.to_underlying());
    /// The operands are equal.
    pub const EQUAL: StrongOrdering = StrongOrdering(Order::Equal.to_underlying());
    /// The left operand is greater than the right operand.
    pub const GREATER: StrongOrdering = StrongOrdering(Order::Greater.to_underlying());

    pub(crate) const fn from_order(order: Order) -> StrongOrdering {
        StrongOrdering(order.to_underlying())
    }

    /// Creates a value from its tag, as received from C++.
    pub fn from_raw(value: CompareUnderlyingType) -> Result<StrongOrdering, InvalidOrderingTag> {
        match Order::from_underlying(value) {
            Some(order) => Ok(StrongOrdering::from_order(order)),
            None => {
                debug!("rejected StrongOrdering tag {}", value);
                Err(InvalidOrderingTag {
                    category: "StrongOrdering",
                    value,
                })
            }
        }
    }

    /// Creates a value from its tag without checking it.
    ///
    /// # Safety
    ///
    /// `value` must be `-1`, `0` or `1`.
    pub unsafe fn from_raw_unchecked(value: CompareUnderlyingType) -> StrongOrdering {
        debug_assert!(
            Order::from_underlying(value).is_some(),
            "invalid StrongOrdering tag: {}",
            value
        );
        StrongOrdering(value)
    }

    pub(crate) fn order(self) -> Order {
        match Order::from_underlying(self.0) {
            Some(order) => order,
            None => unreachable_tag("StrongOrdering", self.0),
        }
    }

    /// Result of comparing `self` against zero. Never `None`.
    pub const fn cmp_zero(self) -> Option<Ordering> {
        if self.0 < 0 {
            Some(Ordering::Less)
        } else if self.0 > 0 {
            Some(Ordering::Greater)
        } else {
            Some(Ordering::Equal)
        }
    }

    /// Always `true`.
    pub const fn is_ordered(self) -> bool {
        true
    }

    /// Swaps `LESS` and `GREATER`.
    pub const fn reverse(self) -> StrongOrdering {
        StrongOrdering(-self.0)
    }

    fn constant_name(self) -> &'static str {
        match self.order() {
            Order::Less => "LESS",
            Order::Equal => "EQUAL",
            Order::Greater => "GREATER",
        }
    }
}

ordering_category!(StrongOrdering, has_unordered = false);
