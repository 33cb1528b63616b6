use crate::errors::InvalidOrderingTag;
use crate::tag::{unreachable_tag, CompareUnderlyingType, Order};
use log::debug;
use std::cmp::Ordering;

/// Result of a comparison in a total order where equivalent values may still be
/// distinguishable, e.g. a case-insensitive string comparison.
///
/// Same as C++'s `Qt::weak_ordering`. There is no unordered state.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct WeakOrdering(CompareUnderlyingType);

impl WeakOrdering {
    /// The left operand is less than the right operand.
    pub const LESS: WeakOrdering = WeakOrdering(Order::Less.to_underlying());
    /// The operands are equivalent.
    pub const EQUIVALENT: WeakOrdering = WeakOrdering(Order::EQUIVALENT.to_underlying());
    /// The left operand is greater than the right operand.
    pub const GREATER: WeakOrdering = WeakOrdering(Order::Greater.to_underlying());

    pub(crate) const fn from_order(order: Order) -> WeakOrdering {
        WeakOrdering(order.to_underlying())
    }

    /// Creates a value from its tag, as received from C++.
    pub fn from_raw(value: CompareUnderlyingType) -> Result<WeakOrdering, InvalidOrderingTag> {
        match Order::from_underlying(value) {
            Some(order) => Ok(WeakOrdering::from_order(order)),
            None => {
                debug!("rejected WeakOrdering tag {}", value);
                Err(InvalidOrderingTag {
                    category: "WeakOrdering",
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
    pub unsafe fn from_raw_unchecked(value: CompareUnderlyingType) -> WeakOrdering {
        debug_assert!(
            Order::from_underlying(value).is_some(),
            "invalid WeakOrdering tag: {}",
            value
        );
        WeakOrdering(value)
    }

    pub(crate) fn order(self) -> Order {
        match Order::from_underlying(self.0) {
            Some(order) => order,
            None => unreachable_tag("WeakOrdering", self.0),
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
    pub const fn reverse(self) -> WeakOrdering {
        WeakOrdering(-self.0)
    }

    fn constant_name(self) -> &'static str {
        match self.order() {
            Order::Less => "LESS",
            Order::Equal => "EQUIVALENT",
            Order::Greater => "GREATER",
        }
    }
}

ordering_category!(WeakOrdering, has_unordered = false);
