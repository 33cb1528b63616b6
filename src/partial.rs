use crate::errors::InvalidOrderingTag;
use crate::tag::{unreachable_tag, CompareUnderlyingType, Order, Uncomparable};
use log::debug;
use std::cmp::Ordering;

/// Result of a comparison that may find its operands incomparable.
///
/// Same as C++'s `Qt::partial_ordering`. The representation is bit-compatible
/// with `std::partial_ordering` of the C++ standard library selected at build
/// time, so values can be passed to and from C++ as is.
///
/// All comparisons of `UNORDERED` against zero are `false`:
///
/// ```
/// use qt_compare::PartialOrdering;
///
/// let nan = f64::NAN;
/// let result = qt_compare::compare_three_way(&nan, &1.0_f64);
/// assert_eq!(result, PartialOrdering::UNORDERED);
/// assert!(!result.is_lt() && !result.is_eq() && !result.is_ne());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct PartialOrdering(CompareUnderlyingType);

impl PartialOrdering {
    /// The left operand is less than the right operand.
    pub const LESS: PartialOrdering = PartialOrdering(Order::Less.to_underlying());
    /// The operands are equivalent.
    pub const EQUIVALENT: PartialOrdering = PartialOrdering(Order::EQUIVALENT.to_underlying());
    /// The left operand is greater than the right operand.
    pub const GREATER: PartialOrdering = PartialOrdering(Order::Greater.to_underlying());
    /// The operands cannot be compared.
    pub const UNORDERED: PartialOrdering = PartialOrdering(Uncomparable::UNORDERED);

    pub(crate) const fn from_order(order: Order) -> PartialOrdering {
        PartialOrdering(order.to_underlying())
    }

    /// Creates a value from its tag, as received from C++.
    pub fn from_raw(value: CompareUnderlyingType) -> Result<PartialOrdering, InvalidOrderingTag> {
        if value == Uncomparable::UNORDERED || Order::from_underlying(value).is_some() {
            Ok(PartialOrdering(value))
        } else {
            debug!("rejected PartialOrdering tag {}", value);
            Err(InvalidOrderingTag {
                category: "PartialOrdering",
                value,
            })
        }
    }

    /// Creates a value from its tag without checking it.
    ///
    /// # Safety
    ///
    /// `value` must be the tag of one of the four constants. Other values
    /// make later conversions undefined behavior.
    pub unsafe fn from_raw_unchecked(value: CompareUnderlyingType) -> PartialOrdering {
        debug_assert!(
            PartialOrdering::from_raw(value).is_ok(),
            "invalid PartialOrdering tag: {}",
            value
        );
        PartialOrdering(value)
    }

    /// Returns the ordered state, or `None` for `UNORDERED`.
    pub(crate) fn order(self) -> Option<Order> {
        if self.0 == Uncomparable::UNORDERED {
            return None;
        }
        match Order::from_underlying(self.0) {
            Some(order) => Some(order),
            None => unreachable_tag("PartialOrdering", self.0),
        }
    }

    /// Result of comparing `self` against zero, or `None` if `self` is unordered.
    pub const fn cmp_zero(self) -> Option<Ordering> {
        if self.0 == Uncomparable::UNORDERED {
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
        self.0 != Uncomparable::UNORDERED
    }

    /// Swaps `LESS` and `GREATER`. `EQUIVALENT` and `UNORDERED` are kept.
    pub const fn reverse(self) -> PartialOrdering {
        match Order::from_underlying(self.0) {
            Some(Order::Less) => PartialOrdering::GREATER,
            Some(Order::Greater) => PartialOrdering::LESS,
            _ => self,
        }
    }

    fn constant_name(self) -> &'static str {
        match self.0 {
            value if value == Uncomparable::UNORDERED => "UNORDERED",
            -1 => "LESS",
            0 => "EQUIVALENT",
            1 => "GREATER",
            value => unreachable_tag("PartialOrdering", value),
        }
    }
}

ordering_category!(PartialOrdering, has_unordered = true);
