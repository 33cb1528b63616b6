//! Conversions from stronger to weaker categories and equality across categories.
//!
//! `StrongOrdering` converts into `WeakOrdering` and `PartialOrdering`, and
//! `WeakOrdering` converts into `PartialOrdering`. These conversions are total;
//! the only information they lose is the name (`EQUAL` becomes `EQUIVALENT`).
//! There are no conversions in the other direction.
//!
//! `PartialOrdering` and `LegacyPartialOrdering` convert into each other value
//! by value, since their unordered states are stored differently. They compare
//! equal when they hold the same state.

use crate::{LegacyPartialOrdering, PartialOrdering, StrongOrdering, WeakOrdering};

impl From<StrongOrdering> for WeakOrdering {
    fn from(o: StrongOrdering) -> WeakOrdering {
        WeakOrdering::from_order(o.order())
    }
}

impl From<StrongOrdering> for PartialOrdering {
    fn from(o: StrongOrdering) -> PartialOrdering {
        PartialOrdering::from_order(o.order())
    }
}

impl From<WeakOrdering> for PartialOrdering {
    fn from(o: WeakOrdering) -> PartialOrdering {
        PartialOrdering::from_order(o.order())
    }
}

impl From<LegacyPartialOrdering> for PartialOrdering {
    fn from(o: LegacyPartialOrdering) -> PartialOrdering {
        match o.order() {
            Some(order) => PartialOrdering::from_order(order),
            None => PartialOrdering::UNORDERED,
        }
    }
}

impl From<PartialOrdering> for LegacyPartialOrdering {
    fn from(o: PartialOrdering) -> LegacyPartialOrdering {
        match o.order() {
            Some(order) => LegacyPartialOrdering::from_order(order),
            None => LegacyPartialOrdering::UNORDERED,
        }
    }
}

/// Implements `==` in both directions by converting the left-hand type of the
/// arrow into the right-hand one.
macro_rules! widening_eq {
    ($stronger:ty => $weaker:ty) => {
        impl PartialEq<$weaker> for $stronger {
            fn eq(&self, other: &$weaker) -> bool {
                <$weaker>::from(*self) == *other
            }
        }

        impl PartialEq<$stronger> for $weaker {
            fn eq(&self, other: &$stronger) -> bool {
                *self == <$weaker>::from(*other)
            }
        }
    };
}

widening_eq!(StrongOrdering => WeakOrdering);
widening_eq!(StrongOrdering => PartialOrdering);
widening_eq!(WeakOrdering => PartialOrdering);
widening_eq!(LegacyPartialOrdering => PartialOrdering);
