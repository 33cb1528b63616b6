use crate::helpers::{
    self, reversed_cmp, reversed_compare_three_way, try_eq, try_ge, try_gt, try_le, try_lt, try_ne,
};
use crate::{
    compare_three_way, declare_equality_comparable, declare_partially_ordered,
    declare_strongly_ordered, declare_weakly_ordered, CompareEq, CompareThreeWay, PartialOrdering,
    StrongOrdering, TryCompareEq, TryCompareThreeWay, WeakOrdering,
};
use itertools::iproduct;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy)]
struct IntWrapper(i32);

impl CompareEq for IntWrapper {
    fn compares_equal(&self, other: &IntWrapper) -> bool {
        self.0 == other.0
    }
}

impl CompareThreeWay for IntWrapper {
    type Ordering = StrongOrdering;

    fn compare_three_way(&self, other: &IntWrapper) -> StrongOrdering {
        compare_three_way(&self.0, &other.0)
    }
}

impl CompareEq<i32> for IntWrapper {
    fn compares_equal(&self, other: &i32) -> bool {
        self.0 == *other
    }
}

impl CompareThreeWay<i32> for IntWrapper {
    type Ordering = StrongOrdering;

    fn compare_three_way(&self, other: &i32) -> StrongOrdering {
        compare_three_way(&self.0, other)
    }
}

declare_strongly_ordered!(IntWrapper);
declare_strongly_ordered!(IntWrapper, i32);

#[derive(Debug, Clone, Copy)]
struct DoubleWrapper(f64);

impl CompareEq for DoubleWrapper {
    fn compares_equal(&self, other: &DoubleWrapper) -> bool {
        compare_three_way(&self.0, &other.0).is_eq()
    }
}

impl CompareThreeWay for DoubleWrapper {
    type Ordering = PartialOrdering;

    fn compare_three_way(&self, other: &DoubleWrapper) -> PartialOrdering {
        compare_three_way(&self.0, &other.0)
    }
}

impl CompareEq<f64> for DoubleWrapper {
    fn compares_equal(&self, other: &f64) -> bool {
        compare_three_way(&self.0, other).is_eq()
    }
}

impl CompareThreeWay<f64> for DoubleWrapper {
    type Ordering = PartialOrdering;

    fn compare_three_way(&self, other: &f64) -> PartialOrdering {
        compare_three_way(&self.0, other)
    }
}

impl CompareEq<IntWrapper> for DoubleWrapper {
    fn compares_equal(&self, other: &IntWrapper) -> bool {
        compare_three_way(&self.0, &other.0).is_eq()
    }
}

impl CompareThreeWay<IntWrapper> for DoubleWrapper {
    type Ordering = PartialOrdering;

    fn compare_three_way(&self, other: &IntWrapper) -> PartialOrdering {
        compare_three_way(&self.0, &other.0)
    }
}

declare_partially_ordered!(DoubleWrapper);
declare_partially_ordered!(DoubleWrapper, f64);
declare_partially_ordered!(DoubleWrapper, IntWrapper);

/// Case-insensitive string.
#[derive(Debug, Clone)]
struct StringWrapper<S>(S);

fn compare_case_insensitive(lhs: &str, rhs: &str) -> WeakOrdering {
    let lhs = lhs.chars().flat_map(char::to_lowercase);
    let rhs = rhs.chars().flat_map(char::to_lowercase);
    WeakOrdering::from(lhs.cmp(rhs))
}

impl<S: AsRef<str>> CompareEq for StringWrapper<S> {
    fn compares_equal(&self, other: &StringWrapper<S>) -> bool {
        compare_case_insensitive(self.0.as_ref(), other.0.as_ref()).is_eq()
    }
}

impl<S: AsRef<str>> CompareThreeWay for StringWrapper<S> {
    type Ordering = WeakOrdering;

    fn compare_three_way(&self, other: &StringWrapper<S>) -> WeakOrdering {
        compare_case_insensitive(self.0.as_ref(), other.0.as_ref())
    }
}

impl<S: AsRef<str>> CompareEq<str> for StringWrapper<S> {
    fn compares_equal(&self, other: &str) -> bool {
        compare_case_insensitive(self.0.as_ref(), other).is_eq()
    }
}

impl<S: AsRef<str>> CompareThreeWay<str> for StringWrapper<S> {
    type Ordering = WeakOrdering;

    fn compare_three_way(&self, other: &str) -> WeakOrdering {
        compare_case_insensitive(self.0.as_ref(), other)
    }
}

declare_weakly_ordered!(<S> StringWrapper<S>);
declare_weakly_ordered!(<S> StringWrapper<S>, str);

/// Comparable only for equality.
#[derive(Debug)]
struct Name(&'static str);

impl CompareEq for Name {
    fn compares_equal(&self, other: &Name) -> bool {
        self.0 == other.0
    }
}

impl CompareEq<&'static str> for Name {
    fn compares_equal(&self, other: &&'static str) -> bool {
        self.0 == *other
    }
}

declare_equality_comparable!(Name);
declare_equality_comparable!(Name, &'static str);

const INTS: [i32; 7] = [i32::MIN, -100, -1, 0, 1, 100, i32::MAX];
const DOUBLES: [f64; 9] = [
    f64::NEG_INFINITY,
    -2147483648.0,
    -1.5,
    -0.0,
    0.0,
    1.0,
    2147483647.0,
    f64::INFINITY,
    f64::NAN,
];

#[test]
fn int_wrapper() {
    let c = |a: i32, b: i32| compare_three_way(&IntWrapper(a), &IntWrapper(b));
    assert_eq!(c(0, 0), StrongOrdering::EQUIVALENT);
    assert_eq!(c(-1, 0), StrongOrdering::LESS);
    assert_eq!(c(1, 0), StrongOrdering::GREATER);
    assert_eq!(c(i32::MAX, i32::MAX), StrongOrdering::EQUIVALENT);
    assert_eq!(c(i32::MAX, i32::MIN), StrongOrdering::GREATER);

    assert!(IntWrapper(1) < IntWrapper(2));
    assert!(IntWrapper(2) >= IntWrapper(2));
    assert!(IntWrapper(3) != IntWrapper(2));
    assert_eq!(IntWrapper(3).cmp(&IntWrapper(2)), Ordering::Greater);
    assert_eq!(IntWrapper(3).max(IntWrapper(7)).0, 7);
}

#[test]
fn int_wrapper_sorts() {
    let mut values = vec![IntWrapper(3), IntWrapper(i32::MIN), IntWrapper(0), IntWrapper(-4)];
    values.sort();
    let sorted: Vec<i32> = values.iter().map(|v| v.0).collect();
    assert_eq!(sorted, vec![i32::MIN, -4, 0, 3]);
}

#[test]
fn int_wrapper_and_int() {
    for (&a, &b) in iproduct!(&INTS, &INTS) {
        let wrapper = IntWrapper(a);
        assert_eq!(wrapper == b, a == b);
        assert_eq!(b == wrapper, a == b);
        assert_eq!(wrapper != b, a != b);
        assert_eq!(b != wrapper, a != b);
        assert_eq!(wrapper < b, a < b);
        assert_eq!(b > wrapper, a < b);
        assert_eq!(wrapper <= b, a <= b);
        assert_eq!(b >= wrapper, a <= b);
        assert_eq!(wrapper > b, a > b);
        assert_eq!(b < wrapper, a > b);
        assert_eq!(wrapper >= b, a >= b);
        assert_eq!(b <= wrapper, a >= b);
        assert_eq!(b.partial_cmp(&wrapper), Some(b.cmp(&a)));
        assert_eq!(reversed_cmp(&b, &wrapper), b.cmp(&a));
    }
}

#[test]
fn double_wrapper() {
    let c = |a: f64, b: f64| compare_three_way(&DoubleWrapper(a), &DoubleWrapper(b));
    assert_eq!(c(0.0, 0.0), PartialOrdering::EQUIVALENT);
    assert_eq!(c(f64::NAN, 0.0), PartialOrdering::UNORDERED);
    assert_eq!(c(0.0, f64::NAN), PartialOrdering::UNORDERED);
    assert_eq!(c(f64::NAN, f64::NAN), PartialOrdering::UNORDERED);
    assert_eq!(c(f64::INFINITY, 0.0), PartialOrdering::GREATER);
    assert_eq!(c(f64::NEG_INFINITY, f64::INFINITY), PartialOrdering::LESS);
    assert_eq!(c(f64::INFINITY, f64::INFINITY), PartialOrdering::EQUIVALENT);

    let nan = DoubleWrapper(f64::NAN);
    assert!(!(nan < nan));
    assert!(!(nan <= nan));
    assert!(!(nan > nan));
    assert!(!(nan >= nan));
    assert!(!(nan == nan));
    assert!(nan != nan);
    assert_eq!(nan.partial_cmp(&nan), None);
}

#[test]
fn double_wrapper_and_double() {
    for (&a, &b) in iproduct!(&DOUBLES, &DOUBLES) {
        let wrapper = DoubleWrapper(a);
        assert_eq!(wrapper == b, a == b);
        assert_eq!(b == wrapper, a == b);
        assert_eq!(wrapper != b, a != b);
        assert_eq!(b != wrapper, a != b);
        assert_eq!(wrapper < b, a < b);
        assert_eq!(b > wrapper, a < b);
        assert_eq!(wrapper <= b, a <= b);
        assert_eq!(b >= wrapper, a <= b);
        assert_eq!(wrapper > b, a > b);
        assert_eq!(b < wrapper, a > b);
        assert_eq!(wrapper >= b, a >= b);
        assert_eq!(b <= wrapper, a >= b);
        assert_eq!(b.partial_cmp(&wrapper), b.partial_cmp(&a));
    }
}

#[test]
fn double_wrapper_and_int_wrapper() {
    for (&d, &i) in iproduct!(&DOUBLES, &INTS) {
        let double = DoubleWrapper(d);
        let int = IntWrapper(i);
        let expected = d.partial_cmp(&f64::from(i));
        assert_eq!(double.partial_cmp(&int), expected);
        assert_eq!(int.partial_cmp(&double), expected.map(Ordering::reverse));
        assert_eq!(double == int, int == double);
        assert_eq!(double != int, int != double);
        assert_eq!(double < int, int > double);
        assert_eq!(double <= int, int >= double);
        assert_eq!(double > int, int < double);
        assert_eq!(double >= int, int <= double);
        if d.is_nan() {
            assert!(!(double < int) && !(int < double));
            assert!(!(double <= int) && !(int <= double));
            assert!(!(double > int) && !(int > double));
            assert!(!(double >= int) && !(int >= double));
            assert!(double != int && int != double);
        }
    }
}

#[test]
fn reversed_results() {
    assert_eq!(
        reversed_compare_three_way(&IntWrapper(1), &DoubleWrapper(f64::NAN)),
        PartialOrdering::UNORDERED
    );
    assert_eq!(
        reversed_compare_three_way(&IntWrapper(1), &DoubleWrapper(0.5)),
        PartialOrdering::GREATER
    );
    assert_eq!(
        reversed_compare_three_way(&5_i32, &IntWrapper(7)),
        StrongOrdering::LESS
    );
}

#[test]
fn string_wrapper() {
    let c = |a: &'static str, b: &'static str| {
        compare_three_way(&StringWrapper(a), &StringWrapper(b))
    };
    assert_eq!(c("ab", "AB"), WeakOrdering::EQUIVALENT);
    assert_eq!(c("Ab", "abc"), WeakOrdering::LESS);
    assert_eq!(c("aBc", "AB"), WeakOrdering::GREATER);

    assert!(StringWrapper("ab") == StringWrapper("AB"));
    assert!(StringWrapper("Ab") < StringWrapper("abc"));
    assert!(StringWrapper("aBc") > StringWrapper("AB"));
    assert_eq!(
        StringWrapper(String::from("x")).cmp(&StringWrapper(String::from("X"))),
        Ordering::Equal
    );
}

#[test]
fn string_wrapper_and_str() {
    let wrapper = StringWrapper("Hello");
    assert!(helpers::eq(&wrapper, "hELLO"));
    assert!(helpers::lt(&wrapper, "help"));
    assert!(helpers::reversed_gt("help", &wrapper));
    assert!(helpers::reversed_eq("HELLO", &wrapper));
    assert!(wrapper == *"hello");
    assert!(*"hello" == wrapper);
    assert!(wrapper < *"help");
    assert!(*"help" > wrapper);
    assert!(*"HELL" < wrapper);
}

#[test]
fn string_wrapper_sorts() {
    let mut values = vec![
        StringWrapper("banana"),
        StringWrapper("Apple"),
        StringWrapper("cherry"),
        StringWrapper("apricot"),
    ];
    values.sort();
    let sorted: Vec<&str> = values.iter().map(|v| v.0).collect();
    assert_eq!(sorted, vec!["Apple", "apricot", "banana", "cherry"]);
}

#[test]
fn equality_only() {
    assert!(Name("a") == Name("a"));
    assert!(Name("a") != Name("b"));
    assert!(Name("a") == "a");
    assert!("b" == Name("b"));
    assert!("b" != Name("a"));
}

#[derive(Debug)]
struct Exploding;

impl CompareEq for Exploding {
    fn compares_equal(&self, _other: &Exploding) -> bool {
        panic!("compares_equal failed")
    }
}

impl CompareThreeWay for Exploding {
    type Ordering = PartialOrdering;

    fn compare_three_way(&self, _other: &Exploding) -> PartialOrdering {
        panic!("compare_three_way failed")
    }
}

declare_partially_ordered!(Exploding);

#[test]
#[should_panic(expected = "compares_equal failed")]
fn panic_in_equality_propagates() {
    let _ = Exploding == Exploding;
}

#[test]
#[should_panic(expected = "compare_three_way failed")]
fn panic_in_ordering_propagates() {
    let _ = Exploding < Exploding;
}

#[test]
#[should_panic(expected = "compare_three_way failed")]
fn panic_in_partial_cmp_propagates() {
    let _ = Exploding.partial_cmp(&Exploding);
}

#[derive(Debug, PartialEq)]
struct MissingValue;

/// Integer that may be absent; comparing an absent value fails.
struct Fallible(Option<i32>);

impl Fallible {
    fn values(&self, other: &Fallible) -> Result<(i32, i32), MissingValue> {
        match (self.0, other.0) {
            (Some(a), Some(b)) => Ok((a, b)),
            _ => Err(MissingValue),
        }
    }
}

impl TryCompareEq for Fallible {
    type Error = MissingValue;

    fn try_compares_equal(&self, other: &Fallible) -> Result<bool, MissingValue> {
        let (a, b) = self.values(other)?;
        Ok(a == b)
    }
}

impl TryCompareThreeWay for Fallible {
    type Ordering = StrongOrdering;

    fn try_compare_three_way(&self, other: &Fallible) -> Result<StrongOrdering, MissingValue> {
        let (a, b) = self.values(other)?;
        Ok(compare_three_way(&a, &b))
    }
}

#[test]
fn fallible_primitives() {
    let one = Fallible(Some(1));
    let two = Fallible(Some(2));
    assert_eq!(try_eq(&one, &two), Ok(false));
    assert_eq!(try_ne(&one, &two), Ok(true));
    assert_eq!(try_lt(&one, &two), Ok(true));
    assert_eq!(try_le(&two, &two), Ok(true));
    assert_eq!(try_gt(&one, &two), Ok(false));
    assert_eq!(try_ge(&two, &one), Ok(true));
}

#[test]
fn fallible_errors_propagate() {
    let one = Fallible(Some(1));
    let missing = Fallible(None);
    assert_eq!(try_eq(&one, &missing), Err(MissingValue));
    assert_eq!(try_ne(&missing, &one), Err(MissingValue));
    assert_eq!(try_lt(&one, &missing), Err(MissingValue));
    assert_eq!(try_le(&missing, &missing), Err(MissingValue));
    assert_eq!(try_gt(&missing, &one), Err(MissingValue));
    assert_eq!(try_ge(&one, &missing), Err(MissingValue));
}

#[test]
fn infallible_primitives_through_try_functions() {
    assert_eq!(try_lt(&IntWrapper(1), &IntWrapper(2)), Ok(true));
    assert_eq!(try_eq(&IntWrapper(1), &1_i32), Ok(true));
    assert_eq!(
        try_ge(&DoubleWrapper(f64::NAN), &DoubleWrapper(0.0)),
        Ok(false)
    );
    assert_eq!(try_ne(&1_u8, &2_i64), Ok(true));
}
