// crates/domain/src/predicates/comparison.rs
//! Ordering predicates.
//!
//! Comparisons use the value type's own `PartialEq`/`PartialOrd`, so for
//! floats every predicate rejects `NaN`, and a predicate built around a `NaN`
//! bound rejects every value.

use std::fmt;

use super::combinators::{And, Or, and, or};
use super::predicate::Predicate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsEqualTo<T> {
    expected: T,
}

pub const fn is_equal_to<T>(expected: T) -> IsEqualTo<T> {
    IsEqualTo { expected }
}

impl<T> Predicate<T> for IsEqualTo<T>
where
    T: PartialEq + fmt::Display,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        *value == self.expected
    }

    fn description(&self) -> String {
        format!("be equal to {}", self.expected)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsLessThan<T> {
    upper_bound: T,
}

pub const fn is_less_than<T>(upper_bound: T) -> IsLessThan<T> {
    IsLessThan { upper_bound }
}

impl<T> Predicate<T> for IsLessThan<T>
where
    T: PartialOrd + fmt::Display,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        *value < self.upper_bound
    }

    fn description(&self) -> String {
        format!("be less than {}", self.upper_bound)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsGreaterThan<T> {
    lower_bound: T,
}

pub const fn is_greater_than<T>(lower_bound: T) -> IsGreaterThan<T> {
    IsGreaterThan { lower_bound }
}

impl<T> Predicate<T> for IsGreaterThan<T>
where
    T: PartialOrd + fmt::Display,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        *value > self.lower_bound
    }

    fn description(&self) -> String {
        format!("be greater than {}", self.lower_bound)
    }
}

pub type IsLessThanOrEqualTo<T> = Or<IsLessThan<T>, IsEqualTo<T>>;

/// Checks that a value is less than or equal to `upper_bound`.
///
/// ```
/// use tiny_checks_domain::{Predicate, is_less_than_or_equal_to};
///
/// let at_most_fifty = is_less_than_or_equal_to(50.0);
/// assert!(at_most_fifty.test(&50.0));
/// assert!(!at_most_fifty.test(&50.5));
/// assert!(!at_most_fifty.test(&f64::NAN));
/// ```
pub fn is_less_than_or_equal_to<T: Clone>(upper_bound: T) -> IsLessThanOrEqualTo<T> {
    or(is_less_than(upper_bound.clone()), is_equal_to(upper_bound))
}

pub type IsGreaterThanOrEqualTo<T> = Or<IsGreaterThan<T>, IsEqualTo<T>>;

pub fn is_greater_than_or_equal_to<T: Clone>(lower_bound: T) -> IsGreaterThanOrEqualTo<T> {
    or(is_greater_than(lower_bound.clone()), is_equal_to(lower_bound))
}

pub type IsInRange<T> = And<IsGreaterThanOrEqualTo<T>, IsLessThanOrEqualTo<T>>;

/// Inclusive on both ends.
pub fn is_in_range<T: Clone>(lower_bound: T, upper_bound: T) -> IsInRange<T> {
    and(
        is_greater_than_or_equal_to(lower_bound),
        is_less_than_or_equal_to(upper_bound),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn less_than_or_equal_to_boundaries() {
        let p = is_less_than_or_equal_to(10.0);
        assert!(p.test(&10.0));
        assert!(p.test(&9.999999));
        assert!(!p.test(&10.000001));
        assert!(!p.test(&f64::NAN));
    }

    #[test]
    fn less_than_or_equal_to_negative_bound() {
        let p = is_less_than_or_equal_to(-5.0);
        assert!(p.test(&-5.0));
        assert!(p.test(&-6.0));
        assert!(!p.test(&-4.0));
    }

    #[test]
    fn nan_bound_rejects_everything() {
        let p = is_less_than_or_equal_to(f64::NAN);
        for v in [f64::NEG_INFINITY, -1.0, 0.0, 1.0, f64::INFINITY, f64::NAN] {
            assert!(!p.test(&v), "{v} should be rejected");
        }
    }

    #[test]
    fn infinite_bounds() {
        assert!(is_less_than_or_equal_to(f64::INFINITY).test(&f64::MAX));
        assert!(is_less_than_or_equal_to(f64::INFINITY).test(&f64::INFINITY));
        assert!(!is_less_than_or_equal_to(f64::NEG_INFINITY).test(&f64::MIN));
    }

    #[test]
    fn works_for_integers() {
        let p = is_less_than_or_equal_to(3_u8);
        assert!(p.test(&0));
        assert!(p.test(&3));
        assert!(!p.test(&4));
    }

    #[test]
    fn greater_than_or_equal_to_mirrors() {
        let p = is_greater_than_or_equal_to(1.5);
        assert!(p.test(&1.5));
        assert!(p.test(&2.0));
        assert!(!p.test(&1.0));
        assert!(!p.test(&f64::NAN));
    }

    #[test]
    fn range_is_inclusive() {
        let p = is_in_range(1, 5);
        assert!(p.test(&1));
        assert!(p.test(&5));
        assert!(!p.test(&0));
        assert!(!p.test(&6));
    }

    #[test]
    fn descriptions() {
        assert_eq!(is_equal_to(3).description(), "be equal to 3");
        assert_eq!(is_less_than(10.0).description(), "be less than 10");
        assert_eq!(is_greater_than(-2).description(), "be greater than -2");
        assert_eq!(
            is_less_than_or_equal_to(50).description(),
            "either be less than 50 or be equal to 50"
        );
        assert_eq!(
            is_in_range(1, 2).description(),
            "either be greater than 1 or be equal to 1 and either be less than 2 or be equal to 2"
        );
    }
}
