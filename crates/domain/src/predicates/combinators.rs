// crates/domain/src/predicates/combinators.rs
use super::predicate::Predicate;

/// Logical disjunction of two predicates. `right` is only consulted when `left` fails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Or<P, Q> {
    left: P,
    right: Q,
}

impl<P, Q> Or<P, Q> {
    pub const fn new(left: P, right: Q) -> Self {
        Self { left, right }
    }
}

pub const fn or<P, Q>(left: P, right: Q) -> Or<P, Q> {
    Or::new(left, right)
}

impl<T, P, Q> Predicate<T> for Or<P, Q>
where
    T: ?Sized,
    P: Predicate<T>,
    Q: Predicate<T>,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.left.test(value) || self.right.test(value)
    }

    fn description(&self) -> String {
        format!(
            "either {} or {}",
            Predicate::<T>::description(&self.left),
            Predicate::<T>::description(&self.right)
        )
    }
}

/// Logical conjunction of two predicates. `right` is only consulted when `left` passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct And<P, Q> {
    left: P,
    right: Q,
}

impl<P, Q> And<P, Q> {
    pub const fn new(left: P, right: Q) -> Self {
        Self { left, right }
    }
}

pub const fn and<P, Q>(left: P, right: Q) -> And<P, Q> {
    And::new(left, right)
}

impl<T, P, Q> Predicate<T> for And<P, Q>
where
    T: ?Sized,
    P: Predicate<T>,
    Q: Predicate<T>,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.left.test(value) && self.right.test(value)
    }

    fn description(&self) -> String {
        format!(
            "{} and {}",
            Predicate::<T>::description(&self.left),
            Predicate::<T>::description(&self.right)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Not<P> {
    inner: P,
}

impl<P> Not<P> {
    pub const fn new(inner: P) -> Self {
        Self { inner }
    }
}

pub const fn not<P>(inner: P) -> Not<P> {
    Not::new(inner)
}

impl<T, P> Predicate<T> for Not<P>
where
    T: ?Sized,
    P: Predicate<T>,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        !self.inner.test(value)
    }

    fn description(&self) -> String {
        format!("not {}", Predicate::<T>::description(&self.inner))
    }
}

/// Passes when at least one member passes; an empty list never passes.
#[derive(Debug, Clone, PartialEq)]
pub struct AnyOf<P> {
    members: Vec<P>,
}

pub fn any_of<P>(members: impl IntoIterator<Item = P>) -> AnyOf<P> {
    AnyOf {
        members: members.into_iter().collect(),
    }
}

impl<T, P> Predicate<T> for AnyOf<P>
where
    T: ?Sized,
    P: Predicate<T>,
{
    fn test(&self, value: &T) -> bool {
        self.members.iter().any(|p| p.test(value))
    }

    fn description(&self) -> String {
        match self.members.as_slice() {
            [] => "match at least one of no alternatives".to_string(),
            [only] => Predicate::<T>::description(only),
            members => {
                let parts: Vec<String> =
                    members.iter().map(Predicate::<T>::description).collect();
                format!("either {}", parts.join(", or "))
            }
        }
    }
}

/// Passes when every member passes; an empty list always passes.
#[derive(Debug, Clone, PartialEq)]
pub struct AllOf<P> {
    members: Vec<P>,
}

pub fn all_of<P>(members: impl IntoIterator<Item = P>) -> AllOf<P> {
    AllOf {
        members: members.into_iter().collect(),
    }
}

impl<T, P> Predicate<T> for AllOf<P>
where
    T: ?Sized,
    P: Predicate<T>,
{
    fn test(&self, value: &T) -> bool {
        self.members.iter().all(|p| p.test(value))
    }

    fn description(&self) -> String {
        if self.members.is_empty() {
            return "be anything".to_string();
        }
        let parts: Vec<String> = self.members.iter().map(Predicate::<T>::description).collect();
        parts.join(" and ")
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::predicates::{PredicateExt, is_equal_to, is_greater_than, is_less_than, predicate};

    #[test]
    fn or_short_circuits_on_first_success() {
        let calls = Cell::new(0);
        let counted = predicate("be counted", |_: &i32| {
            calls.set(calls.get() + 1);
            false
        });
        let p = or(is_less_than(10), &counted);

        assert!(p.test(&3));
        assert_eq!(calls.get(), 0);

        assert!(!p.test(&30));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn and_short_circuits_on_first_failure() {
        let calls = Cell::new(0);
        let counted = predicate("be counted", |_: &i32| {
            calls.set(calls.get() + 1);
            true
        });
        let p = and(is_greater_than(0), &counted);

        assert!(!p.test(&-1));
        assert_eq!(calls.get(), 0);
        assert!(p.test(&1));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn descriptions_compose() {
        assert_eq!(
            or(is_less_than(5), is_equal_to(5)).description(),
            "either be less than 5 or be equal to 5"
        );
        assert_eq!(
            and(is_greater_than(1), is_less_than(9)).description(),
            "be greater than 1 and be less than 9"
        );
        assert_eq!(not(is_equal_to(0)).description(), "not be equal to 0");
    }

    #[test]
    fn not_inverts() {
        let p = is_equal_to(0).negate();
        assert!(p.test(&1));
        assert!(!p.test(&0));
    }

    #[test]
    fn n_ary_edges() {
        let none = any_of(Vec::<crate::predicates::IsEqualTo<i32>>::new());
        assert!(!none.test(&1));
        let everything = all_of(Vec::<crate::predicates::IsEqualTo<i32>>::new());
        assert!(everything.test(&1));
        assert_eq!(everything.description(), "be anything");
    }

    #[test]
    fn any_of_lists_alternatives() {
        let p = any_of([is_equal_to(1), is_equal_to(2), is_equal_to(3)]);
        assert!(p.test(&2));
        assert!(!p.test(&4));
        assert_eq!(
            p.description(),
            "either be equal to 1, or be equal to 2, or be equal to 3"
        );
        assert_eq!(any_of([is_equal_to(1)]).description(), "be equal to 1");
    }
}
