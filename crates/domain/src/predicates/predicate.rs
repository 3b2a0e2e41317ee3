// crates/domain/src/predicates/predicate.rs
use std::fmt;

use super::combinators::{And, Not, Or};

/// A pure test over values of `T` that can also say what it expects.
///
/// Implementations must not have side effects: the same input always gives
/// the same answer, so a predicate can be shared freely once built.
pub trait Predicate<T: ?Sized> {
    fn test(&self, value: &T) -> bool;

    /// Expectation phrased to follow "should", e.g. `be less than 10`.
    fn description(&self) -> String;
}

/// Type-erased predicate, as produced by rule specifications.
pub type BoxedPredicate<'a, T> = Box<dyn Predicate<T> + Send + Sync + 'a>;

impl<T, P> Predicate<T> for &P
where
    T: ?Sized,
    P: Predicate<T> + ?Sized,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        P::test(self, value)
    }

    fn description(&self) -> String {
        P::description(self)
    }
}

impl<T, P> Predicate<T> for Box<P>
where
    T: ?Sized,
    P: Predicate<T> + ?Sized,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        P::test(self, value)
    }

    fn description(&self) -> String {
        P::description(self)
    }
}

/// Method-style composition for every predicate.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    fn or<Q>(self, other: Q) -> Or<Self, Q>
    where
        Q: Predicate<T>,
    {
        Or::new(self, other)
    }

    fn and<Q>(self, other: Q) -> And<Self, Q>
    where
        Q: Predicate<T>,
    {
        And::new(self, other)
    }

    fn negate(self) -> Not<Self> {
        Not::new(self)
    }

    /// Drops the description and keeps only the boolean function.
    fn into_fn(self) -> impl Fn(&T) -> bool {
        move |value: &T| self.test(value)
    }

    fn boxed<'a>(self) -> BoxedPredicate<'a, T>
    where
        Self: Send + Sync + 'a,
    {
        Box::new(self)
    }
}

impl<T, P> PredicateExt<T> for P
where
    T: ?Sized,
    P: Predicate<T>,
{
}

/// Closure paired with a human description.
#[derive(Clone)]
pub struct Described<F> {
    description: String,
    test: F,
}

impl<F> fmt::Debug for Described<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Described")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Turns any `Fn(&T) -> bool` into a [`Predicate`].
pub fn predicate<T, F>(description: impl Into<String>, test: F) -> Described<F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    Described {
        description: description.into(),
        test,
    }
}

impl<T, F> Predicate<T> for Described<F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        (self.test)(value)
    }

    fn description(&self) -> String {
        self.description.clone()
    }
}
