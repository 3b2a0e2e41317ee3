// crates/domain/src/predicates.rs
//! Predicates: pure tests over a value that can describe what they expect.

pub mod combinators;
pub mod comparison;
pub mod membership;
pub mod pattern;
pub mod predicate;

pub use combinators::{AllOf, And, AnyOf, Not, Or, all_of, and, any_of, not, or};
pub use comparison::{
    IsEqualTo, IsGreaterThan, IsGreaterThanOrEqualTo, IsInRange, IsLessThan, IsLessThanOrEqualTo,
    is_equal_to, is_greater_than, is_greater_than_or_equal_to, is_in_range, is_less_than,
    is_less_than_or_equal_to,
};
pub use membership::{IsOneOf, is_one_of};
pub use pattern::{Matches, matches};
pub use predicate::{BoxedPredicate, Described, Predicate, PredicateExt, predicate};
