#![allow(clippy::multiple_crate_versions)]

pub mod check;
pub mod predicates;
pub mod rules;

pub use check::check;
pub use predicates::{
    BoxedPredicate, Predicate, PredicateExt, all_of, and, any_of, is_equal_to, is_greater_than,
    is_greater_than_or_equal_to, is_in_range, is_less_than, is_less_than_or_equal_to, is_one_of,
    matches, not, or, predicate,
};
pub use rules::{Rule, RuleSet, RuleSpec};
