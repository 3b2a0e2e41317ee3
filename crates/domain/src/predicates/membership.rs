// crates/domain/src/predicates/membership.rs
use std::fmt;

use super::predicate::Predicate;

/// Passes when the value equals one of the allowed values.
#[derive(Debug, Clone, PartialEq)]
pub struct IsOneOf<T> {
    allowed: Vec<T>,
}

pub fn is_one_of<T>(allowed: impl IntoIterator<Item = T>) -> IsOneOf<T> {
    IsOneOf {
        allowed: allowed.into_iter().collect(),
    }
}

impl<T> Predicate<T> for IsOneOf<T>
where
    T: PartialEq + fmt::Display,
{
    fn test(&self, value: &T) -> bool {
        self.allowed.iter().any(|allowed| allowed == value)
    }

    fn description(&self) -> String {
        let allowed: Vec<String> = self.allowed.iter().map(ToString::to_string).collect();
        format!("be one of {}", allowed.join(", "))
    }
}
