// crates/domain/src/predicates/pattern.rs
use regex::Regex;
use tiny_checks_shared_kernel::{DomainError, DomainResult};

use super::predicate::Predicate;

/// Passes when the string contains a match for the pattern.
#[derive(Debug, Clone)]
pub struct Matches {
    pattern: Regex,
}

impl Matches {
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }
}

/// Compiles `pattern`; anchor it with `^...$` to require a full match.
pub fn matches(pattern: &str) -> DomainResult<Matches> {
    Regex::new(pattern)
        .map(Matches::new)
        .map_err(|e| DomainError::InvalidConfiguration {
            reason: format!("invalid pattern '{pattern}': {e}"),
        })
}

impl From<Regex> for Matches {
    fn from(pattern: Regex) -> Self {
        Self::new(pattern)
    }
}

impl Predicate<str> for Matches {
    fn test(&self, value: &str) -> bool {
        self.pattern.is_match(value)
    }

    fn description(&self) -> String {
        format!("match pattern /{}/", self.pattern.as_str())
    }
}

impl Predicate<String> for Matches {
    fn test(&self, value: &String) -> bool {
        self.pattern.is_match(value)
    }

    fn description(&self) -> String {
        Predicate::<str>::description(self)
    }
}
