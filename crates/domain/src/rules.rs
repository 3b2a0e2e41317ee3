// crates/domain/src/rules.rs
//! Serializable rule specifications for numeric checks.
//!
//! A [`RuleSet`] is what a configuration file deserializes into: a list of
//! named rules, each carrying a [`RuleSpec`] tree that builds into a boxed
//! predicate over `f64`.

use std::cmp::Ordering;

use log::debug;
use serde::{Deserialize, Serialize};
use tiny_checks_shared_kernel::{DomainError, DomainResult, SubjectName};

use crate::check::check;
use crate::predicates::{
    BoxedPredicate, Predicate, PredicateExt, all_of, any_of, is_equal_to, is_greater_than,
    is_greater_than_or_equal_to, is_in_range, is_less_than, is_less_than_or_equal_to, is_one_of,
    not,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSpec {
    EqualTo(f64),
    LessThan(f64),
    GreaterThan(f64),
    LessThanOrEqualTo(f64),
    GreaterThanOrEqualTo(f64),
    InRange { min: f64, max: f64 },
    OneOf(Vec<f64>),
    Not(Box<RuleSpec>),
    AnyOf(Vec<RuleSpec>),
    AllOf(Vec<RuleSpec>),
}

impl RuleSpec {
    /// Builds the predicate; `subject` only labels errors.
    pub fn build(&self, subject: &SubjectName) -> DomainResult<BoxedPredicate<'static, f64>> {
        let invalid = |reason: &str| DomainError::InvalidRule {
            name: subject.to_string(),
            reason: reason.to_string(),
        };

        let predicate: BoxedPredicate<'static, f64> = match self {
            Self::EqualTo(x) => is_equal_to(*x).boxed(),
            Self::LessThan(x) => is_less_than(*x).boxed(),
            Self::GreaterThan(x) => is_greater_than(*x).boxed(),
            Self::LessThanOrEqualTo(x) => is_less_than_or_equal_to(*x).boxed(),
            Self::GreaterThanOrEqualTo(x) => is_greater_than_or_equal_to(*x).boxed(),
            Self::InRange { min, max } => {
                // NaN on either end compares as `None`.
                match min.partial_cmp(max) {
                    Some(Ordering::Less | Ordering::Equal) => is_in_range(*min, *max).boxed(),
                    _ => return Err(invalid(&format!("range {min}..={max} is empty"))),
                }
            }
            Self::OneOf(values) => {
                if values.is_empty() {
                    return Err(invalid("one_of needs at least one value"));
                }
                is_one_of(values.iter().copied()).boxed()
            }
            Self::Not(inner) => not(inner.build(subject)?).boxed(),
            Self::AnyOf(members) => {
                if members.is_empty() {
                    return Err(invalid("any_of needs at least one rule"));
                }
                any_of(Self::build_all(members, subject)?).boxed()
            }
            Self::AllOf(members) => {
                if members.is_empty() {
                    return Err(invalid("all_of needs at least one rule"));
                }
                all_of(Self::build_all(members, subject)?).boxed()
            }
        };
        Ok(predicate)
    }

    fn build_all(
        members: &[RuleSpec],
        subject: &SubjectName,
    ) -> DomainResult<Vec<BoxedPredicate<'static, f64>>> {
        members.iter().map(|m| m.build(subject)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub name: SubjectName,
    pub predicate: RuleSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Builds every rule once so configuration mistakes surface before any check runs.
    pub fn validate(&self) -> DomainResult<()> {
        for rule in &self.rules {
            rule.predicate.build(&rule.name)?;
        }
        debug!("validated {} rule(s)", self.rules.len());
        Ok(())
    }

    /// Distinct subject names, in first-seen order.
    pub fn subjects(&self) -> Vec<&SubjectName> {
        let mut seen: Vec<&SubjectName> = Vec::new();
        for rule in &self.rules {
            if !seen.contains(&&rule.name) {
                seen.push(&rule.name);
            }
        }
        seen
    }

    /// Runs every rule registered under `name` against `value`.
    pub fn check(&self, name: &str, value: f64) -> DomainResult<f64> {
        let predicates = self
            .rules
            .iter()
            .filter(|rule| rule.name == name)
            .map(|rule| rule.predicate.build(&rule.name))
            .collect::<DomainResult<Vec<_>>>()?;

        if predicates.is_empty() {
            return Err(DomainError::UnknownSubject {
                name: name.to_string(),
            });
        }

        let refs: Vec<&dyn Predicate<f64>> = predicates
            .iter()
            .map(|p| p.as_ref() as &dyn Predicate<f64>)
            .collect();
        check(name, &value, &refs).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> SubjectName {
        SubjectName::new(s).unwrap()
    }

    #[test]
    fn builds_less_than_or_equal_to() {
        let p = RuleSpec::LessThanOrEqualTo(50.0).build(&name("Period")).unwrap();
        assert!(p.test(&50.0));
        assert!(!p.test(&51.0));
        assert_eq!(p.description(), "either be less than 50 or be equal to 50");
    }

    #[test]
    fn nested_specs() {
        let spec = RuleSpec::AnyOf(vec![
            RuleSpec::LessThan(0.0),
            RuleSpec::Not(Box::new(RuleSpec::InRange { min: 0.0, max: 10.0 })),
        ]);
        let p = spec.build(&name("Offset")).unwrap();
        assert!(p.test(&-1.0));
        assert!(p.test(&11.0));
        assert!(!p.test(&5.0));
    }

    #[test]
    fn single_point_range_is_allowed() {
        let p = RuleSpec::InRange { min: 3.0, max: 3.0 }.build(&name("Pin")).unwrap();
        assert!(p.test(&3.0));
        assert!(!p.test(&3.5));
    }

    #[test]
    fn rejects_degenerate_specs() {
        for spec in [
            RuleSpec::AnyOf(vec![]),
            RuleSpec::AllOf(vec![]),
            RuleSpec::OneOf(vec![]),
            RuleSpec::InRange { min: 2.0, max: 1.0 },
            RuleSpec::InRange { min: f64::NAN, max: 1.0 },
            RuleSpec::InRange { min: 0.0, max: f64::NAN },
        ] {
            assert!(
                matches!(spec.build(&name("X")), Err(DomainError::InvalidRule { .. })),
                "{spec:?} should be rejected"
            );
        }
    }

    #[test]
    fn rule_set_checks_by_name() {
        let rules = RuleSet::new(vec![
            Rule {
                name: name("Age"),
                predicate: RuleSpec::GreaterThanOrEqualTo(0.0),
            },
            Rule {
                name: name("Age"),
                predicate: RuleSpec::LessThanOrEqualTo(150.0),
            },
        ]);

        assert_eq!(rules.check("Age", 30.0), Ok(30.0));
        assert_eq!(
            rules.check("Age", 200.0),
            Err(DomainError::CheckFailed {
                name: "Age".into(),
                expectation: "either be less than 150 or be equal to 150".into(),
            })
        );
        assert_eq!(
            rules.check("Height", 1.0),
            Err(DomainError::UnknownSubject { name: "Height".into() })
        );
        assert_eq!(rules.subjects(), vec![&name("Age")]);
    }
}
