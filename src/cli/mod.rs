// src/cli/mod.rs
mod args;
mod parsers;

pub use args::Args;
pub use parsers::SubjectArg;

use tiny_checks_domain::{Rule, RuleSet, RuleSpec};
use tiny_checks_shared_kernel::{
    DomainError, ErrorContext, PresentationError, Result, SubjectName,
};

use crate::config;

/// Everything a run needs: the rules and the values to check against them.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub rules: RuleSet,
    pub subjects: Vec<SubjectArg>,
}

/// Turn parsed arguments into a [`Plan`].
///
/// Inline bound flags become rules under `--name`; a rule file, when given,
/// contributes its rules as well.
///
/// # Errors
///
/// Returns `Err` when the rule file cannot be loaded, when `--name` is blank,
/// when there is nothing to check, or when a `--subject` has no rules.
pub fn build_plan(args: &Args) -> Result<Plan> {
    let mut rules = match &args.rules {
        Some(path) => config::load_rules(path)
            .with_context(|| format!("loading rules from '{}'", path.display()))?,
        None => RuleSet::default(),
    };
    let mut subjects = args.subjects.clone();

    if let (Some(name), Some(value)) = (&args.name, args.value) {
        let subject = SubjectName::new(name.as_str())?;
        let inline = inline_specs(args);
        if inline.is_empty() && args.rules.is_none() {
            return Err(PresentationError::NothingToCheck(format!(
                "no bounds given for {subject}; use --lt, --lte, --gt, --gte or --eq"
            ))
            .into());
        }
        rules.rules.extend(inline.into_iter().map(|predicate| Rule {
            name: subject.clone(),
            predicate,
        }));
        subjects.push(SubjectArg {
            name: subject.to_string(),
            value,
        });
    }

    if subjects.is_empty() {
        return Err(PresentationError::NothingToCheck(
            "pass --name/--value with bounds, or --rules with --subject".to_string(),
        )
        .into());
    }

    rules.validate()?;

    let known = rules.subjects();
    if let Some(missing) = subjects
        .iter()
        .find(|subject| !known.iter().any(|name| **name == subject.name.as_str()))
    {
        return Err(DomainError::UnknownSubject {
            name: missing.name.clone(),
        }
        .into());
    }

    Ok(Plan { rules, subjects })
}

fn inline_specs(args: &Args) -> Vec<RuleSpec> {
    let groups: [(&[f64], fn(f64) -> RuleSpec); 5] = [
        (&args.lt, RuleSpec::LessThan),
        (&args.lte, RuleSpec::LessThanOrEqualTo),
        (&args.gt, RuleSpec::GreaterThan),
        (&args.gte, RuleSpec::GreaterThanOrEqualTo),
        (&args.eq, RuleSpec::EqualTo),
    ];
    groups
        .into_iter()
        .flat_map(|(bounds, make)| bounds.iter().copied().map(make))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tiny_checks_shared_kernel::TinyChecksError;

    use super::*;

    #[test]
    fn inline_bounds_become_rules() {
        let args = Args::parse_from([
            "tiny_checks",
            "--name",
            "InvestmentPeriod",
            "--value",
            "42",
            "--lte",
            "50",
            "--gt",
            "0",
        ]);
        let plan = build_plan(&args).expect("plan builds");
        assert_eq!(
            plan.rules.rules.iter().map(|r| r.predicate.clone()).collect::<Vec<_>>(),
            vec![RuleSpec::LessThanOrEqualTo(50.0), RuleSpec::GreaterThan(0.0)]
        );
        assert_eq!(
            plan.subjects,
            vec![SubjectArg {
                name: "InvestmentPeriod".into(),
                value: 42.0
            }]
        );
    }

    #[test]
    fn negative_values_parse() {
        let args = Args::parse_from(["tiny_checks", "--name", "T", "--value", "-6", "--lte", "-5"]);
        assert_eq!(args.value, Some(-6.0));
        assert_eq!(args.lte, vec![-5.0]);
    }

    #[test]
    fn negative_infinity_parses_as_a_separate_argument() {
        let args =
            Args::parse_from(["tiny_checks", "--name", "T", "--value", "-inf", "--lte", "-inf"]);
        assert_eq!(args.value, Some(f64::NEG_INFINITY));
        assert_eq!(args.lte, vec![f64::NEG_INFINITY]);
    }

    #[test]
    fn subjects_without_rules_are_rejected_up_front() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(br#"{ "rules": [ { "name": "Age", "predicate": { "greater_than": 0 } } ] }"#)
            .unwrap();
        let path = file.path().to_str().unwrap();

        let ok = Args::parse_from(["tiny_checks", "--rules", path, "--subject", "Age=3"]);
        assert_eq!(build_plan(&ok).unwrap().subjects.len(), 1);

        let args = Args::parse_from([
            "tiny_checks",
            "--rules",
            path,
            "--subject",
            "Age=3",
            "--subject",
            "Height=2",
        ]);
        match build_plan(&args).unwrap_err() {
            TinyChecksError::Domain(DomainError::UnknownSubject { name }) => {
                assert_eq!(name, "Height");
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn name_without_bounds_is_rejected() {
        let args = Args::parse_from(["tiny_checks", "--name", "Age", "--value", "3"]);
        let err = build_plan(&args).unwrap_err();
        assert!(matches!(
            err,
            TinyChecksError::Presentation(PresentationError::NothingToCheck(_))
        ));
    }

    #[test]
    fn empty_invocation_is_rejected() {
        let args = Args::parse_from(["tiny_checks"]);
        assert!(build_plan(&args).is_err());
    }

    #[test]
    fn value_requires_name() {
        assert!(Args::try_parse_from(["tiny_checks", "--value", "3"]).is_err());
    }

    #[test]
    fn subject_requires_rules() {
        assert!(Args::try_parse_from(["tiny_checks", "--subject", "Age=3"]).is_err());
    }
}
