// src/app.rs
use log::info;
use tiny_checks_shared_kernel::{DomainError, Result, TinyChecksError};

use crate::cli::Plan;

/// Result of checking one subject.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Passed { name: String, value: f64 },
    Failed { name: String, value: f64, reason: DomainError },
}

impl Verdict {
    pub fn passed(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Report {
    pub verdicts: Vec<Verdict>,
}

impl Report {
    pub fn all_passed(&self) -> bool {
        self.verdicts.iter().all(Verdict::passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &Verdict> {
        self.verdicts.iter().filter(|v| !v.passed())
    }
}

/// Check every subject in the plan.
///
/// Failed checks are collected into the report; anything else (unknown
/// subjects, invalid rules) aborts the run.
///
/// # Errors
///
/// Returns `Err` for configuration problems, never for a failed check.
pub fn run(plan: &Plan) -> Result<Report> {
    let mut report = Report::default();

    for subject in &plan.subjects {
        let verdict = match plan.rules.check(&subject.name, subject.value) {
            Ok(value) => Verdict::Passed {
                name: subject.name.clone(),
                value,
            },
            Err(reason @ DomainError::CheckFailed { .. }) => Verdict::Failed {
                name: subject.name.clone(),
                value: subject.value,
                reason,
            },
            Err(other) => return Err(TinyChecksError::from(other)),
        };
        report.verdicts.push(verdict);
    }

    info!(
        "checked {} subject(s), {} failed",
        report.verdicts.len(),
        report.failures().count()
    );
    Ok(report)
}
