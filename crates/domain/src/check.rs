// crates/domain/src/check.rs
use std::fmt;

use log::{debug, trace};
use tiny_checks_shared_kernel::{DomainError, DomainResult, SubjectName};

use crate::predicates::Predicate;

/// Checks a named value against `predicates`, in order.
///
/// Returns the value back on success so the call can sit inside a
/// constructor. The first failing predicate becomes the error, rendered as
/// `<name> should <description>`.
///
/// ```
/// use tiny_checks_domain::{check, is_less_than_or_equal_to};
///
/// let err = check("InvestmentPeriod", &60.0, &[&is_less_than_or_equal_to(50.0)]).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "InvestmentPeriod should either be less than 50 or be equal to 50"
/// );
/// ```
pub fn check<'v, T>(
    name: &str,
    value: &'v T,
    predicates: &[&dyn Predicate<T>],
) -> DomainResult<&'v T>
where
    T: ?Sized + fmt::Debug,
{
    let name = SubjectName::new(name)?;

    for predicate in predicates {
        if !predicate.test(value) {
            let expectation = predicate.description();
            debug!("check failed: {name} = {value:?} should {expectation}");
            return Err(DomainError::CheckFailed {
                name: name.into(),
                expectation,
            });
        }
    }

    trace!("check passed: {name} = {value:?}");
    Ok(value)
}
