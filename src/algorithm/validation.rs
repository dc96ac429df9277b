//! Opt-in snapshot validation
//!
//! Resolution tolerates malformed snapshots by silently dropping whatever
//! it cannot resolve. Callers who would rather reject bad data up front
//! run this pass first, either collecting every issue or failing on the
//! first one (the builder's `validate` flag).

use log::warn;

use crate::error::{ResolveError, Result};
use crate::models::Population;

/// Collect every validation issue in `population`: ids supplied more than
/// once, and parent/child references that resolve to nobody
#[must_use]
pub fn collect_issues(population: &Population) -> Vec<ResolveError> {
    let mut issues: Vec<ResolveError> = population
        .duplicate_ids()
        .iter()
        .map(|&id| ResolveError::DuplicateId(id))
        .collect();

    for person in population.people() {
        for &referenced in person.parents.iter().chain(person.children.iter()) {
            if population.get(referenced).is_none() {
                issues.push(ResolveError::DanglingReference {
                    referrer: person.id,
                    missing: referenced,
                });
            }
        }
    }

    for issue in &issues {
        warn!("population validation: {issue}");
    }
    issues
}

/// Fail on the first validation issue in `population`
pub fn ensure_valid(population: &Population) -> Result<()> {
    match collect_issues(population).into_iter().next() {
        Some(issue) => Err(issue),
        None => Ok(()),
    }
}
