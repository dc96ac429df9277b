//! Relationship queries over a flat pool of people
//!
//! Pure predicates and lookups used by every later resolution stage. All
//! queries take an explicit pool so they can be scoped to a slice of the
//! population (a single generation, the not-yet-placed remainder) rather
//! than the whole snapshot. Results always follow pool iteration order,
//! and referenced ids absent from the pool are silently dropped.

use std::sync::Arc;

use itertools::Itertools;
use rustc_hash::FxHashSet;

use crate::models::{Person, PersonId};

/// Find all people in `pool` who are parents of `descendant`.
///
/// Result order follows `pool` order, not the order of the descendant's
/// parent list. Parent ids with no match in the pool are dropped.
#[must_use]
pub fn find_parents(pool: &[Arc<Person>], descendant: &Person) -> Vec<Arc<Person>> {
    if descendant.parents.is_empty() {
        return Vec::new();
    }
    let wanted: FxHashSet<PersonId> = descendant.parents.iter().copied().collect();
    pool.iter()
        .filter(|person| wanted.contains(&person.id))
        .cloned()
        .collect()
}

/// Check if `person` has no resolvable parents in `pool`
#[must_use]
pub fn is_orphan(pool: &[Arc<Person>], person: &Person) -> bool {
    !pool.iter().any(|candidate| person.lists_parent(candidate.id))
}

/// Find all people in `pool` with no resolvable parents in `pool`
#[must_use]
pub fn find_orphans(pool: &[Arc<Person>]) -> Vec<Arc<Person>> {
    pool.iter()
        .filter(|person| is_orphan(pool, person))
        .cloned()
        .collect()
}

/// Find all people in `pool` who are partners of `person`, i.e. share at
/// least one child id with them. The person never partners themselves.
#[must_use]
pub fn find_partners(pool: &[Arc<Person>], person: &Person) -> Vec<Arc<Person>> {
    if person.children.is_empty() {
        return Vec::new();
    }
    let children: FxHashSet<PersonId> = person.children.iter().copied().collect();
    pool.iter()
        .filter(|other| {
            other.id != person.id && other.children.iter().any(|id| children.contains(id))
        })
        .cloned()
        .collect()
}

/// Check if `person` has no partner in `pool`
#[must_use]
pub fn is_single(pool: &[Arc<Person>], person: &Person) -> bool {
    !pool
        .iter()
        .any(|other| other.id != person.id && other.shares_child_with(person))
}

/// Find the first person in `pool` with the given id
#[must_use]
pub fn find_person(pool: &[Arc<Person>], id: PersonId) -> Option<Arc<Person>> {
    pool.iter().find(|person| person.id == id).cloned()
}

/// Deduplicate `pool` by id; the first occurrence wins and order is
/// preserved
#[must_use]
pub fn find_unique_people(pool: &[Arc<Person>]) -> Vec<Arc<Person>> {
    pool.iter().cloned().unique_by(|person| person.id).collect()
}
