//! Couple grouping
//!
//! Builds couple groups out of partner relationships and collapses the
//! doubled raw output down to unique couples under a configurable
//! equality policy.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use smallvec::{SmallVec, smallvec};

use crate::algorithm::relationships::{find_orphans, find_partners};
use crate::config::CoupleEquality;
use crate::models::{Person, PersonId};

/// A couple group: the anchor person followed by their partners.
///
/// Inline capacity of two covers the ordinary couple; blended groups of
/// three or more co-parents spill to the heap.
pub type CoupleGroup = SmallVec<[Arc<Person>; 2]>;

/// Form the raw couple group for every person in `pool`.
///
/// A true couple (A, B) appears twice in the output, once anchored at A
/// and once at B. That doubling is intentional; it is collapsed by
/// [`find_unique_couples`].
#[must_use]
pub fn find_couples(pool: &[Arc<Person>]) -> Vec<CoupleGroup> {
    pool.iter()
        .map(|person| {
            let mut group: CoupleGroup = smallvec![Arc::clone(person)];
            group.extend(find_partners(pool, person));
            group
        })
        .filter(|group| group.len() > 1)
        .collect()
}

/// Whether two couple groups identify the same couple under `policy`
fn same_couple(policy: CoupleEquality, a: &CoupleGroup, b: &CoupleGroup) -> bool {
    let a_ids: FxHashSet<PersonId> = a.iter().map(|person| person.id).collect();
    match policy {
        CoupleEquality::Lenient => {
            b.iter().filter(|person| a_ids.contains(&person.id)).count() > 1
        }
        CoupleEquality::Strict => {
            let b_ids: FxHashSet<PersonId> = b.iter().map(|person| person.id).collect();
            a_ids == b_ids
        }
    }
}

/// Find all non-repeated couples in `pool`.
///
/// Keeps the first of any two groups the policy considers the same
/// couple, in discovery order.
#[must_use]
pub fn find_unique_couples(pool: &[Arc<Person>], policy: CoupleEquality) -> Vec<CoupleGroup> {
    let mut unique: Vec<CoupleGroup> = Vec::new();
    for group in find_couples(pool) {
        if !unique.iter().any(|kept| same_couple(policy, kept, &group)) {
            unique.push(group);
        }
    }
    unique
}

/// Find the unique couples among the orphans of `pool`.
///
/// Orphanhood here is relative to the pool, so at the top of the forest
/// this yields the root couples, and within a generation slice it yields
/// the couples of that generation.
#[must_use]
pub fn find_orphan_couples(pool: &[Arc<Person>], policy: CoupleEquality) -> Vec<CoupleGroup> {
    find_unique_couples(&find_orphans(pool), policy)
}
