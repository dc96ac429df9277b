//! Descendant scoping
//!
//! Given an anchor group and a pool of not-yet-placed people, computes
//! exactly which people belong beneath that anchor. This is the step that
//! keeps sibling subtrees disjoint: everything it claims is removed from
//! the pool its caller hands to the next branch.

use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::algorithm::couples::find_unique_couples;
use crate::algorithm::relationships::{find_unique_people, is_orphan};
use crate::config::CoupleEquality;
use crate::models::{Person, PersonId};

/// Find all people in `pool` who are immediate children of `anchors`,
/// i.e. list at least one anchor as a parent.
///
/// This is the orphan predicate with the reference set restricted to the
/// anchor group instead of the whole pool.
#[must_use]
pub fn find_immediate_children(pool: &[Arc<Person>], anchors: &[Arc<Person>]) -> Vec<Arc<Person>> {
    pool.iter()
        .filter(|person| !is_orphan(anchors, person))
        .cloned()
        .collect()
}

/// Find every person in `pool` who belongs beneath `anchors`: their
/// immediate children, those children's partners, and so on generation by
/// generation.
///
/// Each iteration claims one generation (the immediate children of the
/// current frontier plus any couples those children belong to) and
/// removes it from the working pool before descending. A non-empty
/// generation strictly shrinks the pool, so the loop is bounded by pool
/// size no matter how malformed or cyclic the parent/child data is.
/// People consumed once never reappear; cyclic references are sinks, not
/// loops.
#[must_use]
pub fn find_relatives(
    pool: &[Arc<Person>],
    anchors: &[Arc<Person>],
    policy: CoupleEquality,
) -> Vec<Arc<Person>> {
    let mut remaining: Vec<Arc<Person>> = pool.to_vec();
    let mut frontier: Vec<Arc<Person>> = anchors.to_vec();
    let mut relatives: Vec<Arc<Person>> = Vec::new();

    loop {
        let related_children = find_immediate_children(&remaining, &frontier);
        if related_children.is_empty() {
            break;
        }

        // Couples within the remaining pool that connect to this
        // generation's children come down with them.
        let child_ids: FxHashSet<PersonId> =
            related_children.iter().map(|person| person.id).collect();
        let mut generation = related_children;
        for couple in find_unique_couples(&remaining, policy) {
            if couple.iter().any(|member| child_ids.contains(&member.id)) {
                generation.extend(couple);
            }
        }
        let generation = find_unique_people(&generation);

        let generation_ids: FxHashSet<PersonId> =
            generation.iter().map(|person| person.id).collect();
        remaining.retain(|person| !generation_ids.contains(&person.id));

        relatives.extend(generation.iter().cloned());
        frontier = generation;
    }

    relatives
}
