//! Forest composition
//!
//! The composition root of a resolution pass. Works breadth-first over a
//! queue of (pool, anchors) work items: at each level it detects the
//! couples among the level's orphans, claims the anchor group's single
//! immediate children, partitions the pool into used and unprocessed
//! people, and enqueues one scoped work item per couple. Nodes are
//! assembled in an index arena and stitched into the final tree at the
//! end, so stack depth stays constant regardless of pedigree size.

use std::collections::VecDeque;
use std::sync::Arc;

use log::{debug, info};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::algorithm::couples::find_orphan_couples;
use crate::algorithm::relationships::is_single;
use crate::algorithm::scoping::{find_immediate_children, find_relatives};
use crate::algorithm::validation::ensure_valid;
use crate::config::ResolverConfig;
use crate::error::Result;
use crate::models::{Forest, Person, PersonId, Population, TreeNode};

/// One pending level of the forest: the people still available to this
/// branch and the anchor group above them
struct WorkItem {
    pool: Vec<Arc<Person>>,
    anchors: Vec<Arc<Person>>,
    parent: Option<usize>,
}

/// Node under construction, children referenced by arena index
struct ArenaNode {
    anchors: Vec<Arc<Person>>,
    children: Vec<usize>,
}

/// Builds a layered forest from a population snapshot
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    config: ResolverConfig,
}

impl TreeBuilder {
    /// Create a builder with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with the given configuration
    #[must_use]
    pub const fn with_config(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// The configuration this builder resolves with
    #[must_use]
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve `population` into a forest of generation nodes.
    ///
    /// The snapshot is never mutated; every pass recomputes the forest
    /// from scratch. Fails only when validation is enabled and the
    /// snapshot carries duplicate ids or dangling references.
    ///
    /// A person only ever enters the forest as part of a couple or as an
    /// immediate child of an anchor group, so an orphan with no partner
    /// and no placed parents contributes nothing. Their descendants
    /// surface once a later snapshot pairs them into a couple.
    pub fn build(&self, population: &Population) -> Result<Forest> {
        if self.config.validate {
            ensure_valid(population)?;
        }

        let mut arena: Vec<ArenaNode> = Vec::new();
        let mut roots: Vec<usize> = Vec::new();
        let mut queue: VecDeque<WorkItem> = VecDeque::new();
        queue.push_back(WorkItem {
            pool: population.all(),
            anchors: Vec::new(),
            parent: None,
        });

        while let Some(item) = queue.pop_front() {
            self.process_level(item, &mut arena, &mut roots, &mut queue);
        }

        let forest = stitch(arena, &roots);
        info!(
            "resolved forest: {} roots, {} nodes from {} people",
            forest.roots.len(),
            forest.stats().node_count,
            population.len()
        );
        Ok(forest)
    }

    /// Resolve one level: detect couples and singles, partition the pool,
    /// emit their nodes, and enqueue the couples' scoped subtrees
    fn process_level(
        &self,
        item: WorkItem,
        arena: &mut Vec<ArenaNode>,
        roots: &mut Vec<usize>,
        queue: &mut VecDeque<WorkItem>,
    ) {
        let policy = self.config.couple_equality;

        // Couples among this level's orphans; orphanhood is relative to
        // the pool slice, not the whole population.
        let couples = find_orphan_couples(&item.pool, policy);
        let coupled: Vec<Arc<Person>> = couples.iter().flatten().cloned().collect();

        // Immediate children of the anchors who were not already claimed
        // into a couple at this level.
        let single_children: Vec<Arc<Person>> =
            find_immediate_children(&item.pool, &item.anchors)
                .into_iter()
                .filter(|person| is_single(&coupled, person))
                .collect();

        let used_ids: FxHashSet<PersonId> = coupled
            .iter()
            .chain(single_children.iter())
            .map(|person| person.id)
            .collect();
        let unprocessed: Vec<Arc<Person>> = item
            .pool
            .iter()
            .filter(|person| !used_ids.contains(&person.id))
            .cloned()
            .collect();

        debug!(
            "level: {} couples, {} singles, {} unprocessed",
            couples.len(),
            single_children.len(),
            unprocessed.len()
        );

        // Sibling subtrees draw from the same unprocessed pool but claim
        // disjoint people, so their scoping can run in parallel.
        let scoped_pools: Vec<Vec<Arc<Person>>> = couples
            .par_iter()
            .map(|couple| find_relatives(&unprocessed, couple, policy))
            .collect();

        for (couple, child_pool) in couples.into_iter().zip(scoped_pools) {
            let anchors: Vec<Arc<Person>> = couple.into_vec();
            let index = push_node(arena, roots, item.parent, anchors.clone());
            queue.push_back(WorkItem {
                pool: child_pool,
                anchors,
                parent: Some(index),
            });
        }

        // Singles terminate their branch here; they get no scoped pool.
        for single in single_children {
            push_node(arena, roots, item.parent, vec![single]);
        }
    }
}

fn push_node(
    arena: &mut Vec<ArenaNode>,
    roots: &mut Vec<usize>,
    parent: Option<usize>,
    anchors: Vec<Arc<Person>>,
) -> usize {
    let index = arena.len();
    arena.push(ArenaNode {
        anchors,
        children: Vec::new(),
    });
    match parent {
        Some(parent_index) => arena[parent_index].children.push(index),
        None => roots.push(index),
    }
    index
}

/// Convert the arena into nested nodes. Children always carry a higher
/// index than their parent, so a single reverse sweep resolves them.
fn stitch(mut arena: Vec<ArenaNode>, roots: &[usize]) -> Forest {
    let mut built: Vec<Option<TreeNode>> = (0..arena.len()).map(|_| None).collect();
    for index in (0..arena.len()).rev() {
        let child_indices = std::mem::take(&mut arena[index].children);
        let anchors = std::mem::take(&mut arena[index].anchors);
        let children: Vec<TreeNode> = child_indices
            .into_iter()
            .filter_map(|child| built[child].take())
            .collect();
        built[index] = Some(TreeNode::new(anchors, children));
    }

    Forest {
        roots: roots
            .iter()
            .filter_map(|&root| built[root].take())
            .collect(),
    }
}
