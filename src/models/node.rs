//! Derived forest models
//!
//! This module contains the output of a resolution pass: generation nodes
//! grouped under anchor couples or singles, the structural identity key
//! consumers use for diffing, and the forest wrapper with summary
//! statistics. All of it is transient; it is recomputed from the
//! population snapshot on every pass and never persisted.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::models::person::Person;
use crate::models::types::PersonId;

/// Stable structural identity of a generation node.
///
/// Holds the anchor member ids as a sorted tuple, so the key is
/// insensitive to anchor ordering and free of the boundary collisions a
/// concatenated string key would have (ids 1,23 vs 12,3).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(SmallVec<[PersonId; 2]>);

impl NodeId {
    /// Derive the identity key for a group of anchors
    #[must_use]
    pub fn from_anchors(anchors: &[Arc<Person>]) -> Self {
        let mut ids: SmallVec<[PersonId; 2]> = anchors.iter().map(|person| person.id).collect();
        ids.sort_unstable();
        ids.dedup();
        Self(ids)
    }

    /// The sorted member ids backing this key
    #[must_use]
    pub fn ids(&self) -> &[PersonId] {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "_")?;
            }
            write!(f, "{id}")?;
        }
        Ok(())
    }
}

/// One generation node in the resolved forest
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    /// The one or two people this node is built around: a deduplicated
    /// couple, or a lone single child
    pub anchors: Vec<Arc<Person>>,
    /// Next-generation nodes beneath the anchors
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a node from its anchors and child nodes
    #[must_use]
    pub fn new(anchors: Vec<Arc<Person>>, children: Vec<Self>) -> Self {
        Self { anchors, children }
    }

    /// The structural identity key of this node
    #[must_use]
    pub fn node_id(&self) -> NodeId {
        NodeId::from_anchors(&self.anchors)
    }

    /// Whether this node has no child nodes
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes beneath this one, not counting this node
    #[must_use]
    pub fn descendant_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Self> = self.children.iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// Whether the person with `id` is anchored anywhere in this subtree
    #[must_use]
    pub fn contains(&self, id: PersonId) -> bool {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.anchors.iter().any(|person| person.id == id) {
                return true;
            }
            stack.extend(node.children.iter());
        }
        false
    }

    /// Depth of the deepest leaf under this node, counting this node as 1
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            stack.extend(node.children.iter().map(|child| (child, depth + 1)));
        }
        max_depth
    }
}

/// A fully resolved forest: one root node per orphan couple at the top
/// of the population
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forest {
    /// Root generation nodes, in discovery order
    pub roots: Vec<TreeNode>,
}

impl Forest {
    /// Whether the forest has no nodes at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Whether the person with `id` is anchored anywhere in the forest
    #[must_use]
    pub fn contains(&self, id: PersonId) -> bool {
        self.roots.iter().any(|root| root.contains(id))
    }

    /// Identity keys of every node in the forest, roots first
    #[must_use]
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::new();
        let mut stack: Vec<&TreeNode> = self.roots.iter().rev().collect();
        while let Some(node) = stack.pop() {
            ids.push(node.node_id());
            stack.extend(node.children.iter().rev());
        }
        ids
    }

    /// Calculate summary statistics for the forest
    #[must_use]
    pub fn stats(&self) -> ForestStats {
        let mut stats = ForestStats::default();
        let mut stack: Vec<&TreeNode> = self.roots.iter().collect();
        while let Some(node) = stack.pop() {
            stats.node_count += 1;
            stats.person_count += node.anchors.len();
            if node.anchors.len() > 1 {
                stats.couple_count += 1;
            } else {
                stats.single_count += 1;
            }
            stack.extend(node.children.iter());
        }
        stats.max_depth = self.roots.iter().map(TreeNode::depth).max().unwrap_or(0);
        stats
    }
}

/// Summary statistics over a resolved forest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForestStats {
    /// Total number of generation nodes
    pub node_count: usize,
    /// Total number of people anchored across all nodes
    pub person_count: usize,
    /// Number of nodes anchored by a couple
    pub couple_count: usize,
    /// Number of nodes anchored by a lone single
    pub single_count: usize,
    /// Depth of the deepest branch, in generations
    pub max_depth: usize,
}

impl fmt::Display for ForestStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Forest Summary:")?;
        writeln!(f, "  Total Nodes: {}", self.node_count)?;
        writeln!(f, "  Total People Placed: {}", self.person_count)?;
        writeln!(f, "  Couple Nodes: {}", self.couple_count)?;
        writeln!(f, "  Single Nodes: {}", self.single_count)?;
        writeln!(f, "  Max Depth: {}", self.max_depth)?;
        Ok(())
    }
}
