//! A Rust library for resolving flat person records into layered,
//! deduplicated family forests with couple detection, generation
//! partitioning, and bounded descendant scoping.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;

// Re-export the most common types for easier use
// Core types
pub use config::{CoupleEquality, ResolverConfig};
pub use error::{ResolveError, Result};
pub use models::{Forest, ForestStats, Gender, NodeId, Person, PersonId, Population, TreeNode};

// Resolution entry point
pub use algorithm::builder::TreeBuilder;

// Relationship queries
pub use algorithm::relationships::{
    find_orphans, find_parents, find_partners, find_person, find_unique_people, is_orphan,
    is_single,
};

// Couple grouping
pub use algorithm::couples::{CoupleGroup, find_couples, find_orphan_couples, find_unique_couples};

// Descendant scoping
pub use algorithm::scoping::{find_immediate_children, find_relatives};

// Validation
pub use algorithm::validation::{collect_issues, ensure_valid};
