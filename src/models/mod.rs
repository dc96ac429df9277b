//! Domain models for family-forest resolution
//!
//! Input models (`Person`, `Population`) and the derived output models
//! (`TreeNode`, `Forest`) produced by a resolution pass.

pub mod collections;
pub mod node;
pub mod person;
pub mod types;

// Re-export commonly used types
pub use collections::Population;
pub use node::{Forest, ForestStats, NodeId, TreeNode};
pub use person::Person;
pub use types::{Gender, PersonId};
