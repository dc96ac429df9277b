//! Resolution algorithms
//!
//! The stages that turn a flat population snapshot into a layered
//! forest, leaves first: relationship queries, couple grouping,
//! descendant scoping, forest composition, and the opt-in validation
//! pass.

pub mod builder;
pub mod couples;
pub mod relationships;
pub mod scoping;
pub mod validation;

pub use builder::TreeBuilder;
pub use couples::CoupleGroup;
