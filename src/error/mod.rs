//! Error handling for population resolution.
//!
//! Resolution itself is total: malformed references degrade silently
//! (a dangling parent id simply makes the person an orphan for that
//! branch). These errors are only produced by the opt-in validation
//! pass.

use crate::models::PersonId;

/// Errors that can occur when validating a population snapshot
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// Two people in the snapshot share the same id
    #[error("duplicate person id {0} in population snapshot")]
    DuplicateId(PersonId),

    /// A parent or child reference points at an id not present in the snapshot
    #[error("person {referrer} references id {missing}, which is not in the population")]
    DanglingReference {
        /// Id of the person carrying the reference
        referrer: PersonId,
        /// The referenced id that could not be resolved
        missing: PersonId,
    },
}

/// Alias for Result with `ResolveError`
pub type Result<T> = std::result::Result<T, ResolveError>;
