//! Configuration for a resolution pass.

use std::fmt;

/// Policy used to decide when two raw couple groups are the same couple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoupleEquality {
    /// Two groups are the same couple when their member ids overlap in
    /// more than one id. Collapses the doubled two-person case, but can
    /// merge distinct couples inside blended groups of three or more
    /// co-parents.
    #[default]
    Lenient,
    /// Two groups are the same couple only when their member id sets are
    /// identical.
    Strict,
}

impl fmt::Display for CoupleEquality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => write!(f, "lenient"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

/// Configuration for forest resolution
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolverConfig {
    /// Couple deduplication policy
    pub couple_equality: CoupleEquality,
    /// Whether to reject the snapshot up front when it contains duplicate
    /// ids or dangling references, instead of degrading silently
    pub validate: bool,
}

impl ResolverConfig {
    /// Create a configuration with the default lenient policy
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the couple deduplication policy
    #[must_use]
    pub const fn with_couple_equality(mut self, policy: CoupleEquality) -> Self {
        self.couple_equality = policy;
        self
    }

    /// Enable up-front snapshot validation
    #[must_use]
    pub const fn with_validation(mut self) -> Self {
        self.validate = true;
        self
    }
}

impl fmt::Display for ResolverConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Resolver Configuration:")?;
        writeln!(f, "  Couple Equality: {}", self.couple_equality)?;
        writeln!(f, "  Validate Snapshot: {}", self.validate)?;
        Ok(())
    }
}
