//! Common domain type definitions
//!
//! This module contains the scalar types shared across domain models.

use serde::{Deserialize, Serialize};

/// Identifier of a person within a population snapshot.
///
/// Ids in the wild can exceed 64 bits, so identifiers are carried as
/// 128-bit integers rather than anything float-backed.
pub type PersonId = u128;

/// Gender of a person, carried through for presentation only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male gender
    Male,
    /// Female gender
    Female,
    /// Unknown or not specified
    #[default]
    Unknown,
}

impl From<&str> for Gender {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" | "1" => Self::Male,
            "f" | "female" | "2" => Self::Female,
            _ => Self::Unknown,
        }
    }
}

impl From<i32> for Gender {
    fn from(value: i32) -> Self {
        match value {
            1 => Self::Male,
            2 => Self::Female,
            _ => Self::Unknown,
        }
    }
}
