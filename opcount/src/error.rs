//! Error types.

use crate::{Name, Tier};
use thiserror::Error;

/// Defects in a cost table or report layout.
///
/// None of these can occur for the built-in formula sets; they guard tables
/// assembled by hand against typos, cycles and out-of-order tiers.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The same name was defined twice.
    #[error("cost `{0}` is defined more than once")]
    DuplicateCost(Name),

    /// A formula refers to a name with no definition.
    #[error("cost `{name}` references undefined cost `{reference}`")]
    UndefinedReference {
        /// Cost whose formula holds the reference.
        name: Name,
        /// The unknown name.
        reference: Name,
    },

    /// Formulas refer to each other in a loop.
    #[error("costs form a dependency cycle through `{0}`")]
    DependencyCycle(Name),

    /// A formula refers to a cost of a higher tier.
    #[error("{tier} cost `{name}` references higher-tier cost `{reference}`")]
    TierInversion {
        /// Cost whose formula holds the reference.
        name: Name,
        /// Tier of `name`.
        tier: Tier,
        /// The higher-tier name.
        reference: Name,
    },

    /// A formula evaluated below zero.
    #[error("cost `{0}` evaluates to a negative operation count")]
    NegativeCost(Name),

    /// A formula does not fit in 64 bits.
    #[error("cost `{0}` overflows 64-bit arithmetic")]
    Overflow(Name),

    /// A report lists a name that has no computed value.
    #[error("report lists cost `{0}` which has no computed value")]
    MissingCost(Name),
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
