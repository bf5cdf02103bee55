//! Build errors for registry construction.

use crate::core::ident::{ActionId, StateId};
use thiserror::Error;

/// Errors that can occur while building a
/// [`TransitionRegistry`](crate::core::TransitionRegistry).
///
/// All of these are fatal: construction either fully succeeds or yields no
/// registry at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The same (state, action) pair was declared with two different targets.
    #[error("action '{action}' in state '{state}' is already mapped to '{existing}', cannot be changed to '{attempted}'")]
    ConflictingTarget {
        state: StateId,
        action: ActionId,
        existing: StateId,
        attempted: StateId,
    },

    /// The declared default state does not appear anywhere in the table.
    #[error("default state '{0}' is not part of the transition table")]
    UnknownDefaultState(StateId),

    /// No default state was declared at all.
    #[error("default state not specified. Call .default_state(name) before .build()")]
    MissingDefaultState,
}
