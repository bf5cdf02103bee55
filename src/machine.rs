//! The machine runtime: a mutable current-state cursor over a shared,
//! read-only registry.

use crate::builder::{BuildError, RegistryBuilder};
use crate::core::ident::{ActionId, StateId};
use crate::core::registry::TransitionRegistry;
use crate::table::TransitionTable;
use std::sync::Arc;
use thiserror::Error;

/// Errors reported by machine operations.
///
/// Unlike [`BuildError`], these are recoverable: the machine remains valid
/// and its current state is left exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// The current state does not accept the attempted action.
    #[error("action '{action}' is not available for state '{state}'")]
    InvalidTransition { state: StateId, action: ActionId },

    /// A lookahead asked about a state the registry has never seen.
    #[error("state '{state}' is not part of this state machine")]
    UnknownState { state: StateId },
}

/// One running instance of a deterministic finite state machine.
///
/// A machine is a single mutable field - the current state - over an
/// immutable [`TransitionRegistry`] shared through an [`Arc`]. It is created
/// in the registry's default state and can only exist once construction of
/// the registry has fully succeeded.
///
/// Driving a machine requires `&mut self`, so a single logical caller at a
/// time; clone the `Arc` and create one machine per worker (or wrap one
/// machine in a lock) for concurrent use.
///
/// # Example
///
/// ```rust
/// use switchyard::{Machine, TransitionTable};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let table = TransitionTable::from_json(
///     r#"{"NEW": {"START": "STARTED"}, "STARTED": {"COMPLETE": "NEW"}}"#,
/// )?;
/// let mut machine = Machine::from_table(&table, "NEW")?;
///
/// assert_eq!(machine.current_state(), "NEW");
/// assert_eq!(machine.transition("START")?, "STARTED");
/// assert_eq!(machine.transition("COMPLETE")?, "NEW");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Machine {
    registry: Arc<TransitionRegistry>,
    current: usize,
}

impl Machine {
    /// Create a machine over an already-built registry, positioned at the
    /// registry's default state.
    pub fn new(registry: Arc<TransitionRegistry>) -> Self {
        let current = registry.default;
        Self { registry, current }
    }

    /// Build a registry from a decoded table and start a machine on it.
    ///
    /// Convenience for the common single-machine case; use
    /// [`RegistryBuilder`] plus [`Machine::new`] to share one registry
    /// across several machines.
    pub fn from_table(table: &TransitionTable, default_state: &str) -> Result<Self, BuildError> {
        let registry = RegistryBuilder::new()
            .table(table)?
            .default_state(default_state)
            .build()?;
        Ok(Self::new(Arc::new(registry)))
    }

    /// The registry this machine runs against.
    pub fn registry(&self) -> &Arc<TransitionRegistry> {
        &self.registry
    }

    /// The state the machine is currently in.
    pub fn current_state(&self) -> &StateId {
        self.registry.id_at(self.current)
    }

    /// Move the machine back to the default state and return it.
    ///
    /// Never fails: the default state was validated at construction.
    pub fn reset(&mut self) -> StateId {
        self.current = self.registry.default;
        self.current_state().clone()
    }

    /// Apply an action to the current state.
    ///
    /// On success the machine advances to the target state and returns it.
    /// On failure the current state is untouched and the error names both
    /// the rejected action and the state it was attempted from.
    pub fn transition(&mut self, action: &str) -> Result<StateId, TransitionError> {
        let node = self.registry.node(self.current);
        match node.edges.get(action) {
            Some(&target) => {
                self.current = target;
                Ok(self.registry.id_at(target).clone())
            }
            None => Err(TransitionError::InvalidTransition {
                state: node.id.clone(),
                action: ActionId::from(action),
            }),
        }
    }

    /// Look up where an action would lead from a given state, without moving
    /// the machine.
    ///
    /// Asking about a state the registry does not know is a caller bug and
    /// fails with [`TransitionError::UnknownState`]; a known state that
    /// simply does not accept the action is an ordinary outcome and yields
    /// `Ok(None)`.
    pub fn what_next(
        &self,
        state: &str,
        action: &str,
    ) -> Result<Option<StateId>, TransitionError> {
        let Some(ix) = self.registry.ix(state) else {
            return Err(TransitionError::UnknownState {
                state: StateId::from(state),
            });
        };

        Ok(self
            .registry
            .node(ix)
            .edges
            .get(action)
            .map(|&target| self.registry.id_at(target).clone()))
    }
}
