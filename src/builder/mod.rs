//! Builder API for constructing validated transition registries.
//!
//! This module provides the only way to create a
//! [`TransitionRegistry`]: a fluent builder that upserts states as their
//! names appear and rejects contradictory declarations as soon as they are
//! recorded.

pub mod error;
pub mod macros;

pub use error::BuildError;

use crate::core::ident::{ActionId, StateId};
use crate::core::registry::{StateNode, TransitionRegistry};
use crate::table::TransitionTable;
use std::collections::HashMap;

/// Fluent builder for a [`TransitionRegistry`].
///
/// A state entry is created the first time its name is seen, whether as a
/// transition source or only as a target, so the order in which edges are
/// recorded never matters. Recording the same (state, action) pair twice is
/// allowed only when both declarations agree on the target.
///
/// # Example
///
/// ```rust
/// use switchyard::RegistryBuilder;
///
/// # fn main() -> Result<(), switchyard::BuildError> {
/// let registry = RegistryBuilder::new()
///     .transition("NEW", "START", "STARTED")?
///     .transition("STARTED", "COMPLETE", "NEW")?
///     .default_state("NEW")
///     .build()?;
///
/// assert_eq!(registry.state_count(), 2);
/// # Ok(())
/// # }
/// ```
pub struct RegistryBuilder {
    nodes: Vec<StateNode>,
    index: HashMap<StateId, usize>,
    default: Option<StateId>,
}

impl RegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            default: None,
        }
    }

    /// Declare a state without any outgoing transitions.
    ///
    /// Declaring a state that already exists is a no-op, so this is safe to
    /// call for names that later (or earlier) appear in edges.
    pub fn state(mut self, name: &str) -> Self {
        self.upsert(name);
        self
    }

    /// Record a single transition edge.
    ///
    /// Both the source and the target state are created if this is the first
    /// appearance of their names. Returns [`BuildError::ConflictingTarget`]
    /// if the (from, action) pair was already recorded with a different
    /// target.
    pub fn transition(mut self, from: &str, action: &str, to: &str) -> Result<Self, BuildError> {
        self.record(from, action, to)?;
        Ok(self)
    }

    /// Merge every declaration of a decoded transition table.
    ///
    /// Source states with an empty action map are kept as members. Merging
    /// several tables is permitted as long as they never contradict each
    /// other on a (state, action) pair.
    pub fn table(mut self, table: &TransitionTable) -> Result<Self, BuildError> {
        for state in table.states() {
            self.upsert(state);
        }
        for (from, action, to) in table.edges() {
            self.record(from, action, to)?;
        }
        Ok(self)
    }

    /// Set the state machines start in and return to on reset (required).
    pub fn default_state(mut self, name: &str) -> Self {
        self.default = Some(StateId::from(name));
        self
    }

    /// Validate and freeze the registry.
    ///
    /// Fails with [`BuildError::MissingDefaultState`] if
    /// [`default_state`](Self::default_state) was never called, or with
    /// [`BuildError::UnknownDefaultState`] if the declared default does not
    /// appear in the table. No partially valid registry is ever exposed.
    pub fn build(self) -> Result<TransitionRegistry, BuildError> {
        let default = self.default.ok_or(BuildError::MissingDefaultState)?;

        let Some(&ix) = self.index.get(default.as_str()) else {
            return Err(BuildError::UnknownDefaultState(default));
        };

        Ok(TransitionRegistry {
            nodes: self.nodes,
            index: self.index,
            default: ix,
        })
    }

    fn upsert(&mut self, name: &str) -> usize {
        if let Some(&ix) = self.index.get(name) {
            return ix;
        }
        let id = StateId::from(name);
        let ix = self.nodes.len();
        self.nodes.push(StateNode {
            id: id.clone(),
            edges: HashMap::new(),
        });
        self.index.insert(id, ix);
        ix
    }

    fn record(&mut self, from: &str, action: &str, to: &str) -> Result<(), BuildError> {
        let from_ix = self.upsert(from);
        let to_ix = self.upsert(to);

        if let Some(&existing) = self.nodes[from_ix].edges.get(action) {
            if existing == to_ix {
                return Ok(());
            }
            return Err(BuildError::ConflictingTarget {
                state: self.nodes[from_ix].id.clone(),
                action: ActionId::from(action),
                existing: self.nodes[existing].id.clone(),
                attempted: self.nodes[to_ix].id.clone(),
            });
        }

        self.nodes[from_ix].edges.insert(ActionId::from(action), to_ix);
        Ok(())
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
