//! The validated, immutable transition registry.
//!
//! A [`TransitionRegistry`] owns every state discovered while processing a
//! transition table, each carrying its local action -> target partial
//! function. States live in one arena and refer to each other by arena index,
//! never through back-references, so the structure is cycle-free even when
//! the transition graph itself has cycles.
//!
//! Registries are built through
//! [`RegistryBuilder`](crate::builder::RegistryBuilder), which enforces the
//! structural invariants; no mutation API exists afterwards, so a registry
//! can be shared by reference across any number of machines and threads.

use crate::core::ident::{ActionId, StateId};
use std::collections::HashMap;

/// One state record: its name plus the actions it accepts.
///
/// Transition targets are arena indices into the owning registry.
#[derive(Clone, Debug)]
pub(crate) struct StateNode {
    pub(crate) id: StateId,
    pub(crate) edges: HashMap<ActionId, usize>,
}

/// Immutable set of states and their outgoing transitions, plus the resolved
/// default state.
///
/// Invariants held by construction:
///
/// - every state named as a transition target is a member, even if it was
///   never declared as a source (it is a sink with no outgoing edges);
/// - each (state, action) pair maps to at most one target;
/// - the default state is a member.
///
/// # Example
///
/// ```rust
/// use switchyard::RegistryBuilder;
///
/// # fn main() -> Result<(), switchyard::BuildError> {
/// let registry = RegistryBuilder::new()
///     .transition("NEW", "START", "STARTED")?
///     .default_state("NEW")
///     .build()?;
///
/// assert_eq!(registry.default_state(), "NEW");
/// assert_eq!(registry.target("NEW", "START"), Some(&"STARTED".into()));
/// assert!(registry.contains("STARTED")); // sink, created implicitly
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct TransitionRegistry {
    pub(crate) nodes: Vec<StateNode>,
    pub(crate) index: HashMap<StateId, usize>,
    pub(crate) default: usize,
}

impl TransitionRegistry {
    /// The state every machine starts in and returns to on reset.
    pub fn default_state(&self) -> &StateId {
        &self.nodes[self.default].id
    }

    /// Whether a state with this name is a member of the registry.
    pub fn contains(&self, state: &str) -> bool {
        self.index.contains_key(state)
    }

    /// Number of states, sinks included.
    pub fn state_count(&self) -> usize {
        self.nodes.len()
    }

    /// All member states, in declaration-discovery order.
    pub fn states(&self) -> impl Iterator<Item = &StateId> + '_ {
        self.nodes.iter().map(|node| &node.id)
    }

    /// The actions a state accepts, or `None` if the state is not a member.
    ///
    /// A member sink state yields `Some` of an empty iterator.
    pub fn actions(&self, state: &str) -> Option<impl Iterator<Item = &ActionId> + '_> {
        let ix = self.ix(state)?;
        Some(self.nodes[ix].edges.keys())
    }

    /// Pure lookup of the target for (state, action).
    ///
    /// Returns `None` both when the state is unknown and when the state does
    /// not accept the action; use
    /// [`Machine::what_next`](crate::machine::Machine::what_next) to tell the
    /// two apart.
    pub fn target(&self, state: &str, action: &str) -> Option<&StateId> {
        let ix = self.ix(state)?;
        let target = *self.nodes[ix].edges.get(action)?;
        Some(&self.nodes[target].id)
    }

    pub(crate) fn ix(&self, state: &str) -> Option<usize> {
        self.index.get(state).copied()
    }

    pub(crate) fn node(&self, ix: usize) -> &StateNode {
        &self.nodes[ix]
    }

    pub(crate) fn id_at(&self, ix: usize) -> &StateId {
        &self.nodes[ix].id
    }
}
