//! Raw transition-table configuration.
//!
//! A [`TransitionTable`] is the decoded form of the external configuration a
//! registry is built from: state name -> (action name -> target state name).
//! The table itself is plain, unvalidated data; all structural checking
//! happens when a [`RegistryBuilder`](crate::builder::RegistryBuilder)
//! consumes it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from state name to that state's action -> target-state mapping.
///
/// Serializes transparently as the nested string map, so a JSON document like
/// `{"NEW": {"START": "STARTED"}}` decodes directly into a table.
///
/// # Example
///
/// ```rust
/// use switchyard::TransitionTable;
///
/// let table = TransitionTable::from_json(
///     r#"{"NEW": {"START": "STARTED"}, "STARTED": {"COMPLETE": "NEW"}}"#,
/// ).unwrap();
///
/// assert_eq!(table.states().count(), 2);
/// assert!(table.edges().any(|edge| edge == ("NEW", "START", "STARTED")));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionTable(BTreeMap<String, BTreeMap<String, String>>);

impl TransitionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a table from a JSON document.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Declare a state with no transitions (yet).
    ///
    /// Declaring a known state again is a no-op.
    pub fn declare(&mut self, state: &str) {
        self.0.entry(state.to_owned()).or_default();
    }

    /// Record one (state, action) -> target entry.
    ///
    /// Within a single table the nested map can only hold one target per
    /// (state, action) pair, so a repeated `insert` replaces the earlier
    /// target. Contradictions across *separate* recordings (several tables,
    /// or tables mixed with builder calls) are caught when a builder
    /// consumes them.
    pub fn insert(&mut self, state: &str, action: &str, target: &str) {
        self.0
            .entry(state.to_owned())
            .or_default()
            .insert(action.to_owned(), target.to_owned());
    }

    /// Names of the declared source states.
    ///
    /// Target-only states do not appear here; they become registry members
    /// during construction.
    pub fn states(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    /// Every (state, action, target) edge in the table.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &str)> + '_ {
        self.0.iter().flat_map(|(state, transitions)| {
            transitions
                .iter()
                .map(move |(action, target)| (state.as_str(), action.as_str(), target.as_str()))
        })
    }

    /// Whether the table declares no states at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
