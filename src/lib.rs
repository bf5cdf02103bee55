//! Switchyard: deterministic state machines driven by declarative transition
//! tables.
//!
//! A machine is defined entirely by data: a table mapping each state name to
//! the actions it accepts and the state each action leads to, plus the name
//! of a default state. The table is validated once, up front, into an
//! immutable [`TransitionRegistry`]; any number of [`Machine`] instances can
//! then run against the shared registry, each tracking its own current
//! state.
//!
//! # Core Concepts
//!
//! - **Registry**: the validated, immutable set of states and their edges
//! - **Machine**: one mutable current-state cursor over a shared registry
//! - **Lookahead**: asking where an action would lead without moving
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use switchyard::{Machine, RegistryBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = RegistryBuilder::new()
//!     .transition("NEW", "START", "STARTED")?
//!     .transition("STARTED", "COMPLETE", "NEW")?
//!     .default_state("NEW")
//!     .build()?;
//!
//! let mut machine = Machine::new(Arc::new(registry));
//! assert_eq!(machine.current_state(), "NEW");
//! assert_eq!(machine.transition("START")?, "STARTED");
//! assert_eq!(machine.what_next("STARTED", "COMPLETE")?, Some("NEW".into()));
//! assert_eq!(machine.reset(), "NEW");
//! # Ok(())
//! # }
//! ```
//!
//! Construction fails closed: a contradictory table or an unknown default
//! state means no registry - and therefore no machine - ever exists.
//! Runtime rejections are ordinary typed results the caller can branch on.

pub mod builder;
pub mod core;
pub mod machine;
pub mod table;

// Re-export commonly used types
pub use crate::builder::{BuildError, RegistryBuilder};
pub use crate::core::{ActionId, StateId, TransitionRegistry};
pub use crate::machine::{Machine, TransitionError};
pub use crate::table::TransitionTable;
