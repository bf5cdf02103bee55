//! Core data types of the state machine.
//!
//! Everything here is pure, immutable data:
//! - Identifier values via [`StateId`] and [`ActionId`]
//! - The validated transition registry via [`TransitionRegistry`]
//!
//! The mutable runtime layered on top lives in [`crate::machine`].

pub mod ident;
pub mod registry;

pub use ident::{ActionId, StateId};
pub use registry::TransitionRegistry;
