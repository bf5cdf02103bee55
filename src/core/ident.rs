//! Identifier value types for states and actions.
//!
//! States and actions are named by opaque string values. Two identifiers with
//! the same name denote the same state or action everywhere, regardless of
//! where or when they were created - equality and hashing are structural,
//! never by allocation identity. Both types are cheap to clone (shared
//! interned string) so they can be used directly as map keys and returned
//! by value from machine operations.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

macro_rules! ident_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Arc<str>);

        impl $name {
            /// View the identifier as a plain string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self(Arc::from(name))
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(Arc::from(name))
            }
        }

        // Lets maps keyed by the identifier answer plain `&str` queries.
        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                &*self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                &*self.0 == *other
            }
        }
    };
}

ident_type! {
    /// Name of a single machine state.
    ///
    /// # Example
    ///
    /// ```rust
    /// use switchyard::StateId;
    ///
    /// let a = StateId::from("STARTED");
    /// let b = StateId::from(String::from("STARTED"));
    ///
    /// assert_eq!(a, b);
    /// assert_eq!(a, "STARTED");
    /// ```
    StateId
}

ident_type! {
    /// Name of an input that one or more states accept.
    ///
    /// Same value semantics as [`StateId`]: two `ActionId`s are equal exactly
    /// when their names are equal.
    ActionId
}
