//! Node and edge identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create a new identifier.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&String> for $name {
            fn from(s: &String) -> Self {
                Self(s.clone())
            }
        }

        entity_id!(@ints $name: i32, i64, u32, u64, usize);
    };
    (@ints $name:ident: $($int:ty),*) => {
        $(
            impl From<$int> for $name {
                fn from(n: $int) -> Self {
                    Self(n.to_string())
                }
            }
        )*
    };
}

entity_id!(
    /// Unique identifier for a node.
    NodeId
);

entity_id!(
    /// Unique identifier for a hyperedge.
    EdgeId
);

impl From<&NodeId> for NodeId {
    fn from(id: &NodeId) -> Self {
        id.clone()
    }
}

impl From<&EdgeId> for EdgeId {
    fn from(id: &EdgeId) -> Self {
        id.clone()
    }
}

// Dual hypergraphs swap the roles of nodes and edges.
impl From<EdgeId> for NodeId {
    fn from(id: EdgeId) -> Self {
        Self(id.0)
    }
}

impl From<NodeId> for EdgeId {
    fn from(id: NodeId) -> Self {
        Self(id.0)
    }
}
