//! Node specifications for name-rewriting transforms.

use core::fmt;
use serde::{Deserialize, Serialize};

/// One element of an alias node sequence: either a 0-based position into the
/// dot-separated tokens of a series name, or a literal string used as-is.
///
/// Serialized untagged so a host-side JSON spec like `[1, "server"]` maps
/// directly onto a `Vec<NodeSpec>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeSpec {
    /// Select the token at this 0-based index.
    Index(usize),
    /// Use this string verbatim.
    Literal(String),
}

impl From<usize> for NodeSpec {
    fn from(i: usize) -> Self {
        Self::Index(i)
    }
}

impl From<&str> for NodeSpec {
    fn from(s: &str) -> Self {
        Self::Literal(s.to_string())
    }
}

impl From<String> for NodeSpec {
    fn from(s: String) -> Self {
        Self::Literal(s)
    }
}

impl fmt::Display for NodeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Literal(s) => f.write_str(s),
        }
    }
}
