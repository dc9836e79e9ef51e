//! Dynamic argument values handed to dispatch by the host.

use serde::{Deserialize, Serialize};

use crate::Series;

/// A positional argument as it arrives from the host's query expression.
///
/// Kind checking and coercion against a function's declared [`crate::Param`]
/// schema happen in the registry, not here. Serialized untagged; variant
/// order matters so whole-number JSON literals parse as `Integer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    /// An already-fetched series list.
    SeriesList(Vec<Series>),
    /// A whole number.
    Integer(i64),
    /// A floating-point number.
    Float(f64),
    /// A string literal.
    Text(String),
}

impl ArgValue {
    /// Stable name of the carried kind, for diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::SeriesList(_) => "series-list",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "string",
        }
    }
}
