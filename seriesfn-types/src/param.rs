//! Declarative parameter schemas consumed by the host for validation and UI.

use core::fmt;
use serde::Serialize;

/// The fixed set of parameter kinds a registered function may declare.
///
/// These map one-to-one with the host's validation rules and allow
/// match-exhaustive handling when new kinds are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
pub enum ParamKind {
    /// An already-fetched list of series.
    SeriesList,
    /// A whole number.
    Integer,
    /// A floating-point number.
    Float,
    /// A free-form string.
    String,
    /// A node position or a literal tag, as used by alias transforms.
    NodeOrTag,
}

impl ParamKind {
    /// Stable, kebab-case identifier for schemas and errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SeriesList => "series-list",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::NodeOrTag => "node-or-tag",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One declared parameter of a registered function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Param {
    /// Parameter name as shown in schemas and error messages.
    pub name: &'static str,
    /// Kind the host validates supplied arguments against.
    pub kind: ParamKind,
    /// Whether the caller must supply this parameter.
    pub required: bool,
    /// Whether this parameter absorbs all remaining positional arguments.
    /// Only valid in last position.
    pub multiple: bool,
}

impl Param {
    /// A required, single-valued parameter.
    #[must_use]
    pub const fn required(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            multiple: false,
        }
    }

    /// An optional, single-valued parameter.
    #[must_use]
    pub const fn optional(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            multiple: false,
        }
    }

    /// A required parameter that absorbs all remaining positional arguments.
    #[must_use]
    pub const fn multiple(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            multiple: true,
        }
    }
}
