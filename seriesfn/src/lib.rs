//! seriesfn
//!
//! Auxiliary metric-rendering transforms for a time-series visualization
//! host, dispatched by name through a validated function registry.
//!
//! - `functions`: the transforms themselves (`lowest_min`, `constant_series`,
//!   `alias_by_node`), pure and synchronous.
//! - `registry`: the name→function mapping the host resolves query
//!   expressions against, with registration-time schema validation.
//! - `error`: the unified [`SeriesFnError`] type.
//!
//! Ownership contract
//! ------------------
//! At the registry boundary every function consumes its series-list argument
//! and returns a series list: `lowest_min` returns a selected subset,
//! `constant_series` a fresh singleton, and `aliasByNode` the same collection
//! with names rewritten. The typed [`alias_by_node`] additionally exposes the
//! in-place form for hosts that hold the buffer.
#![warn(missing_docs)]

/// The unified error type and constructor helpers.
pub mod error;
/// The series transform functions.
pub mod functions;
/// The validated name-to-function registry and dispatch.
pub mod registry;

pub use error::SeriesFnError;
pub use functions::alias_by_node::alias_by_node;
pub use functions::constant_series::{ConstantValue, DEFAULT_STEP_SECONDS, constant_series};
pub use functions::lowest_min::lowest_min;
pub use registry::{CUSTOM_SIA, FunctionRegistry, FunctionSpec, Handler};
pub use seriesfn_types::{
    ArgValue, GroupKey, NodeSpec, Param, ParamKind, RequestContext, Series, SeriesList,
    sample_count,
};
