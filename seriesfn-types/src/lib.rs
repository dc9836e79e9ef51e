//! Series, request-context, and parameter-schema DTOs for the `seriesfn` transform library.
#![warn(missing_docs)]

mod context;
mod group;
mod node;
mod param;
mod series;
mod value;

pub use context::RequestContext;
pub use group::GroupKey;
pub use node::NodeSpec;
pub use param::{Param, ParamKind};
pub use series::{Series, SeriesList, sample_count};
pub use value::ArgValue;
