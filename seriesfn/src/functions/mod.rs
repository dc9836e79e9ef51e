//! The series transform functions.
//!
//! Modules include:
//! - `lowest_min`: select the series with the smallest minimum values
//! - `constant_series`: synthesize a constant-valued series from the request window
//! - `alias_by_node`: rename series from dot-separated name components
/// Rename series from dot-separated components of their metric paths.
pub mod alias_by_node;
/// Synthesize a constant-valued series spanning the request window.
pub mod constant_series;
/// Selection of series by smallest minimum value.
pub mod lowest_min;
