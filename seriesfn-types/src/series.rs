//! The host-facing series payload and sample helpers.

use serde::{Deserialize, Serialize};

/// A named, time-stepped sequence of numeric samples over the half-open
/// interval `[start, end)`.
///
/// Samples may be absent (`None`). Absent samples are excluded from aggregate
/// computations such as [`Series::min_value`]. Host-generated series keep the
/// invariant `values.len() == sample_count(start, end, step)`; this library
/// documents but does not enforce it, since the fetch layer owns generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Display name. Rename transforms mutate this in place.
    pub name: String,
    /// Canonical rendering of the expression that produced this series,
    /// attached for downstream display and debugging.
    pub path_expression: String,
    /// Window start, epoch seconds (inclusive).
    pub start: i64,
    /// Window end, epoch seconds (exclusive).
    pub end: i64,
    /// Step between samples, in seconds. Positive for host-generated series.
    pub step: i64,
    /// Samples in time order; `None` marks an absent datapoint.
    pub values: Vec<Option<f64>>,
}

impl Series {
    /// Construct a series; `path_expression` defaults to the display name.
    pub fn new(
        name: impl Into<String>,
        start: i64,
        end: i64,
        step: i64,
        values: Vec<Option<f64>>,
    ) -> Self {
        let name = name.into();
        Self {
            path_expression: name.clone(),
            name,
            start,
            end,
            step,
            values,
        }
    }

    /// Number of samples (present or absent).
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series carries no samples at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Minimum over present samples only.
    ///
    /// Returns `None` when every sample is absent. NaN samples are ignored
    /// like absent ones so the result is always an ordered value.
    ///
    /// ```
    /// use seriesfn_types::Series;
    ///
    /// let s = Series::new("a", 0, 30, 10, vec![None, Some(3.0), Some(-1.5)]);
    /// assert_eq!(s.min_value(), Some(-1.5));
    ///
    /// let gap = Series::new("b", 0, 20, 10, vec![None, None]);
    /// assert_eq!(gap.min_value(), None);
    /// ```
    #[must_use]
    pub fn min_value(&self) -> Option<f64> {
        self.values
            .iter()
            .flatten()
            .copied()
            .filter(|v| !v.is_nan())
            .min_by(f64::total_cmp)
    }
}

/// An ordered collection of series, as handed around by the render pipeline.
pub type SeriesList = Vec<Series>;

/// Number of samples a generated series spans over `[start, end)` at `step`
/// seconds: `ceil((end - start) / step)`.
///
/// Degenerate windows (`end <= start`) and non-positive steps yield zero.
#[must_use]
pub fn sample_count(start: i64, end: i64, step: i64) -> usize {
    if step <= 0 || end <= start {
        return 0;
    }
    usize::try_from((end - start + step - 1) / step).unwrap_or(0)
}
