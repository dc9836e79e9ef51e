use seriesfn_types::{RequestContext, Series, sample_count};

use crate::SeriesFnError;

/// Step the original call-site defaults to when `seconds` is omitted by the
/// host. The registered schema itself marks `seconds` required; this constant
/// is for hosts that reproduce the defaulting at their boundary.
pub const DEFAULT_STEP_SECONDS: i64 = 10;

/// The `value` parameter of [`constant_series`]: a number, or the `"null"`
/// sentinel producing a series of entirely absent samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstantValue {
    /// Every sample equals this value.
    Number(f64),
    /// Every sample is absent.
    Null,
}

impl ConstantValue {
    /// Rendering used for the synthesized series' display name. Integral
    /// numbers render without a trailing `.0`, matching the host's literal.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Number(v) => v.to_string(),
            Self::Null => "null".to_string(),
        }
    }
}

/// Synthesize exactly one series spanning the request window with every
/// sample equal to `value`, stepping `step_seconds` at a time.
///
/// Samples are generated from `start` to `end` exclusive, so the count is
/// `ceil((end - start) / step_seconds)` and the result composes with other
/// host-generated series over the same window. A degenerate window
/// (`end <= start`) yields a zero-sample series, not an error.
///
/// The display name is the rendered value; the path expression is the
/// canonical call, `constantSeries(<value>)`.
///
/// # Errors
/// Returns `Err(SeriesFnError::InvalidArg)` if `step_seconds` is not
/// positive.
///
/// ```
/// use seriesfn::{ConstantValue, constant_series};
/// use seriesfn_types::RequestContext;
///
/// let ctx = RequestContext::from_epoch(0, 100).unwrap();
/// let out = constant_series(&ctx, ConstantValue::Number(5.0), 10).unwrap();
/// assert_eq!(out.len(), 1);
/// assert_eq!(out[0].name, "5");
/// assert_eq!(out[0].path_expression, "constantSeries(5)");
/// assert_eq!(out[0].values, vec![Some(5.0); 10]);
/// ```
pub fn constant_series(
    ctx: &RequestContext,
    value: ConstantValue,
    step_seconds: i64,
) -> Result<Vec<Series>, SeriesFnError> {
    if step_seconds <= 0 {
        return Err(SeriesFnError::invalid_arg(format!(
            "constantSeries step must be a positive number of seconds, got {step_seconds}"
        )));
    }

    let start = ctx.start_epoch();
    let end = ctx.end_epoch();
    let sample = match value {
        ConstantValue::Number(v) => Some(v),
        ConstantValue::Null => None,
    };
    let values = vec![sample; sample_count(start, end, step_seconds)];

    let rendered = value.render();
    let mut series = Series::new(rendered.clone(), start, end, step_seconds, values);
    series.path_expression = format!("constantSeries({rendered})");
    Ok(vec![series])
}
