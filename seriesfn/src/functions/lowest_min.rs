use seriesfn_types::Series;

/// Select the `n` series with the smallest minimum sample values.
///
/// The minimum of each series is taken over present samples only (see
/// [`Series::min_value`]); a series with no present samples compares as
/// positive infinity and therefore sorts last. The result is sorted ascending
/// by minimum, and the sort is stable, so ties keep first-occurrence order.
///
/// Edge cases: `n <= 0` returns an empty list; `n` larger than the input
/// returns every series (sorted); an empty input returns an empty list.
/// Input series are never mutated, only selected.
///
/// ```
/// use seriesfn::lowest_min;
/// use seriesfn_types::Series;
///
/// let mk = |name: &str, v: f64| Series::new(name, 0, 30, 10, vec![Some(v), Some(v + 1.0), None]);
/// let picked = lowest_min(vec![mk("web1", 4.0), mk("web2", 1.0), mk("web3", 9.0)], 2);
/// let names: Vec<&str> = picked.iter().map(|s| s.name.as_str()).collect();
/// assert_eq!(names, ["web2", "web1"]);
/// ```
#[must_use]
pub fn lowest_min(mut series: Vec<Series>, n: i64) -> Vec<Series> {
    if n <= 0 || series.is_empty() {
        return Vec::new();
    }
    series.sort_by(|a, b| sort_key(a).total_cmp(&sort_key(b)));
    let keep = usize::try_from(n).unwrap_or(usize::MAX);
    series.truncate(keep);
    series
}

fn sort_key(s: &Series) -> f64 {
    s.min_value().unwrap_or(f64::INFINITY)
}
