use once_cell::sync::Lazy;
use regex::Regex;
use seriesfn_types::{NodeSpec, Series};

use crate::SeriesFnError;

// Longest run of identifier/wildcard/hyphen/dot characters, skipping one
// optional `someFunc(...)` wrapper around the actual metric path.
static METRIC_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:.*\()?(?P<name>[-\w*.]+)").expect("metric path pattern compiles"));

/// Rename every series in place from dot-separated components of its metric
/// path.
///
/// The metric path is extracted from the series name (stripping an optional
/// function-call wrapper such as `sumSeries(web.cpu.load5)`) and split on
/// `.`. Each node then selects the token at a 0-based position
/// ([`NodeSpec::Index`]) or contributes a literal string
/// ([`NodeSpec::Literal`]); the pieces are joined with `.` to form the new
/// display name.
///
/// The call is atomic: every new name is computed before any series is
/// renamed, so on error no series in the call is mutated. `path_expression`
/// is left untouched. Callers that retain other handles to the buffer observe
/// the renamed values; that shared-mutation contract is deliberate.
///
/// # Errors
/// - `InvalidArg` if `nodes` is empty.
/// - `IndexOutOfBounds` if an index node addresses past the extracted tokens
///   of any series.
/// - `Data` if a series name contains no extractable metric path.
///
/// ```
/// use seriesfn::alias_by_node;
/// use seriesfn_types::{NodeSpec, Series};
///
/// let mut list = vec![Series::new("ganglia.host1.cpu.load5", 0, 60, 10, vec![])];
/// alias_by_node(&mut list, &[NodeSpec::Index(1)]).unwrap();
/// assert_eq!(list[0].name, "host1");
///
/// alias_by_node(&mut list, &["server".into(), NodeSpec::Index(0)]).unwrap();
/// assert_eq!(list[0].name, "server.host1");
/// ```
pub fn alias_by_node(series: &mut [Series], nodes: &[NodeSpec]) -> Result<(), SeriesFnError> {
    if nodes.is_empty() {
        return Err(SeriesFnError::invalid_arg(
            "aliasByNode requires at least one node",
        ));
    }

    // Two-phase: compute every name before committing any, so a failure on a
    // later series leaves the whole call untouched.
    let mut renamed = Vec::with_capacity(series.len());
    for s in series.iter() {
        renamed.push(alias_for(&s.name, nodes)?);
    }
    for (s, name) in series.iter_mut().zip(renamed) {
        s.name = name;
    }
    Ok(())
}

fn alias_for(name: &str, nodes: &[NodeSpec]) -> Result<String, SeriesFnError> {
    let caps = METRIC_PATH
        .captures(name)
        .ok_or_else(|| SeriesFnError::data(format!("no metric path in series name '{name}'")))?;
    let tokens: Vec<&str> = caps["name"].split('.').collect();

    let mut pieces = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            NodeSpec::Index(i) => {
                let token = tokens.get(*i).ok_or_else(|| SeriesFnError::IndexOutOfBounds {
                    index: *i,
                    tokens: tokens.len(),
                    series: name.to_string(),
                })?;
                pieces.push((*token).to_string());
            }
            NodeSpec::Literal(s) => pieces.push(s.clone()),
        }
    }
    Ok(pieces.join("."))
}
