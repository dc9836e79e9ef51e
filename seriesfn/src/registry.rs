//! Name-to-function registry with registration-time schema validation.
//!
//! The host resolves functions referenced by a query expression through this
//! registry: it looks the name up, validates the positional arguments against
//! the declared [`Param`] schema (with the coercions described on
//! [`FunctionRegistry::evaluate`]), and dispatches to the handler.

use std::collections::HashMap;

use seriesfn_types::{ArgValue, GroupKey, NodeSpec, Param, ParamKind, RequestContext, Series};

use crate::SeriesFnError;
use crate::functions::alias_by_node::alias_by_node;
use crate::functions::constant_series::{ConstantValue, constant_series};
use crate::functions::lowest_min::lowest_min;

/// Group tag the stock functions register under.
pub const CUSTOM_SIA: GroupKey = GroupKey::new("CustomSIA");

/// Signature shared by every registered transform.
///
/// Handlers receive the per-request context and the already-kind-checked
/// positional arguments, and hand the resulting series list back to the host.
pub type Handler = fn(&RequestContext, Vec<ArgValue>) -> Result<Vec<Series>, SeriesFnError>;

/// A registered function: host-facing name, group tag, parameter schema, and
/// handler.
#[derive(Debug, Clone)]
pub struct FunctionSpec {
    /// Name the host's query expressions reference, e.g. `lowestMin`.
    pub name: &'static str,
    /// Capability group the function belongs to.
    pub group: GroupKey,
    /// Declared positional parameters, validated at registration time.
    pub params: Vec<Param>,
    /// The callable dispatched for this name.
    pub handler: Handler,
}

impl FunctionSpec {
    /// Construct a spec; validation happens when it is registered.
    #[must_use]
    pub fn new(name: &'static str, group: GroupKey, params: Vec<Param>, handler: Handler) -> Self {
        Self {
            name,
            group,
            params,
            handler,
        }
    }
}

/// Registry mapping function names to validated [`FunctionSpec`]s.
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    functions: HashMap<&'static str, FunctionSpec>,
}

impl FunctionRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Create a registry with the stock functions (`lowestMin`,
    /// `constantSeries`, `aliasByNode`) registered under the
    /// [`CUSTOM_SIA`] group.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut reg = Self::new();
        for spec in stock_specs() {
            // Stock schemas are statically well-formed.
            reg.register(spec).expect("stock function schema is valid");
        }
        reg
    }

    /// Register a function, validating its schema first.
    ///
    /// # Errors
    /// Returns `Err(SeriesFnError::Registration)` if the name is empty or
    /// already taken, the schema declares no parameters, parameter names
    /// collide, a required parameter follows an optional one, or a `multiple`
    /// parameter is not in last position.
    pub fn register(&mut self, spec: FunctionSpec) -> Result<(), SeriesFnError> {
        validate_spec(&spec)?;
        if self.functions.contains_key(spec.name) {
            return Err(SeriesFnError::registration(
                spec.name,
                "a function with this name is already registered",
            ));
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            function = spec.name,
            group = spec.group.as_str(),
            params = spec.params.len(),
            "registered series function"
        );
        self.functions.insert(spec.name, spec);
        Ok(())
    }

    /// Look up a registered function by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FunctionSpec> {
        self.functions.get(name)
    }

    /// Whether a function is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Names of all registered functions, sorted for stable iteration.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatch `name` with positional `args`, checking them against the
    /// declared schema first.
    ///
    /// Kind checking admits these coercions:
    /// - `integer` arguments satisfy `float` parameters;
    /// - the literal text `"null"` satisfies a `float` parameter (the
    ///   constant-series all-absent sentinel);
    /// - `node-or-tag` parameters accept non-negative integers (token
    ///   positions) and strings (literals).
    ///
    /// # Errors
    /// - `UnknownFunction` if no function is registered under `name`.
    /// - `InvalidArg` on missing required parameters, surplus arguments, or
    ///   kind mismatches.
    /// - Whatever the dispatched function itself returns.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, ctx, args), fields(args = args.len()))
    )]
    pub fn evaluate(
        &self,
        name: &str,
        ctx: &RequestContext,
        args: Vec<ArgValue>,
    ) -> Result<Vec<Series>, SeriesFnError> {
        let spec = self
            .get(name)
            .ok_or_else(|| SeriesFnError::unknown_function(name))?;
        check_args(spec, &args)?;
        (spec.handler)(ctx, args)
    }
}

fn validate_spec(spec: &FunctionSpec) -> Result<(), SeriesFnError> {
    if spec.name.is_empty() {
        return Err(SeriesFnError::registration(
            "<unnamed>",
            "function name must not be empty",
        ));
    }
    if spec.params.is_empty() {
        return Err(SeriesFnError::registration(
            spec.name,
            "schema must declare at least one parameter",
        ));
    }
    for (i, param) in spec.params.iter().enumerate() {
        if spec.params[..i].iter().any(|p| p.name == param.name) {
            return Err(SeriesFnError::registration(
                spec.name,
                format!("duplicate parameter name '{}'", param.name),
            ));
        }
        if param.multiple && i != spec.params.len() - 1 {
            return Err(SeriesFnError::registration(
                spec.name,
                format!("multiple-valued parameter '{}' must be last", param.name),
            ));
        }
        if param.required && spec.params[..i].iter().any(|p| !p.required) {
            return Err(SeriesFnError::registration(
                spec.name,
                format!(
                    "required parameter '{}' follows an optional one",
                    param.name
                ),
            ));
        }
    }
    Ok(())
}

fn check_args(spec: &FunctionSpec, args: &[ArgValue]) -> Result<(), SeriesFnError> {
    let mut idx = 0;
    for param in &spec.params {
        if param.multiple {
            let rest = &args[idx..];
            if rest.is_empty() && param.required {
                return Err(missing(spec.name, param));
            }
            for arg in rest {
                check_kind(spec.name, param, arg)?;
            }
            idx = args.len();
            continue;
        }
        match args.get(idx) {
            Some(arg) => {
                check_kind(spec.name, param, arg)?;
                idx += 1;
            }
            None if param.required => return Err(missing(spec.name, param)),
            None => {}
        }
    }
    if idx < args.len() {
        return Err(SeriesFnError::invalid_arg(format!(
            "{}: expected at most {} argument(s), got {}",
            spec.name,
            spec.params.len(),
            args.len()
        )));
    }
    Ok(())
}

fn missing(function: &str, param: &Param) -> SeriesFnError {
    SeriesFnError::invalid_arg(format!(
        "{function}: missing required parameter '{}'",
        param.name
    ))
}

fn check_kind(function: &str, param: &Param, arg: &ArgValue) -> Result<(), SeriesFnError> {
    let ok = match param.kind {
        ParamKind::SeriesList => matches!(arg, ArgValue::SeriesList(_)),
        ParamKind::Integer => matches!(arg, ArgValue::Integer(_)),
        ParamKind::Float => matches!(
            arg,
            ArgValue::Integer(_) | ArgValue::Float(_)
        ) || matches!(arg, ArgValue::Text(s) if s == "null"),
        ParamKind::String => matches!(arg, ArgValue::Text(_)),
        ParamKind::NodeOrTag => matches!(arg, ArgValue::Integer(_) | ArgValue::Text(_)),
        _ => false,
    };
    if ok {
        Ok(())
    } else {
        Err(SeriesFnError::invalid_arg(format!(
            "{function}: parameter '{}' expects {}, got {}",
            param.name,
            param.kind,
            arg.kind_name()
        )))
    }
}

fn stock_specs() -> Vec<FunctionSpec> {
    vec![
        FunctionSpec::new(
            "lowestMin",
            CUSTOM_SIA,
            vec![
                Param::required("seriesList", ParamKind::SeriesList),
                Param::required("n", ParamKind::Integer),
            ],
            eval_lowest_min,
        ),
        FunctionSpec::new(
            "constantSeries",
            CUSTOM_SIA,
            vec![
                Param::required("value", ParamKind::Float),
                Param::required("seconds", ParamKind::Integer),
            ],
            eval_constant_series,
        ),
        FunctionSpec::new(
            "aliasByNode",
            CUSTOM_SIA,
            vec![
                Param::required("seriesList", ParamKind::SeriesList),
                Param::multiple("nodes", ParamKind::NodeOrTag),
            ],
            eval_alias_by_node,
        ),
    ]
}

fn eval_lowest_min(
    _ctx: &RequestContext,
    args: Vec<ArgValue>,
) -> Result<Vec<Series>, SeriesFnError> {
    let mut args = args.into_iter();
    let series = take_series("lowestMin", "seriesList", args.next())?;
    let n = take_integer("lowestMin", "n", args.next())?;
    Ok(lowest_min(series, n))
}

fn eval_constant_series(
    ctx: &RequestContext,
    args: Vec<ArgValue>,
) -> Result<Vec<Series>, SeriesFnError> {
    let mut args = args.into_iter();
    let value = take_constant("constantSeries", "value", args.next())?;
    let seconds = take_integer("constantSeries", "seconds", args.next())?;
    constant_series(ctx, value, seconds)
}

fn eval_alias_by_node(
    _ctx: &RequestContext,
    args: Vec<ArgValue>,
) -> Result<Vec<Series>, SeriesFnError> {
    let mut args = args.into_iter();
    let mut series = take_series("aliasByNode", "seriesList", args.next())?;
    let nodes = args
        .map(|arg| take_node("aliasByNode", "nodes", arg))
        .collect::<Result<Vec<NodeSpec>, _>>()?;
    alias_by_node(&mut series, &nodes)?;
    Ok(series)
}

fn take_series(
    function: &str,
    param: &str,
    arg: Option<ArgValue>,
) -> Result<Vec<Series>, SeriesFnError> {
    match arg {
        Some(ArgValue::SeriesList(series)) => Ok(series),
        other => Err(mismatch(function, param, "series-list", other.as_ref())),
    }
}

fn take_integer(function: &str, param: &str, arg: Option<ArgValue>) -> Result<i64, SeriesFnError> {
    match arg {
        Some(ArgValue::Integer(n)) => Ok(n),
        other => Err(mismatch(function, param, "integer", other.as_ref())),
    }
}

fn take_constant(
    function: &str,
    param: &str,
    arg: Option<ArgValue>,
) -> Result<ConstantValue, SeriesFnError> {
    match arg {
        Some(ArgValue::Integer(n)) => {
            // i64 -> f64 may round for magnitudes beyond 2^53; constant
            // values that large are not meaningful render inputs.
            #[allow(clippy::cast_precision_loss)]
            let v = n as f64;
            Ok(ConstantValue::Number(v))
        }
        Some(ArgValue::Float(v)) => Ok(ConstantValue::Number(v)),
        Some(ArgValue::Text(s)) if s == "null" => Ok(ConstantValue::Null),
        other => Err(mismatch(function, param, "float", other.as_ref())),
    }
}

fn take_node(function: &str, param: &str, arg: ArgValue) -> Result<NodeSpec, SeriesFnError> {
    match arg {
        ArgValue::Integer(n) => {
            let index = usize::try_from(n).map_err(|_| {
                SeriesFnError::invalid_arg(format!(
                    "{function}: parameter '{param}' node index must be non-negative, got {n}"
                ))
            })?;
            Ok(NodeSpec::Index(index))
        }
        ArgValue::Text(s) => Ok(NodeSpec::Literal(s)),
        other => Err(mismatch(function, param, "node-or-tag", Some(&other))),
    }
}

fn mismatch(function: &str, param: &str, expected: &str, got: Option<&ArgValue>) -> SeriesFnError {
    match got {
        Some(arg) => SeriesFnError::invalid_arg(format!(
            "{function}: parameter '{param}' expects {expected}, got {}",
            arg.kind_name()
        )),
        None => SeriesFnError::invalid_arg(format!(
            "{function}: missing required parameter '{param}'"
        )),
    }
}
