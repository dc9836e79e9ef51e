use seriesfn::{CUSTOM_SIA, FunctionRegistry, FunctionSpec, SeriesFnError};
use seriesfn_types::{ArgValue, Param, ParamKind, RequestContext, Series};

fn ctx() -> RequestContext {
    RequestContext::from_epoch(0, 100).expect("valid bounds")
}

fn series(name: &str, values: &[Option<f64>]) -> Series {
    let step = 10;
    let end = i64::try_from(values.len()).unwrap() * step;
    Series::new(name, 0, end, step, values.to_vec())
}

fn series_arg(list: Vec<Series>) -> ArgValue {
    ArgValue::SeriesList(list)
}

#[test]
fn defaults_register_the_three_stock_functions() {
    let reg = FunctionRegistry::with_defaults();
    assert_eq!(reg.names(), ["aliasByNode", "constantSeries", "lowestMin"]);

    for name in reg.names() {
        let spec = reg.get(name).expect("registered");
        assert_eq!(spec.group, CUSTOM_SIA);
    }
}

#[test]
fn stock_schemas_match_the_host_table() {
    let reg = FunctionRegistry::with_defaults();

    let lowest = reg.get("lowestMin").expect("registered");
    assert_eq!(lowest.params.len(), 2);
    assert_eq!(lowest.params[0], Param::required("seriesList", ParamKind::SeriesList));
    assert_eq!(lowest.params[1], Param::required("n", ParamKind::Integer));

    let constant = reg.get("constantSeries").expect("registered");
    assert_eq!(constant.params[0], Param::required("value", ParamKind::Float));
    assert_eq!(constant.params[1], Param::required("seconds", ParamKind::Integer));

    let alias = reg.get("aliasByNode").expect("registered");
    assert_eq!(alias.params[0], Param::required("seriesList", ParamKind::SeriesList));
    assert_eq!(alias.params[1], Param::multiple("nodes", ParamKind::NodeOrTag));
}

#[test]
fn schemas_serialize_for_host_consumption() {
    let reg = FunctionRegistry::with_defaults();
    let alias = reg.get("aliasByNode").expect("registered");
    let json = serde_json::to_value(&alias.params).expect("serialize schema");
    assert_eq!(json[0]["name"], "seriesList");
    assert_eq!(json[1]["name"], "nodes");
    assert_eq!(json[1]["multiple"], true);
}

#[test]
fn evaluate_dispatches_lowest_min() {
    let reg = FunctionRegistry::with_defaults();
    let list = vec![
        series("a", &[Some(5.0)]),
        series("b", &[Some(1.0)]),
        series("c", &[Some(3.0)]),
    ];
    let out = reg
        .evaluate("lowestMin", &ctx(), vec![series_arg(list), ArgValue::Integer(2)])
        .expect("valid call");
    let names: Vec<&str> = out.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["b", "c"]);
}

#[test]
fn evaluate_dispatches_constant_series_with_numeric_and_null_values() {
    let reg = FunctionRegistry::with_defaults();

    // Integer coerces to the float parameter.
    let out = reg
        .evaluate(
            "constantSeries",
            &ctx(),
            vec![ArgValue::Integer(5), ArgValue::Integer(10)],
        )
        .expect("valid call");
    assert_eq!(out[0].values, vec![Some(5.0); 10]);
    assert_eq!(out[0].name, "5");

    // The "null" sentinel produces absent samples.
    let out = reg
        .evaluate(
            "constantSeries",
            &ctx(),
            vec![ArgValue::Text("null".to_string()), ArgValue::Integer(50)],
        )
        .expect("valid call");
    assert_eq!(out[0].values, vec![None; 2]);
}

#[test]
fn evaluate_dispatches_alias_by_node_with_mixed_nodes() {
    let reg = FunctionRegistry::with_defaults();
    let list = vec![series("ganglia.host1.cpu.load5", &[Some(1.0)])];
    let out = reg
        .evaluate(
            "aliasByNode",
            &ctx(),
            vec![
                series_arg(list),
                ArgValue::Text("server".to_string()),
                ArgValue::Integer(1),
            ],
        )
        .expect("valid call");
    assert_eq!(out[0].name, "server.host1");
}

#[test]
fn a_single_bare_integer_node_is_accepted() {
    let reg = FunctionRegistry::with_defaults();
    let list = vec![series("ganglia.host1.cpu.load5", &[Some(1.0)])];
    let out = reg
        .evaluate(
            "aliasByNode",
            &ctx(),
            vec![series_arg(list), ArgValue::Integer(1)],
        )
        .expect("valid call");
    assert_eq!(out[0].name, "host1");
}

#[test]
fn unknown_function_is_reported_by_name() {
    let reg = FunctionRegistry::with_defaults();
    let err = reg
        .evaluate("sumSeries", &ctx(), vec![])
        .expect_err("not registered");
    assert!(matches!(err, SeriesFnError::UnknownFunction { name } if name == "sumSeries"));
}

#[test]
fn kind_mismatches_are_rejected_before_dispatch() {
    let reg = FunctionRegistry::with_defaults();

    // Float where an integer is expected.
    let err = reg
        .evaluate(
            "lowestMin",
            &ctx(),
            vec![series_arg(vec![]), ArgValue::Float(2.5)],
        )
        .expect_err("n must be an integer");
    assert!(matches!(err, SeriesFnError::InvalidArg(_)));

    // Arbitrary text is not a valid constant value; only "null" is.
    let err = reg
        .evaluate(
            "constantSeries",
            &ctx(),
            vec![ArgValue::Text("five".to_string()), ArgValue::Integer(10)],
        )
        .expect_err("only the null sentinel is textual");
    assert!(matches!(err, SeriesFnError::InvalidArg(_)));
}

#[test]
fn missing_and_surplus_arguments_are_rejected() {
    let reg = FunctionRegistry::with_defaults();

    let err = reg
        .evaluate("lowestMin", &ctx(), vec![series_arg(vec![])])
        .expect_err("n is required");
    assert!(matches!(err, SeriesFnError::InvalidArg(_)));

    let err = reg
        .evaluate(
            "lowestMin",
            &ctx(),
            vec![
                series_arg(vec![]),
                ArgValue::Integer(1),
                ArgValue::Integer(2),
            ],
        )
        .expect_err("too many arguments");
    assert!(matches!(err, SeriesFnError::InvalidArg(_)));

    // aliasByNode's multiple nodes parameter requires at least one node.
    let err = reg
        .evaluate("aliasByNode", &ctx(), vec![series_arg(vec![])])
        .expect_err("nodes are required");
    assert!(matches!(err, SeriesFnError::InvalidArg(_)));
}

#[test]
fn negative_node_index_is_rejected() {
    let reg = FunctionRegistry::with_defaults();
    let list = vec![series("a.b.c", &[Some(1.0)])];
    let err = reg
        .evaluate(
            "aliasByNode",
            &ctx(),
            vec![series_arg(list), ArgValue::Integer(-1)],
        )
        .expect_err("indices are 0-based");
    assert!(matches!(err, SeriesFnError::InvalidArg(_)));
}

#[test]
fn constant_series_roundtrips_through_lowest_min() {
    let reg = FunctionRegistry::with_defaults();
    let constant = reg
        .evaluate(
            "constantSeries",
            &ctx(),
            vec![ArgValue::Float(42.5), ArgValue::Integer(10)],
        )
        .expect("valid call");

    let out = reg
        .evaluate(
            "lowestMin",
            &ctx(),
            vec![ArgValue::SeriesList(constant.clone()), ArgValue::Integer(1)],
        )
        .expect("valid call");
    assert_eq!(out, constant);
    assert_eq!(out[0].min_value(), Some(42.5));
}

#[test]
fn registration_validates_schemas() {
    fn noop(
        _ctx: &RequestContext,
        _args: Vec<ArgValue>,
    ) -> Result<Vec<Series>, SeriesFnError> {
        Ok(Vec::new())
    }

    let mut reg = FunctionRegistry::new();

    // Empty schema.
    let err = reg
        .register(FunctionSpec::new("empty", CUSTOM_SIA, vec![], noop))
        .expect_err("schema must not be empty");
    assert!(matches!(err, SeriesFnError::Registration { .. }));

    // Multiple-valued parameter not in last position.
    let err = reg
        .register(FunctionSpec::new(
            "badMultiple",
            CUSTOM_SIA,
            vec![
                Param::multiple("nodes", ParamKind::NodeOrTag),
                Param::required("n", ParamKind::Integer),
            ],
            noop,
        ))
        .expect_err("multiple must be last");
    assert!(matches!(err, SeriesFnError::Registration { .. }));

    // Duplicate parameter names.
    let err = reg
        .register(FunctionSpec::new(
            "dupes",
            CUSTOM_SIA,
            vec![
                Param::required("n", ParamKind::Integer),
                Param::required("n", ParamKind::Integer),
            ],
            noop,
        ))
        .expect_err("parameter names must be unique");
    assert!(matches!(err, SeriesFnError::Registration { .. }));

    // Required after optional.
    let err = reg
        .register(FunctionSpec::new(
            "gapped",
            CUSTOM_SIA,
            vec![
                Param::optional("seconds", ParamKind::Integer),
                Param::required("value", ParamKind::Float),
            ],
            noop,
        ))
        .expect_err("required cannot follow optional");
    assert!(matches!(err, SeriesFnError::Registration { .. }));

    // Name collision with an existing registration.
    reg.register(FunctionSpec::new(
        "mine",
        CUSTOM_SIA,
        vec![Param::required("n", ParamKind::Integer)],
        noop,
    ))
    .expect("first registration succeeds");
    let err = reg
        .register(FunctionSpec::new(
            "mine",
            CUSTOM_SIA,
            vec![Param::required("n", ParamKind::Integer)],
            noop,
        ))
        .expect_err("duplicate function name");
    assert!(matches!(err, SeriesFnError::Registration { .. }));
}

#[test]
fn custom_functions_can_be_registered_and_dispatched() {
    fn first_only(
        _ctx: &RequestContext,
        args: Vec<ArgValue>,
    ) -> Result<Vec<Series>, SeriesFnError> {
        let mut args = args.into_iter();
        match args.next() {
            Some(ArgValue::SeriesList(mut list)) => {
                list.truncate(1);
                Ok(list)
            }
            _ => Err(SeriesFnError::invalid_arg("firstOnly: expected a series list")),
        }
    }

    let mut reg = FunctionRegistry::with_defaults();
    reg.register(FunctionSpec::new(
        "firstOnly",
        CUSTOM_SIA,
        vec![Param::required("seriesList", ParamKind::SeriesList)],
        first_only,
    ))
    .expect("valid spec");
    assert!(reg.contains("firstOnly"));

    let list = vec![series("a", &[Some(1.0)]), series("b", &[Some(2.0)])];
    let out = reg
        .evaluate("firstOnly", &ctx(), vec![series_arg(list)])
        .expect("valid call");
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].name, "a");
}
