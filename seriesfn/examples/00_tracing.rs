use seriesfn::{ArgValue, FunctionRegistry, RequestContext};
use tracing_subscriber::fmt::format::FmtSpan;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,seriesfn=trace (build with --features tracing
    // to see registration and dispatch events).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let registry = FunctionRegistry::with_defaults();
    let ctx = RequestContext::from_epoch(0, 600).ok_or("window out of range")?;

    // Synthesize a constant series over the request window.
    let constant = registry.evaluate(
        "constantSeries",
        &ctx,
        vec![ArgValue::Float(123.456), ArgValue::Integer(60)],
    )?;
    println!(
        "{} -> {} samples",
        constant[0].path_expression,
        constant[0].len()
    );

    // Rename it and pick the lowest minimum.
    let renamed = registry.evaluate(
        "aliasByNode",
        &ctx,
        vec![
            ArgValue::SeriesList(constant),
            ArgValue::Text("demo".to_string()),
            ArgValue::Integer(0),
        ],
    )?;
    let lowest = registry.evaluate(
        "lowestMin",
        &ctx,
        vec![ArgValue::SeriesList(renamed), ArgValue::Integer(1)],
    )?;
    println!("lowest minimum: {} = {:?}", lowest[0].name, lowest[0].min_value());

    Ok(())
}
