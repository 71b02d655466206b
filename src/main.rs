use std::time::Duration;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use ddic::config::DdicConfig;
use ddic::construct::construct;
use ddic::demo;
use ddic::error::DdicError;
use ddic::execution::{DirectExecutorBridge, TimeoutExecutorBridge};
use ddic::log::set_log_level;
use ddic::pool::InMemorySequenceCollection;
use ddic::trackers::DiagnosticsContext;

#[derive(Debug, Parser)]
#[command(name = "ddic", about = "Demand-driven input construction over a demo class model")]
struct Cli {
    /// Which registered class to construct, e.g. demo.Point, demo.Circle, demo.NullFactory
    #[arg(default_value = "demo.Point")]
    target: String,

    /// Path to a TOML config file layered over the built-in defaults
    #[arg(long)]
    config: Option<String>,

    /// Raise the log level (repeat for more detail); overrides config's log_level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Require an exact type match rather than accepting assignable subtypes
    #[arg(long)]
    exact: bool,

    /// Only return sequences whose terminal type can itself be a receiver
    #[arg(long)]
    only_receivers: bool,

    /// Random seed, for reproducible runs
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<(), DdicError> {
    let args = Cli::parse();
    let config = DdicConfig::load(args.config.as_deref())?;
    set_log_level(if args.verbose > 0 { 2 + args.verbose } else { config.log_level });

    let demo = demo::build();
    let pool = InMemorySequenceCollection::new();
    demo::seed_int_literal(&pool, demo.int_ty, 0);
    demo::seed_int_literal(&pool, demo.int_ty, 1);
    demo::seed_int_literal(&pool, demo.int_ty, 7);

    let target = demo.model.resolve(&args.target)?;

    let diagnostics = DiagnosticsContext::new();
    let mut rng = StdRng::seed_from_u64(args.seed);
    let executor = TimeoutExecutorBridge::new(DirectExecutorBridge, Duration::from_millis(config.execution_timeout_ms));
    let results = construct(
        target,
        args.exact || config.exact_type_match_default,
        args.only_receivers || config.only_receivers_default,
        config.max_producers_per_call,
        &demo.model,
        &pool,
        &executor,
        &diagnostics,
        &mut rng,
    );

    println!("constructed {} sequence(s) terminating at {:?}", results.len(), target);
    for sequence in &results {
        println!("  {} statement(s): {:?}", sequence.size(), sequence.statements);
    }
    Ok(())
}
