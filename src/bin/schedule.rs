//! Schedule Inspection Binary
//!
//! Prints the learning rate a schedule produces over a range of steps.
//!
//! schedule "invscaling(1, 0.5)" --steps 1000 --every 100
//! schedule --config schedule.json

use clap::Parser;
use stepsize::*;

#[derive(Parser)]
#[command(author, version, about = "Tabulate a learning rate schedule", long_about = None)]
struct Args {
    /// Schedule in compact notation, e.g. "optimal(1000, 0.0001)"
    #[arg(required_unless_present = "config", conflicts_with = "config")]
    schedule: Option<Schedule>,
    /// JSON schedule configuration file
    #[arg(long, short)]
    config: Option<std::path::PathBuf>,
    /// Number of steps to evaluate, starting at 0
    #[arg(long, short, default_value_t = 10)]
    steps: Step,
    /// Print every n-th step
    #[arg(
        long,
        short,
        default_value_t = 1,
        value_parser = clap::builder::RangedU64ValueParser::<Step>::new().range(1..)
    )]
    every: Step,
    /// Log debug records
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(if args.verbose {
        ::log::LevelFilter::Debug
    } else {
        ::log::LevelFilter::Info
    });
    let schedule = match (args.schedule, args.config) {
        (Some(schedule), _) => schedule,
        (None, Some(path)) => Schedule::load(path)?,
        (None, None) => unreachable!("clap requires a schedule or a config"),
    };
    ::log::info!("tabulating {} over {} steps", schedule, args.steps);
    for (step, rate) in schedule
        .rates()
        .take(args.steps)
        .enumerate()
        .step_by(args.every)
    {
        if !rate.is_finite() {
            ::log::warn!("arithmetic failure at step {}: rate is {}", step, rate);
        }
        println!("{:<12}{:e}", step, rate);
    }
    Ok(())
}
