use std::io::stdout;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use cpu_speed_test::config::BenchConfig;
use cpu_speed_test::executor::{run_parallel, run_sequential};
use cpu_speed_test::io::{create_progress_bar, create_spinner};
use cpu_speed_test::metrics::Scaling;
use cpu_speed_test::parallel::WorkerCount;
use cpu_speed_test::partition::RemainderPolicy;
use cpu_speed_test::report::ReportWriter;
use cpu_speed_test::system::CoreCounts;

#[derive(Parser, Debug)]
#[command(name = "cpu-speed-test")]
#[command(about = "Measure single-thread vs multi-thread CPU throughput with a prime search", long_about = None)]
struct Args {
    /// Number of worker threads (defaults to number of logical cores)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Disable progress indicators
    #[arg(short, long)]
    quiet: bool,

    /// Log run details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = BenchConfig::new(args.threads, !args.quiet)?;
    let workers = WorkerCount::resolve(config.workers).context("Failed to resolve worker count")?;
    let cores = CoreCounts::detect();
    info!("Using {} worker threads", workers.get());

    let mut report = ReportWriter::new(stdout().lock());
    report.header(config.range)?;

    // Single-thread phase
    let spinner = if config.show_progress {
        Some(create_spinner("single-thread run")?)
    } else {
        None
    };
    let sequential = run_sequential(config.range);
    if let Some(ref pb) = spinner {
        pb.finish_and_clear();
    }
    info!(
        "sequential: {} primes in {:.2?}",
        sequential.value.len(),
        sequential.elapsed
    );
    report.sequential(sequential.elapsed)?;

    report.cores(cores)?;

    // Multi-thread phase
    let progress = if config.show_progress {
        Some(create_progress_bar(workers.get())?)
    } else {
        None
    };
    let parallel = run_parallel(config.range, workers, config.remainder, progress.as_ref())
        .context("Parallel run failed")?;
    if let Some(ref pb) = progress {
        pb.finish_and_clear();
    }
    info!(
        "parallel: {} primes in {:.2?}",
        parallel.value.len(),
        parallel.elapsed
    );
    if config.remainder == RemainderPolicy::AppendToLast
        && parallel.value.len() != sequential.value.len()
    {
        warn!(
            "parallel run found {} primes, sequential run found {}",
            parallel.value.len(),
            sequential.value.len()
        );
    }
    report.parallel(parallel.elapsed)?;

    let scaling = Scaling::compute(sequential.elapsed, parallel.elapsed, workers);
    report.scaling(scaling.as_ref().ok().copied())?;
    scaling.context("Failed to compute speedup")?;

    Ok(())
}
