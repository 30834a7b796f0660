// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use silk_data_range::{
    app::{self, RunOutcome},
    args::Args,
    config::RunConfig,
};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = RunConfig::from(args);
    match app::run(&config) {
        Ok(RunOutcome::Reported { partitions, failures }) => {
            tracing::info!(partitions, failures, "inventory complete");
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::DryRun) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            if app::is_config_failure(&e) {
                eprintln!("hint: --datapath must name the directory that holds silk.conf");
            }
            ExitCode::FAILURE
        }
    }
}

// RUST_LOG wins; otherwise only warnings, or debug output from this workspace with --verbose.
fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,silk_data_range=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt().with_env_filter(filter).with_target(true).with_writer(std::io::stderr).init();
}
