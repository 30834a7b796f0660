// src/app.rs
use std::io::{self, Write};

use anyhow::{Context, Result};
use silk_data_range_domain::{DEFAULT_DATA_FILE_PATTERN, DataFilePattern};
use silk_data_range_infra::{SilkConfCatalog, StdDirectoryLister};
use silk_data_range_shared_kernel::SilkRangeError;
use silk_data_range_usecase::{BuildInventory, ClassTypeDiscovery, InventoryPlan};

use crate::{
    config::RunConfig,
    options::OutputFormat,
    presentation::{ConsoleNotifier, render_report},
};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Discovery was reported and `--dryrun` stopped the run.
    DryRun,
    /// The report was written; `failures` partitions or classes could not be searched.
    Reported { partitions: usize, failures: usize },
}

/// True when `err` was caused by an unreadable `silk.conf`.
pub fn is_config_failure(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<SilkRangeError>())
        .any(SilkRangeError::is_config_error)
}

pub fn run(config: &RunConfig) -> Result<RunOutcome> {
    let (outcome, _, _) = run_with_writers(config, io::stdout(), io::stderr())?;
    Ok(outcome)
}

/// Runs discovery, search and reporting against the given sinks and hands them back.
pub fn run_with_writers<O, E>(config: &RunConfig, out: O, err: E) -> Result<(RunOutcome, O, E)>
where
    O: Write + Send,
    E: Write + Send,
{
    let info_to_err = matches!(config.format, OutputFormat::Json);
    let notifier = ConsoleNotifier::new(out, err, config.verbosity, info_to_err);
    notifier.data_paths(&config.data_dir, &config.silk_conf);

    let lister = StdDirectoryLister::new();
    let catalog = SilkConfCatalog::new(&config.silk_conf);
    let selection = ClassTypeDiscovery::new(&lister)
        .select_classes(&config.data_dir, &catalog, config.class_filter.as_ref())
        .context("failed to determine class directories")?;
    notifier.class_selection(&selection);

    if config.dry_run {
        notifier.dry_run_exit();
        let (out, err) = notifier.into_writers();
        return Ok((RunOutcome::DryRun, out, err));
    }

    let plan = InventoryPlan {
        root: config.data_dir.clone(),
        classes: selection.used.into_iter().collect(),
        jobs: config.jobs,
    };
    let pattern = DataFilePattern::new(DEFAULT_DATA_FILE_PATTERN).context("invalid data file pattern")?;
    let output = BuildInventory::new(&lister, &pattern, &notifier)
        .run(&plan)
        .context("failed to build inventory")?;

    let (mut out, err) = notifier.into_writers();
    render_report(&output.inventory, config.format, &mut out).context("failed to emit report")?;

    let outcome = RunOutcome::Reported { partitions: output.inventory.len(), failures: output.failures.len() };
    Ok((outcome, out, err))
}
