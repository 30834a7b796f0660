// src/config.rs
use std::path::PathBuf;

use silk_data_range_infra::SILK_CONF_FILE_NAME;
use silk_data_range_shared_kernel::ClassName;

use crate::{
    args::Args,
    options::{OutputFormat, Verbosity},
};

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub data_dir: PathBuf,
    pub silk_conf: PathBuf,
    pub class_filter: Option<ClassName>,
    pub dry_run: bool,
    pub verbosity: Verbosity,
    pub format: OutputFormat,
    pub jobs: usize,
}

impl RunConfig {
    /// Settings for `data_dir` with every option at its default.
    pub fn for_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            silk_conf: data_dir.join(SILK_CONF_FILE_NAME),
            data_dir,
            class_filter: None,
            dry_run: false,
            verbosity: Verbosity::default(),
            format: OutputFormat::default(),
            jobs: 1,
        }
    }
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        let Args { silkclass, dryrun, datapath, quiet, verbose, format, jobs } = args;
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self {
            class_filter: silkclass.map(ClassName::from),
            dry_run: dryrun,
            verbosity: Verbosity { quiet, verbose },
            format,
            jobs,
            ..Self::for_data_dir(datapath)
        }
    }
}
