// src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::options::OutputFormat;

pub const DEFAULT_DATA_DIR: &str = "/data";

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "silk-data-range",
    version = crate::VERSION,
    about = "Figure out what SiLK data is on line by class/type/date range"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Single class name to check; silk.conf classes are not used to filter directories
    #[arg(short = 'c', long = "silkclass", value_name = "CLASS")]
    pub silkclass: Option<String>,

    /// Just show which class directories will and will not be used, then exit
    #[arg(short, long)]
    pub dryrun: bool,

    /// SiLK data parent directory; silk.conf is read from here
    #[arg(short = 'p', long, value_name = "DIR", default_value = DEFAULT_DATA_DIR, value_hint = ValueHint::DirPath)]
    pub datapath: PathBuf,

    /// Drop informational printing while processing
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the paths in use and each partition as it is searched
    #[arg(short, long)]
    pub verbose: bool,

    /// Report format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Partitions searched concurrently (0 = one per CPU)
    #[arg(short = 'j', long, default_value_t = 1, value_name = "N")]
    pub jobs: usize,
}
