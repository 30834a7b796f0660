// src/options.rs
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `CLASS|TYPE|FROM > TO` lines
    #[default]
    Table,
    /// A single JSON document; informational lines move to stderr
    Json,
}

/// Which informational lines are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verbosity {
    pub quiet: bool,
    pub verbose: bool,
}

impl Verbosity {
    /// Discovery summaries and chosen dates.
    pub fn shows_info(self) -> bool {
        !self.quiet
    }

    /// Data paths and per-partition progress.
    pub fn shows_progress(self) -> bool {
        self.verbose
    }
}
