// crates/infra/src/silk_conf.rs
use std::{
    collections::BTreeSet,
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

use silk_data_range_ports::catalog::ClassCatalog;
use silk_data_range_shared_kernel::{ClassName, InfrastructureError, Result};

/// Name of the site configuration file inside the data root.
pub const SILK_CONF_FILE_NAME: &str = "silk.conf";

/// Reads recognized class names from a `silk.conf` file.
///
/// Every line whose first token is `class` declares the class named by its
/// second token; all other lines are ignored.
#[derive(Debug, Clone)]
pub struct SilkConfCatalog {
    path: PathBuf,
}

impl SilkConfCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn config_error(&self, source: io::Error) -> InfrastructureError {
        InfrastructureError::ConfigRead { path: self.path.clone(), source }
    }
}

impl ClassCatalog for SilkConfCatalog {
    fn recognized_classes(&self) -> Result<BTreeSet<ClassName>> {
        let file = File::open(&self.path).map_err(|e| self.config_error(e))?;
        parse_classes(BufReader::new(file)).map_err(|e| self.config_error(e).into())
    }
}

/// Collects the class names declared in `reader`.
pub fn parse_classes(reader: impl BufRead) -> io::Result<BTreeSet<ClassName>> {
    let mut classes = BTreeSet::new();
    for line in reader.split(b'\n') {
        let line = line?;
        if let Some(class) = parse_class_line(&String::from_utf8_lossy(&line)) {
            classes.insert(class);
        }
    }
    Ok(classes)
}

/// `class isr` yields `isr`; `end class`, `classes x` and a bare `class` yield nothing.
pub fn parse_class_line(line: &str) -> Option<ClassName> {
    let mut tokens = line.split_whitespace();
    if tokens.next()? != "class" {
        return None;
    }
    tokens.next().map(ClassName::from)
}
