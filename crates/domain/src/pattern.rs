// crates/domain/src/pattern.rs
use regex::Regex;
use silk_data_range_shared_kernel::{DomainError, Result};

/// Hourly SiLK files end in `YYYYMMDD.HH`.
pub const DEFAULT_DATA_FILE_PATTERN: &str = r"[0-9]{8}\.[0-9]{2}$";

/// Recognizes the names of hourly data files.
#[derive(Debug, Clone)]
pub struct DataFilePattern {
    regex: Regex,
}

impl DataFilePattern {
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|err| DomainError::InvalidPattern {
            pattern: pattern.to_string(),
            details: err.to_string(),
            source: Some(Box::new(err)),
        })?;
        Ok(Self { regex })
    }

    #[inline]
    pub fn is_match(&self, file_name: &str) -> bool {
        self.regex.is_match(file_name)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
