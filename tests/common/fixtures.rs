//! On-disk SiLK repositories built inside a temporary directory.

use std::{fs, path::Path};

use tempfile::TempDir;

pub const SILK_CONF: &str = "\
version 2
class all
    type 0 in in
end class
class isr
    type 0 tcp tcp
end class
default-class all
";

/// A data root holding a `silk.conf` and whatever days are added to it.
#[allow(dead_code)]
pub struct DataRepo {
    dir: TempDir,
}

#[allow(dead_code)]
impl DataRepo {
    pub fn new() -> Self {
        Self::with_conf(SILK_CONF)
    }

    pub fn with_conf(conf: &str) -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("silk.conf"), conf).unwrap();
        Self { dir }
    }

    /// Repository without any configuration file.
    pub fn unconfigured() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn path_str(&self) -> &str {
        self.dir.path().to_str().unwrap()
    }

    /// Drops `file` into `<class>/<type>/<y>/<m>/<d>/`.
    pub fn file(self, class: &str, type_name: &str, ymd: [&str; 3], file: &str) -> Self {
        let day = self.dir.path().join(class).join(type_name).join(ymd[0]).join(ymd[1]).join(ymd[2]);
        fs::create_dir_all(&day).unwrap();
        fs::write(day.join(file), b"").unwrap();
        self
    }

    /// Creates a directory path relative to the root with no files in it.
    pub fn dir(self, rel: &str) -> Self {
        fs::create_dir_all(self.dir.path().join(rel)).unwrap();
        self
    }

    /// The repository every suite starts from: one populated `isr/tcp`
    /// partition, an empty `all/in`, and an unconfigured `scratch` dir.
    pub fn sample() -> Self {
        Self::new()
            .file("isr", "tcp", ["2021", "01", "05"], "tcp-S0_20210105.00")
            .file("isr", "tcp", ["2021", "01", "06"], "tcp-S0_20210106.23")
            .file("isr", "tcp", ["2021", "01", "04"], "notes.txt")
            .dir("all/in/2020/12")
            .dir("scratch/tmp")
    }
}
