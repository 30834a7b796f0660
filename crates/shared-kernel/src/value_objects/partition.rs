// crates/shared-kernel/src/value_objects/partition.rs
use std::{
    borrow::Borrow,
    fmt,
    path::{Path, PathBuf},
};

use serde::Serialize;

/// Name of a top-level class directory (e.g. `isr`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct ClassName(String);

impl ClassName {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ClassName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&str> for ClassName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for ClassName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ClassName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of a type directory nested directly under a class (e.g. `in`, `outweb`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TypeName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies one searchable partition. Ordering is by class, then type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassTypeKey {
    pub class: ClassName,
    pub type_name: TypeName,
}

impl ClassTypeKey {
    pub fn new(class: impl Into<ClassName>, type_name: impl Into<TypeName>) -> Self {
        Self { class: class.into(), type_name: type_name.into() }
    }

    /// `<root>/<class>/<type>`
    pub fn partition_path(&self, root: &Path) -> PathBuf {
        root.join(self.class.as_str()).join(self.type_name.as_str())
    }
}

impl fmt::Display for ClassTypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.class, self.type_name)
    }
}
