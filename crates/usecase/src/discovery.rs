// crates/usecase/src/discovery.rs
use std::{collections::BTreeSet, path::Path};

use silk_data_range_domain::ClassSelection;
use silk_data_range_ports::{catalog::ClassCatalog, filesystem::DirectoryLister};
use silk_data_range_shared_kernel::{ClassName, ErrorContext, Result, TypeName};
use tracing::debug;

/// Enumerates class and type directories under the data root.
pub struct ClassTypeDiscovery<'a> {
    lister: &'a dyn DirectoryLister,
}

impl<'a> ClassTypeDiscovery<'a> {
    pub fn new(lister: &'a dyn DirectoryLister) -> Self {
        Self { lister }
    }

    pub fn list_candidate_class_dirs(&self, root: &Path) -> Result<BTreeSet<ClassName>> {
        let names = self.lister.list_subdirectories(root).context("listing class directories")?;
        Ok(names.into_iter().map(ClassName::from).collect())
    }

    pub fn list_type_dirs(&self, root: &Path, class: &ClassName) -> Result<BTreeSet<TypeName>> {
        let names = self.lister.list_subdirectories(&root.join(class.as_str()))?;
        Ok(names.into_iter().map(TypeName::from).collect())
    }

    /// Decides which class directories will be searched.
    ///
    /// The catalog is always read first, so an unreadable configuration
    /// fails the run even when a single class was requested. With a
    /// requested class the root is not listed at all.
    pub fn select_classes(
        &self,
        root: &Path,
        catalog: &dyn ClassCatalog,
        requested: Option<&ClassName>,
    ) -> Result<ClassSelection> {
        let recognized = catalog.recognized_classes().context("loading recognized classes")?;
        debug!(count = recognized.len(), "recognized classes loaded");

        if let Some(class) = requested {
            return Ok(ClassSelection::single(class.clone()));
        }

        let candidates = self.list_candidate_class_dirs(root)?;
        Ok(ClassSelection::filter(&candidates, &recognized))
    }
}
