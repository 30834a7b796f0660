// crates/usecase/src/orchestrator.rs
use std::path::{Path, PathBuf};

use silk_data_range_domain::{DataFilePattern, Inventory, SearchDirection, SearchResult};
use silk_data_range_ports::{filesystem::DirectoryLister, progress::SearchObserver};
use silk_data_range_shared_kernel::{ApplicationError, ClassName, ClassTypeKey, Result, SilkRangeError};
use tracing::{info, warn};

use crate::{date_range::DateRangeSearch, discovery::ClassTypeDiscovery};

type PartitionOutcome = (ClassTypeKey, std::result::Result<SearchResult, ApplicationError>);

/// Input of one inventory run.
#[derive(Debug, Clone)]
pub struct InventoryPlan {
    pub root: PathBuf,
    pub classes: Vec<ClassName>,
    /// Worker threads; values above one need the `parallel` feature.
    pub jobs: usize,
}

/// Searched partitions plus the failures that were skipped over.
#[derive(Debug, Default)]
pub struct InventoryOutput {
    pub inventory: Inventory,
    pub failures: Vec<ApplicationError>,
}

/// Searches every type directory of the planned classes for its oldest and newest day.
pub struct BuildInventory<'a> {
    lister: &'a dyn DirectoryLister,
    pattern: &'a DataFilePattern,
    observer: &'a dyn SearchObserver,
}

impl<'a> BuildInventory<'a> {
    pub fn new(
        lister: &'a dyn DirectoryLister,
        pattern: &'a DataFilePattern,
        observer: &'a dyn SearchObserver,
    ) -> Self {
        Self { lister, pattern, observer }
    }

    pub fn run(&self, plan: &InventoryPlan) -> Result<InventoryOutput> {
        let mut output = InventoryOutput::default();
        let partitions = self.collect_partitions(plan, &mut output.failures);
        info!(
            partitions = partitions.len(),
            jobs = plan.jobs,
            pattern = self.pattern.as_str(),
            "starting inventory"
        );

        let outcomes = self.search_all(&plan.root, &partitions, plan.jobs)?;
        for (key, outcome) in outcomes {
            match outcome {
                Ok(result) => output.inventory.record(key, result),
                Err(err) => {
                    output.inventory.track(key);
                    output.failures.push(err);
                }
            }
        }
        let without_data = output.inventory.iter().filter(|(_, result)| result.is_empty()).count();
        info!(without_data, failures = output.failures.len(), "inventory complete");
        Ok(output)
    }

    // A class whose type directories cannot be listed contributes no partitions.
    fn collect_partitions(&self, plan: &InventoryPlan, failures: &mut Vec<ApplicationError>) -> Vec<ClassTypeKey> {
        let discovery = ClassTypeDiscovery::new(self.lister);
        let mut partitions = Vec::new();
        for class in &plan.classes {
            match discovery.list_type_dirs(&plan.root, class) {
                Ok(types) => partitions.extend(types.into_iter().map(|t| ClassTypeKey::new(class.clone(), t))),
                Err(err) => {
                    warn!(%class, error = %err, "skipping class");
                    self.observer.on_class_skipped(class, &err);
                    failures.push(ApplicationError::ClassListingFailed {
                        class: class.to_string(),
                        source: Box::new(err),
                    });
                }
            }
        }
        partitions
    }

    #[cfg(feature = "parallel")]
    fn search_all(
        &self,
        root: &Path,
        partitions: &[ClassTypeKey],
        jobs: usize,
    ) -> Result<Vec<PartitionOutcome>> {
        use rayon::prelude::*;
        use silk_data_range_shared_kernel::InfrastructureError;

        if jobs <= 1 {
            return Ok(self.search_sequential(root, partitions));
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .map_err(|e| InfrastructureError::ThreadPoolCreation { details: e.to_string() })?;
        Ok(pool.install(|| {
            partitions
                .par_iter()
                .map(|key| (key.clone(), self.search_partition(root, key)))
                .collect()
        }))
    }

    #[cfg(not(feature = "parallel"))]
    fn search_all(
        &self,
        root: &Path,
        partitions: &[ClassTypeKey],
        jobs: usize,
    ) -> Result<Vec<PartitionOutcome>> {
        if jobs > 1 {
            warn!(jobs, "built without the `parallel` feature; searching sequentially");
        }
        Ok(self.search_sequential(root, partitions))
    }

    fn search_sequential(&self, root: &Path, partitions: &[ClassTypeKey]) -> Vec<PartitionOutcome> {
        partitions
            .iter()
            .map(|key| (key.clone(), self.search_partition(root, key)))
            .collect()
    }

    /// Oldest pass, then newest pass. Any listing failure abandons the whole partition.
    fn search_partition(
        &self,
        root: &Path,
        key: &ClassTypeKey,
    ) -> std::result::Result<SearchResult, ApplicationError> {
        self.observer.on_partition_start(key);
        let search = DateRangeSearch::new(self.lister, self.pattern, self.observer);

        let mut result = SearchResult::default();
        for direction in SearchDirection::ALL {
            match search.find(root, key, direction) {
                Ok(date) => result.set(direction, date),
                Err(err) => return Err(self.fail(key, err)),
            }
        }
        Ok(result)
    }

    fn fail(&self, key: &ClassTypeKey, err: SilkRangeError) -> ApplicationError {
        warn!(%key, error = %err, "partition search aborted");
        self.observer.on_partition_failed(key, &err);
        ApplicationError::PartitionSearchFailed {
            class: key.class.to_string(),
            type_name: key.type_name.to_string(),
            source: Box::new(err),
        }
    }
}
