use super::Dataset;
use crate::model::SynergyError;
use std::sync::{Arc, RwLock};

/// holds the currently published dataset. readers take a cheap [`Arc`] clone
/// and keep reading it even if a reload publishes a newer table meanwhile;
/// records are never mutated in place.
#[derive(Debug, Default)]
pub struct DatasetSnapshot {
    current: RwLock<Option<Arc<Dataset>>>,
}

impl DatasetSnapshot {
    /// a snapshot with no dataset loaded. analysis fails with
    /// [`SynergyError::DatasetUnavailable`] until one is published.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(dataset: Dataset) -> Self {
        Self {
            current: RwLock::new(Some(Arc::new(dataset))),
        }
    }

    /// the currently published dataset.
    pub fn current(&self) -> Result<Arc<Dataset>, SynergyError> {
        let guard = self.current.read().map_err(|e| {
            SynergyError::DatasetUnavailable(format!("dataset lock poisoned: {e}"))
        })?;
        guard.clone().ok_or_else(|| {
            SynergyError::DatasetUnavailable(String::from("no dataset has been loaded"))
        })
    }

    /// replaces the published dataset, returning the previous one.
    pub fn publish(&self, dataset: Dataset) -> Result<Option<Arc<Dataset>>, SynergyError> {
        let next = Arc::new(dataset);
        let mut guard = self.current.write().map_err(|e| {
            SynergyError::DatasetUnavailable(format!("dataset lock poisoned: {e}"))
        })?;
        Ok(guard.replace(next))
    }

    /// runs `load` without holding the lock and publishes its result. when
    /// loading fails the previously published dataset stays in place.
    pub fn reload<F>(&self, load: F) -> Result<Arc<Dataset>, SynergyError>
    where
        F: FnOnce() -> Result<Dataset, SynergyError>,
    {
        let dataset = load()?;
        self.publish(dataset)?;
        self.current()
    }
}
