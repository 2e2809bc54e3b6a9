use serde::{Deserialize, Serialize};
use synergy_core::model::BusinessRecord;

/// the cleaned, immutable table of businesses handed to the analysis core.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<BusinessRecord>,
}

impl From<Vec<BusinessRecord>> for Dataset {
    fn from(records: Vec<BusinessRecord>) -> Self {
        Self { records }
    }
}

impl Dataset {
    pub fn records(&self) -> &[BusinessRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// row counts from one dataset load.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DatasetLoadSummary {
    pub rows_read: usize,
    pub rows_loaded: usize,
    pub rows_dropped: usize,
}
