mod dataset;
mod dataset_columns;
pub mod dataset_ops;
mod dataset_snapshot;
mod dataset_statistics;

pub use dataset::{Dataset, DatasetLoadSummary};
pub use dataset_columns::DatasetColumns;
pub use dataset_snapshot::DatasetSnapshot;
pub use dataset_statistics::{DatasetStatistics, GeographicCoverage};
