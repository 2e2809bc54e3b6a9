use crate::model::dataset::DatasetColumns;
use serde::{Deserialize, Serialize};

/// where the business dataset lives and how its columns are named.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DatasetConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default)]
    pub columns: DatasetColumns,
}
