use serde::{Deserialize, Serialize};

/// how strongly an opportunity is believed. every detected gap is reported
/// with the same label.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Confidence {
    #[default]
    #[serde(rename = "alta")]
    High,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::High => write!(f, "alta"),
        }
    }
}
