use thiserror::Error;

#[derive(Error, Debug)]
pub enum SynergyError {
    #[error("zone '{name}' not found, available zones: [{}]", .available.join(", "))]
    ZoneNotFound { name: String, available: Vec<String> },
    #[error("business dataset unavailable: {0}")]
    DatasetUnavailable(String),
    #[error("invalid radius {0} km, must be a finite positive number")]
    InvalidRadius(f64),
    #[error("invalid synergy rule: {0}")]
    InvalidRule(String),
    #[error("invalid configuration: {0}")]
    ConfigurationError(String),
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("failure reading CSV file {filepath}: {source}")]
    CsvError { filepath: String, source: csv::Error },
    #[error("failure reading file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("failure encoding TOML: {source}")]
    TomlError {
        #[from]
        source: toml::ser::Error,
    },
}
