mod dataset_config;
mod synergy_configuration;

pub use dataset_config::DatasetConfig;
pub use synergy_configuration::SynergyConfiguration;
