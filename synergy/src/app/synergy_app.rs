use std::path::Path;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::{
    config::SynergyConfiguration,
    model::{SynergyError, SynergyService},
};

/// Command line tool for finding complementary business gaps around anchor businesses
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct SynergyApp {
    #[arg(long, global = true, help = "path to business CSV dataset, optionally gzipped")]
    pub dataset_file: Option<String>,
    #[arg(long, global = true, help = "path to .toml or .json file with synergy parameters")]
    pub configuration_file: Option<String>,
    #[command(subcommand)]
    pub op: SynergyOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum SynergyOperation {
    /// list the registered zones
    Zones,
    /// summarize the loaded dataset
    Stats,
    /// list the businesses the analyzer sees inside a zone
    Inspect {
        /// zone name, any case
        zone: String,
        #[arg(long, help = "zone radius in kilometers [default: 2.0]")]
        radius_km: Option<f64>,
        #[arg(long, default_value_t = 20, help = "maximum number of businesses listed")]
        limit: usize,
    },
    /// find synergy opportunities inside one zone
    Opportunities {
        /// zone name, any case
        zone: String,
        #[arg(long, help = "zone radius in kilometers [default: 2.0]")]
        radius_km: Option<f64>,
    },
    /// find synergy opportunities in every registered zone
    AnalyzeAll {
        #[arg(long, help = "zone radius in kilometers, defaults to each zone's own radius")]
        radius_km: Option<f64>,
    },
    /// write the effective configuration as TOML
    WriteConfig {
        #[arg(long, help = "output path, printed to stdout when omitted")]
        output_file: Option<String>,
    },
}

impl SynergyApp {
    /// runs the selected operation, returning the text to print.
    pub fn run(&self) -> Result<String, SynergyError> {
        let conf = match &self.configuration_file {
            None => SynergyConfiguration::default(),
            Some(f) => {
                log::info!("reading synergy configuration from {f}");
                SynergyConfiguration::try_from(f)?
            }
        };
        self.op.run(&conf, self.dataset_file.as_deref())
    }
}

impl SynergyOperation {
    pub fn run(
        &self,
        conf: &SynergyConfiguration,
        dataset_file: Option<&str>,
    ) -> Result<String, SynergyError> {
        let service = SynergyService::try_from_configuration(conf)?;
        match self {
            SynergyOperation::Zones => Ok(serde_json::to_string_pretty(service.zones())?),
            SynergyOperation::WriteConfig { output_file } => {
                let toml_str = conf.to_toml()?;
                match output_file {
                    None => Ok(toml_str),
                    Some(f) => {
                        std::fs::write(f, &toml_str)?;
                        eprintln!("wrote configuration to {f}");
                        Ok(String::new())
                    }
                }
            }
            SynergyOperation::Stats => {
                load_dataset(&service, conf, dataset_file)?;
                Ok(serde_json::to_string_pretty(&service.statistics()?)?)
            }
            SynergyOperation::Inspect {
                zone,
                radius_km,
                limit,
            } => {
                load_dataset(&service, conf, dataset_file)?;
                let inspection = service.inspect_zone(zone, *radius_km, Some(*limit))?;
                Ok(serde_json::to_string_pretty(&inspection)?)
            }
            SynergyOperation::Opportunities { zone, radius_km } => {
                load_dataset(&service, conf, dataset_file)?;
                let analysis = service.analyze_zone(zone, *radius_km)?;
                log::info!(
                    "zone '{}': {} opportunities among {} businesses ({:.1}%)",
                    analysis.zone,
                    analysis.total_opportunities,
                    analysis.total_businesses,
                    analysis.opportunity_rate()
                );
                Ok(serde_json::to_string_pretty(&analysis)?)
            }
            SynergyOperation::AnalyzeAll { radius_km } => {
                load_dataset(&service, conf, dataset_file)?;
                let analyses = service.analyze_all_zones(*radius_km)?;
                Ok(serde_json::to_string_pretty(&analyses)?)
            }
        }
    }
}

/// the command line dataset argument takes precedence over the configured file.
fn load_dataset(
    service: &SynergyService,
    conf: &SynergyConfiguration,
    dataset_file: Option<&str>,
) -> Result<(), SynergyError> {
    let filepath = dataset_file
        .map(String::from)
        .or_else(|| conf.dataset.file.clone())
        .ok_or_else(|| {
            SynergyError::DatasetUnavailable(String::from(
                "no dataset file provided via --dataset-file or configuration",
            ))
        })?;
    let summary = service.reload_dataset(Path::new(&filepath), &conf.dataset.columns)?;
    log::info!(
        "loaded {} of {} rows from {filepath} ({} dropped)",
        summary.rows_loaded,
        summary.rows_read,
        summary.rows_dropped
    );
    Ok(())
}
