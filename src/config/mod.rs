pub mod file;

use crate::core::retire::{Fifo, Lifo, RetirementPolicy};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyChoice {
    Fifo,
    Lifo,
}

impl PolicyChoice {
    pub fn into_policy(self) -> Box<dyn RetirementPolicy> {
        match self {
            PolicyChoice::Fifo => Box::new(Fifo),
            PolicyChoice::Lifo => Box::new(Lifo),
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "tagsync")]
#[command(about = "Reconciles RFID item-level scans with POS SKU-level inventory")]
pub struct CliConfig {
    /// Optional TOML config file; overrides the flags below when present.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, default_value = "./mock_data/rfid_snapshot.json")]
    pub snapshot: String,

    #[arg(long, default_value = "./mock_data/pos_catalog.json")]
    pub catalog: String,

    #[arg(long, default_value = "./mock_data/sale_event.json")]
    pub sale_event: String,

    #[arg(long, default_value = "https://pos.example.com/v2/inventory/changes")]
    pub pos_endpoint: String,

    #[arg(long, default_value = "https://items.example.com/epcs/status")]
    pub items_endpoint: String,

    /// Write a before/after CSV report to this path.
    #[arg(long)]
    pub report: Option<String>,

    /// Which physical unit is retired when a SKU sells.
    #[arg(long, value_enum, default_value = "fifo")]
    pub policy: PolicyChoice,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn snapshot_path(&self) -> &str {
        &self.snapshot
    }

    fn catalog_path(&self) -> &str {
        &self.catalog
    }

    fn sale_event_path(&self) -> &str {
        &self.sale_event
    }

    fn pos_endpoint(&self) -> &str {
        &self.pos_endpoint
    }

    fn items_endpoint(&self) -> &str {
        &self.items_endpoint
    }

    fn report_path(&self) -> Option<&str> {
        self.report.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("snapshot", &self.snapshot)?;
        validation::validate_path("catalog", &self.catalog)?;
        validation::validate_path("sale_event", &self.sale_event)?;
        validation::validate_url("pos_endpoint", &self.pos_endpoint)?;
        validation::validate_url("items_endpoint", &self.items_endpoint)?;
        if let Some(report) = &self.report {
            validation::validate_path("report", report)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CliConfig {
        CliConfig {
            config: None,
            snapshot: "./mock_data/rfid_snapshot.json".to_string(),
            catalog: "./mock_data/pos_catalog.json".to_string(),
            sale_event: "./mock_data/sale_event.json".to_string(),
            pos_endpoint: "https://pos.example.com/v2/inventory/changes".to_string(),
            items_endpoint: "https://items.example.com/epcs/status".to_string(),
            report: None,
            policy: PolicyChoice::Fifo,
            verbose: false,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_bad_endpoint_fails_validation() {
        let mut c = config();
        c.pos_endpoint = "not-a-url".to_string();
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_policy_choice_maps_to_policy() {
        assert_eq!(PolicyChoice::Fifo.into_policy().name(), "fifo");
        assert_eq!(PolicyChoice::Lifo.into_policy().name(), "lifo");
    }
}
