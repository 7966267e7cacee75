use crate::config::PolicyChoice;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SyncError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML-file configuration, for wiring the sync against real document drops
/// and endpoints without a wall of CLI flags. Supports `${VAR}` environment
/// substitution so endpoints and tokens stay out of the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub documents: DocumentsConfig,
    pub gateways: GatewaysConfig,
    pub output: Option<OutputConfig>,
    pub retirement: Option<RetirementConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentsConfig {
    pub snapshot: String,
    pub catalog: String,
    pub sale_event: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewaysConfig {
    pub pos_endpoint: String,
    pub items_endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub report: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementConfig {
    pub policy: Option<String>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SyncError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SyncError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR_NAME}` with the environment value; unknown variables
    /// are left as-is so validation catches them with context.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn policy(&self) -> Result<PolicyChoice> {
        match self
            .retirement
            .as_ref()
            .and_then(|r| r.policy.as_deref())
            .unwrap_or("fifo")
        {
            "fifo" => Ok(PolicyChoice::Fifo),
            "lifo" => Ok(PolicyChoice::Lifo),
            other => Err(SyncError::InvalidConfigValueError {
                field: "retirement.policy".to_string(),
                value: other.to_string(),
                reason: "Supported policies: fifo, lifo".to_string(),
            }),
        }
    }
}

impl ConfigProvider for FileConfig {
    fn snapshot_path(&self) -> &str {
        &self.documents.snapshot
    }

    fn catalog_path(&self) -> &str {
        &self.documents.catalog
    }

    fn sale_event_path(&self) -> &str {
        &self.documents.sale_event
    }

    fn pos_endpoint(&self) -> &str {
        &self.gateways.pos_endpoint
    }

    fn items_endpoint(&self) -> &str {
        &self.gateways.items_endpoint
    }

    fn report_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.report.as_deref())
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("documents.snapshot", &self.documents.snapshot)?;
        validation::validate_path("documents.catalog", &self.documents.catalog)?;
        validation::validate_path("documents.sale_event", &self.documents.sale_event)?;
        validation::validate_url("gateways.pos_endpoint", &self.gateways.pos_endpoint)?;
        validation::validate_url("gateways.items_endpoint", &self.gateways.items_endpoint)?;
        self.policy()?;
        Ok(())
    }
}
