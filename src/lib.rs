pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::fs::LocalDocuments;
pub use crate::adapters::http::{HttpItemGateway, HttpPosGateway};
pub use crate::config::{CliConfig, PolicyChoice};
pub use crate::core::engine::{SyncEngine, SyncSummary};
pub use crate::utils::error::{Result, SyncError};
