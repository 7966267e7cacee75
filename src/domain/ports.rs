use crate::domain::model::{CountReceipt, CountUpdateRequest, RetirementReceipt, RetirementRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only access to the input documents; the core never touches the
/// filesystem or network directly.
pub trait DocumentStore: Send + Sync {
    fn read_document(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

/// Outbound side of Flow A: the POS inventory-count endpoint.
#[async_trait]
pub trait PosGateway: Send + Sync {
    async fn push_count_update(&self, request: &CountUpdateRequest) -> Result<CountReceipt>;
}

/// Outbound side of Flow B: the item-tracking status endpoint.
#[async_trait]
pub trait ItemGateway: Send + Sync {
    async fn push_retirements(&self, records: &[RetirementRecord]) -> Result<RetirementReceipt>;
}

pub trait ConfigProvider: Send + Sync {
    fn snapshot_path(&self) -> &str;
    fn catalog_path(&self) -> &str;
    fn sale_event_path(&self) -> &str;
    fn pos_endpoint(&self) -> &str;
    fn items_endpoint(&self) -> &str;
    fn report_path(&self) -> Option<&str>;
}
