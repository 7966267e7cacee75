pub mod aggregate;
pub mod catalog;
pub mod count;
pub mod engine;
pub mod retire;

pub use crate::domain::model::{
    CountUpdateRequest, Item, ItemStatus, LineItem, RetirementRecord, SaleEvent, Snapshot,
    SyncWarning,
};
pub use crate::domain::ports::{ConfigProvider, DocumentStore, ItemGateway, PosGateway};
pub use crate::utils::error::Result;
