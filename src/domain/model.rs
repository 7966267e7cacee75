use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of one tagged unit. Only `InStore` counts toward
/// on-hand inventory; anything the tracking system invents later lands
/// in `Other` instead of failing the parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    InStore,
    Sold,
    #[serde(other)]
    Other,
}

/// One physical tagged unit as reported by the item-tracking system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub epc: String,
    pub sku: String,
    pub status: ItemStatus,
    pub zone: String,
}

/// Full item-level snapshot for one store at one scan instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub store_id: String,
    pub store_name: String,
    pub scan_timestamp: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// One line of a POS sale: SKU plus units sold, no unit identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: String,
    pub quantity: u32,
}

/// SKU-level sale event from the POS system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleEvent {
    pub event_id: String,
    pub order_id: String,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

/// Absolute physical-count instruction for one SKU at one location.
/// Wire shape matches the POS inventory endpoint: quantity travels as a
/// string and the change is tagged `PHYSICAL_COUNT`, not a delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalCount {
    pub catalog_object_id: String,
    pub location_id: String,
    pub quantity: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountChange {
    #[serde(rename = "type")]
    pub change_type: String,
    pub physical_count: PhysicalCount,
}

impl CountChange {
    pub const PHYSICAL_COUNT: &'static str = "PHYSICAL_COUNT";
}

/// Location-scoped batch of count instructions, de-duplicated by the POS
/// system on `idempotency_key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountUpdateRequest {
    pub idempotency_key: String,
    pub changes: Vec<CountChange>,
}

/// Instruction to reclassify one unit as sold in the item-tracking system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementRecord {
    pub epc: String,
    pub sku: String,
    pub status: ItemStatus,
    pub sold_at: DateTime<Utc>,
    pub order_id: String,
}

/// Acknowledgement from the POS inventory endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountReceipt {
    pub counts_updated: usize,
    pub idempotency_key: String,
}

/// Acknowledgement from the item-tracking status endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementReceipt {
    pub epcs_retired: usize,
}

/// Recoverable conditions surfaced to the caller instead of an ambient
/// logger. None of these abort a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncWarning {
    /// SKU counted in the snapshot but absent from the POS catalog.
    UnmappedSku { sku: String },
    /// SKU sold but no pool entry exists for it at all.
    UnknownSku { sku: String },
    /// Sale quantity exceeded the remaining pool for the SKU.
    Oversell {
        sku: String,
        requested: u32,
        retired: u32,
    },
}

impl fmt::Display for SyncWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncWarning::UnmappedSku { sku } => {
                write!(f, "SKU {} has no catalog mapping, excluded from count update", sku)
            }
            SyncWarning::UnknownSku { sku } => {
                write!(f, "SKU {} sold but no EPCs found in current scan data", sku)
            }
            SyncWarning::Oversell {
                sku,
                requested,
                retired,
            } => write!(
                f,
                "Sold {} units of {} but only {} EPC(s) available",
                requested, sku, retired
            ),
        }
    }
}
