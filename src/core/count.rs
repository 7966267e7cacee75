use crate::core::catalog::Catalog;
use crate::domain::model::{CountChange, CountUpdateRequest, PhysicalCount, SyncWarning};
use crate::utils::error::{Result, SyncError};
use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::BTreeMap;

/// A built count request plus the SKUs that could not be mapped. Unmapped
/// SKUs are reported, never silently dropped.
#[derive(Debug, Clone)]
pub struct CountBuild {
    pub request: CountUpdateRequest,
    pub warnings: Vec<SyncWarning>,
}

impl CountBuild {
    pub fn unmapped_skus(&self) -> Vec<&str> {
        self.warnings
            .iter()
            .filter_map(|w| match w {
                SyncWarning::UnmappedSku { sku } => Some(sku.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Translate per-SKU absolute counts into the POS physical-count request.
///
/// A store with no location mapping is fatal: there is nowhere to address the
/// update. A SKU with no catalog mapping is a warning and the run continues
/// for every mappable SKU. The idempotency key is derived only from the store
/// and scan timestamp, so resubmitting the same snapshot produces the same
/// key and the POS side de-duplicates it.
pub fn build_count_update(
    counts: &BTreeMap<String, u32>,
    catalog: &Catalog,
    store_id: &str,
    occurred_at: DateTime<Utc>,
) -> Result<CountBuild> {
    let location_id = catalog
        .location_id(store_id)
        .ok_or_else(|| SyncError::UnknownStore {
            store_id: store_id.to_string(),
        })?;

    let mut changes = Vec::with_capacity(counts.len());
    let mut warnings = Vec::new();

    for (sku, count) in counts {
        match catalog.object_id(sku) {
            Some(object_id) => changes.push(CountChange {
                change_type: CountChange::PHYSICAL_COUNT.to_string(),
                physical_count: PhysicalCount {
                    catalog_object_id: object_id.to_string(),
                    location_id: location_id.to_string(),
                    quantity: count.to_string(),
                    occurred_at,
                },
            }),
            None => warnings.push(SyncWarning::UnmappedSku { sku: sku.clone() }),
        }
    }

    Ok(CountBuild {
        request: CountUpdateRequest {
            idempotency_key: idempotency_key(store_id, occurred_at),
            changes,
        },
        warnings,
    })
}

fn idempotency_key(store_id: &str, occurred_at: DateTime<Utc>) -> String {
    format!(
        "sync_{}_{}",
        store_id,
        occurred_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    )
}
