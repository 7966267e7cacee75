use crate::core::retire::RetirementPolicy;
use crate::domain::model::{ItemStatus, Snapshot};
use std::collections::{BTreeMap, HashMap, VecDeque};

/// Per-SKU ordered pool of on-hand EPCs, built once from a snapshot.
///
/// The queue for each SKU preserves the snapshot's observation order, which
/// is what makes FIFO retirement mean "first observed, first retired". After
/// construction the only mutation is removal through [`SkuPool::remove_next`];
/// an EPC that leaves the pool never comes back.
#[derive(Debug, Clone, Default)]
pub struct SkuPool {
    epcs_by_sku: HashMap<String, VecDeque<String>>,
}

impl SkuPool {
    /// Collapse an item-level snapshot into the per-SKU pool. Pure: items
    /// whose status is not `in_store` are dropped, everything else keeps its
    /// relative order. An empty snapshot yields an empty pool.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let mut epcs_by_sku: HashMap<String, VecDeque<String>> = HashMap::new();

        for item in &snapshot.items {
            if item.status == ItemStatus::InStore {
                epcs_by_sku
                    .entry(item.sku.clone())
                    .or_default()
                    .push_back(item.epc.clone());
            }
        }

        Self { epcs_by_sku }
    }

    /// Absolute on-hand count per SKU, in deterministic SKU order.
    pub fn counts(&self) -> BTreeMap<String, u32> {
        self.epcs_by_sku
            .iter()
            .map(|(sku, epcs)| (sku.clone(), epcs.len() as u32))
            .collect()
    }

    pub fn remaining(&self, sku: &str) -> usize {
        self.epcs_by_sku.get(sku).map_or(0, VecDeque::len)
    }

    /// Total units across all SKUs; equals the snapshot's in-store item count.
    pub fn total(&self) -> usize {
        self.epcs_by_sku.values().map(VecDeque::len).sum()
    }

    pub fn contains_sku(&self, sku: &str) -> bool {
        self.epcs_by_sku.contains_key(sku)
    }

    pub fn epcs(&self, sku: &str) -> Option<&VecDeque<String>> {
        self.epcs_by_sku.get(sku)
    }

    /// Remove and return one EPC for `sku`, chosen by `policy`. This is the
    /// pool's only mutating operation and belongs to the retirement flow.
    pub fn remove_next(&mut self, sku: &str, policy: &dyn RetirementPolicy) -> Option<String> {
        let queue = self.epcs_by_sku.get_mut(sku)?;
        let index = policy.pick(queue)?;
        queue.remove(index)
    }
}

/// On-demand per-zone count of in-store items for one SKU. Never sent to the
/// POS system, but useful for replenishment decisions.
pub fn zone_breakdown(snapshot: &Snapshot, sku: &str) -> BTreeMap<String, u32> {
    let mut zones: BTreeMap<String, u32> = BTreeMap::new();
    for item in &snapshot.items {
        if item.sku == sku && item.status == ItemStatus::InStore {
            *zones.entry(item.zone.clone()).or_insert(0) += 1;
        }
    }
    zones
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::retire::Fifo;
    use crate::domain::model::Item;
    use chrono::Utc;

    fn item(epc: &str, sku: &str, status: ItemStatus, zone: &str) -> Item {
        Item {
            epc: epc.to_string(),
            sku: sku.to_string(),
            status,
            zone: zone.to_string(),
        }
    }

    fn snapshot(items: Vec<Item>) -> Snapshot {
        Snapshot {
            store_id: "STORE-001".to_string(),
            store_name: "Test Store".to_string(),
            scan_timestamp: Utc::now(),
            items,
        }
    }

    #[test]
    fn test_pool_conservation() {
        let snap = snapshot(vec![
            item("E1", "SKU-A", ItemStatus::InStore, "floor"),
            item("E2", "SKU-A", ItemStatus::InStore, "stockroom"),
            item("E3", "SKU-B", ItemStatus::InStore, "floor"),
            item("E4", "SKU-B", ItemStatus::Sold, "floor"),
        ]);

        let pool = SkuPool::from_snapshot(&snap);

        let in_store = snap
            .items
            .iter()
            .filter(|i| i.status == ItemStatus::InStore)
            .count();
        assert_eq!(pool.total(), in_store);
        assert_eq!(pool.total(), 3);
    }

    #[test]
    fn test_pool_preserves_observation_order() {
        let snap = snapshot(vec![
            item("E1", "SKU-A", ItemStatus::InStore, "floor"),
            item("E2", "SKU-B", ItemStatus::InStore, "floor"),
            item("E3", "SKU-A", ItemStatus::Sold, "floor"),
            item("E4", "SKU-A", ItemStatus::InStore, "stockroom"),
        ]);

        let pool = SkuPool::from_snapshot(&snap);

        let epcs: Vec<&String> = pool.epcs("SKU-A").unwrap().iter().collect();
        assert_eq!(epcs, vec!["E1", "E4"]);
    }

    #[test]
    fn test_empty_snapshot_yields_empty_pool() {
        let pool = SkuPool::from_snapshot(&snapshot(vec![]));
        assert_eq!(pool.total(), 0);
        assert!(pool.counts().is_empty());
        assert!(!pool.contains_sku("SKU-A"));
    }

    #[test]
    fn test_counts_only_in_store() {
        let snap = snapshot(vec![
            item("E1", "SKU-A", ItemStatus::InStore, "floor"),
            item("E2", "SKU-A", ItemStatus::Sold, "floor"),
            item("E3", "SKU-A", ItemStatus::Other, "floor"),
        ]);

        let counts = SkuPool::from_snapshot(&snap).counts();
        assert_eq!(counts.get("SKU-A"), Some(&1));
    }

    #[test]
    fn test_zone_breakdown() {
        let snap = snapshot(vec![
            item("E1", "SKU-A", ItemStatus::InStore, "floor"),
            item("E2", "SKU-A", ItemStatus::InStore, "stockroom"),
            item("E3", "SKU-A", ItemStatus::InStore, "floor"),
            item("E4", "SKU-A", ItemStatus::Sold, "floor"),
            item("E5", "SKU-B", ItemStatus::InStore, "floor"),
        ]);

        let zones = zone_breakdown(&snap, "SKU-A");
        assert_eq!(zones.get("floor"), Some(&2));
        assert_eq!(zones.get("stockroom"), Some(&1));
        assert_eq!(zones.len(), 2);
    }

    #[test]
    fn test_remove_next_never_reinserts() {
        let snap = snapshot(vec![
            item("E1", "SKU-A", ItemStatus::InStore, "floor"),
            item("E2", "SKU-A", ItemStatus::InStore, "floor"),
        ]);
        let mut pool = SkuPool::from_snapshot(&snap);

        assert_eq!(pool.remove_next("SKU-A", &Fifo), Some("E1".to_string()));
        assert_eq!(pool.remaining("SKU-A"), 1);
        assert_eq!(pool.remove_next("SKU-A", &Fifo), Some("E2".to_string()));
        assert_eq!(pool.remove_next("SKU-A", &Fifo), None);
        assert_eq!(pool.remaining("SKU-A"), 0);
    }
}
