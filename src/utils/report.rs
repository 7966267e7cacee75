use crate::core::aggregate::SkuPool;
use crate::core::catalog::Catalog;
use crate::utils::error::Result;
use std::collections::BTreeMap;
use std::path::Path;

/// Write the post-sale before/after count summary as CSV. One row per SKU
/// present in the snapshot, flagged when the sale touched it.
pub fn write_count_report<P: AsRef<Path>>(
    path: P,
    catalog: &Catalog,
    before: &BTreeMap<String, u32>,
    pool: &SkuPool,
    sold_skus: &[String],
) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["sku", "product_name", "before", "after", "sold"])?;

    for (sku, count_before) in before {
        let after = pool.remaining(sku) as u32;
        let product = catalog.product_name(sku).unwrap_or("Unknown");
        let sold = sold_skus.iter().any(|s| s == sku);
        let before_count = count_before.to_string();
        let after_count = after.to_string();
        writer.write_record([
            sku.as_str(),
            product,
            before_count.as_str(),
            after_count.as_str(),
            if sold { "yes" } else { "no" },
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::CatalogEntry;
    use crate::domain::model::{Item, ItemStatus, Snapshot};
    use chrono::Utc;
    use tempfile::TempDir;

    #[test]
    fn test_report_rows_reflect_before_and_after() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.csv");

        let snapshot = Snapshot {
            store_id: "S1".to_string(),
            store_name: "Test".to_string(),
            scan_timestamp: Utc::now(),
            items: vec![Item {
                epc: "E1".to_string(),
                sku: "SKU-A".to_string(),
                status: ItemStatus::InStore,
                zone: "floor".to_string(),
            }],
        };
        let pool = SkuPool::from_snapshot(&snapshot);

        let mut catalog = Catalog::default();
        catalog.sku_map.insert(
            "SKU-A".to_string(),
            CatalogEntry {
                catalog_object_id: "obj-A".to_string(),
                product_name: "Blue Jacket M".to_string(),
            },
        );

        let mut before = BTreeMap::new();
        before.insert("SKU-A".to_string(), 2u32);

        write_count_report(&path, &catalog, &before, &pool, &["SKU-A".to_string()]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("sku,product_name,before,after,sold"));
        assert!(content.contains("SKU-A,Blue Jacket M,2,1,yes"));
    }
}
