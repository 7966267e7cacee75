use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Catalog mapping for one SKU in the POS system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub catalog_object_id: String,
    pub product_name: String,
}

/// Location mapping for one store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationEntry {
    pub pos_location_id: String,
}

/// Static reference data loaded once per run. Lookups return `None` for
/// missing keys; the count builder decides whether that is a warning
/// (unmapped SKU) or fatal (unmapped store).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub sku_map: HashMap<String, CatalogEntry>,
    #[serde(default)]
    pub location_map: HashMap<String, LocationEntry>,
}

impl Catalog {
    pub fn object_id(&self, sku: &str) -> Option<&str> {
        self.sku_map.get(sku).map(|e| e.catalog_object_id.as_str())
    }

    pub fn product_name(&self, sku: &str) -> Option<&str> {
        self.sku_map.get(sku).map(|e| e.product_name.as_str())
    }

    pub fn location_id(&self, store_id: &str) -> Option<&str> {
        self.location_map
            .get(store_id)
            .map(|e| e.pos_location_id.as_str())
    }
}
