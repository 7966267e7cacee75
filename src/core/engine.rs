use crate::core::aggregate::{zone_breakdown, SkuPool};
use crate::core::catalog::Catalog;
use crate::core::count::build_count_update;
use crate::core::retire::{resolve_sale, RetirementPolicy};
use crate::domain::model::{SaleEvent, Snapshot, SyncWarning};
use crate::domain::ports::{ConfigProvider, DocumentStore, ItemGateway, PosGateway};
use crate::utils::error::Result;
use crate::utils::report::write_count_report;

/// What one reconciliation run did, returned to the driver for display.
#[derive(Debug, Clone)]
pub struct SyncSummary {
    pub store_id: String,
    pub store_name: String,
    pub epcs_scanned: usize,
    pub counts_pushed: usize,
    pub idempotency_key: String,
    pub epcs_retired: usize,
    pub warnings: Vec<SyncWarning>,
    pub report_path: Option<String>,
}

/// Orchestrates one reconciliation run: load the three documents, build the
/// pool, push counts to the POS system (Flow A), then resolve the sale event
/// against the same pool and push retirements (Flow B). The pool is fully
/// built before any retirement touches it, and one engine run owns exactly
/// one pool.
pub struct SyncEngine<D, P, I, C>
where
    D: DocumentStore,
    P: PosGateway,
    I: ItemGateway,
    C: ConfigProvider,
{
    documents: D,
    pos: P,
    items: I,
    config: C,
    policy: Box<dyn RetirementPolicy>,
}

impl<D, P, I, C> SyncEngine<D, P, I, C>
where
    D: DocumentStore,
    P: PosGateway,
    I: ItemGateway,
    C: ConfigProvider,
{
    pub fn new(documents: D, pos: P, items: I, config: C, policy: Box<dyn RetirementPolicy>) -> Self {
        Self {
            documents,
            pos,
            items,
            config,
            policy,
        }
    }

    pub async fn run(&self) -> Result<SyncSummary> {
        tracing::info!("Loading input documents...");
        let snapshot = self.load_snapshot().await?;
        let catalog = self.load_catalog().await?;
        let sale_event = self.load_sale_event().await?;

        tracing::info!(
            "Store: {} ({}), {} EPC(s) scanned at {}",
            snapshot.store_name,
            snapshot.store_id,
            snapshot.items.len(),
            snapshot.scan_timestamp
        );

        let mut warnings = Vec::new();

        // Flow A: item-level scan -> SKU counts -> POS count update
        tracing::info!("📊 Aggregating EPCs by SKU...");
        let mut pool = SkuPool::from_snapshot(&snapshot);
        let before = pool.counts();

        for (sku, count) in &before {
            let zones = zone_breakdown(&snapshot, sku);
            let zone_str = zones
                .iter()
                .map(|(z, n)| format!("{}: {}", z, n))
                .collect::<Vec<_>>()
                .join(" / ");
            let product = catalog.product_name(sku).unwrap_or("Unknown");
            tracing::debug!("  {} x{} [{}] ({})", sku, count, zone_str, product);
        }

        tracing::info!("📦 Building POS count update...");
        let build = build_count_update(&before, &catalog, &snapshot.store_id, snapshot.scan_timestamp)?;
        for warning in &build.warnings {
            tracing::warn!("⚠️  {}", warning);
        }
        warnings.extend(build.warnings.clone());

        tracing::info!("📡 Pushing count update to POS inventory endpoint...");
        let count_receipt = self.pos.push_count_update(&build.request).await?;
        tracing::info!(
            "✅ POS accepted {} SKU count(s), idempotency key {}",
            count_receipt.counts_updated,
            count_receipt.idempotency_key
        );

        // Flow B: sale event -> retirement records -> item-tracking update
        tracing::info!(
            "🧾 Processing sale event {} (order {}, {} policy)...",
            sale_event.event_id,
            sale_event.order_id,
            self.policy.name()
        );
        let outcome = resolve_sale(&sale_event, &mut pool, self.policy.as_ref());
        for warning in &outcome.warnings {
            tracing::warn!("⚠️  {}", warning);
        }
        warnings.extend(outcome.warnings.clone());

        let epcs_retired = if outcome.records.is_empty() {
            tracing::info!("No EPCs to retire for this sale event");
            0
        } else {
            tracing::info!(
                "📡 Pushing {} retirement record(s) to item-tracking endpoint...",
                outcome.records.len()
            );
            let receipt = self.items.push_retirements(&outcome.records).await?;
            tracing::info!("✅ Item tracking retired {} EPC(s)", receipt.epcs_retired);
            receipt.epcs_retired
        };

        let report_path = if let Some(path) = self.config.report_path() {
            let sold_skus: Vec<String> = sale_event
                .line_items
                .iter()
                .map(|l| l.sku.clone())
                .collect();
            write_count_report(path, &catalog, &before, &pool, &sold_skus)?;
            tracing::info!("💾 Before/after report written to {}", path);
            Some(path.to_string())
        } else {
            None
        };

        Ok(SyncSummary {
            store_id: snapshot.store_id,
            store_name: snapshot.store_name,
            epcs_scanned: snapshot.items.len(),
            counts_pushed: count_receipt.counts_updated,
            idempotency_key: count_receipt.idempotency_key,
            epcs_retired,
            warnings,
            report_path,
        })
    }

    async fn load_snapshot(&self) -> Result<Snapshot> {
        let bytes = self
            .documents
            .read_document(self.config.snapshot_path())
            .await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn load_catalog(&self) -> Result<Catalog> {
        let bytes = self
            .documents
            .read_document(self.config.catalog_path())
            .await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn load_sale_event(&self) -> Result<SaleEvent> {
        let bytes = self
            .documents
            .read_document(self.config.sale_event_path())
            .await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
