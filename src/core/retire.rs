use crate::core::aggregate::SkuPool;
use crate::domain::model::{ItemStatus, RetirementRecord, SaleEvent, SyncWarning};
use chrono::Utc;
use std::collections::VecDeque;

/// Which pool slot is consumed when a unit of a SKU is sold. The POS system
/// only names the SKU, so the choice of physical unit is a policy, not a
/// fact. FIFO by scan order is the default; LIFO or zone-priority schemes
/// slot in here without touching the resolver.
pub trait RetirementPolicy: Send + Sync {
    fn pick(&self, remaining: &VecDeque<String>) -> Option<usize>;

    fn name(&self) -> &'static str;
}

/// First observed, first retired.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fifo;

impl RetirementPolicy for Fifo {
    fn pick(&self, remaining: &VecDeque<String>) -> Option<usize> {
        if remaining.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    fn name(&self) -> &'static str {
        "fifo"
    }
}

/// Most recently observed, first retired.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lifo;

impl RetirementPolicy for Lifo {
    fn pick(&self, remaining: &VecDeque<String>) -> Option<usize> {
        remaining.len().checked_sub(1)
    }

    fn name(&self) -> &'static str {
        "lifo"
    }
}

/// Result of applying one sale event to the pool.
#[derive(Debug, Clone, Default)]
pub struct RetirementOutcome {
    pub records: Vec<RetirementRecord>,
    pub warnings: Vec<SyncWarning>,
}

/// Resolve a SKU-level sale into per-unit retirement records, removing each
/// consumed EPC from the pool.
///
/// Line items are processed in event order; each unit sold removes one EPC
/// chosen by `policy`. Unknown SKUs and oversell are warnings, not errors,
/// and later line items are still processed. Records carry the event's order
/// id and timestamp, falling back to the processing instant when the event
/// has none.
///
/// Not idempotent by design: the pool shrinks with every call, so replaying
/// an event that the pool has already absorbed yields fewer or zero records.
pub fn resolve_sale(
    event: &SaleEvent,
    pool: &mut SkuPool,
    policy: &dyn RetirementPolicy,
) -> RetirementOutcome {
    let sold_at = event.created_at.unwrap_or_else(Utc::now);
    let mut outcome = RetirementOutcome::default();

    for line in &event.line_items {
        if pool.remaining(&line.sku) == 0 {
            outcome.warnings.push(SyncWarning::UnknownSku {
                sku: line.sku.clone(),
            });
            continue;
        }

        let mut retired = 0u32;
        for _ in 0..line.quantity {
            match pool.remove_next(&line.sku, policy) {
                Some(epc) => {
                    retired += 1;
                    outcome.records.push(RetirementRecord {
                        epc,
                        sku: line.sku.clone(),
                        status: ItemStatus::Sold,
                        sold_at,
                        order_id: event.order_id.clone(),
                    });
                }
                None => break,
            }
        }

        if retired < line.quantity {
            outcome.warnings.push(SyncWarning::Oversell {
                sku: line.sku.clone(),
                requested: line.quantity,
                retired,
            });
        }
    }

    outcome
}
