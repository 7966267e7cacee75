use crate::domain::model::{CountReceipt, CountUpdateRequest, RetirementReceipt, RetirementRecord};
use crate::domain::ports::{ItemGateway, PosGateway};
use crate::utils::error::{Result, SyncError};
use async_trait::async_trait;
use reqwest::Client;

/// Posts count updates to the POS inventory-count endpoint. Fire-and-forget
/// from the core's perspective: no retry, failures surface as errors and are
/// only logged by the driver.
#[derive(Debug, Clone)]
pub struct HttpPosGateway {
    endpoint: String,
    client: Client,
}

impl HttpPosGateway {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl PosGateway for HttpPosGateway {
    async fn push_count_update(&self, request: &CountUpdateRequest) -> Result<CountReceipt> {
        tracing::debug!(
            "POST {} ({} change(s))",
            self.endpoint,
            request.changes.len()
        );
        let response = self.client.post(&self.endpoint).json(request).send().await?;

        if !response.status().is_success() {
            return Err(SyncError::GatewayRejected {
                endpoint: self.endpoint.clone(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}

/// Posts retirement records to the item-tracking status endpoint.
#[derive(Debug, Clone)]
pub struct HttpItemGateway {
    endpoint: String,
    client: Client,
}

impl HttpItemGateway {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ItemGateway for HttpItemGateway {
    async fn push_retirements(&self, records: &[RetirementRecord]) -> Result<RetirementReceipt> {
        tracing::debug!("POST {} ({} record(s))", self.endpoint, records.len());
        let response = self.client.post(&self.endpoint).json(records).send().await?;

        if !response.status().is_success() {
            return Err(SyncError::GatewayRejected {
                endpoint: self.endpoint.clone(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CountChange, ItemStatus, PhysicalCount};
    use chrono::Utc;
    use httpmock::prelude::*;

    fn count_request() -> CountUpdateRequest {
        CountUpdateRequest {
            idempotency_key: "sync_S1_2026-08-20T14:30:00Z".to_string(),
            changes: vec![CountChange {
                change_type: CountChange::PHYSICAL_COUNT.to_string(),
                physical_count: PhysicalCount {
                    catalog_object_id: "obj-A".to_string(),
                    location_id: "loc-1".to_string(),
                    quantity: "2".to_string(),
                    occurred_at: Utc::now(),
                },
            }],
        }
    }

    #[tokio::test]
    async fn test_push_count_update_success() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v2/inventory/changes")
                .header("Content-Type", "application/json");
            then.status(200).json_body(serde_json::json!({
                "counts_updated": 1,
                "idempotency_key": "sync_S1_2026-08-20T14:30:00Z"
            }));
        });

        let gateway = HttpPosGateway::new(server.url("/v2/inventory/changes"));
        let receipt = gateway.push_count_update(&count_request()).await.unwrap();

        mock.assert();
        assert_eq!(receipt.counts_updated, 1);
        assert_eq!(receipt.idempotency_key, "sync_S1_2026-08-20T14:30:00Z");
    }

    #[tokio::test]
    async fn test_push_count_update_rejected() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/v2/inventory/changes");
            then.status(422);
        });

        let gateway = HttpPosGateway::new(server.url("/v2/inventory/changes"));
        let err = gateway.push_count_update(&count_request()).await.unwrap_err();

        mock.assert();
        assert!(matches!(
            err,
            SyncError::GatewayRejected { status: 422, .. }
        ));
    }

    #[tokio::test]
    async fn test_push_retirements_success() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/epcs/status");
            then.status(200)
                .json_body(serde_json::json!({ "epcs_retired": 2 }));
        });

        let records = vec![
            RetirementRecord {
                epc: "E1".to_string(),
                sku: "SKU-A".to_string(),
                status: ItemStatus::Sold,
                sold_at: Utc::now(),
                order_id: "order-7".to_string(),
            },
            RetirementRecord {
                epc: "E2".to_string(),
                sku: "SKU-A".to_string(),
                status: ItemStatus::Sold,
                sold_at: Utc::now(),
                order_id: "order-7".to_string(),
            },
        ];

        let gateway = HttpItemGateway::new(server.url("/epcs/status"));
        let receipt = gateway.push_retirements(&records).await.unwrap();

        mock.assert();
        assert_eq!(receipt.epcs_retired, 2);
    }

    #[tokio::test]
    async fn test_push_retirements_rejected() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/epcs/status");
            then.status(500);
        });

        let gateway = HttpItemGateway::new(server.url("/epcs/status"));
        let err = gateway.push_retirements(&[]).await.unwrap_err();
        assert!(matches!(
            err,
            SyncError::GatewayRejected { status: 500, .. }
        ));
    }
}
