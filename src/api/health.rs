use crate::errors::ItemsApiError;
use crate::stores::ItemStore;
use crate::types::dto::common::HealthResponse;
use chrono::Utc;
use poem_openapi::{payload::Json, OpenApi, Tags};
use std::sync::Arc;

/// Health check API
pub struct HealthApi {
    item_store: Arc<ItemStore>,
}

impl HealthApi {
    pub fn new(item_store: Arc<ItemStore>) -> Self {
        Self { item_store }
    }
}

/// API tags for health endpoints
#[derive(Tags)]
enum ApiTags {
    /// Health check endpoints
    Health,
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Returns the current status of the API service and verifies the
    /// database is reachable
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health(&self) -> Result<Json<HealthResponse>, ItemsApiError> {
        let item_count = self.item_store.count().await?;

        Ok(Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            item_count,
        }))
    }
}
