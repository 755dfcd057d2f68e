use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::client::{ClientError, ItemsBackend};
use crate::types::dto::common::ErrorResponse;
use crate::types::dto::items::{
    Item, ItemListResponse, ItemRequest, ItemResponse, ValidationErrorResponse,
};

/// `ItemsBackend` over the JSON API
pub struct HttpItemsClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpItemsClient {
    /// Create a client for the API rooted at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn items_url(&self) -> String {
        format!("{}/items", self.base_url)
    }

    fn item_url(&self, id: i32) -> String {
        format!("{}/items/{}", self.base_url, id)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let response = request
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        tracing::debug!(status, "Received API response");

        decode_response(status, &body)
    }
}

#[async_trait]
impl ItemsBackend for HttpItemsClient {
    async fn list_items(&self) -> Result<Vec<Item>, ClientError> {
        let response: ItemListResponse = self.send(self.client.get(self.items_url())).await?;
        Ok(response.items)
    }

    async fn create_item(&self, request: &ItemRequest) -> Result<Item, ClientError> {
        let response: ItemResponse = self
            .send(self.client.post(self.items_url()).json(request))
            .await?;
        Ok(response.item)
    }

    async fn show_item(&self, id: i32) -> Result<Item, ClientError> {
        let response: ItemResponse = self.send(self.client.get(self.item_url(id))).await?;
        Ok(response.item)
    }

    async fn update_item(&self, id: i32, request: &ItemRequest) -> Result<Item, ClientError> {
        let response: ItemResponse = self
            .send(self.client.patch(self.item_url(id)).json(request))
            .await?;
        Ok(response.item)
    }

    async fn delete_item(&self, id: i32) -> Result<Item, ClientError> {
        let response: ItemResponse = self.send(self.client.delete(self.item_url(id))).await?;
        Ok(response.item)
    }
}

/// Map an API response to a typed result by status code
///
/// 2xx decodes the body, 404 and 422 decode their structured bodies, and
/// everything else (including a 422 without a field map) is a server failure.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ClientError> {
    match status {
        200..=299 => serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string())),
        404 => {
            let message = serde_json::from_str::<ErrorResponse>(body)
                .map(|error| error.message)
                .unwrap_or_else(|_| "Not found".to_string());
            Err(ClientError::NotFound(message))
        }
        422 => match serde_json::from_str::<ValidationErrorResponse>(body) {
            Ok(error) => Err(ClientError::Validation(error.errors)),
            Err(_) => Err(ClientError::Server(status)),
        },
        _ => Err(ClientError::Server(status)),
    }
}
