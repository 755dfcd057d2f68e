use async_trait::async_trait;

use crate::client::ClientError;
use crate::types::dto::items::{Item, ItemRequest};

/// The five item operations as seen by the client views
#[async_trait]
pub trait ItemsBackend: Send + Sync {
    async fn list_items(&self) -> Result<Vec<Item>, ClientError>;

    async fn create_item(&self, request: &ItemRequest) -> Result<Item, ClientError>;

    async fn show_item(&self, id: i32) -> Result<Item, ClientError>;

    async fn update_item(&self, id: i32, request: &ItemRequest) -> Result<Item, ClientError>;

    async fn delete_item(&self, id: i32) -> Result<Item, ClientError>;
}
