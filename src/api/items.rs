use crate::errors::ItemsApiError;
use crate::services::{present, present_all};
use crate::stores::ItemStore;
use crate::types::dto::items::{ItemListResponse, ItemRequest, ItemResponse};
use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use std::sync::Arc;

/// Item CRUD API endpoints
pub struct ItemsApi {
    item_store: Arc<ItemStore>,
}

impl ItemsApi {
    /// Create a new ItemsApi backed by the given ItemStore
    pub fn new(item_store: Arc<ItemStore>) -> Self {
        Self { item_store }
    }
}

/// Parse a path id, treating anything that is not an `i32` as an unknown item
fn parse_item_id(raw: &str) -> Result<i32, ItemsApiError> {
    raw.parse::<i32>().map_err(|_| ItemsApiError::not_found(raw))
}

/// An absent body is treated as a request with both fields missing
fn request_fields(body: Option<Json<ItemRequest>>) -> ItemRequest {
    body.map(|json| json.0).unwrap_or_default()
}

/// API tags for item endpoints
#[derive(Tags)]
enum ItemsTags {
    /// Item management endpoints
    Items,
}

#[OpenApi]
impl ItemsApi {
    /// List all items, newest first
    #[oai(path = "/items", method = "get", tag = "ItemsTags::Items")]
    async fn list_items(&self) -> Result<Json<ItemListResponse>, ItemsApiError> {
        let items = self.item_store.list().await?;
        let now = self.item_store.now();

        Ok(Json(ItemListResponse {
            items: present_all(&items, now),
        }))
    }

    /// Create a new item
    ///
    /// Returns the created item with its assigned id and derived date fields
    #[oai(path = "/items", method = "post", tag = "ItemsTags::Items")]
    async fn create_item(
        &self,
        body: Option<Json<ItemRequest>>,
    ) -> Result<Json<ItemResponse>, ItemsApiError> {
        let body = request_fields(body);
        let item = self
            .item_store
            .create(body.title.as_deref(), body.comment.as_deref())
            .await?;

        Ok(Json(ItemResponse {
            item: present(&item, self.item_store.now()),
        }))
    }

    /// Show a single item
    #[oai(path = "/items/:id", method = "get", tag = "ItemsTags::Items")]
    async fn show_item(&self, id: Path<String>) -> Result<Json<ItemResponse>, ItemsApiError> {
        let id = parse_item_id(&id.0)?;
        let item = self.item_store.get(id).await?;

        Ok(Json(ItemResponse {
            item: present(&item, self.item_store.now()),
        }))
    }

    /// Replace an item's title and comment
    #[oai(path = "/items/:id", method = "patch", tag = "ItemsTags::Items")]
    async fn update_item(
        &self,
        id: Path<String>,
        body: Option<Json<ItemRequest>>,
    ) -> Result<Json<ItemResponse>, ItemsApiError> {
        let id = parse_item_id(&id.0)?;
        let body = request_fields(body);
        let item = self
            .item_store
            .update(id, body.title.as_deref(), body.comment.as_deref())
            .await?;

        Ok(Json(ItemResponse {
            item: present(&item, self.item_store.now()),
        }))
    }

    /// Delete an item
    ///
    /// Echoes the item as it was before deletion
    #[oai(path = "/items/:id", method = "delete", tag = "ItemsTags::Items")]
    async fn delete_item(&self, id: Path<String>) -> Result<Json<ItemResponse>, ItemsApiError> {
        let id = parse_item_id(&id.0)?;
        let item = self.item_store.delete(id).await?;

        Ok(Json(ItemResponse {
            item: present(&item, self.item_store.now()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::utils::setup_test_store;

    async fn setup_api() -> (ItemsApi, Arc<ItemStore>, Arc<crate::services::FixedClock>) {
        let (_db, store, clock) = setup_test_store().await;
        (ItemsApi::new(store.clone()), store, clock)
    }

    #[tokio::test]
    async fn test_create_item_returns_derived_fields() {
        let (api, _store, _clock) = setup_api().await;

        let response = api
            .create_item(Some(Json(ItemRequest::new("Hello", "World"))))
            .await
            .unwrap();

        let item = &response.0.item;
        assert!(item.id > 0);
        assert_eq!(item.title, "Hello");
        assert_eq!(item.created_date, item.updated_date);
        assert_eq!(item.created_date, "2023-11-14 22:13:20");
        assert_eq!(item.written_at, "1 second ago");
    }

    #[tokio::test]
    async fn test_create_item_with_missing_comment_is_422() {
        let (api, store, _clock) = setup_api().await;

        let request = ItemRequest {
            title: Some("Hello".to_string()),
            comment: None,
        };
        let err = api.create_item(Some(Json(request))).await.unwrap_err();

        assert_eq!(err.status_code(), 422);
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_items_newest_first_with_relative_times() {
        let (api, _store, clock) = setup_api().await;

        api.create_item(Some(Json(ItemRequest::new("first", "a")))).await.unwrap();
        clock.advance(120);
        api.create_item(Some(Json(ItemRequest::new("second", "b")))).await.unwrap();
        clock.advance(60);

        let response = api.list_items().await.unwrap();
        let items = &response.0.items;

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "second");
        assert_eq!(items[0].written_at, "1 minute ago");
        assert_eq!(items[1].title, "first");
        assert_eq!(items[1].written_at, "3 minutes ago");
    }

    #[tokio::test]
    async fn test_show_unknown_item_is_404() {
        let (api, _store, _clock) = setup_api().await;

        let err = api.show_item(Path("999999".to_string())).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_update_item_refreshes_modified_fields() {
        let (api, _store, clock) = setup_api().await;
        let created = api
            .create_item(Some(Json(ItemRequest::new("Hello", "World"))))
            .await
            .unwrap()
            .0
            .item;

        clock.advance(3600);
        let updated = api
            .update_item(Path(created.id.to_string()), Some(Json(ItemRequest::new("Hi", "There"))))
            .await
            .unwrap()
            .0
            .item;

        assert_eq!(updated.title, "Hi");
        assert_eq!(updated.comment, "There");
        assert_eq!(updated.created_date, created.created_date);
        assert_eq!(updated.updated_at, "2023-11-14T23:13:20Z");
        assert_eq!(updated.written_at, "1 hour ago");
        assert_eq!(updated.modified_at, "1 second ago");
    }

    #[tokio::test]
    async fn test_update_with_empty_title_is_422_and_unchanged() {
        let (api, _store, _clock) = setup_api().await;
        let created = api
            .create_item(Some(Json(ItemRequest::new("Hello", "World"))))
            .await
            .unwrap()
            .0
            .item;

        let err = api
            .update_item(Path(created.id.to_string()), Some(Json(ItemRequest::new("", "x"))))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 422);

        let shown = api.show_item(Path(created.id.to_string())).await.unwrap().0.item;
        assert_eq!(shown, created);
    }

    #[tokio::test]
    async fn test_update_unknown_item_is_404() {
        let (api, _store, _clock) = setup_api().await;

        let err = api
            .update_item(Path("999999".to_string()), Some(Json(ItemRequest::new("a", "b"))))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_delete_item_echoes_deleted_record() {
        let (api, _store, _clock) = setup_api().await;
        let created = api
            .create_item(Some(Json(ItemRequest::new("Hello", "World"))))
            .await
            .unwrap()
            .0
            .item;

        let deleted = api.delete_item(Path(created.id.to_string())).await.unwrap().0.item;
        assert_eq!(deleted, created);

        let err = api.show_item(Path(created.id.to_string())).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_delete_unknown_item_is_404() {
        let (api, _store, _clock) = setup_api().await;

        let err = api.delete_item(Path("999999".to_string())).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_non_numeric_and_out_of_range_ids_are_404() {
        let (api, _store, _clock) = setup_api().await;

        for raw in ["abc", "4294967296", "1.5"] {
            let err = api.show_item(Path(raw.to_string())).await.unwrap_err();
            assert_eq!(err.status_code(), 404, "show {}", raw);

            let err = api.delete_item(Path(raw.to_string())).await.unwrap_err();
            assert_eq!(err.status_code(), 404, "delete {}", raw);
        }

        let err = api
            .update_item(Path("abc".to_string()), None)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_create_without_body_reports_both_fields() {
        let (api, store, _clock) = setup_api().await;

        let err = api.create_item(None).await.unwrap_err();

        match err {
            ItemsApiError::ValidationFailed(json) => {
                assert!(json.0.errors.contains_key("title"));
                assert!(json.0.errors.contains_key("comment"));
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
