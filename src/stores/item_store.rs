use crate::errors::{InternalError, ItemError};
use crate::services::{validate_item, Clock, SystemClock};
use crate::types::db::item::{self, ActiveModel, Entity as Item};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait, QueryOrder, Set,
    TransactionTrait,
};
use std::sync::Arc;
use tokio::sync::Mutex;

/// ItemStore manages item records in the database
///
/// Reads go straight to the connection. Writes are serialized through
/// `write_lock` so one write commits fully before the next starts.
pub struct ItemStore {
    db: DatabaseConnection,
    clock: Arc<dyn Clock + Send + Sync>,
    write_lock: Mutex<()>,
}

impl ItemStore {
    /// Create a new ItemStore using the system clock
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_clock(db, Arc::new(SystemClock))
    }

    /// Create a new ItemStore with an explicit time source
    pub fn with_clock(db: DatabaseConnection, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            db,
            clock,
            write_lock: Mutex::new(()),
        }
    }

    /// Current time according to the store's clock
    pub fn now(&self) -> i64 {
        self.clock.now()
    }

    /// List all items, newest first by id
    pub async fn list(&self) -> Result<Vec<item::Model>, InternalError> {
        let items = Item::find()
            .order_by_desc(item::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_items", e))?;

        tracing::debug!(count = items.len(), "Listed items");

        Ok(items)
    }

    /// Count stored items
    pub async fn count(&self) -> Result<u64, InternalError> {
        Item::find()
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("count_items", e))
    }

    /// Create a new item
    ///
    /// # Returns
    /// * `Ok(Model)` - The persisted item with its assigned id and timestamps
    /// * `Err(InternalError::Item(ItemError::Validation))` - Title or comment missing/empty
    /// * `Err(InternalError)` - Database error
    pub async fn create(
        &self,
        title: Option<&str>,
        comment: Option<&str>,
    ) -> Result<item::Model, InternalError> {
        let fields = validate_item(title, comment)?;

        let _guard = self.write_lock.lock().await;
        let now = self.clock.now();

        let new_item = ActiveModel {
            id: NotSet,
            title: Set(fields.title),
            comment: Set(fields.comment),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let created = new_item
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("create_item", e))?;

        tracing::info!(item_id = created.id, "Item created");

        Ok(created)
    }

    /// Get a single item by id
    ///
    /// # Returns
    /// * `Ok(Model)` - The item
    /// * `Err(InternalError::Item(ItemError::NotFound))` - No such id
    /// * `Err(InternalError)` - Database error
    pub async fn get(&self, id: i32) -> Result<item::Model, InternalError> {
        Item::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("get_item", e))?
            .ok_or_else(|| ItemError::NotFound(id).into())
    }

    /// Replace an item's title and comment
    ///
    /// Existence is checked before validation. `updated_at` is refreshed
    /// and never moves before `created_at`.
    ///
    /// # Returns
    /// * `Ok(Model)` - The updated item
    /// * `Err(InternalError::Item(ItemError::NotFound))` - No such id
    /// * `Err(InternalError::Item(ItemError::Validation))` - Title or comment missing/empty
    /// * `Err(InternalError)` - Database or transaction error
    pub async fn update(
        &self,
        id: i32,
        title: Option<&str>,
        comment: Option<&str>,
    ) -> Result<item::Model, InternalError> {
        let _guard = self.write_lock.lock().await;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| InternalError::transaction("begin_update_item", e))?;

        let existing = Item::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| InternalError::database("get_item_for_update", e))?
            .ok_or(ItemError::NotFound(id))?;

        let fields = validate_item(title, comment)?;
        let updated_at = self.clock.now().max(existing.created_at);

        let mut active_model: ActiveModel = existing.into();
        active_model.title = Set(fields.title);
        active_model.comment = Set(fields.comment);
        active_model.updated_at = Set(updated_at);

        let updated = active_model
            .update(&txn)
            .await
            .map_err(|e| InternalError::database("update_item", e))?;

        txn.commit()
            .await
            .map_err(|e| InternalError::transaction("commit_update_item", e))?;

        tracing::info!(item_id = id, "Item updated");

        Ok(updated)
    }

    /// Delete an item and return its last state
    ///
    /// # Returns
    /// * `Ok(Model)` - The item as it was before deletion
    /// * `Err(InternalError::Item(ItemError::NotFound))` - No such id
    /// * `Err(InternalError)` - Database or transaction error
    pub async fn delete(&self, id: i32) -> Result<item::Model, InternalError> {
        let _guard = self.write_lock.lock().await;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| InternalError::transaction("begin_delete_item", e))?;

        let existing = Item::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| InternalError::database("get_item_for_delete", e))?
            .ok_or(ItemError::NotFound(id))?;

        Item::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| InternalError::database("delete_item", e))?;

        txn.commit()
            .await
            .map_err(|e| InternalError::transaction("commit_delete_item", e))?;

        tracing::info!(item_id = id, "Item deleted");

        Ok(existing)
    }
}

impl std::fmt::Debug for ItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemStore")
            .field("db", &"<connection>")
            .finish()
    }
}
