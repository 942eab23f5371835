use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::errors::ServiceError;
use super::domain::{MenuItem, RemovedMenuItem};
use super::payload::MenuItemPayload;
use super::repository::MenuRepository;
use super::{seed, ENTITY};

/// In-memory, ordered collection of menu items.
///
/// Listing preserves insertion order. Every read-modify-write sequence
/// (id assignment + append, lookup + merge, lookup + splice) runs under a
/// single write guard, so concurrent requests never interleave inside one.
#[derive(Clone, Default)]
pub struct MenuStore {
    inner: Arc<RwLock<Vec<MenuItem>>>,
}

impl MenuStore {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { inner: Arc::new(RwLock::new(items)) }
    }

    /// Store pre-filled with the six default dishes.
    pub fn seeded() -> Self {
        Self::new(seed::menu_items())
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// All items, in insertion order.
    pub async fn list_all(&self) -> Vec<MenuItem> {
        self.inner.read().await.clone()
    }

    pub async fn get_by_id(&self, id: u64) -> Result<MenuItem, ServiceError> {
        let items = self.inner.read().await;
        items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(ENTITY))
    }

    /// Validate, assign `max id + 1`, append.
    pub async fn create(&self, payload: MenuItemPayload) -> Result<MenuItem, ServiceError> {
        let input = payload.into_new_item()?;
        let mut items = self.inner.write().await;
        let item = input.into_item(next_id(&items));
        items.push(item.clone());
        info!(id = item.id, name = %item.name, "menu item created");
        Ok(item)
    }

    /// Merge the provided fields into the existing record, keeping its position.
    pub async fn update(&self, id: u64, payload: MenuItemPayload) -> Result<MenuItem, ServiceError> {
        let mut items = self.inner.write().await;
        let existing = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| ServiceError::not_found(ENTITY))?;
        let patch = payload.into_patch()?;
        patch.apply(existing);
        info!(id, "menu item updated");
        Ok(existing.clone())
    }

    pub async fn remove(&self, id: u64) -> Result<RemovedMenuItem, ServiceError> {
        let mut items = self.inner.write().await;
        let index = items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| ServiceError::not_found(ENTITY))?;
        let removed = items.remove(index);
        debug!(remaining = items.len(), "menu collection shrunk");
        info!(id, "menu item removed");
        Ok(RemovedMenuItem::new(removed))
    }
}

fn next_id(items: &[MenuItem]) -> u64 {
    items.iter().map(|item| item.id).max().unwrap_or(0) + 1
}

#[async_trait]
impl MenuRepository for MenuStore {
    async fn list_all(&self) -> Vec<MenuItem> { self.list_all().await }
    async fn get_by_id(&self, id: u64) -> Result<MenuItem, ServiceError> { self.get_by_id(id).await }
    async fn create(&self, payload: MenuItemPayload) -> Result<MenuItem, ServiceError> { self.create(payload).await }
    async fn update(&self, id: u64, payload: MenuItemPayload) -> Result<MenuItem, ServiceError> { self.update(id, payload).await }
    async fn remove(&self, id: u64) -> Result<RemovedMenuItem, ServiceError> { self.remove(id).await }
}
