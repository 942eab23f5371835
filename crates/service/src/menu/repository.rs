use async_trait::async_trait;

use crate::errors::ServiceError;
use super::domain::{MenuItem, RemovedMenuItem};
use super::payload::MenuItemPayload;

/// Trait abstraction for menu storage, so handlers can run against any backend.
#[async_trait]
pub trait MenuRepository: Send + Sync {
    async fn list_all(&self) -> Vec<MenuItem>;
    async fn get_by_id(&self, id: u64) -> Result<MenuItem, ServiceError>;
    async fn create(&self, payload: MenuItemPayload) -> Result<MenuItem, ServiceError>;
    async fn update(&self, id: u64, payload: MenuItemPayload) -> Result<MenuItem, ServiceError>;
    async fn remove(&self, id: u64) -> Result<RemovedMenuItem, ServiceError>;
}
