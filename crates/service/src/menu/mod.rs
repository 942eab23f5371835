//! Menu items: model, payload validation, storage.

pub mod domain;
pub mod payload;
pub mod repository;
pub mod seed;
pub mod store;

/// Entity label used in not-found messages.
pub const ENTITY: &str = "Menu item";
