//! Service layer for the menu API.
//! - Owns the in-memory `MenuStore` and all query/mutation logic.
//! - Validates raw request payloads into typed inputs.
//! - Exposes `MenuRepository` so the HTTP layer does not depend on the backend.

pub mod errors;
pub mod menu;

pub use errors::ServiceError;
pub use menu::{
    domain::{MenuItem, RemovedMenuItem},
    payload::MenuItemPayload,
    repository::MenuRepository,
    store::MenuStore,
};
