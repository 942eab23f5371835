use std::sync::Arc;

use service::{MenuRepository, MenuStore};

/// Shared handler state. The repository is built once at startup and injected here.
#[derive(Clone)]
pub struct AppState {
    pub menu: Arc<dyn MenuRepository>,
}

impl AppState {
    pub fn new(menu: Arc<dyn MenuRepository>) -> Self {
        Self { menu }
    }

    /// State backed by a fresh in-memory store holding the seed menu.
    pub fn seeded() -> Self {
        Self::new(Arc::new(MenuStore::seeded()))
    }
}
