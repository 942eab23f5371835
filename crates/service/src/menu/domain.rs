use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORY: &str = "entree";
pub const REMOVED_MESSAGE: &str = "Menu item removed";

/// A dish on the menu.
/// - `id` is assigned by the store and never changes
/// - `ingredients` keeps the order the client sent
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub ingredients: Vec<String>,
    pub available: bool,
}

/// Body of a successful delete: confirmation plus the record that was dropped.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct RemovedMenuItem {
    pub message: &'static str,
    pub item: MenuItem,
}

impl RemovedMenuItem {
    pub fn new(item: MenuItem) -> Self {
        Self { message: REMOVED_MESSAGE, item }
    }
}
