//! Shared building blocks for the menu service crates.

pub mod types;

pub mod utils {
    pub mod logging;
}
