use thiserror::Error;

/// Message returned when a create request lacks a usable `name` or `price`.
pub const INVALID_CREATE_MESSAGE: &str = "Invalid payload: `name` and numeric `price` required";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    #[error("{0}")]
    InvalidPayload(String),
    #[error("{0}")]
    NotFound(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn invalid_payload(msg: impl Into<String>) -> Self { Self::InvalidPayload(msg.into()) }

    pub fn invalid_create() -> Self { Self::invalid_payload(INVALID_CREATE_MESSAGE) }
}
