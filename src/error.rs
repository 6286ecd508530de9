use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::validation::ValidationError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid number for {key}: {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("DELIVERY_AREAS must name at least one area")]
    EmptyAreaList,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),
    #[error("In-stock product has no sizes: {0}")]
    MissingSizes(String),
}

/// Errors that can occur while driving an order session.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(String),
    #[error("পণ্য খুঁজে পাওয়া যায়নি: {0}")]
    ProductNotFound(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for SessionError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => SessionError::NotFound(id),
            // Sessions never reject create or action requests.
            other => SessionError::ActorCommunicationError(other.to_string()),
        }
    }
}

/// Errors that can occur during checkout.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Session not found: {0}")]
    SessionNotFound(String),
    #[error("Order total could not be computed")]
    TotalUnavailable,
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<SessionError> for OrderError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NotFound(id) => OrderError::SessionNotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}
