//! Error types for store operations.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers answer it with a
//! different status code than a validation failure, and it carries the id
//! that missed so the transport layer can log it. Anything the store cannot
//! accept as input lands in `Validation` with a client-facing message.

use thiserror::Error;

use crate::types::TodoId;

/// Errors returned by [`TodoStore`](crate::TodoStore) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A required field is missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// No todo with the given id exists in the store.
    #[error("todo {0} not found")]
    NotFound(TodoId),
}
