//! In-memory todo store for the todo service.
//!
//! # Overview
//! Holds the authoritative collection of todos for the process lifetime and
//! exposes validated read/mutate operations: list, cursor paging, create,
//! toggle, delete. No HTTP, no I/O — the server crate owns the transport and
//! calls into this crate, keeping the store fully deterministic and testable.
//!
//! # Design
//! - `TodoStore` is a plain owned struct; the embedding server decides how
//!   to share it (an `Arc<RwLock<_>>` in the HTTP adapter).
//! - The collection preserves insertion order, which both listing operations
//!   rely on.
//! - The identifier shape (integer counter or UUID) is selected per store
//!   via [`IdMode`]; see [`types`] for the rationale.

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::{TodoStore, DEFAULT_LIMIT};
pub use types::{CreateTodo, IdMode, InvalidId, Page, Priority, Todo, TodoId};
