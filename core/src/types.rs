//! Domain types for the todo API.
//!
//! # Design
//! A store allocates identifiers in one of two shapes, chosen at
//! construction: a monotonically increasing integer or a fresh v4 UUID.
//! `TodoId` covers both as an untagged union, so a record serializes to a
//! bare number or a UUID string and path parameters parse whichever form
//! the client sends. Everything else is plain data with serde derives.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Identifier allocation strategy for a [`TodoStore`](crate::TodoStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdMode {
    /// Monotonically increasing integer counter, starting at 1.
    #[default]
    Sequential,
    /// Fresh v4 UUID per todo.
    Uuid,
}

/// Unique identifier of a todo, in either of the two supported shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Seq(u64),
    Uuid(Uuid),
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Seq(n) => write!(f, "{n}"),
            TodoId::Uuid(u) => write!(f, "{u}"),
        }
    }
}

/// The raw text of a path or cursor parameter is neither an integer nor a
/// UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid todo id")]
pub struct InvalidId;

impl FromStr for TodoId {
    type Err = InvalidId;

    fn from_str(raw: &str) -> Result<Self, InvalidId> {
        if let Ok(n) = raw.parse::<u64>() {
            return Ok(TodoId::Seq(n));
        }
        Uuid::parse_str(raw).map(TodoId::Uuid).map_err(|_| InvalidId)
    }
}

/// Priority of a todo. Upper case on the wire: `"LOW"`, `"MEDIUM"`, `"HIGH"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// A single todo item as stored and as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    /// Creation timestamp, RFC 3339 in JSON.
    pub created_at: DateTime<Utc>,
    pub priority: Priority,
}

/// Request payload for creating a new todo.
///
/// `title` stays optional at the type level so a missing field reaches the
/// store as a validation failure with a descriptive message instead of a
/// deserialization rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    /// Optional client-supplied creation timestamp; stamped server-side
    /// when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl CreateTodo {
    /// Payload with only a title, everything else defaulted.
    pub fn titled(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Self::default()
        }
    }
}

/// One page of a cursor-paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub todos: Vec<Todo>,
    /// Cursor for the next page; `null` once the store is exhausted.
    pub next_cursor: Option<TodoId>,
    pub has_next_page: bool,
}
