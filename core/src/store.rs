//! The in-memory todo collection and its operations.
//!
//! # Design
//! `TodoStore` owns a plain `Vec` kept in insertion order, the order both
//! listing operations return. Lookups are linear scans; the collection lives
//! for a single process and stays small. Every operation completes
//! synchronously and either succeeds atomically or leaves the store
//! untouched.
//!
//! Sequential ids advance a counter that never rewinds, so an id is never
//! reused after its todo is deleted. UUID mode draws a fresh v4 per create.

use chrono::Utc;
use uuid::Uuid;

use crate::error::StoreError;
use crate::types::{CreateTodo, IdMode, Page, Priority, Todo, TodoId};

/// Number of todos a listing returns when the caller does not specify a
/// limit.
pub const DEFAULT_LIMIT: usize = 5;

/// Sample todos loaded by [`TodoStore::seeded`] so a freshly started server
/// has data to serve.
const SEED_TODOS: [(&str, bool, Priority); 5] = [
    ("Plan team retreat for Q4", false, Priority::High),
    ("Submit monthly expense report", true, Priority::Medium),
    ("Prepare presentation for stakeholder meeting", false, Priority::High),
    ("Renew software licenses", false, Priority::Low),
    ("Book flights for conference in September", true, Priority::Medium),
];

/// Insertion-ordered, in-memory collection of todos.
#[derive(Debug, Clone)]
pub struct TodoStore {
    todos: Vec<Todo>,
    mode: IdMode,
    next_id: u64,
}

impl TodoStore {
    /// Empty store allocating ids according to `mode`.
    pub fn new(mode: IdMode) -> Self {
        Self {
            todos: Vec::new(),
            mode,
            next_id: 1,
        }
    }

    /// Store pre-loaded with the sample todos.
    pub fn seeded(mode: IdMode) -> Self {
        let mut store = Self::new(mode);
        for (title, completed, priority) in SEED_TODOS {
            store
                .create(CreateTodo {
                    title: Some(title.to_string()),
                    completed,
                    priority,
                    created_at: None,
                })
                .expect("seed titles are non-empty");
        }
        store
    }

    /// First `limit` todos in insertion order. Never fails.
    pub fn list(&self, limit: usize) -> Vec<Todo> {
        self.todos.iter().take(limit).cloned().collect()
    }

    /// The page of up to `limit` todos following `cursor`.
    ///
    /// `cursor` is the id of the last todo of the previous page; `None`
    /// starts from the beginning. A cursor whose todo has been deleted since
    /// the page was handed out yields an empty final page, the normal
    /// end-of-scroll shape for clients holding a stale token.
    pub fn page(&self, cursor: Option<TodoId>, limit: usize) -> Page {
        let start = match cursor {
            None => 0,
            Some(id) => match self.position(id) {
                Some(index) => index + 1,
                None => self.todos.len(),
            },
        };
        let todos: Vec<Todo> = self.todos.iter().skip(start).take(limit).cloned().collect();
        let has_next_page = start + todos.len() < self.todos.len();
        let next_cursor = if has_next_page {
            todos.last().map(|todo| todo.id)
        } else {
            None
        };
        Page {
            todos,
            next_cursor,
            has_next_page,
        }
    }

    /// Validate and insert a new todo, returning the stored record.
    pub fn create(&mut self, input: CreateTodo) -> Result<Todo, StoreError> {
        let title = input.title.unwrap_or_default();
        if title.trim().is_empty() {
            return Err(StoreError::Validation("Title is required".to_string()));
        }
        let todo = Todo {
            id: self.allocate_id(),
            title,
            completed: input.completed,
            created_at: input.created_at.unwrap_or_else(Utc::now),
            priority: input.priority,
        };
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Flip the completion flag of the todo with `id` and return the updated
    /// record. No other field changes.
    pub fn toggle(&mut self, id: TodoId) -> Result<Todo, StoreError> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        let todo = &mut self.todos[index];
        todo.completed = !todo.completed;
        Ok(todo.clone())
    }

    /// Remove the todo with `id` permanently.
    pub fn delete(&mut self, id: TodoId) -> Result<(), StoreError> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        self.todos.remove(index);
        Ok(())
    }

    /// Number of live todos.
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    fn position(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id == id)
    }

    fn allocate_id(&mut self) -> TodoId {
        match self.mode {
            IdMode::Sequential => {
                let id = TodoId::Seq(self.next_id);
                self.next_id += 1;
                id
            }
            IdMode::Uuid => TodoId::Uuid(Uuid::new_v4()),
        }
    }
}
