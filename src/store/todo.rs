//! In-memory todo store.
//!
//! Exclusive owner of the todo collection. Callers are expected to run every
//! request through the validation layer first; the only check the store
//! performs itself is the id format check on delete. All reads return
//! clones, never references into the map.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Duration, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use crate::validate::ValidationError;

use super::models::{
    CreateTodoRequest, ListTodosRequest, Priority, SearchTodosRequest, Todo, TodoFilters,
    TodoPage, TodoStats, UpdateTodoRequest,
};

struct StoredTodo {
    todo: Todo,
    /// Monotonic insertion counter; breaks created_at ties deterministically.
    seq: u64,
}

/// In-memory todo collection with filtering, pagination, and search.
pub struct TodoStore {
    todos: DashMap<Uuid, StoredTodo>,
    next_seq: AtomicU64,
}

impl TodoStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            todos: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    /// Create a store seeded with a few demonstration todos.
    ///
    /// The seed data is not part of the external contract; servers that want
    /// an empty collection use [`TodoStore::new`].
    pub fn with_sample_data() -> Self {
        let store = Self::new();
        let now = Utc::now();

        store.insert(Todo {
            id: Uuid::new_v4(),
            title: "Study the MCP protocol".to_string(),
            description: Some("Read the protocol docs and build a working example server".to_string()),
            completed: false,
            created_at: now,
            completed_at: None,
            priority: Priority::High,
            tags: vec!["study".to_string(), "rust".to_string(), "mcp".to_string()],
        });
        store.insert(Todo {
            id: Uuid::new_v4(),
            title: "Write a validation walkthrough".to_string(),
            description: Some("Document the sanitize and schema-check pipeline".to_string()),
            completed: true,
            created_at: now - Duration::days(1),
            completed_at: Some(now),
            priority: Priority::Medium,
            tags: vec!["tutorial".to_string(), "rust".to_string()],
        });
        store.insert(Todo {
            id: Uuid::new_v4(),
            title: "Extend unit test coverage".to_string(),
            description: Some("Cover the filtering and pagination edge cases".to_string()),
            completed: false,
            created_at: now - Duration::hours(12),
            completed_at: None,
            priority: Priority::Low,
            tags: vec!["tests".to_string(), "quality".to_string()],
        });

        store
    }

    fn insert(&self, todo: Todo) {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.todos.insert(todo.id, StoredTodo { todo, seq });
    }

    /// Create a new todo from a validated request.
    ///
    /// Assigns a fresh id and creation timestamp; `completed` starts false
    /// with no completion timestamp.
    pub fn create(&self, request: &CreateTodoRequest) -> Todo {
        let todo = Todo {
            id: Uuid::new_v4(),
            title: request.title.clone(),
            description: request.description.clone(),
            completed: false,
            created_at: Utc::now(),
            completed_at: None,
            priority: request.priority,
            tags: request.tags.clone(),
        };
        self.insert(todo.clone());
        todo
    }

    /// Apply a partial update. Returns `None` if no todo has the given id.
    ///
    /// Only fields present in the request change. Setting `completed: true`
    /// on a pending todo stamps `completed_at`; re-asserting it on an
    /// already-completed todo keeps the original timestamp; `completed:
    /// false` clears it.
    pub fn update(&self, request: &UpdateTodoRequest) -> Option<Todo> {
        let id = Uuid::parse_str(&request.id).ok()?;
        let mut entry = self.todos.get_mut(&id)?;
        let todo = &mut entry.todo;

        if let Some(title) = &request.title {
            todo.title = title.clone();
        }
        if let Some(description) = &request.description {
            todo.description = Some(description.clone());
        }
        if let Some(priority) = request.priority {
            todo.priority = priority;
        }
        if let Some(tags) = &request.tags {
            todo.tags = tags.clone();
        }
        if let Some(completed) = request.completed {
            if completed && !todo.completed {
                todo.completed_at = Some(Utc::now());
            }
            if !completed {
                todo.completed_at = None;
            }
            todo.completed = completed;
        }

        Some(todo.clone())
    }

    /// Remove a todo. Returns whether a removal occurred.
    ///
    /// A malformed id is a validation failure, not a missing todo.
    pub fn delete(&self, id: &str) -> Result<bool, ValidationError> {
        let id = Uuid::parse_str(id)
            .map_err(|_| ValidationError::single("id", "must be a valid UUID"))?;
        Ok(self.todos.remove(&id).is_some())
    }

    /// Exact lookup by id, no side effects.
    pub fn get(&self, id: Uuid) -> Option<Todo> {
        self.todos.get(&id).map(|entry| entry.todo.clone())
    }

    /// Filtered, sorted snapshot of the whole collection.
    ///
    /// Sorted by `created_at` descending; equal timestamps keep insertion
    /// order.
    pub fn all(&self, filters: &TodoFilters) -> Vec<Todo> {
        let mut matching: Vec<(u64, Todo)> = self
            .todos
            .iter()
            .filter(|entry| filters.matches(&entry.todo))
            .map(|entry| (entry.seq, entry.todo.clone()))
            .collect();
        matching.sort_by(|a, b| {
            b.1.created_at
                .cmp(&a.1.created_at)
                .then_with(|| a.0.cmp(&b.0))
        });
        matching.into_iter().map(|(_, todo)| todo).collect()
    }

    /// Filter, sort, and paginate.
    ///
    /// `total` counts matches before slicing; `has_more` reports whether the
    /// window `[offset, offset + limit)` stops short of the end.
    pub fn list(&self, request: &ListTodosRequest) -> TodoPage {
        let matching = self.all(&TodoFilters::from(request));
        let total = matching.len();
        let todos: Vec<Todo> = matching
            .into_iter()
            .skip(request.offset)
            .take(request.limit)
            .collect();

        TodoPage {
            todos,
            total,
            limit: request.limit,
            offset: request.offset,
            has_more: request.offset.saturating_add(request.limit) < total,
        }
    }

    /// Search title and description, combined with the request's filters.
    ///
    /// Returns the full sorted result, unpaginated.
    pub fn search(&self, request: &SearchTodosRequest) -> Vec<Todo> {
        self.all(&TodoFilters::from(request))
    }

    /// Counts over the unfiltered collection.
    pub fn stats(&self) -> TodoStats {
        // Single pass so the invariant holds even while other
        // threads are inserting.
        let mut total = 0;
        let mut completed = 0;
        for entry in self.todos.iter() {
            total += 1;
            if entry.todo.completed {
                completed += 1;
            }
        }
        TodoStats {
            total,
            completed,
            pending: total - completed,
        }
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}
