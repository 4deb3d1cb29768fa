//! Domain models for the todo store.
//!
//! The request types double as the canonical operation schemas: their serde
//! defaults and schemars annotations are what the MCP tool listing is
//! generated from, and the validation rules in [`crate::validate`] enforce
//! the documented constraints on the same types.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum title length in characters.
pub const TITLE_MAX: usize = 200;
/// Maximum description length in characters.
pub const DESCRIPTION_MAX: usize = 500;
/// Maximum length of a single tag in characters.
pub const TAG_MAX: usize = 50;
/// Maximum number of tags per todo.
pub const TAGS_MAX: usize = 10;
/// Smallest accepted page size.
pub const LIMIT_MIN: usize = 1;
/// Largest accepted page size.
pub const LIMIT_MAX: usize = 100;

fn default_limit() -> usize {
    50
}

/// Priority of a todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!("Invalid priority: {}", s)),
        }
    }
}

/// Completion-status filter for list and search queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::All => write!(f, "all"),
            StatusFilter::Completed => write!(f, "completed"),
            StatusFilter::Pending => write!(f, "pending"),
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "completed" => Ok(StatusFilter::Completed),
            "pending" => Ok(StatusFilter::Pending),
            _ => Err(format!("Invalid status filter: {}", s)),
        }
    }
}

/// A single todo item.
///
/// `completed_at` is present exactly when `completed` is true; both are only
/// ever written together by [`crate::store::TodoStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub priority: Priority,
    pub tags: Vec<String>,
}

/// Input for the create operation. Only `title` is required.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateTodoRequest {
    #[schemars(description = "Title of the todo (1-200 characters)")]
    pub title: String,
    #[schemars(description = "Optional description (max 500 characters)")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[schemars(description = "Priority level: 'low', 'medium' (default), or 'high'")]
    #[serde(default)]
    pub priority: Priority,
    #[schemars(description = "Tags for categorization (each 1-50 characters, max 10)")]
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Input for the update operation. Fields left out are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTodoRequest {
    #[schemars(description = "UUID of the todo to update")]
    pub id: String,
    #[schemars(description = "New title (1-200 characters)")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[schemars(description = "New description (max 500 characters)")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[schemars(description = "Mark as completed or not")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[schemars(description = "New priority level: 'low', 'medium', or 'high'")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[schemars(description = "New tags (each 1-50 characters, max 10). Replaces all existing tags.")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Input for the delete operation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DeleteTodoRequest {
    #[schemars(description = "UUID of the todo to delete")]
    pub id: String,
}

/// Input for the get operation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetTodoRequest {
    #[schemars(description = "UUID of the todo to retrieve")]
    pub id: String,
}

/// Input for the list operation: filters plus pagination.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListTodosRequest {
    #[schemars(description = "Filter by completion status: 'all' (default), 'completed', 'pending'")]
    #[serde(default)]
    pub status: StatusFilter,
    #[schemars(description = "Filter by priority")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[schemars(description = "Filter by tags (OR logic - matches if ANY tag matches)")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[schemars(description = "Maximum number of results (1-100, default 50)")]
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[schemars(description = "Number of results to skip (default 0)")]
    #[serde(default)]
    pub offset: usize,
}

impl Default for ListTodosRequest {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            priority: None,
            tags: None,
            limit: default_limit(),
            offset: 0,
        }
    }
}

/// Input for the search operation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchTodosRequest {
    #[schemars(description = "Search term matched case-insensitively against title or description")]
    pub search_term: String,
    #[schemars(description = "Filter by completion status: 'all' (default), 'completed', 'pending'")]
    #[serde(default)]
    pub status: StatusFilter,
    #[schemars(description = "Filter by priority")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

/// Composable predicate set applied by list, search, and the resource views.
///
/// All active filters are AND'd together; the tag filter is OR internally
/// (any shared tag matches).
#[derive(Debug, Clone, Default)]
pub struct TodoFilters {
    pub status: StatusFilter,
    pub priority: Option<Priority>,
    pub tags: Option<Vec<String>>,
    pub search_term: Option<String>,
}

impl TodoFilters {
    /// Whether a todo passes every active filter.
    pub fn matches(&self, todo: &Todo) -> bool {
        match self.status {
            StatusFilter::All => {}
            StatusFilter::Completed => {
                if !todo.completed {
                    return false;
                }
            }
            StatusFilter::Pending => {
                if todo.completed {
                    return false;
                }
            }
        }

        if let Some(priority) = self.priority
            && todo.priority != priority
        {
            return false;
        }

        if let Some(tags) = &self.tags
            && !tags.is_empty()
            && !tags.iter().any(|tag| todo.tags.contains(tag))
        {
            return false;
        }

        if let Some(term) = &self.search_term {
            let needle = term.to_lowercase();
            let in_title = todo.title.to_lowercase().contains(&needle);
            let in_description = todo
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&needle));
            if !in_title && !in_description {
                return false;
            }
        }

        true
    }
}

impl From<&ListTodosRequest> for TodoFilters {
    fn from(request: &ListTodosRequest) -> Self {
        Self {
            status: request.status,
            priority: request.priority,
            tags: request.tags.clone(),
            search_term: None,
        }
    }
}

impl From<&SearchTodosRequest> for TodoFilters {
    fn from(request: &SearchTodosRequest) -> Self {
        Self {
            status: request.status,
            priority: request.priority,
            tags: None,
            search_term: Some(request.search_term.clone()),
        }
    }
}

/// One page of a filtered listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPage {
    /// The todos in this page.
    pub todos: Vec<Todo>,
    /// Total count of all matching todos (before pagination).
    pub total: usize,
    /// Limit that was applied.
    pub limit: usize,
    /// Offset that was applied.
    pub offset: usize,
    /// Whether more matching todos exist past this page.
    pub has_more: bool,
}

/// Collection-wide counts; `completed + pending == total` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}
