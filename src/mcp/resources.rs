//! MCP resource bodies.
//!
//! Builders for the four static `todo://` resources. Each returns a JSON
//! string rendered from a live store snapshot.

use serde_json::json;

use crate::store::{StatusFilter, TodoFilters, TodoStore};

/// `todo://all` — every todo with full details.
pub fn all_todos_json(store: &TodoStore) -> String {
    let todos = store.all(&TodoFilters::default());
    serde_json::to_string_pretty(&todos).unwrap_or_else(|_| "[]".to_string())
}

/// `todo://completed` — completed todos only.
pub fn completed_todos_json(store: &TodoStore) -> String {
    let todos = store.all(&TodoFilters {
        status: StatusFilter::Completed,
        ..TodoFilters::default()
    });
    serde_json::to_string_pretty(&todos).unwrap_or_else(|_| "[]".to_string())
}

/// `todo://pending` — pending todos only.
pub fn pending_todos_json(store: &TodoStore) -> String {
    let todos = store.all(&TodoFilters {
        status: StatusFilter::Pending,
        ..TodoFilters::default()
    });
    serde_json::to_string_pretty(&todos).unwrap_or_else(|_| "[]".to_string())
}

/// `todo://stats` — collection counts plus a completion-rate percentage.
pub fn stats_json(store: &TodoStore) -> String {
    let stats = store.stats();
    let completion_rate = if stats.total == 0 {
        "0.0%".to_string()
    } else {
        format!(
            "{:.1}%",
            stats.completed as f64 / stats.total as f64 * 100.0
        )
    };

    let body = json!({
        "total": stats.total,
        "completed": stats.completed,
        "pending": stats.pending,
        "completion_rate": completion_rate,
    });
    serde_json::to_string_pretty(&body).unwrap_or_else(|_| "{}".to_string())
}
