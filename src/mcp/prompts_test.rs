//! Tests for prompt builders.

use rmcp::model::{GetPromptResult, PromptMessageContent, PromptMessageRole};
use serde_json::{Map, Value, json};

use crate::mcp::prompts::{
    todo_insights_prompt, todo_prioritization_prompt, todo_summary_prompt,
};
use crate::store::{CreateTodoRequest, Priority, TodoStore, UpdateTodoRequest};

fn args(pairs: &[(&str, &str)]) -> Option<Map<String, Value>> {
    let mut map = Map::new();
    for (key, value) in pairs {
        map.insert(key.to_string(), json!(value));
    }
    Some(map)
}

fn message_text(result: &GetPromptResult) -> &str {
    assert_eq!(result.messages.len(), 1);
    assert_eq!(result.messages[0].role, PromptMessageRole::User);
    match &result.messages[0].content {
        PromptMessageContent::Text { text } => text.as_str(),
        _ => panic!("Expected text message"),
    }
}

fn seeded_store() -> TodoStore {
    let store = TodoStore::new();
    let done = store.create(&CreateTodoRequest {
        title: "Completed task".to_string(),
        description: None,
        priority: Priority::High,
        tags: vec!["shipping".to_string()],
    });
    store.create(&CreateTodoRequest {
        title: "Open task".to_string(),
        description: Some("Still in flight".to_string()),
        priority: Priority::Low,
        tags: vec!["shipping".to_string(), "later".to_string()],
    });

    store
        .update(&UpdateTodoRequest {
            id: done.id.to_string(),
            title: None,
            description: None,
            completed: Some(true),
            priority: None,
            tags: None,
        })
        .expect("todo should exist");

    store
}

#[test]
fn summary_includes_stats_and_titles() {
    let store = seeded_store();

    let result = todo_summary_prompt(&store, None);
    let text = message_text(&result);

    assert!(text.contains("Completed: 1"));
    assert!(text.contains("Pending: 1"));
    assert!(text.contains("Completed task"));
    assert!(text.contains("Open task"));
    assert!(text.contains("shipping: 2 uses"));
}

#[test]
fn summary_can_exclude_completed_todos() {
    let store = seeded_store();

    let result = todo_summary_prompt(&store, args(&[("include_completed", "false")]));
    let text = message_text(&result);

    assert!(!text.contains("Completed task"));
    assert!(text.contains("Open task"));
    assert!(text.contains("(pending only)"));
}

#[test]
fn summary_reflects_the_period_argument() {
    let store = seeded_store();

    let result = todo_summary_prompt(&store, args(&[("period", "this week")]));

    assert!(message_text(&result).contains("this week"));
}

#[test]
fn prioritization_lists_only_pending_todos() {
    let store = seeded_store();

    let result = todo_prioritization_prompt(&store, None);
    let text = message_text(&result);

    assert!(text.contains("Open task"));
    assert!(!text.contains("Completed task"));
    assert!(text.contains("**Context:** general"));
    assert!(text.contains("**Focus area:** productivity"));
    assert!(text.contains("Total pending todos: 1"));
}

#[test]
fn prioritization_accepts_custom_arguments() {
    let store = seeded_store();

    let result = todo_prioritization_prompt(
        &store,
        args(&[("context", "sprint planning"), ("focus_area", "work")]),
    );
    let text = message_text(&result);

    assert!(text.contains("sprint planning"));
    assert!(text.contains("**Focus area:** work"));
}

#[test]
fn insights_reports_rates_and_tags() {
    let store = seeded_store();

    let result = todo_insights_prompt(&store, None);
    let text = message_text(&result);

    assert!(text.contains("**Analysis depth:** detailed"));
    assert!(text.contains("Total todos created: 2"));
    assert!(text.contains("Overall completion rate: 50.0%"));
    assert!(text.contains("Unique tags in use: 2"));
    assert!(text.contains("shipping (2)"));
}

#[test]
fn insights_expands_for_complete_depth() {
    let store = seeded_store();

    let shallow = todo_insights_prompt(&store, None);
    assert!(!message_text(&shallow).contains("Complete analysis requested"));

    let deep = todo_insights_prompt(&store, args(&[("analysis_depth", "complete")]));
    assert!(message_text(&deep).contains("Complete analysis requested"));
}

#[test]
fn prompts_handle_an_empty_store() {
    let store = TodoStore::new();

    let summary = todo_summary_prompt(&store, None);
    assert!(message_text(&summary).contains("Completion rate: 0.0%"));

    let insights = todo_insights_prompt(&store, None);
    assert!(message_text(&insights).contains("Total todos created: 0"));
}
