//! Tests for TodoStore.

use uuid::Uuid;

use crate::store::{
    CreateTodoRequest, ListTodosRequest, Priority, SearchTodosRequest, StatusFilter, TodoStore,
    UpdateTodoRequest,
};

fn create_request(title: &str) -> CreateTodoRequest {
    CreateTodoRequest {
        title: title.to_string(),
        description: None,
        priority: Priority::Medium,
        tags: vec![],
    }
}

fn update_request(id: &str) -> UpdateTodoRequest {
    UpdateTodoRequest {
        id: id.to_string(),
        title: None,
        description: None,
        completed: None,
        priority: None,
        tags: None,
    }
}

#[test]
fn create_applies_defaults() {
    let store = TodoStore::new();

    let todo = store.create(&create_request("Write the report"));

    assert_eq!(todo.title, "Write the report");
    assert!(!todo.completed);
    assert!(todo.completed_at.is_none());
    assert_eq!(todo.priority, Priority::Medium);
    assert!(todo.tags.is_empty());
    assert!(todo.description.is_none());
}

#[test]
fn create_issues_unique_ids() {
    let store = TodoStore::new();

    let first = store.create(&create_request("First"));
    let second = store.create(&create_request("Second"));

    assert_ne!(first.id, second.id);
}

#[test]
fn create_keeps_supplied_fields() {
    let store = TodoStore::new();

    let todo = store.create(&CreateTodoRequest {
        title: "Review the patch".to_string(),
        description: Some("Check the pagination math".to_string()),
        priority: Priority::High,
        tags: vec!["review".to_string(), "urgent".to_string()],
    });

    assert_eq!(todo.description.as_deref(), Some("Check the pagination math"));
    assert_eq!(todo.priority, Priority::High);
    assert_eq!(todo.tags, vec!["review", "urgent"]);
}

#[test]
fn get_is_idempotent() {
    let store = TodoStore::new();
    let todo = store.create(&create_request("Read twice"));

    let first = store.get(todo.id).expect("todo should exist");
    let second = store.get(todo.id).expect("todo should exist");

    assert_eq!(first, second);
}

#[test]
fn get_missing_returns_none() {
    let store = TodoStore::new();

    assert!(store.get(Uuid::new_v4()).is_none());
}

#[test]
fn update_is_partial() {
    let store = TodoStore::new();
    let created = store.create(&CreateTodoRequest {
        title: "Original title".to_string(),
        description: Some("Original description".to_string()),
        priority: Priority::High,
        tags: vec!["keep".to_string()],
    });

    let mut request = update_request(&created.id.to_string());
    request.title = Some("New title".to_string());
    let updated = store.update(&request).expect("todo should exist");

    assert_eq!(updated.title, "New title");
    assert_eq!(updated.description.as_deref(), Some("Original description"));
    assert_eq!(updated.priority, Priority::High);
    assert_eq!(updated.tags, vec!["keep"]);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.completed_at.is_none());
}

#[test]
fn update_missing_returns_none() {
    let store = TodoStore::new();

    let request = update_request(&Uuid::new_v4().to_string());
    assert!(store.update(&request).is_none());
}

#[test]
fn completing_sets_completed_at() {
    let store = TodoStore::new();
    let created = store.create(&create_request("Finish this"));

    let mut request = update_request(&created.id.to_string());
    request.completed = Some(true);
    let completed = store.update(&request).expect("todo should exist");

    assert!(completed.completed);
    let completed_at = completed.completed_at.expect("completed_at should be set");
    assert!(completed_at >= created.created_at);
}

#[test]
fn reasserting_completed_preserves_timestamp() {
    let store = TodoStore::new();
    let created = store.create(&create_request("Finish once"));

    let mut request = update_request(&created.id.to_string());
    request.completed = Some(true);
    let first = store.update(&request).expect("todo should exist");
    let second = store.update(&request).expect("todo should exist");

    assert_eq!(first.completed_at, second.completed_at);
}

#[test]
fn uncompleting_clears_completed_at() {
    let store = TodoStore::new();
    let created = store.create(&create_request("Flip back"));

    let mut complete = update_request(&created.id.to_string());
    complete.completed = Some(true);
    store.update(&complete).expect("todo should exist");

    let mut reopen = update_request(&created.id.to_string());
    reopen.completed = Some(false);
    let reopened = store.update(&reopen).expect("todo should exist");

    assert!(!reopened.completed);
    assert!(reopened.completed_at.is_none());
}

#[test]
fn delete_removes_the_todo() {
    let store = TodoStore::new();
    let created = store.create(&create_request("Short lived"));

    let deleted = store
        .delete(&created.id.to_string())
        .expect("well-formed id should not fail validation");
    assert!(deleted);
    assert!(store.get(created.id).is_none());
}

#[test]
fn delete_missing_returns_false() {
    let store = TodoStore::new();
    store.create(&create_request("Survivor"));

    let deleted = store
        .delete(&Uuid::new_v4().to_string())
        .expect("well-formed id should not fail validation");

    assert!(!deleted);
    assert_eq!(store.stats().total, 1);
}

#[test]
fn delete_malformed_id_is_a_validation_failure() {
    let store = TodoStore::new();
    store.create(&create_request("Survivor"));

    let result = store.delete("not-a-uuid");

    assert!(result.is_err());
    assert_eq!(store.stats().total, 1);
}

#[test]
fn stats_counts_add_up() {
    let store = TodoStore::new();
    let a = store.create(&create_request("One"));
    store.create(&create_request("Two"));
    store.create(&create_request("Three"));

    let mut complete = update_request(&a.id.to_string());
    complete.completed = Some(true);
    store.update(&complete).expect("todo should exist");

    let stats = store.stats();
    assert_eq!(stats.completed + stats.pending, stats.total);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.completed, 1);
}

#[test]
fn priority_scenario() {
    let store = TodoStore::new();
    let mut high = create_request("High priority work");
    high.priority = Priority::High;
    let high = store.create(&high);
    let mut medium = create_request("Medium priority work");
    medium.priority = Priority::Medium;
    store.create(&medium);
    let mut low = create_request("Low priority work");
    low.priority = Priority::Low;
    store.create(&low);

    let pending = store.list(&ListTodosRequest {
        status: StatusFilter::Pending,
        ..ListTodosRequest::default()
    });
    assert_eq!(pending.total, 3);

    let mut complete = update_request(&high.id.to_string());
    complete.completed = Some(true);
    store.update(&complete).expect("todo should exist");

    let stats = store.stats();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.pending, 2);
}

#[test]
fn list_sorts_most_recent_first() {
    let store = TodoStore::new();
    let first = store.create(&create_request("Oldest"));
    let second = store.create(&create_request("Middle"));
    let third = store.create(&create_request("Newest"));

    let page = store.list(&ListTodosRequest::default());

    let ids: Vec<_> = page.todos.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);
}

#[test]
fn list_paginates_and_reports_has_more() {
    let store = TodoStore::new();
    for index in 0..5 {
        store.create(&create_request(&format!("Todo {}", index)));
    }

    let page = store.list(&ListTodosRequest {
        limit: 2,
        offset: 0,
        ..ListTodosRequest::default()
    });
    assert_eq!(page.todos.len(), 2);
    assert_eq!(page.total, 5);
    assert_eq!(page.limit, 2);
    assert_eq!(page.offset, 0);
    assert!(page.has_more);

    let last = store.list(&ListTodosRequest {
        limit: 2,
        offset: 4,
        ..ListTodosRequest::default()
    });
    assert_eq!(last.todos.len(), 1);
    assert!(!last.has_more);

    let past_the_end = store.list(&ListTodosRequest {
        limit: 2,
        offset: 10,
        ..ListTodosRequest::default()
    });
    assert!(past_the_end.todos.is_empty());
    assert_eq!(past_the_end.total, 5);
    assert!(!past_the_end.has_more);
}

#[test]
fn list_filters_by_priority_and_tags() {
    let store = TodoStore::new();
    let mut tagged = create_request("Tagged todo");
    tagged.tags = vec!["a".to_string(), "b".to_string()];
    let tagged = store.create(&tagged);
    let mut high = create_request("High todo");
    high.priority = Priority::High;
    let high = store.create(&high);

    let by_tag = store.list(&ListTodosRequest {
        tags: Some(vec!["b".to_string(), "c".to_string()]),
        ..ListTodosRequest::default()
    });
    assert_eq!(by_tag.total, 1);
    assert_eq!(by_tag.todos[0].id, tagged.id);

    let by_priority = store.list(&ListTodosRequest {
        priority: Some(Priority::High),
        ..ListTodosRequest::default()
    });
    assert_eq!(by_priority.total, 1);
    assert_eq!(by_priority.todos[0].id, high.id);
}

#[test]
fn search_is_case_insensitive() {
    let store = TodoStore::new();
    store.create(&create_request("Learn MCP"));
    store.create(&create_request("Unrelated"));

    let results = store.search(&SearchTodosRequest {
        search_term: "learn".to_string(),
        status: StatusFilter::All,
        priority: None,
    });

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Learn MCP");
}

#[test]
fn search_matches_description_but_not_absent_description() {
    let store = TodoStore::new();
    let mut described = create_request("Plain title");
    described.description = Some("Contains the keyword inside".to_string());
    store.create(&described);
    store.create(&create_request("Also plain"));

    let results = store.search(&SearchTodosRequest {
        search_term: "KEYWORD".to_string(),
        status: StatusFilter::All,
        priority: None,
    });

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Plain title");
}

#[test]
fn search_composes_with_status_filter() {
    let store = TodoStore::new();
    let done = store.create(&create_request("Ship release notes"));
    store.create(&create_request("Ship the build"));

    let mut complete = update_request(&done.id.to_string());
    complete.completed = Some(true);
    store.update(&complete).expect("todo should exist");

    let results = store.search(&SearchTodosRequest {
        search_term: "ship".to_string(),
        status: StatusFilter::Pending,
        priority: None,
    });

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Ship the build");
}

#[test]
fn sample_data_passes_its_own_invariants() {
    let store = TodoStore::with_sample_data();

    let stats = store.stats();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.completed + stats.pending, stats.total);

    for todo in store.list(&ListTodosRequest::default()).todos {
        assert_eq!(todo.completed, todo.completed_at.is_some());
    }
}
