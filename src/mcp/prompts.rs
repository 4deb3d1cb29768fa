//! MCP prompts.
//!
//! Builders for the three analysis prompts. Each renders a user message from
//! a live store snapshot so the model receives current data, not placeholders.

use rmcp::model::{GetPromptResult, PromptMessage, PromptMessageRole};
use serde_json::{Map, Value};

use crate::store::{Priority, StatusFilter, Todo, TodoFilters, TodoStore};

fn arg<'a>(args: &'a Option<Map<String, Value>>, name: &str) -> Option<&'a str> {
    args.as_ref()
        .and_then(|a| a.get(name))
        .and_then(|v| v.as_str())
}

/// Tag usage counts, most frequent first; ties resolve alphabetically.
fn tag_frequencies(todos: &[Todo]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for tag in todos.iter().flat_map(|todo| todo.tags.iter()) {
        match counts.iter_mut().find(|(name, _)| name == tag) {
            Some((_, count)) => *count += 1,
            None => counts.push((tag.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

fn checklist_line(index: usize, todo: &Todo) -> String {
    let check = if todo.completed { "x" } else { " " };
    let tags = if todo.tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", todo.tags.join(", "))
    };
    format!(
        "{}. [{}] {} ({}){}",
        index + 1,
        check,
        todo.title,
        todo.priority,
        tags
    )
}

fn completion_rate(completed: usize, total: usize) -> String {
    if total == 0 {
        "0.0%".to_string()
    } else {
        format!("{:.1}%", completed as f64 / total as f64 * 100.0)
    }
}

/// `todo_summary` — analytical summary of the collection.
///
/// Args: `period` (free-form label, default "all"), `include_completed`
/// ("false" restricts the listing to pending todos).
pub fn todo_summary_prompt(store: &TodoStore, args: Option<Map<String, Value>>) -> GetPromptResult {
    let period = arg(&args, "period").unwrap_or("all");
    let include_completed = arg(&args, "include_completed") != Some("false");

    let stats = store.stats();
    let filters = TodoFilters {
        status: if include_completed {
            StatusFilter::All
        } else {
            StatusFilter::Pending
        },
        ..TodoFilters::default()
    };
    let todos = store.all(&filters);

    let priority_breakdown = [Priority::High, Priority::Medium, Priority::Low]
        .into_iter()
        .map(|priority| {
            let count = todos.iter().filter(|t| t.priority == priority).count();
            format!("- {}: {} todos", priority, count)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let top_tags = tag_frequencies(&todos)
        .into_iter()
        .take(5)
        .map(|(tag, count)| format!("- {}: {} uses", tag, count))
        .collect::<Vec<_>>()
        .join("\n");
    let top_tags = if top_tags.is_empty() {
        "No tags in use".to_string()
    } else {
        top_tags
    };

    let listing = todos
        .iter()
        .enumerate()
        .map(|(index, todo)| checklist_line(index, todo))
        .collect::<Vec<_>>()
        .join("\n");

    let scope = if include_completed {
        "(completed and pending)"
    } else {
        "(pending only)"
    };

    let text = format!(
        "Please provide an analytical summary of my todos based on the data below:\n\n\
         **Analysis period:** {period}\n\n\
         **Overall statistics:**\n\
         - Total todos: {listed}\n\
         - Completed: {completed}\n\
         - Pending: {pending}\n\
         - Completion rate: {rate}\n\n\
         **Priority breakdown:**\n{priority_breakdown}\n\n\
         **Most used tags:**\n{top_tags}\n\n\
         **Todo list {scope}:**\n{listing}\n\n\
         Provide insights on:\n\
         1. Productivity patterns\n\
         2. Suggested improvements\n\
         3. Priority analysis\n\
         4. Tag-based recommendations\n\
         5. Notable trends",
        period = period,
        listed = todos.len(),
        completed = stats.completed,
        pending = stats.pending,
        rate = completion_rate(stats.completed, stats.total),
        priority_breakdown = priority_breakdown,
        top_tags = top_tags,
        scope = scope,
        listing = listing,
    );

    GetPromptResult::new(vec![PromptMessage::new_text(PromptMessageRole::User, text)])
        .with_description("Analytical summary of the todo collection with statistics")
}

/// `todo_prioritization` — ask for an intelligent ordering of pending todos.
///
/// Args: `context` (default "general"), `focus_area` (default "productivity").
pub fn todo_prioritization_prompt(
    store: &TodoStore,
    args: Option<Map<String, Value>>,
) -> GetPromptResult {
    let context = arg(&args, "context").unwrap_or("general");
    let focus_area = arg(&args, "focus_area").unwrap_or("productivity");

    let pending = store.all(&TodoFilters {
        status: StatusFilter::Pending,
        ..TodoFilters::default()
    });

    let listing = pending
        .iter()
        .enumerate()
        .map(|(index, todo)| {
            format!(
                "{}. {}\n   - Current priority: {}\n   - Description: {}\n   - Tags: {}\n   - Created: {}",
                index + 1,
                todo.title,
                todo.priority,
                todo.description.as_deref().unwrap_or("No description"),
                if todo.tags.is_empty() {
                    "None".to_string()
                } else {
                    todo.tags.join(", ")
                },
                todo.created_at.format("%Y-%m-%d %H:%M"),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let high = pending.iter().filter(|t| t.priority == Priority::High).count();
    let medium = pending
        .iter()
        .filter(|t| t.priority == Priority::Medium)
        .count();
    let low = pending.iter().filter(|t| t.priority == Priority::Low).count();

    let text = format!(
        "Please analyze and suggest an intelligent prioritization for the following pending todos:\n\n\
         **Context:** {context}\n\
         **Focus area:** {focus_area}\n\n\
         **Pending todos to prioritize:**\n{listing}\n\n\
         **Context statistics:**\n\
         - Total pending todos: {total}\n\
         - Current priority distribution:\n\
           - High: {high}\n\
           - Medium: {medium}\n\
           - Low: {low}\n\n\
         Provide:\n\
         1. A prioritized list of the todos (1-{total})\n\
         2. A rationale for each ranking\n\
         3. Grouping or sequencing suggestions\n\
         4. Deadline recommendations\n\
         5. Potential dependencies between items",
        context = context,
        focus_area = focus_area,
        listing = listing,
        total = pending.len(),
        high = high,
        medium = medium,
        low = low,
    );

    GetPromptResult::new(vec![PromptMessage::new_text(PromptMessageRole::User, text)])
        .with_description("Intelligent prioritization suggestions for pending todos")
}

/// `todo_insights` — productivity-pattern analysis over the full collection.
///
/// Args: `analysis_depth` ("surface", "detailed" (default), or "complete").
pub fn todo_insights_prompt(
    store: &TodoStore,
    args: Option<Map<String, Value>>,
) -> GetPromptResult {
    let analysis_depth = arg(&args, "analysis_depth").unwrap_or("detailed");

    let todos = store.all(&TodoFilters::default());
    let completed: Vec<&Todo> = todos.iter().filter(|t| t.completed).collect();

    let avg_completion_days = if completed.is_empty() {
        0.0
    } else {
        let total_ms: i64 = completed
            .iter()
            .map(|todo| {
                let finished = todo.completed_at.unwrap_or(todo.created_at);
                (finished - todo.created_at).num_milliseconds()
            })
            .sum();
        total_ms as f64 / completed.len() as f64 / (1000.0 * 60.0 * 60.0 * 24.0)
    };

    let per_priority = [Priority::High, Priority::Medium, Priority::Low]
        .into_iter()
        .map(|priority| {
            let total = todos.iter().filter(|t| t.priority == priority).count();
            let done = todos
                .iter()
                .filter(|t| t.priority == priority && t.completed)
                .count();
            format!(
                "- {}: {} ({}/{})",
                priority,
                completion_rate(done, total),
                done,
                total
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let recent = todos
        .iter()
        .take(10)
        .map(|todo| {
            format!(
                "- {}: created {} {}",
                todo.title,
                todo.created_at.format("%Y-%m-%d"),
                if todo.completed {
                    "(completed)"
                } else {
                    "(pending)"
                }
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let frequencies = tag_frequencies(&todos);
    let unique_tags = frequencies.len();
    let untagged = todos.iter().filter(|t| t.tags.is_empty()).count();
    let top_tags = frequencies
        .iter()
        .take(3)
        .map(|(tag, count)| format!("{} ({})", tag, count))
        .collect::<Vec<_>>()
        .join(", ");
    let top_tags = if top_tags.is_empty() {
        "N/A".to_string()
    } else {
        top_tags
    };

    let deep_dive = if analysis_depth == "complete" {
        "\n\n**Complete analysis requested:** include advanced correlations, workflow suggestions, and predictive metrics."
    } else {
        ""
    };

    let text = format!(
        "Provide detailed insights about my productivity patterns based on the data below:\n\n\
         **Analysis depth:** {analysis_depth}\n\n\
         **Productivity data:**\n\
         - Total todos created: {total}\n\
         - Completed: {done}\n\
         - Pending: {pending}\n\
         - Overall completion rate: {rate}\n\
         - Average time to completion: {avg:.1} days\n\n\
         **Completion rate by priority:**\n{per_priority}\n\n\
         **Most recent todos:**\n{recent}\n\n\
         **Tags and categorization:**\n\
         - Unique tags in use: {unique_tags}\n\
         - Todos without tags: {untagged}\n\
         - Most productive tags: {top_tags}\n\n\
         Please analyze and provide:\n\
         1. **Behavior patterns:** trends in creation and completion\n\
         2. **Efficiency by category:** which kind of task gets finished most\n\
         3. **Improvement areas:** where to focus to raise productivity\n\
         4. **Strategic recommendations:** how to optimize the todo workflow\n\
         5. **Projections:** estimates based on the current history{deep_dive}",
        analysis_depth = analysis_depth,
        total = todos.len(),
        done = completed.len(),
        pending = todos.len() - completed.len(),
        rate = completion_rate(completed.len(), todos.len()),
        avg = avg_completion_days,
        per_priority = per_priority,
        recent = recent,
        unique_tags = unique_tags,
        untagged = untagged,
        top_tags = top_tags,
        deep_dive = deep_dive,
    );

    GetPromptResult::new(vec![PromptMessage::new_text(PromptMessageRole::User, text)])
        .with_description("Detailed insights about productivity patterns")
}
