//! Constraint checks for each operation's request type.
//!
//! Checks run in field declaration order and collect every violation, so a
//! request with a bad title and too many tags reports both. Inputs are
//! expected to be sanitized first; length rules apply to trimmed strings.

use uuid::Uuid;

use crate::store::models::{
    CreateTodoRequest, DESCRIPTION_MAX, DeleteTodoRequest, GetTodoRequest, LIMIT_MAX, LIMIT_MIN,
    ListTodosRequest, SearchTodosRequest, TAG_MAX, TAGS_MAX, TITLE_MAX, UpdateTodoRequest,
};

use super::error::{Issue, ValidationError};

/// Schema-level constraint checking for a boundary-crossing request.
pub trait Validate {
    /// Returns all constraint violations, or unit if the request is clean.
    fn validate(&self) -> Result<(), ValidationError>;
}

fn finish(issues: Vec<Issue>) -> Result<(), ValidationError> {
    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(issues))
    }
}

fn check_id(issues: &mut Vec<Issue>, id: &str) {
    if Uuid::parse_str(id).is_err() {
        issues.push(Issue::new("id", "must be a valid UUID"));
    }
}

fn check_title(issues: &mut Vec<Issue>, title: &str) {
    if title.is_empty() {
        issues.push(Issue::new("title", "must not be empty"));
    } else if title.chars().count() > TITLE_MAX {
        issues.push(Issue::new(
            "title",
            format!("must not exceed {} characters", TITLE_MAX),
        ));
    }
}

fn check_description(issues: &mut Vec<Issue>, description: &str) {
    if description.chars().count() > DESCRIPTION_MAX {
        issues.push(Issue::new(
            "description",
            format!("must not exceed {} characters", DESCRIPTION_MAX),
        ));
    }
}

fn check_tags(issues: &mut Vec<Issue>, tags: &[String]) {
    if tags.len() > TAGS_MAX {
        issues.push(Issue::new(
            "tags",
            format!("must not contain more than {} tags", TAGS_MAX),
        ));
    }
    for (index, tag) in tags.iter().enumerate() {
        if tag.is_empty() {
            issues.push(Issue::new(format!("tags.{}", index), "must not be empty"));
        } else if tag.chars().count() > TAG_MAX {
            issues.push(Issue::new(
                format!("tags.{}", index),
                format!("must not exceed {} characters", TAG_MAX),
            ));
        }
    }
}

impl Validate for CreateTodoRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut issues = Vec::new();
        check_title(&mut issues, &self.title);
        if let Some(description) = &self.description {
            check_description(&mut issues, description);
        }
        check_tags(&mut issues, &self.tags);
        finish(issues)
    }
}

impl Validate for UpdateTodoRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut issues = Vec::new();
        check_id(&mut issues, &self.id);
        if let Some(title) = &self.title {
            check_title(&mut issues, title);
        }
        if let Some(description) = &self.description {
            check_description(&mut issues, description);
        }
        if let Some(tags) = &self.tags {
            check_tags(&mut issues, tags);
        }
        finish(issues)
    }
}

impl Validate for DeleteTodoRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut issues = Vec::new();
        check_id(&mut issues, &self.id);
        finish(issues)
    }
}

impl Validate for GetTodoRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut issues = Vec::new();
        check_id(&mut issues, &self.id);
        finish(issues)
    }
}

impl Validate for ListTodosRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut issues = Vec::new();
        if self.limit < LIMIT_MIN || self.limit > LIMIT_MAX {
            issues.push(Issue::new(
                "limit",
                format!("must be between {} and {}", LIMIT_MIN, LIMIT_MAX),
            ));
        }
        finish(issues)
    }
}

impl Validate for SearchTodosRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut issues = Vec::new();
        if self.search_term.is_empty() {
            issues.push(Issue::new("search_term", "must not be empty"));
        }
        finish(issues)
    }
}
