//! MCP server implementation.
//!
//! `TodoMcpServer` binds the validated store operations to the protocol
//! surface: six tools, four resources, three prompts. Every tool runs the
//! same pipeline: sanitize the parameters, validate them against the request
//! schema, invoke the store, format the response.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use uuid::Uuid;

use crate::store::{
    CreateTodoRequest, DeleteTodoRequest, GetTodoRequest, ListTodosRequest, SearchTodosRequest,
    TodoStore, UpdateTodoRequest,
};
use crate::validate::{Validate, ValidationError, error_envelope, sanitized};

use super::{prompts, resources};

/// Render a validation failure as an error tool result carrying the envelope.
fn validation_failure(operation: &str, err: &ValidationError) -> CallToolResult {
    let envelope = error_envelope(err, operation);
    CallToolResult::error(vec![Content::text(format!(
        "{}: {}",
        envelope.error, envelope.details
    ))])
}

fn resource(uri: &str, name: &str, description: &str) -> Resource {
    Annotated::new(
        RawResource {
            uri: uri.to_string(),
            name: name.to_string(),
            title: None,
            description: Some(description.to_string()),
            mime_type: Some("application/json".to_string()),
            size: None,
            icons: None,
            meta: None,
        },
        None,
    )
}

/// MCP server over a shared todo store.
#[derive(Clone)]
pub struct TodoMcpServer {
    store: Arc<TodoStore>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl TodoMcpServer {
    /// Create a server handling requests against the given store.
    pub fn new(store: Arc<TodoStore>) -> Self {
        Self {
            store,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Create a new todo item with validation")]
    pub async fn create_todo(
        &self,
        params: Parameters<CreateTodoRequest>,
    ) -> Result<CallToolResult, McpError> {
        let request = sanitized(params.0);
        if let Err(err) = request.validate() {
            return Ok(validation_failure("create_todo", &err));
        }

        let todo = self.store.create(&request);

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Todo created successfully\n\n{}",
            serde_json::to_string_pretty(&todo).unwrap()
        ))]))
    }

    #[tool(
        description = "Update an existing todo item. Only the supplied fields change; setting completed to true stamps the completion time."
    )]
    pub async fn update_todo(
        &self,
        params: Parameters<UpdateTodoRequest>,
    ) -> Result<CallToolResult, McpError> {
        let request = sanitized(params.0);
        if let Err(err) = request.validate() {
            return Ok(validation_failure("update_todo", &err));
        }

        match self.store.update(&request) {
            Some(todo) => Ok(CallToolResult::success(vec![Content::text(format!(
                "Todo updated successfully\n\n{}",
                serde_json::to_string_pretty(&todo).unwrap()
            ))])),
            None => Ok(CallToolResult::success(vec![Content::text(format!(
                "No todo found with id {}",
                request.id
            ))])),
        }
    }

    #[tool(description = "Delete a todo item permanently")]
    pub async fn delete_todo(
        &self,
        params: Parameters<DeleteTodoRequest>,
    ) -> Result<CallToolResult, McpError> {
        let request = sanitized(params.0);
        if let Err(err) = request.validate() {
            return Ok(validation_failure("delete_todo", &err));
        }

        match self.store.delete(&request.id) {
            Ok(true) => Ok(CallToolResult::success(vec![Content::text(format!(
                "Todo {} deleted successfully",
                request.id
            ))])),
            Ok(false) => Ok(CallToolResult::success(vec![Content::text(format!(
                "No todo found with id {}",
                request.id
            ))])),
            Err(err) => Ok(validation_failure("delete_todo", &err)),
        }
    }

    #[tool(description = "List todos with filtering and pagination")]
    pub async fn list_todos(
        &self,
        params: Parameters<ListTodosRequest>,
    ) -> Result<CallToolResult, McpError> {
        let request = sanitized(params.0);
        if let Err(err) = request.validate() {
            return Ok(validation_failure("list_todos", &err));
        }

        let page = self.store.list(&request);

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Found {} of {} todo(s)\n\n{}",
            page.todos.len(),
            page.total,
            serde_json::to_string_pretty(&page).unwrap()
        ))]))
    }

    #[tool(description = "Get a specific todo by ID")]
    pub async fn get_todo(
        &self,
        params: Parameters<GetTodoRequest>,
    ) -> Result<CallToolResult, McpError> {
        let request = sanitized(params.0);
        if let Err(err) = request.validate() {
            return Ok(validation_failure("get_todo", &err));
        }

        let todo = Uuid::parse_str(&request.id)
            .ok()
            .and_then(|id| self.store.get(id));

        match todo {
            Some(todo) => Ok(CallToolResult::success(vec![Content::text(format!(
                "Todo found\n\n{}",
                serde_json::to_string_pretty(&todo).unwrap()
            ))])),
            None => Ok(CallToolResult::success(vec![Content::text(format!(
                "No todo found with id {}",
                request.id
            ))])),
        }
    }

    #[tool(description = "Search todos by title or description (case-insensitive substring match)")]
    pub async fn search_todos(
        &self,
        params: Parameters<SearchTodosRequest>,
    ) -> Result<CallToolResult, McpError> {
        let request = sanitized(params.0);
        if let Err(err) = request.validate() {
            return Ok(validation_failure("search_todos", &err));
        }

        let todos = self.store.search(&request);

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Search for \"{}\" returned {} result(s)\n\n{}",
            request.search_term,
            todos.len(),
            serde_json::to_string_pretty(&todos).unwrap()
        ))]))
    }
}

#[tool_handler]
impl ServerHandler for TodoMcpServer {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::default();
        server_info.name = "todo-mcp".to_string();
        server_info.title = Some("Todo Manager".to_string());
        server_info.version = env!("CARGO_PKG_VERSION").to_string();

        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder()
            .enable_tools()
            .enable_resources()
            .enable_prompts()
            .build();
        info.server_info = server_info;
        info.instructions = Some(
            "Todo MCP server - manage an in-memory todo collection.\n\n\
                 ## Tools\n\
                 - create_todo, update_todo, delete_todo - mutate the collection\n\
                 - list_todos - filter (status, priority, tags) and paginate\n\
                 - get_todo - fetch one todo by UUID\n\
                 - search_todos - case-insensitive substring search on title/description\n\n\
                 ## Resources\n\
                 - todo://all, todo://completed, todo://pending - collection views\n\
                 - todo://stats - counts and completion rate\n\n\
                 ## Prompts\n\
                 - todo_summary, todo_prioritization, todo_insights - analysis prompts built from live data"
                .to_string(),
        );
        info
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult {
            resources: vec![
                resource(
                    "todo://all",
                    "All Todos",
                    "Complete list of all todos with full details",
                ),
                resource(
                    "todo://stats",
                    "Todo Statistics",
                    "Statistics about todos (total, completed, pending, completion rate)",
                ),
                resource(
                    "todo://completed",
                    "Completed Todos",
                    "List of all completed todos",
                ),
                resource(
                    "todo://pending",
                    "Pending Todos",
                    "List of all pending todos",
                ),
            ],
            next_cursor: None,
            meta: None,
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        let uri = &request.uri;

        let body = match uri.as_str() {
            "todo://all" => resources::all_todos_json(&self.store),
            "todo://stats" => resources::stats_json(&self.store),
            "todo://completed" => resources::completed_todos_json(&self.store),
            "todo://pending" => resources::pending_todos_json(&self.store),
            _ => {
                return Err(McpError::resource_not_found(
                    format!("Unknown resource: {}", uri),
                    None,
                ));
            }
        };

        Ok(ReadResourceResult::new(vec![
            ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: Some("application/json".to_string()),
                text: body,
                meta: None,
            },
        ]))
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        Ok(ListPromptsResult {
            prompts: vec![
                Prompt::new(
                    "todo_summary",
                    Some("Analytical summary of the todo collection with statistics"),
                    Some(vec![
                        PromptArgument::new("period")
                            .with_description("Period label for the analysis")
                            .with_required(false),
                        PromptArgument::new("include_completed")
                            .with_description(
                                "Include completed todos in the listing ('false' to exclude)",
                            )
                            .with_required(false),
                    ]),
                ),
                Prompt::new(
                    "todo_prioritization",
                    Some("Intelligent prioritization suggestions for pending todos"),
                    Some(vec![
                        PromptArgument::new("context")
                            .with_description("Additional context for prioritization")
                            .with_required(false),
                        PromptArgument::new("focus_area")
                            .with_description("Focus area (work, personal, studies, ...)")
                            .with_required(false),
                    ]),
                ),
                Prompt::new(
                    "todo_insights",
                    Some("Detailed insights about productivity patterns"),
                    Some(vec![
                        PromptArgument::new("analysis_depth")
                            .with_description(
                                "Depth of the analysis: surface, detailed, or complete",
                            )
                            .with_required(false),
                    ]),
                ),
            ],
            next_cursor: None,
            meta: None,
        })
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        match request.name.as_str() {
            "todo_summary" => Ok(prompts::todo_summary_prompt(&self.store, request.arguments)),
            "todo_prioritization" => Ok(prompts::todo_prioritization_prompt(
                &self.store,
                request.arguments,
            )),
            "todo_insights" => Ok(prompts::todo_insights_prompt(
                &self.store,
                request.arguments,
            )),
            _ => Err(McpError::invalid_params(
                format!("Unknown prompt: {}", request.name),
                None,
            )),
        }
    }
}
