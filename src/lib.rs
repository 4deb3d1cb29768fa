//! Validated in-memory todo manager exposed over the Model Context Protocol.
//!
//! The crate is layered leaf-first:
//!
//! - [`validate`]: sanitization, schema constraint checks, and error
//!   normalization - every boundary-crossing input passes through here
//! - [`store`]: the entity schema and the in-memory store with filtering,
//!   pagination, search, and stats
//! - [`mcp`]: the protocol adapter binding store operations to MCP tools,
//!   resources, and prompts

pub mod mcp;
pub mod store;
pub mod validate;
