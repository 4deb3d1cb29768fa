//! Todo store and domain models.
//!
//! - `models`: the entity, the operation request types, filters, and result
//!   shapes
//! - `todo`: the in-memory store owning the collection and all
//!   query/mutation logic

pub mod models;
mod todo;

#[cfg(test)]
mod todo_test;

pub use models::*;
pub use todo::TodoStore;
