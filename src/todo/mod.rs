//! Todo domain: entity model and MongoDB collection accessor.

pub mod model;
pub mod store;

pub use model::{NewTodo, Todo};
pub use store::TodoStore;
