//! MongoDB-backed todo API service.
//!
//! A small HTTP service exposing CRUD over a single collection of todo
//! records. Each handler performs exactly one driver call and serializes
//! the result as JSON.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Service and API error types
//! - [`todo`]: Todo entity and MongoDB collection accessor
//! - [`api`]: HTTP handlers and router

pub mod api;
pub mod config;
pub mod error;
pub mod todo;

pub use config::Config;
pub use error::{ApiError, Result, ServiceError};
