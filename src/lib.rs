//! userdir - User Directory Service
//!
//! This library provides the core functionality for the user directory
//! service: CRUD over users and their roles, with filtered, sorted and
//! paginated listings and JWT-based access control.
//!
//! # Features
//!
//! - Paginated user listing with prefix, age-range and role-set filters
//! - Dynamic sorting over a closed set of user fields, including a
//!   composite sort over the role set
//! - Batch validation that reports every violation at once
//! - Idempotent role assignment with a distinguished "unchanged" outcome
//! - Passwordless name+email token issuance
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs
//! - **Query**: Filter normalization and SQL assembly for the user listing

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod query;
pub mod services;
pub mod state;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
