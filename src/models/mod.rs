//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod role;
pub mod user;

pub use role::*;
pub use user::*;
