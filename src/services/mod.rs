//! Business logic services

pub mod auth_service;
pub mod role_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use role_service::RoleService;
pub use user_service::UserService;
