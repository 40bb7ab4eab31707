//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod role_repo;
pub mod user_repo;

pub use role_repo::RoleRepository;
pub use user_repo::UserRepository;
