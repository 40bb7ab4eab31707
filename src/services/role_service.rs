//! Role service

use sqlx::PgPool;

use crate::{
    db::repositories::RoleRepository,
    error::{AppError, AppResult},
    models::Role,
};

/// Role service for business logic.
///
/// Roles are reference data, so only read operations exist.
pub struct RoleService;

impl RoleService {
    /// List all defined roles
    pub async fn list_roles(pool: &PgPool) -> AppResult<Vec<Role>> {
        RoleRepository::list(pool).await
    }

    /// Get role by ID
    pub async fn get_role(pool: &PgPool, id: i32) -> AppResult<Role> {
        RoleRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No role with such ID {id}")))
    }
}
