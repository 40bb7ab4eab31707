//! Role repository

use sqlx::PgPool;

use crate::{error::AppResult, models::Role};

/// Repository for role database operations
pub struct RoleRepository;

impl RoleRepository {
    /// List all defined roles
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Role>> {
        let roles = sqlx::query_as::<_, Role>(r#"SELECT * FROM roles ORDER BY id"#)
            .fetch_all(pool)
            .await?;

        Ok(roles)
    }

    /// Find role by ID
    pub async fn find_by_id(pool: &PgPool, id: i32) -> AppResult<Option<Role>> {
        let role = sqlx::query_as::<_, Role>(r#"SELECT * FROM roles WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(role)
    }

    /// Resolve the subset of the given ids that name existing roles.
    ///
    /// Duplicates collapse; the result is in ascending id order.
    pub async fn find_existing_ids(pool: &PgPool, ids: &[i32]) -> AppResult<Vec<i32>> {
        let ids: Vec<i32> = sqlx::query_scalar(
            r#"SELECT id FROM roles WHERE id = ANY($1) ORDER BY id"#,
        )
        .bind(ids.to_vec())
        .fetch_all(pool)
        .await?;

        Ok(ids)
    }
}
