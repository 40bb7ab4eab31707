//! User repository

use std::collections::HashMap;

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{Role, User, UserWithRoles},
    query::{builder, UserQuery},
};

use super::RoleRepository;

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user together with its role set
    pub async fn create(
        pool: &PgPool,
        name: &str,
        age: i32,
        email: &str,
        role_ids: &[i32],
    ) -> AppResult<UserWithRoles> {
        let mut tx = pool.begin().await?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, age, email)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(age)
        .bind(email)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO user_roles (user_id, role_id)
            SELECT $1, role_id FROM UNNEST($2::int[]) AS role_id
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(user.id)
        .bind(role_ids.to_vec())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        let roles = Self::load_roles(pool, &[user.id])
            .await?
            .remove(&user.id)
            .unwrap_or_default();

        Ok(UserWithRoles { user, roles })
    }

    /// Find user by ID, with roles attached
    pub async fn find_by_id(pool: &PgPool, id: i32) -> AppResult<Option<UserWithRoles>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        match user {
            Some(user) => {
                let roles = Self::load_roles(pool, &[user.id])
                    .await?
                    .remove(&user.id)
                    .unwrap_or_default();
                Ok(Some(UserWithRoles { user, roles }))
            }
            None => Ok(None),
        }
    }

    /// Find user by email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE email = $1"#)
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Find user by name and email (for token issuance)
    pub async fn find_by_name_and_email(
        pool: &PgPool,
        name: &str,
        email: &str,
    ) -> AppResult<Option<UserWithRoles>> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT * FROM users WHERE name = $1 AND email = $2"#,
        )
        .bind(name)
        .bind(email)
        .fetch_optional(pool)
        .await?;

        match user {
            Some(user) => {
                let roles = Self::load_roles(pool, &[user.id])
                    .await?
                    .remove(&user.id)
                    .unwrap_or_default();
                Ok(Some(UserWithRoles { user, roles }))
            }
            None => Ok(None),
        }
    }

    /// Full-replace update: overwrite every field except the id and swap the
    /// role set for the given one. No-op if the user does not exist.
    pub async fn update(
        pool: &PgPool,
        id: i32,
        name: &str,
        age: i32,
        email: &str,
        role_ids: &[i32],
    ) -> AppResult<()> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            r#"
            UPDATE users
            SET name = $2, age = $3, email = $4
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(age)
        .bind(email)
        .execute(&mut *tx)
        .await?;

        sqlx::query(r#"DELETE FROM user_roles WHERE user_id = $1"#)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO user_roles (user_id, role_id)
            SELECT $1, role_id FROM UNNEST($2::int[]) AS role_id
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(id)
        .bind(role_ids.to_vec())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }

    /// Delete user by ID, returning the removed row if it existed
    pub async fn delete(pool: &PgPool, id: i32) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"DELETE FROM users WHERE id = $1 RETURNING *"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// Attach a role to a user
    pub async fn add_role(pool: &PgPool, user_id: i32, role_id: i32) -> AppResult<()> {
        sqlx::query(r#"INSERT INTO user_roles (user_id, role_id) VALUES ($1, $2)"#)
            .bind(user_id)
            .bind(role_id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// List users after applying filtering, sorting and pagination.
    ///
    /// Returns the selected page with roles attached plus the total record
    /// count over the filtered set before pagination.
    pub async fn list(
        pool: &PgPool,
        params: &UserQuery,
    ) -> AppResult<(Vec<UserWithRoles>, i64)> {
        // Requested role ids are resolved against the roles table first:
        // unknown ids drop out of the filter, duplicates collapse
        let role_ids = if params.role_ids.is_empty() {
            Vec::new()
        } else {
            RoleRepository::find_existing_ids(pool, &params.role_ids).await?
        };

        let total: i64 = builder::build_count_query(params, &role_ids)
            .build_query_scalar()
            .fetch_one(pool)
            .await?;

        let users: Vec<User> = builder::build_list_query(params, &role_ids)
            .build_query_as()
            .fetch_all(pool)
            .await?;

        let user_ids: Vec<i32> = users.iter().map(|u| u.id).collect();
        let mut roles_by_user = Self::load_roles(pool, &user_ids).await?;

        let page = users
            .into_iter()
            .map(|user| {
                let roles = roles_by_user.remove(&user.id).unwrap_or_default();
                UserWithRoles { user, roles }
            })
            .collect();

        Ok((page, total))
    }

    /// Load the role sets of the given users in one query
    async fn load_roles(pool: &PgPool, user_ids: &[i32]) -> AppResult<HashMap<i32, Vec<Role>>> {
        #[derive(sqlx::FromRow)]
        struct UserRoleRow {
            user_id: i32,
            id: i32,
            name: String,
        }

        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, UserRoleRow>(
            r#"
            SELECT ur.user_id, r.id, r.name
            FROM user_roles ur
            JOIN roles r ON r.id = ur.role_id
            WHERE ur.user_id = ANY($1)
            ORDER BY r.id
            "#,
        )
        .bind(user_ids.to_vec())
        .fetch_all(pool)
        .await?;

        let mut by_user: HashMap<i32, Vec<Role>> = HashMap::new();
        for row in rows {
            by_user
                .entry(row.user_id)
                .or_default()
                .push(Role { id: row.id, name: row.name });
        }

        Ok(by_user)
    }
}
