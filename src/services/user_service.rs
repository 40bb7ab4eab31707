//! User service

use sqlx::PgPool;

use crate::{
    db::repositories::{RoleRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::users::request::UserPayload,
    models::{User, UserWithRoles},
    query::UserQuery,
    validation,
};

/// User service for business logic
pub struct UserService;

impl UserService {
    /// Get user by ID with roles attached
    pub async fn get_user(pool: &PgPool, id: i32) -> AppResult<UserWithRoles> {
        UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No user with such ID {id}")))
    }

    /// List users after filtering, sorting and pagination.
    ///
    /// The returned count is the total over the filtered set before
    /// pagination; zero matches is an empty page, not an error.
    pub async fn list_users(
        pool: &PgPool,
        params: &UserQuery,
    ) -> AppResult<(Vec<UserWithRoles>, i64)> {
        UserRepository::list(pool, params).await
    }

    /// Create a user after batch validation
    pub async fn create_user(pool: &PgPool, payload: &UserPayload) -> AppResult<UserWithRoles> {
        validation::validate_user(pool, payload, None).await?;

        // Validation guarantees presence of every field; the unique index on
        // email still backs the uniqueness pre-check under concurrent inserts
        let user = UserRepository::create(
            pool,
            payload.name.as_deref().unwrap_or_default(),
            payload.age.unwrap_or_default(),
            payload.email.as_deref().unwrap_or_default(),
            payload.roles.as_deref().unwrap_or_default(),
        )
        .await?;

        tracing::info!(
            user_id = user.user.id,
            email = %user.user.email,
            "New user added"
        );

        Ok(user)
    }

    /// Full-replace update: every field except the id is overwritten.
    ///
    /// Last writer wins; concurrent updates to the same user are not
    /// detected.
    pub async fn update_user(pool: &PgPool, id: i32, payload: &UserPayload) -> AppResult<()> {
        validation::validate_user(pool, payload, Some(id)).await?;

        if UserRepository::find_by_id(pool, id).await?.is_none() {
            tracing::info!(user_id = id, "User not found, nothing to update");
            return Err(AppError::NotFound(format!("User with id {id} not found")));
        }

        UserRepository::update(
            pool,
            id,
            payload.name.as_deref().unwrap_or_default(),
            payload.age.unwrap_or_default(),
            payload.email.as_deref().unwrap_or_default(),
            payload.roles.as_deref().unwrap_or_default(),
        )
        .await?;

        tracing::info!(user_id = id, "User updated successfully");

        Ok(())
    }

    /// Delete user by ID
    pub async fn delete_user(pool: &PgPool, id: i32) -> AppResult<User> {
        let deleted = UserRepository::delete(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No user with such ID {id}")))?;

        tracing::info!(user_id = id, "User deleted");

        Ok(deleted)
    }

    /// Add a role to a user.
    ///
    /// Idempotent by design: if the user already holds the role the store is
    /// left untouched and the distinguished `NotModified` outcome is
    /// returned. Missing user or role are each a not-found condition.
    pub async fn add_role(pool: &PgPool, user_id: i32, role_id: i32) -> AppResult<UserWithRoles> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {user_id} not found")))?;

        let role = RoleRepository::find_by_id(pool, role_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Role with id {role_id} not found")))?;

        if user.has_role(role.id) {
            tracing::info!(user_id, role_id, "User already has role, no data modification");
            return Err(AppError::NotModified);
        }

        UserRepository::add_role(pool, user_id, role_id).await?;

        tracing::info!(user_id, role_id, "New role added to user");

        Self::get_user(pool, user_id).await
    }
}
