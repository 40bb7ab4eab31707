//! Role handler implementations

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::Role,
    services::RoleService,
    state::AppState,
};

/// List all defined roles
pub async fn list_roles(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> AppResult<Json<Vec<Role>>> {
    let roles = RoleService::list_roles(state.db()).await?;
    Ok(Json(roles))
}

/// Get a specific role by ID
pub async fn get_role(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Role>> {
    let role = RoleService::get_role(state.db(), id).await?;
    Ok(Json(role))
}
