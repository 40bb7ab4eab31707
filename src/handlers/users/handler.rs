//! User handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    constants::roles,
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    query::{ListUsersQuery, UserQuery},
    services::UserService,
    state::AppState,
};

use super::{
    request::UserPayload,
    response::{PagedUsersResponse, UserResponse},
};

/// List users after applying filtering, ordering and pagination
pub async fn list_users(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Query(raw): Query<ListUsersQuery>,
) -> AppResult<Json<PagedUsersResponse>> {
    let params = UserQuery::from_raw(raw).inspect_err(|_| {
        tracing::info!("Attempt to get paginated users with invalid filter parameters");
    })?;

    let (page, total_records) = UserService::list_users(state.db(), &params).await?;

    tracing::info!(
        page_number = params.page_number,
        page_size = params.page_size,
        total_records,
        "Paginated users response created"
    );

    Ok(Json(PagedUsersResponse {
        data: page.into_iter().map(UserResponse::from).collect(),
        page_number: params.page_number,
        page_size: params.page_size,
        total_records,
    }))
}

/// Get a specific user by ID
pub async fn get_user(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<UserResponse>> {
    let user = UserService::get_user(state.db(), id).await?;
    Ok(Json(user.into()))
}

/// Create a user
pub async fn create_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<UserPayload>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    auth_user.require_role(roles::EDITORS)?;

    let user = UserService::create_user(state.db(), &payload).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Update a user (full replace of everything but the id)
pub async fn update_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i32>,
    Json(payload): Json<UserPayload>,
) -> AppResult<StatusCode> {
    auth_user.require_role(roles::EDITORS)?;

    UserService::update_user(state.db(), id, &payload).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a user by ID
pub async fn delete_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    auth_user.require_role(roles::DELETERS)?;

    UserService::delete_user(state.db(), id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a role to a user.
///
/// Responds 304 when the user already holds the role; the role set is left
/// untouched in that case.
pub async fn add_role(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((id, role_id)): Path<(i32, i32)>,
) -> AppResult<Json<UserResponse>> {
    auth_user.require_role(roles::EDITORS)?;

    let user = UserService::add_role(state.db(), id, role_id).await?;

    Ok(Json(user.into()))
}
