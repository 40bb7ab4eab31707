//! Authentication handler implementations

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    services::AuthService,
    state::AppState,
    validation,
};

use super::{request::LoginPayload, response::TokenResponse};

/// Issue a JWT for the user with the given name and email
pub async fn issue_token(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> AppResult<Json<TokenResponse>> {
    validation::validate_login(&payload)?;

    // Validation guarantees both fields are present
    let (_, access_token, expires_in) = AuthService::issue_token(
        state.db(),
        &state.config().jwt,
        payload.name.as_deref().unwrap_or_default(),
        payload.email.as_deref().unwrap_or_default(),
    )
    .await?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in,
    }))
}
