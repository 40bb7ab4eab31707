//! Authentication middleware

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::AppError, services::AuthService, state::AppState};

/// Authenticated user extracted from the verified JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl AuthenticatedUser {
    /// Check this user's role against an allow-list
    pub fn require_role(&self, allowed: &[&str]) -> Result<(), AppError> {
        if allowed.contains(&self.role.as_str()) {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "No permissions for this action for your role".to_string(),
            ))
        }
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Authentication middleware: verifies the bearer token and injects the
/// authenticated user into request extensions
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let Some(auth_header) = auth_header else {
        debug!(path = %path, "Auth failed: No Authorization header");
        return Err(AppError::Unauthorized);
    };

    let Some(token) = auth_header.strip_prefix("Bearer ") else {
        debug!(path = %path, "Auth failed: Invalid Authorization format (expected 'Bearer <token>')");
        return Err(AppError::Unauthorized);
    };

    let claims = AuthService::verify_token(token, &state.config().jwt.secret).map_err(|e| {
        debug!(path = %path, error = ?e, "Auth failed: Token verification failed");
        e
    })?;

    let user_id: i32 = claims.sub.parse().map_err(|_| {
        debug!(path = %path, sub = %claims.sub, "Auth failed: Invalid user ID in token");
        AppError::InvalidToken
    })?;

    let user = AuthenticatedUser {
        id: user_id,
        name: claims.name,
        email: claims.email,
        role: claims.role,
    };

    debug!(path = %path, user_id, role = %user.role, "User authenticated successfully");

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::roles;

    fn user_with_role(role: &str) -> AuthenticatedUser {
        AuthenticatedUser {
            id: 1,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn editors_can_edit_but_plain_users_cannot() {
        assert!(user_with_role(roles::SUPPORT).require_role(roles::EDITORS).is_ok());
        assert!(user_with_role(roles::USER).require_role(roles::EDITORS).is_err());
    }

    #[test]
    fn only_admins_can_delete() {
        assert!(user_with_role(roles::SUPER_ADMIN).require_role(roles::DELETERS).is_ok());
        assert!(user_with_role(roles::SUPPORT).require_role(roles::DELETERS).is_err());
    }
}
