//! Authentication service
//!
//! Token issuance is deliberately passwordless: a user authenticates with the
//! name and email pair they are registered under and receives a short-lived
//! HS256 token carrying their identity and highest role.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::{
    config::JwtConfig,
    constants::roles,
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::UserWithRoles,
};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user id
    pub name: String,
    pub email: String,
    pub age: i32,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Authenticate by name and email and issue a signed token.
    ///
    /// Returns the authenticated user, the encoded token and its lifetime in
    /// seconds. An unknown name/email pair is a not-found condition.
    pub async fn issue_token(
        pool: &PgPool,
        config: &JwtConfig,
        name: &str,
        email: &str,
    ) -> AppResult<(UserWithRoles, String, i64)> {
        let user = UserRepository::find_by_name_and_email(pool, name, email)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "User with name {name} and email address {email} is not found"
                ))
            })?;

        let (token, expires_in) = Self::generate_token(&user, config)?;

        tracing::info!(
            email = %user.user.email,
            role = %user.highest_role().map(|r| r.name.as_str()).unwrap_or(roles::USER),
            "User authorized successfully"
        );

        Ok((user, token, expires_in))
    }

    /// Verify a token and extract its claims
    pub fn verify_token(token: &str, secret: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    /// Generate a signed token for the user.
    ///
    /// The role claim carries the name of the user's highest-id role.
    fn generate_token(user: &UserWithRoles, config: &JwtConfig) -> AppResult<(String, i64)> {
        let now = Utc::now();
        let expires_at = now + Duration::seconds(config.expiry_seconds);

        let claims = Claims {
            sub: user.user.id.to_string(),
            name: user.user.name.clone(),
            email: user.user.email.clone(),
            age: user.user.age,
            role: user
                .highest_role()
                .map(|r| r.name.clone())
                .unwrap_or_else(|| roles::USER.to_string()),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok((token, config.expiry_seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, User};

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            expiry_seconds: 180,
        }
    }

    fn test_user() -> UserWithRoles {
        UserWithRoles {
            user: User {
                id: 7,
                name: "Alice".to_string(),
                age: 30,
                email: "alice@example.com".to_string(),
            },
            roles: vec![
                Role { id: 1, name: "User".to_string() },
                Role { id: 4, name: "SuperAdmin".to_string() },
            ],
        }
    }

    #[test]
    fn issued_token_round_trips_through_verification() {
        let config = test_config();
        let (token, expires_in) = AuthService::generate_token(&test_user(), &config).unwrap();
        assert_eq!(expires_in, 180);

        let claims = AuthService::verify_token(&token, &config.secret).unwrap();
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.name, "Alice");
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.age, 30);
        assert_eq!(claims.role, "SuperAdmin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn verification_rejects_a_foreign_secret() {
        let config = test_config();
        let (token, _) = AuthService::generate_token(&test_user(), &config).unwrap();

        let result = AuthService::verify_token(&token, "other-secret");
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }
}
