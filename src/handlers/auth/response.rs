//! Authentication response DTOs

use serde::Serialize;

/// Issued token response
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}
