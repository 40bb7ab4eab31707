//! Authentication request DTOs

use serde::Deserialize;

/// Login credentials: the registered name and email pair.
///
/// Fields are optional at the wire level so missing values surface as batch
/// validation violations rather than a deserialization error.
#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub name: Option<String>,
    pub email: Option<String>,
}
