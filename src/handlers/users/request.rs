//! User request DTOs

use serde::Deserialize;

/// Create/update user payload.
///
/// Every field is optional at the wire level so that missing values reach the
/// batch validator and come back as collected violations instead of a serde
/// rejection on the first absent field.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
    /// Ids of the roles the user holds
    pub roles: Option<Vec<i32>>,
}
